//! Query builder and finalized request descriptor.
//!
//! ```rust,ignore
//! use ferroquote_core::{Field, QuoteClient, QuoteConfig};
//!
//! let client = QuoteClient::new(QuoteConfig::default())?;
//! let securities = client
//!     .query()
//!     .with_symbols(["C", "AAPL"])?
//!     .with_fields(["Bid", "Ask", "LongName"])?
//!     .with_fields([Field::RegularMarketPrice, Field::Currency])?
//!     .execute()
//!     .await?;
//! ```

use crate::client::QuoteClient;
use crate::config::QuoteConfig;
use crate::error::{ArgumentError, QuoteError};
use crate::field::FieldKey;
use crate::http_client::HttpRequest;
use crate::security::Securities;

/// Validated request: symbols plus an optional field filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    symbols: Vec<String>,
    fields: Vec<FieldKey>,
}

impl QuoteRequest {
    /// Finalize a request. An empty `fields` list means "service defaults".
    pub fn new(symbols: Vec<String>, fields: Vec<FieldKey>) -> Result<Self, ArgumentError> {
        if symbols.is_empty() {
            return Err(ArgumentError::EmptySymbols);
        }
        for (index, symbol) in symbols.iter().enumerate() {
            check_symbol(&symbols[..index], symbol)?;
        }
        for (index, field) in fields.iter().enumerate() {
            check_field(&fields[..index], field)?;
        }
        Ok(Self { symbols, fields })
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn fields(&self) -> &[FieldKey] {
        &self.fields
    }

    pub fn has_field_filter(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Request URL without the crumb parameter.
    pub fn url(&self, base_url: &str) -> String {
        let separator = if base_url.contains('?') { '&' } else { '?' };
        let mut url = format!(
            "{}{}symbols={}",
            base_url.trim_end(),
            separator,
            join_encoded(self.symbols.iter().map(String::as_str))
        );
        if self.has_field_filter() {
            url.push_str("&fields=");
            url.push_str(&join_encoded(self.fields.iter().map(FieldKey::as_str)));
        }
        url
    }

    /// Render the one HTTP call this request maps to.
    pub fn to_http_request(&self, config: &QuoteConfig) -> HttpRequest {
        let mut url = self.url(&config.base_url);
        if let Some(crumb) = &config.crumb {
            url.push_str("&crumb=");
            url.push_str(&urlencoding::encode(crumb));
        }

        let mut request = HttpRequest::get(url)
            .with_header("accept", "application/json")
            .with_auth(&config.auth());
        if let Some(timeout_ms) = config.timeout_ms {
            request = request.with_timeout_ms(timeout_ms);
        }
        request
    }
}

/// Accumulates symbols and fields for one quote request.
///
/// Each registration call validates eagerly, so a builder that exists only
/// holds duplicate-free state. [`QuoteQuery::execute`] re-checks before the
/// call goes out.
#[derive(Debug, Clone)]
pub struct QuoteQuery<'a> {
    client: &'a QuoteClient,
    symbols: Vec<String>,
    fields: Vec<FieldKey>,
}

impl<'a> QuoteQuery<'a> {
    pub fn new(client: &'a QuoteClient) -> Self {
        Self {
            client,
            symbols: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Register symbols. Duplicates are exact, case-sensitive matches across
    /// all calls.
    pub fn with_symbols<I, S>(mut self, symbols: I) -> Result<Self, QuoteError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for symbol in symbols {
            let symbol = symbol.into();
            check_symbol(&self.symbols, &symbol)?;
            self.symbols.push(symbol);
        }
        if self.symbols.is_empty() {
            return Err(ArgumentError::EmptySymbols.into());
        }
        Ok(self)
    }

    /// Register fields by [`crate::Field`] or by name. Names the service does
    /// not know are accepted and passed through.
    pub fn with_fields<I, F>(mut self, fields: I) -> Result<Self, QuoteError>
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldKey>,
    {
        for field in fields {
            let field = field.into();
            check_field(&self.fields, &field)?;
            self.fields.push(field);
        }
        Ok(self)
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn fields(&self) -> &[FieldKey] {
        &self.fields
    }

    pub fn build(&self) -> Result<QuoteRequest, QuoteError> {
        Ok(QuoteRequest::new(self.symbols.clone(), self.fields.clone())?)
    }

    /// Validate, issue exactly one request, and map the response.
    pub async fn execute(self) -> Result<Securities, QuoteError> {
        let request = self.build()?;
        self.client.fetch(&request).await
    }
}

fn check_symbol(registered: &[String], symbol: &str) -> Result<(), ArgumentError> {
    if symbol.trim().is_empty() {
        return Err(ArgumentError::BlankSymbol);
    }
    if registered.iter().any(|existing| existing == symbol) {
        return Err(ArgumentError::DuplicateSymbol {
            symbol: symbol.to_owned(),
        });
    }
    Ok(())
}

fn check_field(registered: &[FieldKey], field: &FieldKey) -> Result<(), ArgumentError> {
    if registered.contains(field) {
        return Err(ArgumentError::DuplicateField {
            field: field.as_str().to_owned(),
        });
    }
    Ok(())
}

fn join_encoded<'s>(values: impl Iterator<Item = &'s str>) -> String {
    values
        .map(|value| urlencoding::encode(value).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}
