use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use tracing::debug;

use crate::config::QuoteConfig;
use crate::error::{QuoteError, TransportError};
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::query::{QuoteQuery, QuoteRequest};
use crate::response;
use crate::security::Securities;

/// Binds a transport to a configuration and hands out query builders.
///
/// Cloning is cheap; clones share the transport.
#[derive(Clone)]
pub struct QuoteClient {
    http_client: Arc<dyn HttpClient>,
    config: QuoteConfig,
}

impl QuoteClient {
    /// Client backed by reqwest.
    pub fn new(config: QuoteConfig) -> Result<Self, QuoteError> {
        config.validate()?;
        let http_client = Arc::new(ReqwestHttpClient::new(&config.user_agent));
        Ok(Self {
            http_client,
            config,
        })
    }

    /// Client configured from `FERROQUOTE_*` / `YAHOO_*` environment variables.
    pub fn from_env() -> Result<Self, QuoteError> {
        Self::new(QuoteConfig::from_env()?)
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: QuoteConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    pub fn query(&self) -> QuoteQuery<'_> {
        QuoteQuery::new(self)
    }

    /// Issue one request for an already validated descriptor.
    pub async fn fetch(&self, request: &QuoteRequest) -> Result<Securities, QuoteError> {
        debug!(
            symbols = request.symbols().len(),
            fields = request.fields().len(),
            url = %request.url(&self.config.base_url),
            "requesting quotes"
        );

        let response = self
            .http_client
            .execute(request.to_http_request(&self.config))
            .await?;

        if !response.is_success() {
            return Err(TransportError::Status {
                status: response.status,
                body: response.body,
            }
            .into());
        }

        Ok(response::parse(&response.body)?)
    }
}

impl Debug for QuoteClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteClient")
            .field("base_url", &self.config.base_url)
            .field("timeout_ms", &self.config.timeout_ms)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::http_client::NoopHttpClient;

    #[test]
    fn new_rejects_invalid_base_url() {
        let error = QuoteClient::new(QuoteConfig::default().with_base_url("quote.example"))
            .expect_err("must fail");
        assert_eq!(error.kind(), ErrorKind::Config);
    }

    #[test]
    fn debug_output_hides_credentials() {
        let client = QuoteClient::with_http_client(
            Arc::new(NoopHttpClient),
            QuoteConfig::default().with_cookie("B=secret"),
        );
        assert!(!format!("{client:?}").contains("secret"));
    }

    #[tokio::test]
    async fn noop_transport_yields_empty_securities() {
        let client = QuoteClient::with_http_client(Arc::new(NoopHttpClient), QuoteConfig::default());
        let securities = client
            .query()
            .with_symbols(["C"])
            .expect("valid symbols")
            .execute()
            .await
            .expect("empty payload maps cleanly");
        assert!(securities.is_empty());
    }
}
