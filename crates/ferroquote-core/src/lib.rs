//! # Ferroquote Core
//!
//! Quote client for the Yahoo Finance v7 quote endpoint.
//!
//! ## Overview
//!
//! - **Query builder** collecting symbols and fields, with duplicate checks
//! - **Field model** where enum and string field names share one canonical key
//! - **Response mapper** turning the loosely typed payload into per-symbol records
//! - **HTTP client seam** so the transport can be swapped or mocked
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client binding transport and configuration |
//! | [`config`] | Endpoint, timeout and credential settings |
//! | [`error`] | Argument, field and transport errors |
//! | [`field`] | Known fields and the canonical field key |
//! | [`http_client`] | HTTP client abstraction |
//! | [`query`] | Query builder and request descriptor |
//! | [`response`] | Payload to record mapping |
//! | [`security`] | Per-symbol records and the result map |
//! | [`timestamp`] | UTC timestamps |
//! | [`value`] | Dynamically typed field values |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ferroquote_core::{Field, QuoteClient, QuoteConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = QuoteClient::new(QuoteConfig::default())?;
//!
//!     let securities = client
//!         .query()
//!         .with_symbols(["C", "AAPL"])?
//!         .with_fields(["Bid", "Ask", "Tradeable", "LongName"])?
//!         .with_fields([Field::RegularMarketPrice, Field::Currency])?
//!         .execute()
//!         .await?;
//!
//!     if let Some(apple) = securities.get("AAPL") {
//!         println!("{}: {}", apple.long_name()?, apple.bid()?);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use ferroquote_core::{ErrorKind, QuoteError};
//!
//! fn handle_error(error: QuoteError) {
//!     match error.kind() {
//!         ErrorKind::Argument => {
//!             // Fix the query
//!         }
//!         ErrorKind::FieldNotFound => {
//!             // The service did not return that field for this symbol
//!         }
//!         ErrorKind::Transport => {
//!             // Network, status or payload problem
//!         }
//!         _ => {}
//!     }
//! }
//! ```
//!
//! A symbol the service does not recognize is not an error; it is simply
//! missing from the returned [`Securities`].

pub mod client;
pub mod config;
pub mod error;
pub mod field;
pub mod http_client;
pub mod query;
pub mod response;
pub mod security;
pub mod timestamp;
pub mod value;

pub use client::QuoteClient;

pub use config::{QuoteConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

pub use error::{ArgumentError, ConfigError, ErrorKind, FieldError, QuoteError, TransportError};

pub use field::{Field, FieldKey, FieldKind};

pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient,
};

pub use query::{QuoteQuery, QuoteRequest};

pub use security::{Securities, Security};

pub use timestamp::UtcDateTime;

pub use value::FieldValue;
