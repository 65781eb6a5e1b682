//! Client configuration.
//!
//! Defaults target the public Yahoo Finance v7 quote endpoint. Every value
//! can be overridden from the environment:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `FERROQUOTE_BASE_URL` | [`QuoteConfig::base_url`] |
//! | `FERROQUOTE_TIMEOUT_MS` | [`QuoteConfig::timeout_ms`] |
//! | `FERROQUOTE_USER_AGENT` | [`QuoteConfig::user_agent`] |
//! | `YAHOO_COOKIE` | [`QuoteConfig::cookie`] |
//! | `YAHOO_CRUMB` | [`QuoteConfig::crumb`] |

use serde::Deserialize;

use crate::error::ConfigError;
use crate::http_client::HttpAuth;

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com/v7/finance/quote";
pub const DEFAULT_USER_AGENT: &str = concat!("ferroquote/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    pub base_url: String,
    /// Per-request timeout handed to the transport. `None` imposes none.
    pub timeout_ms: Option<u64>,
    pub user_agent: String,
    /// Session cookie sent as-is in the `cookie` header.
    pub cookie: Option<String>,
    /// Crumb token appended to the query string.
    pub crumb: Option<String>,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: None,
            user_agent: String::from(DEFAULT_USER_AGENT),
            cookie: None,
            crumb: None,
        }
    }
}

impl QuoteConfig {
    /// Defaults overlaid with environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`QuoteConfig::from_env`] over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(base_url) = non_empty("FERROQUOTE_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(raw) = non_empty("FERROQUOTE_TIMEOUT_MS") {
            let timeout_ms = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "FERROQUOTE_TIMEOUT_MS",
                    value: raw.clone(),
                })?;
            config.timeout_ms = Some(timeout_ms);
        }
        if let Some(user_agent) = non_empty("FERROQUOTE_USER_AGENT") {
            config.user_agent = user_agent;
        }
        config.cookie = non_empty("YAHOO_COOKIE");
        config.crumb = non_empty("YAHOO_CRUMB");

        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }

    pub fn with_crumb(mut self, crumb: impl Into<String>) -> Self {
        self.crumb = Some(crumb.into());
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl {
                value: self.base_url.clone(),
            });
        }
        Ok(())
    }

    pub(crate) fn auth(&self) -> HttpAuth {
        match &self.cookie {
            Some(cookie) => HttpAuth::Cookie(cookie.clone()),
            None => HttpAuth::None,
        }
    }
}
