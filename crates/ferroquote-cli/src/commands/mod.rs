mod fields;
mod quote;

use ferroquote_core::{QuoteClient, QuoteConfig};
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<Value, CliError> {
    match &cli.command {
        Command::Quote(args) => {
            let client = QuoteClient::new(config(cli)?)?;
            quote::run(args, &client).await
        }
        Command::Fields => fields::run(),
    }
}

/// Environment configuration with command-line overrides applied.
fn config(cli: &Cli) -> Result<QuoteConfig, CliError> {
    let mut config = QuoteConfig::from_env().map_err(ferroquote_core::QuoteError::from)?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.clone());
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms);
    }
    Ok(config)
}
