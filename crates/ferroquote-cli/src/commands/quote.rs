use ferroquote_core::{QuoteClient, Securities};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::cli::QuoteArgs;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct QuoteResponseData<'a> {
    requested: &'a [String],
    missing: Vec<&'a str>,
    securities: Securities,
}

pub async fn run(args: &QuoteArgs, client: &QuoteClient) -> Result<Value, CliError> {
    let securities = client
        .query()
        .with_symbols(args.symbols.iter().cloned())?
        .with_fields(args.fields.iter())?
        .execute()
        .await?;

    let missing = unrecognized(&args.symbols, &securities);
    if !missing.is_empty() {
        info!(?missing, "symbols not recognized by the quote service");
    }

    Ok(serde_json::to_value(QuoteResponseData {
        requested: &args.symbols,
        missing,
        securities,
    })?)
}

/// Requested symbols with no returned record. The service answers with its
/// own spelling (`AAPL` for `aapl`), so case is ignored.
fn unrecognized<'a>(requested: &'a [String], securities: &Securities) -> Vec<&'a str> {
    requested
        .iter()
        .map(String::as_str)
        .filter(|symbol| {
            !securities
                .iter()
                .any(|(_, security)| security.symbol_key().eq_ignore_ascii_case(symbol))
        })
        .collect()
}
