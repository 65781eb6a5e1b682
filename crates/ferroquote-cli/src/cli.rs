//! CLI argument definitions for ferroquote.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `quote` | Fetch quotes for one or more symbols |
//! | `fields` | List the fields the client knows by name |
//!
//! # Examples
//!
//! ```bash
//! # Everything the service returns for two symbols
//! ferroquote quote C AAPL --pretty
//!
//! # Ask for specific fields (the service may still return more)
//! ferroquote quote AAPL --field bid --field ask --field longName
//! ```

use clap::{Args, Parser, Subcommand};

/// Quote lookups against the Yahoo Finance quote endpoint.
#[derive(Debug, Parser)]
#[command(name = "ferroquote", author, version, about)]
pub struct Cli {
    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Log request details to stderr (same as RUST_LOG=debug).
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Request timeout in milliseconds. Overrides FERROQUOTE_TIMEOUT_MS.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Quote endpoint. Overrides FERROQUOTE_BASE_URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch quotes for the given symbols.
    Quote(QuoteArgs),
    /// List known field names with their value kinds.
    Fields,
}

#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Symbols to look up, e.g. AAPL MSFT ^GSPC.
    #[arg(required = true)]
    pub symbols: Vec<String>,

    /// Field to request; repeat or comma-separate. Omit for service defaults.
    #[arg(long = "field", short = 'f', value_delimiter = ',')]
    pub fields: Vec<String>,
}
