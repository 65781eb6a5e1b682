use ferroquote_core::{ErrorKind, QuoteError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Quote(error) => match error.kind() {
                ErrorKind::Argument | ErrorKind::Config => 2,
                ErrorKind::Transport => 3,
                ErrorKind::FieldNotFound | ErrorKind::FieldType => 5,
            },
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
