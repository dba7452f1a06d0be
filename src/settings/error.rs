//! Settings domain: errors for settings writes and file loads.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("unknown setting key '{key}'")]
    UnknownKey { key: String },

    #[error("'{key}' expects a number, got '{raw}'")]
    InvalidNumber { key: String, raw: String },

    #[error("'{key}' expects a whole number, got '{raw}'")]
    InvalidInteger { key: String, raw: String },

    #[error("'{key}' expects true or false, got '{raw}'")]
    InvalidBool { key: String, raw: String },

    #[error("'{key}' expects a block id without digits, got '{raw}'")]
    InvalidBlock { key: String, raw: String },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ron::Error,
    },
}
