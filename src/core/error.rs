//! core/error.rs
//! One error type for config, catalog, probing and playback.

use std::path::PathBuf;

use super::types::ItemId;

#[derive(Debug, thiserror::Error)]
pub enum SoundscapeError {
    #[error("Unable to find config directory")]
    NoConfigDir,

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Catalog is empty")]
    EmptyCatalog,

    #[error("Duplicate catalog id: {0}")]
    DuplicateId(ItemId),

    #[error("Audio output unavailable: {0}")]
    Output(String),

    #[error("Failed to decode {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("Nothing is bound to the playback channel")]
    NothingBound,

    #[error("Logger already initialized: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl SoundscapeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn decode(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Decode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SoundscapeError>;
