use thiserror::Error;

/// Failures surfaced by the configuration loader.
///
/// Both variants carry the underlying error untouched so callers can inspect
/// the original `io::ErrorKind` or the decoder's line/column.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn is_io(&self) -> bool {
        matches!(self, ConfigError::Io(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, ConfigError::Parse(_))
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
