use crate::error::Result;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read the whole file at `path` and decode it as JSON into `T`.
///
/// JSON object keys are matched to the target's field names. Read failures
/// come back as `ConfigError::Io`, malformed or mismatched JSON as
/// `ConfigError::Parse`; nothing is retried or logged here.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let bytes = fs::read(path.as_ref())?;
    let value = serde_json::from_slice(&bytes)?;
    Ok(value)
}
