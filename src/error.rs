//! Error types for the dataset loading boundary.
//!
//! The resolution engine itself never fails: malformed grammar parses to
//! inert blocks, unmatched stats are skipped, and short value columns fall
//! back to 0. Only reading external data is fallible.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = DataError::from(err);
        assert!(err.to_string().starts_with("malformed dataset"));
    }
}
