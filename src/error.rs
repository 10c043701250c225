use std::path::PathBuf;

use thiserror::Error;

/// Why a category export could not be merged. Never fatal for the run.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found")]
    MissingInputFile { path: PathBuf },

    #[error("{reason}")]
    InvalidInputDocument { path: PathBuf, reason: String },
}

impl LoadError {
    pub fn invalid(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        LoadError::InvalidInputDocument {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::MissingInputFile { path } => path,
            LoadError::InvalidInputDocument { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message_is_fixed() {
        let e = LoadError::MissingInputFile { path: "data/buses.json".into() };
        assert_eq!(e.to_string(), "File not found");
    }

    #[test]
    fn test_invalid_message_is_reason() {
        let e = LoadError::invalid("data/buses.json", "expected value at line 1 column 1");
        assert_eq!(e.to_string(), "expected value at line 1 column 1");
        assert_eq!(e.path(), &PathBuf::from("data/buses.json"));
    }
}
