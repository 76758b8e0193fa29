//! Error types for vitts-symbols.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Symbol lookup for a symbol that is not in the vocabulary.
    #[error("unknown symbol {0:?}: not in the vocabulary")]
    UnknownSymbol(String),

    /// Reverse lookup for an id outside `[0, num_symbols)`.
    #[error("unknown id {0}: not in the vocabulary")]
    UnknownId(usize),

    /// Uniqueness was requested but the assembled table repeats symbols.
    #[error("duplicate symbols in the character set: {0:?}")]
    DuplicateSymbols(Vec<String>),

    /// Invalid configuration.
    #[error("config: {0}")]
    Config(String),

    /// I/O error.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_offender() {
        let err = Error::UnknownSymbol("Z".into());
        assert!(err.to_string().contains("\"Z\""));

        let err = Error::UnknownId(99);
        assert!(err.to_string().contains("99"));

        let err = Error::DuplicateSymbols(vec!["b".into()]);
        assert!(err.to_string().contains("\"b\""));
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
