use thiserror::Error;

#[derive(Debug, Error)]
pub enum SieveError {
    #[error("provided element or target is not a record, got {0}")]
    NotARecord(String),

    #[error("key '{0}' does not match a mapped field of the target shape")]
    NoMatchingField(String),

    #[error("value type {actual} does not match expected type {expected} of field '{key}'")]
    UnexpectedValueType {
        key: String,
        expected: String,
        actual: String,
    },

    #[error("provided input is not a filterable collection, got {0}")]
    InvalidCollection(String),

    #[error("default error: {0}")]
    DefaultError(String),
}

impl From<String> for SieveError {
    fn from(s: String) -> Self {
        SieveError::DefaultError(s)
    }
}

impl From<&str> for SieveError {
    fn from(s: &str) -> Self {
        SieveError::DefaultError(s.to_string())
    }
}
