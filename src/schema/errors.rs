// ============================================================================
// Schema Errors
// Error types for adapting schema sources into the numeric model
// ============================================================================

use std::fmt;

/// Errors that can occur while reading a numeric schema from a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Schema node is not an object
    NotAnObject,
    /// Declared type is not `integer` or `number`
    NotNumeric(String),
    /// Keyword holds a value of the wrong JSON type
    InvalidKeyword {
        keyword: &'static str,
        found: &'static str,
    },
    /// Number cannot be represented exactly as a decimal
    Unrepresentable { keyword: &'static str, value: String },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::NotAnObject => write!(f, "schema must be an object"),
            SchemaError::NotNumeric(ty) => {
                write!(f, "schema type '{}' is not numeric", ty)
            },
            SchemaError::InvalidKeyword { keyword, found } => {
                write!(f, "keyword '{}' has invalid value of type {}", keyword, found)
            },
            SchemaError::Unrepresentable { keyword, value } => write!(
                f,
                "keyword '{}' value {} is out of decimal range",
                keyword, value
            ),
        }
    }
}

impl std::error::Error for SchemaError {}

/// Result type alias for schema adapters
pub type SchemaResult<T> = Result<T, SchemaError>;
