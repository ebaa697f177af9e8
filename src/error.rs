use thiserror::Error;

/// Error type for schema derivation and configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for ormschema operations
pub type Result<T> = std::result::Result<T, SchemaError>;
