//! Configuration errors
//!
//! This module defines error types for the configuration module.

use thiserror::Error;

/// Configuration load failure
///
/// Every variant carries the section/key context an operator needs to
/// locate and fix the offending entry in the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required scalar key is absent
    #[error("key '{section}.{key}' does not exist")]
    MissingKey { section: String, key: String },

    /// Scalar key is present but unparseable or out of range
    #[error("invalid value '{value}' for key '{section}.{key}'")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
    },

    /// Declared credential file path does not exist
    #[error("{section}/{key} file '{path}' does not exist")]
    FileNotFound {
        section: String,
        key: String,
        path: String,
    },

    /// Declared inline credential content is empty
    #[error("{section}/{key} has an invalid empty value")]
    EmptyContent { section: String, key: String },

    /// Both variants of a credential were supplied
    #[error("{section}/{file_key} and {section}/{content_key} are mutually exclusive options")]
    MutuallyExclusive {
        section: String,
        file_key: String,
        content_key: String,
    },

    /// Neither variant of a credential was supplied
    #[error("{section}/{file_key} or {section}/{content_key} are required settings")]
    RequiredMissing {
        section: String,
        file_key: String,
        content_key: String,
    },

    /// Passthrough channel name exceeds the wire-format limit
    #[error("passthrough channel '{name}': name longer than {max} bytes")]
    NameTooLong { name: String, max: usize },

    /// The INI text itself is malformed
    #[error("failed to parse configuration: {0}")]
    ParseError(String),
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
