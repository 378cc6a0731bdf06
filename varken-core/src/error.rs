//! Error types for Varken configuration loading

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be opened or read
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// INI syntax errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Section header repeated
    #[error("Duplicate section [{0}]")]
    DuplicateSection(String),

    /// Key repeated within one section
    #[error("Duplicate key '{key}' in section [{section}]")]
    DuplicateKey { section: String, key: String },

    /// Required section absent
    #[error("Missing section [{0}]")]
    MissingSection(String),

    /// Required key absent from a present section
    #[error("Missing key '{key}' in section [{section}]")]
    MissingKey { section: String, key: String },

    /// Value is not a decimal integer (or does not fit the target type)
    #[error("Invalid integer for '{key}' in section [{section}]: '{value}'")]
    InvalidInteger {
        section: String,
        key: String,
        value: String,
    },

    /// Value is not one of the recognized boolean tokens
    #[error("Invalid boolean for '{key}' in section [{section}]: '{value}'")]
    InvalidBoolean {
        section: String,
        key: String,
        value: String,
    },

    /// Required value present but empty
    #[error("Empty value for '{key}' in section [{section}]")]
    EmptyValue { section: String, key: String },

    /// A `*_server_ids` key that is neither an accepted false token nor an id list
    #[error("{key} must be either false, or a comma-separated list of server ids.")]
    InvalidServerIds { key: String },
}

impl ConfigError {
    /// True when the config file itself does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

impl From<ini::ParseError> for ConfigError {
    fn from(err: ini::ParseError) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
