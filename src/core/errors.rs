//! Error types for the simhash-rs library.
//!
//! Fingerprinting itself is total over its input domain; errors only arise at
//! the edges: reading documents, loading configuration, and comparing
//! fingerprints that were produced with different widths.

use std::io;

use thiserror::Error;

/// Main result type for simhash operations.
pub type Result<T> = std::result::Result<T, SimHashError>;

/// Error type for all simhash operations.
#[derive(Error, Debug)]
pub enum SimHashError {
    /// I/O related errors (document and config file access)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or input that failed validation
        field: Option<String>,
        /// Expected value or format
        expected: Option<String>,
        /// Actual value received
        actual: Option<String>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Data type being serialized
        data_type: Option<String>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl SimHashError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// A fingerprint string contained something other than `'0'`/`'1'`.
    pub fn invalid_bit(index: usize, ch: char) -> Self {
        Self::Validation {
            message: format!("invalid character {ch:?} at position {index} in fingerprint"),
            field: Some("fingerprint".to_string()),
            expected: Some("only '0' and '1'".to_string()),
            actual: Some(ch.to_string()),
        }
    }

    /// Fingerprints of different widths cannot be compared.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::Validation {
            message: format!(
                "fingerprints must have the same length (got {expected} and {actual} bits)"
            ),
            field: Some("fingerprint".to_string()),
            expected: Some(expected.to_string()),
            actual: Some(actual.to_string()),
        }
    }

    /// Add context to an existing error; only I/O messages carry it
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        if let Self::Io { message, .. } = &mut self {
            *message = format!("{}: {message}", context.into());
        }
        self
    }

    /// True when this error came from the invalid-input family.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<io::Error> for SimHashError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for SimHashError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            data_type: Some("JSON".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for SimHashError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            data_type: Some("YAML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

/// Result extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add lazily built context to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<SimHashError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = SimHashError::config_field("Invalid configuration", "output.format");
        assert!(matches!(err, SimHashError::Config { .. }));

        let err = SimHashError::invalid_bit(3, 'x');
        assert!(err.is_validation());
        assert!(format!("{err}").contains("position 3"));
    }

    #[test]
    fn test_length_mismatch_fields() {
        let err = SimHashError::length_mismatch(128, 64);

        if let SimHashError::Validation {
            message,
            field,
            expected,
            actual,
        } = err
        {
            assert!(message.contains("same length"));
            assert_eq!(field.as_deref(), Some("fingerprint"));
            assert_eq!(expected.as_deref(), Some("128"));
            assert_eq!(actual.as_deref(), Some("64"));
        } else {
            panic!("Expected Validation error");
        }
    }

    #[test]
    fn test_io_context_prefixes_message() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "File not found",
        ));

        let err = result
            .with_context(|| "Reading text1.txt".to_string())
            .unwrap_err();
        if let SimHashError::Io { message, source } = err {
            assert!(message.starts_with("Reading text1.txt"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        } else {
            panic!("Expected Io error");
        }
    }

    #[test]
    fn test_config_field_error() {
        let err = SimHashError::config_field("Invalid value", "num_hash_bits");

        if let SimHashError::Config { message, field } = err {
            assert_eq!(message, "Invalid value");
            assert_eq!(field, Some("num_hash_bits".to_string()));
        } else {
            panic!("Expected Config error");
        }
    }

    #[test]
    fn test_with_context_non_contextual_error() {
        let err = SimHashError::config_field("Bad config", "num_hash_bits")
            .with_context("Should not change");

        if let SimHashError::Config { message, .. } = err {
            assert_eq!(message, "Bad config");
        } else {
            panic!("Expected Config error");
        }
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<i32>("invalid: yaml: content").unwrap_err();
        let err: SimHashError = yaml_err.into();

        if let SimHashError::Serialization { data_type, .. } = err {
            assert_eq!(data_type, Some("YAML".to_string()));
        } else {
            panic!("Expected Serialization error");
        }
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<i32>("invalid json").unwrap_err();
        let err: SimHashError = json_err.into();

        assert!(matches!(err, SimHashError::Serialization { .. }));
    }
}
