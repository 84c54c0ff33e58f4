use std::path::PathBuf;
use thiserror::Error;

/// Error type returned by custom text decoders ([`DecodeText`](crate::DecodeText)).
///
/// Boxed so user-defined decodable types can surface whatever error type their
/// parsing produces.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum EnvfigError {
    #[error("Failed to load {path}: {source}")]
    FileSource {
        path: PathBuf,
        source: dotenvy::Error,
    },

    #[error("Failed to decode '{key}': {source}")]
    CustomDecode { key: String, source: BoxError },

    #[error("Invalid integer for '{key}': {source}")]
    InvalidInt {
        key: String,
        source: std::num::ParseIntError,
    },

    #[error("Invalid float for '{key}': {source}")]
    InvalidFloat {
        key: String,
        source: std::num::ParseFloatError,
    },

    #[error("Value '{value}' for '{key}' is not a valid boolean representation")]
    InvalidBool { key: String, value: String },

    #[error("Nested record bound to key '{key}': records without a custom decoder cannot bind a key")]
    KeyedRecord { key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_decode_names_key() {
        let err = EnvfigError::CustomDecode {
            key: "JWT_SIGNING_KEY".into(),
            source: "bad input".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("JWT_SIGNING_KEY"));
        assert!(msg.contains("bad input"));
    }

    #[test]
    fn invalid_bool_names_value() {
        let err = EnvfigError::InvalidBool {
            key: "DEBUG".into(),
            value: "yes".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("DEBUG"));
        assert!(msg.contains("yes"));
        assert!(msg.contains("boolean"));
    }

    #[test]
    fn keyed_record_names_key() {
        let err = EnvfigError::KeyedRecord {
            key: "DATABASE".into(),
        };
        assert!(err.to_string().contains("DATABASE"));
    }
}
