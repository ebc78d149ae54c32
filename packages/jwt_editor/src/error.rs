//! Error taxonomy for the token editor

use thiserror::Error;

/// Result type used throughout the editor
pub type JwtResult<T> = Result<T, JwtError>;

/// Token editor errors
///
/// None of these escape an engine transition: each one is converted to a quiet
/// fallback or a [`SignatureStatus`](crate::SignatureStatus) at the transition boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Bad Base64URL, UTF-8 or JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// Algorithm identifier outside the registry
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Key text matched none of the accepted encodings
    #[error("Key format error: {0}")]
    KeyFormat(String),

    /// Key cannot play the role an operation requires
    #[error("Key role mismatch: expected {expected}, got {actual}")]
    KeyRoleMismatch {
        /// Role or key type the operation needs
        expected: String,
        /// Role or key type that was supplied
        actual: String,
    },

    /// Compact serialization without exactly three segments
    #[error("Malformed token: expected 3 segments, got {0}")]
    MalformedToken(usize),

    /// Signature does not match the signing input
    #[error("Signature mismatch")]
    SignatureMismatch,

    /// Header or payload cannot be serialized as a JSON object
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Signing could not be performed
    #[error("Signing error: {0}")]
    Signing(String),

    /// Background cascade task failed
    #[error("Background task failed: {0}")]
    TaskFailed(String),
}

impl JwtError {
    /// Create a decode error
    #[inline]
    #[must_use]
    pub fn decode(msg: &str) -> Self {
        JwtError::Decode(msg.to_string())
    }

    /// Create an unsupported algorithm error
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(alg: &str) -> Self {
        JwtError::UnsupportedAlgorithm(alg.to_string())
    }

    /// Create a key format error
    #[inline]
    #[must_use]
    pub fn key_format(msg: &str) -> Self {
        JwtError::KeyFormat(msg.to_string())
    }

    /// Create a key role mismatch error
    #[inline]
    #[must_use]
    pub fn key_role_mismatch(expected: &str, actual: &str) -> Self {
        JwtError::KeyRoleMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        JwtError::Serialization(msg.to_string())
    }

    /// Create a signing error
    #[inline]
    #[must_use]
    pub fn signing(msg: &str) -> Self {
        JwtError::Signing(msg.to_string())
    }
}

impl From<base64::DecodeError> for JwtError {
    fn from(e: base64::DecodeError) -> Self {
        JwtError::Decode(e.to_string())
    }
}

impl From<serde_json::Error> for JwtError {
    fn from(e: serde_json::Error) -> Self {
        JwtError::Decode(format!("invalid JSON: {e}"))
    }
}
