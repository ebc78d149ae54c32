//! Edit events, one per editable field

use crate::{algorithm::Algorithm, error::JwtResult};
use std::fmt;

/// One user edit; text payloads are full replacements of the field
#[derive(Clone, PartialEq, Eq)]
pub enum EditEvent {
    /// Encoded token replaced
    TokenEdited(String),
    /// Decoded header replaced
    HeaderEdited(String),
    /// Decoded payload replaced
    PayloadEdited(String),
    /// Private key field replaced
    PrivateKeyEdited(String),
    /// Public key field replaced
    PublicKeyEdited(String),
    /// Shared secret replaced; fills both key fields
    SecretEdited(String),
    /// Algorithm selector changed
    AlgorithmSelected(Algorithm),
}

impl EditEvent {
    /// Selector change from a JWS identifier
    ///
    /// # Errors
    /// Returns [`JwtError::UnsupportedAlgorithm`](crate::JwtError::UnsupportedAlgorithm)
    /// for identifiers outside the registry.
    pub fn select_algorithm(id: &str) -> JwtResult<Self> {
        Ok(EditEvent::AlgorithmSelected(id.parse()?))
    }

    /// Stable name for logs
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            EditEvent::TokenEdited(_) => "token",
            EditEvent::HeaderEdited(_) => "header",
            EditEvent::PayloadEdited(_) => "payload",
            EditEvent::PrivateKeyEdited(_) => "private_key",
            EditEvent::PublicKeyEdited(_) => "public_key",
            EditEvent::SecretEdited(_) => "secret",
            EditEvent::AlgorithmSelected(_) => "algorithm",
        }
    }
}

// Key text is redacted
impl fmt::Debug for EditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditEvent::TokenEdited(text) => f.debug_tuple("TokenEdited").field(text).finish(),
            EditEvent::HeaderEdited(text) => f.debug_tuple("HeaderEdited").field(text).finish(),
            EditEvent::PayloadEdited(text) => f.debug_tuple("PayloadEdited").field(text).finish(),
            EditEvent::PrivateKeyEdited(text)
            | EditEvent::PublicKeyEdited(text)
            | EditEvent::SecretEdited(text) => write!(f, "{}({} chars)", self.kind(), text.chars().count()),
            EditEvent::AlgorithmSelected(alg) => f.debug_tuple("AlgorithmSelected").field(alg).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_by_identifier() {
        assert_eq!(
            EditEvent::select_algorithm("PS512").ok(),
            Some(EditEvent::AlgorithmSelected(Algorithm::Ps512))
        );
        assert!(EditEvent::select_algorithm("none").is_err());
    }

    #[test]
    fn debug_never_prints_key_text() {
        let rendered = format!("{:?}", EditEvent::SecretEdited("hunter2".into()));
        assert_eq!(rendered, "secret(7 chars)");
        assert!(!format!("{:?}", EditEvent::PrivateKeyEdited("-----BEGIN".into())).contains("BEGIN"));
    }
}
