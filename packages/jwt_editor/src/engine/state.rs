//! Editor state and signature status

use crate::{algorithm::Algorithm, config::EditorConfig, key::KeyMaterial};
use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

pub(crate) const INSERT_TOKEN: &str = "Insert a token to check signature.";
pub(crate) const INSERT_PUBLIC_KEY: &str = "Insert a public key to check signature.";
pub(crate) const INSERT_SECRET: &str = "Insert a secret to check signature.";
const SIGNATURE_VALID: &str = "Signature is valid.";
const SIGNATURE_INVALID: &str = "Signature is invalid.";

/// Status kind as rendered to the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Nothing to judge yet, or the token could not be produced
    Info,
    /// Signature verified
    Valid,
    /// Signature did not verify
    Invalid,
}

/// Result of the last verification, or why there is none
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureStatus {
    /// Informational message, no verdict
    Info(String),
    /// Token verifies against the verification key
    Valid,
    /// Token does not verify
    Invalid,
}

impl SignatureStatus {
    /// Informational status with the given message
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        SignatureStatus::Info(message.into())
    }

    /// Kind for rendering
    #[must_use]
    pub fn kind(&self) -> StatusKind {
        match self {
            SignatureStatus::Info(_) => StatusKind::Info,
            SignatureStatus::Valid => StatusKind::Valid,
            SignatureStatus::Invalid => StatusKind::Invalid,
        }
    }

    /// User-facing message
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            SignatureStatus::Info(message) => message,
            SignatureStatus::Valid => SIGNATURE_VALID,
            SignatureStatus::Invalid => SIGNATURE_INVALID,
        }
    }
}

impl Default for SignatureStatus {
    fn default() -> Self {
        SignatureStatus::info(INSERT_TOKEN)
    }
}

/// Every field of one editing session
///
/// Fields change only through [`transition`](fn@super::transition). The resolved keys
/// always match the current key text and algorithm.
#[derive(Clone)]
pub struct EditorState {
    pub(crate) config: Arc<EditorConfig>,
    pub(crate) token: String,
    pub(crate) header: String,
    pub(crate) payload: String,
    pub(crate) algorithm: Algorithm,
    pub(crate) private_key_text: String,
    pub(crate) public_key_text: String,
    pub(crate) signing_key: KeyMaterial,
    pub(crate) verifying_key: KeyMaterial,
    pub(crate) status: SignatureStatus,
}

impl EditorState {
    /// Fresh session: empty fields, the configured algorithm, no verdict
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self {
            algorithm: config.default_algorithm,
            config: Arc::new(config),
            token: String::new(),
            header: String::new(),
            payload: String::new(),
            private_key_text: String::new(),
            public_key_text: String::new(),
            signing_key: KeyMaterial::Absent,
            verifying_key: KeyMaterial::Absent,
            status: SignatureStatus::default(),
        }
    }

    /// Session settings
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Compact token, empty when none can be derived
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Header text as last edited or decoded
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Payload text as last edited or decoded
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Selected algorithm
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Private key (or secret) field
    #[must_use]
    pub fn private_key_text(&self) -> &str {
        &self.private_key_text
    }

    /// Public key (or secret) field
    #[must_use]
    pub fn public_key_text(&self) -> &str {
        &self.public_key_text
    }

    /// Key resolved from the private key field
    #[must_use]
    pub fn signing_key(&self) -> &KeyMaterial {
        &self.signing_key
    }

    /// Key resolved from the public key field
    #[must_use]
    pub fn verifying_key(&self) -> &KeyMaterial {
        &self.verifying_key
    }

    /// Current signature status
    #[must_use]
    pub fn status(&self) -> &SignatureStatus {
        &self.status
    }
}

// Key text stays out of logs; the resolved keys print as their kind only
impl fmt::Debug for EditorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorState")
            .field("token", &self.token)
            .field("header", &self.header)
            .field("payload", &self.payload)
            .field("algorithm", &self.algorithm)
            .field("signing_key", &self.signing_key)
            .field("verifying_key", &self.verifying_key)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
