//! Key material
//!
//! Raw key text is never kept in typed form across edits: it is re-resolved into a
//! [`KeyMaterial`] whenever the text or the selected algorithm changes. Every sign and
//! verify site matches exhaustively on the variants below.

pub mod jwk;
pub mod resolver;

pub use resolver::{is_valid_key, resolve, try_resolve};

use std::{fmt, sync::Arc};
use zeroize::Zeroizing;

/// Resolved key for one algorithm
#[derive(Clone, Default)]
pub enum KeyMaterial {
    /// HMAC secret bytes
    Secret(Zeroizing<Vec<u8>>),
    /// Asymmetric private key
    PrivateKey(Arc<PrivateKey>),
    /// Asymmetric public key
    PublicKey(Arc<PublicKey>),
    /// Nothing typed
    #[default]
    Absent,
    /// Something typed, but no accepted encoding matched
    Invalid,
}

/// Asymmetric private key, one variant per curve or scheme
#[derive(Clone)]
pub enum PrivateKey {
    /// RSA (RS* and PS*)
    Rsa(rsa::RsaPrivateKey),
    /// NIST P-256
    P256(p256::ecdsa::SigningKey),
    /// NIST P-384
    P384(p384::ecdsa::SigningKey),
    /// NIST P-521
    P521(p521::ecdsa::SigningKey),
    /// Ed25519
    Ed25519(ed25519_dalek::SigningKey),
}

/// Asymmetric public key, one variant per curve or scheme
#[derive(Clone)]
pub enum PublicKey {
    /// RSA (RS* and PS*)
    Rsa(rsa::RsaPublicKey),
    /// NIST P-256
    P256(p256::ecdsa::VerifyingKey),
    /// NIST P-384
    P384(p384::ecdsa::VerifyingKey),
    /// NIST P-521
    P521(p521::ecdsa::VerifyingKey),
    /// Ed25519
    Ed25519(ed25519_dalek::VerifyingKey),
}

impl KeyMaterial {
    /// Wrap secret bytes
    #[must_use]
    pub fn secret(bytes: impl Into<Vec<u8>>) -> Self {
        KeyMaterial::Secret(Zeroizing::new(bytes.into()))
    }

    /// Whether this key can produce signatures (a secret or a private key)
    #[must_use]
    pub fn can_sign(&self) -> bool {
        matches!(self, KeyMaterial::Secret(_) | KeyMaterial::PrivateKey(_))
    }

    /// Whether this key can check signatures (a secret or a public key)
    #[must_use]
    pub fn can_verify(&self) -> bool {
        matches!(self, KeyMaterial::Secret(_) | KeyMaterial::PublicKey(_))
    }

    /// `false` only when text was typed that matched no encoding
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !matches!(self, KeyMaterial::Invalid)
    }

    /// Short human-readable role, used in errors and logs
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            KeyMaterial::Secret(_) => "secret",
            KeyMaterial::PrivateKey(key) => key.kind(),
            KeyMaterial::PublicKey(key) => key.kind(),
            KeyMaterial::Absent => "absent key",
            KeyMaterial::Invalid => "unparseable key",
        }
    }
}

impl PrivateKey {
    /// Short human-readable key type
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            PrivateKey::Rsa(_) => "RSA private key",
            PrivateKey::P256(_) => "P-256 private key",
            PrivateKey::P384(_) => "P-384 private key",
            PrivateKey::P521(_) => "P-521 private key",
            PrivateKey::Ed25519(_) => "Ed25519 private key",
        }
    }
}

impl PublicKey {
    /// Short human-readable key type
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            PublicKey::Rsa(_) => "RSA public key",
            PublicKey::P256(_) => "P-256 public key",
            PublicKey::P384(_) => "P-384 public key",
            PublicKey::P521(_) => "P-521 public key",
            PublicKey::Ed25519(_) => "Ed25519 public key",
        }
    }
}

// Key bytes stay out of logs
impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyMaterial::Secret(bytes) => write!(f, "Secret({} bytes)", bytes.len()),
            KeyMaterial::PrivateKey(key) => write!(f, "PrivateKey({})", key.kind()),
            KeyMaterial::PublicKey(key) => write!(f, "PublicKey({})", key.kind()),
            KeyMaterial::Absent => f.write_str("Absent"),
            KeyMaterial::Invalid => f.write_str("Invalid"),
        }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}
