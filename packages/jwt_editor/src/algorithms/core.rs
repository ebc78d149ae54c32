//! Dispatch from (algorithm, key) to a signature primitive
//!
//! Both entry points match exhaustively on the key variant, so a new key kind cannot
//! be added without deciding how each algorithm treats it.

use super::{ecdsa, eddsa, hmac, rsa};
use crate::{
    algorithm::{Algorithm, AlgorithmFamily},
    error::{JwtError, JwtResult},
    key::{KeyMaterial, PrivateKey, PublicKey},
};

/// Key type an algorithm needs, for mismatch errors
fn expected_key(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Hs256 | Algorithm::Hs384 | Algorithm::Hs512 => "secret",
        Algorithm::Rs256
        | Algorithm::Rs384
        | Algorithm::Rs512
        | Algorithm::Ps256
        | Algorithm::Ps384
        | Algorithm::Ps512 => "RSA key",
        Algorithm::Es256 => "P-256 key",
        Algorithm::Es384 => "P-384 key",
        Algorithm::Es512 => "P-521 key",
        Algorithm::EdDsa => "Ed25519 key",
    }
}

/// Produce the raw signature bytes of `message`
///
/// # Errors
/// [`JwtError::Signing`] for an absent or unparseable key, [`JwtError::KeyRoleMismatch`]
/// for a public key or a key of the wrong type.
pub fn sign_message(algorithm: Algorithm, key: &KeyMaterial, message: &[u8]) -> JwtResult<Vec<u8>> {
    let hash = algorithm.hash();
    match key {
        KeyMaterial::Absent => Err(JwtError::signing("no signing key")),
        KeyMaterial::Invalid => Err(JwtError::signing("signing key could not be parsed")),
        KeyMaterial::PublicKey(public) => {
            Err(JwtError::key_role_mismatch("private key or secret", public.kind()))
        }
        KeyMaterial::Secret(secret) => match algorithm.family() {
            AlgorithmFamily::Hmac => hmac::sign(hash, secret, message),
            _ => Err(JwtError::key_role_mismatch(expected_key(algorithm), key.kind())),
        },
        KeyMaterial::PrivateKey(private) => match (algorithm, private.as_ref()) {
            (_, PrivateKey::Rsa(rsa_key)) if algorithm.family() == AlgorithmFamily::Rsa => {
                rsa::sign_pkcs1v15(hash, rsa_key, message)
            }
            (_, PrivateKey::Rsa(rsa_key)) if algorithm.family() == AlgorithmFamily::RsaPss => {
                rsa::sign_pss(hash, rsa_key, message)
            }
            (Algorithm::Es256, PrivateKey::P256(ec)) => ecdsa::sign_p256(ec, message),
            (Algorithm::Es384, PrivateKey::P384(ec)) => ecdsa::sign_p384(ec, message),
            (Algorithm::Es512, PrivateKey::P521(ec)) => ecdsa::sign_p521(ec, message),
            (Algorithm::EdDsa, PrivateKey::Ed25519(ed)) => eddsa::sign(ed, message),
            _ => Err(JwtError::key_role_mismatch(expected_key(algorithm), private.kind())),
        },
    }
}

/// Check raw signature bytes over `message`
///
/// A private key never verifies: the public half must be supplied explicitly.
///
/// # Errors
/// [`JwtError::SignatureMismatch`] when the bytes do not verify, [`JwtError::KeyFormat`]
/// for an unparseable key, [`JwtError::KeyRoleMismatch`] for anything else that cannot
/// check this algorithm.
pub fn verify_message(
    algorithm: Algorithm,
    key: &KeyMaterial,
    message: &[u8],
    signature: &[u8],
) -> JwtResult<()> {
    let hash = algorithm.hash();
    match key {
        KeyMaterial::Absent => Err(JwtError::key_role_mismatch("verification key", key.kind())),
        KeyMaterial::Invalid => Err(JwtError::key_format("verification key could not be parsed")),
        KeyMaterial::PrivateKey(private) => {
            Err(JwtError::key_role_mismatch("public key or secret", private.kind()))
        }
        KeyMaterial::Secret(secret) => match algorithm.family() {
            AlgorithmFamily::Hmac => hmac::verify(hash, secret, message, signature),
            _ => Err(JwtError::key_role_mismatch(expected_key(algorithm), key.kind())),
        },
        KeyMaterial::PublicKey(public) => match (algorithm, public.as_ref()) {
            (_, PublicKey::Rsa(rsa_key)) if algorithm.family() == AlgorithmFamily::Rsa => {
                rsa::verify_pkcs1v15(hash, rsa_key, message, signature)
            }
            (_, PublicKey::Rsa(rsa_key)) if algorithm.family() == AlgorithmFamily::RsaPss => {
                rsa::verify_pss(hash, rsa_key, message, signature)
            }
            (Algorithm::Es256, PublicKey::P256(ec)) => ecdsa::verify_p256(ec, message, signature),
            (Algorithm::Es384, PublicKey::P384(ec)) => ecdsa::verify_p384(ec, message, signature),
            (Algorithm::Es512, PublicKey::P521(ec)) => ecdsa::verify_p521(ec, message, signature),
            (Algorithm::EdDsa, PublicKey::Ed25519(ed)) => eddsa::verify(ed, message, signature),
            _ => Err(JwtError::key_role_mismatch(expected_key(algorithm), public.kind())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_are_enforced() {
        assert!(matches!(
            sign_message(Algorithm::Hs256, &KeyMaterial::Absent, b"m"),
            Err(JwtError::Signing(_))
        ));
        assert!(matches!(
            sign_message(Algorithm::Rs256, &KeyMaterial::secret("k"), b"m"),
            Err(JwtError::KeyRoleMismatch { .. })
        ));
        assert!(matches!(
            verify_message(Algorithm::Hs256, &KeyMaterial::Invalid, b"m", b"s"),
            Err(JwtError::KeyFormat(_))
        ));
    }

    #[test]
    fn secret_round_trip() {
        let key = KeyMaterial::secret("k");
        let signature = sign_message(Algorithm::Hs512, &key, b"m").unwrap_or_default();
        assert!(verify_message(Algorithm::Hs512, &key, b"m", &signature).is_ok());
        assert_eq!(
            verify_message(Algorithm::Hs256, &key, b"m", &signature),
            Err(JwtError::SignatureMismatch)
        );
    }
}
