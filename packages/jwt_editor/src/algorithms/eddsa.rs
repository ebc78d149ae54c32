//! EdDSA primitive over Ed25519

use crate::error::{JwtError, JwtResult};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

/// Sign; Ed25519 signatures are deterministic and always 64 bytes
pub(crate) fn sign(key: &SigningKey, message: &[u8]) -> JwtResult<Vec<u8>> {
    let signature: Signature = key
        .try_sign(message)
        .map_err(|e| JwtError::signing(&e.to_string()))?;
    Ok(signature.to_bytes().to_vec())
}

/// Verify a 64-byte Ed25519 signature
pub(crate) fn verify(key: &VerifyingKey, message: &[u8], signature: &[u8]) -> JwtResult<()> {
    let signature = Signature::from_slice(signature).map_err(|_| JwtError::SignatureMismatch)?;
    key.verify(message, &signature)
        .map_err(|_| JwtError::SignatureMismatch)
}
