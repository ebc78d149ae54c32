//! ECDSA primitives (ES256, ES384, ES512)
//!
//! Signatures travel as the fixed-width `r || s` concatenation of RFC 7518 §3.4,
//! never DER. P-256 and P-384 nonces are derived per RFC 6979; P-521 draws a random
//! nonce.

use crate::error::{JwtError, JwtResult};
use p256::ecdsa::signature::{Signer, Verifier};

macro_rules! ecdsa_curve {
    ($curve:ident, $sign:ident, $verify:ident) => {
        /// Sign and encode as fixed-width `r || s`
        pub(crate) fn $sign(key: &$curve::ecdsa::SigningKey, message: &[u8]) -> JwtResult<Vec<u8>> {
            let signature: $curve::ecdsa::Signature = key
                .try_sign(message)
                .map_err(|e| JwtError::signing(&e.to_string()))?;
            Ok(signature.to_bytes().to_vec())
        }

        /// Verify a fixed-width `r || s` signature
        pub(crate) fn $verify(
            key: &$curve::ecdsa::VerifyingKey,
            message: &[u8],
            signature: &[u8],
        ) -> JwtResult<()> {
            let signature = $curve::ecdsa::Signature::from_slice(signature)
                .map_err(|_| JwtError::SignatureMismatch)?;
            key.verify(message, &signature)
                .map_err(|_| JwtError::SignatureMismatch)
        }
    };
}

ecdsa_curve!(p256, sign_p256, verify_p256);
ecdsa_curve!(p384, sign_p384, verify_p384);
ecdsa_curve!(p521, sign_p521, verify_p521);
