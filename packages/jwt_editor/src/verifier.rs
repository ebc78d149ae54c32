//! Compact JWS verification pinned to one algorithm
//!
//! The primitive is chosen from the caller's expected algorithm, never from the
//! token header, and a header naming any other algorithm is refused outright.

use crate::{
    algorithm::Algorithm,
    algorithms::verify_message,
    codec,
    error::{JwtError, JwtResult},
    json,
    key::KeyMaterial,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

/// Outcome of [`verify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Signature checks out under the expected algorithm
    Valid,
    /// Anything else
    Invalid,
}

impl Verdict {
    /// `true` for [`Verdict::Valid`]
    #[must_use]
    pub fn is_valid(self) -> bool {
        self == Verdict::Valid
    }
}

/// Verify `token` under `expected`, collapsing every failure to [`Verdict::Invalid`]
///
/// `expected` is a JWS identifier; anything outside the registry, `"none"`
/// included, is invalid.
#[must_use]
pub fn verify(token: &str, key: &KeyMaterial, expected: &str) -> Verdict {
    match expected.parse::<Algorithm>().and_then(|alg| check(token, key, alg)) {
        Ok(()) => Verdict::Valid,
        Err(e) => {
            trace!(error = %e, "token rejected");
            Verdict::Invalid
        }
    }
}

/// Verify `token` under `expected`, reporting why it failed
///
/// # Errors
/// - [`JwtError::MalformedToken`] unless there are exactly three segments
/// - [`JwtError::Decode`] for bad Base64URL or JSON in the header, payload or signature
/// - [`JwtError::UnsupportedAlgorithm`] when the header names another algorithm
/// - [`JwtError::KeyFormat`] / [`JwtError::KeyRoleMismatch`] when `key` cannot verify
/// - [`JwtError::SignatureMismatch`] when the bytes do not verify
pub fn check(token: &str, key: &KeyMaterial, expected: Algorithm) -> JwtResult<()> {
    let segments: Vec<&str> = token.split('.').collect();
    let [header_b64, payload_b64, signature_b64] = segments.as_slice() else {
        return Err(JwtError::MalformedToken(segments.len()));
    };

    let header = json::parse_object(&codec::decode_text(header_b64)?, "header")?;
    match header.get("alg").and_then(Value::as_str) {
        Some(alg) if alg == expected.as_str() => {}
        Some(alg) => return Err(JwtError::unsupported_algorithm(alg)),
        None => return Err(JwtError::decode("header has no alg")),
    }
    serde_json::from_slice::<Value>(&codec::decode(payload_b64)?)?;
    let signature = codec::decode(signature_b64)?;

    let signing_input = &token[..header_b64.len() + 1 + payload_b64.len()];
    verify_message(expected, key, signing_input.as_bytes(), &signature)
}
