//! Compact JWS signing

use crate::{
    algorithm::Algorithm,
    algorithms::sign_message,
    codec,
    error::{JwtError, JwtResult},
    key::KeyMaterial,
};
use serde_json::Value;

/// Sign `header` and `payload` into `h.p.s` compact form
///
/// Both parts are serialized compactly with member order preserved. The header is
/// signed as given: `alg` is never inserted or rewritten here.
///
/// # Errors
/// - [`JwtError::Serialization`] when either part is not a JSON object
/// - [`JwtError::Signing`] when the key is absent or unparseable
/// - [`JwtError::KeyRoleMismatch`] for a public key or a key `algorithm` cannot use
pub fn sign(header: &Value, payload: &Value, key: &KeyMaterial, algorithm: Algorithm) -> JwtResult<String> {
    if !header.is_object() {
        return Err(JwtError::serialization("header must be a JSON object"));
    }
    if !payload.is_object() {
        return Err(JwtError::serialization("payload must be a JSON object"));
    }
    if !key.can_sign() {
        if let KeyMaterial::PublicKey(public) = key {
            return Err(JwtError::key_role_mismatch("private key or secret", public.kind()));
        }
        return Err(JwtError::signing(&format!("cannot sign with {}", key.kind())));
    }

    let header_b64 = codec::encode(serde_json::to_vec(header).map_err(|e| JwtError::serialization(&e.to_string()))?);
    let payload_b64 = codec::encode(serde_json::to_vec(payload).map_err(|e| JwtError::serialization(&e.to_string()))?);

    let mut token = String::with_capacity(header_b64.len() + payload_b64.len() + 90);
    token.push_str(&header_b64);
    token.push('.');
    token.push_str(&payload_b64);

    let signature = sign_message(algorithm, key, token.as_bytes())?;
    token.push('.');
    token.push_str(&codec::encode(signature));
    Ok(token)
}

/// Parse header and payload text, then [`sign`]
///
/// # Errors
/// [`JwtError::Decode`] when either text is not JSON, otherwise as [`sign`].
pub fn sign_text(header: &str, payload: &str, key: &KeyMaterial, algorithm: Algorithm) -> JwtResult<String> {
    let header: Value = serde_json::from_str(header)?;
    let payload: Value = serde_json::from_str(payload)?;
    sign(&header, &payload, key, algorithm)
}
