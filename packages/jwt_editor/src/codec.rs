//! Base64URL codec for compact token segments (RFC 7515 §2)

use crate::error::{JwtError, JwtResult};
use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};

/// URL-safe alphabet, unpadded output, padding tolerated on input
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Base64 URL-safe encoding without padding
#[inline]
pub fn encode(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_LENIENT.encode(input)
}

/// Base64 URL-safe decoding
///
/// An empty string decodes to an empty byte vector. Characters outside the
/// URL-safe alphabet and misplaced or excess padding fail with [`JwtError::Decode`].
#[inline]
pub fn decode(input: &str) -> JwtResult<Vec<u8>> {
    Ok(URL_SAFE_LENIENT.decode(input)?)
}

/// Decode a segment and require the bytes to be UTF-8 text
pub fn decode_text(input: &str) -> JwtResult<String> {
    String::from_utf8(decode(input)?)
        .map_err(|_| JwtError::decode("segment is not valid UTF-8"))
}
