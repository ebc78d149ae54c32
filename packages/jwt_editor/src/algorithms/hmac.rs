//! HMAC-SHA2 primitives (HS256, HS384, HS512)

use crate::{
    algorithm::HashSize,
    error::{JwtError, JwtResult},
};
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

fn mac<M: Mac + hmac::digest::KeyInit>(secret: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = <M as Mac>::new_from_slice(secret)
        .map_err(|_| JwtError::key_format("HMAC secret rejected"))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Compute the HMAC tag of `message`
#[inline]
pub(crate) fn sign(hash: HashSize, secret: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    match hash {
        HashSize::Sha256 => mac::<HmacSha256>(secret, message),
        HashSize::Sha384 => mac::<HmacSha384>(secret, message),
        HashSize::Sha512 => mac::<HmacSha512>(secret, message),
    }
}

/// Recompute the tag and compare in constant time
#[inline]
pub(crate) fn verify(hash: HashSize, secret: &[u8], message: &[u8], signature: &[u8]) -> JwtResult<()> {
    let expected = sign(hash, secret, message)?;
    if bool::from(expected.as_slice().ct_eq(signature)) {
        Ok(())
    } else {
        Err(JwtError::SignatureMismatch)
    }
}
