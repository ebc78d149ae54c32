//! RSA primitives: RSASSA-PKCS1-v1_5 (RS*) and RSASSA-PSS (PS*)
//!
//! PSS uses MGF1 with the same digest and a salt as long as the digest output.

use crate::{
    algorithm::HashSize,
    error::{JwtError, JwtResult},
};
use rsa::{
    RsaPrivateKey, RsaPublicKey, pkcs1v15,
    pkcs8::AssociatedOid,
    pss,
    rand_core::OsRng,
    signature::{RandomizedSigner, SignatureEncoding, Signer, Verifier},
};
use sha2::{Digest, Sha256, Sha384, Sha512, digest::FixedOutputReset};

fn sign_pkcs1v15_with<D: Digest + AssociatedOid>(key: &RsaPrivateKey, message: &[u8]) -> JwtResult<Vec<u8>> {
    let signing_key = pkcs1v15::SigningKey::<D>::new(key.clone());
    let signature = signing_key
        .try_sign(message)
        .map_err(|e| JwtError::signing(&e.to_string()))?;
    Ok(signature.to_vec())
}

fn verify_pkcs1v15_with<D: Digest + AssociatedOid>(
    key: &RsaPublicKey,
    message: &[u8],
    signature: &[u8],
) -> JwtResult<()> {
    let verifying_key = pkcs1v15::VerifyingKey::<D>::new(key.clone());
    let signature = pkcs1v15::Signature::try_from(signature).map_err(|_| JwtError::SignatureMismatch)?;
    verifying_key
        .verify(message, &signature)
        .map_err(|_| JwtError::SignatureMismatch)
}

fn sign_pss_with<D: Digest + FixedOutputReset>(key: &RsaPrivateKey, message: &[u8]) -> JwtResult<Vec<u8>> {
    let signing_key = pss::SigningKey::<D>::new(key.clone());
    let signature = signing_key
        .try_sign_with_rng(&mut OsRng, message)
        .map_err(|e| JwtError::signing(&e.to_string()))?;
    Ok(signature.to_vec())
}

fn verify_pss_with<D: Digest + FixedOutputReset>(
    key: &RsaPublicKey,
    message: &[u8],
    signature: &[u8],
) -> JwtResult<()> {
    let verifying_key = pss::VerifyingKey::<D>::new(key.clone());
    let signature = pss::Signature::try_from(signature).map_err(|_| JwtError::SignatureMismatch)?;
    verifying_key
        .verify(message, &signature)
        .map_err(|_| JwtError::SignatureMismatch)
}

/// Sign with RSASSA-PKCS1-v1_5
pub(crate) fn sign_pkcs1v15(hash: HashSize, key: &RsaPrivateKey, message: &[u8]) -> JwtResult<Vec<u8>> {
    match hash {
        HashSize::Sha256 => sign_pkcs1v15_with::<Sha256>(key, message),
        HashSize::Sha384 => sign_pkcs1v15_with::<Sha384>(key, message),
        HashSize::Sha512 => sign_pkcs1v15_with::<Sha512>(key, message),
    }
}

/// Verify an RSASSA-PKCS1-v1_5 signature
pub(crate) fn verify_pkcs1v15(
    hash: HashSize,
    key: &RsaPublicKey,
    message: &[u8],
    signature: &[u8],
) -> JwtResult<()> {
    match hash {
        HashSize::Sha256 => verify_pkcs1v15_with::<Sha256>(key, message, signature),
        HashSize::Sha384 => verify_pkcs1v15_with::<Sha384>(key, message, signature),
        HashSize::Sha512 => verify_pkcs1v15_with::<Sha512>(key, message, signature),
    }
}

/// Sign with RSASSA-PSS; each call draws a fresh salt
pub(crate) fn sign_pss(hash: HashSize, key: &RsaPrivateKey, message: &[u8]) -> JwtResult<Vec<u8>> {
    match hash {
        HashSize::Sha256 => sign_pss_with::<Sha256>(key, message),
        HashSize::Sha384 => sign_pss_with::<Sha384>(key, message),
        HashSize::Sha512 => sign_pss_with::<Sha512>(key, message),
    }
}

/// Verify an RSASSA-PSS signature
pub(crate) fn verify_pss(hash: HashSize, key: &RsaPublicKey, message: &[u8], signature: &[u8]) -> JwtResult<()> {
    match hash {
        HashSize::Sha256 => verify_pss_with::<Sha256>(key, message, signature),
        HashSize::Sha384 => verify_pss_with::<Sha384>(key, message, signature),
        HashSize::Sha512 => verify_pss_with::<Sha512>(key, message, signature),
    }
}
