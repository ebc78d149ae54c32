//! Key text classification
//!
//! Raw key text is tried against an ordered table of probes. Each probe is a pure
//! function that either recognizes the text for the selected algorithm or declines;
//! the first one that recognizes it decides whether the result is a private or a
//! public key.

use super::{KeyMaterial, PrivateKey, PublicKey, jwk};
use crate::{
    algorithm::{Algorithm, AlgorithmFamily},
    error::{JwtError, JwtResult},
};
use rsa::{
    pkcs8::{DecodePrivateKey, DecodePublicKey},
    traits::PublicKeyParts,
};
use std::sync::Arc;
use tracing::trace;
use x509_cert::{
    Certificate,
    der::{Decode, Encode, pem},
};

/// Smallest RSA modulus accepted for RS* and PS*, in bytes
pub(crate) const MIN_RSA_MODULUS_BYTES: usize = 256;

type Probe = fn(&str, Algorithm) -> Option<KeyMaterial>;

/// Probe order: private key first, so text that parses as one never degrades to public
const PROBES: [(&str, Probe); 4] = [
    ("pkcs8", probe_pkcs8),
    ("jwk", probe_jwk),
    ("spki", probe_spki),
    ("x509", probe_certificate),
];

/// Classify raw key text for an algorithm
///
/// Empty text is [`KeyMaterial::Absent`]. For HMAC the text itself is the secret.
/// Everything else is probed as PKCS8, then JWK, then SPKI, then an X.509
/// certificate; text no probe accepts is [`KeyMaterial::Invalid`].
#[must_use]
pub fn resolve(raw: &str, algorithm: Algorithm) -> KeyMaterial {
    if raw.is_empty() {
        return KeyMaterial::Absent;
    }
    if algorithm.is_symmetric() {
        return KeyMaterial::secret(raw.as_bytes());
    }
    first_success(&PROBES, raw.trim(), algorithm).unwrap_or(KeyMaterial::Invalid)
}

/// Like [`resolve`], but unrecognized text is an error
///
/// # Errors
/// Returns [`JwtError::KeyFormat`] when no accepted encoding matches.
pub fn try_resolve(raw: &str, algorithm: Algorithm) -> JwtResult<KeyMaterial> {
    match resolve(raw, algorithm) {
        KeyMaterial::Invalid => Err(JwtError::key_format(&format!(
            "no PKCS8, JWK, SPKI or X.509 encoding of a {algorithm} key matched"
        ))),
        key => Ok(key),
    }
}

/// Whether a key field's content is acceptable (empty counts as acceptable)
#[must_use]
pub fn is_valid_key(raw: &str, algorithm: Algorithm) -> bool {
    resolve(raw, algorithm).is_valid()
}

fn first_success(probes: &[(&str, Probe)], raw: &str, algorithm: Algorithm) -> Option<KeyMaterial> {
    probes.iter().find_map(|(name, probe)| {
        let found = probe(raw, algorithm);
        trace!(probe = name, %algorithm, matched = found.is_some(), "key probe");
        found
    })
}

/// Decode PEM text and require a specific label
fn pem_body(raw: &str, label: &str) -> Option<Vec<u8>> {
    let (found, der) = pem::decode_vec(raw.as_bytes()).ok()?;
    (found == label).then_some(der)
}

fn probe_pkcs8(raw: &str, algorithm: Algorithm) -> Option<KeyMaterial> {
    let der = pem_body(raw, "PRIVATE KEY")?;
    private_from_pkcs8_der(&der, algorithm)
        .map(|key| KeyMaterial::PrivateKey(Arc::new(key)))
}

fn probe_jwk(raw: &str, algorithm: Algorithm) -> Option<KeyMaterial> {
    if !raw.starts_with('{') {
        return None;
    }
    jwk::Jwk::parse(raw).ok()?.into_key_material(algorithm).ok()
}

fn probe_spki(raw: &str, algorithm: Algorithm) -> Option<KeyMaterial> {
    let der = pem_body(raw, "PUBLIC KEY")?;
    public_from_spki_der(&der, algorithm).map(|key| KeyMaterial::PublicKey(Arc::new(key)))
}

fn probe_certificate(raw: &str, algorithm: Algorithm) -> Option<KeyMaterial> {
    let der = pem_body(raw, "CERTIFICATE")?;
    let certificate = Certificate::from_der(&der).ok()?;
    let spki = certificate.tbs_certificate.subject_public_key_info.to_der().ok()?;
    public_from_spki_der(&spki, algorithm).map(|key| KeyMaterial::PublicKey(Arc::new(key)))
}

fn private_from_pkcs8_der(der: &[u8], algorithm: Algorithm) -> Option<PrivateKey> {
    match algorithm.family() {
        AlgorithmFamily::Rsa | AlgorithmFamily::RsaPss => {
            let key = rsa::RsaPrivateKey::from_pkcs8_der(der).ok()?;
            (key.size() >= MIN_RSA_MODULUS_BYTES).then_some(PrivateKey::Rsa(key))
        }
        AlgorithmFamily::Ecdsa => match algorithm {
            Algorithm::Es256 => p256::ecdsa::SigningKey::from_pkcs8_der(der)
                .ok()
                .map(PrivateKey::P256),
            Algorithm::Es384 => p384::ecdsa::SigningKey::from_pkcs8_der(der)
                .ok()
                .map(PrivateKey::P384),
            Algorithm::Es512 => {
                let secret = p521::SecretKey::from_pkcs8_der(der).ok()?;
                p521::ecdsa::SigningKey::from_bytes(&secret.to_bytes())
                    .ok()
                    .map(PrivateKey::P521)
            }
            _ => None,
        },
        AlgorithmFamily::EdDsa => ed25519_dalek::SigningKey::from_pkcs8_der(der)
            .ok()
            .map(PrivateKey::Ed25519),
        AlgorithmFamily::Hmac => None,
    }
}

/// Decode a DER `SubjectPublicKeyInfo` into a key usable with `algorithm`
pub(crate) fn public_from_spki_der(der: &[u8], algorithm: Algorithm) -> Option<PublicKey> {
    match algorithm.family() {
        AlgorithmFamily::Rsa | AlgorithmFamily::RsaPss => {
            let key = rsa::RsaPublicKey::from_public_key_der(der).ok()?;
            (key.size() >= MIN_RSA_MODULUS_BYTES).then_some(PublicKey::Rsa(key))
        }
        AlgorithmFamily::Ecdsa => match algorithm {
            Algorithm::Es256 => p256::ecdsa::VerifyingKey::from_public_key_der(der)
                .ok()
                .map(PublicKey::P256),
            Algorithm::Es384 => p384::ecdsa::VerifyingKey::from_public_key_der(der)
                .ok()
                .map(PublicKey::P384),
            Algorithm::Es512 => {
                let public = p521::PublicKey::from_public_key_der(der).ok()?;
                p521::ecdsa::VerifyingKey::from_affine(*public.as_affine())
                    .ok()
                    .map(PublicKey::P521)
            }
            _ => None,
        },
        AlgorithmFamily::EdDsa => ed25519_dalek::VerifyingKey::from_public_key_der(der)
            .ok()
            .map(PublicKey::Ed25519),
        AlgorithmFamily::Hmac => None,
    }
}
