//! JSON Web Key (RFC 7517) decoding for RSA, EC and OKP keys

use super::{KeyMaterial, PrivateKey, PublicKey, resolver::MIN_RSA_MODULUS_BYTES};
use crate::{
    algorithm::{Algorithm, AlgorithmFamily},
    codec,
    error::{JwtError, JwtResult},
};
use rsa::BigUint;
use serde::Deserialize;
use std::sync::Arc;
use zeroize::Zeroizing;

/// The JWK members the resolver understands; everything else is ignored
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Jwk {
    /// Key type: `RSA`, `EC` or `OKP`
    pub kty: String,
    /// Intended algorithm, if the key is pinned to one
    #[serde(default)]
    pub alg: Option<String>,
    /// Curve name for `EC` and `OKP` keys
    #[serde(default)]
    pub crv: Option<String>,
    /// RSA modulus
    #[serde(default)]
    pub n: Option<String>,
    /// RSA public exponent
    #[serde(default)]
    pub e: Option<String>,
    /// Private exponent (RSA) or private scalar (EC, OKP)
    #[serde(default)]
    pub d: Option<String>,
    /// First RSA prime factor
    #[serde(default)]
    pub p: Option<String>,
    /// Second RSA prime factor
    #[serde(default)]
    pub q: Option<String>,
    /// EC x coordinate, or the OKP public key
    #[serde(default)]
    pub x: Option<String>,
    /// EC y coordinate
    #[serde(default)]
    pub y: Option<String>,
}

impl Jwk {
    /// Parse JWK JSON text
    ///
    /// # Errors
    /// Returns [`JwtError::Decode`] when the text is not a JSON object with a `kty`.
    pub fn parse(text: &str) -> JwtResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Whether the key carries a private component
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.d.is_some()
    }

    /// Build a key usable with `algorithm`
    ///
    /// A key with `d` becomes [`KeyMaterial::PrivateKey`], otherwise
    /// [`KeyMaterial::PublicKey`].
    ///
    /// # Errors
    /// Returns [`JwtError::KeyFormat`] when the key type, curve or pinned `alg`
    /// does not fit `algorithm`, or a member is missing or malformed.
    pub fn into_key_material(self, algorithm: Algorithm) -> JwtResult<KeyMaterial> {
        if let Some(pinned) = self.alg.as_deref()
            && pinned != algorithm.as_str()
        {
            return Err(JwtError::key_format(&format!(
                "JWK is pinned to {pinned}, not {algorithm}"
            )));
        }
        match (algorithm.family(), self.kty.as_str()) {
            (AlgorithmFamily::Rsa | AlgorithmFamily::RsaPss, "RSA") => self.rsa_key(),
            (AlgorithmFamily::Ecdsa, "EC") => self.ec_key(algorithm),
            (AlgorithmFamily::EdDsa, "OKP") => self.okp_key(),
            (_, kty) => Err(JwtError::key_format(&format!(
                "JWK key type {kty:?} cannot be used with {algorithm}"
            ))),
        }
    }

    fn rsa_key(&self) -> JwtResult<KeyMaterial> {
        let n = big_uint(required(&self.n, "n")?)?;
        let e = big_uint(required(&self.e, "e")?)?;
        check_modulus(n.bits().div_ceil(8))?;
        match &self.d {
            Some(d) => {
                let d = private_component(big_uint(d)?, &n, "d")?;
                let primes = match (&self.p, &self.q) {
                    (Some(p), Some(q)) => vec![
                        private_component(big_uint(p)?, &n, "p")?,
                        private_component(big_uint(q)?, &n, "q")?,
                    ],
                    _ => Vec::new(),
                };
                let key = rsa::RsaPrivateKey::from_components(n, e, d, primes)
                    .map_err(|e| JwtError::key_format(&e.to_string()))?;
                Ok(KeyMaterial::PrivateKey(Arc::new(PrivateKey::Rsa(key))))
            }
            None => {
                let key = rsa::RsaPublicKey::new(n, e)
                    .map_err(|e| JwtError::key_format(&e.to_string()))?;
                Ok(KeyMaterial::PublicKey(Arc::new(PublicKey::Rsa(key))))
            }
        }
    }

    fn ec_key(&self, algorithm: Algorithm) -> JwtResult<KeyMaterial> {
        let expected = algorithm.curve().unwrap_or_default();
        let crv = required(&self.crv, "crv")?;
        if crv != expected {
            return Err(JwtError::key_format(&format!(
                "JWK curve {crv} cannot be used with {algorithm}"
            )));
        }

        // Uncompressed SEC1 point when both coordinates are present
        let point = match (&self.x, &self.y) {
            (Some(x), Some(y)) => {
                let mut point = vec![0x04];
                point.extend(codec::decode(x)?);
                point.extend(codec::decode(y)?);
                Some(point)
            }
            _ => None,
        };
        let scalar = self
            .d
            .as_deref()
            .map(|d| codec::decode(d).map(Zeroizing::new))
            .transpose()?;

        macro_rules! curve_key {
            ($curve:ident, $variant:ident) => {{
                use $curve::ecdsa::{SigningKey, VerifyingKey};
                match (scalar, point) {
                    (Some(scalar), point) => {
                        let key = SigningKey::from_slice(&scalar)
                            .map_err(|_| JwtError::key_format("JWK d is not a valid scalar"))?;
                        if let Some(point) = point
                            && VerifyingKey::from(&key).to_encoded_point(false).as_bytes() != point.as_slice()
                        {
                            return Err(JwtError::key_format("JWK d does not match x and y"));
                        }
                        KeyMaterial::PrivateKey(Arc::new(PrivateKey::$variant(key)))
                    }
                    (None, Some(point)) => {
                        let key = VerifyingKey::from_sec1_bytes(&point)
                            .map_err(|_| JwtError::key_format("JWK x and y are not a curve point"))?;
                        KeyMaterial::PublicKey(Arc::new(PublicKey::$variant(key)))
                    }
                    (None, None) => return Err(JwtError::key_format("JWK is missing x and y")),
                }
            }};
        }

        Ok(match algorithm {
            Algorithm::Es256 => curve_key!(p256, P256),
            Algorithm::Es384 => curve_key!(p384, P384),
            _ => curve_key!(p521, P521),
        })
    }

    fn okp_key(&self) -> JwtResult<KeyMaterial> {
        let crv = required(&self.crv, "crv")?;
        if crv != "Ed25519" {
            return Err(JwtError::key_format(&format!("unsupported OKP curve {crv}")));
        }
        let public = self.x.as_deref().map(codec::decode).transpose()?;
        if let Some(d) = &self.d {
            let seed = Zeroizing::new(codec::decode(d)?);
            let key = ed25519_dalek::SigningKey::try_from(seed.as_slice())
                .map_err(|_| JwtError::key_format("JWK d is not a 32-byte Ed25519 seed"))?;
            if let Some(public) = public
                && key.verifying_key().as_bytes().as_slice() != public.as_slice()
            {
                return Err(JwtError::key_format("JWK d does not match x"));
            }
            return Ok(KeyMaterial::PrivateKey(Arc::new(PrivateKey::Ed25519(key))));
        }
        let public = public.ok_or_else(|| JwtError::key_format("JWK is missing x"))?;
        let key = ed25519_dalek::VerifyingKey::try_from(public.as_slice())
            .map_err(|_| JwtError::key_format("JWK x is not an Ed25519 public key"))?;
        Ok(KeyMaterial::PublicKey(Arc::new(PublicKey::Ed25519(key))))
    }
}

fn required<'a>(member: &'a Option<String>, name: &str) -> JwtResult<&'a str> {
    member
        .as_deref()
        .ok_or_else(|| JwtError::key_format(&format!("JWK is missing {name}")))
}

fn big_uint(member: &str) -> JwtResult<BigUint> {
    Ok(BigUint::from_bytes_be(&codec::decode(member)?))
}

/// Private exponents and primes must lie strictly between 1 and the modulus;
/// `from_components` does arithmetic on them before validating the key
fn private_component(value: BigUint, n: &BigUint, name: &str) -> JwtResult<BigUint> {
    if value <= BigUint::from(1u8) || &value >= n {
        return Err(JwtError::key_format(&format!("JWK {name} is out of range")));
    }
    Ok(value)
}

fn check_modulus(size: usize) -> JwtResult<()> {
    if size < MIN_RSA_MODULUS_BYTES {
        return Err(JwtError::key_format("RSA keys must be at least 2048 bits"));
    }
    Ok(())
}
