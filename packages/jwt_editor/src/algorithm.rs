//! Algorithm registry
//!
//! Maps a JWS `alg` identifier to its signature family and digest. The family picks
//! both the resolver branch used for key text and the primitive used to sign and
//! verify.

use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Signature family of an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmFamily {
    /// HMAC with SHA-2
    Hmac,
    /// RSASSA-PKCS1-v1_5 with SHA-2
    Rsa,
    /// RSASSA-PSS with SHA-2 and MGF1
    RsaPss,
    /// ECDSA over a NIST prime curve
    Ecdsa,
    /// EdDSA over Ed25519
    EdDsa,
}

/// Digest used by an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashSize {
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl HashSize {
    /// Digest length in bytes
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            HashSize::Sha256 => 32,
            HashSize::Sha384 => 48,
            HashSize::Sha512 => 64,
        }
    }
}

/// Registry entry for one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlgorithmSpec {
    /// Signature family
    pub family: AlgorithmFamily,
    /// Digest
    pub hash: HashSize,
}

/// Supported JWS algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// HMAC using SHA-256
    #[serde(rename = "HS256")]
    Hs256,
    /// HMAC using SHA-384
    #[serde(rename = "HS384")]
    Hs384,
    /// HMAC using SHA-512
    #[serde(rename = "HS512")]
    Hs512,
    /// RSASSA-PKCS1-v1_5 using SHA-256
    #[serde(rename = "RS256")]
    Rs256,
    /// RSASSA-PKCS1-v1_5 using SHA-384
    #[serde(rename = "RS384")]
    Rs384,
    /// RSASSA-PKCS1-v1_5 using SHA-512
    #[serde(rename = "RS512")]
    Rs512,
    /// RSASSA-PSS using SHA-256
    #[serde(rename = "PS256")]
    Ps256,
    /// RSASSA-PSS using SHA-384
    #[serde(rename = "PS384")]
    Ps384,
    /// RSASSA-PSS using SHA-512
    #[serde(rename = "PS512")]
    Ps512,
    /// ECDSA using P-256 and SHA-256
    #[serde(rename = "ES256")]
    Es256,
    /// ECDSA using P-384 and SHA-384
    #[serde(rename = "ES384")]
    Es384,
    /// ECDSA using P-521 and SHA-512
    #[serde(rename = "ES512")]
    Es512,
    /// EdDSA using Ed25519
    #[serde(rename = "EdDSA")]
    EdDsa,
}

static REGISTRY: [(Algorithm, &str, AlgorithmSpec); 13] = {
    use AlgorithmFamily::{EdDsa, Ecdsa, Hmac, Rsa, RsaPss};
    use HashSize::{Sha256, Sha384, Sha512};
    const fn spec(family: AlgorithmFamily, hash: HashSize) -> AlgorithmSpec {
        AlgorithmSpec { family, hash }
    }
    [
        (Algorithm::Hs256, "HS256", spec(Hmac, Sha256)),
        (Algorithm::Hs384, "HS384", spec(Hmac, Sha384)),
        (Algorithm::Hs512, "HS512", spec(Hmac, Sha512)),
        (Algorithm::Rs256, "RS256", spec(Rsa, Sha256)),
        (Algorithm::Rs384, "RS384", spec(Rsa, Sha384)),
        (Algorithm::Rs512, "RS512", spec(Rsa, Sha512)),
        (Algorithm::Ps256, "PS256", spec(RsaPss, Sha256)),
        (Algorithm::Ps384, "PS384", spec(RsaPss, Sha384)),
        (Algorithm::Ps512, "PS512", spec(RsaPss, Sha512)),
        (Algorithm::Es256, "ES256", spec(Ecdsa, Sha256)),
        (Algorithm::Es384, "ES384", spec(Ecdsa, Sha384)),
        (Algorithm::Es512, "ES512", spec(Ecdsa, Sha512)),
        (Algorithm::EdDsa, "EdDSA", spec(EdDsa, Sha512)),
    ]
};

/// Look up the registry entry for an `alg` identifier
///
/// # Errors
/// Returns [`JwtError::UnsupportedAlgorithm`] for identifiers outside the registry,
/// including `none`.
pub fn lookup(id: &str) -> JwtResult<AlgorithmSpec> {
    id.parse::<Algorithm>().map(Algorithm::spec)
}

impl Algorithm {
    /// Every supported algorithm, in selector order
    pub const ALL: [Algorithm; 13] = [
        Algorithm::Hs256,
        Algorithm::Hs384,
        Algorithm::Hs512,
        Algorithm::Rs256,
        Algorithm::Rs384,
        Algorithm::Rs512,
        Algorithm::Ps256,
        Algorithm::Ps384,
        Algorithm::Ps512,
        Algorithm::Es256,
        Algorithm::Es384,
        Algorithm::Es512,
        Algorithm::EdDsa,
    ];

    fn entry(self) -> &'static (Algorithm, &'static str, AlgorithmSpec) {
        // REGISTRY is declared in the same order as the enum
        &REGISTRY[self as usize]
    }

    /// JWS identifier, e.g. `"RS256"`
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.entry().1
    }

    /// Registry entry
    #[must_use]
    pub fn spec(self) -> AlgorithmSpec {
        self.entry().2
    }

    /// Signature family
    #[must_use]
    pub fn family(self) -> AlgorithmFamily {
        self.spec().family
    }

    /// Digest
    #[must_use]
    pub fn hash(self) -> HashSize {
        self.spec().hash
    }

    /// Whether one shared secret both signs and verifies
    #[must_use]
    pub fn is_symmetric(self) -> bool {
        self.family() == AlgorithmFamily::Hmac
    }

    /// JWK `crv` name of the curve an elliptic-curve algorithm signs over
    #[must_use]
    pub fn curve(self) -> Option<&'static str> {
        match self {
            Algorithm::Es256 => Some("P-256"),
            Algorithm::Es384 => Some("P-384"),
            Algorithm::Es512 => Some("P-521"),
            Algorithm::EdDsa => Some("Ed25519"),
            _ => None,
        }
    }
}

impl FromStr for Algorithm {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGISTRY
            .iter()
            .find(|(_, id, _)| *id == s)
            .map(|(alg, _, _)| *alg)
            .ok_or_else(|| JwtError::unsupported_algorithm(s))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
