//! Signing and verification against tokens from an independent JOSE implementation

use cryypt_jwt_editor::{
    Algorithm, JwtError, KeyMaterial, Verdict, check, codec, resolve, sign, sign_text, verify,
};
use serde_json::json;

const RSA_PRIVATE: &str = include_str!("fixtures/rsa_private.pem");
const RSA_PUBLIC: &str = include_str!("fixtures/rsa_public.pem");
const RSA_OTHER_PUBLIC: &str = include_str!("fixtures/rsa_other_public.pem");
const RSA_CERT: &str = include_str!("fixtures/rsa_cert.pem");
const P256_PUBLIC: &str = include_str!("fixtures/p256_public.pem");
const P256_PUBLIC_JWK: &str = include_str!("fixtures/p256_public.jwk.json");
const ED25519_PUBLIC: &str = include_str!("fixtures/ed25519_public.pem");

fn fixture_token(text: &str) -> String {
    text.trim().to_string()
}

fn rs256_token() -> String {
    fixture_token(include_str!("fixtures/token_RS256.txt"))
}

#[test]
fn test_external_tokens_verify() {
    let cases = [
        (include_str!("fixtures/token_RS256.txt"), RSA_PUBLIC, Algorithm::Rs256),
        (include_str!("fixtures/token_RS256.txt"), RSA_CERT, Algorithm::Rs256),
        (include_str!("fixtures/token_PS384.txt"), RSA_PUBLIC, Algorithm::Ps384),
        (include_str!("fixtures/token_ES256.txt"), P256_PUBLIC, Algorithm::Es256),
        (include_str!("fixtures/token_ES256.txt"), P256_PUBLIC_JWK, Algorithm::Es256),
        (include_str!("fixtures/token_EdDSA.txt"), ED25519_PUBLIC, Algorithm::EdDsa),
        (include_str!("fixtures/token_HS256.txt"), "your-256-bit-secret", Algorithm::Hs256),
    ];
    for (token, key_text, alg) in cases {
        let token = fixture_token(token);
        let key = resolve(key_text, alg);
        assert_eq!(check(&token, &key, alg), Ok(()), "{alg} token should verify");
        assert_eq!(verify(&token, &key, alg.as_str()), Verdict::Valid);
    }
}

#[test]
fn test_rs256_signing_matches_external_token() {
    let key = resolve(RSA_PRIVATE, Algorithm::Rs256);
    let token = sign(
        &json!({"alg": "RS256", "typ": "JWT"}),
        &json!({"sub": "1234567890", "name": "John Doe", "iat": 1516239022}),
        &key,
        Algorithm::Rs256,
    );
    assert_eq!(token.ok(), Some(rs256_token()));
}

#[test]
fn test_flipped_signature_byte_is_invalid() {
    let token = rs256_token();
    let (signing_input, signature) = token.rsplit_once('.').unwrap_or_default();
    let mut bytes = codec::decode(signature).unwrap_or_default();
    bytes[0] ^= 0x01;
    let tampered = format!("{signing_input}.{}", codec::encode(&bytes));
    let key = resolve(RSA_PUBLIC, Algorithm::Rs256);
    assert_eq!(verify(&tampered, &key, "RS256"), Verdict::Invalid);
    assert_eq!(check(&tampered, &key, Algorithm::Rs256), Err(JwtError::SignatureMismatch));
}

#[test]
fn test_wrong_public_key_is_invalid() {
    let key = resolve(RSA_OTHER_PUBLIC, Algorithm::Rs256);
    assert!(matches!(key, KeyMaterial::PublicKey(_)));
    assert_eq!(verify(&rs256_token(), &key, "RS256"), Verdict::Invalid);
}

#[test]
fn test_algorithm_substitution_is_refused() {
    let hs256 = fixture_token(include_str!("fixtures/token_HS256.txt"));
    let secret = KeyMaterial::secret("your-256-bit-secret");
    assert_eq!(verify(&hs256, &secret, "none"), Verdict::Invalid);
    assert_eq!(verify(&hs256, &secret, "RS256"), Verdict::Invalid);
    // An RSA public key's PEM text used as an HMAC secret must not verify an RS256 token as HS256
    let pem_as_secret = resolve(RSA_PUBLIC, Algorithm::Hs256);
    assert_eq!(verify(&rs256_token(), &pem_as_secret, "HS256"), Verdict::Invalid);
}

#[test]
fn test_private_key_never_verifies() {
    let key = resolve(RSA_PRIVATE, Algorithm::Rs256);
    assert!(matches!(
        check(&rs256_token(), &key, Algorithm::Rs256),
        Err(JwtError::KeyRoleMismatch { .. })
    ));
}

#[test]
fn test_every_algorithm_round_trips() {
    let pairs = [
        (Algorithm::Rs256, RSA_PRIVATE, RSA_PUBLIC),
        (Algorithm::Rs384, RSA_PRIVATE, RSA_PUBLIC),
        (Algorithm::Rs512, RSA_PRIVATE, RSA_PUBLIC),
        (Algorithm::Ps256, RSA_PRIVATE, RSA_PUBLIC),
        (Algorithm::Ps384, RSA_PRIVATE, RSA_PUBLIC),
        (Algorithm::Ps512, RSA_PRIVATE, RSA_PUBLIC),
        (Algorithm::Es256, include_str!("fixtures/p256_private.pem"), P256_PUBLIC),
        (
            Algorithm::Es384,
            include_str!("fixtures/p384_private.pem"),
            include_str!("fixtures/p384_public.pem"),
        ),
        (
            Algorithm::Es512,
            include_str!("fixtures/p521_private.pem"),
            include_str!("fixtures/p521_public.pem"),
        ),
        (Algorithm::EdDsa, include_str!("fixtures/ed25519_private.pem"), ED25519_PUBLIC),
        (Algorithm::Hs256, "s3cret", "s3cret"),
        (Algorithm::Hs384, "s3cret", "s3cret"),
        (Algorithm::Hs512, "s3cret", "s3cret"),
    ];
    for (alg, private, public) in pairs {
        let header = format!("{{\"alg\":\"{alg}\",\"kid\":\"k\"}}");
        let token = match sign_text(&header, "{\"sub\":\"x\"}", &resolve(private, alg), alg) {
            Ok(token) => token,
            Err(e) => panic!("{alg} signing failed: {e}"),
        };
        assert_eq!(check(&token, &resolve(public, alg), alg), Ok(()), "{alg} round trip");
    }
}

#[test]
fn test_signer_refuses_public_keys() {
    let key = resolve(RSA_PUBLIC, Algorithm::Rs256);
    assert!(matches!(
        sign(&json!({"alg": "RS256"}), &json!({}), &key, Algorithm::Rs256),
        Err(JwtError::KeyRoleMismatch { .. })
    ));
}
