//! Signed-token (JWT) editor engine
//!
//! This crate keeps the fields of a token editor consistent with each other:
//! - Base64URL codec and an algorithm registry (HS*, RS*, PS*, ES*, EdDSA)
//! - Key resolution from raw text: secrets, PEM PKCS8, JWK, PEM SPKI, X.509
//! - Compact JWS signing, and verification pinned to an expected algorithm
//! - A pure `(state, event) -> state` synchronization step plus an async session
//!
//! ```
//! use cryypt_jwt_editor::{Algorithm, EditEvent, EditorState, SignatureStatus};
//!
//! let mut state = EditorState::default();
//! state.apply(EditEvent::AlgorithmSelected(Algorithm::Hs256));
//! state.apply(EditEvent::HeaderEdited(r#"{"alg":"HS256","typ":"JWT"}"#.into()));
//! state.apply(EditEvent::PayloadEdited(r#"{"sub":"1"}"#.into()));
//! state.apply(EditEvent::SecretEdited("abc".into()));
//! assert_eq!(state.status(), &SignatureStatus::Valid);
//! ```

pub mod algorithm;
mod algorithms;
pub mod codec;
pub mod config;
pub mod engine;
mod error;
pub mod json;
pub mod key;
pub mod logging;
pub mod signer;
pub mod verifier;

pub use algorithm::{Algorithm, AlgorithmFamily, AlgorithmSpec, HashSize, lookup};
pub use algorithms::{sign_message, verify_message};
pub use config::EditorConfig;
pub use engine::{
    EditEvent, EditorSession, EditorState, EditorView, SignatureStatus, StatusKind, StatusView, Submission,
    transition,
};
pub use error::*;
pub use key::{KeyMaterial, PrivateKey, PublicKey, is_valid_key, resolve, try_resolve};
pub use signer::{sign, sign_text};
pub use verifier::{Verdict, check, verify};
