//! Signature primitives, one module per family

mod core;
mod ecdsa;
mod eddsa;
mod hmac;
mod rsa;

pub use self::core::{sign_message, verify_message};
