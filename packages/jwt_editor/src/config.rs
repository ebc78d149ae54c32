//! Editor configuration

use crate::{
    algorithm::Algorithm,
    error::{JwtError, JwtResult},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Session settings; every field has a default, so `{}` is a complete config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Algorithm selected when a session starts
    #[serde(default = "default_algorithm")]
    pub default_algorithm: Algorithm,
    /// Indent width for decoded and patched JSON
    #[serde(default = "default_json_indent")]
    pub json_indent: usize,
    /// Replace typographic quotes in header and payload edits
    #[serde(default = "default_normalize_quotes")]
    pub normalize_quotes: bool,
}

fn default_algorithm() -> Algorithm {
    Algorithm::Rs256
}

fn default_json_indent() -> usize {
    2
}

fn default_normalize_quotes() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_algorithm: default_algorithm(),
            json_indent: default_json_indent(),
            normalize_quotes: default_normalize_quotes(),
        }
    }
}

impl EditorConfig {
    /// Parse a JSON config document
    ///
    /// # Errors
    /// Returns [`JwtError::Decode`] for invalid JSON or an unknown algorithm id.
    pub fn from_json_str(text: &str) -> JwtResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON config file
    ///
    /// # Errors
    /// Returns [`JwtError::Decode`] when the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> JwtResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| JwtError::decode(&format!("cannot read {}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }
}
