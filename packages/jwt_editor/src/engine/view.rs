//! Serializable snapshot of everything a UI renders

use super::state::{EditorState, StatusKind};
use crate::{algorithm::Algorithm, json};
use serde::{Deserialize, Serialize};

/// Signature status as `{kind, message}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusView {
    /// `info`, `valid` or `invalid`
    pub kind: StatusKind,
    /// Text shown next to the status
    pub message: String,
}

/// Field contents plus per-field validity flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorView {
    /// Compact token
    pub token: String,
    /// Header text
    pub header: String,
    /// Payload text
    pub payload: String,
    /// Selected algorithm
    pub algorithm: Algorithm,
    /// Whether a single secret field replaces the key pair
    pub symmetric: bool,
    /// Signature status
    pub status: StatusView,
    /// Header is empty or valid JSON
    pub header_valid: bool,
    /// Payload is empty or valid JSON
    pub payload_valid: bool,
    /// Private key field is empty or resolves
    pub private_key_valid: bool,
    /// Public key field is empty or resolves
    pub public_key_valid: bool,
}

impl From<&EditorState> for EditorView {
    fn from(state: &EditorState) -> Self {
        Self {
            token: state.token.clone(),
            header: state.header.clone(),
            payload: state.payload.clone(),
            algorithm: state.algorithm,
            symmetric: state.algorithm.is_symmetric(),
            status: StatusView {
                kind: state.status.kind(),
                message: state.status.message().to_string(),
            },
            header_valid: json::can_parse(&state.header),
            payload_valid: json::can_parse(&state.payload),
            private_key_valid: state.signing_key.is_valid(),
            public_key_valid: state.verifying_key.is_valid(),
        }
    }
}

impl EditorState {
    /// Render the current state
    #[must_use]
    pub fn view(&self) -> EditorView {
        EditorView::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EditEvent;

    #[test]
    fn flags_follow_field_contents() {
        let mut state = EditorState::default();
        state.apply(EditEvent::HeaderEdited("{".into()));
        state.apply(EditEvent::PrivateKeyEdited("not a key".into()));
        let view = state.view();
        assert!(!view.header_valid);
        assert!(view.payload_valid);
        assert!(!view.private_key_valid);
        assert!(view.public_key_valid);
        assert!(!view.symmetric);
    }

    #[test]
    fn serializes_status_as_kind_and_message() {
        let view = EditorState::default().view();
        let json = serde_json::to_value(&view).unwrap_or_default();
        assert_eq!(json["status"]["kind"], "info");
        assert_eq!(json["status"]["message"], "Insert a token to check signature.");
        assert_eq!(json["algorithm"], "RS256");
    }
}
