//! Async editing session
//!
//! Edits are staged in order and folded over the last committed state on the
//! blocking pool, so RSA signing never stalls the executor. Only the cascade started
//! by the newest edit may commit; older cascades finish and are discarded. Because
//! every cascade folds all staged edits, a discarded cascade loses no input.
//!
//! An edit whose step panics is dropped from the staging queue and never folded again.

use super::{
    event::EditEvent,
    state::EditorState,
    transition::transition,
    view::EditorView,
};
use crate::{
    config::EditorConfig,
    error::{JwtError, JwtResult},
};
use arc_swap::ArcSwap;
use std::{
    panic::{self, AssertUnwindSafe},
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// One cascade step
type Step = fn(EditorState, EditEvent) -> EditorState;

/// What happened to a submitted edit
#[derive(Debug, Clone)]
pub enum Submission {
    /// This cascade committed; the new state
    Committed(Arc<EditorState>),
    /// A newer edit arrived first; its cascade commits this edit too
    Superseded,
}

/// One editing session with last-edit-wins commits
pub struct EditorSession {
    committed: ArcSwap<EditorState>,
    staged: Mutex<Vec<(u64, EditEvent)>>,
    sequence: AtomicU64,
    step: Step,
}

impl EditorSession {
    /// Start a session with empty fields
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self::with_step(config, transition)
    }

    fn with_step(config: EditorConfig, step: Step) -> Self {
        Self {
            committed: ArcSwap::from_pointee(EditorState::new(config)),
            staged: Mutex::new(Vec::new()),
            sequence: AtomicU64::new(0),
            step,
        }
    }

    /// Last committed state
    #[must_use]
    pub fn snapshot(&self) -> Arc<EditorState> {
        self.committed.load_full()
    }

    /// Render the last committed state
    #[must_use]
    pub fn view(&self) -> EditorView {
        self.committed.load().view()
    }

    /// Sequence number of the newest submitted edit
    #[must_use]
    pub fn latest_sequence(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }

    /// Stage an edit and run the cascade
    ///
    /// # Errors
    /// Returns [`JwtError::TaskFailed`] when this edit could not be applied. The edit
    /// is dropped; every other staged edit is still folded, by this cascade or the
    /// next one.
    pub async fn submit(&self, event: EditEvent) -> JwtResult<Submission> {
        let (sequence, base, events) = {
            let mut staged = self.staged.lock().await;
            let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
            staged.push((sequence, event));
            (sequence, self.committed.load_full(), staged.clone())
        };

        let step = self.step;
        let cascade = tokio::task::spawn_blocking(move || fold_staged(step, &base, events)).await;

        let mut staged = self.staged.lock().await;
        let (next, rejected) = match cascade {
            Ok(folded) => folded,
            Err(e) => {
                staged.retain(|(staged_sequence, _)| *staged_sequence != sequence);
                warn!(sequence, error = %e, "edit cascade failed");
                return Err(JwtError::TaskFailed(e.to_string()));
            }
        };
        if !rejected.is_empty() {
            staged.retain(|(staged_sequence, _)| !rejected.contains(staged_sequence));
            warn!(sequence, ?rejected, "dropped edits that panicked");
        }

        let outcome = if self.sequence.load(Ordering::SeqCst) == sequence {
            let next = Arc::new(next);
            self.committed.store(Arc::clone(&next));
            staged.clear();
            debug!(sequence, "edit cascade committed");
            Submission::Committed(next)
        } else {
            debug!(sequence, "edit cascade superseded");
            Submission::Superseded
        };

        if rejected.contains(&sequence) {
            return Err(JwtError::TaskFailed(format!("edit {sequence} could not be applied")));
        }
        Ok(outcome)
    }
}

/// Fold staged edits over `base`, returning the sequence numbers of edits that panicked
///
/// A panicking edit leaves the state as it was before that edit.
fn fold_staged(step: Step, base: &EditorState, events: Vec<(u64, EditEvent)>) -> (EditorState, Vec<u64>) {
    let mut state = base.clone();
    let mut rejected = Vec::new();
    for (sequence, event) in events {
        let before = state.clone();
        match panic::catch_unwind(AssertUnwindSafe(|| step(state, event))) {
            Ok(next) => state = next,
            Err(_) => {
                rejected.push(sequence);
                state = before;
            }
        }
    }
    (state, rejected)
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Algorithm, SignatureStatus};

    const BROKEN: &str = "{\"broken\":true}";

    fn step_rejecting_broken_payload(state: EditorState, event: EditEvent) -> EditorState {
        if event == EditEvent::PayloadEdited(BROKEN.into()) {
            panic!("payload step failed");
        }
        transition(state, event)
    }

    fn hs256_session() -> EditorSession {
        let config = EditorConfig {
            default_algorithm: Algorithm::Hs256,
            ..EditorConfig::default()
        };
        EditorSession::with_step(config, step_rejecting_broken_payload)
    }

    #[tokio::test]
    async fn failing_edit_is_dropped_and_session_recovers() {
        let session = hs256_session();
        for event in [
            EditEvent::HeaderEdited("{\"alg\":\"HS256\"}".into()),
            EditEvent::SecretEdited("abc".into()),
            EditEvent::PayloadEdited("{\"sub\":\"1\"}".into()),
        ] {
            assert!(matches!(session.submit(event).await, Ok(Submission::Committed(_))));
        }
        let before = session.snapshot();

        let failed = session.submit(EditEvent::PayloadEdited(BROKEN.into())).await;
        assert!(matches!(failed, Err(JwtError::TaskFailed(_))));
        assert_eq!(session.snapshot().payload(), before.payload());
        assert_eq!(session.snapshot().token(), before.token());
        assert!(session.staged.lock().await.is_empty());

        let next = session.submit(EditEvent::PayloadEdited("{\"sub\":\"2\"}".into())).await;
        assert!(matches!(next, Ok(Submission::Committed(_))));
        assert_eq!(session.snapshot().payload(), "{\"sub\":\"2\"}");
        assert_eq!(session.snapshot().status(), &SignatureStatus::Valid);
        assert!(session.staged.lock().await.is_empty());
    }

    #[test]
    fn fold_skips_only_the_failing_edit() {
        let base = EditorState::new(EditorConfig::default());
        let events = vec![
            (1, EditEvent::PayloadEdited("{\"a\":1}".into())),
            (2, EditEvent::PayloadEdited(BROKEN.into())),
            (3, EditEvent::HeaderEdited("{\"alg\":\"RS256\"}".into())),
        ];
        let (state, rejected) = fold_staged(step_rejecting_broken_payload, &base, events);
        assert_eq!(rejected, vec![2]);
        assert_eq!(state.payload(), "{\"a\":1}");
        assert_eq!(state.header(), "{\"alg\":\"RS256\"}");
    }
}
