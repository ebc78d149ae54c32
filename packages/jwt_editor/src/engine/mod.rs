//! Edit synchronization engine
//!
//! One edited field propagates to every dependent field through [`transition()`].
//! [`EditorSession`] runs the same step asynchronously with last-edit-wins commits.

mod event;
mod session;
mod state;
mod transition;
mod view;

pub use event::EditEvent;
pub use session::{EditorSession, Submission};
pub use state::{EditorState, SignatureStatus, StatusKind};
pub use transition::transition;
pub use view::{EditorView, StatusView};
