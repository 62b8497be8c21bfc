//! Complaint lifecycle: status transitions, ownership projections, and the
//! engine applying mutations to the shared collection.

mod engine;
mod projection;
mod summary;
mod transitions;

pub use engine::{LifecycleEngine, MAX_ID_ATTEMPTS};
pub use projection::{is_owned_by, is_visible_to, project};
pub use summary::{CaseSummary, StatusTrack, TrackStage};
pub use transitions::TransitionTable;
