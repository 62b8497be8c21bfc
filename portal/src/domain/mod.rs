//! Domain primitives, lifecycle rules, and ports.
//!
//! Purpose: Define the complaint entity model and the rules for creating,
//! updating, removing, and projecting complaints. Adapters reach persistence
//! and identity only through the traits in [`ports`].
//!
//! Public surface:
//! - Error (alias to `error::DomainError`): error payload with a stable code.
//! - Complaint (alias to `complaint::Complaint`): the persisted entity.
//! - LifecycleEngine: create, update, remove, and project operations.
//! - ComplaintStore: the authoritative collection and its save contract.
//! - SessionContext / Workspace: the signed-in identity and its desk.

pub mod auth;
pub mod complaint;
pub mod error;
pub mod lifecycle;
pub mod ports;
pub mod session;
pub mod store;
pub mod user;
pub mod workspace;

pub use self::auth::{LoginForm, LoginValidationError};
pub use self::complaint::{
    Category, Complaint, ComplaintDraft, ComplaintId, ComplaintSubmission,
    ComplaintValidationError, DESCRIPTION_MAX, ParseCategoryError, ParsePriorityError,
    ParseStatusError, Priority, Status, StatusUpdate,
};
pub use self::error::{DomainError, DomainError as Error, DomainErrorValidationError, ErrorCode};
pub use self::lifecycle::{
    CaseSummary, LifecycleEngine, MAX_ID_ATTEMPTS, StatusTrack, TrackStage, TransitionTable,
    is_owned_by, is_visible_to, project,
};
pub use self::session::SessionContext;
pub use self::store::ComplaintStore;
pub use self::user::{
    DisplayName, Email, Identity, ParseRoleError, Role, User, UserId, UserValidationError,
};
pub use self::workspace::{AdminDesk, MemberDesk, Workspace};
