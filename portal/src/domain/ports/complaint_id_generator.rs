//! Port for minting complaint tracking ids.

use uuid::Uuid;

use crate::domain::ComplaintId;

/// Source of fresh complaint ids.
///
/// Implementations should make collisions vanishingly unlikely; the
/// lifecycle engine still checks each candidate against the collection.
#[cfg_attr(test, mockall::automock)]
pub trait ComplaintIdGenerator: Send + Sync {
    /// Produce the next candidate id.
    fn next_id(&self) -> ComplaintId;
}

/// Generates ids from random UUID v4 values rendered as upper-case hex.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidComplaintIdGenerator;

impl ComplaintIdGenerator for UuidComplaintIdGenerator {
    fn next_id(&self) -> ComplaintId {
        ComplaintId::from_uuid(Uuid::new_v4())
    }
}
