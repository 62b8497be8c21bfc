//! Port abstraction for the durable complaint collection.
//!
//! The collection is persisted as one serialized record under a well-known
//! key. Adapters load it whole and replace it whole; there is no per-record
//! access.

use crate::domain::Complaint;

use super::define_port_error;

define_port_error! {
    /// Errors raised by complaint repository adapters.
    pub enum ComplaintRepositoryError {
        /// The stored record could not be read.
        Read { message: String } => "complaint store read failed: {message}",
        /// The collection could not be written.
        Write { message: String } => "complaint store write failed: {message}",
        /// The stored record is not a valid complaint collection.
        Corrupt { message: String } => "complaint store record is corrupt: {message}",
    }
}

/// Whole-collection persistence for complaints.
///
/// `load` on an absent record returns an empty collection. `save` replaces the
/// stored record; partial writes must never become visible to a later `load`.
#[cfg_attr(test, mockall::automock)]
pub trait ComplaintRepository: Send + Sync {
    /// Read the full collection in stored order.
    fn load(&self) -> Result<Vec<Complaint>, ComplaintRepositoryError>;

    /// Replace the stored collection with `complaints`.
    fn save(&self, complaints: &[Complaint]) -> Result<(), ComplaintRepositoryError>;
}

/// Fixture repository that starts empty and discards writes.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureComplaintRepository;

impl ComplaintRepository for FixtureComplaintRepository {
    fn load(&self) -> Result<Vec<Complaint>, ComplaintRepositoryError> {
        Ok(Vec::new())
    }

    fn save(&self, _complaints: &[Complaint]) -> Result<(), ComplaintRepositoryError> {
        Ok(())
    }
}
