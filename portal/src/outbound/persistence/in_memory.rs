//! In-memory adapter holding the serialized collection as text.
//!
//! Behaves like a single browser storage slot: the collection is stored as
//! the same JSON text the file adapter writes, so round-trips exercise the
//! real wire format.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::domain::Complaint;
use crate::domain::ports::{ComplaintRepository, ComplaintRepositoryError};

use super::json_file_repository::{decode, encode};

/// Complaint repository backed by a text slot in memory.
#[derive(Debug, Default)]
pub struct InMemoryComplaintRepository {
    slot: Mutex<Option<String>>,
}

impl InMemoryComplaintRepository {
    /// An empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-filled with `text`, as if written by an earlier session.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(text.into())),
        }
    }

    /// The text currently stored, if any.
    pub fn text(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ComplaintRepository for InMemoryComplaintRepository {
    fn load(&self) -> Result<Vec<Complaint>, ComplaintRepositoryError> {
        let guard = self.lock();
        let complaints = match guard.as_deref() {
            Some(text) => decode(text)?,
            None => Vec::new(),
        };
        debug!(count = complaints.len(), "in-memory complaint slot loaded");
        Ok(complaints)
    }

    fn save(&self, complaints: &[Complaint]) -> Result<(), ComplaintRepositoryError> {
        let text = encode(complaints)?;
        *self.lock() = Some(text);
        debug!(count = complaints.len(), "in-memory complaint slot written");
        Ok(())
    }
}
