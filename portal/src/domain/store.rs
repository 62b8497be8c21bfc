//! The single authoritative complaint collection.
//!
//! The store loads the persisted collection once when opened and writes the
//! whole collection back after every successful mutation. It is the only
//! component that talks to a [`ComplaintRepository`].

use tracing::{debug, warn};

use crate::domain::ports::{ComplaintRepository, ComplaintRepositoryError};
use crate::domain::{Complaint, Error};

/// In-memory collection backed by a whole-collection repository.
///
/// ## Invariants
/// - The in-memory collection always equals the last collection that was
///   loaded or successfully saved.
#[derive(Debug)]
pub struct ComplaintStore<R> {
    repository: R,
    complaints: Vec<Complaint>,
}

impl<R> ComplaintStore<R>
where
    R: ComplaintRepository,
{
    /// Load the persisted collection. An absent record opens empty.
    pub fn open(repository: R) -> Result<Self, Error> {
        let complaints = repository.load().map_err(|error| {
            warn!(error = %error, "complaint store load failed");
            map_repository_error(&error)
        })?;
        debug!(count = complaints.len(), "complaint store opened");
        Ok(Self {
            repository,
            complaints,
        })
    }

    /// The full collection in insertion order.
    pub fn complaints(&self) -> &[Complaint] {
        self.complaints.as_slice()
    }

    /// The backing repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Apply `change` to a working copy and persist the result.
    ///
    /// When `change` fails the collection is untouched and nothing is saved.
    /// When the save fails the collection keeps its last persisted state and
    /// the call returns a persistence failure; the next mutation saves the
    /// whole collection again.
    pub fn mutate<T, F>(&mut self, change: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Vec<Complaint>) -> Result<T, Error>,
    {
        let mut working = self.complaints.clone();
        let outcome = change(&mut working)?;

        if let Err(error) = self.repository.save(&working) {
            warn!(error = %error, "complaint store save failed; keeping last persisted state");
            return Err(map_repository_error(&error));
        }

        debug!(count = working.len(), "complaint store saved");
        self.complaints = working;
        Ok(outcome)
    }
}

fn map_repository_error(error: &ComplaintRepositoryError) -> Error {
    Error::persistence_failure(error.to_string())
}
