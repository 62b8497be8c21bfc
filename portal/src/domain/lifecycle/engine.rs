//! Lifecycle engine applying create, update, and remove to a collection.
//!
//! The engine is role-agnostic: it never checks whether a caller may update
//! a status. That gate lives in the workspace handles handed out by the
//! session context. Every operation validates before touching the
//! collection, so a failed call leaves it unchanged.

use std::fmt;
use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::ComplaintIdGenerator;
use crate::domain::{
    Complaint, ComplaintId, ComplaintSubmission, ComplaintValidationError, Error, Identity,
    StatusUpdate,
};

use super::{TransitionTable, is_owned_by, project};

/// Candidate ids drawn before creation gives up.
pub const MAX_ID_ATTEMPTS: usize = 8;

/// Applies lifecycle operations to a complaint collection.
#[derive(Clone)]
pub struct LifecycleEngine {
    transitions: TransitionTable,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn ComplaintIdGenerator>,
}

impl LifecycleEngine {
    /// Create an engine from its collaborators.
    pub fn new(
        transitions: TransitionTable,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn ComplaintIdGenerator>,
    ) -> Self {
        Self {
            transitions,
            clock,
            ids,
        }
    }

    /// Transition table in force.
    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    /// Append a freshly submitted complaint owned by `submitter`.
    ///
    /// Fails with a validation error when the anonymity disclosure was not
    /// confirmed, and with an internal error if no unused id could be drawn.
    pub fn create<I>(
        &self,
        complaints: &mut Vec<Complaint>,
        submitter: &I,
        submission: ComplaintSubmission,
    ) -> Result<Complaint, Error>
    where
        I: Identity + ?Sized,
    {
        if !submission.anonymity_confirmed() {
            return Err(ComplaintValidationError::AnonymityNotConfirmed.into());
        }

        let id = self.unused_id(complaints)?;
        let complaint = Complaint::submitted(id, submitter, submission, self.clock.utc());
        complaints.push(complaint.clone());
        info!(
            complaint_id = %complaint.id(),
            category = %complaint.category(),
            priority = %complaint.priority(),
            "complaint submitted"
        );
        Ok(complaint)
    }

    /// Move the complaint `id` to the status in `update`.
    ///
    /// Feedback in `update` replaces the stored feedback; absent feedback
    /// keeps it. Callers must hold the administrative projection.
    pub fn update_status(
        &self,
        complaints: &mut [Complaint],
        id: &ComplaintId,
        update: StatusUpdate,
    ) -> Result<Complaint, Error> {
        let slot = complaints
            .iter_mut()
            .find(|complaint| complaint.id() == id)
            .ok_or_else(|| not_found(id))?;

        let from = slot.status();
        let to = update.status();
        if !self.transitions.allows(from, to) {
            return Err(Error::invalid_status(format!(
                "complaint {id} cannot move from {from} to {to}"
            )));
        }

        let updated = slot.with_status(to, update.into_feedback(), self.clock.utc());
        *slot = updated.clone();
        info!(complaint_id = %id, from = %from, to = %to, "complaint status updated");
        Ok(updated)
    }

    /// Delete the complaint `id` owned by `caller`.
    ///
    /// A complaint that exists but belongs to someone else is reported as
    /// not found, as is an administrator's attempt on a complaint they did
    /// not file.
    pub fn remove<I>(
        &self,
        complaints: &mut Vec<Complaint>,
        id: &ComplaintId,
        caller: &I,
    ) -> Result<Complaint, Error>
    where
        I: Identity + ?Sized,
    {
        let position = complaints
            .iter()
            .position(|complaint| complaint.id() == id && is_owned_by(complaint, caller))
            .ok_or_else(|| not_found(id))?;
        let removed = complaints.remove(position);
        info!(complaint_id = %id, "complaint removed");
        Ok(removed)
    }

    /// The complaints visible to `caller`, in collection order.
    pub fn project<'a, I>(&self, complaints: &'a [Complaint], caller: &I) -> Vec<&'a Complaint>
    where
        I: Identity + ?Sized,
    {
        project(complaints, caller)
    }

    fn unused_id(&self, complaints: &[Complaint]) -> Result<ComplaintId, Error> {
        for attempt in 1..=MAX_ID_ATTEMPTS {
            let candidate = self.ids.next_id();
            if complaints.iter().all(|complaint| complaint.id() != &candidate) {
                return Ok(candidate);
            }
            debug!(attempt, "complaint id collision; drawing another");
        }
        Err(Error::internal(format!(
            "no unused complaint id after {MAX_ID_ATTEMPTS} attempts"
        )))
    }
}

impl fmt::Debug for LifecycleEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleEngine")
            .field("transitions", &self.transitions)
            .finish_non_exhaustive()
    }
}

fn not_found(id: &ComplaintId) -> Error {
    Error::not_found(format!("complaint {id} not found"))
}
