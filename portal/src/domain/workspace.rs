//! Role-specific handles over the complaint store.
//!
//! A [`Workspace`] is what a signed-in caller gets from the session context.
//! Administrators receive an [`AdminDesk`], the only handle that can change a
//! status. Everyone else receives a [`MemberDesk`], the only handle that can
//! submit or remove complaints.

use crate::domain::ports::ComplaintRepository;
use crate::domain::{
    CaseSummary, Complaint, ComplaintId, ComplaintStore, ComplaintSubmission, Error,
    LifecycleEngine, StatusTrack, StatusUpdate, User, is_visible_to,
};

/// The projection a signed-in caller is entitled to.
#[derive(Debug)]
pub enum Workspace<'a, R> {
    /// Oversight of every complaint.
    Admin(AdminDesk<'a, R>),
    /// The caller's own complaints.
    Member(MemberDesk<'a, R>),
}

impl<'a, R> Workspace<'a, R> {
    /// The administrative desk, or `Forbidden` for a member session.
    pub fn into_admin(self) -> Result<AdminDesk<'a, R>, Error> {
        match self {
            Self::Admin(desk) => Ok(desk),
            Self::Member(_) => Err(Error::forbidden(
                "this action requires an administrator session",
            )),
        }
    }

    /// The member desk, or `Forbidden` for an administrator session.
    pub fn into_member(self) -> Result<MemberDesk<'a, R>, Error> {
        match self {
            Self::Member(desk) => Ok(desk),
            Self::Admin(_) => Err(Error::forbidden(
                "administrators cannot submit or remove complaints",
            )),
        }
    }
}

/// Administrative view over the whole collection.
#[derive(Debug)]
pub struct AdminDesk<'a, R> {
    user: &'a User,
    engine: &'a LifecycleEngine,
    store: &'a mut ComplaintStore<R>,
}

impl<'a, R> AdminDesk<'a, R>
where
    R: ComplaintRepository,
{
    pub(crate) fn new(
        user: &'a User,
        engine: &'a LifecycleEngine,
        store: &'a mut ComplaintStore<R>,
    ) -> Self {
        Self {
            user,
            engine,
            store,
        }
    }

    /// Signed-in administrator.
    pub fn user(&self) -> &User {
        self.user
    }

    /// Every complaint in insertion order.
    pub fn complaints(&self) -> Vec<&Complaint> {
        self.engine.project(self.store.complaints(), self.user)
    }

    /// The complaint `id`.
    pub fn find(&self, id: &ComplaintId) -> Result<&Complaint, Error> {
        self.store
            .complaints()
            .iter()
            .find(|complaint| complaint.id() == id)
            .ok_or_else(|| Error::not_found(format!("complaint {id} not found")))
    }

    /// Change the status of complaint `id` and persist the collection.
    pub fn update_status(
        &mut self,
        id: &ComplaintId,
        update: StatusUpdate,
    ) -> Result<Complaint, Error> {
        let engine = self.engine;
        self.store
            .mutate(|complaints| engine.update_status(complaints, id, update))
    }

    /// Case counts across the whole collection.
    pub fn summary(&self) -> CaseSummary {
        CaseSummary::of(self.complaints())
    }
}

/// Member view over the caller's own complaints.
#[derive(Debug)]
pub struct MemberDesk<'a, R> {
    user: &'a User,
    engine: &'a LifecycleEngine,
    store: &'a mut ComplaintStore<R>,
}

impl<'a, R> MemberDesk<'a, R>
where
    R: ComplaintRepository,
{
    pub(crate) fn new(
        user: &'a User,
        engine: &'a LifecycleEngine,
        store: &'a mut ComplaintStore<R>,
    ) -> Self {
        Self {
            user,
            engine,
            store,
        }
    }

    /// Signed-in member.
    pub fn user(&self) -> &User {
        self.user
    }

    /// The caller's complaints in insertion order.
    pub fn complaints(&self) -> Vec<&Complaint> {
        self.engine.project(self.store.complaints(), self.user)
    }

    /// File a new complaint and persist the collection.
    pub fn submit(&mut self, submission: ComplaintSubmission) -> Result<Complaint, Error> {
        let engine = self.engine;
        let user = self.user;
        self.store
            .mutate(|complaints| engine.create(complaints, user, submission))
    }

    /// Withdraw one of the caller's complaints and persist the collection.
    pub fn remove(&mut self, id: &ComplaintId) -> Result<Complaint, Error> {
        let engine = self.engine;
        let user = self.user;
        self.store
            .mutate(|complaints| engine.remove(complaints, id, user))
    }

    /// Tracker strip for one of the caller's complaints.
    pub fn track(&self, id: &ComplaintId) -> Result<StatusTrack, Error> {
        self.store
            .complaints()
            .iter()
            .find(|complaint| complaint.id() == id && is_visible_to(*complaint, self.user))
            .map(StatusTrack::of)
            .ok_or_else(|| Error::not_found(format!("complaint {id} not found")))
    }
}
