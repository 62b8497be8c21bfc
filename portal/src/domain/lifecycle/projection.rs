//! Ownership and visibility rules for complaint projections.

use crate::domain::{Complaint, Identity};

/// Whether `complaint` belongs to `caller`.
///
/// Ownership matches either the session id recorded at creation or the
/// submitter email, so complaints stay reachable after a fresh sign-in.
pub fn is_owned_by<I>(complaint: &Complaint, caller: &I) -> bool
where
    I: Identity + ?Sized,
{
    complaint.user_id() == caller.user_id()
        || complaint.anonymous_email() == Some(caller.email())
}

/// Whether `caller` may see `complaint`. Administrators see everything.
pub fn is_visible_to<I>(complaint: &Complaint, caller: &I) -> bool
where
    I: Identity + ?Sized,
{
    caller.role().is_admin() || is_owned_by(complaint, caller)
}

/// The complaints visible to `caller`, in collection order.
pub fn project<'a, I>(complaints: &'a [Complaint], caller: &I) -> Vec<&'a Complaint>
where
    I: Identity + ?Sized,
{
    complaints
        .iter()
        .filter(|complaint| is_visible_to(complaint, caller))
        .collect()
}
