//! The persisted complaint entity and its wire representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Email, Identity, UserId};

use super::{Category, ComplaintId, ComplaintSubmission, ComplaintValidationError, Priority, Status};

/// Input payload for [`Complaint::new`].
///
/// Used when rebuilding complaints from storage or fixtures; fresh
/// complaints come from the lifecycle engine.
#[derive(Debug, Clone)]
pub struct ComplaintDraft {
    /// Tracking identifier.
    pub id: ComplaintId,
    /// Session id of the submitter at creation time.
    pub user_id: UserId,
    /// Submitter email used as the secondary ownership key.
    pub anonymous_email: Option<Email>,
    /// Subject area.
    pub category: Category,
    /// Submitter-assigned urgency.
    pub priority: Priority,
    /// Workflow status.
    pub status: Status,
    /// Free-text description.
    pub description: String,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Last mutation instant.
    pub updated_at: DateTime<Utc>,
    /// Administrator feedback, if any has been recorded.
    pub admin_feedback: Option<String>,
}

/// A grievance in the shared collection.
///
/// ## Invariants
/// - `created_at <= updated_at`.
/// - `created_at` never changes after creation.
/// - `status` is drawn from the closed set by construction.
///
/// Serialised with camelCase keys; `adminFeedback` and `anonymousEmail` are
/// omitted when unset. Deserialisation re-checks the invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ComplaintDto", into = "ComplaintDto")]
pub struct Complaint {
    id: ComplaintId,
    user_id: UserId,
    anonymous_email: Option<Email>,
    category: Category,
    priority: Priority,
    status: Status,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    admin_feedback: Option<String>,
}

impl Complaint {
    /// Rebuild a complaint, validating the timestamp invariant.
    pub fn new(draft: ComplaintDraft) -> Result<Self, ComplaintValidationError> {
        Self::try_from(draft)
    }

    /// A freshly submitted complaint owned by `submitter`.
    pub(crate) fn submitted<I>(
        id: ComplaintId,
        submitter: &I,
        submission: ComplaintSubmission,
        now: DateTime<Utc>,
    ) -> Self
    where
        I: Identity + ?Sized,
    {
        let (category, priority, description) = submission.into_parts();
        Self {
            id,
            user_id: submitter.user_id().clone(),
            anonymous_email: Some(submitter.email().clone()),
            category,
            priority,
            status: Status::Submitted,
            description,
            created_at: now,
            updated_at: now,
            admin_feedback: None,
        }
    }

    /// Copy of this complaint moved to `status`.
    ///
    /// `feedback` replaces the stored feedback only when present. The new
    /// `updated_at` never precedes the previous one.
    pub(crate) fn with_status(
        &self,
        status: Status,
        feedback: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            status,
            admin_feedback: feedback.or_else(|| self.admin_feedback.clone()),
            updated_at: now.max(self.updated_at),
            ..self.clone()
        }
    }

    /// Tracking identifier.
    pub fn id(&self) -> &ComplaintId {
        &self.id
    }

    /// Session id of the submitter at creation time.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Submitter email, when recorded.
    pub fn anonymous_email(&self) -> Option<&Email> {
        self.anonymous_email.as_ref()
    }

    /// Subject area.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Submitter-assigned urgency.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Workflow status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Free-text description.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Creation instant.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last mutation instant.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Administrator feedback.
    pub fn admin_feedback(&self) -> Option<&str> {
        self.admin_feedback.as_deref()
    }
}

impl TryFrom<ComplaintDraft> for Complaint {
    type Error = ComplaintValidationError;

    fn try_from(draft: ComplaintDraft) -> Result<Self, Self::Error> {
        let ComplaintDraft {
            id,
            user_id,
            anonymous_email,
            category,
            priority,
            status,
            description,
            created_at,
            updated_at,
            admin_feedback,
        } = draft;

        if updated_at < created_at {
            return Err(ComplaintValidationError::UpdatedBeforeCreated);
        }

        Ok(Self {
            id,
            user_id,
            anonymous_email,
            category,
            priority,
            status,
            description,
            created_at,
            updated_at,
            admin_feedback,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComplaintDto {
    id: ComplaintId,
    user_id: UserId,
    category: Category,
    description: String,
    priority: Priority,
    status: Status,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    admin_feedback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    anonymous_email: Option<Email>,
}

impl From<Complaint> for ComplaintDto {
    fn from(value: Complaint) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            category: value.category,
            description: value.description,
            priority: value.priority,
            status: value.status,
            created_at: value.created_at,
            updated_at: value.updated_at,
            admin_feedback: value.admin_feedback,
            anonymous_email: value.anonymous_email,
        }
    }
}

impl TryFrom<ComplaintDto> for Complaint {
    type Error = ComplaintValidationError;

    fn try_from(value: ComplaintDto) -> Result<Self, Self::Error> {
        Complaint::new(ComplaintDraft {
            id: value.id,
            user_id: value.user_id,
            anonymous_email: value.anonymous_email,
            category: value.category,
            priority: value.priority,
            status: value.status,
            description: value.description,
            created_at: value.created_at,
            updated_at: value.updated_at,
            admin_feedback: value.admin_feedback,
        })
    }
}
