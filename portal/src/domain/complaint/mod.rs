//! Complaint entity model.
//!
//! Complaints are the only persisted entity. Categories, priorities, and
//! statuses are closed sets; form input is parsed into them at the boundary
//! by [`ComplaintSubmission`] and [`StatusUpdate`].

use std::fmt;

use crate::domain::Error;

mod entity;
mod enums;
mod id;
mod submission;
#[cfg(test)]
mod tests;

pub use entity::{Complaint, ComplaintDraft};
pub use enums::{
    Category, ParseCategoryError, ParsePriorityError, ParseStatusError, Priority, Status,
};
pub use id::ComplaintId;
pub use submission::{ComplaintSubmission, DESCRIPTION_MAX, StatusUpdate};

/// Validation errors raised by complaint constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplaintValidationError {
    /// The description was blank.
    EmptyDescription,
    /// The description exceeded the character limit.
    DescriptionTooLong {
        /// Maximum permitted characters.
        max: usize,
    },
    /// The category was outside the closed set.
    UnknownCategory {
        /// Rejected input.
        input: String,
    },
    /// The priority was outside the closed set.
    UnknownPriority {
        /// Rejected input.
        input: String,
    },
    /// The status was outside the closed set.
    UnknownStatus {
        /// Rejected input.
        input: String,
    },
    /// The anonymity disclosure was not acknowledged.
    AnonymityNotConfirmed,
    /// The complaint id was empty.
    EmptyId,
    /// The complaint id contained characters outside `[A-Za-z0-9-]`.
    InvalidId {
        /// Rejected input.
        input: String,
    },
    /// `updated_at` preceded `created_at`.
    UpdatedBeforeCreated,
}

impl fmt::Display for ComplaintValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "description must not be empty"),
            Self::DescriptionTooLong { max } => {
                write!(f, "description must be at most {max} characters")
            }
            Self::UnknownCategory { input } => write!(f, "unknown complaint category: {input}"),
            Self::UnknownPriority { input } => write!(f, "unknown complaint priority: {input}"),
            Self::UnknownStatus { input } => write!(f, "unknown complaint status: {input}"),
            Self::AnonymityNotConfirmed => {
                write!(f, "the anonymity disclosure must be confirmed before submitting")
            }
            Self::EmptyId => write!(f, "complaint id must not be empty"),
            Self::InvalidId { input } => write!(
                f,
                "complaint id may only contain ASCII letters, digits, or '-': {input}"
            ),
            Self::UpdatedBeforeCreated => {
                write!(f, "complaint updatedAt must be >= createdAt")
            }
        }
    }
}

impl std::error::Error for ComplaintValidationError {}

impl From<ComplaintValidationError> for Error {
    fn from(value: ComplaintValidationError) -> Self {
        match value {
            ComplaintValidationError::UnknownStatus { .. } => {
                Self::invalid_status(value.to_string())
            }
            other => Self::validation(other.to_string()),
        }
    }
}
