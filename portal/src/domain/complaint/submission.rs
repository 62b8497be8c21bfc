//! Validated inputs for creating complaints and updating their status.
//!
//! Form values arrive as free text; these constructors are the boundary where
//! anything outside a closed set is rejected.

use super::{Category, ComplaintValidationError, Priority, Status};

/// Maximum description length, in characters.
pub const DESCRIPTION_MAX: usize = 1000;

/// Validated complaint form.
///
/// ## Invariants
/// - `description` is non-empty once trimmed and at most
///   [`DESCRIPTION_MAX`] characters.
///
/// The anonymity confirmation is carried rather than enforced here; the
/// lifecycle engine refuses to create a complaint without it.
///
/// # Examples
/// ```
/// use grievance_portal::domain::{Category, ComplaintSubmission, Priority};
///
/// let form = ComplaintSubmission::try_from_form("safety", "high", "Broken lock", true)
///     .expect("valid form");
/// assert_eq!(form.category(), Category::Safety);
/// assert_eq!(form.priority(), Priority::High);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintSubmission {
    category: Category,
    priority: Priority,
    description: String,
    anonymity_confirmed: bool,
}

impl ComplaintSubmission {
    /// Build a submission from typed values.
    pub fn new(
        category: Category,
        priority: Priority,
        description: impl Into<String>,
        anonymity_confirmed: bool,
    ) -> Result<Self, ComplaintValidationError> {
        let description = description.into();
        validate_description(&description)?;
        Ok(Self {
            category,
            priority,
            description,
            anonymity_confirmed,
        })
    }

    /// Build a submission from raw form strings.
    pub fn try_from_form(
        category: &str,
        priority: &str,
        description: &str,
        anonymity_confirmed: bool,
    ) -> Result<Self, ComplaintValidationError> {
        let category = category
            .parse::<Category>()
            .map_err(|err| ComplaintValidationError::UnknownCategory { input: err.input })?;
        let priority = priority
            .parse::<Priority>()
            .map_err(|err| ComplaintValidationError::UnknownPriority { input: err.input })?;
        Self::new(category, priority, description, anonymity_confirmed)
    }

    /// Selected category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Selected priority.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Free-text description.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Whether the submitter acknowledged the anonymity disclosure.
    pub fn anonymity_confirmed(&self) -> bool {
        self.anonymity_confirmed
    }

    pub(crate) fn into_parts(self) -> (Category, Priority, String) {
        (self.category, self.priority, self.description)
    }
}

fn validate_description(description: &str) -> Result<(), ComplaintValidationError> {
    if description.trim().is_empty() {
        return Err(ComplaintValidationError::EmptyDescription);
    }
    if description.chars().count() > DESCRIPTION_MAX {
        return Err(ComplaintValidationError::DescriptionTooLong {
            max: DESCRIPTION_MAX,
        });
    }
    Ok(())
}

/// Administrative status change with optional feedback.
///
/// Blank feedback is normalised to `None` so it can never erase feedback
/// recorded earlier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    status: Status,
    feedback: Option<String>,
}

impl StatusUpdate {
    /// Build an update from a typed status.
    pub fn new(status: Status, feedback: Option<String>) -> Self {
        Self {
            status,
            feedback: feedback.filter(|text| !text.trim().is_empty()),
        }
    }

    /// Build an update from raw form strings.
    pub fn try_from_form(
        status: &str,
        feedback: Option<&str>,
    ) -> Result<Self, ComplaintValidationError> {
        let status = status
            .parse::<Status>()
            .map_err(|err| ComplaintValidationError::UnknownStatus { input: err.input })?;
        Ok(Self::new(status, feedback.map(str::to_owned)))
    }

    /// Target status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Feedback to record, if any.
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    pub(crate) fn into_feedback(self) -> Option<String> {
        self.feedback
    }
}
