//! Closed vocabularies for complaint categories, priorities, and statuses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Subject area a complaint is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Teaching, grading, or coursework.
    Academic,
    /// Registry and office processes.
    Administrative,
    /// Buildings, equipment, and grounds.
    Facilities,
    /// Harassment of any kind.
    Harassment,
    /// Unequal treatment.
    Discrimination,
    /// Physical safety hazards.
    Safety,
    /// Fees, grants, and payments.
    Financial,
    /// Anything else.
    Other,
}

impl Category {
    /// Every category in form order.
    pub const ALL: [Self; 8] = [
        Self::Academic,
        Self::Administrative,
        Self::Facilities,
        Self::Harassment,
        Self::Discrimination,
        Self::Safety,
        Self::Financial,
        Self::Other,
    ];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Academic => "academic",
            Self::Administrative => "administrative",
            Self::Facilities => "facilities",
            Self::Harassment => "harassment",
            Self::Discrimination => "discrimination",
            Self::Safety => "safety",
            Self::Financial => "financial",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse error for [`Category`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    /// Rejected input.
    pub input: String,
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid complaint category: {}", self.input)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| ParseCategoryError {
                input: value.to_owned(),
            })
    }
}

/// Submitter-assigned urgency. Informational only; nothing escalates on it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Default for new submissions.
    #[default]
    Medium,
    /// Needs prompt attention.
    High,
    /// Needs immediate attention.
    Urgent,
}

impl Priority {
    /// Every priority from lowest to highest.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse error for [`Priority`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePriorityError {
    /// Rejected input.
    pub input: String,
}

impl fmt::Display for ParsePriorityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid complaint priority: {}", self.input)
    }
}

impl std::error::Error for ParsePriorityError {}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == value)
            .ok_or_else(|| ParsePriorityError {
                input: value.to_owned(),
            })
    }
}

/// Workflow status of a complaint.
///
/// Declaration order is the tracker ordering; it does not constrain which
/// transitions are allowed (see
/// [`TransitionTable`](crate::domain::TransitionTable)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Filed, not yet looked at.
    Submitted,
    /// An administrator is reviewing the complaint.
    UnderReview,
    /// Handed to a responsible party.
    Assigned,
    /// Actively being investigated.
    Investigating,
    /// Outcome reached.
    Resolved,
    /// Closed and kept for the record.
    Archived,
}

impl Status {
    /// Every status in tracker order.
    pub const ALL: [Self; 6] = [
        Self::Submitted,
        Self::UnderReview,
        Self::Assigned,
        Self::Investigating,
        Self::Resolved,
        Self::Archived,
    ];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::UnderReview => "under-review",
            Self::Assigned => "assigned",
            Self::Investigating => "investigating",
            Self::Resolved => "resolved",
            Self::Archived => "archived",
        }
    }

    /// Upper-snake label used by dashboards, e.g. `UNDER_REVIEW`.
    pub fn label(&self) -> String {
        self.as_str().to_ascii_uppercase().replace('-', "_")
    }

    /// Zero-based position in the tracker ordering.
    pub fn stage(&self) -> usize {
        match self {
            Self::Submitted => 0,
            Self::UnderReview => 1,
            Self::Assigned => 2,
            Self::Investigating => 3,
            Self::Resolved => 4,
            Self::Archived => 5,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse error for [`Status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError {
    /// Rejected input.
    pub input: String,
}

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid complaint status: {}", self.input)
    }
}

impl std::error::Error for ParseStatusError {}

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| ParseStatusError {
                input: value.to_owned(),
            })
    }
}
