//! Complaint identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ComplaintValidationError;

/// Identifier shown to the submitter as their tracking reference.
///
/// ## Invariants
/// - Non-empty.
/// - ASCII alphanumerics and `-` only, so it survives copy/paste between
///   the dashboard and the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComplaintId(String);

impl ComplaintId {
    /// Validate and construct a [`ComplaintId`].
    pub fn new(id: impl Into<String>) -> Result<Self, ComplaintValidationError> {
        Self::from_owned(id.into())
    }

    /// Mint an identifier from a UUID as 32 upper-case hex digits.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid.simple().to_string().to_ascii_uppercase())
    }

    fn from_owned(id: String) -> Result<Self, ComplaintValidationError> {
        if id.is_empty() {
            return Err(ComplaintValidationError::EmptyId);
        }
        if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(ComplaintValidationError::InvalidId { input: id });
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ComplaintId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ComplaintId> for String {
    fn from(value: ComplaintId) -> Self {
        value.0
    }
}

impl TryFrom<String> for ComplaintId {
    type Error = ComplaintValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}
