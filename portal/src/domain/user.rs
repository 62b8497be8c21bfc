//! Session-scoped user identity.
//!
//! Users are never persisted. A [`User`] is fabricated at sign-in and lives
//! only as long as the [`SessionContext`](crate::domain::SessionContext) that
//! holds it. Complaints reference the owning user through [`UserId`] and
//! [`Email`]; the lifecycle engine only ever sees the [`Identity`]
//! capability.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by the user newtype constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// The user id was empty.
    EmptyId,
    /// The user id carried surrounding whitespace.
    InvalidId,
    /// The display name was blank.
    EmptyDisplayName,
    /// The email was blank.
    EmptyEmail,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must not contain surrounding whitespace"),
            Self::EmptyDisplayName => write!(f, "name must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Opaque session identifier.
///
/// Freshly generated ids are UUID v4 strings, but any non-empty token is
/// accepted so ids recorded by earlier sessions keep matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Email address used as the secondary ownership key.
///
/// Only checked for being non-empty; the value is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`].
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(email.into())
    }

    fn from_owned(email: String) -> Result<Self, UserValidationError> {
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if trimmed.len() == email.len() {
            return Ok(Self(email));
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Name shown in the member dashboard header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and construct a [`DisplayName`].
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyDisplayName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Closed set of roles. No hierarchy: only [`Role::Admin`] is special.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Enrolled student.
    Student,
    /// Teaching staff.
    Faculty,
    /// Non-teaching staff.
    Staff,
    /// Administrator with the oversight projection.
    Admin,
}

impl Role {
    /// Every role in declaration order.
    pub const ALL: [Self; 4] = [Self::Student, Self::Faculty, Self::Staff, Self::Admin];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Faculty => "faculty",
            Self::Staff => "staff",
            Self::Admin => "admin",
        }
    }

    /// Whether the role unlocks the administrative projection.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse error for [`Role`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError {
    /// Rejected input.
    pub input: String,
}

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid role: {}", self.input)
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "student" => Ok(Self::Student),
            "faculty" => Ok(Self::Faculty),
            "staff" => Ok(Self::Staff),
            "admin" => Ok(Self::Admin),
            _ => Err(ParseRoleError {
                input: value.to_owned(),
            }),
        }
    }
}

/// The `{id, email, role}` capability the lifecycle engine depends on.
///
/// How the identity was obtained is irrelevant to the engine.
pub trait Identity {
    /// Session identifier compared against `Complaint::user_id`.
    fn user_id(&self) -> &UserId;

    /// Email compared against `Complaint::anonymous_email`.
    fn email(&self) -> &Email;

    /// Role selecting the projection.
    fn role(&self) -> Role;
}

/// Signed-in user.
///
/// ## Invariants
/// - Every component is validated by its newtype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: DisplayName,
    email: Email,
    role: Role,
}

impl User {
    /// Build a new [`User`] from validated components.
    pub fn new(id: UserId, name: DisplayName, email: Email, role: Role) -> Self {
        Self {
            id,
            name,
            email,
            role,
        }
    }

    /// Fallible constructor from raw strings.
    pub fn try_from_strings(
        id: impl AsRef<str>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(
            UserId::new(id)?,
            DisplayName::new(name)?,
            Email::new(email)?,
            role,
        ))
    }

    /// Stable session identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &DisplayName {
        &self.name
    }
}

impl Identity for User {
    fn user_id(&self) -> &UserId {
        &self.id
    }

    fn email(&self) -> &Email {
        &self.email
    }

    fn role(&self) -> Role {
        self.role
    }
}
