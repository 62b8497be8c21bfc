//! Sign-in form primitives.
//!
//! The portal has no real authentication: any complete form is accepted and
//! turned into a session user by an
//! [`IdentityProvider`](crate::domain::ports::IdentityProvider). The form is
//! still validated here so inbound adapters never hand raw strings to a port.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::{DisplayName, Email, Error, Role};

/// Domain error returned when sign-in form values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Name was missing or blank once trimmed.
    EmptyName,
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was blank.
    EmptyPassword,
    /// Role was outside the closed set.
    UnknownRole {
        /// Rejected input.
        input: String,
    },
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::UnknownRole { input } => write!(f, "unknown role: {input}"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

impl From<LoginValidationError> for Error {
    fn from(value: LoginValidationError) -> Self {
        Self::validation(value.to_string())
    }
}

/// Validated sign-in form.
///
/// ## Invariants
/// - `name` and `email` are non-empty once trimmed.
/// - `password` is non-empty. It is held only long enough to satisfy the
///   form and is wiped on drop.
///
/// # Examples
/// ```
/// use grievance_portal::domain::{LoginForm, Role};
///
/// let form = LoginForm::try_from_parts("Ada", "a@x.edu", "pw", "admin").expect("valid form");
/// assert_eq!(form.role(), Role::Admin);
/// assert_eq!(form.email().as_ref(), "a@x.edu");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    name: DisplayName,
    email: Email,
    password: Zeroizing<String>,
    role: Role,
}

impl LoginForm {
    /// Construct a form from raw inputs.
    pub fn try_from_parts(
        name: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<Self, LoginValidationError> {
        let name = DisplayName::new(name.trim()).map_err(|_| LoginValidationError::EmptyName)?;
        let email = Email::new(email).map_err(|_| LoginValidationError::EmptyEmail)?;
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        let role = role
            .trim()
            .parse::<Role>()
            .map_err(|err| LoginValidationError::UnknownRole { input: err.input })?;

        Ok(Self {
            name,
            email,
            password: Zeroizing::new(password.to_owned()),
            role,
        })
    }

    /// Name shown in the dashboard header.
    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    /// Email used as the secondary ownership key.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Password supplied with the form.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Selected role.
    pub fn role(&self) -> Role {
        self.role
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "a@x.edu", "pw", "student", LoginValidationError::EmptyName)]
    #[case("  ", "a@x.edu", "pw", "student", LoginValidationError::EmptyName)]
    #[case("Ada", " ", "pw", "student", LoginValidationError::EmptyEmail)]
    #[case("Ada", "a@x.edu", "", "student", LoginValidationError::EmptyPassword)]
    #[case(
        "Ada",
        "a@x.edu",
        "pw",
        "dean",
        LoginValidationError::UnknownRole { input: "dean".to_owned() }
    )]
    fn invalid_forms_are_rejected(
        #[case] name: &str,
        #[case] email: &str,
        #[case] password: &str,
        #[case] role: &str,
        #[case] expected: LoginValidationError,
    ) {
        let err = LoginForm::try_from_parts(name, email, password, role)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn valid_form_trims_name_and_email_but_not_password() {
        let form = LoginForm::try_from_parts("  Ada ", " a@x.edu ", " pw ", "faculty")
            .expect("valid inputs should succeed");
        assert_eq!(form.name().as_ref(), "Ada");
        assert_eq!(form.email().as_ref(), "a@x.edu");
        assert_eq!(form.password(), " pw ");
        assert_eq!(form.role(), Role::Faculty);
    }

    #[rstest]
    fn validation_errors_map_to_validation_code() {
        let err = Error::from(LoginValidationError::EmptyPassword);
        assert_eq!(err.code(), crate::domain::ErrorCode::ValidationError);
    }
}
