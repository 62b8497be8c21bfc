//! Driving port for establishing a session identity.
//!
//! Inbound adapters pass a validated [`LoginForm`] and receive the session
//! [`User`]. Swapping the provider changes how identities are obtained
//! without touching the lifecycle engine.

use crate::domain::{Error, LoginForm, User, UserId};

/// Turns a sign-in form into a session user.
#[cfg_attr(test, mockall::automock)]
pub trait IdentityProvider: Send + Sync {
    /// Establish the identity described by `form`.
    fn sign_in(&self, form: &LoginForm) -> Result<User, Error>;
}

/// Accepts any complete form and fabricates a user with a fresh random id.
///
/// The password is required by the form but never checked. Two sign-ins with
/// the same email produce different ids; ownership falls back to the email.
#[derive(Debug, Default, Clone, Copy)]
pub struct FormIdentityProvider;

impl IdentityProvider for FormIdentityProvider {
    fn sign_in(&self, form: &LoginForm) -> Result<User, Error> {
        Ok(User::new(
            UserId::random(),
            form.name().clone(),
            form.email().clone(),
            form.role(),
        ))
    }
}
