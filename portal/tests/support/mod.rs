//! Test doubles shared by the lifecycle scenarios.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Local, TimeZone, Utc};
use grievance_portal::domain::ports::{
    ComplaintRepository, ComplaintRepositoryError, IdentityProvider,
};
use grievance_portal::domain::{Complaint, Error, LoginForm, User, UserId};
use grievance_portal::outbound::persistence::InMemoryComplaintRepository;
use mockable::Clock;

/// Start of every scenario.
pub fn scenario_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 9, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Clock the scenarios move by hand.
pub struct StepClock(Mutex<DateTime<Utc>>);

impl StepClock {
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn shift(&self, delta: chrono::Duration) {
        *self.lock() += delta;
    }

    fn lock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clock for StepClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock()
    }
}

/// Uses the form's name as the session id so scenarios can name users.
#[derive(Debug, Default, Clone, Copy)]
pub struct NamedIdentityProvider;

impl IdentityProvider for NamedIdentityProvider {
    fn sign_in(&self, form: &LoginForm) -> Result<User, Error> {
        let id = UserId::new(form.name().as_ref())
            .map_err(|err| Error::validation(err.to_string()))?;
        Ok(User::new(
            id,
            form.name().clone(),
            form.email().clone(),
            form.role(),
        ))
    }
}

/// In-memory repository whose writes can be made to fail.
#[derive(Debug, Default)]
pub struct FlakyRepository {
    inner: InMemoryComplaintRepository,
    failing: Arc<AtomicBool>,
}

impl FlakyRepository {
    pub fn new(failing: Arc<AtomicBool>) -> Self {
        Self {
            inner: InMemoryComplaintRepository::new(),
            failing,
        }
    }

    /// Text of the last successful save.
    pub fn text(&self) -> Option<String> {
        self.inner.text()
    }
}

impl ComplaintRepository for FlakyRepository {
    fn load(&self) -> Result<Vec<Complaint>, ComplaintRepositoryError> {
        self.inner.load()
    }

    fn save(&self, complaints: &[Complaint]) -> Result<(), ComplaintRepositoryError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ComplaintRepositoryError::write("storage quota exceeded"));
        }
        self.inner.save(complaints)
    }
}
