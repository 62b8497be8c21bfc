//! Session context: the signed-in identity and the workspace it unlocks.
//!
//! The identity lives only in memory. Signing out or dropping the context
//! forgets it; the complaint store is untouched.

use tracing::info;

use crate::domain::ports::{ComplaintRepository, IdentityProvider};
use crate::domain::{
    AdminDesk, ComplaintStore, Error, Identity, LifecycleEngine, LoginForm, MemberDesk, User,
    Workspace,
};

/// Holds the current identity alongside the store and engine it acts on.
#[derive(Debug)]
pub struct SessionContext<P, R> {
    provider: P,
    engine: LifecycleEngine,
    store: ComplaintStore<R>,
    current: Option<User>,
}

impl<P, R> SessionContext<P, R>
where
    P: IdentityProvider,
    R: ComplaintRepository,
{
    /// Create a signed-out context.
    pub fn new(provider: P, engine: LifecycleEngine, store: ComplaintStore<R>) -> Self {
        Self {
            provider,
            engine,
            store,
            current: None,
        }
    }

    /// Establish a session from `form`, replacing any current one.
    pub fn sign_in(&mut self, form: &LoginForm) -> Result<&User, Error> {
        let user = self.provider.sign_in(form)?;
        info!(role = %user.role(), "session started");
        Ok(self.current.insert(user))
    }

    /// End the current session, returning the identity it held.
    pub fn sign_out(&mut self) -> Option<User> {
        let previous = self.current.take();
        if previous.is_some() {
            info!("session ended");
        }
        previous
    }

    /// The signed-in user, if any.
    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// The backing store.
    pub fn store(&self) -> &ComplaintStore<R> {
        &self.store
    }

    /// The workspace for the signed-in user's role.
    ///
    /// Fails with `Unauthorized` when nobody is signed in.
    pub fn workspace(&mut self) -> Result<Workspace<'_, R>, Error> {
        let user = self
            .current
            .as_ref()
            .ok_or_else(|| Error::unauthorized("sign in to continue"))?;
        let engine = &self.engine;
        let store = &mut self.store;
        if user.role().is_admin() {
            Ok(Workspace::Admin(AdminDesk::new(user, engine, store)))
        } else {
            Ok(Workspace::Member(MemberDesk::new(user, engine, store)))
        }
    }
}
