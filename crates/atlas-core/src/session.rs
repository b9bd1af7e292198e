// crates/atlas-core/src/session.rs

//! The identity adapter: a single nullable "current user id", set on
//! sign-in and cleared on sign-out. Components that only need to know
//! who is signed in take a [`SessionReader`]; nothing reads ambient
//! globals.

use crate::error::{AtlasError, Result};
use std::sync::{Arc, RwLock};

type Shared = Arc<RwLock<Option<String>>>;

/// Owning handle to the session state. Created once at startup (the
/// subscribe step of the provider lifecycle); dropping it tears the
/// subscription down.
#[derive(Clone, Debug, Default)]
pub struct Session {
    current: Shared,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start signed in as `user_id`; empty ids count as signed out.
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        let session = Self::new();
        session.sign_in(user_id);
        session
    }

    pub fn sign_in(&self, user_id: impl Into<String>) {
        let user_id = user_id.into();
        let value = (!user_id.trim().is_empty()).then_some(user_id);
        if let Ok(mut guard) = self.current.write() {
            *guard = value;
        }
    }

    pub fn sign_out(&self) {
        if let Ok(mut guard) = self.current.write() {
            *guard = None;
        }
    }

    pub fn current_user(&self) -> Option<String> {
        self.current.read().ok().and_then(|g| g.clone())
    }

    /// The signed-in user id, or [`AtlasError::Unauthenticated`]. Write
    /// paths of the favorites store go through this guard.
    pub fn require_user(&self) -> Result<String> {
        self.current_user().ok_or(AtlasError::Unauthenticated)
    }

    /// A read-only view for components that observe but never mutate.
    pub fn reader(&self) -> SessionReader {
        SessionReader {
            current: Arc::clone(&self.current),
        }
    }
}

/// Read-only session capability handed to views.
#[derive(Clone, Debug)]
pub struct SessionReader {
    current: Shared,
}

impl SessionReader {
    pub fn current_user(&self) -> Option<String> {
        self.current.read().ok().and_then(|g| g.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.current_user().is_some()
    }
}
