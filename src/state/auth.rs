//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and role-gated navigation read this state through Leptos
//! context. Role flags are derived from the session's role set on every
//! access rather than cached, so they cannot drift from the session itself.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::{ROLE_ADMIN, ROLE_MANAGER, Session};
use crate::util::session_store;

/// Whether a role set grants administrator access.
pub fn has_admin(roles: &[String]) -> bool {
    roles.iter().any(|role| role == ROLE_ADMIN)
}

/// Whether a role set grants manager capability.
///
/// Administrators imply manager capability.
pub fn has_manager(roles: &[String]) -> bool {
    roles.iter().any(|role| role == ROLE_MANAGER) || has_admin(roles)
}

/// Authentication state holding the current session.
///
/// The login epoch stamps in-flight credential exchanges so that only the
/// most recent one may mutate the session (see [`AuthState::apply_login`]).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// The current session; `None` when logged out.
    pub session: Option<Session>,
    login_epoch: u64,
}

impl AuthState {
    /// Build state from the durable session store.
    ///
    /// Runs once at application start; the store is not re-polled afterwards.
    pub fn restore() -> Self {
        Self {
            session: session_store::load(),
            login_epoch: 0,
        }
    }

    /// Whether a user is currently logged in.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the current user holds the administrator role.
    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(|s| has_admin(&s.roles))
    }

    /// Whether the current user holds manager capability (manager or admin).
    pub fn is_manager(&self) -> bool {
        self.session.as_ref().is_some_and(|s| has_manager(&s.roles))
    }

    /// Start a login attempt and return its epoch stamp.
    ///
    /// Invalidates any earlier attempt still in flight.
    pub fn begin_login(&mut self) -> u64 {
        self.login_epoch += 1;
        self.login_epoch
    }

    /// Apply a completed login if `epoch` is still the latest attempt.
    ///
    /// Returns whether the session was applied; a superseded attempt leaves
    /// state untouched.
    pub fn apply_login(&mut self, epoch: u64, session: Session) -> bool {
        if epoch != self.login_epoch {
            return false;
        }
        self.session = Some(session);
        true
    }

    /// Drop the in-memory session and invalidate any in-flight login.
    pub fn clear_session(&mut self) {
        self.login_epoch += 1;
        self.session = None;
    }
}

/// The auth context signal provided by `App`.
///
/// Panics when called outside the provider subtree; that is a wiring bug and
/// must surface immediately rather than read as "logged out".
pub fn use_auth() -> RwSignal<AuthState> {
    expect_context::<RwSignal<AuthState>>()
}
