//! Durable session record in browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! A session exists in storage exactly while the user is considered
//! authenticated: written on successful signin, removed on logout. The
//! stored value is the JSON-serialized [`Session`] under a single fixed key.
//!
//! ERROR HANDLING
//! ==============
//! Loads fail open: a missing, unparseable, or wrongly-shaped value reads as
//! "no session" instead of an error, so corrupted storage can never wedge
//! the UI. Validity of the token itself is the backend's problem.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::net::types::Session;

/// Fixed `localStorage` key holding the serialized session.
pub const SESSION_KEY: &str = "user";

/// Parse a raw stored value into a session.
///
/// Anything that is not valid JSON in the [`Session`] shape is `None`.
#[cfg(any(test, feature = "hydrate"))]
fn parse_session(raw: &str) -> Option<Session> {
    serde_json::from_str(raw).ok()
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Persist `session` under [`SESSION_KEY`], replacing any prior value.
pub fn save(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(session) else {
            return;
        };
        let _ = storage.set_item(SESSION_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Load the stored session, if present and well-formed.
pub fn load() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(SESSION_KEY).ok().flatten()?;
        parse_session(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove the stored session. Idempotent.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
