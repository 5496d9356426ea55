use super::*;
use crate::net::types::{ROLE_USER, Session};

fn session_with_roles(roles: &[&str]) -> Session {
    Session {
        token: "abc123".to_owned(),
        token_type: "Bearer".to_owned(),
        id: 1,
        username: "alice".to_owned(),
        email: "a@x.com".to_owned(),
        roles: roles.iter().map(|role| (*role).to_owned()).collect(),
    }
}

// =============================================================
// Role predicates
// =============================================================

#[test]
fn has_admin_requires_admin_label() {
    let roles = vec![ROLE_ADMIN.to_owned()];
    assert!(has_admin(&roles));

    let roles = vec![ROLE_USER.to_owned(), ROLE_MANAGER.to_owned()];
    assert!(!has_admin(&roles));
}

#[test]
fn has_manager_accepts_manager_label() {
    let roles = vec![ROLE_MANAGER.to_owned()];
    assert!(has_manager(&roles));
}

#[test]
fn admin_implies_manager() {
    let roles = vec![ROLE_ADMIN.to_owned()];
    assert!(has_manager(&roles));
}

#[test]
fn plain_employee_is_neither_admin_nor_manager() {
    let roles = vec![ROLE_USER.to_owned()];
    assert!(!has_admin(&roles));
    assert!(!has_manager(&roles));
}

#[test]
fn empty_role_set_grants_nothing() {
    assert!(!has_admin(&[]));
    assert!(!has_manager(&[]));
}

#[test]
fn unknown_labels_are_ignored() {
    let roles = vec!["ROLE_AUDITOR".to_owned()];
    assert!(!has_admin(&roles));
    assert!(!has_manager(&roles));
}

// =============================================================
// AuthState defaults and derived flags
// =============================================================

#[test]
fn default_state_is_logged_out() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
    assert!(!state.is_manager());
}

#[test]
fn restore_without_stored_session_is_logged_out() {
    // Native builds have no browser storage, so restore sees an empty store.
    let state = AuthState::restore();
    assert!(state.session.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn flags_derive_from_the_session_role_set() {
    let mut state = AuthState::default();
    let epoch = state.begin_login();
    assert!(state.apply_login(epoch, session_with_roles(&[ROLE_ADMIN])));

    assert!(state.is_authenticated());
    assert!(state.is_admin());
    assert!(state.is_manager());
}

#[test]
fn manager_session_is_not_admin() {
    let mut state = AuthState::default();
    let epoch = state.begin_login();
    state.apply_login(epoch, session_with_roles(&[ROLE_MANAGER]));

    assert!(!state.is_admin());
    assert!(state.is_manager());
}

// =============================================================
// Login epoch
// =============================================================

#[test]
fn apply_login_with_current_epoch_sets_session() {
    let mut state = AuthState::default();
    let epoch = state.begin_login();
    let session = session_with_roles(&[ROLE_USER]);

    assert!(state.apply_login(epoch, session.clone()));
    assert_eq!(state.session, Some(session));
}

#[test]
fn superseded_login_attempt_is_ignored() {
    let mut state = AuthState::default();
    let stale = state.begin_login();
    let current = state.begin_login();

    assert!(!state.apply_login(stale, session_with_roles(&[ROLE_ADMIN])));
    assert!(state.session.is_none());

    assert!(state.apply_login(current, session_with_roles(&[ROLE_USER])));
    assert!(state.is_authenticated());
}

#[test]
fn logout_invalidates_in_flight_login() {
    let mut state = AuthState::default();
    let epoch = state.begin_login();
    state.clear_session();

    // The exchange resolved after the user logged out; it must not win.
    assert!(!state.apply_login(epoch, session_with_roles(&[ROLE_USER])));
    assert!(!state.is_authenticated());
}

#[test]
fn clear_session_drops_the_session() {
    let mut state = AuthState::default();
    let epoch = state.begin_login();
    state.apply_login(epoch, session_with_roles(&[ROLE_USER]));

    state.clear_session();
    assert!(state.session.is_none());
    assert!(!state.is_authenticated());
}
