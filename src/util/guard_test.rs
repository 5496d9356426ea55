use super::*;
use crate::net::types::{ROLE_ADMIN, ROLE_MANAGER, ROLE_USER, Session};

fn auth_with_roles(roles: &[&str]) -> AuthState {
    let mut state = AuthState::default();
    let epoch = state.begin_login();
    state.apply_login(
        epoch,
        Session {
            token: "abc123".to_owned(),
            token_type: "Bearer".to_owned(),
            id: 1,
            username: "alice".to_owned(),
            email: "a@x.com".to_owned(),
            roles: roles.iter().map(|role| (*role).to_owned()).collect(),
        },
    );
    state
}

// =============================================================
// Decision matrix
// =============================================================

#[test]
fn unauthenticated_always_redirects_to_login() {
    let state = AuthState::default();
    for requirement in [
        GuardRequirement::Authenticated,
        GuardRequirement::Admin,
        GuardRequirement::Manager,
    ] {
        assert_eq!(decide(&state, requirement), GuardDecision::RedirectLogin);
    }
}

#[test]
fn authenticated_only_renders_for_any_session() {
    let state = auth_with_roles(&[ROLE_USER]);
    assert_eq!(
        decide(&state, GuardRequirement::Authenticated),
        GuardDecision::Render
    );
}

#[test]
fn admin_requirement_redirects_non_admin_to_dashboard() {
    let state = auth_with_roles(&[ROLE_USER]);
    assert_eq!(
        decide(&state, GuardRequirement::Admin),
        GuardDecision::RedirectDashboard
    );
}

#[test]
fn admin_requirement_renders_for_admin() {
    let state = auth_with_roles(&[ROLE_ADMIN]);
    assert_eq!(decide(&state, GuardRequirement::Admin), GuardDecision::Render);
}

#[test]
fn manager_requirement_renders_for_manager_only_session() {
    let state = auth_with_roles(&[ROLE_MANAGER]);
    assert_eq!(
        decide(&state, GuardRequirement::Manager),
        GuardDecision::Render
    );
}

#[test]
fn manager_requirement_renders_for_admin() {
    let state = auth_with_roles(&[ROLE_ADMIN]);
    assert_eq!(
        decide(&state, GuardRequirement::Manager),
        GuardDecision::Render
    );
}

#[test]
fn manager_requirement_redirects_plain_employee() {
    let state = auth_with_roles(&[ROLE_USER]);
    assert_eq!(
        decide(&state, GuardRequirement::Manager),
        GuardDecision::RedirectDashboard
    );
}

// =============================================================
// Redirect targets
// =============================================================

#[test]
fn render_has_no_redirect_target() {
    assert_eq!(redirect_target(GuardDecision::Render), None);
}

#[test]
fn login_redirect_targets_login_route() {
    assert_eq!(redirect_target(GuardDecision::RedirectLogin), Some("/login"));
}

#[test]
fn role_redirect_targets_landing_route() {
    assert_eq!(
        redirect_target(GuardDecision::RedirectDashboard),
        Some("/dashboard")
    );
}
