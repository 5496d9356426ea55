//! Route-guard decisions for role-gated navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guard components wrap route views and apply these decisions on every
//! route entry. Decisions are pure over the auth state so the redirect
//! matrix can be tested without a router.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Access requirement attached to a guarded route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardRequirement {
    /// Any authenticated user.
    Authenticated,
    /// Administrator role required.
    Admin,
    /// Manager capability required (manager or administrator).
    Manager,
}

/// Outcome of evaluating a guard against the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the guarded view.
    Render,
    /// Not logged in: go to the login page.
    RedirectLogin,
    /// Logged in without the required role: go to the landing page.
    RedirectDashboard,
}

/// Evaluate `requirement` against `auth`.
pub fn decide(auth: &AuthState, requirement: GuardRequirement) -> GuardDecision {
    if !auth.is_authenticated() {
        return GuardDecision::RedirectLogin;
    }
    let allowed = match requirement {
        GuardRequirement::Authenticated => true,
        GuardRequirement::Admin => auth.is_admin(),
        GuardRequirement::Manager => auth.is_manager(),
    };
    if allowed {
        GuardDecision::Render
    } else {
        GuardDecision::RedirectDashboard
    }
}

/// Redirect target for a decision, or `None` when the view should render.
pub fn redirect_target(decision: GuardDecision) -> Option<&'static str> {
    match decision {
        GuardDecision::Render => None,
        GuardDecision::RedirectLogin => Some("/login"),
        GuardDecision::RedirectDashboard => Some("/dashboard"),
    }
}

/// Install an effect that redirects whenever the guard stops passing.
///
/// Redirects replace the history entry so back-navigation cannot return to
/// the guarded page.
pub fn install_guard_redirect<F>(auth: RwSignal<AuthState>, requirement: GuardRequirement, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let decision = decide(&auth.get(), requirement);
        if let Some(target) = redirect_target(decision) {
            let options = NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            };
            navigate(target, options);
        }
    });
}
