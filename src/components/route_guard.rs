//! Route wrapper components enforcing authentication and role access.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards re-evaluate on every route entry; nothing here is persistent. The
//! redirects replace the history entry so back-navigation does not return to
//! a page the user may no longer see.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_auth;
use crate::util::guard::{self, GuardDecision, GuardRequirement};

fn guarded(requirement: GuardRequirement, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    guard::install_guard_redirect(auth, requirement, navigate);

    view! {
        <Show when=move || guard::decide(&auth.get(), requirement) == GuardDecision::Render>
            {children()}
        </Show>
    }
}

/// Renders children for any authenticated user; redirects to `/login` otherwise.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(GuardRequirement::Authenticated, children)
}

/// Renders children for administrators; non-admins land on `/dashboard`,
/// unauthenticated visitors on `/login`.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    guarded(GuardRequirement::Admin, children)
}

/// Renders children for managers and administrators; same redirects as
/// [`RequireAdmin`].
#[component]
pub fn RequireManager(children: ChildrenFn) -> impl IntoView {
    guarded(GuardRequirement::Manager, children)
}
