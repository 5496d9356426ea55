//! Root application component with routing and the auth context provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Redirect, Route, Router, Routes};

use crate::components::route_guard::{RequireAdmin, RequireAuth};
use crate::pages::apply_leave::ApplyLeavePage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::leave_types::LeaveTypesPage;
use crate::pages::login::LoginPage;
use crate::pages::manage_leaves::ManageLeavesPage;
use crate::pages::signup::SignupPage;
use crate::pages::users::UsersPage;
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context and sets up client-side routing with
/// role-gated guards. Guards re-evaluate on every navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Restore any persisted session before the first route evaluates.
    let auth = RwSignal::new(AuthState::restore());
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/leaveportal.css"/>
        <Title text="LeavePortal"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/dashboard"/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("apply-leave")
                    view=|| view! { <RequireAuth><ApplyLeavePage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("manage-leaves")
                    view=|| view! { <RequireAdmin><ManageLeavesPage/></RequireAdmin> }
                />
                <Route
                    path=StaticSegment("leave-types")
                    view=|| view! { <RequireAdmin><LeaveTypesPage/></RequireAdmin> }
                />
                <Route
                    path=StaticSegment("users")
                    view=|| view! { <RequireAdmin><UsersPage/></RequireAdmin> }
                />
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
            </Routes>
        </Router>
    }
}
