//! Dashboard page: the authenticated landing view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the signed-in user's balances and recent requests; admins also get
//! the organization overview and a pending-approvals preview. Data loads
//! once on entry, mirroring the backend's pre-aggregated endpoints.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::admin_stats::AdminStatsPanel;
use crate::components::status_badge::StatusBadge;
use crate::net::types::{AdminDashboardStats, LeaveBalance, LeaveRequest};
use crate::state::auth::use_auth;
use crate::util::format::date_part;

/// Rows shown in the recent-requests and pending-approvals previews.
const PREVIEW_ROWS: usize = 5;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let balances = RwSignal::new(Vec::<LeaveBalance>::new());
    let my_leaves = RwSignal::new(Vec::<LeaveRequest>::new());
    let pending = RwSignal::new(Vec::<LeaveRequest>::new());
    let stats = RwSignal::new(None::<AdminDashboardStats>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let admin = auth.get_untracked().is_admin();
        leptos::task::spawn_local(async move {
            match crate::net::leave::fetch_my_balances().await {
                Ok(list) => balances.set(list),
                Err(err) => log::error!("failed to load balances: {err}"),
            }
            match crate::net::leave::fetch_my_leaves().await {
                Ok(list) => my_leaves.set(list),
                Err(err) => log::error!("failed to load leave requests: {err}"),
            }
            if admin {
                match crate::net::leave::fetch_pending_leaves().await {
                    Ok(list) => pending.set(list),
                    Err(err) => log::error!("failed to load pending leaves: {err}"),
                }
                match crate::net::leave::fetch_admin_stats().await {
                    Ok(counters) => stats.set(Some(counters)),
                    Err(err) => log::error!("failed to load statistics: {err}"),
                }
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);

    let username = move || {
        auth.with(|a| a.session.as_ref().map(|s| s.username.clone()).unwrap_or_default())
    };
    let role_list = move || {
        auth.with(|a| a.session.as_ref().map(|s| s.roles.join(", ")).unwrap_or_default())
    };
    let is_admin = move || auth.get().is_admin();

    let on_logout = move |_| {
        crate::net::api::logout();
        auth.update(|a| a.clear_session());
        let options = NavigateOptions {
            replace: true,
            ..NavigateOptions::default()
        };
        navigate("/login", options);
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1><span class="auth-card__logo">"L"</span> " LeavePortal"</h1>
                <div class="dashboard-page__user">
                    <span class="dashboard-page__welcome">"Welcome, " {username}</span>
                    <span class="dashboard-page__roles">{role_list}</span>
                    <button class="btn btn--danger" on:click=on_logout>"Logout"</button>
                </div>
            </header>

            <nav class="dashboard-page__nav">
                <a class="nav-link nav-link--active" href="/dashboard">"Dashboard"</a>
                <a class="nav-link" href="/apply-leave">"Apply Leave"</a>
                <Show when=is_admin>
                    <a class="nav-link" href="/manage-leaves">"Manage Leaves"</a>
                    <a class="nav-link" href="/leave-types">"Leave Types"</a>
                    <a class="nav-link" href="/users">"Employees"</a>
                </Show>
            </nav>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading-state">"Loading..."</div> }
            >
                <main class="dashboard-page__main">
                    <Show when=move || is_admin() && stats.get().is_some()>
                        <section class="dashboard-section">
                            <h2>"Organization Overview"</h2>
                            {move || stats.get().map(|counters| view! { <AdminStatsPanel stats=counters/> })}
                        </section>
                    </Show>

                    <section class="dashboard-section">
                        <h2>"My Leave Balances"</h2>
                        <div class="balance-grid">
                            {move || {
                                balances
                                    .get()
                                    .into_iter()
                                    .map(|balance| {
                                        let used_pct = if balance.total_days > 0 {
                                            f64::from(balance.used_days)
                                                / f64::from(balance.total_days) * 100.0
                                        } else {
                                            0.0
                                        };
                                        view! {
                                            <div class="balance-card">
                                                <h3>{balance.leave_type.type_name.clone()}</h3>
                                                <div class="balance-card__stats">
                                                    <span>"Total " {balance.total_days}</span>
                                                    <span>"Used " {balance.used_days}</span>
                                                    <span>"Remaining " {balance.remaining_days}</span>
                                                </div>
                                                <div class="progress-bar">
                                                    <div
                                                        class="progress-bar__fill"
                                                        style:width=format!("{used_pct:.0}%")
                                                    ></div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </section>

                    <section class="dashboard-section">
                        <h2>"My Recent Leave Requests"</h2>
                        <table class="leave-table">
                            <thead>
                                <tr>
                                    <th>"Leave Type"</th>
                                    <th>"Start Date"</th>
                                    <th>"End Date"</th>
                                    <th>"Days"</th>
                                    <th>"Status"</th>
                                    <th>"Applied On"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    my_leaves
                                        .get()
                                        .into_iter()
                                        .take(PREVIEW_ROWS)
                                        .map(|leave| {
                                            view! {
                                                <tr>
                                                    <td>{leave.leave_type.type_name.clone()}</td>
                                                    <td>{date_part(&leave.start_date).to_owned()}</td>
                                                    <td>{date_part(&leave.end_date).to_owned()}</td>
                                                    <td>{leave.total_days}</td>
                                                    <td><StatusBadge status=leave.status/></td>
                                                    <td>{date_part(&leave.applied_date).to_owned()}</td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                        <Show when=move || my_leaves.get().is_empty()>
                            <div class="empty-state">"No leave requests found"</div>
                        </Show>
                    </section>

                    <Show when=move || is_admin() && !pending.get().is_empty()>
                        <section class="dashboard-section">
                            <h2>
                                "Pending Approvals (" {move || pending.get().len()} ")"
                            </h2>
                            <table class="leave-table">
                                <thead>
                                    <tr>
                                        <th>"Employee"</th>
                                        <th>"Leave Type"</th>
                                        <th>"Duration"</th>
                                        <th>"Days"</th>
                                        <th>"Action"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        pending
                                            .get()
                                            .into_iter()
                                            .take(PREVIEW_ROWS)
                                            .map(|leave| {
                                                let duration = format!(
                                                    "{} - {}",
                                                    date_part(&leave.start_date),
                                                    date_part(&leave.end_date),
                                                );
                                                view! {
                                                    <tr>
                                                        <td>{leave.user.full_name.clone()}</td>
                                                        <td>{leave.leave_type.type_name.clone()}</td>
                                                        <td>{duration}</td>
                                                        <td>{leave.total_days}</td>
                                                        <td>
                                                            <a class="btn btn--ghost" href="/manage-leaves">
                                                                "Review"
                                                            </a>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </tbody>
                            </table>
                        </section>
                    </Show>
                </main>
            </Show>
        </div>
    }
}
