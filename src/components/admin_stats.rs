//! Organization-overview panel for the admin dashboard.
//!
//! Renders the backend's pre-aggregated counters; no client-side math beyond
//! scaling the breakdown bars to the largest bucket.

use leptos::prelude::*;

use crate::net::types::AdminDashboardStats;

#[component]
fn StatTile(label: &'static str, value: i64) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <span class="stat-tile__label">{label}</span>
            <span class="stat-tile__value">{value}</span>
        </div>
    }
}

fn breakdown_row(name: &str, count: i64, max: i64) -> impl IntoView + use<> {
    let width = format!("{:.0}%", (count as f64 / max as f64) * 100.0);
    view! {
        <div class="admin-stats__row">
            <span class="admin-stats__row-label">{name.to_owned()}</span>
            <div class="admin-stats__row-track">
                <div class="admin-stats__row-fill" style:width=width></div>
            </div>
            <span class="admin-stats__row-count">{count}</span>
        </div>
    }
}

/// Summary tiles plus per-type and per-status breakdowns.
#[component]
pub fn AdminStatsPanel(stats: AdminDashboardStats) -> impl IntoView {
    let type_max = stats.leaves_by_type.values().copied().max().unwrap_or(0).max(1);
    let status_max = stats.leaves_by_status.values().copied().max().unwrap_or(0).max(1);

    let type_rows = stats
        .leaves_by_type
        .iter()
        .map(|(name, count)| breakdown_row(name, *count, type_max))
        .collect::<Vec<_>>();
    let status_rows = stats
        .leaves_by_status
        .iter()
        .map(|(name, count)| breakdown_row(name, *count, status_max))
        .collect::<Vec<_>>();

    view! {
        <div class="admin-stats">
            <div class="admin-stats__tiles">
                <StatTile label="Total Employees" value=stats.total_employees/>
                <StatTile label="Pending Reviews" value=stats.pending_leaves/>
                <StatTile label="Approved Today" value=stats.approved_leaves_today/>
                <StatTile label="Rejected Total" value=stats.rejected_leaves/>
            </div>
            <div class="admin-stats__charts">
                <div class="admin-stats__chart">
                    <h3>"Leaves Applied by Type"</h3>
                    {type_rows}
                </div>
                <div class="admin-stats__chart">
                    <h3>"Application Status Distribution"</h3>
                    {status_rows}
                </div>
            </div>
        </div>
    }
}
