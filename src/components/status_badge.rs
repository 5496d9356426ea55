//! Colored status badge for leave requests.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

use crate::net::types::LeaveStatus;

/// Badge background color for a leave status.
pub fn status_color(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Approved => "#10b981",
        LeaveStatus::Rejected => "#ef4444",
        LeaveStatus::Cancelled => "#6b7280",
        LeaveStatus::Pending => "#f59e0b",
    }
}

/// Pill badge showing a leave request's status in its mapped color.
#[component]
pub fn StatusBadge(status: LeaveStatus) -> impl IntoView {
    view! {
        <span class="status-badge" style:background-color=status_color(status)>
            {status.label()}
        </span>
    }
}
