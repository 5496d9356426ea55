//! Admin review screen for processing employee leave requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! The pending tab hits the dedicated pending endpoint; the other tabs load
//! the full list and filter client-side, matching the backend's surface.

#[cfg(test)]
#[path = "manage_leaves_test.rs"]
mod manage_leaves_test;

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::net::types::{LeaveRequest, LeaveStatus, ProcessLeaveRequest};
use crate::util::format::{date_part, role_display};

/// Review filter tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeaveFilter {
    #[default]
    Pending,
    Approved,
    Rejected,
    All,
}

impl LeaveFilter {
    fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::All => "All",
        }
    }
}

/// Keep only the requests matching `filter`.
fn apply_filter(filter: LeaveFilter, leaves: Vec<LeaveRequest>) -> Vec<LeaveRequest> {
    let status = match filter {
        LeaveFilter::All => return leaves,
        LeaveFilter::Pending => LeaveStatus::Pending,
        LeaveFilter::Approved => LeaveStatus::Approved,
        LeaveFilter::Rejected => LeaveStatus::Rejected,
    };
    leaves.into_iter().filter(|leave| leave.status == status).collect()
}

#[component]
pub fn ManageLeavesPage() -> impl IntoView {
    let filter = RwSignal::new(LeaveFilter::Pending);
    let leaves = RwSignal::new(Vec::<LeaveRequest>::new());
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0_u64);

    let selected = RwSignal::new(None::<LeaveRequest>);
    let remarks = RwSignal::new(String::new());
    let modal_message = RwSignal::new(String::new());
    let processing = RwSignal::new(false);

    Effect::new(move || {
        let current = filter.get();
        reload.track();
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                let fetched = if current == LeaveFilter::Pending {
                    crate::net::leave::fetch_pending_leaves().await
                } else {
                    crate::net::leave::fetch_all_leaves().await
                };
                match fetched {
                    Ok(list) => leaves.set(apply_filter(current, list)),
                    Err(err) => log::error!("failed to load leave requests: {err}"),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = current;
            loading.set(false);
        }
    });

    let do_process = move |status: LeaveStatus| {
        let Some(leave) = selected.get() else {
            return;
        };
        let remarks_value = remarks.get();
        if remarks_value.trim().is_empty() {
            modal_message.set("Please provide remarks".to_owned());
            return;
        }
        processing.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = ProcessLeaveRequest {
                status,
                remarks: remarks_value,
            };
            match crate::net::leave::process_leave(leave.id, &request).await {
                Ok(()) => {
                    selected.set(None);
                    remarks.set(String::new());
                    modal_message.set(String::new());
                    reload.update(|n| *n += 1);
                }
                Err(err) => modal_message.set(err.to_string()),
            }
            processing.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (leave, remarks_value, status);
            processing.set(false);
        }
    };

    let tabs = [
        LeaveFilter::Pending,
        LeaveFilter::Approved,
        LeaveFilter::Rejected,
        LeaveFilter::All,
    ];

    view! {
        <div class="manage-leaves-page">
            <a class="btn btn--outline" href="/dashboard">"Back to Dashboard"</a>

            <h2 class="page-title">"Manage Leave Requests"</h2>
            <p class="page-subtitle">"Review and process employee leave applications"</p>

            <div class="filter-tabs">
                {tabs
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class=move || {
                                    if filter.get() == tab { "tab tab--active" } else { "tab" }
                                }
                                on:click=move |_| filter.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading-state">"Loading..."</div> }
            >
                <div class="leaves-grid">
                    {move || {
                        leaves
                            .get()
                            .into_iter()
                            .map(|leave| {
                                let applicant = format!(
                                    "{} ({})",
                                    leave.user.full_name, leave.user.department,
                                );
                                let applicant_role = leave
                                    .user
                                    .role
                                    .as_deref()
                                    .map(|role| role_display(role).to_owned());
                                let duration = format!(
                                    "{} - {}",
                                    date_part(&leave.start_date),
                                    date_part(&leave.end_date),
                                );
                                let applied = date_part(&leave.applied_date).to_owned();
                                let for_review = (leave.status == LeaveStatus::Pending)
                                    .then(|| leave.clone());
                                view! {
                                    <div class="leave-card">
                                        <div class="leave-card__header">
                                            <div>
                                                <h3>{leave.leave_type.type_name.clone()}</h3>
                                                <p class="leave-card__applicant">
                                                    {applicant}
                                                    {applicant_role
                                                        .map(|role| {
                                                            view! {
                                                                <span class="role-badge">{role}</span>
                                                            }
                                                        })}
                                                </p>
                                            </div>
                                            <StatusBadge status=leave.status/>
                                        </div>
                                        <dl class="leave-card__details">
                                            <dt>"Duration"</dt>
                                            <dd>{duration}</dd>
                                            <dt>"Total Days"</dt>
                                            <dd>{leave.total_days} " days"</dd>
                                            <dt>"Applied On"</dt>
                                            <dd>{applied}</dd>
                                            <dt>"Reason"</dt>
                                            <dd>{leave.reason.clone()}</dd>
                                            {leave
                                                .remarks
                                                .clone()
                                                .map(|remarks_text| {
                                                    view! {
                                                        <dt>"Remarks"</dt>
                                                        <dd>{remarks_text}</dd>
                                                    }
                                                })}
                                        </dl>
                                        {for_review
                                            .map(|for_review| {
                                                view! {
                                                    <button
                                                        class="btn btn--primary"
                                                        on:click=move |_| {
                                                            modal_message.set(String::new());
                                                            remarks.set(String::new());
                                                            selected.set(Some(for_review.clone()));
                                                        }
                                                    >
                                                        "Review & Process"
                                                    </button>
                                                }
                                            })}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <Show when=move || leaves.get().is_empty()>
                    <div class="empty-state">
                        {move || format!("No {} leave requests found", filter.get().label().to_lowercase())}
                    </div>
                </Show>
            </Show>

            <Show when=move || selected.get().is_some()>
                <div class="modal-overlay" on:click=move |_| selected.set(None)>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <h3>"Process Leave Request"</h3>
                        {move || {
                            selected
                                .get()
                                .map(|leave| {
                                    let employee = format!(
                                        "{} ({})",
                                        leave.user.full_name, leave.user.username,
                                    );
                                    let user_type = leave
                                        .user
                                        .role
                                        .as_deref()
                                        .map(|role| role_display(role).to_owned())
                                        .unwrap_or_default();
                                    let dates = format!(
                                        "{} - {}",
                                        date_part(&leave.start_date),
                                        date_part(&leave.end_date),
                                    );
                                    view! {
                                        <dl class="modal__details">
                                            <dt>"Employee"</dt>
                                            <dd>{employee}</dd>
                                            <dt>"User Type"</dt>
                                            <dd>{user_type}</dd>
                                            <dt>"Department"</dt>
                                            <dd>{leave.user.department.clone()}</dd>
                                            <dt>"Leave Type"</dt>
                                            <dd>{leave.leave_type.type_name.clone()}</dd>
                                            <dt>"Duration"</dt>
                                            <dd>{leave.total_days} " days"</dd>
                                            <dt>"Dates"</dt>
                                            <dd>{dates}</dd>
                                            <dt>"Reason"</dt>
                                            <dd>{leave.reason.clone()}</dd>
                                        </dl>
                                    }
                                })
                        }}

                        <Show when=move || !modal_message.get().is_empty()>
                            <p class="auth-message auth-message--error">
                                {move || modal_message.get()}
                            </p>
                        </Show>

                        <label class="leave-form__label" for="remarks">"Remarks *"</label>
                        <textarea
                            id="remarks"
                            class="leave-form__input"
                            rows="3"
                            placeholder="Enter your remarks..."
                            prop:value=move || remarks.get()
                            on:input=move |ev| remarks.set(event_target_value(&ev))
                        ></textarea>

                        <div class="modal__actions">
                            <button
                                class="btn btn--primary"
                                disabled=move || processing.get()
                                on:click=move |_| do_process(LeaveStatus::Approved)
                            >
                                "Approve"
                            </button>
                            <button
                                class="btn btn--danger"
                                disabled=move || processing.get()
                                on:click=move |_| do_process(LeaveStatus::Rejected)
                            >
                                "Reject"
                            </button>
                            <button
                                class="btn btn--outline"
                                disabled=move || processing.get()
                                on:click=move |_| selected.set(None)
                            >
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
