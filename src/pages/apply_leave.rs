//! Leave application form for the signed-in employee.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{ApplyLeaveRequest, LeaveType};
use crate::util::format::today_iso_date;

#[component]
pub fn ApplyLeavePage() -> impl IntoView {
    let navigate = use_navigate();

    let types = RwSignal::new(Vec::<LeaveType>::new());
    let leave_type_id = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let success = RwSignal::new(false);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::leave::fetch_leave_types().await {
            Ok(list) => types.set(list),
            Err(err) => log::error!("failed to load leave types: {err}"),
        }
    });

    let today = today_iso_date();
    let min_start = today.clone();
    let min_end = move || {
        let start = start_date.get();
        if start.is_empty() { today.clone() } else { start }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        message.set(String::new());
        success.set(false);

        let Ok(type_id) = leave_type_id.get().parse::<i64>() else {
            message.set("Select a leave type".to_owned());
            return;
        };
        busy.set(true);

        let request = ApplyLeaveRequest {
            leave_type_id: type_id,
            start_date: start_date.get(),
            end_date: end_date.get(),
            reason: reason.get(),
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::leave::apply_leave(&request).await {
                    Ok(()) => {
                        success.set(true);
                        message.set("Leave application submitted successfully!".to_owned());
                        leave_type_id.set(String::new());
                        start_date.set(String::new());
                        end_date.set(String::new());
                        reason.set(String::new());
                        busy.set(false);
                        // Let the confirmation show before returning home.
                        gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                        navigate("/dashboard", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        message.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, request);
            busy.set(false);
        }
    };

    view! {
        <div class="apply-leave-page">
            <div class="apply-leave-page__card">
                <a class="btn btn--outline" href="/dashboard">"Back to Dashboard"</a>

                <h2 class="page-title">"Apply for Leave"</h2>
                <p class="page-subtitle">"Submit your leave request for approval"</p>

                <Show when=move || !message.get().is_empty()>
                    <p class=move || {
                        if success.get() {
                            "auth-message auth-message--success"
                        } else {
                            "auth-message auth-message--error"
                        }
                    }>{move || message.get()}</p>
                </Show>

                <form class="leave-form" on:submit=on_submit>
                    <label class="leave-form__label" for="leave-type">"Leave Type *"</label>
                    <select
                        id="leave-type"
                        class="leave-form__input"
                        required
                        on:change=move |ev| leave_type_id.set(event_target_value(&ev))
                        prop:value=move || leave_type_id.get()
                    >
                        <option value="">"Select leave type"</option>
                        {move || {
                            types
                                .get()
                                .into_iter()
                                .map(|leave_type| {
                                    let label = format!(
                                        "{} ({} days max)",
                                        leave_type.type_name, leave_type.max_days,
                                    );
                                    view! {
                                        <option value=leave_type.id.to_string()>{label}</option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>

                    <div class="leave-form__row">
                        <div>
                            <label class="leave-form__label" for="start-date">"Start Date *"</label>
                            <input
                                id="start-date"
                                class="leave-form__input"
                                type="date"
                                required
                                min=min_start
                                prop:value=move || start_date.get()
                                on:input=move |ev| start_date.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="leave-form__label" for="end-date">"End Date *"</label>
                            <input
                                id="end-date"
                                class="leave-form__input"
                                type="date"
                                required
                                min=min_end
                                prop:value=move || end_date.get()
                                on:input=move |ev| end_date.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <label class="leave-form__label" for="reason">"Reason *"</label>
                    <textarea
                        id="reason"
                        class="leave-form__input"
                        rows="4"
                        required
                        placeholder="Please provide a reason for your leave request..."
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    ></textarea>

                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Submitting..." } else { "Submit Leave Request" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
