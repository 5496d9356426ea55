//! Admin screen for configuring leave categories.

use leptos::prelude::*;

use crate::net::types::{LeaveType, NewLeaveType};

#[component]
pub fn LeaveTypesPage() -> impl IntoView {
    let types = RwSignal::new(Vec::<LeaveType>::new());
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0_u64);

    let show_modal = RwSignal::new(false);
    let type_name = RwSignal::new(String::new());
    let max_days = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let modal_message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        reload.track();
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::leave::fetch_leave_types().await {
                    Ok(list) => types.set(list),
                    Err(err) => log::error!("failed to load leave types: {err}"),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        modal_message.set(String::new());

        let Ok(days) = max_days.get().parse::<i32>() else {
            modal_message.set("Enter the maximum number of days".to_owned());
            return;
        };
        busy.set(true);

        let request = NewLeaveType {
            type_name: type_name.get().trim().to_owned(),
            max_days: days,
            description: description.get().trim().to_owned(),
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::leave::create_leave_type(&request).await {
                Ok(()) => {
                    show_modal.set(false);
                    type_name.set(String::new());
                    max_days.set(String::new());
                    description.set(String::new());
                    reload.update(|n| *n += 1);
                }
                Err(err) => modal_message.set(err.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <div class="leave-types-page">
            <a class="btn btn--outline" href="/dashboard">"Back to Dashboard"</a>

            <div class="leave-types-page__header">
                <div>
                    <h2 class="page-title">"Manage Leave Types"</h2>
                    <p class="page-subtitle">
                        "Configure available leave categories and their limits"
                    </p>
                </div>
                <button
                    class="btn btn--primary"
                    on:click=move |_| {
                        modal_message.set(String::new());
                        show_modal.set(true);
                    }
                >
                    "+ Add New Type"
                </button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading-state">"Loading..."</div> }
            >
                <div class="types-grid">
                    {move || {
                        types
                            .get()
                            .into_iter()
                            .map(|leave_type| {
                                let badge = format!("{} Days Max", leave_type.max_days);
                                view! {
                                    <div class="type-card">
                                        <h3>{leave_type.type_name.clone()}</h3>
                                        <div class="type-card__badge">{badge}</div>
                                        <p class="type-card__description">
                                            {leave_type.description.clone()}
                                        </p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>

            <Show when=move || show_modal.get()>
                <div class="modal-overlay" on:click=move |_| show_modal.set(false)>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <h3>"Add New Leave Type"</h3>

                        <Show when=move || !modal_message.get().is_empty()>
                            <p class="auth-message auth-message--error">
                                {move || modal_message.get()}
                            </p>
                        </Show>

                        <form class="leave-form" on:submit=on_submit>
                            <label class="leave-form__label" for="type-name">"Type Name *"</label>
                            <input
                                id="type-name"
                                class="leave-form__input"
                                type="text"
                                required
                                placeholder="e.g. Annual Leave"
                                prop:value=move || type_name.get()
                                on:input=move |ev| type_name.set(event_target_value(&ev))
                            />
                            <label class="leave-form__label" for="max-days">"Max Days *"</label>
                            <input
                                id="max-days"
                                class="leave-form__input"
                                type="number"
                                required
                                placeholder="e.g. 14"
                                prop:value=move || max_days.get()
                                on:input=move |ev| max_days.set(event_target_value(&ev))
                            />
                            <label class="leave-form__label" for="description">"Description"</label>
                            <textarea
                                id="description"
                                class="leave-form__input"
                                rows="3"
                                placeholder="Brief description of this leave type..."
                                prop:value=move || description.get()
                                on:input=move |ev| description.set(event_target_value(&ev))
                            ></textarea>
                            <div class="modal__actions">
                                <button
                                    class="btn btn--primary"
                                    type="submit"
                                    disabled=move || busy.get()
                                >
                                    "Create Type"
                                </button>
                                <button
                                    class="btn btn--danger"
                                    type="button"
                                    on:click=move |_| show_modal.set(false)
                                >
                                    "Cancel"
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </div>
    }
}
