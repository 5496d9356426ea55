//! Admin screen for managing employee records.

use leptos::prelude::*;

use crate::net::types::{EmployeeAccount, ROLE_ADMIN, ROLE_MANAGER, ROLE_USER, UpdateEmployeeRequest};
use crate::util::format::role_display;

#[component]
pub fn UsersPage() -> impl IntoView {
    let users = RwSignal::new(Vec::<EmployeeAccount>::new());
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0_u64);

    let selected = RwSignal::new(None::<EmployeeAccount>);
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let role = RwSignal::new(ROLE_USER.to_owned());
    let modal_message = RwSignal::new(String::new());
    let processing = RwSignal::new(false);

    Effect::new(move || {
        reload.track();
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::leave::fetch_users().await {
                    Ok(list) => users.set(list),
                    Err(err) => log::error!("failed to load employees: {err}"),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
    });

    let on_edit = move |user: EmployeeAccount| {
        full_name.set(user.full_name.clone());
        email.set(user.email.clone());
        department.set(user.department.clone());
        role.set(user.role.clone());
        modal_message.set(String::new());
        selected.set(Some(user));
    };

    let on_delete = move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message(
                        "Are you sure you want to delete this employee? This will also \
                         remove all their leave records and balances.",
                    )
                    .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::leave::delete_user(id).await {
                    Ok(()) => reload.update(|n| *n += 1),
                    Err(err) => log::error!("failed to delete employee: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    let on_update = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user) = selected.get() else {
            return;
        };
        if processing.get() {
            return;
        }
        processing.set(true);

        let request = UpdateEmployeeRequest {
            full_name: full_name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            department: department.get().trim().to_owned(),
            role: role.get(),
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::leave::update_user(user.id, &request).await {
                Ok(()) => {
                    selected.set(None);
                    reload.update(|n| *n += 1);
                }
                Err(err) => modal_message.set(err.to_string()),
            }
            processing.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, request);
            processing.set(false);
        }
    };

    view! {
        <div class="users-page">
            <header class="users-page__header">
                <h1><span class="auth-card__logo">"L"</span> " LeavePortal"</h1>
                <a class="btn btn--outline" href="/dashboard">"Back to Dashboard"</a>
            </header>

            <section class="dashboard-section">
                <h2>"Employee Management"</h2>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="loading-state">"Loading employees..."</div> }
                >
                    <table class="leave-table">
                        <thead>
                            <tr>
                                <th>"Full Name"</th>
                                <th>"Username"</th>
                                <th>"Email"</th>
                                <th>"Department"</th>
                                <th>"Role"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                users
                                    .get()
                                    .into_iter()
                                    .map(|user| {
                                        let department_label = if user.department.is_empty() {
                                            "N/A".to_owned()
                                        } else {
                                            user.department.clone()
                                        };
                                        let role_label = role_display(&user.role).to_owned();
                                        let id = user.id;
                                        let for_edit = user.clone();
                                        view! {
                                            <tr>
                                                <td class="leave-table__name">{user.full_name.clone()}</td>
                                                <td>{user.username.clone()}</td>
                                                <td>{user.email.clone()}</td>
                                                <td><span class="role-badge">{department_label}</span></td>
                                                <td><span class="role-badge">{role_label}</span></td>
                                                <td>
                                                    <div class="leave-table__actions">
                                                        <button
                                                            class="btn btn--ghost"
                                                            on:click=move |_| on_edit(for_edit.clone())
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            class="btn btn--danger"
                                                            on:click=move |_| on_delete(id)
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </div>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                    <Show when=move || users.get().is_empty()>
                        <div class="empty-state">"No users found"</div>
                    </Show>
                </Show>
            </section>

            <Show when=move || selected.get().is_some()>
                <div class="modal-overlay" on:click=move |_| selected.set(None)>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <h3>"Edit Employee"</h3>
                        <p class="page-subtitle">
                            "Update employee information and access privileges."
                        </p>

                        <Show when=move || !modal_message.get().is_empty()>
                            <p class="auth-message auth-message--error">
                                {move || modal_message.get()}
                            </p>
                        </Show>

                        <form class="leave-form" on:submit=on_update>
                            <label class="leave-form__label" for="edit-full-name">"Full Name"</label>
                            <input
                                id="edit-full-name"
                                class="leave-form__input"
                                type="text"
                                required
                                placeholder="e.g. John Doe"
                                prop:value=move || full_name.get()
                                on:input=move |ev| full_name.set(event_target_value(&ev))
                            />
                            <label class="leave-form__label" for="edit-email">"Email"</label>
                            <input
                                id="edit-email"
                                class="leave-form__input"
                                type="email"
                                required
                                placeholder="e.g. john@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                            <label class="leave-form__label" for="edit-department">"Department"</label>
                            <input
                                id="edit-department"
                                class="leave-form__input"
                                type="text"
                                placeholder="e.g. Engineering"
                                prop:value=move || department.get()
                                on:input=move |ev| department.set(event_target_value(&ev))
                            />
                            <label class="leave-form__label" for="edit-role">"Role"</label>
                            <select
                                id="edit-role"
                                class="leave-form__input"
                                required
                                on:change=move |ev| role.set(event_target_value(&ev))
                                prop:value=move || role.get()
                            >
                                <option value=ROLE_USER>"Employee"</option>
                                <option value=ROLE_MANAGER>"Manager"</option>
                                <option value=ROLE_ADMIN>"Admin"</option>
                            </select>
                            <div class="modal__actions">
                                <button
                                    class="btn btn--outline"
                                    type="button"
                                    on:click=move |_| selected.set(None)
                                >
                                    "Cancel"
                                </button>
                                <button
                                    class="btn btn--primary"
                                    type="submit"
                                    disabled=move || processing.get()
                                >
                                    {move || if processing.get() { "Saving..." } else { "Save Changes" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </div>
    }
}
