//! Signup page for registering a new employee account.
//!
//! Registration talks to the auth gateway directly and never touches the
//! session: the new user still logs in through the login page afterwards.

use leptos::prelude::*;

use crate::net::types::{ROLE_ADMIN, ROLE_MANAGER, ROLE_USER, SignupRequest};

#[component]
pub fn SignupPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let role = RwSignal::new(ROLE_USER.to_owned());
    let message = RwSignal::new(String::new());
    let successful = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        message.set(String::new());
        successful.set(false);
        busy.set(true);

        let request = SignupRequest {
            username: username.get().trim().to_owned(),
            full_name: full_name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
            department: department.get().trim().to_owned(),
            role: role.get(),
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::signup(&request).await {
                Ok(()) => {
                    successful.set(true);
                    message.set("User registered successfully! Please login.".to_owned());
                }
                Err(err) => {
                    message.set(err.to_string());
                }
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
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <div class="auth-card__logo">"S"</div>
                    <h2 class="auth-card__title">"Create Account"</h2>
                    <p class="auth-card__subtitle">"Join our employee management system"</p>
                </div>
                <Show when=move || !message.get().is_empty()>
                    <p class=move || {
                        if successful.get() {
                            "auth-message auth-message--success"
                        } else {
                            "auth-message auth-message--error"
                        }
                    }>{move || message.get()}</p>
                </Show>
                <Show when=move || !successful.get()>
                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__label" for="full-name">"Full Name"</label>
                        <input
                            id="full-name"
                            class="auth-form__input"
                            type="text"
                            required
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                        <label class="auth-form__label" for="username">"Username"</label>
                        <input
                            id="username"
                            class="auth-form__input"
                            type="text"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <label class="auth-form__label" for="email">"Email"</label>
                        <input
                            id="email"
                            class="auth-form__input"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <label class="auth-form__label" for="department">"Department"</label>
                        <input
                            id="department"
                            class="auth-form__input"
                            type="text"
                            required
                            prop:value=move || department.get()
                            on:input=move |ev| department.set(event_target_value(&ev))
                        />
                        <label class="auth-form__label" for="password">"Password"</label>
                        <input
                            id="password"
                            class="auth-form__input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <label class="auth-form__label" for="role">"Role"</label>
                        <select
                            id="role"
                            class="auth-form__input"
                            on:change=move |ev| role.set(event_target_value(&ev))
                            prop:value=move || role.get()
                        >
                            <option value=ROLE_USER>"Employee"</option>
                            <option value=ROLE_MANAGER>"Manager"</option>
                            <option value=ROLE_ADMIN>"Admin"</option>
                        </select>
                        <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating Account..." } else { "Sign Up" }}
                        </button>
                    </form>
                </Show>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a class="auth-card__link" href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
