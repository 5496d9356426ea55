//! Login page with the username/password credential form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only writer of a new session besides signup-then-login: on success it
//! applies the exchanged session to the auth context and moves to the
//! dashboard. Failures stay on this page as an inline message.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::SigninRequest;
use crate::state::auth::use_auth;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        message.set(String::new());
        busy.set(true);

        let request = SigninRequest {
            username: username.get().trim().to_owned(),
            password: password.get(),
        };
        // Stamp this attempt so a late-resolving exchange cannot clobber a
        // newer login or logout.
        let epoch = auth.try_update(|a| a.begin_login()).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::signin(&request).await {
                    Ok(session) => {
                        let applied = auth
                            .try_update(|a| a.apply_login(epoch, session))
                            .unwrap_or(false);
                        if applied {
                            navigate("/dashboard", leptos_router::NavigateOptions::default());
                        }
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
            let _ = (&navigate, request, epoch);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <div class="auth-card__logo">"L"</div>
                    <h2 class="auth-card__title">"Welcome Back"</h2>
                    <p class="auth-card__subtitle">"Login to manage your leaves"</p>
                </div>
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || message.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="username">"Username"</label>
                    <input
                        id="username"
                        class="auth-form__input"
                        type="text"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
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
                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a class="auth-card__link" href="/signup">"Sign up now"</a>
                </p>
            </div>
        </div>
    }
}
