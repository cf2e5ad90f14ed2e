//! Administrator email + password login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/admin/login`. A tab that already holds an admin token is sent
//! straight to `/admin`; otherwise the form posts to the login endpoint and
//! redirects on success. Side effects run through `crate::flow` with the
//! browser implementations of its collaborators.

#[cfg(test)]
#[path = "admin_login_test.rs"]
mod admin_login_test;

use leptos::prelude::*;

use crate::components::toast::{ToastNotifier, Toasts};
use crate::config::LoginConfig;
use crate::flow::{self, LoginContext};
use crate::net::api::HttpAuthApi;
use crate::state::login::{LoginForm, validate_credentials};
use crate::state::session::BrowserSessionStore;
use crate::state::toast::{Notifier, ToastState};
use crate::util::navigation::BrowserNavigator;

fn toggle_label(show_password: bool) -> &'static str {
    if show_password { "Hide" } else { "Show" }
}

fn toggle_aria_label(show_password: bool) -> &'static str {
    if show_password { "Hide password" } else { "Show password" }
}

fn submit_label(loading: bool) -> &'static str {
    if loading { "Signing in..." } else { "Sign In" }
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let config = use_context::<LoginConfig>().unwrap_or_default();
    let form = RwSignal::new(LoginForm::default());
    let toasts = RwSignal::new(ToastState::default());
    let notifier = ToastNotifier::new(toasts);

    // Effects only run in the browser, so SSR never redirects.
    let mount_config = config.clone();
    Effect::new(move || {
        let store = BrowserSessionStore::new(&mount_config);
        flow::redirect_if_authenticated(&store, &BrowserNavigator, &mount_config);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (email, password) = form.with(|f| (f.email.clone(), f.password.clone()));
        if let Err(message) = validate_credentials(&email, &password) {
            notifier.error(message);
            return;
        }
        let Some(credentials) = form.try_update(LoginForm::begin_submit).flatten() else {
            return;
        };

        let ctx = LoginContext {
            api: HttpAuthApi::new(config.login_endpoint.clone()),
            store: BrowserSessionStore::new(&config),
            navigator: BrowserNavigator,
            notifier,
            config: config.clone(),
        };
        leptos::task::spawn_local(async move {
            let outcome = flow::submit(&ctx, credentials).await;
            form.try_update(|f| f.settle(outcome));
        });
    };

    view! {
        <div class="admin-login-page">
            <div class="admin-login-card">
                <h1>"Admin Login"</h1>
                <p class="admin-login-card__subtitle">"Sign in to the admin area"</p>
                <form class="admin-login-form" on:submit=on_submit>
                    <label class="admin-login-label" for="admin-login-email">"Email"</label>
                    <input
                        id="admin-login-email"
                        class="admin-login-input"
                        type="email"
                        required=true
                        autocomplete="username"
                        placeholder="admin@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                    />
                    <label class="admin-login-label" for="admin-login-password">"Password"</label>
                    <div class="admin-login-password">
                        <input
                            id="admin-login-password"
                            class="admin-login-input"
                            type=move || form.with(LoginForm::password_input_type)
                            required=true
                            autocomplete="current-password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                        />
                        <button
                            class="admin-login-toggle"
                            type="button"
                            aria-label=move || toggle_aria_label(form.with(|f| f.show_password))
                            on:click=move |_| form.update(LoginForm::toggle_password_visibility)
                        >
                            {move || toggle_label(form.with(|f| f.show_password))}
                        </button>
                    </div>
                    <button
                        class="admin-login-button"
                        type="submit"
                        disabled=move || form.with(LoginForm::submit_disabled)
                    >
                        <Show when=move || form.with(|f| f.loading)>
                            <span class="admin-login-spinner" aria-hidden="true"></span>
                        </Show>
                        {move || submit_label(form.with(|f| f.loading))}
                    </button>
                </form>
                <Toasts toasts=toasts/>
            </div>
        </div>
    }
}
