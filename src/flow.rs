//! Mount guard and submit orchestration for the admin login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the reactive `LoginForm`; this module owns the side effects
//! (HTTP, session write, toast, redirect) through injected collaborators so
//! every path can be driven from native tests.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use crate::config::LoginConfig;
use crate::net::api::AuthApi;
use crate::net::types::Credentials;
use crate::state::login::LoginOutcome;
use crate::state::session::{Session, SessionStore};
use crate::state::toast::Notifier;
use crate::util::navigation::Navigator;

/// Collaborators used by one login page instance.
#[derive(Clone, Debug)]
pub struct LoginContext<A, S, N, T> {
    pub api: A,
    pub store: S,
    pub navigator: N,
    pub notifier: T,
    pub config: LoginConfig,
}

/// Skip the form when this tab already holds an admin token.
///
/// Returns `true` when a redirect to `config.redirect_path` was issued.
pub fn redirect_if_authenticated<S, N>(store: &S, navigator: &N, config: &LoginConfig) -> bool
where
    S: SessionStore + ?Sized,
    N: Navigator + ?Sized,
{
    if store.read_token().is_none() {
        return false;
    }
    log::debug!("admin token present; redirecting to {}", config.redirect_path);
    navigator.navigate(&config.redirect_path);
    true
}

/// Authenticate once and apply the outcome.
///
/// Success persists the session, raises a success toast and redirects.
/// Any failure, including a session write that fails after the server
/// accepted the credentials, raises an error toast and leaves the user on
/// the form. The caller settles the form with the returned outcome.
pub async fn submit<A, S, N, T>(ctx: &LoginContext<A, S, N, T>, credentials: Credentials) -> LoginOutcome
where
    A: AuthApi,
    S: SessionStore,
    N: Navigator,
    T: Notifier,
{
    let result = ctx
        .api
        .login(&credentials)
        .await
        .and_then(|resp| ctx.store.write_session(&Session::from(resp)));

    match result {
        Ok(()) => {
            log::info!("admin login succeeded for {}", credentials.email);
            ctx.notifier.success(&ctx.config.success_message);
            ctx.navigator.navigate(&ctx.config.redirect_path);
            LoginOutcome::Authenticated
        }
        Err(e) => {
            log::warn!("admin login failed for {}: {e}", credentials.email);
            ctx.notifier.error(&e.user_message(&ctx.config.invalid_credentials_message));
            LoginOutcome::Rejected
        }
    }
}
