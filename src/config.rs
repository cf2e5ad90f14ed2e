//! Login flow and host configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginConfig` is shared by the page, the submit flow and the session
//! store so endpoint paths and storage keys live in one place. `ServerConfig`
//! is only read by the SSR host binary.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_LOGIN_ENDPOINT: &str = "/api/admin/login";
pub const DEFAULT_REDIRECT_PATH: &str = "/admin";
pub const DEFAULT_TOKEN_KEY: &str = "admin-token";
pub const DEFAULT_USER_KEY: &str = "admin-user";
pub const DEFAULT_INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Signed in";
pub const DEFAULT_PORT: u16 = 3000;

/// Endpoint, redirect target, storage keys and user-facing fallback text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginConfig {
    pub login_endpoint: String,
    pub redirect_path: String,
    pub token_key: String,
    pub user_key: String,
    pub invalid_credentials_message: String,
    pub success_message: String,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            login_endpoint: DEFAULT_LOGIN_ENDPOINT.to_owned(),
            redirect_path: DEFAULT_REDIRECT_PATH.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            user_key: DEFAULT_USER_KEY.to_owned(),
            invalid_credentials_message: DEFAULT_INVALID_CREDENTIALS_MESSAGE.to_owned(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_owned(),
        }
    }
}

/// Settings for the SSR host process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub site_root: Option<String>,
}

impl ServerConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000; unparseable values fall back to the default
    /// - `ADMIN_LOGIN_SITE_ROOT`: overrides the Leptos `site-root` for `/pkg` assets
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("ADMIN_LOGIN_SITE_ROOT").ok().as_deref(),
        )
    }

    fn from_vars(port: Option<&str>, site_root: Option<&str>) -> Self {
        let port = port
            .and_then(|v| v.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let site_root = site_root
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_owned);
        Self { port, site_root }
    }
}
