//! Error types for the login flow and the SSR host.
//!
//! ERROR HANDLING
//! ==============
//! Every `LoginError` variant collapses into the same user-facing message
//! class: the server-provided text when one was returned, otherwise the
//! configured fallback. Variant detail is kept for logging only.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure while authenticating an administrator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("login rejected: status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("login request failed: {0}")]
    Network(String),

    /// A success response did not carry `{token, user}`.
    #[error("login response parse failed: {0}")]
    Decode(String),

    /// The session could not be written after a successful login.
    #[error("session storage failed: {0}")]
    Storage(String),
}

impl LoginError {
    /// Text shown to the user for this failure.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Failure while starting the SSR host.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// `[package.metadata.leptos]` could not be loaded.
    #[error("leptos configuration: {0}")]
    Configuration(String),

    /// The listener could not be bound or the server loop failed.
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}
