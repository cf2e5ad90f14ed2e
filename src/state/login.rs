//! Admin login form state.
//!
//! DESIGN
//! ======
//! Plain data with explicit transitions so the page can hold it in a single
//! `RwSignal` and tests can drive it without a reactive runtime.
//!
//! `Idle -> Submitting -> (Authenticated: Navigating) | (Rejected: Idle)`

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::types::Credentials;

pub const MISSING_FIELDS_MESSAGE: &str = "Enter your email and password.";
pub const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email address.";

/// Where the form is in its submit lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    /// Login succeeded and a redirect has been issued.
    Navigating,
}

/// Result of one settled submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated,
    Rejected,
}

/// Controlled-field values plus presentation flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub loading: bool,
    navigating: bool,
}

impl LoginForm {
    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// `type` attribute for the password input.
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }

    /// The submit control is disabled only while a request is in flight.
    pub fn submit_disabled(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> LoginPhase {
        if self.loading {
            LoginPhase::Submitting
        } else if self.navigating {
            LoginPhase::Navigating
        } else {
            LoginPhase::Idle
        }
    }

    /// Enter `Submitting` and hand out the credentials to send.
    ///
    /// Returns `None` while a request is already in flight, so at most one
    /// submission exists at a time. The email is sent trimmed, matching what
    /// `validate_credentials` checks.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.submit_disabled() {
            return None;
        }
        self.loading = true;
        self.navigating = false;
        Some(Credentials { email: self.email.trim().to_owned(), password: self.password.clone() })
    }

    /// Leave `Submitting` once the request has settled.
    pub fn settle(&mut self, outcome: LoginOutcome) {
        self.loading = false;
        self.navigating = outcome == LoginOutcome::Authenticated;
    }
}

/// Mirror of the browser's `required` + `type="email"` constraint checks.
///
/// # Errors
///
/// Returns the message to show when either field is blank or the email is
/// not of the form `local@domain`.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    if !is_valid_email(email.trim()) {
        return Err(INVALID_EMAIL_MESSAGE);
    }
    Ok(())
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}
