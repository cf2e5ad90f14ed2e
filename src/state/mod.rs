//! Client-side state for the admin login page.
//!
//! DESIGN
//! ======
//! State is split by concern (`login` form, `session` persistence, `toast`
//! notifications) so each piece can be tested without a browser.

pub mod login;
pub mod session;
pub mod toast;
