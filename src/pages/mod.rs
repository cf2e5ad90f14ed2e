//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates side effects to
//! `flow` and rendering details to `components`.

pub mod admin_login;
