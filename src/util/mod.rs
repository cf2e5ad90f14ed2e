//! Browser-facing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page logic so
//! the login flow can be tested natively.

pub mod navigation;
