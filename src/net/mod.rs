//! Networking for the admin login endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP call behind the `AuthApi` seam and `types` defines the
//! request/response schema.

pub mod api;
pub mod types;
