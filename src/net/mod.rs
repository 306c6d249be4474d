//! Networking modules for the REST backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls and their error taxonomy, and `types`
//! defines the wire schema shared with the server.

pub mod api;
pub mod types;
