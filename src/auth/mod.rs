//! Authentication flows: session token lifecycle and the registration
//! handoff.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the stored token; `handoff` owns the register-then-login
//! sequence that turns fresh credentials into either an authenticated
//! session or a decisive fall-back to the login screen.

pub mod handoff;
pub mod session;
