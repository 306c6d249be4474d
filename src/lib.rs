//! Client-side auth, onboarding, and profile core for the Passage app.
//!
//! SYSTEM CONTEXT
//! ==============
//! The UI host (screens, navigation, rendering) embeds this crate and owns
//! every visual concern. This crate owns the logic behind those screens:
//! talking to the REST backend, persisting the session token, and deciding
//! which screen the user should land on next. Navigation itself is the
//! host's job — flows here return a [`auth::handoff::NavigationIntent`]
//! instead of touching router state, so every flow is testable without a UI.
//!
//! ERROR HANDLING
//! ==============
//! Module boundaries return typed errors (`ApiError`, `StorageError`). The
//! registration handoff is the exception by contract: it absorbs all
//! failures and always yields a navigation intent, so the host can never be
//! left without a next screen.

pub mod auth;
pub mod net;
pub mod storage;
