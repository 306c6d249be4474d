//! Registration handoff: automatic login right after account creation.
//!
//! ARCHITECTURE
//! ============
//! One sequential attempt per invocation: log in, persist the token, report
//! where the host should navigate. No retries, no parallel sub-tasks, and
//! no state carried between invocations — concurrent calls race only on
//! the single token key, last write wins.
//!
//! FAILURE SEMANTICS
//! =================
//! Nothing escapes this module. Transport failures, tokenless responses,
//! and storage-write failures are distinguished internally for telemetry,
//! then all collapse into [`NavigationIntent::LoginScreen`] so the user
//! always lands somewhere — at worst on the manual login form.

#[cfg(test)]
#[path = "handoff_test.rs"]
mod handoff_test;

use thiserror::Error;

use super::session;
use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{Credentials, RegisterRequest};
use crate::storage::{KeyValueStore, StorageError};

/// Which screen the host should show next. Returned, never dispatched:
/// the navigation mechanism belongs to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Session established; proceed into the app.
    MainScreen,
    /// No session; fall back to the manual login form.
    LoginScreen,
}

/// Internal failure classes, kept apart for logging only.
#[derive(Debug, Error)]
enum HandoffFailure {
    #[error("login call failed: {0}")]
    Login(#[from] ApiError),
    #[error("login response carried no usable token")]
    MissingToken,
    #[error("session token write failed: {0}")]
    Persistence(#[from] StorageError),
}

/// Complete the post-registration handoff for an account that already
/// exists: log in with `credentials`, persist the session token, and
/// return the next screen.
///
/// At most one network call and one storage write happen per invocation.
/// The token is written if and only if the login response carries a
/// non-empty token; the result is [`NavigationIntent::MainScreen`] if and
/// only if that write succeeded.
pub async fn complete_registration_and_login(
    api: &dyn AuthApi,
    store: &dyn KeyValueStore,
    credentials: &Credentials,
) -> NavigationIntent {
    match login_and_store(api, store, credentials).await {
        Ok(()) => NavigationIntent::MainScreen,
        Err(failure) => {
            match &failure {
                HandoffFailure::Login(e) => {
                    tracing::warn!(error = %e, "auto-login failed, falling back to login screen");
                }
                HandoffFailure::MissingToken => {
                    tracing::warn!("login response carried no token, falling back to login screen");
                }
                HandoffFailure::Persistence(e) => {
                    tracing::warn!(error = %e, "session token write failed, falling back to login screen");
                }
            }
            NavigationIntent::LoginScreen
        }
    }
}

/// Full onboarding sequence for the registration screen: create the
/// account, then hand off to [`complete_registration_and_login`] with the
/// same credentials. A registration failure short-circuits straight to the
/// login screen without attempting a login.
pub async fn register_and_login(
    api: &dyn AuthApi,
    store: &dyn KeyValueStore,
    request: &RegisterRequest,
) -> NavigationIntent {
    match api.register(request).await {
        Ok(account) => {
            tracing::debug!(user_id = %account.id, "registration succeeded, attempting auto-login");
            complete_registration_and_login(api, store, &request.credentials()).await
        }
        Err(e) => {
            tracing::warn!(error = %e, "registration failed, falling back to login screen");
            NavigationIntent::LoginScreen
        }
    }
}

async fn login_and_store(
    api: &dyn AuthApi,
    store: &dyn KeyValueStore,
    credentials: &Credentials,
) -> Result<(), HandoffFailure> {
    let response = api.login(credentials).await?;
    let Some(token) = response.usable_token() else {
        return Err(HandoffFailure::MissingToken);
    };
    session::store_token(store, token).await?;
    tracing::debug!("session token stored");
    Ok(())
}
