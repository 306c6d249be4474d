//! Session-token lifecycle over durable key-value storage.
//!
//! ARCHITECTURE
//! ============
//! The whole session is one string under one fixed key. The handoff writes
//! it, startup and authed screens read it, logout clears it. Writes are
//! last-write-wins; concurrent logins race only on this key and the final
//! winner is simply the last successful write.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::storage::{KeyValueStore, StorageError};

/// Fixed storage key holding the current session token.
pub const USER_TOKEN_KEY: &str = "userToken";

/// Persist `token` as the current session, overwriting any previous one.
///
/// # Errors
///
/// Returns the underlying [`StorageError`] when the write fails; callers on
/// the handoff path convert this into a fall-back navigation outcome.
pub async fn store_token(store: &dyn KeyValueStore, token: &str) -> Result<(), StorageError> {
    store.set(USER_TOKEN_KEY, token).await
}

/// Read the current session token, if one is stored.
///
/// # Errors
///
/// Returns the underlying [`StorageError`] when the read fails.
pub async fn load_token(store: &dyn KeyValueStore) -> Result<Option<String>, StorageError> {
    store.get(USER_TOKEN_KEY).await
}

/// Delete the stored session token (logout).
///
/// # Errors
///
/// Returns the underlying [`StorageError`] when the delete fails.
pub async fn clear_token(store: &dyn KeyValueStore) -> Result<(), StorageError> {
    store.remove(USER_TOKEN_KEY).await
}

/// Startup check: is a session token present?
///
/// Diagnostic only — the result is logged and returned, but nothing in this
/// crate gates navigation on it; the host decides what (if anything) to do.
/// A storage read failure is logged and reported as "no session".
pub async fn has_active_session(store: &dyn KeyValueStore) -> bool {
    match load_token(store).await {
        Ok(Some(token)) if !token.is_empty() => {
            tracing::debug!("stored session token found");
            true
        }
        Ok(_) => {
            tracing::debug!("no stored session token");
            false
        }
        Err(e) => {
            tracing::warn!(error = %e, "session token read failed");
            false
        }
    }
}
