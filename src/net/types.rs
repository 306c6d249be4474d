//! Wire DTOs for the client/server REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads so serde round-trips stay
//! lossless. Anything the server may legitimately omit is an `Option` here
//! rather than a deserialization failure, because "response arrived but is
//! missing a field" is a distinct outcome the auth flows react to.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Login credentials, serialized as the `POST /api/users/login` body.
///
/// Transient: supplied by the caller, already validated upstream, and never
/// persisted by this crate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email address (non-empty, validated by the registration flow).
    pub email: String,
    /// Account password (non-empty).
    pub password: String,
}

/// Body of a successful login response.
///
/// The `token` field is optional on purpose: a 2xx response without a usable
/// token is a real server behavior the handoff must handle, not a decode
/// error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque session token, absent when the server declined to issue one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl LoginResponse {
    /// The session token, if present and non-empty.
    ///
    /// An empty string is treated the same as an absent field: the session
    /// invariant requires a non-empty token before anything is persisted.
    #[must_use]
    pub fn usable_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Body of `POST /api/users/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name for the new account.
    pub name: String,
    /// Email address, doubling as the login identifier.
    pub email: String,
    /// Initial password.
    pub password: String,
}

impl RegisterRequest {
    /// The credentials the freshly registered account can log in with.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Body of a successful registration response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Server-assigned user identifier (opaque string).
    pub id: String,
    /// Display name as stored by the server.
    pub name: String,
    /// Email address as stored by the server.
    pub email: String,
}

/// A user's profile as rendered by the profile screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier (opaque string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Free-form bio text, if the user has set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Avatar image URL, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Partial profile edit; `None` fields are omitted from the JSON body so the
/// server leaves them unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New bio text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// New avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}
