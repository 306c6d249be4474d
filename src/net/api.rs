//! REST API client for the Passage backend.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a typed `ApiError` instead of panicking, and the
//! taxonomy keeps "the request never completed" (`Transport`), "the server
//! said no" (`Status`), and "the body was not what we expected" (`Decode`)
//! apart. Auth flows collapse all three into one fallback outcome, but
//! telemetry wants to know which one happened.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use thiserror::Error;

use super::types::{
    Credentials, LoginResponse, RegisterRequest, RegisterResponse, UpdateProfileRequest,
    UserProfile,
};

fn login_endpoint(base_url: &str) -> String {
    format!("{base_url}/api/users/login")
}

fn register_endpoint(base_url: &str) -> String {
    format!("{base_url}/api/users/register")
}

fn user_profile_endpoint(base_url: &str, user_id: &str) -> String {
    format!("{base_url}/api/users/{user_id}/profile")
}

/// Failure classes for a single REST call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),
    /// The server responded with a non-2xx status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// A 2xx response arrived but the body failed to decode.
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// The authentication surface of the backend.
///
/// `ApiClient` is the real implementation; flows take `&dyn AuthApi` so
/// tests can substitute an in-memory stub with no network.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a session token via `POST /api/users/login`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails, the server responds
    /// with a non-2xx status, or the body cannot be decoded. A 2xx body
    /// without a token is *not* an error here; it surfaces as
    /// `LoginResponse { token: None }`.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// Create an account via `POST /api/users/register`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails, the server responds
    /// with a non-2xx status, or the body cannot be decoded.
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError>;
}

/// HTTP client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the backend at `base_url` (scheme + host, no
    /// trailing slash required).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch a user's profile via `GET /api/users/{user_id}/profile`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails, the server responds
    /// with a non-2xx status, or the body cannot be decoded.
    pub async fn fetch_profile(&self, user_id: &str) -> Result<UserProfile, ApiError> {
        let url = user_profile_endpoint(&self.base_url, user_id);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        resp.json().await.map_err(ApiError::Decode)
    }

    /// Apply a partial profile edit via `PUT /api/users/{user_id}/profile`,
    /// returning the updated profile.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails, the server responds
    /// with a non-2xx status, or the body cannot be decoded.
    pub async fn update_profile(
        &self,
        user_id: &str,
        request: &UpdateProfileRequest,
    ) -> Result<UserProfile, ApiError> {
        let url = user_profile_endpoint(&self.base_url, user_id);
        let resp = self
            .http
            .put(&url)
            .json(request)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        resp.json().await.map_err(ApiError::Decode)
    }
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let url = login_endpoint(&self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        resp.json().await.map_err(ApiError::Decode)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let url = register_endpoint(&self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        resp.json().await.map_err(ApiError::Decode)
    }
}
