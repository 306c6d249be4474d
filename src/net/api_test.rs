use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::net::types::{Credentials, RegisterRequest, UpdateProfileRequest, UserProfile};

fn test_credentials() -> Credentials {
    Credentials {
        email: "a@b.com".to_owned(),
        password: "pw1".to_owned(),
    }
}

// =============================================================================
// endpoint helpers
// =============================================================================

#[test]
fn login_endpoint_formats_expected_path() {
    assert_eq!(login_endpoint("http://x"), "http://x/api/users/login");
}

#[test]
fn register_endpoint_formats_expected_path() {
    assert_eq!(register_endpoint("http://x"), "http://x/api/users/register");
}

#[test]
fn user_profile_endpoint_formats_expected_path() {
    assert_eq!(
        user_profile_endpoint("http://x", "u123"),
        "http://x/api/users/u123/profile"
    );
}

#[test]
fn new_strips_trailing_slashes() {
    let api = ApiClient::new("http://x///");
    assert_eq!(api.base_url, "http://x");
}

// =============================================================================
// ApiError
// =============================================================================

#[test]
fn status_error_displays_code() {
    assert_eq!(ApiError::Status(401).to_string(), "request failed with status 401");
}

// =============================================================================
// login
// =============================================================================

#[tokio::test]
async fn login_posts_credentials_and_returns_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .and(body_json(serde_json::json!({"email": "a@b.com", "password": "pw1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "tok-42"})))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let resp = api.login(&test_credentials()).await.unwrap();
    assert_eq!(resp.token.as_deref(), Some("tok-42"));
}

#[tokio::test]
async fn login_with_tokenless_body_is_success_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let resp = api.login(&test_credentials()).await.unwrap();
    assert_eq!(resp.token, None);
}

#[tokio::test]
async fn login_non_2xx_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    match api.login(&test_credentials()).await {
        Err(ApiError::Status(401)) => {}
        other => panic!("expected Status(401), got {other:?}"),
    }
}

#[tokio::test]
async fn login_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    match api.login(&test_credentials()).await {
        Err(ApiError::Decode(_)) => {}
        other => panic!("expected Decode, got {other:?}"),
    }
}

#[tokio::test]
async fn login_unreachable_server_is_transport_error() {
    // Reserved discard port; nothing listens there.
    let api = ApiClient::new("http://127.0.0.1:9");
    match api.login(&test_credentials()).await {
        Err(ApiError::Transport(_)) => {}
        other => panic!("expected Transport, got {other:?}"),
    }
}

// =============================================================================
// register
// =============================================================================

#[tokio::test]
async fn register_posts_body_and_returns_account() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .and(body_json(serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "u1",
            "name": "Ada",
            "email": "ada@example.com"
        })))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let req = RegisterRequest {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    let resp = api.register(&req).await.unwrap();
    assert_eq!(resp.id, "u1");
    assert_eq!(resp.email, "ada@example.com");
}

#[tokio::test]
async fn register_conflict_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let req = RegisterRequest {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    match api.register(&req).await {
        Err(ApiError::Status(409)) => {}
        other => panic!("expected Status(409), got {other:?}"),
    }
}

// =============================================================================
// profile
// =============================================================================

#[tokio::test]
async fn fetch_profile_returns_profile() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/u1/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "u1",
            "name": "Ada",
            "email": "ada@example.com",
            "bio": "systems tinkerer"
        })))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let profile = api.fetch_profile("u1").await.unwrap();
    assert_eq!(profile.name, "Ada");
    assert_eq!(profile.bio.as_deref(), Some("systems tinkerer"));
}

#[tokio::test]
async fn fetch_profile_missing_user_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/nobody/profile"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    match api.fetch_profile("nobody").await {
        Err(ApiError::Status(404)) => {}
        other => panic!("expected Status(404), got {other:?}"),
    }
}

#[tokio::test]
async fn update_profile_puts_partial_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/users/u1/profile"))
        .and(body_json(serde_json::json!({"bio": "updated"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "u1",
            "name": "Ada",
            "email": "ada@example.com",
            "bio": "updated"
        })))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let req = UpdateProfileRequest {
        bio: Some("updated".to_owned()),
        ..UpdateProfileRequest::default()
    };
    let profile: UserProfile = api.update_profile("u1", &req).await.unwrap();
    assert_eq!(profile.bio.as_deref(), Some("updated"));
}
