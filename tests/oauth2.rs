//! Integration tests for the OAuth2 refresh flow.

use std::sync::Arc;

use petstore::auth::{
    AuthBearer, CredentialsLocation, OAuth2, OAuth2ClientCredentialsForm, OAuth2Config,
    TokenBodyContent,
};
use petstore::resources::pet::GetRequest;
use petstore::{ApiError, AuthError, Client};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn oauth2_client(server: &MockServer) -> Client {
    let http = reqwest::Client::new();
    let oauth = OAuth2::client_credentials(
        OAuth2Config {
            http: http.clone(),
            base_url: server.uri(),
            token_url: "/oauth/token".to_string(),
            access_token_pointer: "/access_token".to_string(),
            expires_in_pointer: "/expires_in".to_string(),
            credentials_location: CredentialsLocation::RequestBody,
            body_content: TokenBodyContent::Form,
            request_mutator: Arc::new(AuthBearer::new("")),
        },
        OAuth2ClientCredentialsForm {
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
            ..Default::default()
        },
    );

    Client::builder()
        .with_base_url(server.uri())
        .with_http_client(http)
        .with_auth("api_key", Arc::new(oauth))
        .build()
        .unwrap()
}

fn pet_body() -> serde_json::Value {
    json!({"id": 5, "name": "rex", "photoUrls": []})
}

#[tokio::test]
async fn test_first_call_refreshes_once_second_call_uses_cache() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=client-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-1",
            "expires_in": 3600,
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pet/5"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pet_body()))
        .expect(2)
        .mount(&server)
        .await;

    let client = oauth2_client(&server);
    client.pet().get(GetRequest { pet_id: 5 }).await.unwrap();
    client.pet().get(GetRequest { pet_id: 5 }).await.unwrap();
}

#[tokio::test]
async fn test_expired_token_triggers_second_refresh() {
    let server = MockServer::start().await;

    // zero-second lifetime: the cached expiry is already due on the next call
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-1",
            "expires_in": 0,
        })))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pet/5"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pet_body()))
        .expect(2)
        .mount(&server)
        .await;

    let client = oauth2_client(&server);
    client.pet().get(GetRequest { pet_id: 5 }).await.unwrap();
    client.pet().get(GetRequest { pet_id: 5 }).await.unwrap();
}

#[tokio::test]
async fn test_refresh_failure_aborts_the_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(500).set_body_string("token service down"))
        .mount(&server)
        .await;

    let client = oauth2_client(&server);
    let err = client.pet().get(GetRequest { pet_id: 5 }).await.unwrap_err();

    match err {
        ApiError::Auth(AuthError::RefreshStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "token service down");
        }
        other => panic!("expected refresh failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_token_field_is_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"expires_in": 3600})))
        .mount(&server)
        .await;

    let client = oauth2_client(&server);
    let err = client.pet().get(GetRequest { pet_id: 5 }).await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::Auth(AuthError::TokenPointer(pointer)) if pointer == "/access_token"
    ));
}
