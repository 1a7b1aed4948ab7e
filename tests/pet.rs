//! Integration tests for the `/pet` resource client.

use petstore::resources::pet::{
    CreateRequest, DeleteRequest, FindByStatusRequest, GetRequest, UploadImageRequest,
};
use petstore::types::{FindByStatusStatus, PetStatus};
use petstore::{ApiError, Client, Nullable};
use serde_json::json;
use tracing_test::traced_test;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .with_base_url(server.uri())
        .with_api_key("API_KEY")
        .build()
        .unwrap()
}

#[tokio::test]
#[traced_test]
async fn test_delete_sends_method_auth_and_sdk_header() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/pet/123"))
        .and(header("api_key", "API_KEY"))
        .and(header("x-sdk-language", "Rust"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .pet()
        .delete(DeleteRequest { pet_id: 123 })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_error_carries_status_and_url() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/pet/123"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such pet"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .pet()
        .delete(DeleteRequest { pet_id: 123 })
        .await
        .unwrap_err();

    match err {
        ApiError::Http {
            status,
            method,
            url,
            body,
        } => {
            assert_eq!(status, 404);
            assert_eq!(method, petstore::RestMethod::Delete);
            assert_eq!(url.as_str(), format!("{}/pet/123", server.uri()));
            assert_eq!(body.as_ref(), b"no such pet");
        }
        other => panic!("expected ApiError::Http, got {other:?}"),
    }
}

#[tokio::test]
async fn test_find_by_status_encodes_query_param() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pet/findByStatus"))
        .and(query_param("status", "available"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "rex", "photoUrls": [], "status": "available"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let pets = client
        .pet()
        .find_by_status(FindByStatusRequest {
            status: Nullable::Present(FindByStatusStatus::Available),
        })
        .await
        .unwrap();

    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0].name, "rex");
    assert_eq!(pets[0].status, Nullable::Present(PetStatus::Available));
}

#[tokio::test]
async fn test_find_by_status_omits_absent_param() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pet/findByStatus"))
        .and(query_param_is_missing("status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let pets = client
        .pet()
        .find_by_status(FindByStatusRequest::default())
        .await
        .unwrap();

    assert!(pets.is_empty());
}

#[tokio::test]
async fn test_create_sends_json_body_without_absent_fields() {
    let server = MockServer::start().await;

    let expected_body = json!({
        "id": 10,
        "name": "doggie",
        "photoUrls": ["https://example.com/doggie.png"],
        "status": "available",
        "tags": [{"id": 123, "name": "friendly"}],
    });

    Mock::given(method("POST"))
        .and(path("/pet"))
        .and(header("content-type", "application/json"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(&expected_body))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let pet = client
        .pet()
        .create(CreateRequest {
            category: Nullable::Absent,
            id: Nullable::Present(10),
            name: "doggie".to_string(),
            photo_urls: vec!["https://example.com/doggie.png".to_string()],
            status: Nullable::Present(PetStatus::Available),
            tags: Nullable::Present(vec![petstore::types::Tag {
                id: Nullable::Present(123),
                name: Nullable::Present("friendly".to_string()),
            }]),
        })
        .await
        .unwrap();

    assert_eq!(pet.id, Nullable::Present(10));
    assert!(pet.category.is_absent());
}

#[tokio::test]
async fn test_get_parses_typed_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pet/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "name": "whiskers",
            "photoUrls": [],
            "category": null,
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let pet = client.pet().get(GetRequest { pet_id: 7 }).await.unwrap();

    assert_eq!(pet.name, "whiskers");
    // explicit null round-trips as null, not absent
    assert!(pet.category.is_null());
    assert!(pet.status.is_absent());
}

#[tokio::test]
async fn test_get_invalid_json_surfaces_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pet/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.pet().get(GetRequest { pet_id: 7 }).await.unwrap_err();
    assert!(matches!(err, ApiError::Json(_)));
}

#[tokio::test]
async fn test_upload_image_sends_raw_bytes_and_metadata() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pet/123/uploadImage"))
        .and(header("content-type", "application/octet-stream"))
        .and(query_param("additionalMetadata", "profile shot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "uploaded",
            "type": "image/png",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client
        .pet()
        .upload_image(UploadImageRequest {
            data: bytes::Bytes::from_static(&[0x89, 0x50, 0x4e, 0x47]),
            pet_id: 123,
            additional_metadata: Nullable::Present("profile shot".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(result.code, Nullable::Present(200));
    assert_eq!(result.kind, Nullable::Present("image/png".to_string()));
}

#[tokio::test]
async fn test_client_level_modifier_applies_to_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pet/1"))
        .and(header("x-request-id", "fixed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "rex",
            "photoUrls": [],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder()
        .with_base_url(server.uri())
        .with_modifier(|req| Ok(req.header("x-request-id", "fixed")))
        .build()
        .unwrap();

    client.pet().get(GetRequest { pet_id: 1 }).await.unwrap();
}
