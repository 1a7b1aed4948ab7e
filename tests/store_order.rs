//! Integration tests for the `/store/order` resource client.

use petstore::resources::store::order::{CreateRequest, DeleteRequest, GetRequest};
use petstore::types::OrderStatus;
use petstore::{ApiError, Client, Nullable};
use serde_json::json;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .with_base_url(server.uri())
        .with_api_key("API_KEY")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_delete_order() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/store/order/123"))
        .and(header("api_key", "API_KEY"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .store()
        .order()
        .delete(DeleteRequest { order_id: 123 })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_order_parses_typed_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/store/order/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "petId": 198772,
            "quantity": 7,
            "status": "approved",
            "complete": true,
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let order = client
        .store()
        .order()
        .get(GetRequest { order_id: 5 })
        .await
        .unwrap();

    assert_eq!(order.pet_id, Nullable::Present(198772));
    assert_eq!(order.status, Nullable::Present(OrderStatus::Approved));
    assert!(order.ship_date.is_absent());
}

#[tokio::test]
async fn test_create_order_sends_form_urlencoded_body() {
    let server = MockServer::start().await;

    // field order is deterministic: the encoder walks the generic object
    // representation, which sorts keys
    let expected_body =
        "complete=true&id=10&petId=198772&quantity=7&shipDate=1970-01-01T00%3A00%3A00&status=approved";

    Mock::given(method("POST"))
        .and(path("/store/order"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 10,
            "petId": 198772,
            "quantity": 7,
            "shipDate": "1970-01-01T00:00:00",
            "status": "approved",
            "complete": true,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let order = client
        .store()
        .order()
        .create(CreateRequest {
            complete: Nullable::Present(true),
            id: Nullable::Present(10),
            pet_id: Nullable::Present(198772),
            quantity: Nullable::Present(7),
            ship_date: Nullable::Present("1970-01-01T00:00:00".to_string()),
            status: Nullable::Present(OrderStatus::Approved),
        })
        .await
        .unwrap();

    assert_eq!(order.id, Nullable::Present(10));
    assert_eq!(order.complete, Nullable::Present(true));
}

#[tokio::test]
async fn test_create_order_omits_absent_fields_from_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/store/order"))
        .and(body_string("id=10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 10})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let order = client
        .store()
        .order()
        .create(CreateRequest {
            id: Nullable::Present(10),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(order.id, Nullable::Present(10));
}

#[tokio::test]
async fn test_get_order_error_is_classified() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/store/order/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("order not found"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .store()
        .order()
        .get(GetRequest { order_id: 404 })
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
}
