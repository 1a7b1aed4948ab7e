//! The `/store/order` resource.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;

use crate::client::CoreClient;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::nullable::Nullable;
use crate::params::{fmt_string_param, form_urlencoded_body, QueryStyle};
use crate::types::{Order, OrderStatus};

/// Request for `DELETE /store/order/{orderId}`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteRequest {
    /// ID of the order that needs to be deleted
    pub order_id: i64,
}

/// Request for `GET /store/order/{orderId}`.
#[derive(Debug, Clone, PartialEq)]
pub struct GetRequest {
    /// ID of order that needs to be fetched
    pub order_id: i64,
}

/// Request for `POST /store/order`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateRequest {
    pub complete: Nullable<bool>,
    pub id: Nullable<i64>,
    pub pet_id: Nullable<i64>,
    pub quantity: Nullable<i64>,
    pub ship_date: Nullable<String>,
    /// Order Status
    pub status: Nullable<OrderStatus>,
}

/// Client for the `/store/order` endpoints.
#[derive(Debug, Clone)]
pub struct OrderClient {
    core: Arc<CoreClient>,
}

impl OrderClient {
    pub(crate) fn new(core: Arc<CoreClient>) -> Self {
        Self { core }
    }

    /// Deletes a purchase order by identifier.
    ///
    /// `DELETE /store/order/{orderId}`
    pub async fn delete(&self, request: DeleteRequest) -> Result<(), ApiError> {
        let url = self.core.build_url(&format!(
            "/store/order/{}",
            fmt_string_param(&request.order_id)
        ))?;

        let builder = self.core.request(RestMethod::Delete, url.clone());
        self.core
            .execute(builder, RestMethod::Delete, &url, &["api_key"], &[])
            .await?;
        Ok(())
    }

    /// Finds a purchase order by ID.
    ///
    /// `GET /store/order/{orderId}`
    pub async fn get(&self, request: GetRequest) -> Result<Order, ApiError> {
        let url = self.core.build_url(&format!(
            "/store/order/{}",
            fmt_string_param(&request.order_id)
        ))?;

        let builder = self.core.request(RestMethod::Get, url.clone());
        let response = self
            .core
            .execute(builder, RestMethod::Get, &url, &["api_key"], &[])
            .await?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Places a new order in the store.
    ///
    /// `POST /store/order`
    pub async fn create(&self, request: CreateRequest) -> Result<Order, ApiError> {
        let url = self.core.build_url("/store/order")?;

        let body = form_urlencoded_body(
            &Order {
                complete: request.complete,
                id: request.id,
                pet_id: request.pet_id,
                quantity: request.quantity,
                ship_date: request.ship_date,
                status: request.status,
            },
            &[
                ("complete", QueryStyle::Form),
                ("id", QueryStyle::Form),
                ("petId", QueryStyle::Form),
                ("quantity", QueryStyle::Form),
                ("shipDate", QueryStyle::Form),
                ("status", QueryStyle::Form),
            ],
            &[
                ("complete", true),
                ("id", true),
                ("petId", true),
                ("quantity", true),
                ("shipDate", true),
                ("status", true),
            ],
        )?;

        let builder = self
            .core
            .request(RestMethod::Post, url.clone())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body);
        let response = self
            .core
            .execute(builder, RestMethod::Post, &url, &["api_key"], &[])
            .await?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
