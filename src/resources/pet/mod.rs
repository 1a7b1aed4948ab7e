//! The `/pet` resource.

use std::sync::Arc;

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;

use crate::client::CoreClient;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::nullable::Nullable;
use crate::params::{add_query_param, fmt_string_param, QueryParams, QueryStyle};
use crate::types::{Category, FindByStatusStatus, Pet, PetStatus, Tag, UploadResult};

/// Request for `DELETE /pet/{petId}`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteRequest {
    /// Pet id to delete
    pub pet_id: i64,
}

/// Request for `GET /pet/findByStatus`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FindByStatusRequest {
    /// Status values that need to be considered for filter
    pub status: Nullable<FindByStatusStatus>,
}

/// Request for `GET /pet/{petId}`.
#[derive(Debug, Clone, PartialEq)]
pub struct GetRequest {
    /// ID of pet to return
    pub pet_id: i64,
}

/// Request for `POST /pet`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateRequest {
    pub category: Nullable<Category>,
    pub id: Nullable<i64>,
    pub name: String,
    pub photo_urls: Vec<String>,
    /// pet status in the store
    pub status: Nullable<PetStatus>,
    pub tags: Nullable<Vec<Tag>>,
}

/// Request for `POST /pet/{petId}/uploadImage`.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadImageRequest {
    /// Raw image bytes, sent as `application/octet-stream`.
    pub data: Bytes,
    /// ID of pet to update
    pub pet_id: i64,
    /// Additional Metadata
    pub additional_metadata: Nullable<String>,
}

/// Request for `PUT /pet`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateRequest {
    pub category: Nullable<Category>,
    pub id: Nullable<i64>,
    pub name: String,
    pub photo_urls: Vec<String>,
    /// pet status in the store
    pub status: Nullable<PetStatus>,
    pub tags: Nullable<Vec<Tag>>,
}

/// Client for the `/pet` endpoints.
#[derive(Debug, Clone)]
pub struct PetClient {
    core: Arc<CoreClient>,
}

impl PetClient {
    pub(crate) fn new(core: Arc<CoreClient>) -> Self {
        Self { core }
    }

    /// Deletes a pet.
    ///
    /// `DELETE /pet/{petId}`
    pub async fn delete(&self, request: DeleteRequest) -> Result<(), ApiError> {
        let url = self
            .core
            .build_url(&format!("/pet/{}", fmt_string_param(&request.pet_id)))?;

        let builder = self.core.request(RestMethod::Delete, url.clone());
        self.core
            .execute(builder, RestMethod::Delete, &url, &["api_key"], &[])
            .await?;
        Ok(())
    }

    /// Finds pets by status.
    ///
    /// `GET /pet/findByStatus`
    pub async fn find_by_status(
        &self,
        request: FindByStatusRequest,
    ) -> Result<Vec<Pet>, ApiError> {
        let mut url = self.core.build_url("/pet/findByStatus")?;

        let mut params = QueryParams::new();
        add_query_param(&mut params, "status", &request.status, QueryStyle::Form, true)?;
        params.apply_to_url(&mut url);

        let builder = self.core.request(RestMethod::Get, url.clone());
        let response = self
            .core
            .execute(builder, RestMethod::Get, &url, &["api_key"], &[])
            .await?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Finds a pet by ID.
    ///
    /// `GET /pet/{petId}`
    pub async fn get(&self, request: GetRequest) -> Result<Pet, ApiError> {
        let url = self
            .core
            .build_url(&format!("/pet/{}", fmt_string_param(&request.pet_id)))?;

        let builder = self.core.request(RestMethod::Get, url.clone());
        let response = self
            .core
            .execute(builder, RestMethod::Get, &url, &["api_key"], &[])
            .await?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Adds a new pet to the store.
    ///
    /// `POST /pet`
    pub async fn create(&self, request: CreateRequest) -> Result<Pet, ApiError> {
        let url = self.core.build_url("/pet")?;

        let body = Pet {
            category: request.category,
            id: request.id,
            name: request.name,
            photo_urls: request.photo_urls,
            status: request.status,
            tags: request.tags,
        };

        let builder = self.core.request(RestMethod::Post, url.clone()).json(&body);
        let response = self
            .core
            .execute(builder, RestMethod::Post, &url, &["api_key"], &[])
            .await?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Uploads an image of the pet.
    ///
    /// `POST /pet/{petId}/uploadImage`
    pub async fn upload_image(
        &self,
        request: UploadImageRequest,
    ) -> Result<UploadResult, ApiError> {
        let mut url = self.core.build_url(&format!(
            "/pet/{}/uploadImage",
            fmt_string_param(&request.pet_id)
        ))?;

        let mut params = QueryParams::new();
        add_query_param(
            &mut params,
            "additionalMetadata",
            &request.additional_metadata,
            QueryStyle::Form,
            true,
        )?;
        params.apply_to_url(&mut url);

        let builder = self
            .core
            .request(RestMethod::Post, url.clone())
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(request.data);
        let response = self
            .core
            .execute(builder, RestMethod::Post, &url, &["api_key"], &[])
            .await?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Updates an existing pet by id.
    ///
    /// `PUT /pet`
    pub async fn update(&self, request: UpdateRequest) -> Result<Pet, ApiError> {
        let url = self.core.build_url("/pet")?;

        let body = Pet {
            category: request.category,
            id: request.id,
            name: request.name,
            photo_urls: request.photo_urls,
            status: request.status,
            tags: request.tags,
        };

        let builder = self.core.request(RestMethod::Put, url.clone()).json(&body);
        let response = self
            .core
            .execute(builder, RestMethod::Put, &url, &["api_key"], &[])
            .await?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
