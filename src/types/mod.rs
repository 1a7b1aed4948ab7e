//! Petstore schema types.
//!
//! Optional fields use [`Nullable<T>`] with the `default` /
//! `skip_serializing_if` pair so absent fields disappear from JSON output
//! and explicit nulls round-trip faithfully.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::nullable::Nullable;

/// A pet in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub category: Nullable<Category>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub id: Nullable<i64>,
    pub name: String,
    #[serde(rename = "photoUrls")]
    pub photo_urls: Vec<String>,
    /// pet status in the store
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub status: Nullable<PetStatus>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub tags: Nullable<Vec<Tag>>,
}

/// A category a pet belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub id: Nullable<i64>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
}

/// A free-form tag attached to a pet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub id: Nullable<i64>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
}

/// A purchase order for a pet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub complete: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub id: Nullable<i64>,
    #[serde(rename = "petId", default, skip_serializing_if = "Nullable::is_absent")]
    pub pet_id: Nullable<i64>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub quantity: Nullable<i64>,
    #[serde(rename = "shipDate", default, skip_serializing_if = "Nullable::is_absent")]
    pub ship_date: Nullable<String>,
    /// Order Status
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub status: Nullable<OrderStatus>,
}

/// The response body of the image upload endpoint (the Swagger `ApiResponse`
/// schema).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub code: Nullable<i64>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub message: Nullable<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Nullable::is_absent")]
    pub kind: Nullable<String>,
}

/// pet status in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PetStatus {
    Available,
    Pending,
    Sold,
}

/// Status values that need to be considered for filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FindByStatusStatus {
    Available,
    Pending,
    Sold,
}

/// Order Status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrderStatus {
    Approved,
    Delivered,
    Placed,
}
