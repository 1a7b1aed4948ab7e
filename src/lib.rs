//! Typed client SDK for the Swagger Petstore REST API.
//!
//! The SDK covers three layers:
//!
//! - a **generated surface** — per-resource clients
//!   ([`resources::pet::PetClient`], [`resources::store::order::OrderClient`])
//!   with typed request and response structs;
//! - an **encoding core** — the tri-state [`Nullable`] optional and the
//!   OpenAPI style/explode query and form encoder in [`params`];
//! - **transport glue** — [`client::CoreClient`] for URL assembly, auth
//!   injection, request modifiers, and error classification over `reqwest`.
//!
//! ## Examples
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), petstore::ApiError> {
//! use petstore::resources::pet::{CreateRequest, GetRequest};
//! use petstore::{Client, Nullable};
//!
//! let client = Client::builder().with_api_key("API_KEY").build()?;
//!
//! let pet = client
//!     .pet()
//!     .create(CreateRequest {
//!         id: Nullable::Present(10),
//!         name: "doggie".to_string(),
//!         photo_urls: vec!["https://example.com/doggie.png".to_string()],
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let fetched = client.pet().get(GetRequest { pet_id: 10 }).await?;
//! assert_eq!(fetched.name, pet.name);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`nullable`] - Absent / null / present optional values
//! - [`params`] - Query-string and form-body encoding engine
//! - [`auth`] - Pluggable authentication strategies
//! - [`client`] - Client builder and transport glue
//! - [`resources`] - Per-resource endpoint clients
//! - [`types`] - Petstore schema types
//! - [`error`] - Layered error hierarchy

pub mod auth;
pub mod client;
pub mod environment;
pub mod error;
pub mod method;
pub mod nullable;
pub mod params;
pub mod resources;
pub mod types;

pub use client::{Client, ClientBuilder, CoreClient, RequestModifier, SDK_LANGUAGE_HEADER};
pub use environment::Environment;
pub use error::{ApiError, AuthError, EncodeError};
pub use method::RestMethod;
pub use nullable::{Nullable, NullableError};
pub use params::{add_query_param, fmt_string_param, form_urlencoded_body, QueryParams, QueryStyle};
