//! Per-resource endpoint clients.
//!
//! Each resource module holds a thin client over [`crate::client::CoreClient`]
//! plus the request structs its operations accept, mirroring the API's path
//! hierarchy (`/pet`, `/store/order`).

pub mod pet;
pub mod store;
