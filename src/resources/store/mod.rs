//! The `/store` resource namespace.

use std::sync::Arc;

use crate::client::CoreClient;

pub mod order;

use order::OrderClient;

/// Client for the `/store` endpoints.
#[derive(Debug, Clone)]
pub struct StoreClient {
    core: Arc<CoreClient>,
}

impl StoreClient {
    pub(crate) fn new(core: Arc<CoreClient>) -> Self {
        Self { core }
    }

    /// The `/store/order` resource surface.
    pub fn order(&self) -> OrderClient {
        OrderClient::new(Arc::clone(&self.core))
    }
}
