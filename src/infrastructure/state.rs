use std::sync::Arc;

use crate::infrastructure::{config::Config, shopify::ShopifyClient};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub shopify: ShopifyClient,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        let shopify = ShopifyClient::new(&config.shopify);
        Self { config, shopify }
    }
}
