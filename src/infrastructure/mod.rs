pub mod config;
pub mod shopify;
pub mod state;
