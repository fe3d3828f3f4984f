use axum::{routing::get, Router};

use crate::api::rest::founders::router as founders_router;

pub mod founders;
pub mod health;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health::healthcheck))
        .merge(founders_router())
}
