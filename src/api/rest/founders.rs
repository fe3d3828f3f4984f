use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::Extension,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::error;

use crate::{
    domain::models::ApplicationRequest,
    infrastructure::state::AppState,
    services::{applications::ApplicationService, errors::ServiceError},
};

pub fn router() -> Router {
    Router::new().route("/founders-apply", post(apply).options(preflight))
}

/// The body is parsed by hand so a malformed payload maps to the generic 500
/// the storefront already handles, not an extractor rejection.
async fn apply(
    Extension(state): Extension<Arc<AppState>>,
    body: Bytes,
) -> (StatusCode, Json<serde_json::Value>) {
    let request: ApplicationRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            error!(error = %err, "rejecting unreadable application payload");
            return to_response(ServiceError::Internal(err.to_string()));
        }
    };

    let service = ApplicationService::new(state);
    match service.apply(request).await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "ok": true }))),
        Err(err) => {
            if matches!(err, ServiceError::Internal(_)) {
                error!(error = %err, "founders application failed");
            }
            to_response(err)
        }
    }
}

async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

fn to_response(err: ServiceError) -> (StatusCode, Json<serde_json::Value>) {
    (
        err.status_code(),
        Json(serde_json::json!({ "ok": false, "message": err.public_message() })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_maps_to_fixed_400_payload() {
        let (status, Json(body)) = to_response(ServiceError::Validation(
            "Missing customer_id or email".to_string(),
        ));

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({ "ok": false, "message": "Missing customer_id or email" })
        );
    }

    #[test]
    fn internal_error_hides_detail() {
        let (status, Json(body)) =
            to_response(ServiceError::Internal("connection refused".to_string()));

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            serde_json::json!({ "ok": false, "message": "Internal server error" })
        );
    }
}
