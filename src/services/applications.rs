use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::{
    domain::models::{ApplicationRequest, MetafieldInput},
    infrastructure::state::AppState,
};

use super::errors::ServiceError;

pub const FOUNDERS_TAG: &str = "Founders Circle Applied";

pub struct ApplicationService {
    pub state: Arc<AppState>,
}

impl ApplicationService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Tags the customer and stamps the application metafields. Tag-level
    /// user errors are logged and swallowed; metafield user errors fail the
    /// request with their messages joined by ", ".
    pub async fn apply(&self, request: ApplicationRequest) -> Result<(), ServiceError> {
        if !request.has_required_fields() {
            return Err(ServiceError::Validation(
                "Missing customer_id or email".to_string(),
            ));
        }

        let customer_gid = request
            .customer_id
            .as_ref()
            .map(|id| id.gid())
            .unwrap_or_default();

        let tag_errors = self
            .state
            .shopify
            .add_customer_tags(&customer_gid, &[FOUNDERS_TAG])
            .await
            .map_err(|err| ServiceError::Internal(err.to_string()))?;
        if !tag_errors.is_empty() {
            let messages: Vec<&str> = tag_errors.iter().map(|e| e.message.as_str()).collect();
            warn!(customer = %customer_gid, ?messages, "tag mutation reported user errors");
        }

        let metafields = application_metafields(&request);
        let metafield_errors = self
            .state
            .shopify
            .update_customer_metafields(&customer_gid, &metafields)
            .await
            .map_err(|err| ServiceError::Internal(err.to_string()))?;
        if !metafield_errors.is_empty() {
            let joined = metafield_errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            warn!(customer = %customer_gid, errors = %joined, "metafield mutation reported user errors");
            return Err(ServiceError::UpstreamRejected(joined));
        }

        info!(customer = %customer_gid, "founders application recorded");
        Ok(())
    }
}

fn application_metafields(request: &ApplicationRequest) -> Vec<MetafieldInput> {
    let today = Utc::now().format("%Y-%m-%d").to_string();
    vec![
        MetafieldInput::single_line("application_data", "yes"),
        MetafieldInput::single_line("application_submitted_dates", today),
        MetafieldInput::single_line("priority_founder_member", "true"),
        MetafieldInput::single_line("founder_status", "pending"),
        MetafieldInput::single_line("founders_applied", "true"),
        MetafieldInput::single_line("last_order_name", request.order_name()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metafields_cover_the_expected_keys() {
        let request: ApplicationRequest = serde_json::from_str(
            r##"{"customer_id": 123, "email": "a@b.com", "order_number": "#1001"}"##,
        )
        .unwrap();

        let metafields = application_metafields(&request);
        let keys: Vec<&str> = metafields.iter().map(|m| m.key).collect();

        assert_eq!(
            keys,
            vec![
                "application_data",
                "application_submitted_dates",
                "priority_founder_member",
                "founder_status",
                "founders_applied",
                "last_order_name",
            ]
        );
        assert!(metafields.iter().all(|m| m.namespace == "custom"));
        assert!(metafields
            .iter()
            .all(|m| m.value_type == "single_line_text_field"));
        assert_eq!(metafields[5].value, "#1001");

        let today = Utc::now().format("%Y-%m-%d").to_string();
        assert_eq!(metafields[1].value, today);
    }

    #[test]
    fn missing_order_number_writes_unknown() {
        let request: ApplicationRequest =
            serde_json::from_str(r#"{"customer_id": 123, "email": "a@b.com"}"#).unwrap();

        let metafields = application_metafields(&request);

        assert_eq!(metafields[5].key, "last_order_name");
        assert_eq!(metafields[5].value, "Unknown");
    }
}
