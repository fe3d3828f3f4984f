use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::domain::models::MetafieldInput;
use crate::infrastructure::config::ShopifyConfig;

const TAGS_ADD_MUTATION: &str = r#"
mutation AddCustomerTags($id: ID!, $tags: [String!]!) {
  tagsAdd(id: $id, tags: $tags) {
    userErrors { field message }
  }
}
"#;

const UPDATE_METAFIELDS_MUTATION: &str = r#"
mutation UpdateCustomerMetafields($id: ID!, $metafields: [MetafieldInput!]) {
  customerUpdate(input: { id: $id, metafields: $metafields }) {
    customer { id }
    userErrors { field message }
  }
}
"#;

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Debug, Deserialize)]
struct GraphQlEnvelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

/// Top-level GraphQL error, distinct from a mutation payload's `userErrors`.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Field-level validation error returned inside a mutation payload.
#[derive(Debug, Clone, Deserialize)]
pub struct UserError {
    #[serde(default)]
    pub field: Option<Vec<String>>,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ShopifyError {
    #[error("shopify request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("shopify response was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Minimal Admin GraphQL client: one endpoint, one auth header, no retries.
#[derive(Clone)]
pub struct ShopifyClient {
    http: reqwest::Client,
    endpoint: String,
    access_token: String,
}

impl ShopifyClient {
    pub fn new(config: &ShopifyConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.admin_url(),
            access_token: config.access_token.clone(),
        }
    }

    pub async fn add_customer_tags(
        &self,
        customer_gid: &str,
        tags: &[&str],
    ) -> Result<Vec<UserError>, ShopifyError> {
        let variables = serde_json::json!({ "id": customer_gid, "tags": tags });
        let data = self.execute(TAGS_ADD_MUTATION, variables).await?;
        Ok(extract_user_errors(&data, "tagsAdd"))
    }

    pub async fn update_customer_metafields(
        &self,
        customer_gid: &str,
        metafields: &[MetafieldInput],
    ) -> Result<Vec<UserError>, ShopifyError> {
        let variables = serde_json::json!({ "id": customer_gid, "metafields": metafields });
        let data = self.execute(UPDATE_METAFIELDS_MUTATION, variables).await?;
        Ok(extract_user_errors(&data, "customerUpdate"))
    }

    /// Posts one query and returns the `data` object. The HTTP status is not
    /// consulted; the Admin API reports failures inside the JSON body.
    async fn execute(&self, query: &str, variables: Value) -> Result<Value, ShopifyError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("X-Shopify-Access-Token", &self.access_token)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        let body = response.text().await?;
        let envelope: GraphQlEnvelope = serde_json::from_str(&body)?;

        if let Some(errors) = &envelope.errors {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            error!(?messages, "graphql top-level errors");
        }

        Ok(envelope.data.unwrap_or(Value::Null))
    }
}

/// Reads `data.<mutation>.userErrors`, treating anything missing as empty.
fn extract_user_errors(data: &Value, mutation: &str) -> Vec<UserError> {
    data.get(mutation)
        .and_then(|payload| payload.get("userErrors"))
        .cloned()
        .and_then(|errors| serde_json::from_value(errors).ok())
        .unwrap_or_default()
}
