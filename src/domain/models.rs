use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload posted by the storefront application form. Everything is optional
/// at the deserialization layer; presence of `customer_id` and `email` is
/// enforced by the service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationRequest {
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub why_join: Option<String>,
    #[serde(default)]
    pub biggest_concern: Option<String>,
    #[serde(default)]
    pub commitment: Option<String>,
    #[serde(default)]
    pub order_number: Option<String>,
}

/// Shopify customer ids arrive as a JSON number from some storefront themes
/// and as a string from others.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CustomerId {
    Number(u64),
    Text(String),
}

impl CustomerId {
    /// Matches the storefront's falsy check: 0 and blank strings both read
    /// as missing.
    pub fn is_empty(&self) -> bool {
        match self {
            CustomerId::Number(id) => *id == 0,
            CustomerId::Text(id) => id.trim().is_empty(),
        }
    }

    /// Global id addressing the customer in Admin GraphQL operations.
    pub fn gid(&self) -> String {
        format!("gid://shopify/Customer/{}", self)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerId::Number(id) => write!(f, "{}", id),
            CustomerId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl ApplicationRequest {
    /// Mirrors the storefront contract: absent, null, or blank values all
    /// count as missing.
    pub fn has_required_fields(&self) -> bool {
        let customer_ok = self
            .customer_id
            .as_ref()
            .is_some_and(|id| !id.is_empty());
        let email_ok = self
            .email
            .as_deref()
            .is_some_and(|email| !email.trim().is_empty());
        customer_ok && email_ok
    }

    pub fn order_name(&self) -> &str {
        match self.order_number.as_deref() {
            Some(order) if !order.trim().is_empty() => order,
            _ => "Unknown",
        }
    }
}

/// Namespaced key/value/type triple written onto the customer record.
#[derive(Debug, Clone, Serialize)]
pub struct MetafieldInput {
    pub namespace: &'static str,
    pub key: &'static str,
    #[serde(rename = "type")]
    pub value_type: &'static str,
    pub value: String,
}

impl MetafieldInput {
    pub fn single_line(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            namespace: "custom",
            key,
            value_type: "single_line_text_field",
            value: value.into(),
        }
    }
}
