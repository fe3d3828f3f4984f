use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub shopify: ShopifyConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShopifyConfig {
    #[serde(default)]
    pub store_domain: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Full GraphQL endpoint override; when set, `store_domain` and
    /// `api_version` are ignored for URL construction.
    #[serde(default)]
    pub admin_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ShopifyConfig {
    fn default() -> Self {
        Self {
            store_domain: String::new(),
            access_token: String::new(),
            api_version: default_api_version(),
            admin_url: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("FOUNDERS").separator("__"));
        let cfg = builder.build()?;
        let mut config: Config = cfg.try_deserialize()?;

        if config.shopify.store_domain.trim().is_empty() {
            config.shopify.store_domain = match env::var("SHOPIFY_STORE_DOMAIN") {
                Ok(domain) if !domain.trim().is_empty() => domain,
                _ => {
                    return Err(config::ConfigError::Message(
                        "Missing store domain. Set FOUNDERS__SHOPIFY__STORE_DOMAIN or SHOPIFY_STORE_DOMAIN."
                            .into(),
                    ));
                }
            };
        }

        if config.shopify.access_token.trim().is_empty() {
            config.shopify.access_token = match env::var("SHOPIFY_ADMIN_API_TOKEN") {
                Ok(token) if !token.trim().is_empty() => token,
                _ => {
                    return Err(config::ConfigError::Message(
                        "Missing admin token. Set FOUNDERS__SHOPIFY__ACCESS_TOKEN or SHOPIFY_ADMIN_API_TOKEN."
                            .into(),
                    ));
                }
            };
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}

impl ShopifyConfig {
    pub fn admin_url(&self) -> String {
        match &self.admin_url {
            Some(url) => url.clone(),
            None => format!(
                "https://{}/admin/api/{}/graphql.json",
                self.store_domain, self.api_version
            ),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_api_version() -> String {
    "2024-10".to_string()
}
