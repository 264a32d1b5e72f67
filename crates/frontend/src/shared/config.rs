//! Runtime configuration of the admin client.
//!
//! Search order:
//! 1. `/app-config.toml` served next to the bundle
//! 2. embedded `DEFAULT_CONFIG`
//!
//! API base URL per domain: `[api.domains]` → `[api] base_url` → `API_URL` at build time →
//! origin of the page.

use std::collections::HashMap;

use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

use crate::shared::api_utils::{api_base, join_url};

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
# base_url = "http://localhost:5000"

[api.domains]
# products = "http://localhost:5002"

[search]
debounce_ms = 500

[notifications]
toast_timeout_ms = 4000

[pincode]
base_url = "https://api.postalpincode.in"
"#;

const OVERRIDE_PATH: &str = "/app-config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to fetch {OVERRIDE_PATH}: {0}")]
    Fetch(String),
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub pincode: PincodeConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    #[serde(default)]
    pub domains: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    pub debounce_ms: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 500 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationsConfig {
    pub toast_timeout_ms: u32,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            toast_timeout_ms: 4000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PincodeConfig {
    pub base_url: String,
}

impl Default for PincodeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.postalpincode.in".to_string(),
        }
    }
}

/// Backend areas that may live behind different hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiDomain {
    Customers,
    Suppliers,
    Employees,
    Products,
    Inventory,
    Purchases,
    ServiceTickets,
    Advertisements,
    Billing,
}

impl ApiDomain {
    /// Key under `[api.domains]`.
    pub fn key(&self) -> &'static str {
        match self {
            ApiDomain::Customers => "customers",
            ApiDomain::Suppliers => "suppliers",
            ApiDomain::Employees => "employees",
            ApiDomain::Products => "products",
            ApiDomain::Inventory => "inventory",
            ApiDomain::Purchases => "purchases",
            ApiDomain::ServiceTickets => "service_tickets",
            ApiDomain::Advertisements => "advertisement",
            ApiDomain::Billing => "billing",
        }
    }
}

impl AppConfig {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn embedded() -> Self {
        match Self::parse(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("embedded configuration is broken: {}", e);
                Self::default()
            }
        }
    }

    /// Configured base URL for a domain, without the page-origin fallback.
    pub fn configured_base(&self, domain: ApiDomain) -> Option<String> {
        self.api
            .domains
            .get(domain.key())
            .or(self.api.base_url.as_ref())
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .or_else(|| option_env!("API_URL").map(|url| url.trim_end_matches('/').to_string()))
    }

    pub fn base_url(&self, domain: ApiDomain) -> String {
        self.configured_base(domain).unwrap_or_else(api_base)
    }

    pub fn endpoint(&self, domain: ApiDomain, path: &str) -> String {
        join_url(&self.base_url(domain), path)
    }
}

/// Loads `/app-config.toml`, falling back to the embedded defaults.
pub async fn load_config() -> AppConfig {
    match fetch_override().await {
        Ok(Some(config)) => {
            log::info!("Loaded configuration from {}", OVERRIDE_PATH);
            config
        }
        Ok(None) => {
            log::info!("Using default embedded configuration");
            AppConfig::embedded()
        }
        Err(e) => {
            log::warn!("{}; using default embedded configuration", e);
            AppConfig::embedded()
        }
    }
}

async fn fetch_override() -> Result<Option<AppConfig>, ConfigError> {
    let response = Request::get(OVERRIDE_PATH)
        .send()
        .await
        .map_err(|e| ConfigError::Fetch(e.to_string()))?;
    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(ConfigError::Fetch(format!("HTTP {}", response.status())));
    }
    let text = response
        .text()
        .await
        .map_err(|e| ConfigError::Fetch(e.to_string()))?;
    AppConfig::parse(&text).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::parse(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.search.debounce_ms, 500);
        assert_eq!(config.notifications.toast_timeout_ms, 4000);
        assert_eq!(config.pincode.base_url, "https://api.postalpincode.in");
        assert!(config.api.domains.is_empty());
    }

    #[test]
    fn test_domain_override_wins() {
        let config = AppConfig::parse(
            r#"
            [api]
            base_url = "http://erp.local:5000/"

            [api.domains]
            products = "http://catalog.local:5002"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.base_url(ApiDomain::Products),
            "http://catalog.local:5002"
        );
        assert_eq!(
            config.base_url(ApiDomain::Customers),
            "http://erp.local:5000"
        );
        assert_eq!(
            config.endpoint(ApiDomain::Customers, "/api/customers"),
            "http://erp.local:5000/api/customers"
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::parse("[search]\ndebounce_ms = 250\n").unwrap();
        assert_eq!(config.search.debounce_ms, 250);
        assert_eq!(config.notifications.toast_timeout_ms, 4000);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            AppConfig::parse("[search\n"),
            Err(ConfigError::Parse(_))
        ));
    }
}
