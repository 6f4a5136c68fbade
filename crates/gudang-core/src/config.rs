//! Route and site configuration.

use http::Method;
use serde::{Deserialize, Serialize};

use crate::context::{decode_component, RouteParams};

/// Configuration for a single route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Route pattern (e.g., "/produk/:productId").
    pub pattern: String,
    /// Handler name.
    pub handler: String,
    /// HTTP methods this route accepts.
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,
}

fn default_methods() -> Vec<String> {
    vec!["GET".to_string()]
}

impl RouteConfig {
    /// Create a new route configuration.
    pub fn new(pattern: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            handler: handler.into(),
            methods: default_methods(),
        }
    }

    /// Set allowed HTTP methods.
    pub fn with_methods(mut self, methods: Vec<&str>) -> Self {
        self.methods = methods.into_iter().map(String::from).collect();
        self
    }

    /// Whether the route accepts this method. HEAD rides along with GET.
    pub fn accepts(&self, method: &Method) -> bool {
        self.methods.iter().any(|m| {
            m.eq_ignore_ascii_case(method.as_str())
                || (*method == Method::HEAD && m.eq_ignore_ascii_case("GET"))
        })
    }

    /// Match a normalized path, extracting `:name` segments percent-decoded.
    pub fn match_path(&self, path: &str) -> Option<RouteParams> {
        let pattern: Vec<&str> = self.pattern.split('/').filter(|s| !s.is_empty()).collect();
        let actual: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        if pattern.len() != actual.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (expected, segment) in pattern.iter().zip(actual.iter()) {
            match expected.strip_prefix(':') {
                Some(name) => {
                    params.insert(name.to_string(), decode_component(segment));
                }
                None if expected == segment => {}
                None => return None,
            }
        }
        Some(params)
    }
}

/// Site-wide settings for the storefront.
///
/// Every field has a production default, so an empty TOML document is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub firestore: FirestoreConfig,
    #[serde(default)]
    pub collections: CollectionConfig,
    #[serde(default)]
    pub home: HomeConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Store identity and contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_name")]
    pub name: String,
    /// WhatsApp number in international format without "+".
    #[serde(default = "default_whatsapp")]
    pub whatsapp_number: String,
    /// ISO currency code for price display.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Base path for bundled images.
    #[serde(default = "default_assets_base")]
    pub assets_base: String,
}

fn default_store_name() -> String {
    "Gudang Pakaian Dalam".to_string()
}

fn default_whatsapp() -> String {
    "6281210132385".to_string()
}

fn default_currency() -> String {
    "IDR".to_string()
}

fn default_assets_base() -> String {
    "/assets".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            whatsapp_number: default_whatsapp(),
            currency: default_currency(),
            assets_base: default_assets_base(),
        }
    }
}

/// Document database location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirestoreConfig {
    #[serde(default = "default_project_id")]
    pub project_id: String,
    #[serde(default = "default_database")]
    pub database: String,
    /// Web API key appended as `?key=`; public rules need none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_project_id() -> String {
    "gudang-pakaian-dalam".to_string()
}

fn default_database() -> String {
    "(default)".to_string()
}

fn default_endpoint() -> String {
    "https://firestore.googleapis.com/v1".to_string()
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            project_id: default_project_id(),
            database: default_database(),
            api_key: None,
            endpoint: default_endpoint(),
        }
    }
}

impl FirestoreConfig {
    /// `<endpoint>/projects/<project>/databases/<db>/documents`.
    pub fn documents_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents",
            self.endpoint.trim_end_matches('/'),
            self.project_id,
            self.database
        )
    }
}

/// Collection names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionConfig {
    #[serde(default = "default_banners")]
    pub banners: String,
    #[serde(default = "default_brands")]
    pub brands: String,
    #[serde(default = "default_products")]
    pub products: String,
}

fn default_banners() -> String {
    "banners".to_string()
}

fn default_brands() -> String {
    "brands".to_string()
}

fn default_products() -> String {
    "products".to_string()
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            banners: default_banners(),
            brands: default_brands(),
            products: default_products(),
        }
    }
}

/// Home page settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeConfig {
    /// Number of products in the catalog preview.
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,
}

fn default_preview_limit() -> usize {
    8
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            preview_limit: default_preview_limit(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// "json" or "human".
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Minimum level: trace, debug, info, warn or error.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
            level: default_log_level(),
        }
    }
}

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Keys accepted by [`SiteConfig::apply_overrides`].
pub const OVERRIDE_KEYS: &[&str] = &[
    "store_name",
    "whatsapp_number",
    "currency",
    "assets_base",
    "firestore_project_id",
    "firestore_database",
    "firestore_api_key",
    "firestore_endpoint",
    "preview_limit",
    "log_format",
    "log_level",
];

impl SiteConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Overlay flat key/value settings such as Spin application variables.
    ///
    /// `lookup` returns `None` for unset keys; blank values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        for key in OVERRIDE_KEYS {
            let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) else {
                continue;
            };
            match *key {
                "store_name" => self.store.name = value,
                "whatsapp_number" => self.store.whatsapp_number = value,
                "currency" => self.store.currency = value,
                "assets_base" => self.store.assets_base = value,
                "firestore_project_id" => self.firestore.project_id = value,
                "firestore_database" => self.firestore.database = value,
                "firestore_api_key" => self.firestore.api_key = Some(value),
                "firestore_endpoint" => self.firestore.endpoint = value,
                "preview_limit" => {
                    self.home.preview_limit =
                        value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                            key: key.to_string(),
                            value: value.clone(),
                        })?
                }
                "log_format" => self.log.format = value,
                "log_level" => self.log.level = value,
                _ => {}
            }
        }
        Ok(())
    }
}
