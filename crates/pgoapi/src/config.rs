//! Client configuration.

use pgoapi_protocol::DeviceInfo;
use pgoapi_transport::Endpoint;
use serde::{Deserialize, Serialize};

/// Settings hash sent with `DownloadSettings` until the server hands out
/// a newer one.
pub const DEFAULT_SETTINGS_HASH: &str = "05daf51635c82611d1aac95c0b051d3ec088a930";

/// Configuration for an [`ApiClient`](crate::ApiClient).
///
/// Every field has a default, so a config file only needs to list what it
/// changes:
///
/// ```rust
/// use pgoapi::ApiConfig;
///
/// let config: ApiConfig =
///     serde_json::from_str(r#"{ "settings_hash": "abc" }"#).unwrap();
/// assert_eq!(config.settings_hash, "abc");
/// assert_eq!(config.endpoint, ApiConfig::default().endpoint);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Where batches go until [`set_endpoint`](crate::ApiClient::set_endpoint)
    /// replaces it.
    pub endpoint: Endpoint,

    /// Hash carried by `DownloadSettings` requests.
    pub settings_hash: String,

    /// Device description for remote-config and asset-digest requests.
    pub device: DeviceInfo,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::default(),
            settings_hash: DEFAULT_SETTINGS_HASH.to_string(),
            device: DeviceInfo::default(),
        }
    }
}
