//! Huawei Cloud DNS provider.

mod error;
mod http;
mod provider;
mod sign;
/// Huawei Cloud API-specific response types.
pub(crate) mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;

/// Global Huawei Cloud DNS API host, used when no region is configured.
pub(crate) const HUAWEICLOUD_DNS_HOST: &str = "dns.myhuaweicloud.com";

/// Huawei Cloud DNS provider implementation.
///
/// Authenticates via AK/SK request signing. The region selects the API
/// endpoint; an empty region targets the global endpoint.
///
/// # Construction
///
/// ```rust,no_run
/// use dns01_solver_provider::HuaweicloudProvider;
///
/// let provider = HuaweicloudProvider::new(
///     "your-access-key-id".to_string(),
///     "your-secret-access-key".to_string(),
///     "cn-north-1".to_string(),
/// );
/// ```
pub struct HuaweicloudProvider {
    pub(crate) client: Client,
    pub(crate) access_key_id: String,
    pub(crate) secret_access_key: String,
    /// Base URL without a trailing slash, e.g. `https://dns.cn-north-1.myhuaweicloud.com`.
    pub(crate) endpoint: String,
    /// Host portion of `endpoint`, signed into every request's `Host` header.
    pub(crate) host: String,
}

/// Builder for [`HuaweicloudProvider`] with a configurable API endpoint.
pub struct HuaweicloudProviderBuilder {
    access_key_id: String,
    secret_access_key: String,
    region: String,
    endpoint: Option<String>,
}

impl HuaweicloudProviderBuilder {
    fn new(access_key_id: String, secret_access_key: String, region: String) -> Self {
        Self {
            access_key_id,
            secret_access_key,
            region,
            endpoint: None,
        }
    }

    /// Override the API endpoint (e.g. to point at a local mock server).
    /// Takes a base URL without a trailing slash; the default is derived
    /// from the region.
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Build the [`HuaweicloudProvider`] instance.
    #[must_use]
    pub fn build(self) -> HuaweicloudProvider {
        let endpoint = self.endpoint.unwrap_or_else(|| {
            if self.region.is_empty() {
                format!("https://{HUAWEICLOUD_DNS_HOST}")
            } else {
                format!("https://dns.{}.myhuaweicloud.com", self.region)
            }
        });
        let host = endpoint
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
            .to_string();

        HuaweicloudProvider {
            client: create_http_client(),
            access_key_id: self.access_key_id,
            secret_access_key: self.secret_access_key,
            endpoint,
            host,
        }
    }
}

impl HuaweicloudProvider {
    /// Creates a new Huawei Cloud provider for the given region.
    #[must_use]
    pub fn new(access_key_id: String, secret_access_key: String, region: String) -> Self {
        Self::builder(access_key_id, secret_access_key, region).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(
        access_key_id: String,
        secret_access_key: String,
        region: String,
    ) -> HuaweicloudProviderBuilder {
        HuaweicloudProviderBuilder::new(access_key_id, secret_access_key, region)
    }
}
