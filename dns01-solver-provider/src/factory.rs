//! Provider factory.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::DnsProvider;
use crate::types::ProviderCredentials;

#[cfg(feature = "huaweicloud")]
use crate::providers::HuaweicloudProvider;

/// Creates a [`DnsProvider`] instance from the given credentials.
///
/// The concrete provider type is determined by the [`ProviderCredentials`]
/// variant. The returned provider is wrapped in `Arc<dyn DnsProvider>` so one
/// instance can serve concurrent challenges.
///
/// # Examples
///
/// ```rust,no_run
/// use dns01_solver_provider::{ProviderCredentials, create_provider};
///
/// let provider = create_provider(ProviderCredentials::Huaweicloud {
///     access_key_id: "your-access-key-id".to_string(),
///     secret_access_key: "your-secret-access-key".to_string(),
///     region: "cn-north-1".to_string(),
/// }).unwrap();
/// ```
pub fn create_provider(credentials: ProviderCredentials) -> Result<Arc<dyn DnsProvider>> {
    match credentials {
        #[cfg(feature = "huaweicloud")]
        ProviderCredentials::Huaweicloud {
            access_key_id,
            secret_access_key,
            region,
        } => Ok(Arc::new(HuaweicloudProvider::new(
            access_key_id,
            secret_access_key,
            region,
        ))),
    }
}
