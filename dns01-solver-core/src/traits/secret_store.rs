//! Credential secret storage abstraction

use async_trait::async_trait;

use crate::error::SolverResult;

/// Read access to namespaced credential secrets.
///
/// The host decides where secrets live (a Kubernetes API, a vault, a file);
/// the solver only ever reads single values referenced by the challenge
/// config's secret selectors.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the value stored under `key` in the secret `name` within
    /// `namespace`.
    ///
    /// Implementations fail with [`crate::SolverError::Credential`] when the
    /// secret or the key does not exist, carrying the namespace and secret
    /// name so operators can tell which reference is broken.
    async fn get_secret_value(
        &self,
        namespace: &str,
        name: &str,
        key: &str,
    ) -> SolverResult<Vec<u8>>;
}
