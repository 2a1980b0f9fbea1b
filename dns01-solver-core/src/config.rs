//! Per-issuer solver configuration

use serde::{Deserialize, Serialize};

use crate::error::{SolverError, SolverResult};

/// Reference to a key within a named secret, resolved relative to the
/// challenge's resource namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKeySelector {
    /// Secret name
    #[serde(default)]
    pub name: String,
    /// Key within the secret's data map
    #[serde(default)]
    pub key: String,
}

/// Configuration carried in each challenge request's opaque `config` payload.
///
/// All fields are optional on the wire; absent fields decode to their
/// defaults so partially configured issuers still produce a usable config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverConfig {
    /// Provider region (empty means the provider's default endpoint)
    #[serde(default)]
    pub region: String,
    /// Where to find the access key id
    #[serde(default)]
    pub access_key_secret_ref: SecretKeySelector,
    /// Where to find the secret access key
    #[serde(default)]
    pub secret_key_secret_ref: SecretKeySelector,
}

/// Decode the opaque config payload of a challenge request.
///
/// An absent payload is valid and yields the default config; a present but
/// malformed payload fails with [`SolverError::ConfigDecode`].
pub fn load_config(config: Option<&serde_json::Value>) -> SolverResult<SolverConfig> {
    match config {
        None => Ok(SolverConfig::default()),
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| SolverError::ConfigDecode(e.to_string())),
    }
}
