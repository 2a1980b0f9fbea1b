//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use dns01_solver_provider::ProviderError;

/// Solver layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum SolverError {
    /// Challenge config JSON could not be decoded
    #[error("Failed to decode solver config: {0}")]
    ConfigDecode(String),

    /// No owning zone found for the challenge FQDN
    #[error("Failed to resolve zone for '{fqdn}': {detail}")]
    ZoneResolution { fqdn: String, detail: String },

    /// Referenced secret or key could not be resolved
    #[error("Failed to resolve secret '{namespace}/{name}': {detail}")]
    Credential {
        namespace: String,
        name: String,
        detail: String,
    },

    /// Provider error (converted from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl SolverError {
    /// Whether it is expected behavior (user misconfiguration, resource does not exist, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ConfigDecode(_) | Self::ZoneResolution { .. } | Self::Credential { .. } => true,
            Self::Provider(e) => e.is_expected(),
        }
    }
}

/// Solver layer Result type alias
pub type SolverResult<T> = std::result::Result<T, SolverError>;
