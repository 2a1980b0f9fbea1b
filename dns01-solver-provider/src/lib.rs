//! # dns01-solver-provider
//!
//! DNS provider clients for publishing and removing ACME DNS-01 challenge
//! records.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [Huawei Cloud DNS](https://www.huaweicloud.com/product/dns.html) | `huaweicloud` | AK/SK Signing |
//!
//! ## Feature Flags
//!
//! ### Provider Selection
//!
//! - **`all-providers`** *(default)* — Enable all providers listed above.
//! - **`huaweicloud`** — Enable only the Huawei Cloud DNS provider.
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns01_solver_provider::{DnsProvider, RecordType, ProviderCredentials, create_provider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(ProviderCredentials::Huaweicloud {
//!         access_key_id: "your-access-key-id".to_string(),
//!         secret_access_key: "your-secret-access-key".to_string(),
//!         region: "cn-north-1".to_string(),
//!     })?;
//!
//!     provider
//!         .add_record(
//!             "example.com",
//!             "_acme-challenge.example.com.",
//!             RecordType::Txt,
//!             "challenge-token",
//!         )
//!         .await?;
//!
//!     provider
//!         .delete_record("example.com", "_acme-challenge.example.com.", RecordType::Txt)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! The error enum provides structured variants for the failure modes challenge
//! orchestration cares about:
//!
//! - [`ProviderError::ZoneNotFound`] — no public zone matches the domain
//! - [`ProviderError::RecordExists`] — the challenge record is already published
//! - [`ProviderError::RecordNotFound`] — nothing to clean up
//! - [`ProviderError::AmbiguousRecord`] — deletion target is not unique; nothing is deleted
//! - [`ProviderError::InvalidCredentials`] — authentication failed
//!
//! Nothing is retried internally. Transient variants (`NetworkError`,
//! `Timeout`, `RateLimited`) are reported once and left to the caller's own
//! re-invocation schedule.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::DnsProvider;

// Re-export types
pub use types::{ProviderCredentials, RecordType};

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "huaweicloud")]
pub use providers::HuaweicloudProvider;
