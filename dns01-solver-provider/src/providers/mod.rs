//! DNS provider implementations.

/// Shared utilities used by provider implementations.
pub mod common;

#[cfg(feature = "huaweicloud")]
mod huaweicloud;

#[cfg(feature = "huaweicloud")]
pub use huaweicloud::HuaweicloudProvider;
