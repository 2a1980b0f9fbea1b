//! DNS-01 Challenge Solver Core Library
//!
//! Implements the present/cleanup workflow for ACME DNS-01 challenges:
//! decoding per-issuer solver config, resolving the zone that owns the
//! challenge FQDN, loading credentials from referenced secrets, and driving
//! the DNS provider client.
//!
//! The host (a webhook binary, a CLI, a test harness) supplies the
//! [`ZoneResolver`] and [`SecretStore`] collaborators; everything
//! provider-specific lives in the `dns01-solver-provider` crate.

pub mod cache;
pub mod config;
pub mod error;
pub mod solver;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use cache::ClientCache;
pub use config::{SecretKeySelector, SolverConfig, load_config};
pub use error::{ProviderError, SolverError, SolverResult};
pub use solver::{DEFAULT_RECURSIVE_NAMESERVERS, Solver};
pub use traits::{SecretStore, ZoneResolver};
pub use types::ChallengeRequest;
