//! Zone resolution abstraction

use async_trait::async_trait;

use crate::error::SolverResult;

/// Resolves the zone that owns a fully-qualified domain name.
///
/// The host supplies the implementation, typically an SOA-record walk up the
/// name hierarchy via the given recursive nameservers. Keeping this behind a
/// trait keeps the solver free of DNS lookup machinery and lets tests answer
/// with canned zones.
#[async_trait]
pub trait ZoneResolver: Send + Sync {
    /// Find the FQDN of the zone owning `fqdn`.
    ///
    /// Both `fqdn` and the returned zone name carry a trailing dot
    /// (e.g. `_acme-challenge.example.com.` resolves to `example.com.`).
    ///
    /// Implementations fail with [`crate::SolverError::ZoneResolution`] when
    /// no owning zone can be determined.
    async fn find_zone_by_fqdn(&self, fqdn: &str, nameservers: &[String]) -> SolverResult<String>;
}
