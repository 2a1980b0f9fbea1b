//! DNS-01 challenge solving workflow

use std::sync::Arc;

use dns01_solver_provider::{DnsProvider, ProviderCredentials, RecordType, create_provider};

use crate::cache::ClientCache;
use crate::config::{SecretKeySelector, SolverConfig, load_config};
use crate::error::{SolverError, SolverResult};
use crate::traits::{SecretStore, ZoneResolver};
use crate::types::ChallengeRequest;

/// Nameservers used for zone resolution when the host does not supply any
pub const DEFAULT_RECURSIVE_NAMESERVERS: &[&str] = &["8.8.8.8:53", "8.8.4.4:53"];

/// Identifier hosts use to route challenges to this solver
const SOLVER_NAME: &str = "huaweicloud-dns-solver";

/// Coordinates DNS-01 challenge present/cleanup against Huawei Cloud DNS.
///
/// Zone resolution and secret access are delegated to host-supplied
/// collaborators; provider clients are built lazily from the per-challenge
/// config and cached per domain.
pub struct Solver {
    zone_resolver: Arc<dyn ZoneResolver>,
    secret_store: Arc<dyn SecretStore>,
    clients: ClientCache,
    nameservers: Vec<String>,
}

impl Solver {
    /// Create a solver with the default recursive nameservers
    #[must_use]
    pub fn new(zone_resolver: Arc<dyn ZoneResolver>, secret_store: Arc<dyn SecretStore>) -> Self {
        Self {
            zone_resolver,
            secret_store,
            clients: ClientCache::new(),
            nameservers: DEFAULT_RECURSIVE_NAMESERVERS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Override the nameservers handed to the zone resolver
    #[must_use]
    pub fn with_nameservers(mut self, nameservers: Vec<String>) -> Self {
        self.nameservers = nameservers;
        self
    }

    /// Solver identifier, unique within a webhook group
    #[must_use]
    pub fn name(&self) -> &'static str {
        SOLVER_NAME
    }

    /// Publish the challenge value as a TXT record under the owning zone.
    ///
    /// Re-invoked by the host on failure; a repeat call for an already
    /// published value surfaces the provider's `RecordExists`, which
    /// [`SolverError::is_expected`] classifies as benign.
    pub async fn present(&self, request: &ChallengeRequest) -> SolverResult<()> {
        let config = load_config(request.config.as_ref())?;
        log::debug!("Presenting challenge for {}", request.resolved_fqdn);

        let (domain, client) = self.dns_client(&config, request).await?;
        client
            .add_record(&domain, &request.resolved_fqdn, RecordType::Txt, &request.key)
            .await?;

        log::info!(
            "Published TXT record {} in zone {domain}",
            request.resolved_fqdn
        );
        Ok(())
    }

    /// Remove the TXT record set published for this challenge.
    ///
    /// Deletion requires exactly one matching record set; the provider
    /// refuses ambiguous matches so a concurrent validation for the same
    /// name is never clobbered.
    pub async fn cleanup(&self, request: &ChallengeRequest) -> SolverResult<()> {
        let config = load_config(request.config.as_ref())?;
        log::debug!("Cleaning up challenge for {}", request.resolved_fqdn);

        let (domain, client) = self.dns_client(&config, request).await?;
        client
            .delete_record(&domain, &request.resolved_fqdn, RecordType::Txt)
            .await?;

        log::info!(
            "Removed TXT record {} from zone {domain}",
            request.resolved_fqdn
        );
        Ok(())
    }

    /// Put a pre-built client into the cache for `domain`, replacing any
    /// existing entry. Lets hosts inject custom-configured clients.
    pub async fn register_client(&self, domain: String, client: Arc<dyn DnsProvider>) {
        self.clients.store(domain, client).await;
    }

    /// Resolve the owning zone for the challenge FQDN and return it with the
    /// provider client for that domain.
    ///
    /// The returned domain is the zone FQDN without its trailing dot, and is
    /// also the cache key. A cache miss builds a client from the referenced
    /// credential secrets; two concurrent misses for one domain may both
    /// build, with the later store winning.
    async fn dns_client(
        &self,
        config: &SolverConfig,
        request: &ChallengeRequest,
    ) -> SolverResult<(String, Arc<dyn DnsProvider>)> {
        let zone = self
            .zone_resolver
            .find_zone_by_fqdn(&request.resolved_fqdn, &self.nameservers)
            .await?;
        let domain = zone.trim_end_matches('.').to_string();

        if let Some(client) = self.clients.get(&domain).await {
            return Ok((domain, client));
        }

        let access_key = self
            .secret_value(&request.resource_namespace, &config.access_key_secret_ref)
            .await?;
        let secret_key = self
            .secret_value(&request.resource_namespace, &config.secret_key_secret_ref)
            .await?;

        let client = create_provider(ProviderCredentials::Huaweicloud {
            access_key_id: access_key,
            secret_access_key: secret_key,
            region: config.region.clone(),
        })?;
        log::debug!("Created {} client for domain {domain}", client.id());

        self.clients.store(domain.clone(), client.clone()).await;
        Ok((domain, client))
    }

    async fn secret_value(
        &self,
        namespace: &str,
        selector: &SecretKeySelector,
    ) -> SolverResult<String> {
        let bytes = self
            .secret_store
            .get_secret_value(namespace, &selector.name, &selector.key)
            .await?;
        String::from_utf8(bytes).map_err(|_| SolverError::Credential {
            namespace: namespace.to_string(),
            name: selector.name.clone(),
            detail: format!("value for key '{}' is not valid UTF-8", selector.key),
        })
    }
}
