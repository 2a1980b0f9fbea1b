//! Test helper module
//!
//! Provides mock collaborator implementations and convenient test factories.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use dns01_solver_provider::{DnsProvider, ProviderError, RecordType, Result as ProviderResult};

use crate::error::{SolverError, SolverResult};
use crate::solver::Solver;
use crate::traits::{SecretStore, ZoneResolver};
use crate::types::ChallengeRequest;

// ===== MockZoneResolver =====

pub struct MockZoneResolver {
    /// fqdn -> owning zone (both with trailing dot)
    zones: RwLock<HashMap<String, String>>,
    /// Nameserver lists seen by `find_zone_by_fqdn`, in call order
    calls: RwLock<Vec<Vec<String>>>,
}

impl MockZoneResolver {
    pub fn new() -> Self {
        Self {
            zones: RwLock::new(HashMap::new()),
            calls: RwLock::new(Vec::new()),
        }
    }

    pub async fn add_zone(&self, fqdn: &str, zone: &str) {
        self.zones
            .write()
            .await
            .insert(fqdn.to_string(), zone.to_string());
    }

    pub async fn calls(&self) -> Vec<Vec<String>> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl ZoneResolver for MockZoneResolver {
    async fn find_zone_by_fqdn(&self, fqdn: &str, nameservers: &[String]) -> SolverResult<String> {
        self.calls.write().await.push(nameservers.to_vec());
        self.zones.read().await.get(fqdn).cloned().ok_or_else(|| {
            SolverError::ZoneResolution {
                fqdn: fqdn.to_string(),
                detail: "no zone configured for fqdn".to_string(),
            }
        })
    }
}

// ===== MockSecretStore =====

type SecretData = HashMap<String, Vec<u8>>;

pub struct MockSecretStore {
    /// (namespace, secret name) -> key/value data
    secrets: RwLock<HashMap<(String, String), SecretData>>,
    /// (namespace, name, key) triples seen by `get_secret_value`, in call order
    lookups: RwLock<Vec<(String, String, String)>>,
}

impl MockSecretStore {
    pub fn new() -> Self {
        Self {
            secrets: RwLock::new(HashMap::new()),
            lookups: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_secret_value(&self, namespace: &str, name: &str, key: &str, value: &[u8]) {
        self.secrets
            .write()
            .await
            .entry((namespace.to_string(), name.to_string()))
            .or_default()
            .insert(key.to_string(), value.to_vec());
    }

    pub async fn lookups(&self) -> Vec<(String, String, String)> {
        self.lookups.read().await.clone()
    }
}

#[async_trait]
impl SecretStore for MockSecretStore {
    async fn get_secret_value(
        &self,
        namespace: &str,
        name: &str,
        key: &str,
    ) -> SolverResult<Vec<u8>> {
        self.lookups.write().await.push((
            namespace.to_string(),
            name.to_string(),
            key.to_string(),
        ));
        let secrets = self.secrets.read().await;
        let Some(data) = secrets.get(&(namespace.to_string(), name.to_string())) else {
            return Err(SolverError::Credential {
                namespace: namespace.to_string(),
                name: name.to_string(),
                detail: "secret not found".to_string(),
            });
        };
        data.get(key)
            .cloned()
            .ok_or_else(|| SolverError::Credential {
                namespace: namespace.to_string(),
                name: name.to_string(),
                detail: format!("key '{key}' not found in secret"),
            })
    }
}

// ===== MockDnsProvider =====

/// One record held by [`MockDnsProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockRecord {
    pub domain: String,
    pub name: String,
    pub record_type: RecordType,
    pub value: String,
}

/// In-memory provider with real duplicate/uniqueness semantics.
///
/// `add_record` rejects an exact duplicate with `RecordExists`; `delete_record`
/// requires exactly one match and fails with `RecordNotFound` or
/// `AmbiguousRecord` otherwise, mirroring the live provider contract.
pub struct MockDnsProvider {
    records: RwLock<Vec<MockRecord>>,
}

impl MockDnsProvider {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    pub async fn seed_record(&self, domain: &str, name: &str, record_type: RecordType, value: &str) {
        self.records.write().await.push(MockRecord {
            domain: domain.to_string(),
            name: name.to_string(),
            record_type,
            value: value.to_string(),
        });
    }

    pub async fn records(&self) -> Vec<MockRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl DnsProvider for MockDnsProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn resolve_zone_id(&self, domain: &str) -> ProviderResult<String> {
        Ok(format!("zone-{domain}"))
    }

    async fn add_record(
        &self,
        domain: &str,
        record_name: &str,
        record_type: RecordType,
        value: &str,
    ) -> ProviderResult<()> {
        let mut records = self.records.write().await;
        let duplicate = records.iter().any(|r| {
            r.domain == domain
                && r.name == record_name
                && r.record_type == record_type
                && r.value == value
        });
        if duplicate {
            return Err(ProviderError::RecordExists {
                provider: "mock".to_string(),
                record_name: record_name.to_string(),
                raw_message: None,
            });
        }
        records.push(MockRecord {
            domain: domain.to_string(),
            name: record_name.to_string(),
            record_type,
            value: value.to_string(),
        });
        Ok(())
    }

    async fn delete_record(
        &self,
        domain: &str,
        record_name: &str,
        record_type: RecordType,
    ) -> ProviderResult<()> {
        let mut records = self.records.write().await;
        let matches: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| {
                r.domain == domain && r.name == record_name && r.record_type == record_type
            })
            .map(|(i, _)| i)
            .collect();
        match matches.as_slice() {
            [] => Err(ProviderError::RecordNotFound {
                provider: "mock".to_string(),
                record_name: record_name.to_string(),
                raw_message: None,
            }),
            [index] => {
                records.remove(*index);
                Ok(())
            }
            many => Err(ProviderError::AmbiguousRecord {
                provider: "mock".to_string(),
                record_name: record_name.to_string(),
                matches: many.len(),
            }),
        }
    }
}

// ===== Factories =====

/// Create a test `Solver` wired to fresh mock collaborators
pub fn create_test_solver() -> (Solver, Arc<MockZoneResolver>, Arc<MockSecretStore>) {
    let zone_resolver = Arc::new(MockZoneResolver::new());
    let secret_store = Arc::new(MockSecretStore::new());
    let solver = Solver::new(zone_resolver.clone(), secret_store.clone());
    (solver, zone_resolver, secret_store)
}

/// Standard challenge request for `_acme-challenge.example.com.`
pub fn test_request() -> ChallengeRequest {
    ChallengeRequest {
        resolved_fqdn: "_acme-challenge.example.com.".to_string(),
        resolved_zone: "example.com.".to_string(),
        key: "test-challenge-key".to_string(),
        resource_namespace: "cert-manager".to_string(),
        config: Some(serde_json::json!({
            "region": "cn-north-1",
            "accessKeySecretRef": { "name": "huaweicloud-secret", "key": "accessKey" },
            "secretKeySecretRef": { "name": "huaweicloud-secret", "key": "secretKey" },
        })),
    }
}

/// Seed the secrets referenced by [`test_request`]
pub async fn seed_test_credentials(store: &MockSecretStore) {
    store
        .set_secret_value("cert-manager", "huaweicloud-secret", "accessKey", b"AKTEST")
        .await;
    store
        .set_secret_value("cert-manager", "huaweicloud-secret", "secretKey", b"SKTEST")
        .await;
}
