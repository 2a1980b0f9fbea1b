//! Domain-keyed provider client cache

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use dns01_solver_provider::DnsProvider;

/// In-memory cache of provider clients, indexed by domain name.
///
/// Lookups take a read lock and stores take a write lock, so each operation
/// is atomic on its own. The miss-construct-store sequence in the solver
/// deliberately holds no lock across construction: two first-time challenges
/// for the same domain may both build a client, and the later `store` wins.
/// Every later lookup observes a single shared instance.
#[derive(Clone)]
pub struct ClientCache {
    clients: Arc<RwLock<HashMap<String, Arc<dyn DnsProvider>>>>,
}

impl ClientCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self {
            clients: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the cached client for `domain`, if any
    pub async fn get(&self, domain: &str) -> Option<Arc<dyn DnsProvider>> {
        self.clients.read().await.get(domain).cloned()
    }

    /// Store a client for `domain`, replacing any existing entry
    pub async fn store(&self, domain: String, client: Arc<dyn DnsProvider>) {
        self.clients.write().await.insert(domain, client);
    }
}

impl Default for ClientCache {
    fn default() -> Self {
        Self::new()
    }
}
