//! Host collaborator trait definitions

mod secret_store;
mod zone_resolver;

pub use secret_store::SecretStore;
pub use zone_resolver::ZoneResolver;
