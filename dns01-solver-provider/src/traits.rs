use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::RecordType;

/// Raw API error as reported by a provider, before mapping (internal).
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Provider-specific error code, when the response carried one.
    pub code: Option<String>,
    /// Raw error message.
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Context available when mapping a raw error to a [`ProviderError`] (internal).
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Record name, for `RecordExists` / `RecordNotFound`.
    pub record_name: Option<String>,
    /// Domain name, for `ZoneNotFound`.
    pub domain: Option<String>,
}

/// Maps provider-specific API errors to the unified error type (internal).
/// Each provider implements this next to its HTTP layer.
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier carried in every mapped error.
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error plus request context to a [`ProviderError`].
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Shortcut: response parsing failure.
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Shortcut: unmapped error code (fallback).
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// A DNS provider capable of the record operations challenge solving needs.
///
/// Implementations are cheap to share (`Arc<dyn DnsProvider>`) and safe to
/// call concurrently. All operations key off the plain domain name; zone
/// lookup happens inside the provider on every call.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Provider identifier (e.g. `"huaweicloud"`).
    fn id(&self) -> &'static str;

    /// Resolve the provider-side zone id for `domain`.
    ///
    /// `domain` is the zone name without a trailing dot. Fails with
    /// [`ProviderError::ZoneNotFound`] when the account holds no public zone
    /// of exactly that name.
    async fn resolve_zone_id(&self, domain: &str) -> Result<String>;

    /// Create a record set `record_name` of `record_type` in the zone owning
    /// `domain`, holding the single `value`.
    ///
    /// TXT values are quoted on the wire as the provider requires. Creating a
    /// record set that already exists fails with
    /// [`ProviderError::RecordExists`].
    async fn add_record(
        &self,
        domain: &str,
        record_name: &str,
        record_type: RecordType,
        value: &str,
    ) -> Result<()>;

    /// Delete the record set `record_name` of `record_type` from the zone
    /// owning `domain`.
    ///
    /// Deletes only when exactly one record set matches: zero matches fail
    /// with [`ProviderError::RecordNotFound`], two or more with
    /// [`ProviderError::AmbiguousRecord`] and nothing is deleted.
    async fn delete_record(
        &self,
        domain: &str,
        record_name: &str,
        record_type: RecordType,
    ) -> Result<()>;
}
