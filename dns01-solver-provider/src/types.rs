//! Public types shared by provider implementations and their callers.

use serde::{Deserialize, Serialize};

// ============ DNS Record Types ============

/// DNS record type identifier, used for record operations and query filtering.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"TXT"`, etc.). Challenge
/// solving only ever writes [`Txt`](Self::Txt) records, but record operations take
/// the type as a parameter so the same client covers other uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Text record.
    Txt,
    /// Name server record.
    Ns,
    /// Service locator record.
    Srv,
    /// Certificate Authority Authorization record.
    Caa,
}

impl RecordType {
    /// The uppercase wire representation used by provider APIs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Srv => "SRV",
            Self::Caa => "CAA",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Provider Credentials ============

/// Type-safe credentials for constructing a provider client.
///
/// The variant selects the concrete provider; additional providers add a variant
/// here and an arm in [`create_provider`](crate::create_provider) without touching
/// any caller.
///
/// # Serialization
///
/// Serialized as a tagged enum with `"provider"` as the tag and `"credentials"`
/// as the content:
///
/// ```json
/// { "provider": "huaweicloud", "credentials": { "access_key_id": "...", "secret_access_key": "...", "region": "cn-north-1" } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// Huawei Cloud DNS credentials. Requires feature `huaweicloud`.
    #[cfg(feature = "huaweicloud")]
    #[serde(rename = "huaweicloud")]
    Huaweicloud {
        /// Huawei Cloud Access Key ID.
        access_key_id: String,
        /// Huawei Cloud Secret Access Key.
        secret_access_key: String,
        /// Region code selecting the API endpoint (e.g. `"cn-north-1"`);
        /// empty selects the global endpoint.
        region: String,
    },
}
