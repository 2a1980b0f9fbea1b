//! Challenge request types

use serde::{Deserialize, Serialize};

/// A single DNS-01 challenge operation, as handed over by the ACME host.
///
/// Field names follow the cert-manager webhook wire format, so a request
/// body received by an HTTP frontend deserializes directly into this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRequest {
    /// Fully-qualified challenge record name, with trailing dot
    /// (e.g. `_acme-challenge.example.com.`)
    #[serde(rename = "resolvedFQDN")]
    pub resolved_fqdn: String,
    /// Zone the host believes owns the FQDN, with trailing dot
    pub resolved_zone: String,
    /// Challenge value to publish as the TXT record content
    pub key: String,
    /// Namespace holding the referenced credential secrets
    pub resource_namespace: String,
    /// Opaque per-issuer solver configuration (decoded by [`crate::config::load_config`])
    #[serde(default)]
    pub config: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_webhook_wire_format() {
        let request: ChallengeRequest = serde_json::from_value(json!({
            "resolvedFQDN": "_acme-challenge.example.com.",
            "resolvedZone": "example.com.",
            "key": "token-value",
            "resourceNamespace": "cert-manager",
            "config": { "region": "cn-north-1" },
        }))
        .unwrap();

        assert_eq!(request.resolved_fqdn, "_acme-challenge.example.com.");
        assert_eq!(request.resolved_zone, "example.com.");
        assert_eq!(request.resource_namespace, "cert-manager");
        assert!(request.config.is_some());
    }

    #[test]
    fn test_config_defaults_to_none() {
        let request: ChallengeRequest = serde_json::from_value(json!({
            "resolvedFQDN": "_acme-challenge.example.com.",
            "resolvedZone": "example.com.",
            "key": "token-value",
            "resourceNamespace": "default",
        }))
        .unwrap();

        assert!(request.config.is_none());
    }
}
