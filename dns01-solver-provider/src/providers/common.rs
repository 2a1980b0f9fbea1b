//! Helpers shared by provider implementations.

use std::time::Duration;

use hmac::{Hmac, Mac};
use reqwest::Client;
use sha2::Sha256;

use crate::types::RecordType;

type HmacSha256 = Hmac<Sha256>;

// ============ HTTP Client ============

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Create an HTTP client with the shared timeout configuration.
pub fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

// ============ HMAC-SHA256 ============

/// HMAC-SHA256 digest, used by request signing.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

// ============ Name handling ============

/// Strip the trailing dot from a domain name.
///
/// Provider APIs report zone and record names in FQDN form (`example.com.`);
/// comparisons against caller-supplied names go through this first.
pub fn normalize_domain_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

// ============ TXT value quoting ============

/// Quote a record value for submission when the type requires it.
///
/// TXT record payloads are quoted strings on the provider side. A TXT value
/// not already beginning with `"` is wrapped in exactly one pair of double
/// quotes; values that start with `"` are taken as pre-quoted and pass
/// through, as do all non-TXT values.
pub fn quote_txt_value(record_type: RecordType, value: &str) -> String {
    if record_type == RecordType::Txt && !value.starts_with('"') {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_dot() {
        assert_eq!(normalize_domain_name("example.com."), "example.com");
        assert_eq!(normalize_domain_name("example.com"), "example.com");
        assert_eq!(normalize_domain_name("."), "");
    }

    #[test]
    fn txt_value_wrapped_once() {
        assert_eq!(quote_txt_value(RecordType::Txt, "token123"), "\"token123\"");
    }

    #[test]
    fn prequoted_txt_value_unchanged() {
        assert_eq!(
            quote_txt_value(RecordType::Txt, "\"token123\""),
            "\"token123\""
        );
    }

    #[test]
    fn empty_txt_value_becomes_empty_quotes() {
        assert_eq!(quote_txt_value(RecordType::Txt, ""), "\"\"");
    }

    #[test]
    fn non_txt_value_never_quoted() {
        assert_eq!(quote_txt_value(RecordType::A, "1.2.3.4"), "1.2.3.4");
        assert_eq!(quote_txt_value(RecordType::Cname, "example.com."), "example.com.");
    }

    #[test]
    fn hmac_sha256_known_vector() {
        // RFC 4231 test case 2
        let out = hmac_sha256(b"Jefe", b"what do ya want for nothing?");
        assert_eq!(
            hex::encode(out),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }
}
