//! Huawei Cloud error-code mapping.
//!
//! Reference: <https://support.huaweicloud.com/api-dns/ErrorCode.html>
//!
//! Only the codes record publishing can hit are mapped:
//!
//! - Authentication: APIGW.0301, APIGW.0101, APIGW.0303, APIGW.0305,
//!   DNS.0005, DNS.0013, DNS.0040
//! - Permission: APIGW.0302, APIGW.0306, DNS.0030, DNS.1802
//! - Throttling: APIGW.0308, DNS.0021
//! - Record exists: DNS.0312, DNS.0335, DNS.0016
//! - Record not found: DNS.0313, DNS.0004
//! - Zone not found: DNS.0302, DNS.0101, DNS.1206
//! - Backend service: APIGW.0201, DNS.0012, DNS.0015, DNS.0022, DNS.0036
//!
//! Everything else falls back to `Unknown` with the raw code preserved.

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::HuaweicloudProvider;

impl ProviderErrorMapper for HuaweicloudProvider {
    fn provider_name(&self) -> &'static str {
        "huaweicloud"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // Authentication failures
            Some(
                "APIGW.0301"
                | "APIGW.0101"
                | "APIGW.0303"
                | "APIGW.0305"
                | "DNS.0005"
                | "DNS.0013"
                | "DNS.0040",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // Operation denied by policy
            Some("APIGW.0302" | "APIGW.0306" | "DNS.0030" | "DNS.1802") => {
                ProviderError::PermissionDenied {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // Throttled (APIGW.0308) or lock contention (DNS.0021)
            Some("APIGW.0308" | "DNS.0021") => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },

            // Record set name already taken
            Some("DNS.0312" | "DNS.0335" | "DNS.0016") => ProviderError::RecordExists {
                provider: self.provider_name().to_string(),
                record_name: context.record_name.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            // Record set does not exist
            Some("DNS.0313" | "DNS.0004") => ProviderError::RecordNotFound {
                provider: self.provider_name().to_string(),
                record_name: context.record_name.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            // Zone does not exist (DNS.0101 is the legacy code)
            Some("DNS.0302" | "DNS.0101" | "DNS.1206") => ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                domain: context.domain.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            // Backend service unavailable
            Some("APIGW.0201" | "DNS.0012" | "DNS.0015" | "DNS.0022" | "DNS.0036") => {
                ProviderError::NetworkError {
                    provider: self.provider_name().to_string(),
                    detail: raw.message,
                }
            }

            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> HuaweicloudProvider {
        HuaweicloudProvider::new("ak".to_string(), "sk".to_string(), String::new())
    }

    #[test]
    fn auth_code_maps_to_invalid_credentials() {
        let e = provider().map_error(
            RawApiError::with_code("APIGW.0301", "Incorrect IAM authentication information"),
            ErrorContext::default(),
        );
        assert!(matches!(e, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn duplicate_code_maps_to_record_exists() {
        let ctx = ErrorContext {
            record_name: Some("_acme-challenge.example.com.".to_string()),
            ..Default::default()
        };
        let e = provider().map_error(
            RawApiError::with_code("DNS.0312", "Record set name conflicts"),
            ctx,
        );
        match e {
            ProviderError::RecordExists { record_name, .. } => {
                assert_eq!(record_name, "_acme-challenge.example.com.");
            }
            other => panic!("expected RecordExists, got {other:?}"),
        }
    }

    #[test]
    fn zone_code_maps_to_zone_not_found() {
        let ctx = ErrorContext {
            domain: Some("example.com".to_string()),
            ..Default::default()
        };
        let e = provider().map_error(RawApiError::with_code("DNS.0302", "Zone not exist"), ctx);
        match e {
            ProviderError::ZoneNotFound { domain, .. } => assert_eq!(domain, "example.com"),
            other => panic!("expected ZoneNotFound, got {other:?}"),
        }
    }

    #[test]
    fn throttle_code_maps_to_rate_limited() {
        let e = provider().map_error(
            RawApiError::with_code("APIGW.0308", "Throttled"),
            ErrorContext::default(),
        );
        assert!(matches!(e, ProviderError::RateLimited { .. }));
    }

    #[test]
    fn unmapped_code_falls_back_to_unknown() {
        let e = provider().map_error(
            RawApiError::with_code("DNS.2301", "DNSSEC not supported"),
            ErrorContext::default(),
        );
        match e {
            ProviderError::Unknown { raw_code, .. } => {
                assert_eq!(raw_code.as_deref(), Some("DNS.2301"));
            }
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn missing_code_falls_back_to_unknown() {
        let e = provider().map_error(RawApiError::new("HTTP 500: oops"), ErrorContext::default());
        assert!(matches!(e, ProviderError::Unknown { raw_code: None, .. }));
    }
}
