//! `DnsProvider` implementation for Huawei Cloud DNS.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{ProviderError, Result};
use crate::providers::common::{normalize_domain_name, quote_txt_value};
use crate::traits::{DnsProvider, ErrorContext};
use crate::types::RecordType;

use super::HuaweicloudProvider;
use super::types::{CreateRecordSetResponse, ListRecordSetsResponse, ListZonesResponse};

#[async_trait]
impl DnsProvider for HuaweicloudProvider {
    fn id(&self) -> &'static str {
        "huaweicloud"
    }

    async fn resolve_zone_id(&self, domain: &str) -> Result<String> {
        let query = format!("type=public&name={}", urlencoding::encode(domain));
        let ctx = ErrorContext {
            domain: Some(domain.to_string()),
            ..Default::default()
        };
        let response: ListZonesResponse = self.get("/v2/zones", &query, ctx).await?;

        // The name filter is a substring match; keep exact matches only.
        // At most one public zone exists per name, so the first hit is it.
        let wanted = normalize_domain_name(domain);
        let zone = response
            .zones
            .unwrap_or_default()
            .into_iter()
            .find(|z| normalize_domain_name(&z.name) == wanted);

        match zone {
            Some(z) => {
                log::debug!("[huaweicloud] Zone '{domain}' resolved to id {}", z.id);
                Ok(z.id)
            }
            None => Err(ProviderError::ZoneNotFound {
                provider: self.id().to_string(),
                domain: domain.to_string(),
                raw_message: None,
            }),
        }
    }

    async fn add_record(
        &self,
        domain: &str,
        record_name: &str,
        record_type: RecordType,
        value: &str,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct CreateRecordSetRequest {
            name: String,
            #[serde(rename = "type")]
            record_type: String,
            records: Vec<String>,
        }

        let zone_id = self.resolve_zone_id(domain).await?;
        let record_value = quote_txt_value(record_type, value);

        let api_req = CreateRecordSetRequest {
            name: record_name.to_string(),
            record_type: record_type.as_str().to_string(),
            records: vec![record_value],
        };

        let path = format!("/v2/zones/{zone_id}/recordsets");
        let ctx = ErrorContext {
            record_name: Some(record_name.to_string()),
            domain: Some(domain.to_string()),
        };
        let response: CreateRecordSetResponse = self.post(&path, &api_req, ctx).await?;
        log::debug!(
            "[huaweicloud] Created {record_type} record set '{record_name}' (id {})",
            response.id
        );
        Ok(())
    }

    async fn delete_record(
        &self,
        domain: &str,
        record_name: &str,
        record_type: RecordType,
    ) -> Result<()> {
        let zone_id = self.resolve_zone_id(domain).await?;

        let query = format!(
            "type={}&name={}",
            record_type.as_str(),
            urlencoding::encode(record_name)
        );
        let path = format!("/v2/zones/{zone_id}/recordsets");
        let ctx = ErrorContext {
            record_name: Some(record_name.to_string()),
            domain: Some(domain.to_string()),
        };
        let response: ListRecordSetsResponse = self.get(&path, &query, ctx).await?;

        // The name filter is a substring match; keep exact matches only.
        let wanted = normalize_domain_name(record_name);
        let matches: Vec<_> = response
            .recordsets
            .unwrap_or_default()
            .into_iter()
            .filter(|r| {
                r.record_type == record_type.as_str() && normalize_domain_name(&r.name) == wanted
            })
            .collect();

        match matches.as_slice() {
            [] => Err(ProviderError::RecordNotFound {
                provider: self.id().to_string(),
                record_name: record_name.to_string(),
                raw_message: None,
            }),
            [record_set] => {
                let path = format!("/v2/zones/{zone_id}/recordsets/{}", record_set.id);
                let ctx = ErrorContext {
                    record_name: Some(record_name.to_string()),
                    domain: Some(domain.to_string()),
                };
                self.delete(&path, ctx).await?;
                log::debug!(
                    "[huaweicloud] Deleted {record_type} record set '{record_name}' (id {})",
                    record_set.id
                );
                Ok(())
            }
            many => Err(ProviderError::AmbiguousRecord {
                provider: self.id().to_string(),
                record_name: record_name.to_string(),
                matches: many.len(),
            }),
        }
    }
}
