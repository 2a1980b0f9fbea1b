//! Huawei Cloud DNS API type definitions.

use serde::Deserialize;

/// Response payload for `ListPublicZones`.
#[derive(Debug, Deserialize)]
pub struct ListZonesResponse {
    pub zones: Option<Vec<ZoneItem>>,
}

/// Public zone item returned by Huawei Cloud DNS APIs.
///
/// Zone names come back in FQDN form (`example.com.`).
#[derive(Debug, Deserialize)]
pub struct ZoneItem {
    pub id: String,
    pub name: String,
}

/// Response payload for `ListRecordSetsByZone`.
#[derive(Debug, Deserialize)]
pub struct ListRecordSetsResponse {
    pub recordsets: Option<Vec<RecordSetItem>>,
}

/// Record set item returned by Huawei Cloud DNS APIs.
#[derive(Debug, Deserialize)]
pub struct RecordSetItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
}

/// Response payload for `CreateRecordSet`.
#[derive(Debug, Deserialize)]
pub struct CreateRecordSetResponse {
    pub id: String,
}

/// Error payload returned by Huawei Cloud DNS APIs.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub code: Option<String>,
    pub message: Option<String>,
}
