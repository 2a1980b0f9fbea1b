//! Signed HTTP request methods for the Huawei Cloud DNS API.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::HuaweicloudProvider;
use super::types::ApiErrorResponse;

impl HuaweicloudProvider {
    /// Map a non-2xx response through the error-code table.
    fn handle_response_error(
        &self,
        status: u16,
        response_text: &str,
        ctx: ErrorContext,
    ) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        // Structured error body first
        if let Ok(error) = serde_json::from_str::<ApiErrorResponse>(response_text) {
            return Err(self.map_error(
                RawApiError::with_code(
                    error.code.unwrap_or_default(),
                    error.message.unwrap_or_default(),
                ),
                ctx,
            ));
        }

        Err(self.unknown_error(RawApiError::new(format!("HTTP {status}: {response_text}"))))
    }

    /// X-Sdk-Date timestamp for the current instant.
    fn sdk_timestamp() -> String {
        Utc::now().format("%Y%m%dT%H%M%SZ").to_string()
    }

    /// Signed GET request. `query` is the already-encoded query string.
    pub(crate) async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &str,
        ctx: ErrorContext,
    ) -> Result<T> {
        let timestamp = Self::sdk_timestamp();

        let headers = vec![
            ("Host".to_string(), self.host.clone()),
            ("X-Sdk-Date".to_string(), timestamp.clone()),
        ];

        let authorization = self.sign("GET", path, query, &headers, "", &timestamp);

        let url = if query.is_empty() {
            format!("{}{path}", self.endpoint)
        } else {
            format!("{}{path}?{query}", self.endpoint)
        };

        let request = self
            .client
            .get(&url)
            .header("Host", &self.host)
            .header("X-Sdk-Date", &timestamp)
            .header("Authorization", authorization);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;

        self.handle_response_error(status, &response_text, ctx)?;
        HttpUtils::parse_json(&response_text, self.provider_name())
    }

    /// Signed POST request with a JSON body.
    pub(crate) async fn post<T: for<'de> Deserialize<'de>, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> Result<T> {
        let payload =
            serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            })?;

        log::debug!("Request Body: {payload}");

        let timestamp = Self::sdk_timestamp();

        let headers = vec![
            ("Host".to_string(), self.host.clone()),
            ("X-Sdk-Date".to_string(), timestamp.clone()),
            ("Content-Type".to_string(), "application/json".to_string()),
        ];

        let authorization = self.sign("POST", path, "", &headers, &payload, &timestamp);
        let url = format!("{}{path}", self.endpoint);

        let request = self
            .client
            .post(&url)
            .header("Host", &self.host)
            .header("X-Sdk-Date", &timestamp)
            .header("Content-Type", "application/json")
            .header("Authorization", authorization)
            .body(payload);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "POST", &url).await?;

        self.handle_response_error(status, &response_text, ctx)?;
        HttpUtils::parse_json(&response_text, self.provider_name())
    }

    /// Signed DELETE request.
    pub(crate) async fn delete(&self, path: &str, ctx: ErrorContext) -> Result<()> {
        let timestamp = Self::sdk_timestamp();

        let headers = vec![
            ("Host".to_string(), self.host.clone()),
            ("X-Sdk-Date".to_string(), timestamp.clone()),
        ];

        let authorization = self.sign("DELETE", path, "", &headers, "", &timestamp);
        let url = format!("{}{path}", self.endpoint);

        let request = self
            .client
            .delete(&url)
            .header("Host", &self.host)
            .header("X-Sdk-Date", &timestamp)
            .header("Authorization", authorization);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "DELETE", &url).await?;

        self.handle_response_error(status, &response_text, ctx)
    }
}
