//! HTTP implementation of the remote resource client.

use crate::ResourceClient;
use async_trait::async_trait;
use fieldgate_core::{FieldgateError, FieldgateResult, OfficeId, PageRequest, SearchParams, WirePage};
use fieldgate_config::RemoteApiConfig;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Header carrying the remote API authentication key.
const AUTH_KEY_HEADER: &str = "authenticationKey";
/// Header carrying the remote API authentication token.
const AUTH_TOKEN_HEADER: &str = "authenticationToken";

/// Authentication material sent with every remote request.
#[derive(Debug, Clone)]
pub struct AuthKeys {
    key: String,
    token: String,
}

impl AuthKeys {
    /// Creates a new pair of authentication keys.
    #[must_use]
    pub fn new(key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            token: token.into(),
        }
    }
}

/// HTTP-based remote resource client.
///
/// Uses HTTP/1.1 with JSON payloads against the field-service API. Tenant
/// scoping is enforced at the wire level: the office id is attached to every
/// request as the `officeID` query parameter.
pub struct HttpResourceClient {
    client: Client,
    base_url: String,
    auth: AuthKeys,
}

impl HttpResourceClient {
    /// Creates a new HTTP resource client.
    pub fn new(base_url: &str, auth: AuthKeys, timeout: Duration) -> FieldgateResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(100)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| {
                FieldgateError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    /// Creates a client from the remote API configuration section.
    pub fn from_config(config: &RemoteApiConfig) -> FieldgateResult<Self> {
        Self::new(
            &config.base_url,
            AuthKeys::new(&config.auth_key, &config.auth_token),
            config.timeout(),
        )
    }

    /// Creates a client with a custom reqwest client.
    #[must_use]
    pub fn with_client(client: Client, base_url: &str, auth: AuthKeys) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str, office_id: OfficeId) -> reqwest::RequestBuilder {
        self.client
            .get(self.url(path))
            .header(AUTH_KEY_HEADER, &self.auth.key)
            .header(AUTH_TOKEN_HEADER, &self.auth.token)
            .query(&[("officeID", office_id.into_inner().to_string())])
    }
}

/// Pagination envelope returned by the remote search endpoints.
#[derive(Debug, Deserialize)]
struct WirePageEnvelope {
    data: Vec<serde_json::Value>,
    page: usize,
    size: usize,
    total_elements: u64,
    total_pages: u64,
}

#[async_trait]
impl ResourceClient for HttpResourceClient {
    async fn fetch_one(
        &self,
        endpoint: &str,
        office_id: OfficeId,
        id: i64,
    ) -> FieldgateResult<Option<serde_json::Value>> {
        debug!(endpoint, office = %office_id, id, "remote lookup");

        let response = self
            .get(&format!("/api/v1/{}/{}", endpoint, id), office_id)
            .send()
            .await
            .map_err(|e| transport_error(endpoint, &e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_http_error(endpoint, status, &body));
        }

        let value = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| FieldgateError::mapping(endpoint, format!("undecodable payload: {}", e)))?;

        Ok(Some(value))
    }

    async fn fetch_page(
        &self,
        endpoint: &str,
        office_id: OfficeId,
        params: &SearchParams,
        page: PageRequest,
    ) -> FieldgateResult<WirePage> {
        debug!(
            endpoint,
            office = %office_id,
            page = page.page,
            size = page.size,
            "remote search page"
        );

        let response = self
            .get(&format!("/api/v1/{}", endpoint), office_id)
            .query(params.pairs())
            .query(&[
                ("page", page.page.to_string()),
                ("size", page.size.to_string()),
            ])
            .send()
            .await
            .map_err(|e| transport_error(endpoint, &e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_http_error(endpoint, status, &body));
        }

        let envelope: WirePageEnvelope = response
            .json()
            .await
            .map_err(|e| FieldgateError::mapping(endpoint, format!("undecodable page envelope: {}", e)))?;

        Ok(WirePage {
            items: envelope.data,
            page: envelope.page,
            size: envelope.size,
            total_elements: envelope.total_elements,
            total_pages: envelope.total_pages,
        })
    }
}

fn transport_error(endpoint: &str, err: &reqwest::Error) -> FieldgateError {
    FieldgateError::remote(endpoint, format!("transport error: {}", err))
}

fn map_http_error(endpoint: &str, status: StatusCode, body: &str) -> FieldgateError {
    FieldgateError::remote(endpoint, format!("HTTP {}: {}", status.as_u16(), body))
}
