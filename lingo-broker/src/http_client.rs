//! Production HTTP transport
//!
//! Reqwest-backed [`Transport`] implementation shared by all providers.
//! Owns the unified request flow: send, status validation, body read,
//! debug logging, and the cancellation race. Request *construction*
//! (URLs, headers, bodies, tokens) stays with the per-provider builders —
//! the transport never inspects what it sends.

use async_trait::async_trait;
use reqwest::Client;
use tokio_util::sync::CancellationToken;

use crate::error::{Result, TranslateError};
use crate::providers::common::create_http_client;
use crate::traits::{HttpMethod, Transport, TransportRequest};
use crate::utils::log_sanitizer::truncate_for_log;

/// Reqwest-backed transport with pooled connections and fixed timeouts
/// (10 s connect, 30 s request).
///
/// Safe to share across concurrent dispatch calls; clone the [`Client`]
/// semantics apply (cheap handle over one pool).
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the default client configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: create_http_client(),
        }
    }

    /// Create a transport over a caller-configured [`Client`] (custom
    /// timeouts, proxies, pool limits).
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn dispatch(
        &self,
        provider: &str,
        flavor: &str,
        request: TransportRequest,
    ) -> Result<Vec<u8>> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TranslateError::Timeout {
                    provider: provider.to_string(),
                    flavor: flavor.to_string(),
                    detail: e.to_string(),
                }
            } else {
                TranslateError::Network {
                    provider: provider.to_string(),
                    flavor: flavor.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("[{provider}] Response Status: {status} ({flavor})");

        // [200, 300) 以外一律视为请求失败
        if !status.is_success() {
            return Err(TranslateError::HttpStatus {
                provider: provider.to_string(),
                flavor: flavor.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TranslateError::Network {
                provider: provider.to_string(),
                flavor: flavor.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider}] Response Body: {}",
            truncate_for_log(&String::from_utf8_lossy(&body))
        );

        Ok(body.to_vec())
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        cancel: &CancellationToken,
        provider: &str,
        flavor: &str,
        request: TransportRequest,
    ) -> Result<Vec<u8>> {
        log::debug!(
            "[{provider}] {} {} ({flavor})",
            request.method,
            request.url
        );

        tokio::select! {
            // 取消优先于请求进度
            biased;
            () = cancel.cancelled() => {
                log::warn!("[{provider}] Request cancelled ({flavor})");
                Err(TranslateError::Cancelled {
                    provider: provider.to_string(),
                })
            }
            result = self.dispatch(provider, flavor, request) => result,
        }
    }
}
