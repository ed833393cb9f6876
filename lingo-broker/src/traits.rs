use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::Result;

/// 翻译服务 Trait
///
/// Implemented by every provider. The input batch order is preserved
/// end-to-end: the returned sequence has one entry per input, in input order,
/// or the call fails as a whole — partial results are never returned.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `texts` into the `target` language code (e.g. `"en"`, `"vi"`).
    ///
    /// `source` is an optional detected source-language code supplied by an
    /// external language-detection service; `None` means auto-detect (or the
    /// provider's default source where the endpoint has no auto mode).
    ///
    /// `cancel` is checked on every transport attempt; once it fires the
    /// call returns [`Cancelled`](crate::TranslateError::Cancelled) without
    /// trying further endpoint flavors.
    async fn translate_text(
        &self,
        cancel: &CancellationToken,
        texts: &[String],
        target: &str,
        source: Option<&str>,
    ) -> Result<Vec<String>>;
}

/// HTTP method of a [`TransportRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET request, no body.
    Get,
    /// POST request, body required.
    Post,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// A fully built, flavor-agnostic HTTP exchange.
///
/// Request builders produce this; a [`Transport`] executes it. Query
/// parameters are kept separate from the URL so synthetic transports can
/// inspect them without URL parsing (the URL template itself may already
/// carry baked-in query parameters).
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute URL, possibly with baked-in query parameters.
    pub url: String,
    /// Additional query parameters, appended to the URL at execution time.
    pub query: Vec<(String, String)>,
    /// Request headers.
    pub headers: Vec<(String, String)>,
    /// Raw request body, if any. The matching `Content-Type` header is set
    /// by the request builder.
    pub body: Option<Vec<u8>>,
}

impl TransportRequest {
    /// Start a GET request to `url`.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Start a POST request to `url`.
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Append a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the raw request body.
    #[must_use]
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Look up a header value by case-insensitive name (test helper for
    /// synthetic transports).
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Pluggable HTTP executor.
///
/// One implementation exists in production
/// ([`HttpTransport`](crate::HttpTransport), reqwest-backed); tests inject
/// synthetic implementations to script per-flavor outcomes.
///
/// Implementations own status-code validation: a response status outside
/// `[200, 300)` must be returned as
/// [`HttpStatus`](crate::TranslateError::HttpStatus), and a fired `cancel`
/// token as [`Cancelled`](crate::TranslateError::Cancelled). The transport is
/// shared across concurrent dispatch calls and must be concurrency-safe.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute `request` and return the raw response body on success.
    ///
    /// `provider` and `flavor` identify the attempt for logging and error
    /// context only; they must not influence the exchange.
    async fn execute(
        &self,
        cancel: &CancellationToken,
        provider: &str,
        flavor: &str,
        request: TransportRequest,
    ) -> Result<Vec<u8>>;
}
