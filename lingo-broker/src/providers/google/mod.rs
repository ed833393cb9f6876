//! Google 翻译 Provider（非官方端点）

mod decode;
mod http;
mod provider;
mod token;

use std::sync::Arc;

pub use token::generate_token;

use crate::error::Result;
use crate::http_client::HttpTransport;
use crate::providers::common::resolve_separator;
use crate::traits::Transport;
use crate::types::{GoogleApiFlavor, TranslateOptions};

pub(crate) const PROVIDER_NAME: &str = "google";

/// Concrete Google endpoints, i.e. the flavor set the meta policies select
/// over. Declaration order is the canonical fallback order and part of the
/// crate contract: sequential iterates it front to back, mix pins
/// [`Html`](Self::Html) first and follows with the rest in this order, and
/// random samples uniformly from all of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GoogleEndpoint {
    Html,
    ClientGtx,
    ClientDict,
    PaGtx,
    Dictionary,
}

impl GoogleEndpoint {
    /// Canonical fallback order (declaration order).
    pub(crate) const FALLBACK_ORDER: [Self; 5] = [
        Self::Html,
        Self::ClientGtx,
        Self::ClientDict,
        Self::PaGtx,
        Self::Dictionary,
    ];

    /// Stable identifier, identical to the matching [`GoogleApiFlavor`] one.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::ClientGtx => "client-gtx",
            Self::ClientDict => "client-dict",
            Self::PaGtx => "pa-gtx",
            Self::Dictionary => "dictionary",
        }
    }
}

/// Google Translate provider.
///
/// Dispatches over the unofficial web endpoints according to the configured
/// [`GoogleApiFlavor`]: a concrete flavor is attempted once; the meta
/// flavors select among the concrete set (see [`GoogleEndpoint`] for the
/// canonical order).
pub struct GoogleTranslator {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) opts: TranslateOptions,
    pub(crate) flavor: GoogleApiFlavor,
    pub(crate) separator: String,
}

impl GoogleTranslator {
    /// Create a Google translator from validated options.
    ///
    /// Defaults: flavor [`GoogleApiFlavor::Html`], newline separator, the
    /// built-in reqwest transport.
    pub fn new(opts: TranslateOptions) -> Result<Self> {
        let separator = resolve_separator(PROVIDER_NAME, opts.custom_separator.as_deref())?;
        let flavor = opts.google_api_flavor.unwrap_or(GoogleApiFlavor::Html);
        let transport = opts
            .transport
            .clone()
            .unwrap_or_else(|| Arc::new(HttpTransport::new()) as Arc<dyn Transport>);
        Ok(Self {
            transport,
            opts,
            flavor,
            separator,
        })
    }
}
