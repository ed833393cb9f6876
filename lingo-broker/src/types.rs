use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::traits::Transport;

// ============ Provider Types ============

/// Identifies which translation provider implementation to use.
///
/// Each variant is gated behind its corresponding feature flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Google Translate (unofficial web endpoints). Requires feature `google`.
    #[cfg(feature = "google")]
    Google,
    /// Microsoft Translator (unofficial relay endpoints). Requires feature `microsoft`.
    #[cfg(feature = "microsoft")]
    Microsoft,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "google")]
            Self::Google => write!(f, "google"),
            #[cfg(feature = "microsoft")]
            Self::Microsoft => write!(f, "microsoft"),
        }
    }
}

impl Default for Provider {
    fn default() -> Self {
        #[cfg(feature = "google")]
        {
            Self::Google
        }
        #[cfg(all(not(feature = "google"), feature = "microsoft"))]
        {
            Self::Microsoft
        }
    }
}

// ============ Endpoint Flavors ============

/// Google Translate endpoint flavor.
///
/// The first five variants are *concrete* flavors: each maps to exactly one
/// URL template and one request/response contract. The last three are
/// *meta* variants: selection policies over the concrete set, not endpoints
/// themselves.
///
/// # Batch fidelity
///
/// Only [`Html`](Self::Html) preserves per-item boundaries natively. The
/// other concrete flavors flatten the batch into one string joined on the
/// reserved separator server-side and re-split it client-side; a translation
/// that swallows or emits separator characters can shift item boundaries.
/// This is a known limitation of those endpoints, not of this crate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum GoogleApiFlavor {
    /// `translate-pa.googleapis.com/v1/translateHtml` — array-in/array-out,
    /// preserves per-item boundaries.
    Html,
    /// `client=gtx` on a service host — per-sentence nested-array response.
    ClientGtx,
    /// `client=dict-chrome-ex` on a service host — single joined string
    /// response (Chrome dictionary extension endpoint).
    ClientDict,
    /// `translate-pa.googleapis.com/v1/translate` — keyed, object response
    /// with a `translation` field.
    PaGtx,
    /// Keyed `language/translate/v2` endpoint — object response
    /// (Chrome dictionary extension fallback).
    Dictionary,
    /// Meta: uniformly sample one concrete flavor per call; single attempt,
    /// no fallback.
    Random,
    /// Meta: try every concrete flavor in declaration order, first success
    /// wins.
    Sequential,
    /// Meta: try [`Html`](Self::Html) first, then the remaining concrete
    /// flavors in declaration order.
    Mix,
}

impl GoogleApiFlavor {
    /// Stable identifier used in logs, errors, and serialized config.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::ClientGtx => "client-gtx",
            Self::ClientDict => "client-dict",
            Self::PaGtx => "pa-gtx",
            Self::Dictionary => "dictionary",
            Self::Random => "random",
            Self::Sequential => "sequential",
            Self::Mix => "mix",
        }
    }
}

impl std::fmt::Display for GoogleApiFlavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Microsoft Translator endpoint flavor. Both variants are concrete; the
/// Microsoft provider has no meta policies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MicrosoftApiFlavor {
    /// `webmail.smartlinkcorp.com` relay — form-encoded POST, raw
    /// unicode-escaped text response.
    SmartLink,
    /// `api-edge.cognitive.microsofttranslator.com` — JSON POST with bearer
    /// auth key.
    Edge,
}

impl MicrosoftApiFlavor {
    /// Stable identifier used in logs, errors, and serialized config.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SmartLink => "smart-link",
            Self::Edge => "edge",
        }
    }
}

impl std::fmt::Display for MicrosoftApiFlavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Options ============

/// Configuration for [`create_translator`](crate::create_translator).
///
/// Validated once at construction; an invalid combination is a
/// [`Config`](crate::TranslateError::Config) error from the factory, never a
/// runtime error from a translate call. The options are moved into the
/// translator and are immutable for its lifetime.
#[derive(Clone, Default)]
pub struct TranslateOptions {
    /// Which provider to use (default: Google).
    pub provider: Provider,

    /// Endpoint flavor for the Google provider (default: [`GoogleApiFlavor::Html`]).
    pub google_api_flavor: Option<GoogleApiFlavor>,

    /// Endpoint flavor for the Microsoft provider (default:
    /// [`MicrosoftApiFlavor::SmartLink`]).
    pub microsoft_api_flavor: Option<MicrosoftApiFlavor>,

    /// Pick the `User-Agent` header uniformly at random per request instead
    /// of using the first candidate. (Google flavors only.)
    pub use_random_user_agents: bool,

    /// Pick the service host uniformly at random per request instead of
    /// using the first candidate. (Host-relative Google flavors only.)
    pub use_random_service_hosts: bool,

    /// Attach the legacy web token (`tk` parameter) to requests, for the
    /// flavors that accept it (client-gtx, client-dict).
    pub add_token: bool,

    /// Override the built-in service host table. Used whenever non-empty.
    pub custom_service_hosts: Vec<String>,

    /// Override the built-in `User-Agent` table. Used whenever non-empty.
    pub custom_user_agents: Vec<String>,

    /// Override the reserved separator used to pack/unpack batched inputs
    /// (default: `"\n"`). Must be non-empty when set.
    pub custom_separator: Option<String>,

    /// API key for the html flavor; defaults to the baked-in web key.
    pub google_api_key_html: Option<String>,

    /// API key for the pa-gtx flavor; defaults to the baked-in web key.
    pub google_api_key_pa: Option<String>,

    /// API key for the dictionary flavor; defaults to the baked-in web key.
    pub google_api_key_dictionary: Option<String>,

    /// Bearer auth key for the Microsoft edge flavor. Required when that
    /// flavor is selected.
    pub microsoft_edge_auth_key: Option<String>,

    /// Seed for the random/mix selection and randomized header picks.
    /// Deterministic selection for tests; leave `None` in production.
    pub random_seed: Option<u64>,

    /// Shared transport for all requests. Defaults to the built-in
    /// reqwest-backed [`HttpTransport`](crate::HttpTransport); tests inject
    /// a synthetic transport here.
    pub transport: Option<Arc<dyn Transport>>,
}

impl std::fmt::Debug for TranslateOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslateOptions")
            .field("provider", &self.provider)
            .field("google_api_flavor", &self.google_api_flavor)
            .field("microsoft_api_flavor", &self.microsoft_api_flavor)
            .field("use_random_user_agents", &self.use_random_user_agents)
            .field("use_random_service_hosts", &self.use_random_service_hosts)
            .field("add_token", &self.add_token)
            .field("custom_service_hosts", &self.custom_service_hosts)
            .field("custom_user_agents", &self.custom_user_agents)
            .field("custom_separator", &self.custom_separator)
            .field("random_seed", &self.random_seed)
            .field("transport", &self.transport.as_ref().map(|_| "<shared>"))
            .finish_non_exhaustive()
    }
}
