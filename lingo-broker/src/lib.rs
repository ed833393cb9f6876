//! # lingo-broker
//!
//! A unified translation dispatch library over the unofficial HTTP endpoints
//! of two providers, with configurable endpoint-selection policies and
//! fallback across endpoint flavors.
//!
//! ## Supported Providers & Flavors
//!
//! | Provider | Feature Flag | Concrete Flavors | Policies |
//! |----------|-------------|------------------|----------|
//! | Google Translate (web endpoints) | `google` | `html`, `client-gtx`, `client-dict`, `pa-gtx`, `dictionary` | fixed, `random`, `sequential`, `mix` |
//! | Microsoft Translator (relay endpoints) | `microsoft` | `smart-link`, `edge` | fixed |
//!
//! A *concrete* flavor maps to exactly one URL template and response
//! contract. The *meta* flavors (`random`, `sequential`, `mix`) are
//! selection policies over the concrete set: `sequential` walks the
//! canonical order `html → client-gtx → client-dict → pa-gtx → dictionary`
//! and returns the first success, `mix` pins `html` first and falls back to
//! the rest, `random` samples one flavor and attempts it once.
//!
//! ## Feature Flags
//!
//! ### Provider Selection
//!
//! - **`all-providers`** *(default)* — Enable both providers listed above.
//! - **`google`** — Enable only the Google provider.
//! - **`microsoft`** — Enable only the Microsoft provider.
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lingo_broker::{GoogleApiFlavor, TranslateOptions, create_translator};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let translator = create_translator(TranslateOptions {
//!         google_api_flavor: Some(GoogleApiFlavor::Sequential),
//!         use_random_user_agents: true,
//!         use_random_service_hosts: true,
//!         add_token: true,
//!         ..Default::default()
//!     })?;
//!
//!     let cancel = CancellationToken::new();
//!     let texts = vec!["Thank you for using our package.".to_string()];
//!     let translated = translator
//!         .translate_text(&cancel, &texts, "vi", None)
//!         .await?;
//!     println!("{}", translated[0]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Batch Fidelity
//!
//! The input batch order is always preserved: a successful call returns one
//! translation per input, in input order, and a call never returns partial
//! results. Only the `html` flavor ships the batch as a real array, though —
//! every other flavor packs the batch into one string on a reserved
//! separator (default `"\n"`) and re-splits the flattened translation. An
//! upstream translation that swallows or invents separator characters can
//! therefore shift item boundaries under those flavors. This is a known
//! limitation of the flattening endpoints, not a bug in this crate; use the
//! `html` flavor when exact per-item boundaries matter.
//!
//! ## Cancellation
//!
//! Every translate call takes a
//! [`CancellationToken`](tokio_util::sync::CancellationToken) that is
//! honored on each transport attempt. Once it fires, the in-flight attempt
//! fails and the selection policy stops instead of trying further flavors;
//! the call surfaces [`TranslateError::Cancelled`], never a misleading
//! [`TranslateError::AllFlavorsFailed`].
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, TranslateError>`](TranslateError):
//!
//! - [`TranslateError::Config`] — invalid options, surfaced at construction only
//! - [`TranslateError::Network`] / [`TranslateError::Timeout`] /
//!   [`TranslateError::HttpStatus`] — transport-level attempt failures
//! - [`TranslateError::Format`] — the response did not match the flavor's shape
//! - [`TranslateError::AllFlavorsFailed`] — a retrying policy exhausted its candidates
//!
//! Per-attempt failures under the retrying policies are logged (via the
//! `log` facade) with the flavor identifier and absorbed; only the terminal
//! aggregate reaches the caller.

mod constants;
mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{Result, TranslateError};

// Re-export factory functions
pub use factory::create_translator;

// Re-export core traits and the transport seam
pub use traits::{HttpMethod, Translator, Transport, TransportRequest};

// Re-export types
pub use types::{GoogleApiFlavor, MicrosoftApiFlavor, Provider, TranslateOptions};

// Re-export the production transport
pub use http_client::HttpTransport;

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "google")]
pub use providers::{GoogleTranslator, generate_token};

#[cfg(feature = "microsoft")]
pub use providers::MicrosoftTranslator;
