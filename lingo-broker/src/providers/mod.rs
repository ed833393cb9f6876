//! Translation provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

#[cfg(feature = "google")]
mod google;
#[cfg(feature = "microsoft")]
mod microsoft;

#[cfg(feature = "google")]
pub use google::{GoogleTranslator, generate_token};
#[cfg(feature = "microsoft")]
pub use microsoft::MicrosoftTranslator;
