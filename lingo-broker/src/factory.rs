//! Translator factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::Translator;
use crate::types::{Provider, TranslateOptions};

#[cfg(feature = "google")]
use crate::providers::GoogleTranslator;
#[cfg(feature = "microsoft")]
use crate::providers::MicrosoftTranslator;

/// Creates a [`Translator`] instance from the given options.
///
/// The concrete provider type is determined by [`TranslateOptions::provider`].
/// Options are validated here, once — an unsupported combination (e.g. the
/// Microsoft edge flavor without an auth key, or an empty custom separator)
/// is a [`Config`](crate::TranslateError::Config) error at construction and
/// never surfaces from a translate call. The returned translator is wrapped
/// in `Arc<dyn Translator>` for easy sharing across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use lingo_broker::{GoogleApiFlavor, TranslateOptions, create_translator};
///
/// let translator = create_translator(TranslateOptions {
///     google_api_flavor: Some(GoogleApiFlavor::Mix),
///     add_token: true,
///     ..Default::default()
/// }).unwrap();
/// ```
pub fn create_translator(options: TranslateOptions) -> Result<Arc<dyn Translator>> {
    match options.provider {
        #[cfg(feature = "google")]
        Provider::Google => Ok(Arc::new(GoogleTranslator::new(options)?)),
        #[cfg(feature = "microsoft")]
        Provider::Microsoft => Ok(Arc::new(MicrosoftTranslator::new(options)?)),
    }
}
