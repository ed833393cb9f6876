//! Microsoft 翻译 Provider（非官方端点）

mod decode;
mod http;
mod provider;

use std::sync::Arc;

use crate::error::{Result, TranslateError};
use crate::http_client::HttpTransport;
use crate::providers::common::resolve_separator;
use crate::traits::Transport;
use crate::types::{MicrosoftApiFlavor, TranslateOptions};

pub(crate) const PROVIDER_NAME: &str = "microsoft";

/// Microsoft Translator provider.
///
/// Two concrete flavors, no meta policies: the configured flavor is
/// attempted exactly once per call. [`MicrosoftApiFlavor::SmartLink`] needs
/// no credentials; [`MicrosoftApiFlavor::Edge`] requires a bearer auth key
/// and rejects construction without one.
pub struct MicrosoftTranslator {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) opts: TranslateOptions,
    pub(crate) flavor: MicrosoftApiFlavor,
    pub(crate) separator: String,
}

impl MicrosoftTranslator {
    /// Create a Microsoft translator from validated options.
    ///
    /// Defaults: flavor [`MicrosoftApiFlavor::SmartLink`], newline
    /// separator, the built-in reqwest transport.
    pub fn new(opts: TranslateOptions) -> Result<Self> {
        let separator = resolve_separator(PROVIDER_NAME, opts.custom_separator.as_deref())?;
        let flavor = opts
            .microsoft_api_flavor
            .unwrap_or(MicrosoftApiFlavor::SmartLink);
        if flavor == MicrosoftApiFlavor::Edge
            && opts
                .microsoft_edge_auth_key
                .as_deref()
                .is_none_or(str::is_empty)
        {
            return Err(TranslateError::Config {
                provider: PROVIDER_NAME.to_string(),
                detail: "edge flavor requires microsoft_edge_auth_key".to_string(),
            });
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flavor_is_smart_link() {
        let translator = MicrosoftTranslator::new(TranslateOptions::default()).unwrap();
        assert_eq!(translator.flavor, MicrosoftApiFlavor::SmartLink);
    }

    #[test]
    fn edge_without_auth_key_is_config_error() {
        let opts = TranslateOptions {
            microsoft_api_flavor: Some(MicrosoftApiFlavor::Edge),
            ..Default::default()
        };
        let err = MicrosoftTranslator::new(opts).err().unwrap();
        assert!(matches!(err, TranslateError::Config { .. }), "got {err:?}");
    }

    #[test]
    fn edge_with_empty_auth_key_is_config_error() {
        let opts = TranslateOptions {
            microsoft_api_flavor: Some(MicrosoftApiFlavor::Edge),
            microsoft_edge_auth_key: Some(String::new()),
            ..Default::default()
        };
        assert!(MicrosoftTranslator::new(opts).is_err());
    }
}
