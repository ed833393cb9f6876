//! Microsoft Translator 实现
//!
//! Fixed-flavor dispatch only: one attempt per call against the configured
//! endpoint, no fallback across flavors.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::providers::common::validate_batch;
use crate::traits::Translator;
use crate::types::MicrosoftApiFlavor;

use super::{MicrosoftTranslator, PROVIDER_NAME, decode};

#[async_trait]
impl Translator for MicrosoftTranslator {
    async fn translate_text(
        &self,
        cancel: &CancellationToken,
        texts: &[String],
        target: &str,
        source: Option<&str>,
    ) -> Result<Vec<String>> {
        validate_batch(PROVIDER_NAME, texts, target)?;

        match self.flavor {
            MicrosoftApiFlavor::SmartLink => {
                let flavor = MicrosoftApiFlavor::SmartLink.as_str();
                let request = self.build_smart_link_request(texts, target, source);
                let body = self
                    .transport
                    .execute(cancel, PROVIDER_NAME, flavor, request)
                    .await?;
                decode::decode_smart_link(flavor, &body, &self.separator)
            }
            MicrosoftApiFlavor::Edge => {
                let flavor = MicrosoftApiFlavor::Edge.as_str();
                let request = self.build_edge_request(texts, target, source);
                let body = self
                    .transport
                    .execute(cancel, PROVIDER_NAME, flavor, request)
                    .await?;
                decode::decode_edge(flavor, &body, &self.separator)
            }
        }
    }
}
