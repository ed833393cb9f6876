//! Google Translator 实现与回退策略
//!
//! State machine per dispatch call:
//! - a concrete flavor is attempted exactly once (fixed policy);
//! - `Random` samples one concrete flavor and attempts it once, no fallback;
//! - `Sequential` walks the canonical fallback order, first success wins;
//! - `Mix` attempts html first, then the remaining concrete flavors in
//!   canonical order.
//!
//! Per-attempt failures are logged with the flavor identifier and absorbed
//! by the retrying policies; cancellation always terminates the loop and is
//! surfaced as-is. Either every input item gets a translation, in input
//! order, or the call fails as a whole.

use async_trait::async_trait;
use rand::Rng;
use rand::rngs::StdRng;
use tokio_util::sync::CancellationToken;

use crate::error::{Result, TranslateError};
use crate::providers::common::{make_rng, validate_batch};
use crate::traits::Translator;
use crate::types::GoogleApiFlavor;

use super::{GoogleEndpoint, GoogleTranslator, PROVIDER_NAME, decode};

impl GoogleTranslator {
    /// One attempt: Request Builder → Transport → Normalizer.
    async fn attempt(
        &self,
        cancel: &CancellationToken,
        endpoint: GoogleEndpoint,
        texts: &[String],
        target: &str,
        rng: &mut StdRng,
    ) -> Result<Vec<String>> {
        let request = self.build_request(endpoint, texts, target, rng);
        let body = self
            .transport
            .execute(cancel, PROVIDER_NAME, endpoint.as_str(), request)
            .await?;
        self.decode_response(endpoint, &body, texts.len())
    }

    fn decode_response(
        &self,
        endpoint: GoogleEndpoint,
        body: &[u8],
        batch_len: usize,
    ) -> Result<Vec<String>> {
        let flavor = endpoint.as_str();
        match endpoint {
            GoogleEndpoint::Html => decode::decode_nested_array(flavor, body, batch_len),
            GoogleEndpoint::ClientGtx => {
                decode::decode_sentence_array(flavor, body, &self.separator)
            }
            GoogleEndpoint::ClientDict => {
                decode::decode_single_string(flavor, body, &self.separator)
            }
            GoogleEndpoint::PaGtx => {
                decode::decode_translation_field(flavor, body, &self.separator)
            }
            GoogleEndpoint::Dictionary => {
                decode::decode_keyed_dictionary(flavor, body, &self.separator)
            }
        }
    }

    /// Walk `order`, returning on the first success. Retryable per-attempt
    /// failures are logged and absorbed; anything else (cancellation)
    /// terminates immediately. Exhaustion aggregates into
    /// [`AllFlavorsFailed`](TranslateError::AllFlavorsFailed).
    async fn translate_with_fallback(
        &self,
        cancel: &CancellationToken,
        order: &[GoogleEndpoint],
        texts: &[String],
        target: &str,
    ) -> Result<Vec<String>> {
        let mut rng = make_rng(self.opts.random_seed);
        let mut attempted = Vec::with_capacity(order.len());

        for &endpoint in order {
            match self.attempt(cancel, endpoint, texts, target, &mut rng).await {
                Ok(translated) => return Ok(translated),
                Err(e) if e.is_flavor_retryable() => {
                    log::warn!(
                        "[{PROVIDER_NAME}] Flavor {} failed: {e}",
                        endpoint.as_str()
                    );
                    attempted.push(endpoint.as_str().to_string());
                }
                Err(e) => return Err(e),
            }
        }

        Err(TranslateError::AllFlavorsFailed {
            provider: PROVIDER_NAME.to_string(),
            attempts: attempted,
        })
    }

    /// Fixed policy: one attempt against one concrete endpoint.
    async fn translate_fixed(
        &self,
        cancel: &CancellationToken,
        endpoint: GoogleEndpoint,
        texts: &[String],
        target: &str,
    ) -> Result<Vec<String>> {
        let mut rng = make_rng(self.opts.random_seed);
        self.attempt(cancel, endpoint, texts, target, &mut rng)
            .await
            .inspect_err(|e| {
                log::warn!(
                    "[{PROVIDER_NAME}] Flavor {} failed: {e}",
                    endpoint.as_str()
                );
            })
    }

    /// Random policy: sample one concrete endpoint, attempt it once.
    async fn translate_random(
        &self,
        cancel: &CancellationToken,
        texts: &[String],
        target: &str,
    ) -> Result<Vec<String>> {
        let mut rng = make_rng(self.opts.random_seed);
        let order = GoogleEndpoint::FALLBACK_ORDER;
        let endpoint = order[rng.random_range(0..order.len())];
        log::debug!(
            "[{PROVIDER_NAME}] Random policy selected flavor {}",
            endpoint.as_str()
        );
        self.attempt(cancel, endpoint, texts, target, &mut rng)
            .await
            .inspect_err(|e| {
                log::warn!(
                    "[{PROVIDER_NAME}] Flavor {} failed: {e}",
                    endpoint.as_str()
                );
            })
    }

    /// Mix policy: html is the distinguished primary; the remaining concrete
    /// endpoints follow in canonical order.
    async fn translate_mix(
        &self,
        cancel: &CancellationToken,
        texts: &[String],
        target: &str,
    ) -> Result<Vec<String>> {
        let primary = GoogleEndpoint::Html;
        let order: Vec<GoogleEndpoint> = std::iter::once(primary)
            .chain(
                GoogleEndpoint::FALLBACK_ORDER
                    .into_iter()
                    .filter(|e| *e != primary),
            )
            .collect();
        self.translate_with_fallback(cancel, &order, texts, target)
            .await
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    // `source` 被忽略: Google 的 URL 模板固定 sl=auto。
    async fn translate_text(
        &self,
        cancel: &CancellationToken,
        texts: &[String],
        target: &str,
        _source: Option<&str>,
    ) -> Result<Vec<String>> {
        validate_batch(PROVIDER_NAME, texts, target)?;

        match self.flavor {
            GoogleApiFlavor::Html => {
                self.translate_fixed(cancel, GoogleEndpoint::Html, texts, target)
                    .await
            }
            GoogleApiFlavor::ClientGtx => {
                self.translate_fixed(cancel, GoogleEndpoint::ClientGtx, texts, target)
                    .await
            }
            GoogleApiFlavor::ClientDict => {
                self.translate_fixed(cancel, GoogleEndpoint::ClientDict, texts, target)
                    .await
            }
            GoogleApiFlavor::PaGtx => {
                self.translate_fixed(cancel, GoogleEndpoint::PaGtx, texts, target)
                    .await
            }
            GoogleApiFlavor::Dictionary => {
                self.translate_fixed(cancel, GoogleEndpoint::Dictionary, texts, target)
                    .await
            }
            GoogleApiFlavor::Random => self.translate_random(cancel, texts, target).await,
            GoogleApiFlavor::Sequential => {
                self.translate_with_fallback(
                    cancel,
                    &GoogleEndpoint::FALLBACK_ORDER,
                    texts,
                    target,
                )
                .await
            }
            GoogleApiFlavor::Mix => self.translate_mix(cancel, texts, target).await,
        }
    }
}
