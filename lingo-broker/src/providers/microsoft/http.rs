//! Microsoft 请求构造

use crate::constants::{MICROSOFT_URL_EDGE, MICROSOFT_URL_SMART_LINK};
use crate::providers::common::join_with_separator;
use crate::traits::TransportRequest;

use super::MicrosoftTranslator;

impl MicrosoftTranslator {
    /// smart-link: form-encoded POST. The translation direction travels as
    /// `dir=<source>/<target>`; without a detected source code the relay
    /// expects `en` as the source.
    pub(crate) fn build_smart_link_request(
        &self,
        texts: &[String],
        target: &str,
        source: Option<&str>,
    ) -> TransportRequest {
        let joined = join_with_separator(texts, &self.separator);
        let dir = format!("{}/{target}", source.unwrap_or("en"));
        let body = format!(
            "text={}&dir={}&provider=microsoft",
            urlencoding::encode(&joined),
            urlencoding::encode(&dir)
        );
        TransportRequest::post(MICROSOFT_URL_SMART_LINK)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body.into_bytes())
    }

    /// edge: JSON object POST with bearer auth. `from` is omitted entirely
    /// when no source code is supplied (the endpoint then auto-detects).
    pub(crate) fn build_edge_request(
        &self,
        texts: &[String],
        target: &str,
        source: Option<&str>,
    ) -> TransportRequest {
        let joined = join_with_separator(texts, &self.separator);
        let mut payload = serde_json::json!({ "text": joined, "to": target });
        if let Some(source) = source {
            payload["from"] = serde_json::Value::String(source.to_string());
        }
        // 构造时已校验 edge flavor 必须携带 auth key
        let auth_key = self.opts.microsoft_edge_auth_key.as_deref().unwrap_or_default();
        TransportRequest::post(MICROSOFT_URL_EDGE)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {auth_key}"))
            .body(payload.to_string().into_bytes())
    }
}
