//! Google 请求构造
//!
//! Builds one [`TransportRequest`] per concrete flavor. Header resolution
//! (user agent, service host) happens here, per call, against the caller
//! override lists or the built-in tables.

use rand::rngs::StdRng;

use crate::constants::{
    DEFAULT_SERVICE_HOSTS, DEFAULT_USER_AGENTS, GOOGLE_API_KEY_TRANSLATE,
    GOOGLE_API_KEY_TRANSLATE_PA, GOOGLE_PATH_CLIENT_DICT, GOOGLE_PATH_CLIENT_GTX,
    GOOGLE_URL_DICTIONARY, GOOGLE_URL_HTML, GOOGLE_URL_PA_GTX,
};
use crate::providers::common::{join_with_separator, pick_candidate};
use crate::traits::TransportRequest;

use super::{GoogleEndpoint, GoogleTranslator, generate_token};

impl GoogleTranslator {
    fn user_agent(&self, rng: &mut StdRng) -> String {
        pick_candidate(
            DEFAULT_USER_AGENTS,
            &self.opts.custom_user_agents,
            self.opts.use_random_user_agents,
            rng,
        )
    }

    fn service_host(&self, rng: &mut StdRng) -> String {
        pick_candidate(
            DEFAULT_SERVICE_HOSTS,
            &self.opts.custom_service_hosts,
            self.opts.use_random_service_hosts,
            rng,
        )
    }

    /// Build the request for one attempt against `endpoint`.
    pub(crate) fn build_request(
        &self,
        endpoint: GoogleEndpoint,
        texts: &[String],
        target: &str,
        rng: &mut StdRng,
    ) -> TransportRequest {
        match endpoint {
            GoogleEndpoint::Html => self.build_html_request(texts, target, rng),
            GoogleEndpoint::ClientGtx => {
                self.build_host_relative_request(GOOGLE_PATH_CLIENT_GTX, texts, target, rng)
            }
            GoogleEndpoint::ClientDict => {
                self.build_host_relative_request(GOOGLE_PATH_CLIENT_DICT, texts, target, rng)
            }
            GoogleEndpoint::PaGtx => self.build_pa_request(texts, target, rng),
            GoogleEndpoint::Dictionary => self.build_dictionary_request(texts, target, rng),
        }
    }

    /// html flavor: the batch travels as a literal JSON array, so per-item
    /// boundaries survive without separator packing.
    fn build_html_request(
        &self,
        texts: &[String],
        target: &str,
        rng: &mut StdRng,
    ) -> TransportRequest {
        let body = serde_json::json!([[texts, "auto", target], "wt_lib"]).to_string();
        TransportRequest::post(GOOGLE_URL_HTML)
            .header("User-Agent", self.user_agent(rng))
            .header("Content-Type", "application/json+protobuf")
            .header(
                "X-Goog-API-Key",
                self.opts
                    .google_api_key_html
                    .as_deref()
                    .unwrap_or(GOOGLE_API_KEY_TRANSLATE),
            )
            .body(body.into_bytes())
    }

    /// client-gtx / client-dict: GET against a service host, batch packed
    /// into the `q` parameter on the reserved separator. The legacy token
    /// is computed over the exact joined text sent as `q`.
    fn build_host_relative_request(
        &self,
        path: &str,
        texts: &[String],
        target: &str,
        rng: &mut StdRng,
    ) -> TransportRequest {
        let joined = join_with_separator(texts, &self.separator);
        let url = format!("https://{}{path}", self.service_host(rng));
        let mut request = TransportRequest::get(url)
            .query("tl", target)
            .query("q", joined.as_str());
        if self.opts.add_token {
            request = request.query("tk", generate_token(&joined));
        }
        request.header("User-Agent", self.user_agent(rng))
    }

    fn build_pa_request(
        &self,
        texts: &[String],
        target: &str,
        rng: &mut StdRng,
    ) -> TransportRequest {
        let joined = join_with_separator(texts, &self.separator);
        TransportRequest::get(GOOGLE_URL_PA_GTX)
            .query("query.target_language", target)
            .query(
                "key",
                self.opts
                    .google_api_key_pa
                    .as_deref()
                    .unwrap_or(GOOGLE_API_KEY_TRANSLATE_PA),
            )
            .query("query.text", joined.as_str())
            .header("User-Agent", self.user_agent(rng))
    }

    fn build_dictionary_request(
        &self,
        texts: &[String],
        target: &str,
        rng: &mut StdRng,
    ) -> TransportRequest {
        let joined = join_with_separator(texts, &self.separator);
        TransportRequest::get(GOOGLE_URL_DICTIONARY)
            .query("q", joined.as_str())
            .query("target", target)
            .query(
                "key",
                self.opts
                    .google_api_key_dictionary
                    .as_deref()
                    .unwrap_or(GOOGLE_API_KEY_TRANSLATE),
            )
            .header("User-Agent", self.user_agent(rng))
    }
}
