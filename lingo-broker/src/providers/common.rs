//! Provider 公共工具函数

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reqwest::Client;

use crate::error::{Result, TranslateError};

// ============ HTTP Client ============

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

// ============ Reserved separator ============

/// Default separator used to pack a batch into one text field and unpack the
/// flattened translation.
pub const DEFAULT_SEPARATOR: &str = "\n";

/// Resolve the effective separator from an optional override.
///
/// An explicitly empty separator cannot round-trip a batch and is a
/// construction-time error.
pub fn resolve_separator(provider: &str, custom: Option<&str>) -> Result<String> {
    match custom {
        Some("") => Err(TranslateError::Config {
            provider: provider.to_string(),
            detail: "custom separator must not be empty".to_string(),
        }),
        Some(sep) => Ok(sep.to_string()),
        None => Ok(DEFAULT_SEPARATOR.to_string()),
    }
}

/// Join a batch into one string on the reserved separator.
pub fn join_with_separator(texts: &[String], separator: &str) -> String {
    texts.join(separator)
}

/// Split a flattened translation back into items on the reserved separator.
pub fn split_with_separator(text: &str, separator: &str) -> Vec<String> {
    text.split(separator).map(str::to_string).collect()
}

// ============ Header candidate selection ============

/// Pick one value from a candidate list.
///
/// The candidate list is `overrides` when non-empty, else `defaults`.
/// With `randomize` off the first candidate is returned; with it on, one is
/// sampled uniformly. Selection state lives in the per-call `rng` — nothing
/// is shared across dispatch calls.
pub fn pick_candidate(
    defaults: &[&str],
    overrides: &[String],
    randomize: bool,
    rng: &mut StdRng,
) -> String {
    if overrides.is_empty() {
        let index = if randomize {
            rng.random_range(0..defaults.len())
        } else {
            0
        };
        defaults[index].to_string()
    } else {
        let index = if randomize {
            rng.random_range(0..overrides.len())
        } else {
            0
        };
        overrides[index].clone()
    }
}

/// Build the per-dispatch RNG: seeded when the caller configured a seed
/// (deterministic policy tests), OS entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

// ============ Call argument validation ============

/// Reject calls the providers cannot satisfy: an empty batch has no defined
/// result shape, and an empty target code would be dropped upstream.
pub fn validate_batch(provider: &str, texts: &[String], target: &str) -> Result<()> {
    if texts.is_empty() {
        return Err(TranslateError::InvalidParameter {
            provider: provider.to_string(),
            param: "texts".to_string(),
            detail: "input batch must not be empty".to_string(),
        });
    }
    if target.is_empty() {
        return Err(TranslateError::InvalidParameter {
            provider: provider.to_string(),
            param: "target".to_string(),
            detail: "target language code must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    // ---- separator ----

    #[test]
    fn default_separator_round_trip() {
        let texts = strings(&["hello", "world"]);
        let joined = join_with_separator(&texts, DEFAULT_SEPARATOR);
        assert_eq!(joined, "hello\nworld");
        assert_eq!(split_with_separator(&joined, DEFAULT_SEPARATOR), texts);
    }

    #[test]
    fn custom_separator_round_trip() {
        let texts = strings(&["a", "b", "c"]);
        let joined = join_with_separator(&texts, "|#|");
        assert_eq!(split_with_separator(&joined, "|#|"), texts);
    }

    #[test]
    fn single_item_join_has_no_separator() {
        let texts = strings(&["only"]);
        assert_eq!(join_with_separator(&texts, "\n"), "only");
    }

    #[test]
    fn resolve_separator_defaults_to_newline() {
        assert_eq!(resolve_separator("google", None).unwrap(), "\n");
    }

    #[test]
    fn resolve_separator_rejects_empty() {
        let err = resolve_separator("google", Some("")).unwrap_err();
        assert!(matches!(err, TranslateError::Config { .. }), "got {err:?}");
    }

    // ---- pick_candidate ----

    #[test]
    fn deterministic_pick_uses_first_default() {
        let mut rng = make_rng(Some(1));
        let picked = pick_candidate(&["first", "second"], &[], false, &mut rng);
        assert_eq!(picked, "first");
    }

    #[test]
    fn deterministic_pick_prefers_override_list() {
        let mut rng = make_rng(Some(1));
        let overrides = strings(&["custom-agent"]);
        let picked = pick_candidate(&["first", "second"], &overrides, false, &mut rng);
        assert_eq!(picked, "custom-agent");
    }

    #[test]
    fn random_pick_stays_within_candidates() {
        let mut rng = make_rng(Some(7));
        let defaults = ["a", "b", "c"];
        for _ in 0..32 {
            let picked = pick_candidate(&defaults, &[], true, &mut rng);
            assert!(defaults.contains(&picked.as_str()));
        }
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut rng1 = make_rng(Some(42));
        let mut rng2 = make_rng(Some(42));
        let defaults = ["a", "b", "c", "d", "e"];
        for _ in 0..16 {
            assert_eq!(
                pick_candidate(&defaults, &[], true, &mut rng1),
                pick_candidate(&defaults, &[], true, &mut rng2)
            );
        }
    }

    // ---- validate_batch ----

    #[test]
    fn empty_batch_rejected() {
        let err = validate_batch("google", &[], "vi").unwrap_err();
        assert!(
            matches!(err, TranslateError::InvalidParameter { ref param, .. } if param == "texts"),
            "got {err:?}"
        );
    }

    #[test]
    fn empty_target_rejected() {
        let texts = strings(&["hello"]);
        let err = validate_batch("google", &texts, "").unwrap_err();
        assert!(
            matches!(err, TranslateError::InvalidParameter { ref param, .. } if param == "target"),
            "got {err:?}"
        );
    }

    #[test]
    fn valid_batch_accepted() {
        let texts = strings(&["hello"]);
        assert!(validate_batch("google", &texts, "vi").is_ok());
    }
}
