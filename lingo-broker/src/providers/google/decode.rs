//! Google 响应解码器
//!
//! One decoder per concrete flavor, each converting raw response bytes into
//! the ordered list of translated strings. A payload that does not match the
//! flavor's shape — including an empty or absent one — is always a
//! [`Format`](TranslateError::Format) error, never an empty success.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, TranslateError};
use crate::providers::common::split_with_separator;

use super::PROVIDER_NAME;

fn format_error(flavor: &str, detail: impl Into<String>) -> TranslateError {
    TranslateError::Format {
        provider: PROVIDER_NAME.to_string(),
        flavor: flavor.to_string(),
        detail: detail.into(),
    }
}

/// html flavor: array-of-arrays of strings; the first inner array is the
/// ordered result, one entry per input item.
///
/// `expected_len` enforces the ordering law — this is the one flavor whose
/// endpoint preserves per-item boundaries, so a count mismatch means the
/// response cannot be mapped back onto the batch.
pub(crate) fn decode_nested_array(
    flavor: &str,
    body: &[u8],
    expected_len: usize,
) -> Result<Vec<String>> {
    let data: Vec<Vec<String>> =
        serde_json::from_slice(body).map_err(|e| format_error(flavor, e.to_string()))?;
    let Some(first) = data.into_iter().next() else {
        return Err(format_error(flavor, "empty outer array"));
    };
    if first.is_empty() {
        return Err(format_error(flavor, "empty translation array"));
    }
    if first.len() != expected_len {
        return Err(format_error(
            flavor,
            format!(
                "translation count mismatch: got {}, expected {expected_len}",
                first.len()
            ),
        ));
    }
    Ok(first)
}

/// client-dict flavor: array-of-arrays of strings; element `[0][0]` is the
/// whole batch flattened into one string, re-split on the reserved
/// separator.
pub(crate) fn decode_single_string(
    flavor: &str,
    body: &[u8],
    separator: &str,
) -> Result<Vec<String>> {
    let data: Vec<Vec<String>> =
        serde_json::from_slice(body).map_err(|e| format_error(flavor, e.to_string()))?;
    let joined = data
        .first()
        .and_then(|inner| inner.first())
        .ok_or_else(|| format_error(flavor, "missing translation element [0][0]"))?;
    if joined.is_empty() {
        return Err(format_error(flavor, "empty translation payload"));
    }
    Ok(split_with_separator(joined, separator))
}

/// client-gtx flavor: generic nested array whose element `[0]` is a list of
/// per-sentence arrays. Each sentence's first string field is concatenated
/// in order (no delimiter), then the concatenation is re-split on the
/// reserved separator.
pub(crate) fn decode_sentence_array(
    flavor: &str,
    body: &[u8],
    separator: &str,
) -> Result<Vec<String>> {
    let data: Value =
        serde_json::from_slice(body).map_err(|e| format_error(flavor, e.to_string()))?;
    let sentences = data
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| format_error(flavor, "cannot extract sentence layer"))?;

    let mut joined = String::new();
    for item in sentences {
        if let Some(segment) = item.as_array()
            && let Some(first) = segment.first().and_then(Value::as_str)
        {
            joined.push_str(first);
        }
    }
    if joined.is_empty() {
        return Err(format_error(flavor, "no sentence segments in payload"));
    }
    Ok(split_with_separator(&joined, separator))
}

/// pa-gtx flavor: object with a `translation` string field holding the
/// flattened batch.
pub(crate) fn decode_translation_field(
    flavor: &str,
    body: &[u8],
    separator: &str,
) -> Result<Vec<String>> {
    #[derive(Deserialize)]
    struct PaTranslateResponse {
        translation: String,
    }

    let data: PaTranslateResponse =
        serde_json::from_slice(body).map_err(|e| format_error(flavor, e.to_string()))?;
    if data.translation.is_empty() {
        return Err(format_error(flavor, "empty translation field"));
    }
    Ok(split_with_separator(&data.translation, separator))
}

/// dictionary flavor: keyed endpoint response; the analogous field chain is
/// `data.translations[0].translatedText`.
pub(crate) fn decode_keyed_dictionary(
    flavor: &str,
    body: &[u8],
    separator: &str,
) -> Result<Vec<String>> {
    #[derive(Deserialize)]
    struct DictionaryResponse {
        data: DictionaryData,
    }

    #[derive(Deserialize)]
    struct DictionaryData {
        translations: Vec<DictionaryTranslation>,
    }

    #[derive(Deserialize)]
    struct DictionaryTranslation {
        #[serde(rename = "translatedText")]
        translated_text: String,
    }

    let data: DictionaryResponse =
        serde_json::from_slice(body).map_err(|e| format_error(flavor, e.to_string()))?;
    let translated = data
        .data
        .translations
        .into_iter()
        .next()
        .ok_or_else(|| format_error(flavor, "empty translations array"))?;
    if translated.translated_text.is_empty() {
        return Err(format_error(flavor, "empty translatedText field"));
    }
    Ok(split_with_separator(&translated.translated_text, separator))
}
