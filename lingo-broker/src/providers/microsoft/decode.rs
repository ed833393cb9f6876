//! Microsoft 响应解码
//!
//! Both flavors flatten the batch server-side; the payload is
//! unicode-escape decoded and re-split on the reserved separator. Empty or
//! malformed payloads are [`Format`](TranslateError::Format) errors, never
//! empty successes.

use serde::Deserialize;

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

/// smart-link: the raw response body *is* the translated text, with
/// JSON-style escape sequences left in by the relay.
pub(crate) fn decode_smart_link(flavor: &str, body: &[u8], separator: &str) -> Result<Vec<String>> {
    let text = std::str::from_utf8(body)
        .map_err(|e| format_error(flavor, format!("response is not UTF-8: {e}")))?;
    let decoded = decode_unicode_escapes(flavor, text)?;
    if decoded.trim().is_empty() {
        return Err(format_error(flavor, "empty translation payload"));
    }
    Ok(split_with_separator(&decoded, separator))
}

/// edge: object with a `translation` string field. The field value gets the
/// same escape decoding as smart-link — the relay occasionally
/// double-escapes non-ASCII output.
pub(crate) fn decode_edge(flavor: &str, body: &[u8], separator: &str) -> Result<Vec<String>> {
    #[derive(Deserialize)]
    struct EdgeResponse {
        translation: String,
    }

    let data: EdgeResponse =
        serde_json::from_slice(body).map_err(|e| format_error(flavor, e.to_string()))?;
    let decoded = decode_unicode_escapes(flavor, &data.translation)?;
    if decoded.is_empty() {
        return Err(format_error(flavor, "empty translation field"));
    }
    Ok(split_with_separator(&decoded, separator))
}

/// Decode JSON-style escape sequences in-place: `\uXXXX` (including
/// surrogate pairs) and the common single-character escapes. Sequences that
/// are not recognized escapes pass through unchanged.
pub(crate) fn decode_unicode_escapes(flavor: &str, text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];
        let mut consumed = 1;

        match tail.as_bytes().first().copied() {
            Some(b'u') => {
                let unit = parse_hex_unit(flavor, tail, 1)?;
                consumed += 5;
                if (0xD800..0xDC00).contains(&unit) {
                    // 高位代理必须紧跟 \uXXXX 低位代理
                    let low = tail
                        .get(5..7)
                        .filter(|s| *s == "\\u")
                        .map(|_| parse_hex_unit(flavor, tail, 7))
                        .transpose()?
                        .filter(|low| (0xDC00..0xE000).contains(low))
                        .ok_or_else(|| format_error(flavor, "unpaired high surrogate escape"))?;
                    let scalar =
                        0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                    let ch = char::from_u32(scalar)
                        .ok_or_else(|| format_error(flavor, "invalid surrogate pair escape"))?;
                    out.push(ch);
                    consumed += 6;
                } else if (0xDC00..0xE000).contains(&unit) {
                    return Err(format_error(flavor, "unpaired low surrogate escape"));
                } else {
                    let ch = char::from_u32(u32::from(unit))
                        .ok_or_else(|| format_error(flavor, "invalid unicode escape"))?;
                    out.push(ch);
                }
            }
            Some(b'n') => {
                out.push('\n');
                consumed += 1;
            }
            Some(b't') => {
                out.push('\t');
                consumed += 1;
            }
            Some(b'r') => {
                out.push('\r');
                consumed += 1;
            }
            Some(b'"') => {
                out.push('"');
                consumed += 1;
            }
            Some(b'/') => {
                out.push('/');
                consumed += 1;
            }
            Some(b'\\') => {
                out.push('\\');
                consumed += 1;
            }
            _ => {
                // 未知转义原样保留反斜杠
                out.push('\\');
            }
        }
        rest = &rest[pos + consumed..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Parse the 4 hex digits of a `\uXXXX` escape starting at byte `offset`
/// of `tail` (which begins right after the backslash).
fn parse_hex_unit(flavor: &str, tail: &str, offset: usize) -> Result<u16> {
    let digits = tail
        .get(offset..offset + 4)
        .ok_or_else(|| format_error(flavor, "truncated unicode escape"))?;
    u16::from_str_radix(digits, 16)
        .map_err(|_| format_error(flavor, format!("invalid unicode escape digits: {digits}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_format<T: std::fmt::Debug>(result: &Result<T>) -> bool {
        matches!(result, Err(TranslateError::Format { .. }))
    }

    // ---- decode_unicode_escapes ----

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(
            decode_unicode_escapes("smart-link", "hello world").unwrap(),
            "hello world"
        );
    }

    #[test]
    fn bmp_escapes_decoded() {
        assert_eq!(
            decode_unicode_escapes("smart-link", "C\\u1ea3m \\u01a1n").unwrap(),
            "Cảm ơn"
        );
        assert_eq!(
            decode_unicode_escapes("smart-link", "\\u003cb\\u003e").unwrap(),
            "<b>"
        );
    }

    #[test]
    fn surrogate_pair_escapes_decoded() {
        assert_eq!(
            decode_unicode_escapes("smart-link", "\\ud83d\\ude11").unwrap(),
            "😑"
        );
    }

    #[test]
    fn simple_escapes_decoded() {
        assert_eq!(
            decode_unicode_escapes("smart-link", r#"a\nb\tc\\d\"e"#).unwrap(),
            "a\nb\tc\\d\"e"
        );
    }

    #[test]
    fn unknown_escape_kept_literally() {
        assert_eq!(
            decode_unicode_escapes("smart-link", r"100\% sure").unwrap(),
            r"100\% sure"
        );
    }

    #[test]
    fn unpaired_high_surrogate_rejected() {
        assert!(is_format(&decode_unicode_escapes("smart-link", r"\ud83d!")));
    }

    #[test]
    fn unpaired_low_surrogate_rejected() {
        assert!(is_format(&decode_unicode_escapes("smart-link", r"\ude11")));
    }

    #[test]
    fn truncated_escape_rejected() {
        assert!(is_format(&decode_unicode_escapes("smart-link", r"\u00")));
    }

    // ---- decode_smart_link ----

    #[test]
    fn smart_link_decodes_and_splits() {
        let body = r"Cảm ơn bạn\ntạm biệt".as_bytes();
        let result = decode_smart_link("smart-link", body, "\n").unwrap();
        assert_eq!(
            result,
            vec!["Cảm ơn bạn".to_string(), "tạm biệt".to_string()]
        );
    }

    #[test]
    fn smart_link_plain_payload_single_item() {
        let result = decode_smart_link("smart-link", "xin ch\u{e0}o".as_bytes(), "\n").unwrap();
        assert_eq!(result, vec!["xin chào".to_string()]);
    }

    #[test]
    fn smart_link_rejects_empty_payload() {
        assert!(is_format(&decode_smart_link("smart-link", b"", "\n")));
        assert!(is_format(&decode_smart_link("smart-link", b"  \n ", "\n")));
    }

    // ---- decode_edge ----

    #[test]
    fn edge_extracts_translation_field() {
        let body = br#"{"translation":"xin chao\ntam biet"}"#;
        let result = decode_edge("edge", body, "\n").unwrap();
        assert_eq!(result, vec!["xin chao".to_string(), "tam biet".to_string()]);
    }

    #[test]
    fn edge_decodes_double_escaped_payload() {
        // 某些中转会把非 ASCII 再转义一次
        let body = br#"{"translation":"C\\u1ea3m \\u01a1n"}"#;
        let result = decode_edge("edge", body, "\n").unwrap();
        assert_eq!(result, vec!["Cảm ơn".to_string()]);
    }

    #[test]
    fn edge_rejects_missing_field() {
        assert!(is_format(&decode_edge("edge", br#"{"other":1}"#, "\n")));
    }

    #[test]
    fn edge_rejects_empty_translation() {
        assert!(is_format(&decode_edge(
            "edge",
            br#"{"translation":""}"#,
            "\n"
        )));
    }
}
