//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by the
//! CRUD handlers. SQLite TEXT has no built-in length enforcement.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Person names
pub const MAX_NAME_LEN: usize = 200;

/// Notes (observações)
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Largest integer an `f64` represents exactly (2^53)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub const MSG_INVALID_ID: &str = "ID inválido";

// ── Path parameters ─────────────────────────────────────────────────

/// Parse a numeric `{id}` path segment.
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::invalid_request(MSG_INVALID_ID))
}

// ── Text fields ─────────────────────────────────────────────────────

/// A text field is missing when absent or blank.
pub fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

/// `local@domain.tld`, no whitespace, exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate that a string is within the length limit.
pub fn validate_max_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} excede o tamanho máximo ({len} caracteres, máximo {max_len})"
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_max_len(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        validate_max_len(v, field, max_len)?;
    }
    Ok(())
}

/// Blank optional text is stored as NULL.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ── Loose numeric fields ────────────────────────────────────────────

/// A loosely-typed field is missing when absent, `null` or a blank string.
pub fn is_missing(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// The string inside a loosely-typed field, untrimmed.
pub fn as_text(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str)
}

/// Read an integer from a JSON number or a numeric string.
///
/// Integral floats (`4.0`, `"4.0"`) are accepted; fractions, booleans,
/// arrays and objects are not.
pub fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral_f64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral_f64))
        }
        _ => None,
    }
}

/// Read a strictly positive integer, see [`parse_integer`].
pub fn parse_positive_integer(value: &Value) -> Option<i64> {
    parse_integer(value).filter(|n| *n > 0)
}

fn integral_f64(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
        Some(f as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
        assert_eq!(parse_id("-3").unwrap(), -3);

        for bad in ["abc", "", "1.5", "12abc", "0x10"] {
            let err = parse_id(bad).unwrap_err();
            assert_eq!(err.message, MSG_INVALID_ID, "{bad:?}");
            assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(&None));
        assert!(is_blank(&Some(String::new())));
        assert!(is_blank(&Some("   ".into())));
        assert!(!is_blank(&Some("João".into())));
    }

    #[test]
    fn test_email_pattern() {
        for ok in ["joao@email.com", "a.b+c@sub.domain.com.br", "x@y.z"] {
            assert!(is_valid_email(ok), "{ok} should be valid");
        }
        for bad in [
            "email-invalido",
            "joao@email",
            "joao@@email.com",
            "jo ao@email.com",
            "@email.com",
            "joao@.com",
            "joao@email.",
            "",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn test_validate_max_len_counts_chars() {
        assert!(validate_max_len("ção", "Nome", 3).is_ok());
        let err = validate_max_len("abcd", "Nome", 3).unwrap_err();
        assert!(err.message.starts_with("Nome excede o tamanho máximo"));
        assert!(validate_optional_max_len(&None, "Endereço", 1).is_ok());
        assert!(validate_optional_max_len(&Some("ab".into()), "Endereço", 1).is_err());
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(Some("  ".into())), None);
        assert_eq!(normalize_optional(Some("Rua A".into())), Some("Rua A".into()));
        assert_eq!(normalize_optional(None), None);
    }

    #[test]
    fn test_is_missing() {
        assert!(is_missing(&None));
        assert!(is_missing(&Some(Value::Null)));
        assert!(is_missing(&Some(json!(""))));
        assert!(is_missing(&Some(json!("  "))));
        assert!(!is_missing(&Some(json!(0))));
        assert!(!is_missing(&Some(json!("abc"))));
        assert!(!is_missing(&Some(json!(false))));
    }

    #[test]
    fn test_as_text() {
        assert_eq!(as_text(Some(&json!(" 19:30 "))), Some(" 19:30 "));
        assert_eq!(as_text(Some(&json!(1930))), None);
        assert_eq!(as_text(None), None);
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer(&json!(5)), Some(5));
        assert_eq!(parse_integer(&json!(-5)), Some(-5));
        assert_eq!(parse_integer(&json!(4.0)), Some(4));
        assert_eq!(parse_integer(&json!("12")), Some(12));
        assert_eq!(parse_integer(&json!(" 12 ")), Some(12));
        assert_eq!(parse_integer(&json!("3.0")), Some(3));

        assert_eq!(parse_integer(&json!(2.5)), None);
        assert_eq!(parse_integer(&json!("abc")), None);
        assert_eq!(parse_integer(&json!("NaN")), None);
        assert_eq!(parse_integer(&json!(true)), None);
        assert_eq!(parse_integer(&json!([1])), None);
        assert_eq!(parse_integer(&json!(u64::MAX)), None);
    }

    #[test]
    fn test_parse_positive_integer() {
        assert_eq!(parse_positive_integer(&json!(1)), Some(1));
        assert_eq!(parse_positive_integer(&json!("20")), Some(20));
        assert_eq!(parse_positive_integer(&json!(0)), None);
        assert_eq!(parse_positive_integer(&json!(-1)), None);
        assert_eq!(parse_positive_integer(&json!("-2")), None);
    }
}
