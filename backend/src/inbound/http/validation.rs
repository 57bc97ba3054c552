//! Request-shape validation helpers shared by the handlers.
//!
//! Presence checks follow the original JSON contract: a field is "missing"
//! when it is absent or an empty string, and `maxPoints` additionally counts
//! `0`, `null`, and `false` as missing. Values that pass the presence check
//! are still stored without range or format validation.

use serde_json::Value;

use crate::domain::Error;

/// Require a non-empty string field, rejecting with the given message.
pub fn required(field: Option<String>, message: &str) -> Result<String, Error> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::invalid_request(message)),
    }
}

/// Whether a free-typed JSON field counts as absent for the presence check:
/// missing, `null`, `false`, `0`, or the empty string.
pub fn value_is_blank(field: Option<&Value>) -> bool {
    match field {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => false,
    }
}

/// Lenient integer parse with `parseInt` semantics: numbers truncate toward
/// zero, strings yield their leading optionally-signed digit run (or hex run
/// after an `0x` prefix), and anything without an integer prefix yields
/// `None` (persisted as `null`). No bounds are checked; zero and negatives
/// pass through untouched. String digit runs whose magnitude exceeds `i64`
/// yield `None`.
pub fn parse_points(field: &Value) -> Option<i64> {
    match field {
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?;
            // Numeric input is parsed via its rendered string, and
            // magnitudes outside [1e-6, 1e21) render in exponent form, so
            // only the mantissa's integer digits survive: 1.5e21 reads as 1.
            if f != 0.0 && (f.abs() >= 1e21 || f.abs() < 1e-6) {
                parse_int_prefix(&format!("{f:e}"))
            } else {
                Some(f.trunc() as i64)
            }
        }),
        Value::String(s) => parse_int_prefix(s),
        _ => None,
    }
}

fn parse_int_prefix(s: &str) -> Option<i64> {
    let trimmed = s.trim_start();
    let (negative, rest) = match trimmed.strip_prefix(['-', '+']) {
        Some(rest) => (trimmed.starts_with('-'), rest),
        None => (false, trimmed),
    };
    let magnitude: i64 = if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        let digits: String = hex.chars().take_while(char::is_ascii_hexdigit).collect();
        i64::from_str_radix(&digits, 16).ok()?
    } else {
        let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
        digits.parse().ok()?
    };
    Some(if negative { -magnitude } else { magnitude })
}
