//! Lenient numeric parsing for settings values.
//!
//! Settings are stored as strings and edited without validation, so the
//! numeric fields are read the forgiving way: leading whitespace is skipped
//! and the longest numeric prefix wins (`"2048 tokens"` reads as 2048).
//! Input with no numeric prefix yields `None`.

/// Parse the leading base-10 integer of `s`.
#[must_use]
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    s.get(..end)?.parse().ok()
}

/// Parse the leading decimal floating point number of `s`.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent. `Infinity` is recognised with an optional sign.
#[must_use]
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s.get(end..).is_some_and(|rest| rest.starts_with("Infinity")) {
        return s.get(..end + "Infinity".len())?.parse().ok();
    }

    let mut mantissa_digits = 0;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
        mantissa_digits += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        let mut frac_end = end + 1;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
            mantissa_digits += 1;
        }
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s.get(..end)?.parse().ok()
}
