//! Leading-prefix numeric conversion.
//!
//! Option values convert like C's `strtol`/`strtod` family, not like
//! `str::parse`: leading whitespace is skipped, the longest valid numeric
//! prefix is consumed, anything after it is ignored, and a value with no
//! numeric prefix at all converts to zero. Integer overflow clamps to the
//! destination's extremes rather than failing.
//!
//! One deliberate difference: a minus sign on an unsigned conversion yields
//! zero instead of wrapping around.

/// Parse a signed base-10 prefix, clamping on overflow.
pub fn parse_i64(text: &str) -> i64 {
    let bytes = text.trim_start().as_bytes();
    let mut i = 0;
    let mut negative = false;
    if let Some(&b) = bytes.first()
        && (b == b'+' || b == b'-')
    {
        negative = b == b'-';
        i = 1;
    }

    // Accumulate on the negative side so i64::MIN is representable.
    let mut value: i64 = 0;
    while let Some(&b) = bytes.get(i) {
        if !b.is_ascii_digit() {
            break;
        }
        let digit = i64::from(b - b'0');
        value = if negative {
            value
                .checked_mul(10)
                .and_then(|v| v.checked_sub(digit))
                .unwrap_or(i64::MIN)
        } else {
            value
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .unwrap_or(i64::MAX)
        };
        i += 1;
    }
    value
}

/// Parse an unsigned base-10 prefix, clamping on overflow.
pub fn parse_u64(text: &str) -> u64 {
    let bytes = text.trim_start().as_bytes();
    let mut i = 0;
    match bytes.first() {
        Some(b'+') => i = 1,
        Some(b'-') => return 0,
        _ => {}
    }

    let mut value: u64 = 0;
    while let Some(&b) = bytes.get(i) {
        if !b.is_ascii_digit() {
            break;
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
            .unwrap_or(u64::MAX);
        i += 1;
    }
    value
}

/// Parse a decimal floating-point prefix (`[+-]digits[.digits][e[+-]digits]`).
///
/// The exponent is only consumed when it carries at least one digit, so
/// `"1e"` converts to `1.0`. Named forms like `inf` are not recognized.
pub fn parse_f64(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i = 1;
    }

    let mut saw_digit = false;
    while bytes.get(i).is_some_and(|b| b.is_ascii_digit()) {
        i += 1;
        saw_digit = true;
    }
    if bytes.get(i) == Some(&b'.') {
        let mut j = i + 1;
        while bytes.get(j).is_some_and(|b| b.is_ascii_digit()) {
            j += 1;
            saw_digit = true;
        }
        i = j;
    }
    if !saw_digit {
        return 0.0;
    }

    let mut end = i;
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exponent_start = j;
        while bytes.get(j).is_some_and(|b| b.is_ascii_digit()) {
            j += 1;
        }
        if j > exponent_start {
            end = j;
        }
    }
    s[..end].parse().unwrap_or(0.0)
}
