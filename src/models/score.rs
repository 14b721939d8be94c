//! Country Instability Index score parsing.

/// Parse the `s` query parameter.
///
/// Absent or empty input yields `None`. Otherwise the leading integer is
/// taken: leading whitespace is skipped, an optional sign is accepted and
/// parsing stops at the first non-digit, so `"78abc"` is 78. Input with no
/// leading digits is treated the same as an absent score. Out-of-range
/// values saturate.
pub fn parse_score(raw: Option<&str>) -> Option<i64> {
    let raw = raw.filter(|s| !s.is_empty())?;
    let trimmed = raw.trim_start();

    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }

    seen_digit.then_some(value)
}
