//! Lenient number parsing for values read back from the DOM.

/// Read the leading base-10 integer of `raw`, the way a browser `parseInt` does.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit. Returns `None` when there is no digit to read or the value does
/// not fit an `i64`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_padded() {
        assert_eq!(parse_leading_int("4"), Some(4));
        assert_eq!(parse_leading_int("  12"), Some(12));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
    }

    #[test]
    fn test_stops_at_first_non_digit() {
        assert_eq!(parse_leading_int("3 pcs"), Some(3));
        assert_eq!(parse_leading_int("2.9"), Some(2));
        assert_eq!(parse_leading_int("1e3"), Some(1));
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999999999999"), None);
    }
}
