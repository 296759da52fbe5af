//! Lenient string-to-integer coercion used by the forms.
//!
//! Mirrors leading-integer parsing: optional surrounding whitespace, an
//! optional sign, then as many decimal digits as are present. Anything
//! after the digits is ignored. Input with no leading digits is "not a
//! number" and yields `None`; it is never an error.

/// Parse the leading base-10 integer of `input`.
///
/// ```
/// use tamare_core::coerce::parse_int;
///
/// assert_eq!(parse_int("45"), Some(45));
/// assert_eq!(parse_int(" 12 años"), Some(12));
/// assert_eq!(parse_int("-3"), Some(-3));
/// assert_eq!(parse_int("abc"), None);
/// assert_eq!(parse_int(""), None);
/// ```
pub fn parse_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        // Values outside i64 are treated as not a number.
        value = value
            .checked_mul(10)?
            .checked_add(i64::from(b - b'0'))?;
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}
