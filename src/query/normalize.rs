//! Comparison keys for free-text labels.

/// Lowercase `s` and drop every whitespace character.
///
/// `"Latin America"`, `"latin america"` and `"LatinAmerica"` all map to
/// `"latinamerica"`.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Parse a year path segment the lenient way.
///
/// Leading whitespace and an optional sign are accepted. A `0x`/`0X` prefix
/// switches to hexadecimal. Then the longest run of digits in that radix is
/// read and anything after it is ignored. Returns `None` when there are no
/// digits or the value overflows, which callers treat as "no match".
pub fn parse_year(segment: &str) -> Option<i64> {
    let rest = segment.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits = rest
        .bytes()
        .take_while(|b| char::from(*b).is_digit(radix))
        .count();
    if digits == 0 {
        return None;
    }

    let value = i64::from_str_radix(&rest[..digits], radix).ok()?;
    Some(if negative { -value } else { value })
}
