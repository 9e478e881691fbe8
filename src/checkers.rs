use crate::ipv4::parse_ipv4_number;

/// Whether a host string must be handed to the IPv4 parser.
/// True when the last non-empty label is all digits or a hex number.
pub fn ends_in_a_number(input: &str) -> bool {
    let input = match input.strip_suffix('.') {
        Some("") => return false,
        Some(rest) => rest,
        None => input,
    };

    let last = input.rsplit('.').next().unwrap_or(input);

    if !last.is_empty() && last.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }

    parse_ipv4_number(last).is_some()
}

/// Two code points: an ASCII alpha followed by `:` or `|`
pub fn is_windows_drive_letter(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && matches!(bytes[1], b':' | b'|')
}

/// A Windows drive letter whose second code point is `:`
pub fn is_normalized_windows_drive_letter(segment: &str) -> bool {
    is_windows_drive_letter(segment) && segment.as_bytes()[1] == b':'
}

/// Whether the remaining input starts with a drive letter followed by a
/// path terminator (or nothing at all).
pub fn starts_with_windows_drive_letter(rest: &[char]) -> bool {
    if rest.len() < 2 {
        return false;
    }
    if !rest[0].is_ascii_alphabetic() || !matches!(rest[1], ':' | '|') {
        return false;
    }
    rest.len() == 2 || matches!(rest[2], '/' | '\\' | '?' | '#')
}

/// `.` or `%2e`, case-insensitive
pub fn is_single_dot_segment(segment: &str) -> bool {
    segment == "." || segment.eq_ignore_ascii_case("%2e")
}

/// `..` and its percent-encoded spellings, case-insensitive
pub fn is_double_dot_segment(segment: &str) -> bool {
    match segment.len() {
        2 => segment == "..",
        4 => segment.eq_ignore_ascii_case(".%2e") || segment.eq_ignore_ascii_case("%2e."),
        6 => segment.eq_ignore_ascii_case("%2e%2e"),
        _ => false,
    }
}
