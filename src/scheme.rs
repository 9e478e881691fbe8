use crate::types::SchemeType;

/// Classify an already-lowercased scheme.
/// Matches on length and first byte before comparing the full scheme.
pub fn get_scheme_type(scheme: &str) -> SchemeType {
    let bytes = scheme.as_bytes();

    match (bytes.len(), bytes.first()) {
        (2, Some(b'w')) if bytes == b"ws" => SchemeType::Ws,
        (3, Some(b'w')) if bytes == b"wss" => SchemeType::Wss,
        (3, Some(b'f')) if bytes == b"ftp" => SchemeType::Ftp,
        (4, Some(b'h')) if bytes == b"http" => SchemeType::Http,
        (4, Some(b'f')) if bytes == b"file" => SchemeType::File,
        (5, Some(b'h')) if bytes == b"https" => SchemeType::Https,
        _ => SchemeType::NotSpecial,
    }
}

/// Default port of a special scheme, `None` for everything else
pub fn default_port(scheme: &str) -> Option<u16> {
    get_scheme_type(scheme).default_port()
}

/// Whether `c` may appear after the first character of a scheme
pub fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_type() {
        assert_eq!(get_scheme_type("http"), SchemeType::Http);
        assert_eq!(get_scheme_type("https"), SchemeType::Https);
        assert_eq!(get_scheme_type("ws"), SchemeType::Ws);
        assert_eq!(get_scheme_type("wss"), SchemeType::Wss);
        assert_eq!(get_scheme_type("ftp"), SchemeType::Ftp);
        assert_eq!(get_scheme_type("file"), SchemeType::File);
        assert_eq!(get_scheme_type("custom"), SchemeType::NotSpecial);
        assert_eq!(get_scheme_type("HTTP"), SchemeType::NotSpecial);
    }

    #[test]
    fn test_default_port() {
        assert_eq!(default_port("http"), Some(80));
        assert_eq!(default_port("wss"), Some(443));
        assert_eq!(default_port("ftp"), Some(21));
        assert_eq!(default_port("file"), None);
        assert_eq!(default_port("gopher"), None);
    }

    #[test]
    fn test_scheme_chars() {
        assert!(is_scheme_char('a'));
        assert!(is_scheme_char('9'));
        assert!(is_scheme_char('+'));
        assert!(!is_scheme_char('!'));
        assert!(!is_scheme_char(':'));
    }
}
