use crate::compat::{String, ToString};
use crate::error::{ParseError, Result};

/// Check if 4 bytes match "xn--" (case insensitive)
fn is_punycode_prefix(slice: &[u8]) -> bool {
    slice.len() >= 4
        && matches!(slice[0], b'x' | b'X')
        && matches!(slice[1], b'n' | b'N')
        && slice[2] == b'-'
        && slice[3] == b'-'
}

/// Check if domain contains Punycode (xn-- prefix, case insensitive)
pub fn has_punycode(domain: &str) -> bool {
    let bytes = domain.as_bytes();
    if bytes.len() < 4 {
        return false;
    }

    if is_punycode_prefix(bytes) {
        return true;
    }

    memchr::memchr_iter(b'.', bytes).any(|pos| is_punycode_prefix(&bytes[pos + 1..]))
}

/// Run the UTS #46 `ToASCII` mapping used by URL host parsing.
///
/// Plain ASCII labels only need lowercasing; Unicode input and existing
/// `xn--` labels go through full IDNA processing. Forbidden domain code
/// points are checked by the caller.
pub fn domain_to_ascii(domain: &str) -> Result<String> {
    if domain.is_ascii() && !has_punycode(domain) {
        return Ok(domain.to_ascii_lowercase());
    }

    idna::domain_to_ascii(domain).map_err(|_| ParseError::InvalidHost)
}

/// Convert a (possibly punycoded) domain to Unicode for display.
/// Labels that fail to decode are left as they were.
pub fn domain_to_unicode(domain: &str) -> String {
    if domain.is_ascii() && !has_punycode(domain) {
        return domain.to_ascii_lowercase();
    }

    let (unicode, result) = idna::domain_to_unicode(domain);
    if result.is_err() {
        tracing::debug!(domain, "IDNA errors while converting domain to Unicode");
    }
    if unicode.is_empty() {
        domain.to_string()
    } else {
        unicode
    }
}
