use crate::compat::{Cow, String, Vec};
use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC, utf8_percent_encode};

// Encode sets following the WHATWG URL standard
// https://url.spec.whatwg.org/#percent-encoded-bytes

/// C0 control percent-encode set (opaque hosts and opaque paths)
pub const C0_CONTROL_SET: &AsciiSet = CONTROLS;

/// Fragment percent-encode set
/// C0 control + space, ", <, >, \`
pub const FRAGMENT_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Path percent-encode set
/// Fragment + #, ?, {, }
pub const PATH_SET: &AsciiSet = &FRAGMENT_SET.add(b'#').add(b'?').add(b'{').add(b'}');

/// Userinfo percent-encode set
/// Path + /, :, ;, =, @, [, \, ], ^, |
pub const USERINFO_SET: &AsciiSet = &PATH_SET
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'|');

/// Query percent-encode set (for non-special URLs)
/// C0 control + space, ", #, <, >
pub const QUERY_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>');

/// Special query percent-encode set (http, https, ws, wss, ftp, file)
/// Query + '
pub const SPECIAL_QUERY_SET: &AsciiSet = &QUERY_SET.add(b'\'');

/// application/x-www-form-urlencoded percent-encode set.
/// Everything except ASCII alphanumerics and `*`, `-`, `.`, `_`.
/// Space is handled separately by the form serializer.
pub const FORM_URLENCODED_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Write percent-encoded string directly to buffer
pub fn percent_encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    buffer.reserve(input.len());

    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Percent-encode a string, borrowing when nothing needs escaping
pub fn percent_encode<'a>(input: &'a str, encode_set: &'static AsciiSet) -> Cow<'a, str> {
    utf8_percent_encode(input, encode_set).into()
}

/// Decode every `%XX` escape to its byte; malformed escapes are kept literally
pub fn percent_decode_bytes(input: &str) -> Vec<u8> {
    percent_encoding::percent_decode_str(input).collect()
}

/// Decode percent escapes and interpret the bytes as UTF-8, replacing
/// invalid sequences with U+FFFD
pub fn percent_decode_lossy(input: &str) -> String {
    percent_encoding::percent_decode_str(input)
        .decode_utf8_lossy()
        .into_owned()
}

/// Whether `input` contains a `%` not followed by two hex digits
pub fn has_invalid_percent_escape(input: &str) -> bool {
    let bytes = input.as_bytes();
    memchr::memchr_iter(b'%', bytes).any(|pos| {
        !(bytes.get(pos + 1).is_some_and(u8::is_ascii_hexdigit)
            && bytes.get(pos + 2).is_some_and(u8::is_ascii_hexdigit))
    })
}
