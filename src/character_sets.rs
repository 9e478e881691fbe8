/// Check if a character is an ASCII tab or newline
pub fn is_ascii_tab_or_newline(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
}

/// Check if a character is a C0 control or space
pub fn is_c0_control_or_space(c: char) -> bool {
    c <= ' '
}

/// URL code points: ASCII alphanumerics, a fixed set of punctuation, and
/// non-ASCII scalar values that are not noncharacters
pub fn is_url_code_point(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric() || "!$&'()*+,-./:;=?@_~".contains(c);
    }
    let value = u32::from(c);
    value >= 0xA0 && !(0xFDD0..=0xFDEF).contains(&value) && value & 0xFFFE != 0xFFFE
}

/// Byte classes for host validation.
/// Bit 0: forbidden host code point. Bit 1: forbidden domain code point.
const HOST_CHAR_TABLE: [u8; 128] = {
    let mut table = [0u8; 128];

    // C0 controls and DEL are forbidden in domains only
    let mut i = 0;
    while i < 0x20 {
        table[i] = 2;
        i += 1;
    }
    table[0x7F] = 2;
    table[b'%' as usize] = 2;

    let forbidden_host = b"\0\t\n\r #/:<>?@[\\]^|";
    let mut i = 0;
    while i < forbidden_host.len() {
        table[forbidden_host[i] as usize] = 3;
        i += 1;
    }

    table
};

/// Forbidden host code point (opaque hosts)
pub fn is_forbidden_host_code_point(c: char) -> bool {
    c.is_ascii() && HOST_CHAR_TABLE[c as usize] & 1 != 0
}

/// Forbidden domain code point (domains after IDNA processing)
pub fn is_forbidden_domain_code_point(c: char) -> bool {
    c.is_ascii() && HOST_CHAR_TABLE[c as usize] != 0
}
