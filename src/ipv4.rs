/// IPv4 address parser supporting decimal, octal, and hexadecimal notation
/// Based on WHATWG URL specification
use crate::compat::{String, Vec, format};
use crate::error::{ParseError, Result, ValidationError};
use crate::options::Reporter;

/// Parse an IPv4 host string into a u32.
/// Supports:
/// - Decimal: 192.168.1.1
/// - Hex: 0xC0A80101
/// - Octal: 0300.0250.01.01
/// - Shortened: 127.1, 0x7f.1
pub fn parse_ipv4(input: &str, reporter: Reporter<'_>) -> Result<u32> {
    let mut parts: Vec<&str> = input.split('.').collect();

    if parts.last().is_some_and(|last| last.is_empty()) {
        reporter.report(ValidationError::EmptyIpv4Part);
        if parts.len() > 1 {
            parts.pop();
        }
    }

    if parts.len() > 4 {
        return Err(ParseError::InvalidHost);
    }

    let mut numbers = Vec::with_capacity(parts.len());
    for part in &parts {
        let (number, non_decimal) = parse_ipv4_number(part).ok_or(ParseError::InvalidHost)?;
        if non_decimal {
            reporter.report(ValidationError::NonDecimalIpv4Part);
        }
        numbers.push(number);
    }

    let Some((&last, init)) = numbers.split_last() else {
        return Err(ParseError::InvalidHost);
    };

    if init.iter().any(|&n| n > 255) {
        return Err(ParseError::InvalidHost);
    }

    // Last number fills all bytes not covered by the preceding parts
    let limit = 256u64.pow((5 - numbers.len()) as u32);
    if last >= limit {
        return Err(ParseError::InvalidHost);
    }

    let mut ipv4 = last;
    for (i, &n) in init.iter().enumerate() {
        ipv4 += n << (8 * (3 - i));
    }

    Ok(ipv4 as u32)
}

/// Parse a single IPv4 number.
/// Returns the value (saturated at `u64::MAX`) and whether it was written
/// in a non-decimal radix, or `None` if the part is not a number.
pub fn parse_ipv4_number(input: &str) -> Option<(u64, bool)> {
    if input.is_empty() {
        return None;
    }

    let bytes = input.as_bytes();
    let (digits, radix) = if bytes.len() >= 2 && bytes[0] == b'0' && matches!(bytes[1], b'x' | b'X') {
        (&input[2..], 16)
    } else if bytes.len() >= 2 && bytes[0] == b'0' {
        (&input[1..], 8)
    } else {
        (input, 10)
    };

    if digits.is_empty() {
        return Some((0, radix != 10));
    }

    let mut value: u64 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(radix)?;
        value = value
            .saturating_mul(u64::from(radix))
            .saturating_add(u64::from(digit));
    }

    Some((value, radix != 10))
}

/// Serialize an IPv4 address (u32) to dotted decimal notation
pub fn serialize_ipv4(ipv4: u32) -> String {
    let [a, b, c, d] = ipv4.to_be_bytes();
    format!("{a}.{b}.{c}.{d}")
}
