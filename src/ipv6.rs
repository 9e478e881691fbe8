/// IPv6 address parsing and serialization
/// Implements the WHATWG piece-by-piece algorithm
use crate::compat::String;
use crate::error::{ParseError, Result};
use core::fmt::Write;

/// Parse the text between the brackets of an IPv6 host (e.g. `::1` or
/// `2001:db8::1` or `::ffff:192.168.1.1`) into its eight pieces.
pub fn parse_ipv6(input: &str) -> Result<[u16; 8]> {
    let input = input.as_bytes();
    let at = |i: usize| input.get(i).copied();

    let mut address = [0u16; 8];
    let mut piece_index = 0usize;
    let mut compress: Option<usize> = None;
    let mut pointer = 0usize;

    if at(0) == Some(b':') {
        if at(1) != Some(b':') {
            return Err(ParseError::InvalidHost);
        }
        pointer += 2;
        piece_index += 1;
        compress = Some(piece_index);
    }

    while let Some(c) = at(pointer) {
        if piece_index == 8 {
            return Err(ParseError::InvalidHost);
        }

        if c == b':' {
            if compress.is_some() {
                return Err(ParseError::InvalidHost);
            }
            pointer += 1;
            piece_index += 1;
            compress = Some(piece_index);
            continue;
        }

        let mut value: u16 = 0;
        let mut length = 0;
        while length < 4 {
            let Some(digit) = at(pointer).and_then(|b| (b as char).to_digit(16)) else {
                break;
            };
            value = value * 0x10 + digit as u16;
            pointer += 1;
            length += 1;
        }

        match at(pointer) {
            Some(b'.') => {
                if length == 0 || piece_index > 6 {
                    return Err(ParseError::InvalidHost);
                }
                pointer -= length;
                parse_embedded_ipv4(input, pointer, &mut address, piece_index)?;
                piece_index += 2;
                break;
            }
            Some(b':') => {
                pointer += 1;
                if at(pointer).is_none() {
                    return Err(ParseError::InvalidHost);
                }
            }
            Some(_) => return Err(ParseError::InvalidHost),
            None => {}
        }

        address[piece_index] = value;
        piece_index += 1;
    }

    if let Some(compress) = compress {
        let mut swaps = piece_index - compress;
        piece_index = 7;
        while piece_index != 0 && swaps > 0 {
            address.swap(piece_index, compress + swaps - 1);
            piece_index -= 1;
            swaps -= 1;
        }
    } else if piece_index != 8 {
        return Err(ParseError::InvalidHost);
    }

    Ok(address)
}

/// Parse a trailing dotted quad into `address[piece_index..piece_index + 2]`.
/// Consumes the rest of the input.
fn parse_embedded_ipv4(
    input: &[u8],
    mut pointer: usize,
    address: &mut [u16; 8],
    mut piece_index: usize,
) -> Result<()> {
    let mut numbers_seen = 0;

    while let Some(&c) = input.get(pointer) {
        if numbers_seen > 0 {
            if c == b'.' && numbers_seen < 4 {
                pointer += 1;
            } else {
                return Err(ParseError::InvalidHost);
            }
        }

        if !input.get(pointer).is_some_and(u8::is_ascii_digit) {
            return Err(ParseError::InvalidHost);
        }

        let mut ipv4_piece: Option<u16> = None;
        while let Some(&d) = input.get(pointer).filter(|d| d.is_ascii_digit()) {
            let number = u16::from(d - b'0');
            ipv4_piece = match ipv4_piece {
                None => Some(number),
                // No leading zeros
                Some(0) => return Err(ParseError::InvalidHost),
                Some(piece) => Some(piece * 10 + number),
            };
            if ipv4_piece.is_some_and(|piece| piece > 255) {
                return Err(ParseError::InvalidHost);
            }
            pointer += 1;
        }

        address[piece_index] = address[piece_index] * 0x100 + ipv4_piece.unwrap_or(0);
        numbers_seen += 1;
        if numbers_seen == 2 || numbers_seen == 4 {
            piece_index += 1;
        }
    }

    if numbers_seen != 4 {
        return Err(ParseError::InvalidHost);
    }

    Ok(())
}

/// Serialize IPv6 pieces with `::` compression, including the brackets.
pub fn serialize_ipv6(segments: &[u16; 8]) -> String {
    let (compress_start, compress_len) = find_longest_zero_sequence(segments);

    let mut result = String::with_capacity(41);
    result.push('[');

    // Only compress sequences of 2+ zeros
    let compress_range = compress_start
        .filter(|_| compress_len > 1)
        .map(|start| start..start + compress_len);

    let mut i = 0;
    while i < 8 {
        if let Some(ref range) = compress_range
            && range.start == i
        {
            result.push_str("::");
            i = range.end;
            continue;
        }

        if i > 0 && !result.ends_with("::") {
            result.push(':');
        }

        let _ = write!(&mut result, "{:x}", segments[i]);
        i += 1;
    }

    result.push(']');
    result
}

/// First longest run of zero pieces as (start, length).
fn find_longest_zero_sequence(segments: &[u16; 8]) -> (Option<usize>, usize) {
    let mut best_start: Option<usize> = None;
    let mut best_len = 0;
    let mut current_start: Option<usize> = None;
    let mut current_len = 0;

    for (i, &segment) in segments.iter().enumerate() {
        if segment == 0 {
            if current_start.is_none() {
                current_start = Some(i);
                current_len = 1;
            } else {
                current_len += 1;
            }
            if current_len > best_len {
                best_start = current_start;
                best_len = current_len;
            }
        } else {
            current_start = None;
            current_len = 0;
        }
    }

    (best_start, best_len)
}
