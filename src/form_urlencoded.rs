//! `application/x-www-form-urlencoded` parsing and serialization.

use crate::compat::{Cow, String, Vec};
use crate::unicode::percent_encode::{FORM_URLENCODED_SET, percent_decode_bytes};
use percent_encoding::utf8_percent_encode;

/// Split `input` into name/value pairs.
///
/// Empty sequences between `&` are skipped and a sequence without `=` gets
/// an empty value. `+` decodes to a space.
pub fn parse(input: &str) -> Vec<(String, String)> {
    input
        .split('&')
        .filter(|sequence| !sequence.is_empty())
        .map(|sequence| {
            let (name, value) = sequence.split_once('=').unwrap_or((sequence, ""));
            (decode(name), decode(value))
        })
        .collect()
}

/// Serialize pairs, joining names and values with `=` and pairs with `&`.
pub fn serialize<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut output = String::new();
    for (name, value) in pairs {
        if !output.is_empty() {
            output.push('&');
        }
        encode_into(&mut output, name.as_ref());
        output.push('=');
        encode_into(&mut output, value.as_ref());
    }
    output
}

fn encode_into(output: &mut String, input: &str) {
    for chunk in utf8_percent_encode(input, FORM_URLENCODED_SET) {
        // Each escape is its own chunk, so a space arrives alone
        if chunk == "%20" {
            output.push('+');
        } else {
            output.push_str(chunk);
        }
    }
}

/// Decode one name or value.
///
/// Tries the whole string first. When the decoded bytes are not UTF-8, only
/// the well-formed parts of each escape run are decoded and the rest is kept
/// in its original `%XX` form.
fn decode(input: &str) -> String {
    let input: Cow<'_, str> = if input.contains('+') {
        Cow::Owned(input.replace('+', " "))
    } else {
        Cow::Borrowed(input)
    };

    match String::from_utf8(percent_decode_bytes(&input)) {
        Ok(decoded) => decoded,
        Err(_) => decode_escape_runs(&input),
    }
}

fn decode_escape_runs(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut output = String::with_capacity(input.len());
    let mut i = 0;

    while i < bytes.len() {
        let run_start = i;
        let mut decoded = Vec::new();
        while let Some(byte) = escaped_byte(bytes, i) {
            decoded.push(byte);
            i += 3;
        }

        if decoded.is_empty() {
            let next = memchr::memchr(b'%', &bytes[i + 1..]).map_or(bytes.len(), |pos| i + 1 + pos);
            output.push_str(&input[i..next]);
            i = next;
            continue;
        }

        let run = &input[run_start..i];
        let mut offset = 0;
        for chunk in decoded.utf8_chunks() {
            output.push_str(chunk.valid());
            offset += chunk.valid().len();
            let invalid = chunk.invalid().len();
            output.push_str(&run[3 * offset..3 * (offset + invalid)]);
            offset += invalid;
        }
    }

    output
}

/// The byte encoded by a `%XX` triplet at `i`
fn escaped_byte(bytes: &[u8], i: usize) -> Option<u8> {
    if bytes.get(i) != Some(&b'%') {
        return None;
    }
    let high = (*bytes.get(i + 1)? as char).to_digit(16)?;
    let low = (*bytes.get(i + 2)? as char).to_digit(16)?;
    Some((high * 16 + low) as u8)
}
