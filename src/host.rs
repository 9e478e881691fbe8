use crate::character_sets::{is_forbidden_domain_code_point, is_forbidden_host_code_point};
use crate::checkers::ends_in_a_number;
use crate::compat::String;
use crate::error::{ParseError, Result, ValidationError};
use crate::ipv4::{parse_ipv4, serialize_ipv4};
use crate::ipv6::{parse_ipv6, serialize_ipv6};
use crate::options::Reporter;
use crate::unicode::idna::domain_to_ascii;
use crate::unicode::percent_encode::{
    C0_CONTROL_SET, has_invalid_percent_escape, percent_decode_bytes, percent_encode,
};

/// The network location of a URL.
///
/// The empty host (as in `file:///tmp`) is a `Domain` holding the empty
/// string, or an `Opaque` one for non-special schemes such as `foo:///x`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Host {
    /// ASCII, lowercase domain after IDNA processing
    Domain(String),
    /// IPv4 address, most significant byte first
    Ipv4(u32),
    /// The eight 16-bit pieces of an IPv6 address
    Ipv6([u16; 8]),
    /// Percent-encoded host of a non-special URL
    Opaque(String),
}

impl Host {
    /// Run the host parser on `input`.
    ///
    /// `is_opaque` selects the opaque-host rules used by non-special schemes.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidHost`] for malformed IP literals,
    /// forbidden code points or IDNA failures.
    pub fn parse(input: &str, is_opaque: bool) -> Result<Self> {
        Self::parse_with(input, is_opaque, Reporter::default())
    }

    pub(crate) fn parse_with(input: &str, is_opaque: bool, reporter: Reporter<'_>) -> Result<Self> {
        if let Some(rest) = input.strip_prefix('[') {
            let address = rest.strip_suffix(']').ok_or(ParseError::InvalidHost)?;
            return parse_ipv6(address).map(Host::Ipv6);
        }

        if is_opaque {
            return parse_opaque_host(input, reporter);
        }

        if has_invalid_percent_escape(input) {
            reporter.report(ValidationError::InvalidPercentEncoding);
        }
        let decoded = percent_decode_bytes(input);
        let domain = String::from_utf8_lossy(&decoded);

        let ascii_domain = domain_to_ascii(&domain)?;
        if ascii_domain.is_empty() || ascii_domain.chars().any(is_forbidden_domain_code_point) {
            return Err(ParseError::InvalidHost);
        }

        if ends_in_a_number(&ascii_domain) {
            return parse_ipv4(&ascii_domain, reporter).map(Host::Ipv4);
        }

        Ok(Host::Domain(ascii_domain))
    }

    /// Whether this is the empty host
    pub fn is_empty(&self) -> bool {
        match self {
            Host::Domain(s) | Host::Opaque(s) => s.is_empty(),
            Host::Ipv4(_) | Host::Ipv6(_) => false,
        }
    }

    /// The empty host for a scheme
    pub(crate) fn empty(special: bool) -> Self {
        if special {
            Host::Domain(String::new())
        } else {
            Host::Opaque(String::new())
        }
    }
}

fn parse_opaque_host(input: &str, reporter: Reporter<'_>) -> Result<Host> {
    if input.chars().any(is_forbidden_host_code_point) {
        return Err(ParseError::InvalidHost);
    }
    if has_invalid_percent_escape(input) {
        reporter.report(ValidationError::InvalidPercentEncoding);
    }
    Ok(Host::Opaque(percent_encode(input, C0_CONTROL_SET).into_owned()))
}

impl core::fmt::Display for Host {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Host::Domain(domain) => f.write_str(domain),
            Host::Opaque(host) => f.write_str(host),
            Host::Ipv4(address) => f.write_str(&serialize_ipv4(*address)),
            Host::Ipv6(pieces) => f.write_str(&serialize_ipv6(pieces)),
        }
    }
}
