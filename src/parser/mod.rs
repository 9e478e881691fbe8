mod state;
mod url_parser;

pub use state::State;
pub(crate) use url_parser::{parse as parse_record, parse_with_override};

use crate::error::Result;

/// Trait for types that can be parsed from URL strings
pub trait Parseable: Sized {
    /// Parse from input string with optional base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid URL.
    fn parse(input: &str, base: Option<&str>) -> Result<Self>;
}

/// Parse a URL string into a URL type
///
/// # Errors
///
/// Returns an error if the input is not a valid URL.
pub fn parse<T: Parseable>(input: &str, base: Option<&str>) -> Result<T> {
    T::parse(input, base)
}
