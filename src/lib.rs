//! WHATWG URL parsing, serialization and query string handling.
//!
//! ```
//! use urlengine::Url;
//!
//! let mut url = Url::parse("https://EXAMPLE.com:443/a/./b/../c?x=1#top", None).unwrap();
//! assert_eq!(url.href(), "https://example.com/a/c?x=1#top");
//!
//! url.search_params_mut().append("y", "2 3");
//! assert_eq!(url.search(), "?x=1&y=2+3");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod file_path;
mod helpers;
mod host;
mod ipv4;
mod ipv6;
mod options;
mod parser;
mod scheme;
mod types;
mod unicode;
mod url;
mod url_components;
mod url_record;
mod url_search_params;

pub mod form_urlencoded;

// Public API
pub use error::{FilePathError, ParseError, Result, SearchParamsError, ValidationError};
pub use file_path::{PathStyle, domain_to_ascii, domain_to_unicode, file_url_to_path, path_to_file_url};
pub use host::Host;
pub use options::ParseOptions;
pub use parser::{Parseable, parse};
pub use url::{SearchParamsMut, Url};
pub use url_record::{Origin, UrlRecord};
pub use url_search_params::UrlSearchParams;
