use crate::checkers::is_normalized_windows_drive_letter;
use crate::compat::{String, ToString, Vec, format};
use crate::error::Result;
use crate::host::Host;
use crate::options::Reporter;
use crate::parser::parse_record;
use crate::scheme::get_scheme_type;
use crate::types::SchemeType;
use crate::url_components::UrlComponents;
use core::fmt::Write;

/// A parsed URL, field by field.
///
/// Path segments, username, password, query and fragment are stored
/// percent-encoded, exactly as they serialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UrlRecord {
    pub(crate) scheme: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) host: Option<Host>,
    pub(crate) port: Option<u16>,
    pub(crate) path: Vec<String>,
    pub(crate) query: Option<String>,
    pub(crate) fragment: Option<String>,
    pub(crate) cannot_be_a_base: bool,
}

impl UrlRecord {
    /// Run the basic URL parser.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid according to the WHATWG URL Standard.
    pub fn parse(input: &str, base: Option<&UrlRecord>) -> Result<Self> {
        parse_record(input, base, Reporter::default())
    }

    /// Lowercase scheme without the trailing `:`
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn host(&self) -> Option<&Host> {
        self.host.as_ref()
    }

    /// Explicit port; `None` when absent or equal to the scheme default
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Path segments, or the single opaque path for cannot-be-a-base URLs
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn cannot_be_a_base(&self) -> bool {
        self.cannot_be_a_base
    }

    pub(crate) fn scheme_type(&self) -> SchemeType {
        get_scheme_type(&self.scheme)
    }

    pub fn is_special(&self) -> bool {
        self.scheme_type().is_special()
    }

    pub fn includes_credentials(&self) -> bool {
        !self.username.is_empty() || !self.password.is_empty()
    }

    /// No host, an empty host, or the `file` scheme
    pub fn cannot_have_username_password_port(&self) -> bool {
        self.host.as_ref().is_none_or(Host::is_empty) || self.scheme_type().is_file()
    }

    /// A `file` URL whose first path segment is a drive letter such as `C:`
    pub(crate) fn has_drive_letter_path(&self) -> bool {
        self.scheme_type().is_file()
            && self.path.first().is_some_and(|segment| is_normalized_windows_drive_letter(segment))
    }

    /// Remove the last path segment, keeping a lone `file` drive letter
    pub(crate) fn shorten_path(&mut self) {
        if self.scheme_type().is_file()
            && self.path.len() == 1
            && is_normalized_windows_drive_letter(&self.path[0])
        {
            return;
        }
        self.path.pop();
    }

    pub(crate) fn copy_authority_from(&mut self, base: &UrlRecord) {
        self.username.clone_from(&base.username);
        self.password.clone_from(&base.password);
        self.host.clone_from(&base.host);
        self.port = base.port;
    }

    /// Drop trailing spaces of an opaque path once nothing follows it
    pub(crate) fn strip_trailing_spaces_from_opaque_path(&mut self) {
        if !self.cannot_be_a_base || self.fragment.is_some() || self.query.is_some() {
            return;
        }
        if let Some(opaque) = self.path.first_mut() {
            let trimmed = opaque.trim_end_matches(' ').len();
            opaque.truncate(trimmed);
        }
    }

    /// Serialized path: the opaque path, or `/` before every segment
    pub fn path_string(&self) -> String {
        if self.cannot_be_a_base {
            return self.path.first().cloned().unwrap_or_default();
        }

        let mut output = String::with_capacity(self.path.iter().map(|s| s.len() + 1).sum());
        for segment in &self.path {
            output.push('/');
            output.push_str(segment);
        }
        output
    }

    /// Serialize the record, optionally leaving out the fragment.
    pub fn serialize(&self, exclude_fragment: bool) -> String {
        let (mut output, components) = self.serialize_with_components();
        if exclude_fragment && let Some(hash_start) = components.hash_start {
            output.truncate(hash_start as usize);
        }
        output
    }

    /// Serialize the record and note where each component landed.
    pub(crate) fn serialize_with_components(&self) -> (String, UrlComponents) {
        let mut output = String::with_capacity(self.scheme.len() + 16);
        let mut components = UrlComponents::default();
        let offset = |output: &String| output.len() as u32;

        output.push_str(&self.scheme);
        output.push(':');
        components.protocol_end = offset(&output);

        if let Some(host) = &self.host {
            output.push_str("//");
            components.username_start = offset(&output);
            components.username_end = components.username_start;
            components.password_start = components.username_start;
            components.password_end = components.username_start;

            if self.includes_credentials() {
                output.push_str(&self.username);
                components.username_end = offset(&output);
                components.password_start = components.username_end;
                if !self.password.is_empty() {
                    output.push(':');
                    components.password_start = offset(&output);
                    output.push_str(&self.password);
                }
                components.password_end = offset(&output);
                output.push('@');
            }

            components.host_start = offset(&output);
            let _ = write!(output, "{host}");
            components.host_end = offset(&output);
            components.port_start = components.host_end;
            if let Some(port) = self.port {
                output.push(':');
                components.port_start = offset(&output);
                let _ = write!(output, "{port}");
            }
            components.port_end = offset(&output);
        } else {
            let end = components.protocol_end;
            components.username_start = end;
            components.username_end = end;
            components.password_start = end;
            components.password_end = end;
            components.host_start = end;
            components.host_end = end;
            components.port_start = end;
            components.port_end = end;
            if !self.cannot_be_a_base && self.path.len() > 1 && self.path[0].is_empty() {
                // Keep a leading empty segment from reading as an authority
                output.push_str("/.");
            }
        }

        components.pathname_start = offset(&output);
        if self.cannot_be_a_base {
            output.push_str(self.path.first().map_or("", String::as_str));
        } else {
            for segment in &self.path {
                output.push('/');
                output.push_str(segment);
            }
        }
        components.pathname_end = offset(&output);

        if let Some(query) = &self.query {
            components.search_start = Some(offset(&output));
            output.push('?');
            output.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            components.hash_start = Some(offset(&output));
            output.push('#');
            output.push_str(fragment);
        }

        (output, components)
    }

    /// The origin this URL belongs to
    pub fn origin(&self) -> Origin {
        let scheme_type = self.scheme_type();
        if scheme_type.has_tuple_origin() {
            return match &self.host {
                Some(host) => Origin::Tuple {
                    scheme: self.scheme.clone(),
                    host: host.clone(),
                    port: self.port,
                },
                None => Origin::Opaque,
            };
        }

        // A blob URL carries the origin of the URL in its path
        if self.scheme == "blob"
            && let Ok(inner) = UrlRecord::parse(&self.path_string(), None)
            && inner.scheme_type().is_http()
        {
            return inner.origin();
        }
        Origin::Opaque
    }
}

/// The origin of a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Origin {
    /// An origin that is only equal to itself, serialized as `null`
    Opaque,
    /// Scheme, host and port of a special URL
    Tuple {
        scheme: String,
        host: Host,
        port: Option<u16>,
    },
}

impl Origin {
    pub fn is_tuple(&self) -> bool {
        matches!(self, Origin::Tuple { .. })
    }

    /// `scheme://host[:port]`, or `null` for opaque origins
    pub fn ascii_serialization(&self) -> String {
        match self {
            Origin::Opaque => "null".to_string(),
            Origin::Tuple {
                scheme,
                host,
                port: Some(port),
            } => format!("{scheme}://{host}:{port}"),
            Origin::Tuple {
                scheme,
                host,
                port: None,
            } => format!("{scheme}://{host}"),
        }
    }
}
