//! Conversion between `file:` URLs and local file system paths.

use crate::character_sets::is_forbidden_domain_code_point;
use crate::compat::{String, ToString, Vec, format};
use crate::error::{FilePathError, ParseError};
use crate::unicode::idna;
use crate::unicode::percent_encode::percent_decode_lossy;
use crate::url::Url;

/// Path syntax to convert to or from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// `/` separated, rooted at `/`
    Posix,
    /// `\` or `/` separated, rooted at a drive letter or a UNC server
    Windows,
}

impl PathStyle {
    /// The style of the platform this crate was built for
    pub const fn native() -> Self {
        if cfg!(windows) {
            PathStyle::Windows
        } else {
            PathStyle::Posix
        }
    }

    const fn separator(self) -> char {
        match self {
            PathStyle::Posix => '/',
            PathStyle::Windows => '\\',
        }
    }

    fn is_separator(self, c: char) -> bool {
        c == '/' || (self == PathStyle::Windows && c == '\\')
    }
}

/// Convert a `file:` URL to a path.
///
/// # Examples
///
/// ```
/// use urlengine::{PathStyle, Url, file_url_to_path};
///
/// let url = Url::parse("file:///tmp/hello%20world.txt", None).unwrap();
/// assert_eq!(file_url_to_path(&url, PathStyle::Posix).unwrap(), "/tmp/hello world.txt");
///
/// let url = Url::parse("file:///C:/Users/me", None).unwrap();
/// assert_eq!(file_url_to_path(&url, PathStyle::Windows).unwrap(), "C:\\Users\\me");
/// ```
///
/// # Errors
///
/// Fails when the scheme is not `file`, when the path holds an encoded
/// separator, or when the URL cannot name a path in `style`.
pub fn file_url_to_path(url: &Url, style: PathStyle) -> Result<String, FilePathError> {
    if url.scheme() != "file" {
        return Err(FilePathError::InvalidUrlScheme);
    }
    match style {
        PathStyle::Posix => posix_path_from_url(url),
        PathStyle::Windows => windows_path_from_url(url),
    }
}

fn posix_path_from_url(url: &Url) -> Result<String, FilePathError> {
    if !url.hostname().is_empty() {
        return Err(FilePathError::InvalidFileUrlHost);
    }
    let pathname = url.pathname();
    if has_encoded_byte(pathname, b'/') {
        return Err(FilePathError::InvalidFileUrlPath(
            "must not include encoded / characters",
        ));
    }
    Ok(percent_decode_lossy(pathname))
}

fn windows_path_from_url(url: &Url) -> Result<String, FilePathError> {
    let pathname = url.pathname();
    if has_encoded_byte(pathname, b'/') || has_encoded_byte(pathname, b'\\') {
        return Err(FilePathError::InvalidFileUrlPath(
            "must not include encoded \\ or / characters",
        ));
    }
    let pathname = percent_decode_lossy(&pathname.replace('/', "\\"));

    let hostname = url.hostname();
    if !hostname.is_empty() {
        return Ok(format!("\\\\{}{pathname}", idna::domain_to_unicode(hostname)));
    }

    let bytes = pathname.as_bytes();
    let has_drive = bytes.len() >= 3 && bytes[1].is_ascii_alphabetic() && bytes[2] == b':';
    if !has_drive {
        return Err(FilePathError::InvalidFileUrlPath("must be absolute"));
    }
    Ok(pathname[1..].to_string())
}

/// Whether `pathname` contains `%XX` decoding to `byte`, in either case
fn has_encoded_byte(pathname: &str, byte: u8) -> bool {
    let escaped = format!("%{byte:02x}");
    pathname
        .as_bytes()
        .windows(3)
        .any(|window| window.eq_ignore_ascii_case(escaped.as_bytes()))
}

/// Convert a path to a `file:` URL.
///
/// Dot segments are resolved and a trailing separator is kept. A relative
/// path is resolved against the current directory, which is only available
/// with the `std` feature and the native `style`.
///
/// # Examples
///
/// ```
/// use urlengine::{PathStyle, path_to_file_url};
///
/// let url = path_to_file_url("/tmp/a b/../c#d", PathStyle::Posix).unwrap();
/// assert_eq!(url.href(), "file:///tmp/c%23d");
///
/// let url = path_to_file_url("\\\\nas\\My Docs\\File.doc", PathStyle::Windows).unwrap();
/// assert_eq!(url.href(), "file://nas/My%20Docs/File.doc");
/// ```
///
/// # Errors
///
/// Fails on a malformed UNC path, a relative path that cannot be resolved,
/// or a UNC server name that is not a valid host.
pub fn path_to_file_url(path: &str, style: PathStyle) -> Result<Url, FilePathError> {
    let mut url = Url::parse("file://", None)?;

    if style == PathStyle::Windows
        && let Some(unc) = path.strip_prefix("\\\\")
    {
        let hostname_end = unc
            .find('\\')
            .ok_or(FilePathError::MissingUncResourcePath)?;
        if hostname_end == 0 {
            return Err(FilePathError::EmptyUncServername);
        }
        let hostname = idna::domain_to_ascii(&unc[..hostname_end])?;
        if !url.set_hostname(&hostname) {
            return Err(FilePathError::InvalidUrl(ParseError::InvalidHost));
        }
        let resource = unc[hostname_end..].replace('\\', "/");
        url.set_pathname(&encode_path_chars(&resource, style));
        return Ok(url);
    }

    let mut resolved = resolve(path, style)?;
    let trailing = path.chars().next_back().is_some_and(|c: char| style.is_separator(c));
    if trailing && !resolved.ends_with(style.separator()) {
        resolved.push('/');
    }
    url.set_pathname(&encode_path_chars(&resolved, style));
    Ok(url)
}

/// Escape what the pathname setter would otherwise drop or reinterpret
fn encode_path_chars(path: &str, style: PathStyle) -> String {
    let mut output = String::with_capacity(path.len());
    for c in path.chars() {
        match c {
            '%' => output.push_str("%25"),
            '\\' if style == PathStyle::Posix => output.push_str("%5C"),
            '\n' => output.push_str("%0A"),
            '\r' => output.push_str("%0D"),
            '\t' => output.push_str("%09"),
            c => output.push(c),
        }
    }
    output
}

/// Make `path` absolute and collapse `.` and `..` segments
fn resolve(path: &str, style: PathStyle) -> Result<String, FilePathError> {
    let absolute = if is_absolute(path, style) {
        path.to_string()
    } else {
        join_current_dir(path, style)?
    };

    let (root, rest) = match style {
        PathStyle::Posix => ("", absolute.as_str()),
        PathStyle::Windows => absolute.split_at(2),
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in rest.split(|c: char| style.is_separator(c)) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            segment => segments.push(segment),
        }
    }

    let separator = style.separator();
    let mut resolved = String::with_capacity(absolute.len());
    resolved.push_str(root);
    resolved.push(separator);
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            resolved.push(separator);
        }
        resolved.push_str(segment);
    }
    Ok(resolved)
}

fn is_absolute(path: &str, style: PathStyle) -> bool {
    match style {
        PathStyle::Posix => path.starts_with('/'),
        PathStyle::Windows => {
            let mut chars = path.chars();
            matches!(
                (chars.next(), chars.next(), chars.next()),
                (Some(letter), Some(':'), Some(sep)) if letter.is_ascii_alphabetic() && style.is_separator(sep)
            )
        }
    }
}

#[cfg(feature = "std")]
fn join_current_dir(path: &str, style: PathStyle) -> Result<String, FilePathError> {
    if style != PathStyle::native() {
        return Err(FilePathError::RelativePath);
    }
    let cwd = std::env::current_dir().map_err(|error| {
        tracing::debug!(%error, "current directory unavailable");
        FilePathError::RelativePath
    })?;
    let cwd = cwd.to_str().ok_or(FilePathError::RelativePath)?;

    // A rooted Windows path without a drive takes the drive of the current directory
    let joined = if style == PathStyle::Windows && path.starts_with(['/', '\\']) {
        format!("{}{path}", cwd.get(..2).unwrap_or_default())
    } else {
        format!("{cwd}{}{path}", style.separator())
    };
    if is_absolute(&joined, style) {
        Ok(joined)
    } else {
        Err(FilePathError::RelativePath)
    }
}

#[cfg(not(feature = "std"))]
fn join_current_dir(_path: &str, _style: PathStyle) -> Result<String, FilePathError> {
    Err(FilePathError::RelativePath)
}

/// Convert a domain to its ASCII form, or an empty string when it is invalid
pub fn domain_to_ascii(domain: &str) -> String {
    match idna::domain_to_ascii(domain) {
        Ok(ascii) if !ascii.chars().any(is_forbidden_domain_code_point) => ascii,
        _ => String::new(),
    }
}

/// Convert a domain to its Unicode form; invalid labels are kept as given
pub fn domain_to_unicode(domain: &str) -> String {
    idna::domain_to_unicode(domain)
}
