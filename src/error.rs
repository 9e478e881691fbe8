/// Hard failures of a URL parse.
///
/// A parse either yields a complete record or one of these; a half-built
/// record never escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseError {
    /// Missing or malformed scheme
    #[error("Invalid scheme")]
    InvalidScheme,
    /// Credentials without a host, or an otherwise broken authority
    #[error("Invalid authority")]
    InvalidAuthority,
    /// Host failed domain, IPv4, IPv6 or opaque-host validation
    #[error("Invalid host")]
    InvalidHost,
    /// Port is not numeric or exceeds 65535
    #[error("Invalid port")]
    InvalidPort,
    /// Relative input with no usable base URL
    #[error("Relative URL without a base")]
    NotABaseUrl,
    /// Field cannot be modified on a URL with an opaque path
    #[error("Cannot set this component on a URL with an opaque path")]
    CannotSetOnOpaquePath,
}

/// Non-fatal diagnostics reported while parsing.
///
/// These never abort a parse. They are delivered to the callback installed
/// through [`ParseOptions::on_validation_error`](crate::ParseOptions::on_validation_error)
/// and logged at trace level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationError {
    #[error("leading or trailing C0 control or space removed")]
    C0ControlOrSpaceTrimmed,
    #[error("tab or newline removed")]
    TabOrNewlineIgnored,
    #[error("backslash used as a path separator")]
    Backslash,
    #[error("special scheme not followed by \"//\"")]
    MissingSolidus,
    #[error("credentials present in the URL")]
    Credentials,
    #[error("invalid percent-encoded sequence")]
    InvalidPercentEncoding,
    #[error("code point not allowed in a URL")]
    InvalidUrlCodePoint,
    #[error("file URL host is a Windows drive letter")]
    FileHostIsDriveLetter,
    #[error("IPv4 address part is not decimal")]
    NonDecimalIpv4Part,
    #[error("IPv4 address ends with an empty part")]
    EmptyIpv4Part,
    #[error("file URL with a relative Windows drive letter path")]
    RelativeDriveLetter,
}

/// Failures of the file path conversion helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilePathError {
    #[error("The URL must be of scheme file")]
    InvalidUrlScheme,
    #[error("File URL path {0}")]
    InvalidFileUrlPath(&'static str),
    #[error("File URL host must be \"localhost\" or empty on this platform")]
    InvalidFileUrlHost,
    #[error("Missing UNC resource path")]
    MissingUncResourcePath,
    #[error("Empty UNC servername")]
    EmptyUncServername,
    #[error("Path must be absolute")]
    RelativePath,
    #[error(transparent)]
    InvalidUrl(#[from] ParseError),
}

/// Failures of structured `UrlSearchParams` initializers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchParamsError {
    #[error("Expected sequence with length 2, got {0}")]
    InvalidPairLength(usize),
}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
