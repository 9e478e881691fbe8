/// How the parser treats a scheme.
///
/// Everything but `NotSpecial` is a special scheme with its own host,
/// path and query rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeType {
    Http,
    Https,
    Ws,
    Wss,
    Ftp,
    File,
    #[default]
    NotSpecial,
}

impl SchemeType {
    pub const fn is_special(self) -> bool {
        !matches!(self, Self::NotSpecial)
    }

    pub const fn is_file(self) -> bool {
        matches!(self, Self::File)
    }

    /// `http` or `https`, the only schemes a `blob:` URL takes its origin from
    pub const fn is_http(self) -> bool {
        matches!(self, Self::Http | Self::Https)
    }

    /// Special schemes other than `file` have a scheme/host/port origin
    pub const fn has_tuple_origin(self) -> bool {
        self.is_special() && !self.is_file()
    }

    pub const fn default_port(self) -> Option<u16> {
        match self {
            Self::Http | Self::Ws => Some(80),
            Self::Https | Self::Wss => Some(443),
            Self::Ftp => Some(21),
            Self::File | Self::NotSpecial => None,
        }
    }
}
