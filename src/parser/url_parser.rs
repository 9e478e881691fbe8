use super::State;
use crate::character_sets::is_url_code_point;
use crate::checkers::{
    is_double_dot_segment, is_normalized_windows_drive_letter, is_single_dot_segment,
    is_windows_drive_letter, starts_with_windows_drive_letter,
};
use crate::compat::{String, ToString, Vec};
use crate::error::{ParseError, Result, ValidationError};
use crate::helpers::{remove_tabs_and_newlines, trim_c0_control_or_space};
use crate::host::Host;
use crate::options::Reporter;
use crate::scheme::{default_port, get_scheme_type, is_scheme_char};
use crate::unicode::percent_encode::{
    C0_CONTROL_SET, FRAGMENT_SET, PATH_SET, QUERY_SET, SPECIAL_QUERY_SET, USERINFO_SET,
    percent_encode_into,
};
use crate::url_record::UrlRecord;
use percent_encoding::AsciiSet;

/// What the driver loop does after a state has consumed a code point
enum Step {
    /// Advance to the next code point, or stop at end of input
    Continue,
    /// Run the (new) state again on the same code point
    Reprocess,
    /// Stop early; only reached with a state override
    Return,
}

/// Parse `input` against an optional base into a fresh record.
pub(crate) fn parse(
    input: &str,
    base: Option<&UrlRecord>,
    reporter: Reporter<'_>,
) -> Result<UrlRecord> {
    let trimmed = trim_c0_control_or_space(input);
    if trimmed.len() != input.len() {
        reporter.report(ValidationError::C0ControlOrSpaceTrimmed);
    }

    let mut url = UrlRecord::default();
    Parser::new(&mut url, base, trimmed, None, reporter).run()?;
    Ok(url)
}

/// Re-enter the state machine at `state_override` to update one part of
/// `url` in place. On failure `url` may be partially modified; callers
/// work on a copy.
pub(crate) fn parse_with_override(
    input: &str,
    url: &mut UrlRecord,
    state_override: State,
    reporter: Reporter<'_>,
) -> Result<()> {
    Parser::new(url, None, input, Some(state_override), reporter).run()
}

struct Parser<'a> {
    url: &'a mut UrlRecord,
    base: Option<&'a UrlRecord>,
    input: Vec<char>,
    pointer: usize,
    state: State,
    state_override: Option<State>,
    buffer: String,
    at_sign_seen: bool,
    inside_brackets: bool,
    password_token_seen: bool,
    reporter: Reporter<'a>,
}

impl<'a> Parser<'a> {
    fn new(
        url: &'a mut UrlRecord,
        base: Option<&'a UrlRecord>,
        input: &str,
        state_override: Option<State>,
        reporter: Reporter<'a>,
    ) -> Self {
        let cleaned = remove_tabs_and_newlines(input);
        if cleaned.len() != input.len() {
            reporter.report(ValidationError::TabOrNewlineIgnored);
        }

        Self {
            url,
            base,
            input: cleaned.chars().collect(),
            pointer: 0,
            state: state_override.unwrap_or(State::SchemeStart),
            state_override,
            buffer: String::new(),
            at_sign_seen: false,
            inside_brackets: false,
            password_token_seen: false,
            reporter,
        }
    }

    fn run(mut self) -> Result<()> {
        loop {
            let c = self.input.get(self.pointer).copied();
            let step = match self.state {
                State::SchemeStart => self.scheme_start(c)?,
                State::Scheme => self.scheme(c)?,
                State::NoScheme => self.no_scheme(c)?,
                State::SpecialRelativeOrAuthority => self.special_relative_or_authority(c),
                State::PathOrAuthority => self.path_or_authority(c),
                State::Relative => self.relative(c)?,
                State::RelativeSlash => self.relative_slash(c)?,
                State::SpecialAuthoritySlashes => self.special_authority_slashes(c),
                State::SpecialAuthorityIgnoreSlashes => self.special_authority_ignore_slashes(c),
                State::Authority => self.authority(c)?,
                State::Host | State::Hostname => self.host(c)?,
                State::Port => self.port(c)?,
                State::File => self.file(c),
                State::FileSlash => self.file_slash(c),
                State::FileHost => self.file_host(c)?,
                State::PathStart => self.path_start(c),
                State::Path => self.path(c),
                State::CannotBeABaseUrlPath => self.cannot_be_a_base_url_path(c),
                State::Query => self.query(c),
                State::Fragment => self.fragment(c),
            };

            match step {
                Step::Return => return Ok(()),
                Step::Reprocess => {}
                Step::Continue => {
                    if self.pointer >= self.input.len() {
                        return Ok(());
                    }
                    self.pointer += 1;
                }
            }
        }
    }

    fn is_special(&self) -> bool {
        get_scheme_type(&self.url.scheme).is_special()
    }

    fn is_file(&self) -> bool {
        get_scheme_type(&self.url.scheme).is_file()
    }

    /// Code points after the current one
    fn remaining(&self) -> &[char] {
        self.input.get(self.pointer + 1..).unwrap_or(&[])
    }

    /// Code points from the current one to the end
    fn rest(&self) -> &[char] {
        self.input.get(self.pointer..).unwrap_or(&[])
    }

    fn report(&self, error: ValidationError) {
        self.reporter.report(error);
    }

    fn check_code_point(&self, c: char) {
        if c == '%' {
            let rest = self.remaining();
            let escaped = rest.len() >= 2 && rest[0].is_ascii_hexdigit() && rest[1].is_ascii_hexdigit();
            if !escaped {
                self.report(ValidationError::InvalidPercentEncoding);
            }
        } else if !is_url_code_point(c) {
            self.report(ValidationError::InvalidUrlCodePoint);
        }
    }

    fn missing_scheme(&self) -> ParseError {
        if self.input.first().is_some_and(char::is_ascii_alphabetic) {
            ParseError::InvalidScheme
        } else {
            ParseError::NotABaseUrl
        }
    }

    fn scheme_start(&mut self, c: Option<char>) -> Result<Step> {
        match c {
            Some(c) if c.is_ascii_alphabetic() => {
                self.buffer.push(c.to_ascii_lowercase());
                self.state = State::Scheme;
                Ok(Step::Continue)
            }
            _ if self.state_override.is_none() => {
                self.state = State::NoScheme;
                Ok(Step::Reprocess)
            }
            _ => Err(ParseError::InvalidScheme),
        }
    }

    fn scheme(&mut self, c: Option<char>) -> Result<Step> {
        match c {
            Some(c) if is_scheme_char(c) => {
                self.buffer.push(c.to_ascii_lowercase());
                Ok(Step::Continue)
            }
            Some(':') => {
                let candidate = get_scheme_type(&self.buffer);
                if self.state_override.is_some() {
                    if self.is_special() != candidate.is_special() {
                        return Err(ParseError::InvalidScheme);
                    }
                    if candidate.is_file()
                        && (self.url.includes_credentials() || self.url.port.is_some())
                    {
                        return Err(ParseError::InvalidScheme);
                    }
                    if self.is_file() && self.url.host.as_ref().is_some_and(Host::is_empty) {
                        return Err(ParseError::InvalidScheme);
                    }
                }

                self.url.scheme = core::mem::take(&mut self.buffer);

                if self.state_override.is_some() {
                    if self.url.port.is_some() && self.url.port == default_port(&self.url.scheme) {
                        self.url.port = None;
                    }
                    return Ok(Step::Return);
                }

                if candidate.is_file() {
                    if !self.remaining().starts_with(&['/', '/']) {
                        self.report(ValidationError::MissingSolidus);
                    }
                    self.state = State::File;
                } else if candidate.is_special()
                    && self.base.is_some_and(|base| base.scheme == self.url.scheme)
                {
                    self.state = State::SpecialRelativeOrAuthority;
                } else if candidate.is_special() {
                    self.state = State::SpecialAuthoritySlashes;
                } else if self.remaining().first() == Some(&'/') {
                    self.state = State::PathOrAuthority;
                    self.pointer += 1;
                } else {
                    self.url.path = Vec::from([String::new()]);
                    self.url.cannot_be_a_base = true;
                    self.state = State::CannotBeABaseUrlPath;
                }
                Ok(Step::Continue)
            }
            _ if self.state_override.is_none() => {
                // Not a scheme after all; start over from the first code point
                self.buffer.clear();
                self.state = State::NoScheme;
                self.pointer = 0;
                Ok(Step::Reprocess)
            }
            _ => Err(ParseError::InvalidScheme),
        }
    }

    fn no_scheme(&mut self, c: Option<char>) -> Result<Step> {
        let Some(base) = self.base else {
            return Err(self.missing_scheme());
        };

        if base.cannot_be_a_base {
            if c != Some('#') {
                return Err(ParseError::NotABaseUrl);
            }
            self.url.scheme.clone_from(&base.scheme);
            self.url.path.clone_from(&base.path);
            self.url.query.clone_from(&base.query);
            self.url.fragment = Some(String::new());
            self.url.cannot_be_a_base = true;
            self.state = State::Fragment;
            return Ok(Step::Continue);
        }

        self.state = if base.scheme == "file" {
            State::File
        } else {
            State::Relative
        };
        Ok(Step::Reprocess)
    }

    fn special_relative_or_authority(&mut self, c: Option<char>) -> Step {
        if c == Some('/') && self.remaining().first() == Some(&'/') {
            self.state = State::SpecialAuthorityIgnoreSlashes;
            self.pointer += 1;
            Step::Continue
        } else {
            self.report(ValidationError::MissingSolidus);
            self.state = State::Relative;
            Step::Reprocess
        }
    }

    fn path_or_authority(&mut self, c: Option<char>) -> Step {
        if c == Some('/') {
            self.state = State::Authority;
            Step::Continue
        } else {
            self.state = State::Path;
            Step::Reprocess
        }
    }

    fn relative(&mut self, c: Option<char>) -> Result<Step> {
        let Some(base) = self.base else {
            return Err(ParseError::NotABaseUrl);
        };
        self.url.scheme.clone_from(&base.scheme);
        let special = self.is_special();

        match c {
            Some('/') => self.state = State::RelativeSlash,
            Some('\\') if special => {
                self.report(ValidationError::Backslash);
                self.state = State::RelativeSlash;
            }
            _ => {
                self.url.copy_authority_from(base);
                self.url.path.clone_from(&base.path);
                self.url.query.clone_from(&base.query);
                match c {
                    Some('?') => {
                        self.url.query = Some(String::new());
                        self.state = State::Query;
                    }
                    Some('#') => {
                        self.url.fragment = Some(String::new());
                        self.state = State::Fragment;
                    }
                    Some(_) => {
                        self.url.query = None;
                        self.url.shorten_path();
                        self.state = State::Path;
                        return Ok(Step::Reprocess);
                    }
                    None => {}
                }
            }
        }
        Ok(Step::Continue)
    }

    fn relative_slash(&mut self, c: Option<char>) -> Result<Step> {
        if self.is_special() && matches!(c, Some('/' | '\\')) {
            if c == Some('\\') {
                self.report(ValidationError::Backslash);
            }
            self.state = State::SpecialAuthorityIgnoreSlashes;
        } else if c == Some('/') {
            self.state = State::Authority;
        } else {
            let base = self.base.ok_or(ParseError::NotABaseUrl)?;
            self.url.copy_authority_from(base);
            self.state = State::Path;
            return Ok(Step::Reprocess);
        }
        Ok(Step::Continue)
    }

    fn special_authority_slashes(&mut self, c: Option<char>) -> Step {
        self.state = State::SpecialAuthorityIgnoreSlashes;
        if c == Some('/') && self.remaining().first() == Some(&'/') {
            self.pointer += 1;
            Step::Continue
        } else {
            self.report(ValidationError::MissingSolidus);
            Step::Reprocess
        }
    }

    fn special_authority_ignore_slashes(&mut self, c: Option<char>) -> Step {
        if matches!(c, Some('/' | '\\')) {
            self.report(ValidationError::MissingSolidus);
            Step::Continue
        } else {
            self.state = State::Authority;
            Step::Reprocess
        }
    }

    fn authority(&mut self, c: Option<char>) -> Result<Step> {
        let special = self.is_special();
        match c {
            Some('@') => {
                self.report(ValidationError::Credentials);
                if self.at_sign_seen {
                    self.buffer.insert_str(0, "%40");
                }
                self.at_sign_seen = true;

                let buffer = core::mem::take(&mut self.buffer);
                for code_point in buffer.chars() {
                    if code_point == ':' && !self.password_token_seen {
                        self.password_token_seen = true;
                        continue;
                    }
                    let target = if self.password_token_seen {
                        &mut self.url.password
                    } else {
                        &mut self.url.username
                    };
                    encode_char_into(target, code_point, USERINFO_SET);
                }
                Ok(Step::Continue)
            }
            None | Some('/' | '?' | '#') => self.end_of_authority(),
            Some('\\') if special => self.end_of_authority(),
            Some(c) => {
                self.buffer.push(c);
                Ok(Step::Continue)
            }
        }
    }

    fn end_of_authority(&mut self) -> Result<Step> {
        if self.at_sign_seen && self.buffer.is_empty() {
            return Err(ParseError::InvalidAuthority);
        }
        // Rewind to the first code point after the userinfo and reparse it as a host
        self.pointer -= self.buffer.chars().count();
        self.buffer.clear();
        self.state = State::Host;
        Ok(Step::Reprocess)
    }

    fn host(&mut self, c: Option<char>) -> Result<Step> {
        let special = self.is_special();

        if self.state_override.is_some() && self.is_file() {
            self.state = State::FileHost;
            return Ok(Step::Reprocess);
        }

        if c == Some(':') && !self.inside_brackets {
            if self.buffer.is_empty() || self.state_override == Some(State::Hostname) {
                return Err(ParseError::InvalidHost);
            }
            let host = Host::parse_with(&self.buffer, !special, self.reporter)?;
            self.url.host = Some(host);
            self.buffer.clear();
            self.state = State::Port;
            return Ok(Step::Continue);
        }

        let at_end = matches!(c, None | Some('/' | '?' | '#')) || (special && c == Some('\\'));
        if at_end {
            if special && self.buffer.is_empty() {
                return Err(ParseError::InvalidHost);
            }
            if self.state_override.is_some()
                && self.buffer.is_empty()
                && (self.url.includes_credentials() || self.url.port.is_some())
            {
                return Err(ParseError::InvalidHost);
            }
            let host = Host::parse_with(&self.buffer, !special, self.reporter)?;
            self.url.host = Some(host);
            self.buffer.clear();
            self.state = State::PathStart;
            if self.state_override.is_some() {
                return Ok(Step::Return);
            }
            return Ok(Step::Reprocess);
        }

        if let Some(c) = c {
            match c {
                '[' => self.inside_brackets = true,
                ']' => self.inside_brackets = false,
                _ => {}
            }
            self.buffer.push(c);
        }
        Ok(Step::Continue)
    }

    fn port(&mut self, c: Option<char>) -> Result<Step> {
        if let Some(digit) = c.filter(char::is_ascii_digit) {
            self.buffer.push(digit);
            return Ok(Step::Continue);
        }

        let at_end = matches!(c, None | Some('/' | '?' | '#'))
            || (self.is_special() && c == Some('\\'))
            || self.state_override.is_some();
        if !at_end {
            return Err(ParseError::InvalidPort);
        }

        if !self.buffer.is_empty() {
            let port = self
                .buffer
                .bytes()
                .try_fold(0u16, |acc, b| {
                    let value = u32::from(acc) * 10 + u32::from(b - b'0');
                    u16::try_from(value).ok()
                })
                .ok_or(ParseError::InvalidPort)?;

            self.url.port = if default_port(&self.url.scheme) == Some(port) {
                None
            } else {
                Some(port)
            };
            self.buffer.clear();

            if self.state_override.is_some() {
                return Ok(Step::Return);
            }
        }

        match self.state_override {
            Some(State::Port) => Err(ParseError::InvalidPort),
            Some(_) => Ok(Step::Return),
            None => {
                self.state = State::PathStart;
                Ok(Step::Reprocess)
            }
        }
    }

    fn file(&mut self, c: Option<char>) -> Step {
        self.url.scheme = "file".to_string();
        self.url.host = Some(Host::empty(true));

        if matches!(c, Some('/' | '\\')) {
            if c == Some('\\') {
                self.report(ValidationError::Backslash);
            }
            self.state = State::FileSlash;
            return Step::Continue;
        }

        let Some(base) = self.base.filter(|base| base.scheme == "file") else {
            self.state = State::Path;
            return Step::Reprocess;
        };

        self.url.host.clone_from(&base.host);
        self.url.path.clone_from(&base.path);
        self.url.query.clone_from(&base.query);

        match c {
            Some('?') => {
                self.url.query = Some(String::new());
                self.state = State::Query;
            }
            Some('#') => {
                self.url.fragment = Some(String::new());
                self.state = State::Fragment;
            }
            Some(_) => {
                self.url.query = None;
                if starts_with_windows_drive_letter(self.rest()) {
                    self.report(ValidationError::RelativeDriveLetter);
                    self.url.path.clear();
                } else {
                    self.url.shorten_path();
                }
                self.state = State::Path;
                return Step::Reprocess;
            }
            None => {}
        }
        Step::Continue
    }

    fn file_slash(&mut self, c: Option<char>) -> Step {
        if matches!(c, Some('/' | '\\')) {
            if c == Some('\\') {
                self.report(ValidationError::Backslash);
            }
            self.state = State::FileHost;
            return Step::Continue;
        }

        if let Some(base) = self.base.filter(|base| base.scheme == "file") {
            self.url.host.clone_from(&base.host);
            if !starts_with_windows_drive_letter(self.rest())
                && let Some(drive) = base
                    .path
                    .first()
                    .filter(|segment| is_normalized_windows_drive_letter(segment))
            {
                self.url.path.push(drive.clone());
            }
        }
        self.state = State::Path;
        Step::Reprocess
    }

    fn file_host(&mut self, c: Option<char>) -> Result<Step> {
        let Some(c) = c.filter(|&c| !matches!(c, '/' | '\\' | '?' | '#')) else {
            if self.state_override.is_none() && is_windows_drive_letter(&self.buffer) {
                // The buffer is kept and becomes the first path segment
                self.report(ValidationError::FileHostIsDriveLetter);
                self.state = State::Path;
            } else if self.buffer.is_empty() {
                self.url.host = Some(Host::empty(true));
                if self.state_override.is_some() {
                    return Ok(Step::Return);
                }
                self.state = State::PathStart;
            } else {
                let mut host = Host::parse_with(&self.buffer, false, self.reporter)?;
                if matches!(&host, Host::Domain(domain) if domain == "localhost") {
                    host = Host::empty(true);
                }
                self.url.host = Some(host);
                if self.state_override.is_some() {
                    return Ok(Step::Return);
                }
                self.buffer.clear();
                self.state = State::PathStart;
            }
            return Ok(Step::Reprocess);
        };

        self.buffer.push(c);
        Ok(Step::Continue)
    }

    fn path_start(&mut self, c: Option<char>) -> Step {
        if self.is_special() {
            if c == Some('\\') {
                self.report(ValidationError::Backslash);
            }
            self.state = State::Path;
            if matches!(c, Some('/' | '\\')) {
                return Step::Continue;
            }
            return Step::Reprocess;
        }

        match c {
            Some('?') if self.state_override.is_none() => {
                self.url.query = Some(String::new());
                self.state = State::Query;
            }
            Some('#') if self.state_override.is_none() => {
                self.url.fragment = Some(String::new());
                self.state = State::Fragment;
            }
            Some(c) => {
                self.state = State::Path;
                if c != '/' {
                    return Step::Reprocess;
                }
            }
            None => {
                if self.state_override.is_some() && self.url.host.is_none() {
                    self.url.path.push(String::new());
                }
            }
        }
        Step::Continue
    }

    fn path(&mut self, c: Option<char>) -> Step {
        let special = self.is_special();
        let slash = c == Some('/') || (special && c == Some('\\'));
        let query_or_fragment = self.state_override.is_none() && matches!(c, Some('?' | '#'));

        if let Some(c) = c.filter(|_| !slash && !query_or_fragment) {
            self.check_code_point(c);
            encode_char_into(&mut self.buffer, c, PATH_SET);
            return Step::Continue;
        }

        if special && c == Some('\\') {
            self.report(ValidationError::Backslash);
        }

        let mut segment = core::mem::take(&mut self.buffer);
        if is_double_dot_segment(&segment) {
            self.url.shorten_path();
            if !slash {
                self.url.path.push(String::new());
            }
        } else if is_single_dot_segment(&segment) {
            if !slash {
                self.url.path.push(String::new());
            }
        } else {
            if self.is_file() && self.url.path.is_empty() && is_windows_drive_letter(&segment) {
                if self.url.host.as_ref().is_some_and(|host| !host.is_empty()) {
                    self.report(ValidationError::FileHostIsDriveLetter);
                    self.url.host = Some(Host::empty(true));
                }
                segment.replace_range(1..2, ":");
            }
            self.url.path.push(segment);
        }

        match c {
            Some('?') => {
                self.url.query = Some(String::new());
                self.state = State::Query;
            }
            Some('#') => {
                self.url.fragment = Some(String::new());
                self.state = State::Fragment;
            }
            _ => {}
        }
        Step::Continue
    }

    fn cannot_be_a_base_url_path(&mut self, c: Option<char>) -> Step {
        match c {
            Some('?') => {
                self.url.query = Some(String::new());
                self.state = State::Query;
            }
            Some('#') => {
                self.url.fragment = Some(String::new());
                self.state = State::Fragment;
            }
            Some(c) => {
                self.check_code_point(c);
                if self.url.path.is_empty() {
                    self.url.path.push(String::new());
                }
                if let Some(opaque) = self.url.path.first_mut() {
                    encode_char_into(opaque, c, C0_CONTROL_SET);
                }
            }
            None => {}
        }
        Step::Continue
    }

    fn query(&mut self, c: Option<char>) -> Step {
        if c.is_none() || (self.state_override.is_none() && c == Some('#')) {
            let encode_set = if self.is_special() {
                SPECIAL_QUERY_SET
            } else {
                QUERY_SET
            };
            let query = self.url.query.get_or_insert_with(String::new);
            percent_encode_into(query, &self.buffer, encode_set);
            self.buffer.clear();

            if c == Some('#') {
                self.url.fragment = Some(String::new());
                self.state = State::Fragment;
            }
        } else if let Some(c) = c {
            self.check_code_point(c);
            self.buffer.push(c);
        }
        Step::Continue
    }

    fn fragment(&mut self, c: Option<char>) -> Step {
        if let Some(c) = c {
            self.check_code_point(c);
            let fragment = self.url.fragment.get_or_insert_with(String::new);
            encode_char_into(fragment, c, FRAGMENT_SET);
        }
        Step::Continue
    }
}

fn encode_char_into(buffer: &mut String, c: char, encode_set: &'static AsciiSet) {
    let mut utf8 = [0u8; 4];
    percent_encode_into(buffer, c.encode_utf8(&mut utf8), encode_set);
}
