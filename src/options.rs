use crate::Url;
use crate::error::{Result, ValidationError};

/// Delivers validation errors to the caller's callback and the log.
#[derive(Clone, Copy, Default)]
pub(crate) struct Reporter<'a> {
    callback: Option<&'a dyn Fn(ValidationError)>,
}

impl<'a> Reporter<'a> {
    pub(crate) fn new(callback: Option<&'a dyn Fn(ValidationError)>) -> Self {
        Self { callback }
    }

    pub(crate) fn report(self, error: ValidationError) {
        tracing::trace!(%error, "URL validation error");
        if let Some(callback) = self.callback {
            callback(error);
        }
    }
}

/// Full configuration for a parse: a parsed base URL and an optional
/// validation error hook.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use urlengine::{Url, ValidationError};
///
/// let seen = RefCell::new(Vec::new());
/// let report = |error: ValidationError| seen.borrow_mut().push(error);
/// let base = Url::parse("https://example.com/a/b", None).unwrap();
///
/// let url = Url::options()
///     .base_url(Some(&base))
///     .on_validation_error(&report)
///     .parse("..\\c")
///     .unwrap();
///
/// assert_eq!(url.href(), "https://example.com/c");
/// assert!(seen.borrow().contains(&ValidationError::Backslash));
/// ```
#[derive(Clone, Copy, Default)]
pub struct ParseOptions<'a> {
    base_url: Option<&'a Url>,
    on_validation_error: Option<&'a dyn Fn(ValidationError)>,
}

impl<'a> ParseOptions<'a> {
    /// Resolve relative input against `base`
    #[must_use]
    pub fn base_url(mut self, base: Option<&'a Url>) -> Self {
        self.base_url = base;
        self
    }

    /// Call `callback` for every non-fatal validation error
    #[must_use]
    pub fn on_validation_error(mut self, callback: &'a dyn Fn(ValidationError)) -> Self {
        self.on_validation_error = Some(callback);
        self
    }

    /// Parse `input` with these options
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid according to the WHATWG URL Standard.
    pub fn parse(self, input: &str) -> Result<Url> {
        let reporter = Reporter::new(self.on_validation_error);
        Url::parse_record(input, self.base_url.map(Url::record), reporter)
    }
}

impl core::fmt::Debug for ParseOptions<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParseOptions")
            .field("base_url", &self.base_url.map(Url::href))
            .field("on_validation_error", &self.on_validation_error.is_some())
            .finish()
    }
}
