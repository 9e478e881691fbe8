use crate::character_sets::{is_ascii_tab_or_newline, is_c0_control_or_space};
use crate::compat::Cow;

/// Fast check if string contains tabs or newlines
pub fn has_tabs_or_newline(input: &str) -> bool {
    memchr::memchr3(b'\t', b'\n', b'\r', input.as_bytes()).is_some()
}

/// Strip leading and trailing C0 controls and spaces
pub fn trim_c0_control_or_space(input: &str) -> &str {
    input.trim_matches(is_c0_control_or_space)
}

/// Remove every ASCII tab, LF and CR.
/// Borrows when there is nothing to remove.
pub fn remove_tabs_and_newlines(input: &str) -> Cow<'_, str> {
    if !has_tabs_or_newline(input) {
        return Cow::Borrowed(input);
    }

    Cow::Owned(
        input
            .chars()
            .filter(|&c| !is_ascii_tab_or_newline(c))
            .collect(),
    )
}

/// Strip one leading `prefix` character if present
pub fn strip_leading(input: &str, prefix: char) -> &str {
    input.strip_prefix(prefix).unwrap_or(input)
}
