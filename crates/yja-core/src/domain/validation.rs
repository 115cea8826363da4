//! Post validator - collects every applicable error, in rule order.

use std::fmt;

use super::post::{DESCRIPTION_MAX_CHARS, PostInput};

/// User-facing validation messages.
pub mod messages {
    pub const TITLE_REQUIRED: &str = "Title is required";
    pub const LINK_REQUIRED: &str = "Link is required";
    pub const LINK_SCHEME: &str = "Link must start with http(s)://";
    pub const DESCRIPTION_TOO_LONG: &str = "Description must be ≤ 500 chars";
}

/// Separator used when the messages are shown as one line.
const JOIN_SEPARATOR: &str = " · ";

/// Ordered list of validation messages. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }

    fn push(&mut self, message: &str) {
        self.0.push(message.to_string());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(JOIN_SEPARATOR))
    }
}

impl std::error::Error for ValidationErrors {}

/// Check a candidate post.
///
/// The link scheme rule looks at the raw, untrimmed link and fires for any
/// non-empty link, so a whitespace-only link reports both link errors.
pub fn validate(candidate: &PostInput) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if is_blank(candidate.title.as_deref()) {
        errors.push(messages::TITLE_REQUIRED);
    }

    let link = candidate.link.as_deref().unwrap_or_default();
    if link.trim().is_empty() {
        errors.push(messages::LINK_REQUIRED);
    }
    if !link.is_empty() && !has_http_scheme(link) {
        errors.push(messages::LINK_SCHEME);
    }

    if let Some(description) = candidate.description.as_deref() {
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            errors.push(messages::DESCRIPTION_TOO_LONG);
        }
    }

    errors
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Case-insensitive `^https?://`.
fn has_http_scheme(link: &str) -> bool {
    ["http://", "https://"].iter().any(|prefix| {
        link.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}
