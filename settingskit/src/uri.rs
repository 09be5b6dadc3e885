//! URI-shape validation.
//!
//! The check is deliberately loose: `scheme://host[/path]` where the scheme is
//! word characters, the host is word characters plus `.`, `:` and `@`, and the
//! path is a run of URL-safe characters. The match is a search, not a full
//! match, so text surrounding a URI-shaped run is accepted.
//!
//! Matching uses the `regex` crate, whose automata run in time linear in the
//! input, so no input can trigger catastrophic backtracking.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

use crate::SettingsResult;

/// Source of the built-in pattern. Compiled case-insensitive with
/// insignificant whitespace.
pub const URI_PATTERN: &str = r"(?P<protocol>\w+)://(?P<domain>[\w@][\w.:@]+)/?[\w.?=%&\-@/$,]*";

/// Message recorded when a URI setting is declared without its own.
pub const DEFAULT_URI_ERROR: &str = "Not a valid URI";

static DEFAULT_PATTERN: LazyLock<UriPattern> = LazyLock::new(|| {
    UriPattern::new(URI_PATTERN).expect("built-in URI pattern compiles")
});

/// A compiled URI-shape matcher.
#[derive(Debug, Clone)]
pub struct UriPattern {
    regex: Regex,
}

/// The parts of a URI-shaped value picked out by the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UriShape<'a> {
    pub protocol: &'a str,
    pub domain: &'a str,
}

impl UriPattern {
    /// Compiles `source` with the same flags as the built-in pattern.
    pub fn new(source: &str) -> SettingsResult<Self> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(true)
            .ignore_whitespace(true)
            .build()?;
        Ok(Self { regex })
    }

    /// Uses an already compiled regex as-is.
    pub fn from_regex(regex: Regex) -> Self {
        Self { regex }
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// Protocol and domain of the first URI-shaped run in `value`.
    ///
    /// `None` when nothing matches or when a custom pattern lacks the
    /// `protocol`/`domain` groups.
    pub fn shape<'a>(&self, value: &'a str) -> Option<UriShape<'a>> {
        let caps = self.regex.captures(value)?;
        Some(UriShape {
            protocol: caps.name("protocol")?.as_str(),
            domain: caps.name("domain")?.as_str(),
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Default for UriPattern {
    fn default() -> Self {
        DEFAULT_PATTERN.clone()
    }
}
