//! Whitelist / blacklist evaluation over event attributes.
//!
//! A rule matches when every attribute it names matches (AND); a rule set
//! matches when any of its rules matches (OR). A non-empty whitelist takes
//! precedence over the blacklist.

use serde::Deserialize;

/// Value a rule compares an attribute against.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Matcher {
    /// A single value: equality for scalar attributes, membership for tags.
    One(String),
    /// Several values: every one must be among the event's tags.
    All(Vec<String>),
}

impl From<&str> for Matcher {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl<const N: usize> From<[&str; N]> for Matcher {
    fn from(values: [&str; N]) -> Self {
        Self::All(values.iter().map(|v| (*v).to_string()).collect())
    }
}

/// One whitelist or blacklist entry.
///
/// `tag` is accepted as an alias of `tags` in configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterRule {
    #[serde(default)]
    pub id: Option<Matcher>,
    #[serde(default)]
    pub file: Option<Matcher>,
    #[serde(default, alias = "tag")]
    pub tags: Option<Matcher>,
}

impl FilterRule {
    #[must_use]
    pub fn id(mut self, matcher: impl Into<Matcher>) -> Self {
        self.id = Some(matcher.into());
        self
    }

    #[must_use]
    pub fn file(mut self, matcher: impl Into<Matcher>) -> Self {
        self.file = Some(matcher.into());
        self
    }

    #[must_use]
    pub fn tags(mut self, matcher: impl Into<Matcher>) -> Self {
        self.tags = Some(matcher.into());
        self
    }

    /// Whether every attribute named by this rule matches `attrs`.
    ///
    /// A rule that names no attribute never matches.
    pub fn matches(&self, attrs: &EventAttrs<'_>) -> bool {
        let checks = [
            self.id.as_ref().map(|m| match_scalar(m, attrs.id)),
            self.file.as_ref().map(|m| match_scalar(m, attrs.file)),
            self.tags.as_ref().map(|m| match_tags(m, attrs.tags)),
        ];
        let mut named = checks.iter().flatten().peekable();
        named.peek().is_some() && named.all(|hit| *hit)
    }
}

/// Attributes of one event that rules can see.
#[derive(Debug, Clone, Copy)]
pub struct EventAttrs<'a> {
    pub id: &'a str,
    pub file: &'a str,
    pub tags: &'a [String],
}

fn match_scalar(matcher: &Matcher, value: &str) -> bool {
    match matcher {
        Matcher::One(expected) => expected == value,
        Matcher::All(_) => false,
    }
}

fn match_tags(matcher: &Matcher, tags: &[String]) -> bool {
    match matcher {
        Matcher::One(expected) => tags.iter().any(|t| t == expected),
        Matcher::All(expected) => expected.iter().all(|e| tags.contains(e)),
    }
}

/// Whether any rule in `rules` matches. Empty sets never match.
pub fn any_match(rules: &[FilterRule], attrs: &EventAttrs<'_>) -> bool {
    rules.iter().any(|rule| rule.matches(attrs))
}

/// Decide whether an event is shown.
pub fn is_visible(attrs: &EventAttrs<'_>, whitelist: &[FilterRule], blacklist: &[FilterRule]) -> bool {
    if !whitelist.is_empty() {
        return any_match(whitelist, attrs);
    }
    if !blacklist.is_empty() {
        return !any_match(blacklist, attrs);
    }
    true
}
