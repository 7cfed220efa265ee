//! Level definitions, the built-in level set, and threshold resolution.
//!
//! A level is a named severity with an unsigned numeric value. Higher values
//! are more severe; an event is emitted only when its value is at or above
//! the logger's threshold.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Deserialize;

use crate::error::FlyError;

/// Level name → definition.
pub type Levels = BTreeMap<String, LevelDef>;

/// A single level definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDef {
    /// Severity; unique within one logger.
    pub value: u32,
    /// Message color for this level. Falls back to the logger's
    /// `default_message_color` when absent.
    #[serde(default)]
    pub default_color: Option<String>,
    /// Upper-case every message token logged at this level.
    #[serde(default)]
    pub force_caps: bool,
}

impl LevelDef {
    pub const fn new(value: u32) -> Self {
        Self {
            value,
            default_color: None,
            force_caps: false,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = Some(color.into());
        self
    }

    #[must_use]
    pub const fn with_force_caps(mut self, force_caps: bool) -> Self {
        self.force_caps = force_caps;
        self
    }
}

/// The level set every logger starts from.
///
/// | name     | value | color  | caps |
/// |----------|-------|--------|------|
/// | trace    | 10    |        |      |
/// | debug    | 100   |        |      |
/// | log      | 200   |        |      |
/// | info     | 300   |        |      |
/// | warn     | 400   | YELLOW |      |
/// | error    | 500   | RED    |      |
/// | critical | 1000  | RED    | yes  |
pub fn default_levels() -> Levels {
    let mut levels = Levels::new();
    levels.insert("trace".to_string(), LevelDef::new(10));
    levels.insert("debug".to_string(), LevelDef::new(100));
    levels.insert("log".to_string(), LevelDef::new(200));
    levels.insert("info".to_string(), LevelDef::new(300));
    levels.insert("warn".to_string(), LevelDef::new(400).with_color("YELLOW"));
    levels.insert("error".to_string(), LevelDef::new(500).with_color("RED"));
    levels.insert(
        "critical".to_string(),
        LevelDef::new(1000).with_color("RED").with_force_caps(true),
    );
    levels
}

/// Merge user levels with the defaults.
///
/// With `keep_defaults`, user entries are layered over the defaults (same
/// name wins). Without it, the user set replaces the defaults entirely.
/// No user levels at all means the defaults.
pub fn merge_levels(user: Option<&Levels>, keep_defaults: bool) -> Levels {
    match user {
        None => default_levels(),
        Some(user) if keep_defaults => {
            let mut merged = default_levels();
            merged.extend(user.iter().map(|(k, v)| (k.clone(), v.clone())));
            merged
        }
        Some(user) => user.clone(),
    }
}

/// Check that `levels` is non-empty and that no two names share a value.
pub fn validate_levels(id: &str, levels: &Levels) -> Result<(), FlyError> {
    if levels.is_empty() {
        return Err(FlyError::NoLevelsDefined(id.to_string()));
    }

    let mut seen = BTreeSet::new();
    let mut duplicates = BTreeSet::new();
    for def in levels.values() {
        if !seen.insert(def.value) {
            duplicates.insert(def.value);
        }
    }

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(FlyError::DuplicateLevelValue {
            id: id.to_string(),
            values: duplicates.into_iter().collect(),
        })
    }
}

/// Minimum level an event needs to be emitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Threshold {
    /// A raw numeric cutoff.
    Value(u32),
    /// The value of a named level.
    Name(String),
}

impl Default for Threshold {
    fn default() -> Self {
        Self::Value(0)
    }
}

impl Threshold {
    /// Resolve to a numeric cutoff against `levels`.
    pub fn resolve(&self, id: &str, levels: &Levels) -> Result<u32, FlyError> {
        match self {
            Self::Value(value) => Ok(*value),
            Self::Name(name) => {
                levels
                    .get(name)
                    .map(|def| def.value)
                    .ok_or_else(|| FlyError::InvalidThresholdLevel {
                        id: id.to_string(),
                        level: name.clone(),
                    })
            }
        }
    }

    /// Parse a CLI argument: digits become a value, anything else a name.
    pub fn from_arg(s: &str) -> Self {
        s.parse::<u32>()
            .map_or_else(|_| Self::Name(s.to_string()), Self::Value)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}
