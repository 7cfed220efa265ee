//! Logger settings with TOML file support.
//!
//! [`Settings`] is the options object handed to the factory. Every field has
//! a default, so a config file only needs the keys it changes. Keys use the
//! camelCase spelling (`printOrder`, `logDelimiter`, ...).
//!
//! For the `fly` binary, settings merge from three sources (highest
//! precedence first):
//! 1. CLI flags
//! 2. Config file (`~/.config/fly/config.toml` or `$XDG_CONFIG_HOME/fly/config.toml`)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::{Cli, ColorMode};
use crate::error::FlyError;
use crate::filter::FilterRule;
use crate::level::{Levels, Threshold};

/// A printable section of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    FileName,
    Id,
    Message,
    Level,
    Tags,
}

impl Section {
    /// Label printed before the section when `print_labels` is on.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FileName => "FileName",
            Self::Id => "Id",
            Self::Message => "Message",
            Self::Level => "Level",
            Self::Tags => "Tags",
        }
    }

    /// Parse a section name as written in `printOrder`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fileName" | "filename" | "file" => Some(Self::FileName),
            "id" => Some(Self::Id),
            "message" => Some(Self::Message),
            "level" => Some(Self::Level),
            "tags" | "tag" => Some(Self::Tags),
            _ => None,
        }
    }
}

/// Options for one logger.
///
/// Use [`Settings::default`] for the built-in defaults and struct update
/// syntax to override individual fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    /// Explicit origin label. Takes precedence over auto-detection.
    pub file_name: Option<String>,
    /// Derive `file_name` from the source file that created the logger.
    pub auto_detect_file_name: bool,
    /// Emit no color escape codes at all.
    pub no_colors: bool,
    pub default_message_color: String,
    pub default_file_name_color: String,
    pub default_id_color: String,
    pub default_level_color: String,
    pub default_tags_color: String,
    /// User level definitions, merged per `keep_default_levels`.
    pub levels: Option<Levels>,
    /// Layer `levels` over the built-in set instead of replacing it.
    pub keep_default_levels: bool,
    pub threshold_level: Threshold,
    /// Return the rendered line from `out()` in addition to printing it.
    pub allow_string_return: bool,
    pub print_tags: bool,
    pub print_level: bool,
    pub print_file_name: bool,
    pub print_id: bool,
    pub print_labels: bool,
    pub print_order: Vec<Section>,
    /// Separator between sections.
    pub log_delimiter: String,
    /// Separator between tags inside the tags section.
    pub tag_delimiter: String,
    pub whitelist: Vec<FilterRule>,
    pub blacklist: Vec<FilterRule>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            file_name: None,
            auto_detect_file_name: true,
            no_colors: false,
            default_message_color: "BLUE".to_string(),
            default_file_name_color: "CYAN".to_string(),
            default_id_color: "MAGENTA".to_string(),
            default_level_color: "YELLOW".to_string(),
            default_tags_color: "GREEN".to_string(),
            levels: None,
            keep_default_levels: true,
            threshold_level: Threshold::default(),
            allow_string_return: true,
            print_tags: true,
            print_level: false,
            print_file_name: true,
            print_id: true,
            print_labels: true,
            print_order: vec![
                Section::FileName,
                Section::Id,
                Section::Message,
                Section::Level,
                Section::Tags,
            ],
            log_delimiter: "; ".to_string(),
            tag_delimiter: ", ".to_string(),
            whitelist: Vec::new(),
            blacklist: Vec::new(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, FlyError> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, FlyError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FlyError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Whether `section` is enabled. The message is always printed.
    pub const fn prints(&self, section: Section) -> bool {
        match section {
            Section::FileName => self.print_file_name,
            Section::Id => self.print_id,
            Section::Message => true,
            Section::Level => self.print_level,
            Section::Tags => self.print_tags,
        }
    }

    /// Configured color name for a non-message section.
    pub fn section_color(&self, section: Section) -> &str {
        match section {
            Section::FileName => &self.default_file_name_color,
            Section::Id => &self.default_id_color,
            Section::Level => &self.default_level_color,
            Section::Tags => &self.default_tags_color,
            Section::Message => &self.default_message_color,
        }
    }

    /// Build [`Settings`] for the `fly` binary, loading the config file if
    /// present.
    ///
    /// Merge precedence: CLI flags > config file > defaults.
    pub fn from_cli(cli: &Cli, use_color: bool) -> Result<Self, FlyError> {
        let config_path = cli.config.clone().unwrap_or_else(Self::default_config_path);

        let mut settings = if config_path.exists() {
            Self::load(&config_path)?
        } else if cli.config.is_some() {
            return Err(FlyError::Config(format!(
                "config file {} does not exist",
                config_path.display()
            )));
        } else {
            Self::default()
        };

        // CLI overrides
        if cli.color != ColorMode::Auto || !use_color {
            settings.no_colors = !use_color;
        }

        if let Some(ref threshold) = cli.threshold {
            settings.threshold_level = Threshold::from_arg(threshold);
        }

        if cli.file_name.is_some() {
            settings.file_name.clone_from(&cli.file_name);
        }

        if let Some(ref order) = cli.print_order {
            settings.print_order = order
                .iter()
                .map(|name| {
                    Section::from_name(name).ok_or_else(|| {
                        FlyError::Config(format!("unknown section '{name}' in --print-order"))
                    })
                })
                .collect::<Result<_, _>>()?;
        }

        if cli.print_level {
            settings.print_level = true;
        }
        if cli.no_labels {
            settings.print_labels = false;
        }

        // A pipe has no meaningful source file.
        if settings.file_name.is_none() {
            settings.auto_detect_file_name = false;
            settings.print_file_name = false;
        }

        Ok(settings)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/fly/config.toml` or `~/.config/fly/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("fly").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("fly")
                .join("config.toml")
        } else {
            PathBuf::from(".config/fly/config.toml")
        }
    }
}
