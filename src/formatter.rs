//! Output assembly for committed log entries.
//!
//! Renders the sections named by `print_order`, each as
//! `label? + colored(value)`, joined by `log_delimiter`:
//!
//! ```text
//! FileName: main.rs; Id: api; Message: server started; Tags: [boot, net]
//! ```

use std::fmt::Write;

use owo_colors::OwoColorize;

use crate::color::Color;
use crate::config::{Section, Settings};

/// Everything the assembler needs to know about one entry.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub id: &'a str,
    pub file_name: &'a str,
    pub level: &'a str,
    pub tags: &'a [String],
    /// Color name for the message section.
    pub color: &'a str,
    /// The already joined message text.
    pub message: &'a str,
}

/// Render `record` according to `settings`, writing the line into `out`.
pub fn format_record(record: &Record<'_>, settings: &Settings, out: &mut String) {
    let mut first = true;

    for &section in &settings.print_order {
        if !settings.prints(section) {
            continue;
        }

        let value = match section {
            Section::FileName => record.file_name.to_string(),
            Section::Id => record.id.to_string(),
            Section::Level => record.level.to_string(),
            Section::Message => record.message.to_string(),
            Section::Tags => {
                if record.tags.is_empty() {
                    continue;
                }
                format!("[{}]", record.tags.join(&settings.tag_delimiter))
            }
        };

        if !first {
            out.push_str(&settings.log_delimiter);
        }
        first = false;

        if settings.print_labels {
            let _ = write!(out, "{}: ", section.label());
        }

        if settings.no_colors {
            out.push_str(&value);
        } else {
            let color_name = match section {
                Section::Message => record.color,
                other => settings.section_color(other),
            };
            let style = Color::resolve(color_name).style();
            let _ = write!(out, "{}", value.style(style));
        }
    }
}
