//! Integration tests for the `fly` library and binary.

mod lifecycle;
mod settings;

use fly::{FilterRule, Logger, MemorySink, Registry, Settings};

pub const ID: &str = "id";
pub const FILE_NAME: &str = "FilterTest";
pub const TAG1: &str = "tag1";
pub const TAG2: &str = "tag2";

/// A fresh registry holding one logger with id [`ID`] and file [`FILE_NAME`].
pub fn logger_with(settings: Settings) -> (Registry, Logger, MemorySink) {
    let registry = Registry::new();
    let sink = MemorySink::new();
    let settings = Settings {
        file_name: Some(FILE_NAME.to_string()),
        ..settings
    };
    let logger = registry
        .create_with_sink(ID, settings, sink.clone())
        .unwrap();
    (registry, logger, sink)
}

/// A second logger in the same registry.
pub fn other_logger(registry: &Registry, id: &str, file: Option<&str>, settings: Settings) -> Logger {
    registry
        .create_with_sink(
            id,
            Settings {
                file_name: file.map(str::to_string),
                auto_detect_file_name: false,
                ..settings
            },
            MemorySink::new(),
        )
        .unwrap()
}

pub fn rule() -> FilterRule {
    FilterRule::default()
}
