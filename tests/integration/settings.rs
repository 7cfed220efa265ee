//! Settings-driven output: sections, colors, levels, thresholds.

use fly::{FlyError, LevelDef, Levels, Message, Section, Settings, Threshold, messages};
use serde_json::json;

use crate::{FILE_NAME, ID, TAG1, logger_with};

const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const CYAN: &str = "\x1b[36m";
const MAGENTA: &str = "\x1b[35m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

fn only(tags: bool, level: bool, file: bool, id: bool) -> Settings {
    Settings {
        print_tags: tags,
        print_level: level,
        print_file_name: file,
        print_id: id,
        ..Settings::default()
    }
}

#[test]
fn print_only_tags() {
    let (_r, logger, _sink) = logger_with(only(true, false, false, false));
    let out = logger.log(messages!["hello"]).tag(TAG1).out().unwrap();
    assert!(out.contains("hello"));
    assert!(out.contains(TAG1));
    assert!(!out.contains("Id:"));
    assert!(!out.contains("Level:"));
    assert!(!out.contains(FILE_NAME));
}

#[test]
fn print_only_level() {
    let (_r, logger, _sink) = logger_with(only(false, true, false, false));
    let out = logger.log(messages!["hello"]).tag(TAG1).out().unwrap();
    assert!(out.contains("hello"));
    assert!(!out.contains(TAG1));
    assert!(out.contains("Level:"));
    assert!(out.contains("log"));
    assert!(!out.contains(FILE_NAME));
}

#[test]
fn print_only_file_name() {
    let (_r, logger, _sink) = logger_with(only(false, false, true, false));
    let out = logger.log(messages!["hello"]).tag(TAG1).out().unwrap();
    assert!(!out.contains(TAG1));
    assert!(out.contains(FILE_NAME));
    assert!(!out.contains("Id:"));
}

#[test]
fn print_only_id() {
    let (_r, logger, _sink) = logger_with(only(false, false, false, true));
    let out = logger.log(messages!["hello"]).tag(TAG1).out().unwrap();
    assert!(!out.contains(TAG1));
    assert!(out.contains("Id:"));
    assert!(out.contains(ID));
}

#[test]
fn no_colors() {
    let (_r, logger, _sink) = logger_with(Settings {
        no_colors: true,
        print_level: true,
        ..Settings::default()
    });
    let out = logger.log(messages!["hello"]).tag(TAG1).out().unwrap();
    for code in [BLUE, CYAN, MAGENTA, YELLOW, GREEN, RESET] {
        assert!(!out.contains(code), "unexpected {code:?} in {out:?}");
    }
}

#[test]
fn default_section_colors() {
    let (_r, logger, _sink) = logger_with(Settings {
        print_level: true,
        ..Settings::default()
    });
    let out = logger.log(messages!["hello"]).tag(TAG1).out().unwrap();
    assert!(out.contains(&format!("{CYAN}{FILE_NAME}{RESET}")));
    assert!(out.contains(&format!("{MAGENTA}{ID}{RESET}")));
    assert!(out.contains(&format!("{BLUE}hello{RESET}")));
    assert!(out.contains(&format!("{YELLOW}log{RESET}")));
    assert!(out.contains(&format!("{GREEN}[{TAG1}]{RESET}")));
}

#[test]
fn custom_default_colors() {
    let red = "RED".to_string();
    let (_r, logger, _sink) = logger_with(Settings {
        print_level: true,
        default_message_color: red.clone(),
        default_file_name_color: red.clone(),
        default_id_color: red.clone(),
        default_level_color: red.clone(),
        default_tags_color: red,
        ..Settings::default()
    });
    let out = logger.log(messages!["hello"]).tag(TAG1).out().unwrap();
    assert!(out.contains(&format!("{RED}hello{RESET}")));
    assert!(out.contains(&format!("{RED}{ID}{RESET}")));
    assert!(out.contains(&format!("{RED}log{RESET}")));
    assert!(out.contains(&format!("{RED}[{TAG1}]{RESET}")));
    assert!(out.contains(&format!("{RED}{FILE_NAME}{RESET}")));
}

#[test]
fn threshold_number_and_name() {
    let mut levels = Levels::new();
    levels.insert("foo".to_string(), LevelDef::new(10));
    levels.insert("thresh".to_string(), LevelDef::new(50));
    levels.insert("bar".to_string(), LevelDef::new(100));

    for threshold in [Threshold::Value(50), Threshold::Name("thresh".to_string())] {
        let (_r, logger, _sink) = logger_with(Settings {
            threshold_level: threshold,
            keep_default_levels: false,
            levels: Some(levels.clone()),
            ..Settings::default()
        });
        assert!(logger.invoke("foo", messages!["foo"]).out().is_none());
        assert!(logger.invoke("bar", messages!["bar"]).out().is_some());
    }
}

#[test]
fn threshold_suppresses_lower_default_level() {
    let (_r, logger, sink) = logger_with(Settings {
        threshold_level: Threshold::Value(200),
        ..Settings::default()
    });
    // debug = 100 < 200
    assert!(logger.debug(messages!["quiet"]).out().is_none());
    assert!(sink.is_empty());
}

#[test]
fn threshold_invalid_name_fails_construction() {
    let registry = fly::Registry::new();
    let err = registry
        .create_with_sink(
            ID,
            Settings {
                threshold_level: Threshold::Name("invalid".to_string()),
                ..Settings::default()
            },
            fly::MemorySink::new(),
        )
        .unwrap_err();
    assert!(matches!(err, FlyError::InvalidThresholdLevel { ref level, .. } if level == "invalid"));
    assert!(registry.is_empty());
}

#[test]
fn allow_string_return_false() {
    let (_r, logger, sink) = logger_with(Settings {
        allow_string_return: false,
        ..Settings::default()
    });
    assert!(logger.log(messages!["hello"]).out().is_none());
    assert_eq!(sink.len(), 1);
}

#[test]
fn custom_print_order() {
    let (_r, logger, sink) = logger_with(Settings {
        no_colors: true,
        print_id: true,
        print_level: true,
        print_tags: true,
        print_order: vec![Section::Id, Section::Message, Section::Level],
        ..Settings::default()
    });
    let out = logger.log(messages!["hello"]).tag(TAG1).out().unwrap();
    assert!(!out.contains(TAG1));
    assert_eq!(out, "Id: id; Message: hello; Level: log");
    assert_eq!(sink.lines(), vec![out]);
}

#[test]
fn log_and_tag_delimiters() {
    let (_r, logger, _sink) = logger_with(Settings {
        log_delimiter: " {||} ".to_string(),
        tag_delimiter: " {//} ".to_string(),
        ..Settings::default()
    });
    let out = logger.log(messages!["hello"]).tag(TAG1).tag("tag2").out().unwrap();
    assert!(out.contains(" {||} "));
    assert!(out.contains(" {//} "));
}

#[test]
fn message_normalization_in_output() {
    let (_r, logger, _sink) = logger_with(Settings {
        no_colors: true,
        print_labels: false,
        print_order: vec![Section::Message],
        ..Settings::default()
    });
    let err = std::io::Error::other("boom");
    let line = logger
        .log(vec![
            Message::from(""),
            Message::Null,
            Message::from(json!({"a": 1})),
            Message::error(&err),
            Message::from(None::<&str>),
        ])
        .out()
        .unwrap();
    assert_eq!(line, r#"''null{"a":1}boom undefined"#);
}

#[test]
fn smart_join_in_output() {
    let (_r, logger, _sink) = logger_with(Settings {
        no_colors: true,
        print_labels: false,
        print_order: vec![Section::Message],
        ..Settings::default()
    });
    let line = logger.log(messages!["(hi)", "there", "friend", "!"]).out().unwrap();
    assert_eq!(line, "(hi)there friend!");
}
