//! Logger creation, registry uniqueness and teardown.

use fly::{FlyError, MemorySink, Registry, Settings, messages};

#[test]
fn normal_functionality() {
    let registry = Registry::new();
    let sink = MemorySink::new();
    let logger = registry
        .create_with_sink("id", Settings::default(), sink.clone())
        .unwrap();
    assert!(logger.log(messages!["hello"]).out().is_some());
    assert_eq!(sink.len(), 1);
}

#[test]
fn id_already_exists() {
    let registry = Registry::new();
    registry
        .create_with_sink("id", Settings::default(), MemorySink::new())
        .unwrap();
    let err = registry
        .create_with_sink("id", Settings::default(), MemorySink::new())
        .unwrap_err();
    assert!(matches!(err, FlyError::DuplicateIdentifier(ref id) if id == "id"));
    assert_eq!(err.to_string(), "logger with id 'id' already exists");
}

#[test]
fn no_id_given() {
    let registry = Registry::new();
    let err = registry
        .create_with_sink("", Settings::default(), MemorySink::new())
        .unwrap_err();
    assert!(matches!(err, FlyError::MissingIdentifier));
}

#[test]
fn auto_detected_file_name_is_caller_file() {
    let registry = Registry::new();
    let logger = registry
        .create_with_sink("id", Settings::default(), MemorySink::new())
        .unwrap();
    assert_eq!(logger.file_name(), "lifecycle.rs");
}

// The only test in this binary that touches the process-wide registry, so
// `destroy_all` cannot race with other tests.
#[test]
fn global_destroy_all_then_reuse_id() {
    let sink = MemorySink::new();
    let first = fly::create_with_sink("lifecycle", Settings::default(), sink.clone()).unwrap();
    assert!(matches!(
        fly::create_with_sink("lifecycle", Settings::default(), MemorySink::new()),
        Err(FlyError::DuplicateIdentifier(_))
    ));

    fly::destroy_all();
    assert!(fly::get("lifecycle").is_none());
    assert!(first.log(messages!["after teardown"]).out().is_none());
    assert!(sink.is_empty());

    let second = fly::create_with_sink("lifecycle", Settings::default(), sink.clone()).unwrap();
    assert!(second.log(messages!["hello"]).out().is_some());
    assert_eq!(sink.len(), 1);
    second.destroy();
}
