//! Logger factory and registry.
//!
//! Identifiers are unique per registry. The process-wide registry behind
//! [`create`], [`get`] and [`destroy_all`] covers the common case; a
//! [`Registry`] can also be created on its own when isolation is needed.

use std::collections::HashMap;
use std::panic::Location;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use parking_lot::Mutex;

use crate::config::Settings;
use crate::error::FlyError;
use crate::level::{merge_levels, validate_levels};
use crate::logger::Logger;
use crate::sink::{Sink, StdoutSink};

pub(crate) type Instances = HashMap<String, Logger>;

/// Origin label used when auto-detection cannot name the source file.
pub const UNDETECTABLE_FILE_NAME: &str = "[undetectable]";

/// Origin label used when auto-detection is off and no name was given.
pub const NO_FILE_NAME: &str = "[none]";

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// A set of loggers keyed by identifier.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    instances: Arc<Mutex<Instances>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Create and register a logger that prints to stdout.
    ///
    /// See [`create_with_sink`](Self::create_with_sink) for the validation
    /// rules.
    #[track_caller]
    pub fn create(&self, id: &str, settings: Settings) -> Result<Logger, FlyError> {
        self.create_at(id, settings, Box::new(StdoutSink), Location::caller())
    }

    /// Create and register a logger writing to `sink`.
    ///
    /// Fails when `id` is empty or taken, when the merged level set is empty
    /// or has duplicate values, or when a named threshold does not exist.
    /// Nothing is registered on failure.
    ///
    /// With `auto_detect_file_name` and no explicit `file_name`, the logger's
    /// origin is the base name of the source file that called this function.
    #[track_caller]
    pub fn create_with_sink(
        &self,
        id: &str,
        settings: Settings,
        sink: impl Sink + 'static,
    ) -> Result<Logger, FlyError> {
        self.create_at(id, settings, Box::new(sink), Location::caller())
    }

    fn create_at(
        &self,
        id: &str,
        settings: Settings,
        sink: Box<dyn Sink>,
        caller: &Location<'_>,
    ) -> Result<Logger, FlyError> {
        if id.is_empty() {
            return Err(FlyError::MissingIdentifier);
        }

        // Held across validation so two callers cannot race for one id.
        let mut instances = self.instances.lock();
        if instances.contains_key(id) {
            return Err(FlyError::DuplicateIdentifier(id.to_string()));
        }

        let levels = merge_levels(settings.levels.as_ref(), settings.keep_default_levels);
        validate_levels(id, &levels)?;

        let file_name = resolve_file_name(&settings, caller);
        let threshold = settings.threshold_level.resolve(id, &levels)?;

        let logger = Logger::new(
            id.to_string(),
            settings,
            levels,
            threshold,
            file_name,
            sink,
            Arc::downgrade(&self.instances),
        );
        instances.insert(id.to_string(), logger.clone());
        log::debug!("registered logger '{id}' (threshold {threshold})");

        Ok(logger)
    }

    pub fn get(&self, id: &str) -> Option<Logger> {
        self.instances.lock().get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.instances.lock().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.instances.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.lock().is_empty()
    }

    /// Destroy every registered logger.
    ///
    /// Existing handles stay valid but only produce suppressed entries, and
    /// their identifiers become available again.
    pub fn destroy_all(&self) {
        let drained: Vec<Logger> = self.instances.lock().drain().map(|(_, l)| l).collect();
        for logger in &drained {
            logger.kill();
        }
        log::debug!("destroyed {} logger(s)", drained.len());
    }
}

fn resolve_file_name(settings: &Settings, caller: &Location<'_>) -> String {
    if let Some(name) = settings.file_name.as_deref().filter(|n| !n.is_empty()) {
        return name.to_string();
    }
    if !settings.auto_detect_file_name {
        return NO_FILE_NAME.to_string();
    }
    Path::new(caller.file())
        .file_name()
        .and_then(|n| n.to_str())
        .map_or_else(|| UNDETECTABLE_FILE_NAME.to_string(), str::to_string)
}

/// Create a logger in the process-wide registry, printing to stdout.
#[track_caller]
pub fn create(id: &str, settings: Settings) -> Result<Logger, FlyError> {
    Registry::global().create_at(id, settings, Box::new(StdoutSink), Location::caller())
}

/// Create a logger in the process-wide registry with a custom sink.
#[track_caller]
pub fn create_with_sink(
    id: &str,
    settings: Settings,
    sink: impl Sink + 'static,
) -> Result<Logger, FlyError> {
    Registry::global().create_at(id, settings, Box::new(sink), Location::caller())
}

/// Look up a logger in the process-wide registry.
pub fn get(id: &str) -> Option<Logger> {
    Registry::global().get(id)
}

/// Destroy every logger in the process-wide registry.
pub fn destroy_all() {
    Registry::global().destroy_all();
}
