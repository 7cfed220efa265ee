//! Logger instances.
//!
//! A [`Logger`] is a cheap, cloneable handle to one registered instance. Its
//! settings are fixed at creation; destroying it turns every later
//! invocation into a suppressed entry.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::config::Settings;
use crate::entry::Entry;
use crate::level::{LevelDef, Levels};
use crate::message::Message;
use crate::registry::Instances;
use crate::sink::Sink;

/// Handle to a registered logger.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

struct Inner {
    id: String,
    settings: Settings,
    /// Merged and validated level set.
    levels: Levels,
    /// Resolved numeric threshold.
    threshold: u32,
    /// Resolved origin label.
    file_name: String,
    sink: Mutex<Box<dyn Sink>>,
    alive: AtomicBool,
    registry: Weak<Mutex<Instances>>,
}

impl Logger {
    pub(crate) fn new(
        id: String,
        settings: Settings,
        levels: Levels,
        threshold: u32,
        file_name: String,
        sink: Box<dyn Sink>,
        registry: Weak<Mutex<Instances>>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                id,
                settings,
                levels,
                threshold,
                file_name,
                sink: Mutex::new(sink),
                alive: AtomicBool::new(true),
                registry,
            }),
        }
    }

    pub fn id(&self) -> &str {
        &self.inner.id
    }

    pub fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    /// The merged level set this logger accepts.
    pub fn levels(&self) -> &Levels {
        &self.inner.levels
    }

    pub fn level(&self, name: &str) -> Option<&LevelDef> {
        self.inner.levels.get(name)
    }

    pub fn has_level(&self, name: &str) -> bool {
        self.inner.levels.contains_key(name)
    }

    pub fn level_names(&self) -> impl Iterator<Item = &str> {
        self.inner.levels.keys().map(String::as_str)
    }

    /// Numeric cutoff below which entries are suppressed.
    pub fn threshold(&self) -> u32 {
        self.inner.threshold
    }

    pub fn file_name(&self) -> &str {
        &self.inner.file_name
    }

    /// `false` once the logger has been destroyed.
    pub fn is_alive(&self) -> bool {
        self.inner.alive.load(Ordering::Acquire)
    }

    /// Start an entry at the named level.
    ///
    /// The entry is suppressed when the logger is destroyed, the level is
    /// unknown (with a warning), or the level is below the threshold.
    pub fn invoke<I, M>(&self, level: &str, messages: I) -> Entry<'_>
    where
        I: IntoIterator<Item = M>,
        M: Into<Message>,
    {
        if !self.is_alive() {
            return Entry::suppressed();
        }

        let Some((name, def)) = self.inner.levels.get_key_value(level) else {
            log::warn!("logger '{}' has no level named '{level}'", self.id());
            return Entry::suppressed();
        };

        if def.value < self.inner.threshold {
            return Entry::suppressed();
        }

        let color = def
            .default_color
            .clone()
            .unwrap_or_else(|| self.inner.settings.default_message_color.clone());

        Entry::active(
            self,
            name,
            def.force_caps,
            color,
            messages.into_iter().map(Into::into).collect(),
        )
    }

    pub fn trace<I: IntoIterator<Item = M>, M: Into<Message>>(&self, messages: I) -> Entry<'_> {
        self.invoke("trace", messages)
    }

    pub fn debug<I: IntoIterator<Item = M>, M: Into<Message>>(&self, messages: I) -> Entry<'_> {
        self.invoke("debug", messages)
    }

    pub fn log<I: IntoIterator<Item = M>, M: Into<Message>>(&self, messages: I) -> Entry<'_> {
        self.invoke("log", messages)
    }

    pub fn info<I: IntoIterator<Item = M>, M: Into<Message>>(&self, messages: I) -> Entry<'_> {
        self.invoke("info", messages)
    }

    pub fn warn<I: IntoIterator<Item = M>, M: Into<Message>>(&self, messages: I) -> Entry<'_> {
        self.invoke("warn", messages)
    }

    pub fn error<I: IntoIterator<Item = M>, M: Into<Message>>(&self, messages: I) -> Entry<'_> {
        self.invoke("error", messages)
    }

    pub fn critical<I: IntoIterator<Item = M>, M: Into<Message>>(&self, messages: I) -> Entry<'_> {
        self.invoke("critical", messages)
    }

    /// Remove this logger from its registry and silence it.
    pub fn destroy(&self) {
        self.kill();
        if let Some(registry) = self.inner.registry.upgrade() {
            let mut instances = registry.lock();
            if instances
                .get(self.id())
                .is_some_and(|other| other.ptr_eq(self))
            {
                instances.remove(self.id());
            }
        }
    }

    pub(crate) fn kill(&self) {
        self.inner.alive.store(false, Ordering::Release);
    }

    pub(crate) fn write_line(&self, line: &str) {
        self.inner.sink.lock().write_line(line);
    }

    /// Whether both handles point at the same instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("id", &self.inner.id)
            .field("file_name", &self.inner.file_name)
            .field("threshold", &self.inner.threshold)
            .field("alive", &self.is_alive())
            .finish_non_exhaustive()
    }
}
