//! The chainable per-call log entry.
//!
//! Every level invocation returns an [`Entry`]. Chained calls refine it and
//! [`Entry::out`] commits it:
//!
//! ```
//! use fly::{MemorySink, Settings, Registry, messages};
//!
//! let registry = Registry::new();
//! let sink = MemorySink::new();
//! let settings = Settings { no_colors: true, file_name: Some("doc.rs".into()), ..Settings::default() };
//! let logger = registry.create_with_sink("doc", settings, sink.clone()).unwrap();
//!
//! let line = logger
//!     .invoke("log", messages!["cache warmed in", 12, "ms"])
//!     .tag("startup")
//!     .tag("verbose")
//!     .when(false)
//!     .out();
//!
//! assert_eq!(
//!     line.as_deref(),
//!     Some("FileName: doc.rs; Id: doc; Message: cache warmed in 12 ms; Tags: [startup]")
//! );
//! assert_eq!(sink.len(), 1);
//! ```
//!
//! An entry is either active or suppressed. A suppressed entry ignores every
//! further call and never writes anything. `when(false)` right after `tag` or
//! `color` only undoes that one step; anywhere else it suppresses the entry.

use crate::color::Color;
use crate::filter::{self, EventAttrs};
use crate::formatter::{self, Record};
use crate::logger::Logger;
use crate::message::{self, Message};

/// One log event under construction.
#[must_use = "an entry does nothing until `out()` is called"]
pub struct Entry<'a> {
    state: State<'a>,
}

enum State<'a> {
    Active(Event<'a>),
    Suppressed,
}

/// Context accumulated by an active entry.
struct Event<'a> {
    logger: &'a Logger,
    level: &'a str,
    force_caps: bool,
    messages: Vec<Message>,
    tags: Vec<String>,
    color: String,
    /// What `when(false)` reverts, if the previous step can be reverted.
    undo: Option<Undo>,
}

enum Undo {
    Tag,
    Color(String),
}

impl<'a> Entry<'a> {
    pub(crate) fn active(
        logger: &'a Logger,
        level: &'a str,
        force_caps: bool,
        color: String,
        messages: Vec<Message>,
    ) -> Self {
        Self {
            state: State::Active(Event {
                logger,
                level,
                force_caps,
                messages,
                tags: Vec::new(),
                color,
                undo: None,
            }),
        }
    }

    pub(crate) const fn suppressed() -> Self {
        Self {
            state: State::Suppressed,
        }
    }

    /// Whether this entry can no longer produce output.
    pub const fn is_suppressed(&self) -> bool {
        matches!(self.state, State::Suppressed)
    }

    /// Tags accumulated so far (empty once suppressed).
    pub fn tags(&self) -> &[String] {
        match &self.state {
            State::Active(event) => &event.tags,
            State::Suppressed => &[],
        }
    }

    /// Current message color name, if the entry is still active.
    pub fn current_color(&self) -> Option<&str> {
        match &self.state {
            State::Active(event) => Some(&event.color),
            State::Suppressed => None,
        }
    }

    /// Append a tag.
    pub fn tag(self, name: impl Into<String>) -> Self {
        self.map(|mut event| {
            event.tags.push(name.into());
            event.undo = Some(Undo::Tag);
            event
        })
    }

    /// Change the message color.
    ///
    /// An empty or unknown name warns and uses the logger's default message
    /// color instead.
    pub fn color(self, name: &str) -> Self {
        self.map(|mut event| {
            let logger = event.logger;
            let next = if Color::from_name(name).is_some() {
                name.to_string()
            } else {
                if name.trim().is_empty() {
                    log::warn!("no color provided (using default)");
                } else {
                    log::warn!("color not found: {name} (using default)");
                }
                logger.settings().default_message_color.clone()
            };
            let previous = std::mem::replace(&mut event.color, next);
            event.undo = Some(Undo::Color(previous));
            event
        })
    }

    /// Conditional step, the `if` of the chain.
    ///
    /// Right after [`tag`](Self::tag) or [`color`](Self::color), `false`
    /// reverts just that call and the entry stays active. Anywhere else,
    /// `false` suppresses the entry.
    pub fn when(self, condition: bool) -> Self {
        let mut event = match self.state {
            State::Active(event) => event,
            State::Suppressed => return Self::suppressed(),
        };
        let undo = event.undo.take();
        if condition {
            return Self {
                state: State::Active(event),
            };
        }
        match undo {
            Some(Undo::Tag) => {
                event.tags.pop();
            }
            Some(Undo::Color(previous)) => event.color = previous,
            None => return Self::suppressed(),
        }
        Self {
            state: State::Active(event),
        }
    }

    /// Commit the entry.
    ///
    /// Writes one line to the logger's sink unless the entry is suppressed,
    /// filtered out, or has no messages. The rendered line is returned only
    /// when the logger allows string returns.
    pub fn out(self) -> Option<String> {
        match self.state {
            State::Active(event) => event.commit(),
            State::Suppressed => None,
        }
    }

    fn map(self, f: impl FnOnce(Event<'a>) -> Event<'a>) -> Self {
        match self.state {
            State::Active(event) => Self {
                state: State::Active(f(event)),
            },
            State::Suppressed => Self::suppressed(),
        }
    }
}

impl Event<'_> {
    fn commit(self) -> Option<String> {
        let logger = self.logger;
        if !logger.is_alive() {
            return None;
        }
        let settings = logger.settings();

        let attrs = EventAttrs {
            id: logger.id(),
            file: logger.file_name(),
            tags: &self.tags,
        };
        if !filter::is_visible(&attrs, &settings.whitelist, &settings.blacklist) {
            return None;
        }

        if self.messages.is_empty() {
            log::warn!("logger '{}' has no messages", logger.id());
            return None;
        }

        let tokens = message::normalize(&self.messages, self.force_caps);
        let text = message::smart_join(&tokens);

        let record = Record {
            id: logger.id(),
            file_name: logger.file_name(),
            level: self.level,
            tags: &self.tags,
            color: &self.color,
            message: &text,
        };
        let mut line = String::new();
        formatter::format_record(&record, settings, &mut line);

        logger.write_line(&line);

        settings.allow_string_return.then_some(line)
    }
}
