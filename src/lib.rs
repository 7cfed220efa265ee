//! `fly` — configurable console logging.
//!
//! Register named loggers with their own levels, colors, filters and output
//! layout, then log through a small chainable API: every level invocation
//! returns an [`Entry`] that can be tagged, recolored and made conditional
//! before [`Entry::out`] prints it.
//!
//! # Example
//!
//! ```
//! use fly::{MemorySink, Settings, messages};
//!
//! let sink = MemorySink::new();
//! let settings = Settings {
//!     no_colors: true,
//!     file_name: Some("main.rs".to_string()),
//!     ..Settings::default()
//! };
//! let logger = fly::create_with_sink("lib-doc", settings, sink.clone()).unwrap();
//!
//! let line = logger.log(messages!["listening on port", 8080]).tag("net").out();
//! assert_eq!(
//!     line.as_deref(),
//!     Some("FileName: main.rs; Id: lib-doc; Message: listening on port 8080; Tags: [net]")
//! );
//! assert_eq!(sink.lines().len(), 1);
//! # logger.destroy();
//! ```

pub mod cli;
pub mod color;
pub mod config;
pub mod entry;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod level;
pub mod logger;
pub mod message;
pub mod registry;
pub mod sink;


// Re-export primary API types for convenience.
pub use color::Color;
pub use config::{Section, Settings};
pub use entry::Entry;
pub use error::FlyError;
pub use filter::{EventAttrs, FilterRule, Matcher, is_visible};
pub use formatter::{Record, format_record};
pub use level::{LevelDef, Levels, Threshold, default_levels};
pub use logger::Logger;
pub use message::{Message, normalize, smart_join};
pub use registry::{Registry, create, create_with_sink, destroy_all, get};
pub use sink::{MemorySink, Sink, StdoutSink};
