//! # logbean - Options-driven structured logging
//!
//! Fold a handful of options onto sensible defaults and get back a leveled
//! logger that stamps every record with a timestamp, its call site, a service
//! name and any static fields you register.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use logbean::options::{with_level, with_service, with_sink, with_file_path};
//! use logbean::SinkKind;
//!
//! let logger = logbean::init([
//!     with_service("billing"),
//!     with_level("warn"),
//!     with_sink(SinkKind::StructuredFile),
//!     with_file_path("./app.log"),
//! ]);
//!
//! logger.info(["user", "42"]);        // below threshold, nothing written
//! logger.warn(["retrying", "true"]);  // one JSON line appended to ./app.log
//! ```
//!
//! ## Pipeline
//!
//! options → [`Config`] → sink resolution → field decoration → severity
//! filter → [`Logger`]. See [`LoggerBuilder`] for the fallible form and
//! [`global`] for the process-wide shared logger.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
pub mod config;
pub mod core;
pub mod format;
pub mod global;
pub mod layer;
pub mod level;
mod logger;
mod macros;
pub mod writer;

// Public API
pub use builder::LoggerBuilder;
pub use config::{Config, ConfigOption, SinkKind, options};
pub use crate::core::{LogError, LogResult};
pub use format::{Encoding, Record, Timestamp, Value};
pub use global::{LoggerCell, global};
pub use layer::Caller;
pub use level::{Level, LevelFilter};
pub use logger::Logger;
pub use writer::{MemoryWriter, SharedWriter, Sink};

/// Prelude for common imports
pub mod prelude {
    pub use crate::options::*;
    pub use crate::{Config, Level, LevelFilter, LogResult, Logger, SinkKind, Timestamp, kv};
}

// ============================================================================
// Initialization Functions
// ============================================================================

/// Fold `options` onto the defaults and assemble a logger.
///
/// # Panics
///
/// Panics if a file sink cannot be opened. Use [`try_init`] to handle that
/// case instead.
pub fn init<I>(options: I) -> Logger
where
    I: IntoIterator<Item = ConfigOption>,
{
    init_with(Config::from_options(options))
}

/// Fold `options` onto the defaults and assemble a logger.
///
/// # Errors
///
/// Returns [`LogError::Open`] if a file sink cannot be opened.
pub fn try_init<I>(options: I) -> LogResult<Logger>
where
    I: IntoIterator<Item = ConfigOption>,
{
    LoggerBuilder::from_options(options).build()
}

/// Assemble a logger from a complete configuration.
///
/// # Panics
///
/// Panics if a file sink cannot be opened.
pub fn init_with(config: Config) -> Logger {
    LoggerBuilder::from_config(config)
        .build()
        .unwrap_or_else(|err| fatal(&err))
}

#[cold]
#[track_caller]
pub(crate) fn fatal(err: &LogError) -> ! {
    panic!("logbean: cannot assemble logger: {err}")
}
