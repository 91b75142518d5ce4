//! Option mutations
//!
//! Each option is an independent setter captured as a value. A list of options
//! is folded onto [`Config::default`] in the order given, so a later option
//! overrides an earlier one that touches the same field. No validation happens
//! here; a bad file path only surfaces when the logger is assembled.
//!
//! ```rust
//! use logbean::options::{with_level, with_service};
//! use logbean::Config;
//!
//! let config = Config::from_options([with_service("billing"), with_level("warn")]);
//! assert_eq!(config.service.as_deref(), Some("billing"));
//! ```

use std::fmt;
use std::path::PathBuf;

use super::{Config, SinkKind};
use crate::format::{Timestamp, Value};
use crate::level::LevelFilter;
use crate::writer::SharedWriter;

type Mutation = dyn FnOnce(Config) -> Config + Send;

/// One configuration mutation
pub struct ConfigOption(Box<Mutation>);

impl ConfigOption {
    /// Wrap an arbitrary mutation
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(Config) -> Config + Send + 'static,
    {
        Self(Box::new(f))
    }

    /// Apply the mutation
    #[must_use]
    pub fn apply(self, config: Config) -> Config {
        (self.0)(config)
    }
}

impl fmt::Debug for ConfigOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConfigOption").finish_non_exhaustive()
    }
}

/// Set the output sink kind
pub fn with_sink(sink: SinkKind) -> ConfigOption {
    ConfigOption::new(move |config| config.with_sink(sink))
}

/// Set the file path used by the file sinks
pub fn with_file_path(path: impl Into<PathBuf>) -> ConfigOption {
    let path = path.into();
    ConfigOption::new(move |config| config.with_file_path(path))
}

/// Set the minimum severity; unknown names become `info`
pub fn with_level(level: impl Into<LevelFilter>) -> ConfigOption {
    let level = level.into();
    ConfigOption::new(move |config| config.with_level(level))
}

/// Write to `writer`, bypassing sink resolution entirely
pub fn with_writer(writer: impl Into<SharedWriter>) -> ConfigOption {
    let writer = writer.into();
    ConfigOption::new(move |config| config.with_writer(writer))
}

/// Set the `service` field
pub fn with_service(service: impl Into<String>) -> ConfigOption {
    let service = service.into();
    ConfigOption::new(move |config| config.with_service(service))
}

/// Set the call-site frame depth
pub fn with_caller_depth(depth: usize) -> ConfigOption {
    ConfigOption::new(move |config| config.with_caller_depth(depth))
}

/// Replace the extra static fields
pub fn with_fields<I, K, V>(fields: I) -> ConfigOption
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    let fields: Vec<(String, Value)> = fields
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    ConfigOption::new(move |config| config.with_fields(fields))
}

/// Set the timestamp provider
pub fn with_timestamp(timestamp: Timestamp) -> ConfigOption {
    ConfigOption::new(move |config| config.with_timestamp(timestamp))
}
