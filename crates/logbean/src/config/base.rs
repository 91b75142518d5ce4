//! Core configuration types

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ConfigOption;
use crate::format::{Encoding, Timestamp, Value};
use crate::level::LevelFilter;
use crate::writer::SharedWriter;

/// File path used by the file sinks when none is configured
pub const DEFAULT_FILE_PATH: &str = "./app.log";

/// Call-site depth that names the emit call itself
pub const DEFAULT_CALLER_DEPTH: usize = 5;

/// Logging configuration
///
/// Assembled once into a [`Logger`](crate::Logger); the logger keeps no
/// reference to it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output sink kind
    pub sink: SinkKind,

    /// Minimum severity ("debug", "info", "warn", "error" or "all")
    pub level: LevelFilter,

    /// Path used by the file sinks
    pub file_path: PathBuf,

    /// Explicit writer; overrides whatever `sink` and `file_path` would open
    #[serde(skip)]
    pub writer: Option<SharedWriter>,

    /// Call-site depth. The default reports the emit call; with the
    /// `backtrace` feature each step above it reports one caller further out.
    pub caller_depth: usize,

    /// Value of the `service` field
    pub service: Option<String>,

    /// Extra static fields, written in registration order
    pub fields: IndexMap<String, Value>,

    /// Producer of the `ts` field
    #[serde(skip)]
    pub timestamp: Timestamp,
}

/// Output sink kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    /// Standard output, JSON lines
    #[default]
    Standard,
    /// Append-only file, logfmt lines
    PlainFile,
    /// Append-only file, JSON lines
    StructuredFile,
}

impl SinkKind {
    /// Encoding applied to records for this kind
    #[must_use]
    pub const fn encoding(self) -> Encoding {
        match self {
            Self::PlainFile => Encoding::Logfmt,
            Self::Standard | Self::StructuredFile => Encoding::Json,
        }
    }

    /// Whether this kind opens `file_path` when no writer is given
    #[must_use]
    pub const fn is_file(self) -> bool {
        matches!(self, Self::PlainFile | Self::StructuredFile)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sink: SinkKind::Standard,
            level: LevelFilter::DEFAULT,
            file_path: PathBuf::from(DEFAULT_FILE_PATH),
            writer: None,
            caller_depth: DEFAULT_CALLER_DEPTH,
            service: None,
            fields: IndexMap::new(),
            timestamp: Timestamp::default(),
        }
    }
}

impl Config {
    /// Fold option mutations onto the defaults, in order
    #[must_use]
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = ConfigOption>,
    {
        Self::default().apply(options)
    }

    /// Fold option mutations onto this configuration, in order
    #[must_use]
    pub fn apply<I>(self, options: I) -> Self
    where
        I: IntoIterator<Item = ConfigOption>,
    {
        options
            .into_iter()
            .fold(self, |config, option| option.apply(config))
    }

    /// Set the sink kind
    #[must_use]
    pub fn with_sink(mut self, sink: SinkKind) -> Self {
        self.sink = sink;
        self
    }

    /// Set the minimum severity; unknown names become `info`
    #[must_use]
    pub fn with_level(mut self, level: impl Into<LevelFilter>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the file path used by the file sinks
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    /// Write to `writer` instead of resolving a sink
    #[must_use]
    pub fn with_writer(mut self, writer: impl Into<SharedWriter>) -> Self {
        self.writer = Some(writer.into());
        self
    }

    /// Set the `service` field
    #[must_use]
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Set the call-site frame depth
    #[must_use]
    pub fn with_caller_depth(mut self, depth: usize) -> Self {
        self.caller_depth = depth;
        self
    }

    /// Replace the extra static fields
    #[must_use]
    pub fn with_fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Add one extra static field
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Set the timestamp provider
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = timestamp;
        self
    }
}
