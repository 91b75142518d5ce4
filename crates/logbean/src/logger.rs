//! The assembled logger handle

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::config::SinkKind;
use crate::format::Value;
use crate::layer::fields::FieldsLayer;
use crate::layer::filter::FilterLayer;
use crate::layer::{Caller, Emit, Entry};
use crate::level::{Level, LevelFilter};

/// Leveled, field-decorating logger
///
/// Cheap to clone; clones share the sink and every setting. Emit methods take
/// alternating key/value tokens and report the line they were called from.
///
/// ```rust
/// use logbean::options::{with_level, with_service, with_writer};
/// use logbean::MemoryWriter;
///
/// let out = MemoryWriter::new();
/// let logger = logbean::init([
///     with_service("billing"),
///     with_level("warn"),
///     with_writer(out.clone()),
/// ]);
///
/// logger.info(["user", "42"]);
/// logger.warn(["retrying", "true"]);
///
/// assert_eq!(out.lines().len(), 1);
/// assert!(out.contents().contains("\"retrying\":\"true\""));
/// ```
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

struct Inner {
    emitter: FilterLayer<FieldsLayer>,
    sink: SinkKind,
}

impl Logger {
    pub(crate) fn new(emitter: FilterLayer<FieldsLayer>, sink: SinkKind) -> Self {
        Self {
            inner: Arc::new(Inner { emitter, sink }),
        }
    }

    /// Emit at debug level
    #[track_caller]
    pub fn debug<I>(&self, keyvals: I)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.log(Level::Debug, keyvals);
    }

    /// Emit at info level
    #[track_caller]
    pub fn info<I>(&self, keyvals: I)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.log(Level::Info, keyvals);
    }

    /// Emit at warn level
    #[track_caller]
    pub fn warn<I>(&self, keyvals: I)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.log(Level::Warn, keyvals);
    }

    /// Emit at error level
    #[track_caller]
    pub fn error<I>(&self, keyvals: I)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.log(Level::Error, keyvals);
    }

    /// Emit alternating key/value tokens at `level`
    ///
    /// Tokens are not converted when `level` is filtered out.
    #[track_caller]
    pub fn log<I>(&self, level: Level, keyvals: I)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        if !self.enabled(level) {
            return;
        }
        let caller = Caller::from(Location::caller());
        self.emit_entry(Entry {
            level,
            caller,
            keyvals: keyvals.into_iter().map(Into::into).collect(),
        });
    }

    /// Emit key/value pairs at `level`
    #[track_caller]
    pub fn log_pairs<I, K, V>(&self, level: Level, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.log(
            level,
            pairs
                .into_iter()
                .flat_map(|(k, v)| [Value::String(k.into()), v.into()]),
        );
    }

    /// Whether a record at `level` would be written
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        self.inner.emitter.enabled(level)
    }

    /// Minimum severity this logger writes
    pub fn level_filter(&self) -> LevelFilter {
        self.inner.emitter.threshold()
    }

    /// Sink kind the logger was assembled with
    pub fn sink_kind(&self) -> SinkKind {
        self.inner.sink
    }

    /// Value of the `service` field, if any
    pub fn service(&self) -> Option<&str> {
        self.inner.emitter.inner().service()
    }

    /// Extra static fields, in output order
    pub fn fields(&self) -> &IndexMap<String, Value> {
        self.inner.emitter.inner().fields()
    }

    /// Whether two handles refer to the same assembled logger
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    pub(crate) fn emit_entry(&self, entry: Entry) {
        self.inner.emitter.emit(entry);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level_filter())
            .field("sink", &self.inner.sink)
            .field("service", &self.service())
            .field("fields", self.fields())
            .finish_non_exhaustive()
    }
}
