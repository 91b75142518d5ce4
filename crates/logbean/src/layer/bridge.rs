//! Bridge from `tracing` events into a [`Logger`]
//!
//! ```rust
//! use logbean::layer::bridge::LogbeanLayer;
//! use logbean::options::with_writer;
//! use logbean::MemoryWriter;
//! use tracing_subscriber::layer::SubscriberExt;
//!
//! let out = MemoryWriter::new();
//! let logger = logbean::init([with_writer(out.clone())]);
//! let subscriber = tracing_subscriber::registry().with(LogbeanLayer::new(logger));
//!
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::warn!(user = 42, "quota exceeded");
//! });
//! assert!(out.contents().contains("\"msg\":\"quota exceeded\""));
//! ```

use std::fmt;

use smallvec::SmallVec;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use super::{Caller, Entry};
use crate::format::Value;
use crate::level::Level;
use crate::logger::Logger;

/// Key the event message is written under
pub const MESSAGE_KEY: &str = "msg";

/// Layer that forwards every `tracing` event to a [`Logger`]
///
/// `TRACE` events are logged at debug level. The event's own file and line
/// become the `caller` field.
#[derive(Debug, Clone)]
pub struct LogbeanLayer {
    logger: Logger,
}

impl LogbeanLayer {
    /// Forward events to `logger`
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl<S: Subscriber> Layer<S> for LogbeanLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Level::from(*metadata.level());
        if !self.logger.enabled(level) {
            return;
        }

        let mut visitor = KeyValVisitor::default();
        event.record(&mut visitor);

        self.logger.emit_entry(Entry {
            level,
            caller: Caller::from_metadata(metadata),
            keyvals: visitor.0,
        });
    }
}

#[derive(Default)]
struct KeyValVisitor(SmallVec<[Value; 8]>);

impl KeyValVisitor {
    fn push(&mut self, field: &Field, value: Value) {
        let key = match field.name() {
            "message" => MESSAGE_KEY,
            name => name,
        };
        self.0.push(Value::from(key));
        self.0.push(value);
    }
}

impl Visit for KeyValVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, Value::String(format!("{value:?}")));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.push(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push(field, Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.push(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.push(field, Value::from(value));
    }
}
