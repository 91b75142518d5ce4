//! Field decoration
//!
//! [`FieldsLayer`] turns an [`Entry`] into a [`Record`] with a fixed field
//! order:
//!
//! `ts`, `caller`, `service`, extra fields, `level`, call tokens.
//!
//! Everything except `ts` and `caller` is fixed when the logger is assembled.

use indexmap::IndexMap;

use super::{Caller, Emit, Entry};
use crate::format::{Record, Timestamp, Value};
use crate::writer::RecordWriter;

#[cfg(feature = "backtrace")]
use crate::config::DEFAULT_CALLER_DEPTH;

/// Key of the timestamp field
pub const TIMESTAMP_KEY: &str = "ts";
/// Key of the call-site field
pub const CALLER_KEY: &str = "caller";
/// Key of the service field
pub const SERVICE_KEY: &str = "service";
/// Key of the severity field
pub const LEVEL_KEY: &str = "level";

/// Layer that adds the contextual fields to every record
#[derive(Debug)]
pub struct FieldsLayer {
    output: RecordWriter,
    timestamp: Timestamp,
    caller_depth: usize,
    service: Option<String>,
    fields: IndexMap<String, Value>,
}

impl FieldsLayer {
    /// Decorate records written to `output`
    pub fn new(output: RecordWriter, timestamp: Timestamp, caller_depth: usize) -> Self {
        Self {
            output,
            timestamp,
            caller_depth,
            service: None,
            fields: IndexMap::new(),
        }
    }

    /// Add the `service` field
    #[must_use]
    pub fn with_service(mut self, service: Option<String>) -> Self {
        self.service = service;
        self
    }

    /// Add extra static fields, after `service`
    #[must_use]
    pub fn with_fields(mut self, fields: IndexMap<String, Value>) -> Self {
        self.fields = fields;
        self
    }

    /// Configured service name
    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    /// Configured extra fields
    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    /// Configured frame depth
    pub fn caller_depth(&self) -> usize {
        self.caller_depth
    }

    /// Build the record for `entry`
    pub fn decorate(&self, entry: Entry) -> Record {
        let Entry {
            level,
            caller,
            keyvals,
        } = entry;

        let mut record = Record::with_capacity(4 + self.fields.len() + keyvals.len() / 2);
        record.push(TIMESTAMP_KEY, self.timestamp.now());
        record.push(CALLER_KEY, self.resolve_caller(caller).to_string());
        if let Some(service) = &self.service {
            record.push(SERVICE_KEY, service.as_str());
        }
        for (key, value) in &self.fields {
            record.push(key.as_str(), value.clone());
        }
        record.push(LEVEL_KEY, level.as_str());
        record.push_keyvals(keyvals);
        record
    }

    // Depth counts from the emit method, so the default names the user's own
    // call and each extra frame steps one caller further out.
    #[cfg(feature = "backtrace")]
    fn resolve_caller(&self, caller: Caller) -> Caller {
        let extra = self.caller_depth.saturating_sub(DEFAULT_CALLER_DEPTH);
        match caller {
            Caller::Tracked(location) if extra > 0 => {
                Caller::above(location, extra).unwrap_or(caller)
            }
            _ => caller,
        }
    }

    #[cfg(not(feature = "backtrace"))]
    fn resolve_caller(&self, caller: Caller) -> Caller {
        caller
    }
}

impl Emit for FieldsLayer {
    fn emit(&self, entry: Entry) {
        let record = self.decorate(entry);
        self.output.write(&record);
    }
}
