//! Logger assembly
//!
//! Assembly is the composition
//!
//! ```text
//! FilterLayer(level) ∘ FieldsLayer(ts, caller, service, fields) ∘ make_sink(config)
//! ```
//!
//! It either returns a complete [`Logger`] or an error; nothing partially
//! built escapes. The configuration is consumed, so the logger holds no
//! reference back to it.

// Internal crates
use crate::config::{Config, ConfigOption};
use crate::core::LogResult;
use crate::layer::fields::FieldsLayer;
use crate::layer::filter::FilterLayer;
use crate::logger::Logger;
use crate::writer::{self, RecordWriter};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Create builder by folding options onto the default config
    #[must_use]
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = ConfigOption>,
    {
        Self::from_config(Config::from_options(options))
    }

    /// The configuration that will be assembled
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the logger
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Open`](crate::LogError::Open) if a file sink cannot
    /// be opened. An explicit writer never fails.
    pub fn build(self) -> LogResult<Logger> {
        // Get the sink first; nothing else can fail
        let (sink, encoding) = writer::make_sink(&self.config)?;

        let Config {
            sink: sink_kind,
            level,
            caller_depth,
            service,
            fields,
            timestamp,
            ..
        } = self.config;

        let output = RecordWriter::new(sink, encoding);
        let fields_layer = FieldsLayer::new(output, timestamp, caller_depth)
            .with_service(service)
            .with_fields(fields);

        Ok(Logger::new(FilterLayer::new(fields_layer, level), sink_kind))
    }
}
