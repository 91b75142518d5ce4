//! Configuration presets for common scenarios

use super::{Config, SinkKind};
use crate::level::{Level, LevelFilter};

impl Config {
    /// Development configuration (stdout, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: LevelFilter::Min(Level::Debug),
            sink: SinkKind::Standard,
            ..Self::default()
        }
    }

    /// Production configuration (JSON file at the default path, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: LevelFilter::Min(Level::Info),
            sink: SinkKind::StructuredFile,
            ..Self::default()
        }
    }
}
