//! Core components for the logbean logging system.
//!
//! ### [`error`] - Error handling
//! The error taxonomy. Assembly fails only when a sink cannot be opened;
//! record writes surface IO failures through `RecordWriter::try_write`,
//! while the logger's emit methods swallow them. Configuration is fail-soft.

pub mod error;

// Re-export core types
pub use error::{LogError, LogResult};
