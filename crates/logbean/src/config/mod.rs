//! Configuration types and builders
//!
//! This module provides configuration types for the logging system, organized into:
//! - `base`: The configuration record ([`Config`], [`SinkKind`]) and its setters
//! - `options`: Option mutations folded onto the defaults
//! - `presets`: Pre-configured setups (development, production)

mod base;
pub mod options;
mod presets;

// Re-export all public types
pub use base::{Config, DEFAULT_CALLER_DEPTH, DEFAULT_FILE_PATH, SinkKind};
pub use options::ConfigOption;
