//! Emission layers
//!
//! An assembled logger is a stack of layers around its sink:
//!
//! ```text
//! FilterLayer  ->  FieldsLayer  ->  RecordWriter (encoding + sink)
//! ```
//!
//! The call site is captured by the logger before the entry enters the stack,
//! so filtering never loses it. Records below the threshold stop at
//! [`FilterLayer`](filter::FilterLayer) and are neither decorated, encoded nor
//! written.

pub mod bridge;
pub mod caller;
pub mod fields;
pub mod filter;

use smallvec::SmallVec;

use crate::format::Value;
use crate::level::Level;

pub use caller::Caller;

/// One emit call on its way to the sink
#[derive(Debug, Clone)]
pub struct Entry {
    /// Severity of the call
    pub level: Level,
    /// Where the call was made
    pub caller: Caller,
    /// Alternating key/value tokens, in call order
    pub keyvals: SmallVec<[Value; 8]>,
}

/// A stage of the emission path
pub trait Emit: Send + Sync {
    /// Whether an entry at `level` would get past this stage
    fn enabled(&self, _level: Level) -> bool {
        true
    }

    /// Handle one entry
    fn emit(&self, entry: Entry);
}
