//! Call-site capture

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// Source location reported in the `caller` field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    /// Location tracked through `#[track_caller]` emit methods
    Tracked(&'static Location<'static>),
    /// Location supplied by the caller (e.g. from `tracing` metadata)
    Explicit {
        /// Source file
        file: Cow<'static, str>,
        /// Line number
        line: u32,
    },
    /// No location available
    Unknown,
}

impl Caller {
    /// Location of the code calling this function
    #[track_caller]
    #[must_use]
    pub fn here() -> Self {
        Self::Tracked(Location::caller())
    }

    /// Explicit location
    #[must_use]
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self::Explicit {
            file: file.into(),
            line,
        }
    }

    /// Location recorded in `tracing` metadata
    #[must_use]
    pub fn from_metadata(metadata: &'static tracing::Metadata<'static>) -> Self {
        match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => Self::new(file, line),
            _ => Self::Unknown,
        }
    }

    /// Report the frame `frames` levels above `location`.
    ///
    /// The walk is anchored at the first symbol matching `location`, so the
    /// crate's own frames and any inlining below the user's call never shift
    /// the result. Returns `None` when the anchor or the target frame has no
    /// symbol information.
    #[cfg(feature = "backtrace")]
    #[must_use]
    pub fn above(location: &'static Location<'static>, frames: usize) -> Option<Self> {
        if frames == 0 {
            return Some(Self::Tracked(location));
        }

        let mut trace = backtrace::Backtrace::new_unresolved();
        trace.resolve();
        let mut symbols = trace
            .frames()
            .iter()
            .flat_map(|frame| frame.symbols())
            .filter_map(|symbol| Some((symbol.filename()?, symbol.lineno()?)));

        symbols.find(|(file, line)| {
            *line == location.line() && file.ends_with(location.file())
        })?;
        let (file, line) = symbols.nth(frames - 1)?;
        Some(Self::new(file.to_string_lossy().into_owned(), line))
    }

    /// Whether the location came from `#[track_caller]`
    #[must_use]
    pub fn is_tracked(&self) -> bool {
        matches!(self, Self::Tracked(_))
    }
}

impl From<&'static Location<'static>> for Caller {
    fn from(location: &'static Location<'static>) -> Self {
        Self::Tracked(location)
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tracked(location) => write!(f, "{}:{}", location.file(), location.line()),
            Self::Explicit { file, line } => write!(f, "{file}:{line}"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}
