//! Severity model
//!
//! [`Level`] is the severity attached to a record. [`LevelFilter`] is the
//! threshold a logger is assembled with: either a minimum [`Level`] or
//! [`LevelFilter::All`], which lets everything through.
//!
//! Parsing a threshold never fails. Unknown strings become `info`, so a
//! typo in a level name cannot stop a process from starting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warn level
    Warn,
    /// Error level
    Error,
}

impl Level {
    /// All levels, lowest first
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warn, Self::Error];

    /// Lower-case name, as written into the `level` field of a record
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE | tracing::Level::DEBUG => Self::Debug,
            tracing::Level::INFO => Self::Info,
            tracing::Level::WARN => Self::Warn,
            tracing::Level::ERROR => Self::Error,
        }
    }
}

/// Minimum severity a logger lets through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelFilter {
    /// Filtering disabled
    All,
    /// Records at or above this level pass
    Min(Level),
}

impl LevelFilter {
    /// `info`, the fallback for anything unrecognized
    pub const DEFAULT: Self = Self::Min(Level::Info);

    /// Whether a record at `level` passes this threshold
    #[inline]
    #[must_use]
    pub fn allows(self, level: Level) -> bool {
        match self {
            Self::All => true,
            Self::Min(threshold) => level >= threshold,
        }
    }

    /// Parse a threshold, falling back to `info` for unknown names.
    ///
    /// Matching ignores surrounding whitespace and ASCII case.
    #[must_use]
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or_else(|UnknownLevel(name)| {
            tracing::debug!(level = %name, "unknown log level, using info");
            Self::DEFAULT
        })
    }

    /// Name of the threshold (`all`, `debug`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Min(level) => level.as_str(),
        }
    }
}

/// `allows(record_level, threshold)` as a free function
#[inline]
#[must_use]
pub fn allows(level: Level, threshold: LevelFilter) -> bool {
    threshold.allows(level)
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        Self::Min(level)
    }
}

impl From<&str> for LevelFilter {
    fn from(s: &str) -> Self {
        Self::parse_lossy(s)
    }
}

impl From<String> for LevelFilter {
    fn from(s: String) -> Self {
        Self::parse_lossy(&s)
    }
}

/// Strict parse failure, carrying the rejected name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level '{0}'")]
pub struct UnknownLevel(pub String);

impl FromStr for LevelFilter {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Level::ALL
            .into_iter()
            .find(|level| name.eq_ignore_ascii_case(level.as_str()))
            .map(Self::Min)
            .ok_or_else(|| UnknownLevel(name.to_string()))
    }
}

impl Serialize for LevelFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LevelFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse_lossy(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn test_allows_matches_ordering() {
        for threshold in Level::ALL {
            for level in Level::ALL {
                assert_eq!(
                    allows(level, LevelFilter::Min(threshold)),
                    level >= threshold,
                    "{level} against {threshold}"
                );
            }
        }
    }

    #[test]
    fn test_all_allows_everything() {
        for level in Level::ALL {
            assert!(LevelFilter::All.allows(level));
        }
    }

    #[test]
    fn test_error_threshold_only_allows_error() {
        let threshold = LevelFilter::from("error");
        assert!(!threshold.allows(Level::Debug));
        assert!(!threshold.allows(Level::Info));
        assert!(!threshold.allows(Level::Warn));
        assert!(threshold.allows(Level::Error));
    }

    #[rstest]
    #[case("debug", LevelFilter::Min(Level::Debug))]
    #[case("info", LevelFilter::Min(Level::Info))]
    #[case("warn", LevelFilter::Min(Level::Warn))]
    #[case("error", LevelFilter::Min(Level::Error))]
    #[case("all", LevelFilter::All)]
    #[case(" WARN ", LevelFilter::Min(Level::Warn))]
    #[case("verbose", LevelFilter::Min(Level::Info))]
    #[case("", LevelFilter::Min(Level::Info))]
    #[case("warning", LevelFilter::Min(Level::Info))]
    fn test_parse_lossy(#[case] input: &str, #[case] expected: LevelFilter) {
        assert_eq!(LevelFilter::parse_lossy(input), expected);
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        let err = "verbose".parse::<LevelFilter>().unwrap_err();
        assert_eq!(err, UnknownLevel("verbose".to_string()));
    }

    #[test]
    fn test_serde_is_fail_soft() {
        let filter: LevelFilter = serde_json::from_str("\"nonsense\"").unwrap();
        assert_eq!(filter, LevelFilter::DEFAULT);

        let filter: LevelFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(serde_json::to_string(&filter).unwrap(), "\"all\"");
    }

    #[test]
    fn test_from_tracing_level() {
        assert_eq!(Level::from(tracing::Level::TRACE), Level::Debug);
        assert_eq!(Level::from(tracing::Level::ERROR), Level::Error);
    }
}
