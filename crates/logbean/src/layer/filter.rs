//! Severity gate

use super::{Emit, Entry};
use crate::level::{Level, LevelFilter};

/// Drops entries below the threshold before anything else sees them
#[derive(Debug)]
pub struct FilterLayer<E> {
    inner: E,
    threshold: LevelFilter,
}

impl<E> FilterLayer<E> {
    /// Wrap `inner`
    pub fn new(inner: E, threshold: LevelFilter) -> Self {
        Self { inner, threshold }
    }

    /// The configured threshold
    pub fn threshold(&self) -> LevelFilter {
        self.threshold
    }

    /// The wrapped stage
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: Emit> Emit for FilterLayer<E> {
    #[inline]
    fn enabled(&self, level: Level) -> bool {
        self.threshold.allows(level) && self.inner.enabled(level)
    }

    fn emit(&self, entry: Entry) {
        if self.threshold.allows(entry.level) {
            self.inner.emit(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::Caller;
    use parking_lot::Mutex;
    use smallvec::SmallVec;

    #[derive(Default)]
    struct Capture(Mutex<Vec<Level>>);

    impl Emit for Capture {
        fn emit(&self, entry: Entry) {
            self.0.lock().push(entry.level);
        }
    }

    fn entry(level: Level) -> Entry {
        Entry {
            level,
            caller: Caller::Unknown,
            keyvals: SmallVec::new(),
        }
    }

    #[test]
    fn test_warn_threshold() {
        let layer = FilterLayer::new(Capture::default(), LevelFilter::Min(Level::Warn));
        for level in Level::ALL {
            layer.emit(entry(level));
        }
        assert_eq!(*layer.inner().0.lock(), vec![Level::Warn, Level::Error]);
        assert!(!layer.enabled(Level::Info));
        assert!(layer.enabled(Level::Error));
    }

    #[test]
    fn test_all_threshold() {
        let layer = FilterLayer::new(Capture::default(), LevelFilter::All);
        for level in Level::ALL {
            layer.emit(entry(level));
        }
        assert_eq!(layer.inner().0.lock().len(), 4);
        assert_eq!(layer.threshold(), LevelFilter::All);
    }
}
