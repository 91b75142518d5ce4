//! Process-wide shared logger
//!
//! The first caller of [`global`] assembles the logger; every later call gets
//! the same instance and its options are dropped unapplied. Racing first
//! callers serialize on an init lock, so the sink is opened exactly once and
//! nobody observes a half-built logger.
//!
//! Reads after initialization are lock-free (`ArcSwap`).

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use parking_lot::Mutex;

use crate::builder::LoggerBuilder;
use crate::config::ConfigOption;
use crate::core::LogResult;
use crate::logger::Logger;

/// One-time, resettable logger slot
#[derive(Debug)]
pub struct LoggerCell {
    slot: ArcSwapOption<Logger>,
    init: Mutex<()>,
}

impl LoggerCell {
    /// Empty cell
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: ArcSwapOption::const_empty(),
            init: parking_lot::const_mutex(()),
        }
    }

    /// The logger, if one was assembled or set
    pub fn get(&self) -> Option<Logger> {
        self.slot.load_full().map(|logger| Logger::clone(&logger))
    }

    /// Return the existing logger or assemble one from `options`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is empty and the sink cannot be opened.
    pub fn get_or_init<I>(&self, options: I) -> Logger
    where
        I: IntoIterator<Item = ConfigOption>,
    {
        self.get_or_try_init(options)
            .unwrap_or_else(|err| crate::fatal(&err))
    }

    /// Fallible form of [`get_or_init`](Self::get_or_init).
    ///
    /// A failed assembly leaves the cell empty.
    ///
    /// # Errors
    ///
    /// Returns the assembly error if the sink cannot be opened.
    pub fn get_or_try_init<I>(&self, options: I) -> LogResult<Logger>
    where
        I: IntoIterator<Item = ConfigOption>,
    {
        if let Some(logger) = self.get() {
            return Ok(logger);
        }

        let _guard = self.init.lock();
        if let Some(logger) = self.get() {
            return Ok(logger);
        }

        let logger = LoggerBuilder::from_options(options).build()?;
        self.slot.store(Some(Arc::new(logger.clone())));
        Ok(logger)
    }

    /// Replace the stored logger, returning the previous one
    pub fn set(&self, logger: Logger) -> Option<Logger> {
        let _guard = self.init.lock();
        self.slot
            .swap(Some(Arc::new(logger)))
            .map(|previous| Logger::clone(&previous))
    }

    /// Empty the cell so the next call assembles again
    pub fn reset(&self) -> Option<Logger> {
        let _guard = self.init.lock();
        self.slot.swap(None).map(|previous| Logger::clone(&previous))
    }
}

impl Default for LoggerCell {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: LoggerCell = LoggerCell::new();

/// The process-wide logger, assembled from `options` on first use.
///
/// # Panics
///
/// Panics on first use if the sink cannot be opened.
pub fn global<I>(options: I) -> Logger
where
    I: IntoIterator<Item = ConfigOption>,
{
    GLOBAL.get_or_init(options)
}

/// The process-wide logger, if it exists
pub fn get() -> Option<Logger> {
    GLOBAL.get()
}

/// Install `logger` as the process-wide logger
pub fn set(logger: Logger) -> Option<Logger> {
    GLOBAL.set(logger)
}

/// Drop the process-wide logger so the next [`global`] call assembles again
pub fn reset() -> Option<Logger> {
    GLOBAL.reset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::{with_file_path, with_service, with_sink, with_writer};
    use crate::config::SinkKind;
    use crate::writer::MemoryWriter;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;

    fn counting(counter: &Arc<AtomicUsize>) -> ConfigOption {
        let counter = Arc::clone(counter);
        ConfigOption::new(move |config| {
            counter.fetch_add(1, Ordering::SeqCst);
            config
        })
    }

    #[test]
    fn test_first_config_wins() {
        let cell = LoggerCell::new();
        let memory = MemoryWriter::new();
        let first = cell.get_or_init([with_service("first"), with_writer(memory.clone())]);
        let second = cell.get_or_init([with_service("second"), with_writer(MemoryWriter::new())]);

        assert!(Logger::ptr_eq(&first, &second));
        assert_eq!(second.service(), Some("first"));

        second.info(["k", "v"]);
        assert_eq!(memory.lines().len(), 1);
    }

    #[test]
    fn test_concurrent_first_use_assembles_once() {
        const THREADS: usize = 16;
        let cell = Arc::new(LoggerCell::new());
        let assemblies = Arc::new(AtomicUsize::new(0));
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let cell = Arc::clone(&cell);
                let assemblies = Arc::clone(&assemblies);
                let barrier = Arc::clone(&barrier);
                std::thread::spawn(move || {
                    barrier.wait();
                    cell.get_or_init([
                        counting(&assemblies),
                        with_service(format!("svc-{i}")),
                        with_writer(MemoryWriter::new()),
                    ])
                })
            })
            .collect();

        let loggers: Vec<Logger> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(assemblies.load(Ordering::SeqCst), 1);
        for logger in &loggers {
            assert!(Logger::ptr_eq(logger, &loggers[0]));
            assert_eq!(logger.service(), loggers[0].service());
        }
    }

    #[test]
    fn test_failed_init_leaves_cell_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cell = LoggerCell::new();
        let result = cell.get_or_try_init([
            with_sink(SinkKind::PlainFile),
            with_file_path(dir.path().join("missing/app.log")),
        ]);
        assert!(result.is_err());
        assert!(cell.get().is_none());

        let logger = cell.get_or_init([with_writer(MemoryWriter::new())]);
        assert!(Logger::ptr_eq(&logger, &cell.get().unwrap()));
    }

    #[test]
    fn test_reset_and_set() {
        let cell = LoggerCell::new();
        let first = cell.get_or_init([with_service("a"), with_writer(MemoryWriter::new())]);

        let taken = cell.reset().unwrap();
        assert!(Logger::ptr_eq(&first, &taken));
        assert!(cell.get().is_none());

        let second = cell.get_or_init([with_service("b"), with_writer(MemoryWriter::new())]);
        assert_eq!(second.service(), Some("b"));

        assert!(cell.set(first.clone()).is_some());
        assert!(Logger::ptr_eq(&cell.get().unwrap(), &first));
    }
}
