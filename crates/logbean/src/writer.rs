//! Sink resolution
//!
//! A sink is the byte destination a logger writes encoded records to. Each
//! call to [`Sink::write_record`] receives exactly one complete line and writes
//! it under the sink's own lock, so records from concurrent emitters never
//! interleave.

// Standard library
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// External dependencies
use parking_lot::Mutex;

// Internal crates
use crate::config::{Config, SinkKind};
use crate::core::{LogError, LogResult};
use crate::format::{Encoding, Record};

/// Final byte destination of a logger
pub trait Sink: Send + Sync + fmt::Debug {
    /// Write one encoded record
    ///
    /// # Errors
    ///
    /// Returns the underlying IO error. Loggers discard it.
    fn write_record(&self, record: &[u8]) -> io::Result<()>;
}

/// Process standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_record(&self, record: &[u8]) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(record)?;
        out.flush()
    }
}

/// Append-mode file owned by a single logger
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Open `path` for append, creating it if absent
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Open`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        let file = open_append(path).map_err(|e| LogError::open(path, e))?;
        tracing::debug!(path = %path.display(), "opened log file sink");
        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    /// Path the sink was opened at
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_record(&self, record: &[u8]) -> io::Result<()> {
        self.file.lock().write_all(record)
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.read(true).append(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    options.open(path)
}

/// Caller-supplied writer, shared rather than owned by the logger
///
/// Cloning is cheap; all clones write through the same lock.
#[derive(Clone)]
pub struct SharedWriter(Arc<Mutex<dyn Write + Send>>);

impl SharedWriter {
    /// Wrap any writer
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self(Arc::new(Mutex::new(writer)))
    }
}

impl fmt::Debug for SharedWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedWriter").finish_non_exhaustive()
    }
}

impl Sink for SharedWriter {
    fn write_record(&self, record: &[u8]) -> io::Result<()> {
        let mut writer = self.0.lock();
        writer.write_all(record)?;
        writer.flush()
    }
}

/// In-memory writer for capturing log output
///
/// Every clone appends to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter(Arc<Mutex<Vec<u8>>>);

impl MemoryWriter {
    /// Create an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    /// Written lines, without their terminators
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Whether nothing has been written
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }

    /// Discard captured output
    pub fn clear(&self) {
        self.0.lock().clear();
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl From<MemoryWriter> for SharedWriter {
    fn from(writer: MemoryWriter) -> Self {
        Self::new(writer)
    }
}

/// Encodes records and hands them to a sink, one write per record.
///
/// [`write`](Self::write) swallows encoding and write failures so logging
/// never fails the caller; [`try_write`](Self::try_write) reports them.
#[derive(Debug)]
pub struct RecordWriter {
    sink: Box<dyn Sink>,
    encoding: Encoding,
}

impl RecordWriter {
    /// Pair a sink with its encoding
    #[must_use]
    pub fn new(sink: Box<dyn Sink>, encoding: Encoding) -> Self {
        Self { sink, encoding }
    }

    /// Encoding applied to every record
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Encode and write one record, reporting failures
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Io`] if encoding or the sink write fails.
    pub fn try_write(&self, record: &Record) -> LogResult<()> {
        let mut buf = Vec::with_capacity(256);
        self.encoding.encode(record, &mut buf)?;
        self.sink.write_record(&buf)?;
        Ok(())
    }

    /// Encode and write one record, discarding failures
    pub fn write(&self, record: &Record) {
        let _ = self.try_write(record);
    }
}

/// Resolve the sink and encoding for a configuration.
///
/// An explicit writer always wins and no file is touched. Otherwise
/// [`SinkKind::Standard`] goes to stdout and the file kinds open
/// `config.file_path` for append.
///
/// # Errors
///
/// Returns [`LogError::Open`] when a file sink cannot be opened.
pub fn make_sink(config: &Config) -> LogResult<(Box<dyn Sink>, Encoding)> {
    let encoding = config.sink.encoding();

    let sink: Box<dyn Sink> = match (&config.writer, config.sink) {
        (Some(writer), _) => Box::new(writer.clone()),
        (None, SinkKind::Standard) => Box::new(StdoutSink),
        (None, SinkKind::PlainFile | SinkKind::StructuredFile) => {
            Box::new(FileSink::open(&config.file_path)?)
        }
    };

    Ok((sink, encoding))
}
