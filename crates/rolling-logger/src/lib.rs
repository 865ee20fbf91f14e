//! Rolling Logger
//!
//! File logger for Tauri apps. Writes through a `tracing` subscriber into a
//! size-rotated file set and keeps the newest lines in a circular buffer so the
//! UI can show recent activity without touching the disk.
//!
//! `log` records are bridged into `tracing`, so libraries can keep using the
//! `log` facade.
//!
//! Apps normally only call [`init_logger`] and [`recent_lines`]. [`RollingFile`]
//! is public for callers that want their own subscriber or need to list the
//! files on disk, e.g. to attach them to a bug report.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::MakeWriter;

/// Rotate once the active file grows past this many bytes
pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;
/// Active file plus rotated backups
pub const DEFAULT_MAX_FILES: usize = 5;
/// Lines kept in memory
pub const DEFAULT_BUFFER_LINES: usize = 500;

static LOGGER: OnceLock<RollingFile> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("logger not initialized")]
    NotInitialized,
    #[error("log io error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to install subscriber: {0}")]
    Subscriber(String),
}

struct FileState {
    file: File,
    written: u64,
}

struct Inner {
    dir: PathBuf,
    app_name: String,
    max_bytes: u64,
    max_files: usize,
    buffer_lines: usize,
    state: Mutex<FileState>,
    buffer: Mutex<VecDeque<String>>,
}

/// Size-rotated log file set with an in-memory tail
///
/// Files are `<app>.log`, `<app>.1.log`, ... `<app>.<max_files - 1>.log`,
/// newest first.
#[derive(Clone)]
pub struct RollingFile {
    inner: Arc<Inner>,
}

impl RollingFile {
    pub fn new(
        dir: impl AsRef<Path>,
        app_name: &str,
        max_bytes: u64,
        max_files: usize,
    ) -> Result<Self, LoggerError> {
        Self::with_buffer(dir, app_name, max_bytes, max_files, DEFAULT_BUFFER_LINES)
    }

    pub fn with_buffer(
        dir: impl AsRef<Path>,
        app_name: &str,
        max_bytes: u64,
        max_files: usize,
        buffer_lines: usize,
    ) -> Result<Self, LoggerError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        let path = active_path(&dir, app_name);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        let buffer_lines = buffer_lines.max(1);

        Ok(Self {
            inner: Arc::new(Inner {
                dir,
                app_name: app_name.to_string(),
                max_bytes,
                max_files: max_files.max(1),
                buffer_lines,
                state: Mutex::new(FileState { file, written }),
                buffer: Mutex::new(VecDeque::with_capacity(buffer_lines)),
            }),
        })
    }

    /// Path of the file currently written to
    pub fn active_path(&self) -> PathBuf {
        active_path(&self.inner.dir, &self.inner.app_name)
    }

    /// All log files on disk, newest first
    pub fn files(&self) -> Vec<PathBuf> {
        (0..self.inner.max_files)
            .map(|idx| indexed_path(&self.inner.dir, &self.inner.app_name, idx))
            .filter(|p| p.exists())
            .collect()
    }

    /// Newest lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        let buffer = self.inner.buffer.lock().unwrap_or_else(|e| e.into_inner());
        buffer.iter().cloned().collect()
    }

    fn append(&self, bytes: &[u8]) -> io::Result<()> {
        let mut state = self.inner.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.written > 0 && state.written + bytes.len() as u64 > self.inner.max_bytes {
            self.rotate(&mut state)?;
        }
        state.file.write_all(bytes)?;
        state.written += bytes.len() as u64;
        drop(state);

        self.remember(bytes);
        Ok(())
    }

    fn remember(&self, bytes: &[u8]) {
        let text = String::from_utf8_lossy(bytes);
        let mut buffer = self.inner.buffer.lock().unwrap_or_else(|e| e.into_inner());
        for line in text.lines().filter(|l| !l.is_empty()) {
            if buffer.len() == self.inner.buffer_lines {
                buffer.pop_front();
            }
            buffer.push_back(line.to_string());
        }
    }

    fn rotate(&self, state: &mut FileState) -> io::Result<()> {
        state.file.flush()?;
        let dir = &self.inner.dir;
        let name = &self.inner.app_name;

        // Oldest backup falls off the end
        let last = indexed_path(dir, name, self.inner.max_files - 1);
        if last.exists() {
            fs::remove_file(&last)?;
        }
        for idx in (0..self.inner.max_files - 1).rev() {
            let from = indexed_path(dir, name, idx);
            if from.exists() {
                fs::rename(&from, indexed_path(dir, name, idx + 1))?;
            }
        }

        state.file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(active_path(dir, name))?;
        state.written = 0;
        Ok(())
    }
}

fn active_path(dir: &Path, app_name: &str) -> PathBuf {
    indexed_path(dir, app_name, 0)
}

fn indexed_path(dir: &Path, app_name: &str, idx: usize) -> PathBuf {
    if idx == 0 {
        dir.join(format!("{}.log", app_name))
    } else {
        dir.join(format!("{}.{}.log", app_name, idx))
    }
}

/// Writer handed to the fmt layer for each event
pub struct RollingWriter {
    target: RollingFile,
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.target.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut state = self.target.inner.state.lock().unwrap_or_else(|e| e.into_inner());
        state.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingFile {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        RollingWriter { target: self.clone() }
    }
}

/// Install the global logger writing into `log_dir`
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    if LOGGER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let rolling = RollingFile::new(log_dir, app_name, DEFAULT_MAX_BYTES, DEFAULT_MAX_FILES)?;

    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag(app_name),
    );

    #[cfg(not(target_os = "android"))]
    tracing_subscriber::fmt()
        .with_writer(rolling.clone())
        .with_ansi(false)
        .with_target(true)
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;

    LOGGER
        .set(rolling)
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    info(&format!(
        "=== {} started {} ===",
        app_name,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ))
}

fn installed() -> Result<&'static RollingFile, LoggerError> {
    LOGGER.get().ok_or(LoggerError::NotInitialized)
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    installed()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    installed()?;
    tracing::error!("{}", msg);
    Ok(())
}

/// Newest lines of the global logger, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingFile::recent_lines).unwrap_or_default()
}
