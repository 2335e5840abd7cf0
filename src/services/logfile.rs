//! Append-only log file with size-based rotation, wired into `tracing`.
//!
//! The writer archives the current file to `<name>.1` once it crosses the
//! size threshold and keeps appending to a fresh file. Each formatted event
//! is appended as one write under the shared lock, so lines stay whole even
//! if the binary is ever driven from more than one thread.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

pub const DEFAULT_LOG_FILE: &str = "provis.log";
pub const ROTATE_THRESHOLD_BYTES: u64 = 100 * 1024;

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub file: PathBuf,
    pub level: String,
    pub rotate_bytes: u64,
}

impl LogConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            file: cli
                .log_file
                .clone()
                .unwrap_or_else(|| cli.root.join(DEFAULT_LOG_FILE)),
            level: cli.log_level.clone(),
            rotate_bytes: ROTATE_THRESHOLD_BYTES,
        }
    }
}

pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let writer = RotatingFileWriter::new(config.file.clone(), config.rotate_bytes);
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.level)?)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()?;
    Ok(())
}

#[derive(Clone)]
pub struct RotatingFileWriter {
    inner: Arc<Mutex<RotatingFile>>,
}

struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
}

impl RotatingFileWriter {
    pub fn new(path: PathBuf, max_bytes: u64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RotatingFile { path, max_bytes })),
        }
    }
}

impl RotatingFile {
    fn append(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        if let Ok(meta) = fs::metadata(&self.path) {
            if meta.len() >= self.max_bytes {
                fs::rename(&self.path, archive_path(&self.path))?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(buf)?;
        Ok(buf.len())
    }
}

fn archive_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".1");
    path.with_file_name(name)
}

pub struct RotatingFileHandle {
    inner: Arc<Mutex<RotatingFile>>,
}

impl Write for RotatingFileHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.inner.lock() {
            Ok(mut file) => file.append(buf),
            Err(_) => Err(io::Error::new(io::ErrorKind::Other, "log writer poisoned")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for RotatingFileWriter {
    type Writer = RotatingFileHandle;

    fn make_writer(&'a self) -> Self::Writer {
        RotatingFileHandle {
            inner: Arc::clone(&self.inner),
        }
    }
}
