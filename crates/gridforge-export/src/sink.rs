//! Download targets.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One named file produced by an export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    /// Suggested filename, no directory.
    pub filename: String,
    /// MIME type.
    pub media_type: &'static str,
    /// File content.
    pub bytes: Vec<u8>,
}

/// Where finished exports go.
///
/// Each call delivers exactly one file. Compound exports call it once per
/// file, in order, and stop at the first error.
pub trait DownloadSink {
    /// Hand `file` to the user.
    fn deliver(&mut self, file: &ExportFile) -> io::Result<()>;
}

/// Writes each file into a directory, creating it on first use.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Sink rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&mut self, file: &ExportFile) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(&file.filename), &file.bytes)
    }
}

/// Keeps delivered files in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    /// Delivered files, in order.
    pub files: Vec<ExportFile>,
}

impl MemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The file called `name`, if delivered.
    pub fn get(&self, name: &str) -> Option<&ExportFile> {
        self.files.iter().find(|f| f.filename == name)
    }
}

impl DownloadSink for MemorySink {
    fn deliver(&mut self, file: &ExportFile) -> io::Result<()> {
        self.files.push(file.clone());
        Ok(())
    }
}
