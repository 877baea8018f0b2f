//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sprout-adapters` crate provides implementations.

use std::io;
use std::path::Path;

use crate::error::SproutResult;

/// Port for the styled output stream.
///
/// Implemented by:
/// - `sprout_adapters::sink::StdoutSink` (production)
/// - `sprout_adapters::sink::MemorySink` (testing)
///
/// One call is one line. Implementations append the line terminator and
/// must not buffer across calls.
#[cfg_attr(test, mockall::automock)]
pub trait LineSink: Send + Sync {
    /// Write `line` followed by the platform line terminator.
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sprout_adapters::filesystem::LocalFilesystem` (production)
/// - `sprout_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SproutResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> SproutResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> SproutResult<()>;
}
