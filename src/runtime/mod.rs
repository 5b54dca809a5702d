//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over the filesystem reads
//! the WAD catalog performs, enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `fs` - File system operations (directory listing, type checks, reads)

mod fs;

use anyhow::Result;
use std::path::{Path, PathBuf};

#[cfg_attr(test, mockall::automock)]
pub trait Runtime {
    // File System
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// List the immediate children of a directory as full paths.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    fn is_dir(&self, path: &Path) -> bool;

    /// True for regular files (following symlinks), false for directories,
    /// missing paths and anything else.
    fn is_file(&self, path: &Path) -> bool;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        self.read_dir_impl(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.is_dir_impl(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.is_file_impl(path)
    }
}
