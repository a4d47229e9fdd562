use std::fs;
use std::path::Path;

use crate::error::{Result, TreeError};

/// A single child of a directory-like location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Entry name (last path component)
    pub name: String,

    /// True if this entry can itself be listed
    pub is_directory: bool,
}

impl DirectoryEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: true,
        }
    }
}

/// The listing capability consumed by the renderer.
///
/// Implementations must return entries in a stable order; the renderer
/// emits siblings in exactly the order listed here.
pub trait DirectoryLister: Sync {
    fn list(&self, location: &Path) -> Result<Vec<DirectoryEntry>>;
}

/// Filesystem-backed lister.
///
/// `read_dir` order is platform-dependent, so entries are sorted by name to
/// keep output deterministic. Symlinks are reported as files (their target
/// type is not resolved), so a symlink cycle can never recurse.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, location: &Path) -> Result<Vec<DirectoryEntry>> {
        let read_dir = fs::read_dir(location).map_err(|e| io_error(location, e))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| io_error(location, e))?;
            let file_type = entry.file_type().map_err(|e| io_error(&entry.path(), e))?;
            entries.push(DirectoryEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_directory: file_type.is_dir(),
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> TreeError {
    match source.kind() {
        std::io::ErrorKind::NotFound => TreeError::PathNotFound(path.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => TreeError::PermissionDenied(path.to_path_buf()),
        _ => TreeError::Io {
            path: path.to_path_buf(),
            source,
        },
    }
}
