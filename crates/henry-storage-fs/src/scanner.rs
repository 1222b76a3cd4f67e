//! File discovery by filesystem walking.
//!
//! This module separates the discovery phase (finding files) from the
//! preparation phase (reading and parsing them). The scanner only lists
//! entries with their modification time; `FsSource` turns them into records.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use henry_storage::{StorageError, StorageErrorKind};

/// A non-directory entry found during the walk.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    /// File name (last path component).
    pub name: String,
    /// Path of the entry (root joined with its relative path).
    pub path: PathBuf,
    /// Modification time (symlinks are followed).
    pub modified: DateTime<Utc>,
}

/// Walk `root` recursively and return every non-directory entry.
///
/// Entries within a directory are visited in lexical order and directories
/// are descended into as they are reached, so the output order is stable.
/// Hidden files are included. Symbolic links are reported as files and never
/// descended into.
///
/// A root that is itself a file yields a single entry.
pub(crate) fn scan(root: &Path) -> Result<Vec<Entry>, StorageError> {
    let root_meta = fs::symlink_metadata(root).map_err(|e| StorageError::io(e, root))?;

    let mut entries = Vec::new();
    if root_meta.is_dir() {
        scan_directory(root, &mut entries)?;
    } else {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| StorageError::new(StorageErrorKind::InvalidPath).with_path(root))?;
        entries.push(entry(name, root.to_path_buf())?);
    }
    Ok(entries)
}

fn scan_directory(dir: &Path, entries: &mut Vec<Entry>) -> Result<(), StorageError> {
    let read_dir = fs::read_dir(dir).map_err(|e| StorageError::io(e, dir))?;

    let mut children = read_dir
        .map(|res| res.map_err(|e| StorageError::io(e, dir)))
        .collect::<Result<Vec<_>, _>>()?;
    children.sort_by_key(fs::DirEntry::file_name);

    for child in children {
        let path = child.path();
        let file_type = child.file_type().map_err(|e| StorageError::io(e, &path))?;

        if file_type.is_dir() {
            scan_directory(&path, entries)?;
        } else {
            let name = child.file_name().to_string_lossy().into_owned();
            entries.push(entry(name, path)?);
        }
    }

    Ok(())
}

fn entry(name: String, path: PathBuf) -> Result<Entry, StorageError> {
    let modified = fs::metadata(&path)
        .and_then(|meta| meta.modified())
        .map_err(|e| StorageError::io(e, &path))?;

    Ok(Entry {
        name,
        path,
        modified: DateTime::<Utc>::from(modified),
    })
}
