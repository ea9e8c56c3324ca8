// src/scan.rs
//! Scan orchestration: per-file scanning and the recursive directory
//! walk.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use walkdir::WalkDir;

use crate::detect;
use crate::error::{Result, ScanError};
use crate::types::Finding;

/// Extensions the directory walker considers scannable source code.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["py", "js", "ts", "java", "cpp", "c", "go", "rs"];

/// Scans a single file for race-condition hazards.
///
/// A file that cannot be read or decoded as UTF-8 is logged to stderr
/// and yields zero findings; per-file failures never propagate. The
/// content is split on `'\n'` only, so a trailing newline contributes a
/// final empty line — line numbers always refer to this original,
/// unmodified sequence.
#[must_use]
pub fn scan_file(path: &Path) -> Vec<Finding> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!(
                "{} could not read {}: {e}",
                "warn:".yellow().bold(),
                path.display()
            );
            return Vec::new();
        }
    };

    let lines: Vec<&str> = content.split('\n').collect();
    detect::all(&path.to_string_lossy(), &lines)
}

/// Scans a directory tree, visiting every regular file with a supported
/// extension.
///
/// Paths are collected and sorted before scanning so output order is
/// deterministic; the per-file scans then run in parallel and their
/// findings are flattened in sorted-path order. Unreadable files are
/// skipped, never fatal to the walk.
#[must_use]
pub fn scan_directory(root: &Path) -> Vec<Finding> {
    scan_directory_with_progress(root, &|_| {})
}

/// Like [`scan_directory`], but reports each file to `on_file` as it is
/// picked up for scanning. Callback order follows the parallel schedule,
/// not the (sorted) output order.
pub fn scan_directory_with_progress<F>(root: &Path, on_file: &F) -> Vec<Finding>
where
    F: Fn(&Path) + Sync,
{
    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file() && has_supported_extension(entry.path()))
        .map(|entry| entry.into_path())
        .collect();
    paths.sort();

    let per_file: Vec<Vec<Finding>> = paths
        .par_iter()
        .inspect(|path| {
            on_file(path);
        })
        .map(|path| scan_file(path))
        .collect();
    per_file.into_iter().flatten().collect()
}

/// Dispatches on path kind: file, directory, or error for anything else.
///
/// # Errors
///
/// Returns [`ScanError::PathNotFound`] if `path` is neither a readable
/// file nor a directory.
pub fn scan_path(path: &Path) -> Result<Vec<Finding>> {
    if path.is_file() {
        Ok(scan_file(path))
    } else if path.is_dir() {
        Ok(scan_directory(path))
    } else {
        Err(ScanError::PathNotFound(path.to_path_buf()))
    }
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}
