use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// A sitemap file found in the scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapFile {
    /// File name only, used to build the public URL
    pub name: String,
    pub path: PathBuf,
    pub modified: DateTime<Utc>,
}

/// Lists the sitemap files directly inside `dir`.
///
/// Only non-directory entries whose name ends with `suffix` are returned;
/// subdirectories are not descended into. Results are sorted by file name so that repeated scans
/// of the same directory list entries in the same order.
///
/// Each matched file name is logged at `info` level.
///
/// # Errors
///
/// Returns `Io` if `dir` is missing, is not a directory, cannot be listed, or an
/// entry's metadata cannot be read.
pub fn find_sitemaps(dir: &Path, suffix: &str) -> AppResult<Vec<SitemapFile>> {
    // min_depth(1) hides a non-directory root, so list it directly first
    fs::read_dir(dir)?;

    let mut out = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter();

    for entry in walker {
        let entry = entry.map_err(walk_error)?;
        if entry.file_type().is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            warn!(
                file = %entry.path().display(),
                "Skipping file with non UTF-8 name"
            );
            continue;
        };
        if !name.ends_with(suffix) {
            continue;
        }

        info!(file = name, "Found sitemap");
        let modified = entry.metadata().map_err(walk_error)?.modified()?;
        out.push(SitemapFile {
            name: name.to_string(),
            path: entry.path().to_path_buf(),
            modified: DateTime::<Utc>::from(modified),
        });
    }

    Ok(out)
}

/// Unwraps the underlying IO error so callers see the same `Io` variant as plain `std::fs` calls.
fn walk_error(err: walkdir::Error) -> AppError {
    match err.into_io_error() {
        Some(io) => AppError::Io(io),
        None => AppError::InvalidInput("Filesystem loop detected while listing sitemaps".into()),
    }
}
