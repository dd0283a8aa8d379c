use super::file_finder::{find_sitemaps, SitemapFile};
use crate::config::ResolvedConfig;
use crate::constants::{DEFAULT_INDEX_FILE_MODE, DEFAULT_SITEMAP_SUFFIX};
use crate::errors::AppResult;
use crate::models::LastmodSource;
use crate::render::{render_index, IndexEntry, RenderOptions};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use tracing::info;

/// Settings for [`write_index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSettings {
    pub render: RenderOptions,
    /// File name suffix identifying sitemap files
    pub suffix: String,
    /// Permission bits of the written index file (Unix only)
    pub file_mode: u32,
    pub lastmod: LastmodSource,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            suffix: DEFAULT_SITEMAP_SUFFIX.to_string(),
            file_mode: DEFAULT_INDEX_FILE_MODE,
            lastmod: LastmodSource::ScanTime,
        }
    }
}

impl IndexSettings {
    pub fn from_config(config: &ResolvedConfig) -> AppResult<Self> {
        Ok(Self {
            render: config.render_options()?,
            suffix: config.sitemap_suffix.clone(),
            file_mode: config.index_file_mode,
            lastmod: config.index_lastmod,
        })
    }
}

/// Scans `folder` for sitemap files and writes an index referencing them at `index_file`.
///
/// Each entry's `loc` is `base_url` immediately followed by the file name; no `/` is
/// inserted, so `base_url` should normally end with one. With the default settings
/// every `lastmod` is the scan time, not the file's own modification time.
///
/// The index is written uncompressed and replaces any existing file.
///
/// # Returns
///
/// The number of sitemap files referenced.
///
/// # Errors
///
/// Returns `Io` if the folder cannot be listed or the index cannot be written.
pub fn write_index(
    folder: &Path,
    index_file: &Path,
    base_url: &str,
    settings: &IndexSettings,
) -> AppResult<usize> {
    write_index_at(folder, index_file, base_url, settings, Utc::now())
}

/// Same as [`write_index`] with an explicit scan time.
pub fn write_index_at(
    folder: &Path,
    index_file: &Path,
    base_url: &str,
    settings: &IndexSettings,
    scanned_at: DateTime<Utc>,
) -> AppResult<usize> {
    let files = find_sitemaps(folder, &settings.suffix)?;
    let entries = build_entries(&files, base_url, settings.lastmod, scanned_at);
    let document = render_index(&entries, &settings.render)?;

    fs::write(index_file, document.as_bytes())?;
    set_file_mode(index_file, settings.file_mode)?;

    info!(
        folder = %folder.display(),
        index_file = %index_file.display(),
        sitemaps = entries.len(),
        "Sitemap index written"
    );
    Ok(entries.len())
}

/// Turns found sitemap files into index entries.
pub fn build_entries(
    files: &[SitemapFile],
    base_url: &str,
    lastmod: LastmodSource,
    scanned_at: DateTime<Utc>,
) -> Vec<IndexEntry> {
    files
        .iter()
        .map(|file| IndexEntry {
            loc: format!("{base_url}{}", file.name),
            lastmod: match lastmod {
                LastmodSource::ScanTime => scanned_at,
                LastmodSource::FileModified => file.modified,
            },
        })
        .collect()
}

#[cfg(unix)]
fn set_file_mode(path: &Path, mode: u32) -> AppResult<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_file_mode(_path: &Path, _mode: u32) -> AppResult<()> {
    Ok(())
}
