use crate::errors::AppResult;
use crate::models::UrlRecord;
use crate::render::{render_urlset, RenderOptions};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Renders `records` and writes them as a gzip-compressed sitemap at `path`.
///
/// The document is rendered in memory first, then compressed straight into the
/// destination file. An existing file is truncated and replaced.
///
/// # Behavior
///
/// - **Overwrite**: each call fully replaces the file; there is no append mode.
/// - **Deterministic**: the gzip header carries no timestamp or file name, so the
///   same records and options always produce the same bytes.
/// - **Not atomic**: if writing fails midway an empty or truncated file may remain.
///
/// # Arguments
///
/// * `path` - Destination file, conventionally ending in `.xml.gz`
/// * `records` - URL records, written in order
/// * `options` - Offset and serializer used for rendering
/// * `level` - Gzip compression level
///
/// # Errors
///
/// Returns `Io` if the file cannot be created or any write fails, and `Xml` if
/// rendering fails.
///
/// # Example
///
/// ```no_run
/// use chrono::Utc;
/// use flate2::Compression;
/// use sitemap_gen::{models::UrlRecord, render::RenderOptions, writer};
/// use std::path::Path;
///
/// # fn main() -> Result<(), sitemap_gen::errors::AppError> {
/// let records = vec![UrlRecord::new(
///     "https://example.com/",
///     "https://m.example.com/",
///     Utc::now(),
///     "daily",
///     1.0,
/// )];
/// writer::write_sitemap(
///     Path::new("sitemap-1.xml.gz"),
///     &records,
///     &RenderOptions::default(),
///     Compression::default(),
/// )?;
/// # Ok(())
/// # }
/// ```
pub fn write_sitemap(
    path: &Path,
    records: &[UrlRecord],
    options: &RenderOptions,
    level: Compression,
) -> AppResult<()> {
    let document = render_urlset(records, options)?;

    let file = File::create(path)?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), level);
    encoder.write_all(document.as_bytes())?;
    encoder.finish()?.flush()?;

    info!(
        file = %path.display(),
        records = records.len(),
        bytes = document.len(),
        "Sitemap written"
    );
    Ok(())
}

/// Gzip-compresses a rendered document in memory.
pub fn compress_document(document: &str, level: Compression) -> AppResult<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(document.len() / 4), level);
    encoder.write_all(document.as_bytes())?;
    Ok(encoder.finish()?)
}
