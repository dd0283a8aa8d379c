use crate::constants::*;
use crate::errors::{AppError, AppResult};
use crate::models::LastmodSource;
use crate::render::{RenderOptions, XmlMode};
use chrono::FixedOffset;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Resolved configuration with all values filled in (no Options).
///
/// Every field has a default, so an empty TOML file is a valid configuration.
/// Unknown keys are rejected to catch typos.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolvedConfig {
    /// Offset `lastmod` values are written in, as `+hh:mm` or `-hh:mm`
    pub utc_offset: String,
    /// `escaped` (default) or `legacy` unescaped templates
    pub xml_mode: XmlMode,
    /// File name suffix the index scanner treats as a sitemap
    pub sitemap_suffix: String,
    /// Permission bits applied to the index file (Unix only)
    pub index_file_mode: u32,
    /// Gzip level, 0 (store) to 9 (best)
    pub compression_level: u32,
    /// `scan-time` (default) or `file-modified`
    pub index_lastmod: LastmodSource,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            utc_offset: DEFAULT_UTC_OFFSET.to_string(),
            xml_mode: XmlMode::Escaped,
            sitemap_suffix: DEFAULT_SITEMAP_SUFFIX.to_string(),
            index_file_mode: DEFAULT_INDEX_FILE_MODE,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            index_lastmod: LastmodSource::ScanTime,
        }
    }
}

impl ResolvedConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, `ParseError` if the TOML is malformed
    /// or contains unknown keys, and `InvalidInput` if a value fails validation.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ResolvedConfig = toml::from_str(&contents)
            .map_err(|e| AppError::ParseError(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot: the offset syntax, the gzip level and the suffix.
    pub fn validate(&self) -> AppResult<()> {
        self.offset()?;
        if self.compression_level > 9 {
            return Err(AppError::InvalidInput(format!(
                "Compression level must be between 0 and 9, got {}",
                self.compression_level
            )));
        }
        if self.sitemap_suffix.is_empty() {
            return Err(AppError::InvalidInput(
                "Sitemap suffix must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Parses `utc_offset` into a fixed offset.
    pub fn offset(&self) -> AppResult<FixedOffset> {
        self.utc_offset.trim().parse::<FixedOffset>().map_err(|e| {
            AppError::InvalidInput(format!("Invalid UTC offset '{}': {e}", self.utc_offset))
        })
    }

    pub fn render_options(&self) -> AppResult<RenderOptions> {
        Ok(RenderOptions::new(self.offset()?, self.xml_mode))
    }
}
