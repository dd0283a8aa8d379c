use crate::errors::AppResult;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One URL listed in a sitemap.
///
/// Nothing here is validated: `priority` is not bounds-checked and the
/// locations are written as given.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UrlRecord {
    /// Absolute desktop URL
    pub loc: String,
    /// Absolute URL of the mobile rendering; may be empty
    #[serde(default)]
    pub mobile_loc: String,
    pub lastmod: DateTime<Utc>,
    /// Change frequency hint, e.g. `daily` or `weekly`
    pub changefreq: String,
    /// Expected in `[0.0, 1.0]`
    pub priority: f32,
}

impl UrlRecord {
    pub fn new(
        loc: impl Into<String>,
        mobile_loc: impl Into<String>,
        lastmod: DateTime<Utc>,
        changefreq: impl Into<String>,
        priority: f32,
    ) -> Self {
        Self {
            loc: loc.into(),
            mobile_loc: mobile_loc.into(),
            lastmod,
            changefreq: changefreq.into(),
            priority,
        }
    }
}

/// A list of URL records loaded from a TOML file of `[[url]]` tables.
///
/// ```toml
/// [[url]]
/// loc = "https://example.com/"
/// mobile_loc = "https://m.example.com/"
/// lastmod = "2024-05-01T10:00:00Z"
/// changefreq = "daily"
/// priority = 1.0
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordSet {
    #[serde(default, rename = "url")]
    pub urls: Vec<UrlRecord>,
}

impl RecordSet {
    /// Loads records from a TOML file. `lastmod` values must be quoted RFC 3339 strings.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        Ok(toml::from_str(contents)?)
    }
}

/// Where the index scanner takes each entry's `lastmod` from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LastmodSource {
    /// Time the directory was scanned
    #[default]
    ScanTime,
    /// Modification time of each sitemap file
    FileModified,
}
