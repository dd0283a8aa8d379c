use super::element::Element;
use super::format::format_lastmod;
use super::{legacy, RenderOptions, XmlMode};
use crate::constants::SITEMAP_NS;
use crate::errors::AppResult;
use chrono::{DateTime, Utc};

/// One `<sitemap>` reference inside a sitemap index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Full URL of the sitemap file
    pub loc: String,
    pub lastmod: DateTime<Utc>,
}

/// Renders a `<sitemapindex>` document with one `<sitemap>` per entry, in input order.
pub fn render_index(entries: &[IndexEntry], options: &RenderOptions) -> AppResult<String> {
    match options.mode {
        XmlMode::Legacy => Ok(legacy::index(entries, options)),
        XmlMode::Escaped => Element::container("sitemapindex")
            .attr("xmlns", SITEMAP_NS)
            .children(entries.iter().map(|entry| {
                Element::new("sitemap")
                    .child(Element::with_text("loc", entry.loc.as_str()))
                    .child(Element::with_text(
                        "lastmod",
                        format_lastmod(&entry.lastmod, &options.offset),
                    ))
            }))
            .to_document(),
    }
}
