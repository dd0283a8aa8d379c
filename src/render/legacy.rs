//! Unescaped text templates kept for byte-compatible output with earlier generators.
//!
//! Values are pasted into the templates verbatim. Any `&`, `<` or `"` in a location or
//! change frequency yields a malformed document.

use super::format::{format_lastmod, format_priority};
use super::index::IndexEntry;
use super::RenderOptions;
use crate::models::UrlRecord;

const URLSET_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
\t<urlset xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\"\n\
\txsi:schemaLocation=\"http://www.sitemaps.org/schemas/sitemap/0.9 http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd\"\n\
\txmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\"\n\
\txmlns:xhtml=\"http://www.w3.org/1999/xhtml\">";
const URLSET_FOOTER: &str = " </urlset>";

const INDEX_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n      \
<sitemapindex xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">";
const INDEX_FOOTER: &str = "\n</sitemapindex>\n\t";

pub(super) fn urlset(records: &[UrlRecord], options: &RenderOptions) -> String {
    let mut out = String::with_capacity(URLSET_HEADER.len() + records.len() * 320);
    out.push_str(URLSET_HEADER);
    for record in records {
        out.push_str(&format!(
            "\n\t <url>\n\t   <loc>{}</loc>\n       \
             <xhtml:link rel=\"alternate\" media=\"only screen and (max-width: 640px)\" href=\"{}\" />\n\t   \
             <lastmod>{}</lastmod>\n\t   \
             <changefreq>{}</changefreq>\n\t   \
             <priority>{}</priority>\n\t </url>",
            record.loc,
            record.mobile_loc,
            format_lastmod(&record.lastmod, &options.offset),
            record.changefreq,
            format_priority(record.priority),
        ));
    }
    out.push_str(URLSET_FOOTER);
    out
}

pub(super) fn index(entries: &[IndexEntry], options: &RenderOptions) -> String {
    let mut out = String::with_capacity(INDEX_HEADER.len() + entries.len() * 128);
    out.push_str(INDEX_HEADER);
    for entry in entries {
        out.push_str(&format!(
            "\n    <sitemap>\n       <loc>{}</loc>\n       <lastmod>{}</lastmod>\n    </sitemap>\n\t",
            entry.loc,
            format_lastmod(&entry.lastmod, &options.offset),
        ));
    }
    out.push_str(INDEX_FOOTER);
    out
}
