use super::element::Element;
use super::format::{format_lastmod, format_priority};
use super::{legacy, RenderOptions, XmlMode};
use crate::constants::*;
use crate::errors::AppResult;
use crate::models::UrlRecord;
use tracing::debug;

/// Renders URL records into a complete `<urlset>` document.
///
/// Records appear in input order. Each `<url>` holds, in this order: `loc`, the
/// mobile `xhtml:link` alternate, `lastmod`, `changefreq` and `priority`.
/// The alternate link is written even when `mobile_loc` is empty.
///
/// # Errors
///
/// Returns `Xml` if the serializer fails. Legacy mode never fails.
pub fn render_urlset(records: &[UrlRecord], options: &RenderOptions) -> AppResult<String> {
    let document = match options.mode {
        XmlMode::Legacy => legacy::urlset(records, options),
        XmlMode::Escaped => urlset_element(records, options).to_document()?,
    };

    debug!(
        records = records.len(),
        bytes = document.len(),
        mode = ?options.mode,
        "Rendered urlset"
    );
    Ok(document)
}

fn urlset_element(records: &[UrlRecord], options: &RenderOptions) -> Element {
    Element::container("urlset")
        .attr("xmlns:xsi", XSI_NS)
        .attr("xsi:schemaLocation", SITEMAP_SCHEMA_LOCATION)
        .attr("xmlns", SITEMAP_NS)
        .attr("xmlns:xhtml", XHTML_NS)
        .children(records.iter().map(|record| url_element(record, options)))
}

fn url_element(record: &UrlRecord, options: &RenderOptions) -> Element {
    Element::new("url")
        .child(Element::with_text("loc", record.loc.as_str()))
        .child(
            Element::new("xhtml:link")
                .attr("rel", MOBILE_LINK_REL)
                .attr("media", MOBILE_LINK_MEDIA)
                .attr("href", record.mobile_loc.as_str()),
        )
        .child(Element::with_text(
            "lastmod",
            format_lastmod(&record.lastmod, &options.offset),
        ))
        .child(Element::with_text("changefreq", record.changefreq.as_str()))
        .child(Element::with_text("priority", format_priority(record.priority)))
}
