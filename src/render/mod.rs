//! XML rendering for sitemap and sitemap index documents.
//!
//! Two serializers are available, selected by [`XmlMode`]:
//!
//! - [`XmlMode::Escaped`] builds an element tree and writes it through `quick-xml`,
//!   escaping text and attribute values.
//! - [`XmlMode::Legacy`] fills fixed text templates without escaping. Values containing
//!   `&`, `<` or quotes produce invalid XML in this mode.

mod element;
mod format;
mod index;
mod legacy;
mod urlset;

use crate::constants::DEFAULT_UTC_OFFSET;
use chrono::FixedOffset;
use serde::Deserialize;

// Re-export public API
pub use element::Element;
pub use format::{format_lastmod, format_priority};
pub use index::{render_index, IndexEntry};
pub use urlset::render_urlset;

/// Serializer used to produce XML text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum XmlMode {
    #[default]
    Escaped,
    Legacy,
}

/// Settings shared by the sitemap and index renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Offset every `lastmod` value is expressed in
    pub offset: FixedOffset,
    pub mode: XmlMode,
}

impl RenderOptions {
    pub fn new(offset: FixedOffset, mode: XmlMode) -> Self {
        Self { offset, mode }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            offset: DEFAULT_UTC_OFFSET
                .parse()
                .expect("default UTC offset is a valid %z value"),
            mode: XmlMode::Escaped,
        }
    }
}


/// Collects the unescaped text of every element named `tag`, in document order.
#[cfg(test)]
pub(crate) fn texts_of(doc: &str, tag: &str) -> Vec<String> {
    use quick_xml::escape::resolve_predefined_entity;
    use quick_xml::events::Event;
    use quick_xml::reader::Reader;

    let mut reader = Reader::from_str(doc);
    let mut out = Vec::new();
    let mut inside = false;
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) if e.name().as_ref() == tag.as_bytes() => {
                inside = true;
                out.push(String::new());
            }
            Event::End(e) if e.name().as_ref() == tag.as_bytes() => inside = false,
            Event::Text(t) if inside => {
                if let Some(last) = out.last_mut() {
                    last.push_str(&t.decode().unwrap());
                }
            }
            Event::GeneralRef(r) if inside => {
                let name = r.decode().unwrap();
                if let Some(last) = out.last_mut() {
                    last.push_str(resolve_predefined_entity(&name).unwrap_or_default());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    out
}
