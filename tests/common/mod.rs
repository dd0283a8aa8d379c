//! Common test utilities for integration tests

use chrono::{TimeZone, Utc};
use flate2::read::GzDecoder;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use sitemap_gen::models::UrlRecord;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Builds a record with a fixed lastmod of 2024-05-01T00:00:00Z
#[allow(dead_code)]
pub fn record(loc: &str, changefreq: &str, priority: f32) -> UrlRecord {
    UrlRecord::new(
        loc,
        loc.replace("https://", "https://m."),
        Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        changefreq,
        priority,
    )
}

/// Reads and decompresses a gzip file into a string
#[allow(dead_code)]
pub fn read_gzip(path: &Path) -> String {
    let bytes = fs::read(path).unwrap();
    let mut out = String::new();
    GzDecoder::new(bytes.as_slice())
        .read_to_string(&mut out)
        .unwrap();
    out
}

/// Helper function to create empty files in a directory
#[allow(dead_code)]
pub fn touch_files(dir: &Path, names: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    for name in names {
        fs::write(dir.join(name), b"").unwrap();
    }
}

/// Collects the unescaped text of every element named `tag`, in document order
#[allow(dead_code)]
pub fn texts_of(doc: &str, tag: &str) -> Vec<String> {
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

/// Sample record file in the format accepted by `RecordSet::from_toml_file`
#[allow(dead_code)]
pub const SAMPLE_RECORDS_TOML: &str = r#"
[[url]]
loc = "https://example.com/"
mobile_loc = "https://m.example.com/"
lastmod = "2024-05-01T10:00:00Z"
changefreq = "daily"
priority = 1.0

[[url]]
loc = "https://example.com/search?q=rust&page=2"
lastmod = "2024-05-02T10:00:00Z"
changefreq = "weekly"
priority = 0.85
"#;
