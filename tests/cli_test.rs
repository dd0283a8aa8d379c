//! End-to-end tests for the command-line workflow

#[path = "common/mod.rs"]
mod common;

use common::*;
use sitemap_gen::cli;
use sitemap_gen::config::ResolvedConfig;
use sitemap_gen::models::RecordSet;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_record_file_loads() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("urls.toml");
    fs::write(&input, SAMPLE_RECORDS_TOML).unwrap();

    let records = RecordSet::from_toml_file(&input).unwrap();
    assert_eq!(records.urls.len(), 2);
    assert_eq!(records.urls[1].mobile_loc, "");
}

#[test]
fn test_sitemap_then_index_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("urls.toml");
    let public = temp_dir.path().join("public");
    fs::create_dir_all(&public).unwrap();
    fs::write(&input, SAMPLE_RECORDS_TOML).unwrap();
    let sitemap = public.join("sitemap-1.xml.gz");
    let index_file = public.join("sitemap.xml");

    cli::run_from(vec![
        "sitemap-gen".into(),
        "sitemap".into(),
        "--input".into(),
        input.clone().into_os_string(),
        "--output".into(),
        sitemap.clone().into_os_string(),
    ])
    .unwrap();

    let doc = read_gzip(&sitemap);
    assert_eq!(
        texts_of(&doc, "loc"),
        vec!["https://example.com/", "https://example.com/search?q=rust&page=2"]
    );
    assert_eq!(texts_of(&doc, "priority"), vec!["1.0", "0.9"]);
    assert_eq!(
        texts_of(&doc, "lastmod"),
        vec!["2024-05-01T18:00:00+08:00", "2024-05-02T18:00:00+08:00"]
    );

    cli::run_from(vec![
        "sitemap-gen".into(),
        "index".into(),
        "--dir".into(),
        public.clone().into_os_string(),
        "--output".into(),
        index_file.clone().into_os_string(),
        "--base-url".into(),
        "https://example.com/".into(),
    ])
    .unwrap();

    let index_doc = fs::read_to_string(&index_file).unwrap();
    assert_eq!(
        texts_of(&index_doc, "loc"),
        vec!["https://example.com/sitemap-1.xml.gz"]
    );
}

#[test]
fn test_sitemap_command_with_config_and_legacy_flag() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("urls.toml");
    let config_path = temp_dir.path().join("sitemap-gen.toml");
    let output = temp_dir.path().join("out.xml.gz");
    fs::write(&input, SAMPLE_RECORDS_TOML).unwrap();
    fs::write(&config_path, "utc_offset = \"+00:00\"\ncompression_level = 9\n").unwrap();

    let config = ResolvedConfig::from_toml_file(&config_path).unwrap();
    assert_eq!(config.compression_level, 9);

    cli::run_from(vec![
        "sitemap-gen".into(),
        "sitemap".into(),
        "-i".into(),
        input.into_os_string(),
        "-o".into(),
        output.clone().into_os_string(),
        "-c".into(),
        config_path.into_os_string(),
        "--legacy".into(),
    ])
    .unwrap();

    let doc = read_gzip(&output);
    assert!(doc.contains("<lastmod>2024-05-01T10:00:00+00:00</lastmod>"));
    assert!(doc.contains("<loc>https://example.com/search?q=rust&page=2</loc>"));
}

#[test]
fn test_sitemap_command_missing_input_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    let result = cli::run_from(vec![
        "sitemap-gen".into(),
        "sitemap".into(),
        "-i".into(),
        temp_dir.path().join("missing.toml").into_os_string(),
        "-o".into(),
        temp_dir.path().join("out.xml.gz").into_os_string(),
    ]);

    assert!(result.is_err());
    assert!(!temp_dir.path().join("out.xml.gz").exists());
}
