//! sitemap-gen library
//!
//! This crate provides the core functionality for the `sitemap-gen` binary.
//!
//! ## Overview
//!
//! - [`render`] - Renders URL records and index entries into sitemap XML
//! - [`writer`] - Compresses a rendered sitemap with gzip and writes it to disk
//! - [`index`] - Scans a directory for sitemap files and writes a sitemap index
//! - [`config`] - TOML configuration (UTC offset, serializer, suffix, file mode)
//! - [`models`] - URL records and the TOML record file format
//! - [`cli`] - Command-line interface
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! Write a sitemap, then index every sitemap in the same directory:
//!
//! ```no_run
//! use chrono::Utc;
//! use flate2::Compression;
//! use sitemap_gen::{errors::AppResult, index, models::UrlRecord, render::RenderOptions, writer};
//! use std::path::Path;
//!
//! # fn example() -> AppResult<()> {
//! let records = vec![UrlRecord::new(
//!     "https://example.com/",
//!     "https://m.example.com/",
//!     Utc::now(),
//!     "daily",
//!     1.0,
//! )];
//! writer::write_sitemap(
//!     Path::new("public/sitemap-1.xml.gz"),
//!     &records,
//!     &RenderOptions::default(),
//!     Compression::default(),
//! )?;
//!
//! index::write_index(
//!     Path::new("public"),
//!     Path::new("public/sitemap.xml"),
//!     "https://example.com/",
//!     &index::IndexSettings::default(),
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod index;
pub mod models;
pub mod render;
pub mod writer;
