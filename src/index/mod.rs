//! Sitemap index generation.
//!
//! The index is built from whatever sitemap files sit in a directory at scan time.
//! The main entry point is [`write_index`].

mod file_finder;
mod index_writer;

// Re-export public API
pub use file_finder::{find_sitemaps, SitemapFile};
pub use index_writer::{build_entries, write_index, write_index_at, IndexSettings};
