// Sitemap protocol namespaces
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";
pub const SITEMAP_SCHEMA_LOCATION: &str =
    "http://www.sitemaps.org/schemas/sitemap/0.9 http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd";

// Mobile alternate link
pub const MOBILE_LINK_REL: &str = "alternate";
pub const MOBILE_LINK_MEDIA: &str = "only screen and (max-width: 640px)";

// Defaults
pub const DEFAULT_UTC_OFFSET: &str = "+08:00";
pub const DEFAULT_SITEMAP_SUFFIX: &str = ".xml.gz";
pub const DEFAULT_INDEX_FILE_MODE: u32 = 0o755;
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

// lastmod layout; the offset is appended as `+hh:mm`
pub const LASTMOD_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";
