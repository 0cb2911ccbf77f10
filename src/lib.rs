//! # site-refs
//!
//! Finds the references embedded in a rendered static site and sorts them
//! into four buckets: internal assets, external assets, internal links and
//! external links. The result feeds link and asset reports.
//!
//! ## Quick Start
//!
//! ```rust
//! use site_refs::{scan_content, Format, ScanOptions, SiteManifest};
//!
//! let html = r#"<html><head><link rel="stylesheet" href="/css/site.css"></head>
//! <body><a href="/pricing">Pricing</a><a href="https://example.com">Elsewhere</a></body></html>"#;
//!
//! let refs = scan_content(Format::Html, html, &ScanOptions::default(), &SiteManifest::new());
//! assert_eq!(refs.internal_assets(), ["/css/site.css"]);
//! assert_eq!(refs.internal_links(), ["/pricing"]);
//! assert_eq!(refs.external_links(), ["https://example.com"]);
//! ```
//!
//! ## What is scanned
//!
//! - **HTML**: anchors, `link` hrefs, every `src` and `srcset`, the first meta
//!   refresh, inline `<style>` blocks and (with `scan_js`) inline scripts
//! - **CSS**: every `url(...)`
//! - **JS** (with `scan_js`): occurrences of known site paths
//!
//! Classification is purely syntactic. Nothing is resolved against a base
//! URL and nothing is fetched.

mod error;
mod options;
mod patterns;
mod result;

/// Reference classification and ignore rules.
pub mod classify;

/// Stylesheet `url(...)` scanning.
pub mod css;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Character encoding detection for raw file bytes.
pub mod encoding;

/// HTML document scanning.
pub mod html;

/// Manifest-driven script scanning.
pub mod js;

/// Known site paths.
pub mod manifest;

/// Scanned files, formats and site paths.
pub mod record;

/// Per-file format dispatch.
pub mod scan;

/// Whole-site directory scanning.
pub mod site;

/// `srcset` attribute parsing.
pub mod srcset;

// Public API - re-exports
pub use error::{Error, Result};
pub use manifest::SiteManifest;
pub use options::ScanOptions;
pub use record::{FileRecord, Format};
pub use result::{Bucket, ReferenceSet, ScanResult};
pub use scan::{scan_content, scan_file};
pub use site::{scan_records, scan_site};
