//! Format dispatch for a single file.

use crate::css::scan_css;
use crate::html::scan_html;
use crate::js::scan_js;
use crate::manifest::SiteManifest;
use crate::options::ScanOptions;
use crate::record::{FileRecord, Format};
use crate::result::{Bucket, ReferenceSet};

/// Scans `content` with the extractor for `format`.
///
/// CSS and JS are matched whitespace-insensitively, so their text is
/// stripped of whitespace first. JS is only scanned with `scan_js` on, and
/// unsupported formats give an empty set.
#[must_use]
pub fn scan_content(
    format: Format,
    content: &str,
    options: &ScanOptions,
    manifest: &SiteManifest,
) -> ReferenceSet {
    match format {
        Format::Html => scan_html(content, options, manifest),
        Format::Css => scan_css(&strip_whitespace(content), options),
        Format::Js if options.scan_js => scan_js(&strip_whitespace(content), options, manifest),
        Format::Js | Format::Other => ReferenceSet::new(),
    }
}

/// Scans one file and pairs the result with its site path.
#[must_use]
pub fn scan_file(
    record: &FileRecord,
    options: &ScanOptions,
    manifest: &SiteManifest,
) -> (String, ReferenceSet) {
    let references = scan_content(record.format(), record.content(), options, manifest);

    tracing::debug!(
        site_path = record.site_path(),
        format = ?record.format(),
        internal_assets = references.bucket(Bucket::InternalAssets).len(),
        external_assets = references.bucket(Bucket::ExternalAssets).len(),
        internal_links = references.bucket(Bucket::InternalLinks).len(),
        external_links = references.bucket(Bucket::ExternalLinks).len(),
        "scanned file"
    );

    (record.site_path().to_string(), references)
}

/// Removes every whitespace character.
#[must_use]
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
