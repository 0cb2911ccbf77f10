//! Manifest-driven script scanner.
//!
//! Script text is matched against the manifest by plain substring search;
//! there is no parsing, so a path that happens to be a substring of an
//! unrelated token is still reported. Top-level `.js` files and inline
//! `<script>` blocks both go through [`collect_manifest_matches`].

use crate::classify::Collector;
use crate::manifest::SiteManifest;
use crate::options::ScanOptions;
use crate::patterns::ASSET_EXTENSION;
use crate::result::ReferenceSet;

/// Scans whitespace-free script text for manifest paths.
///
/// Every match is internal. Paths ending in a 2-4 letter extension are
/// assets, everything else is a link.
#[must_use]
pub fn scan_js(content: &str, options: &ScanOptions, manifest: &SiteManifest) -> ReferenceSet {
    let mut collector = Collector::new(options);
    collect_manifest_matches(content, manifest, &mut collector);
    collector.finish()
}

pub(crate) fn collect_manifest_matches(
    script: &str,
    manifest: &SiteManifest,
    collector: &mut Collector<'_>,
) {
    // The root path is a substring of nearly every script.
    for path in manifest.iter().filter(|p| *p != "/") {
        if script.contains(path) {
            collector.add_internal(path, ASSET_EXTENSION.is_match(path));
        }
    }
}
