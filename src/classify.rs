//! Reference classification and ignore rules.
//!
//! Every extractor hands its candidates to a [`Collector`], which drops
//! ignored values and routes the rest into the right bucket.

use crate::options::ScanOptions;
use crate::patterns::EXTERNAL_URI;
use crate::result::{Bucket, ReferenceSet};

/// Returns `true` if `value` starts with a short scheme prefix such as `https:/`.
///
/// This is a syntactic test only: up to five letters, a colon and a slash.
///
/// ```
/// use site_refs::classify::is_external;
///
/// assert!(is_external("https://example.com/logo.png"));
/// assert!(!is_external("/img/logo.png"));
/// ```
#[must_use]
pub fn is_external(value: &str) -> bool {
    EXTERNAL_URI.is_match(value)
}

/// Returns `true` if the options say `value` should be dropped entirely.
#[must_use]
pub fn is_ignored(value: &str, options: &ScanOptions) -> bool {
    (options.ignore_inline_svg && value.starts_with("data:image/svg+xml"))
        || (options.ignore_mailto && value.contains("mailto:"))
        || (options.ignore_cc_editor_links && value.contains("cloudcannon:"))
}

/// Accumulates classified references for one file.
pub(crate) struct Collector<'o> {
    options: &'o ScanOptions,
    references: ReferenceSet,
}

impl<'o> Collector<'o> {
    pub(crate) fn new(options: &'o ScanOptions) -> Self {
        Self {
            options,
            references: ReferenceSet::new(),
        }
    }

    pub(crate) fn options(&self) -> &ScanOptions {
        self.options
    }

    /// Classifies a candidate by the external test and adds it.
    pub(crate) fn add(&mut self, value: &str, is_asset: bool) {
        self.add_to(value, Bucket::route(is_asset, is_external(value)));
    }

    /// Adds a candidate that is known to be internal.
    pub(crate) fn add_internal(&mut self, value: &str, is_asset: bool) {
        self.add_to(value, Bucket::route(is_asset, false));
    }

    fn add_to(&mut self, value: &str, bucket: Bucket) {
        if is_ignored(value, self.options) {
            tracing::trace!(value, "ignored reference");
            return;
        }
        self.references.insert(bucket, value);
    }

    pub(crate) fn finish(self) -> ReferenceSet {
        self.references
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external() {
        assert!(is_external("http://cdn.example.com/x.png"));
        assert!(is_external("https://example.com"));
        assert!(is_external("file:///tmp/x"));
        assert!(!is_external("/pricing"));
        assert!(!is_external("../up.html"));
        assert!(!is_external("//cdn.example.com/x.png"));
        assert!(!is_external("mailto:hi@example.com"));
        // Six-letter scheme falls outside the literal bound.
        assert!(!is_external("webcal://example.com/feed"));
        // Only matched at the start.
        assert!(!is_external("/redirect?to=http://example.com"));
    }

    #[test]
    fn test_ignore_rules_require_opt_in() {
        let none = ScanOptions::default();
        assert!(!is_ignored("mailto:hi@example.com", &none));
        assert!(!is_ignored("data:image/svg+xml;base64,AAAA", &none));
        assert!(!is_ignored("cloudcannon:collections/posts", &none));
    }

    #[test]
    fn test_ignore_inline_svg_is_prefix_only() {
        let opts = ScanOptions {
            ignore_inline_svg: true,
            ..ScanOptions::default()
        };
        assert!(is_ignored("data:image/svg+xml;utf8,<svg/>", &opts));
        assert!(!is_ignored("data:image/png;base64,AAAA", &opts));
        assert!(!is_ignored("/x?data:image/svg+xml", &opts));
    }

    #[test]
    fn test_ignore_mailto_and_editor_links_match_anywhere() {
        let opts = ScanOptions {
            ignore_mailto: true,
            ignore_cc_editor_links: true,
            ..ScanOptions::default()
        };
        assert!(is_ignored("mailto:hi@example.com", &opts));
        assert!(is_ignored("/contact?fallback=mailto:hi@example.com", &opts));
        assert!(is_ignored("cloudcannon:collections/posts", &opts));
        assert!(!is_ignored("/contact", &opts));
    }

    #[test]
    fn test_collector_routes_and_drops() {
        let opts = ScanOptions {
            ignore_mailto: true,
            ..ScanOptions::default()
        };
        let mut collector = Collector::new(&opts);
        collector.add("/img/a.png", true);
        collector.add("https://cdn.example.com/a.png", true);
        collector.add("/about", false);
        collector.add("https://example.com", false);
        collector.add("mailto:hi@example.com", false);
        collector.add_internal("https://looks-external.example.com/x.js", true);

        let set = collector.finish();
        assert_eq!(set.internal_assets(), ["/img/a.png", "https://looks-external.example.com/x.js"]);
        assert_eq!(set.external_assets(), ["https://cdn.example.com/a.png"]);
        assert_eq!(set.internal_links(), ["/about"]);
        assert_eq!(set.external_links(), ["https://example.com"]);
    }
}
