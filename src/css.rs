//! Stylesheet `url(...)` scanner.
//!
//! Works on text that has already had its whitespace removed. The scanner
//! pairs each `url(` with the next `)` and knows nothing about comments or
//! escaped parentheses, so malformed input can mis-pair delimiters.

use crate::classify::Collector;
use crate::options::ScanOptions;
use crate::result::ReferenceSet;

/// Scans whitespace-free stylesheet text and classifies every `url(...)` as an asset.
#[must_use]
pub fn scan_css(content: &str, options: &ScanOptions) -> ReferenceSet {
    let mut collector = Collector::new(options);
    collect_css_urls(content, &mut collector);
    collector.finish()
}

/// Returns the `url(...)` targets in `content`, in order of appearance.
///
/// An unmatched `url(` ends the scan.
///
/// ```
/// use site_refs::css::css_urls;
///
/// let urls = css_urls(r#"a{background:url('/a.png')}b{background:url("/b.png")}"#);
/// assert_eq!(urls, ["/a.png", "/b.png"]);
/// ```
#[must_use]
pub fn css_urls(content: &str) -> Vec<&str> {
    let mut urls = Vec::new();
    let mut cursor = 0;

    while let Some(found) = content[cursor..].find("url(") {
        let start = cursor + found + "url(".len();
        let Some(len) = content[start..].find(')') else {
            break;
        };
        let end = start + len;
        urls.push(strip_quotes(&content[start..end]));
        cursor = end + 1;
    }

    urls
}

pub(crate) fn collect_css_urls(content: &str, collector: &mut Collector<'_>) {
    for url in css_urls(content) {
        collector.add(url, true);
    }
}

/// Removes one layer of matching `'` or `"` quotes.
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unquoted_internal_url() {
        let set = scan_css("a{background:url(/img/x.png)}", &ScanOptions::default());
        assert_eq!(set.internal_assets(), ["/img/x.png"]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_quoted_external_url() {
        let set = scan_css(
            r#"a{background:url("http://cdn.example.com/x.png")}"#,
            &ScanOptions::default(),
        );
        assert_eq!(set.external_assets(), ["http://cdn.example.com/x.png"]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_multiple_urls_and_duplicates() {
        let css = "@font-face{src:url(/f.woff2)format('woff2'),url(/f.woff)}a{background:url(/f.woff2)}";
        let set = scan_css(css, &ScanOptions::default());
        assert_eq!(set.internal_assets(), ["/f.woff2", "/f.woff"]);
    }

    #[test]
    fn test_mismatched_quotes_are_kept() {
        assert_eq!(css_urls(r#"a{b:url("/x.png')}"#), [r#""/x.png'"#]);
    }

    #[test]
    fn test_single_quote_character_is_kept() {
        assert_eq!(css_urls(r#"a{b:url(")}"#), [r#"""#]);
    }

    #[test]
    fn test_unmatched_url_stops_scan() {
        assert_eq!(css_urls("a{b:url(/one.png)}c{d:url(/two.png"), ["/one.png"]);
    }

    #[test]
    fn test_no_urls() {
        assert!(css_urls("").is_empty());
        assert!(css_urls("body{color:red}").is_empty());
    }

    #[test]
    fn test_ignored_inline_svg_does_not_stop_scan() {
        let opts = ScanOptions {
            ignore_inline_svg: true,
            ..ScanOptions::default()
        };
        let css = "a{b:url(\"data:image/svg+xml;utf8,<svg/>\")}c{d:url(/after.png)}";
        let set = scan_css(css, &opts);
        assert_eq!(set.internal_assets(), ["/after.png"]);
    }

    #[test]
    fn test_parenthesis_inside_value_mis_pairs() {
        // Permissive pairing: the first `)` closes the value.
        assert_eq!(css_urls("a{b:url(/img/a(1).png)}"), ["/img/a(1"]);
    }
}
