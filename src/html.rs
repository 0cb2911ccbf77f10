//! HTML reference scanner.
//!
//! Walks every element once, in document order, and pulls candidate
//! references out of it depending on what kind of element it is:
//!
//! | Element                      | Source                          | Kind  |
//! |------------------------------|---------------------------------|-------|
//! | `a`                          | `href` (not empty, no `#`)      | link  |
//! | `link`                       | `href` (not empty)              | asset |
//! | first `meta` refresh         | `url=` part of `content`        | link  |
//! | `style`                      | `url(...)` in the stylesheet    | asset |
//! | `script` (with `scan_js`)    | manifest paths in the text      | both  |
//! | any element                  | `src`, each `srcset` candidate  | asset |

use dom_query::Selection;

use crate::classify::Collector;
use crate::css::collect_css_urls;
use crate::dom;
use crate::js::collect_manifest_matches;
use crate::manifest::SiteManifest;
use crate::options::ScanOptions;
use crate::result::ReferenceSet;
use crate::scan::strip_whitespace;
use crate::srcset::parse_srcset;

/// What an element contributes beyond its `src`/`srcset` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementKind {
    Anchor,
    Link,
    MetaRefresh,
    Style,
    Script,
    Other,
}

impl ElementKind {
    fn of(tag: &str, el: &Selection) -> Self {
        match tag {
            "a" => Self::Anchor,
            "link" => Self::Link,
            "meta" if is_refresh(el) => Self::MetaRefresh,
            "style" => Self::Style,
            "script" => Self::Script,
            _ => Self::Other,
        }
    }
}

fn is_refresh(el: &Selection) -> bool {
    dom::get_attribute(el, "http-equiv").is_some_and(|v| v.eq_ignore_ascii_case("refresh"))
}

/// Scans an HTML document and classifies every reference it carries.
///
/// Malformed markup is parsed best-effort; whatever tree results is scanned.
///
/// # Example
///
/// ```rust
/// use site_refs::{html::scan_html, ScanOptions, SiteManifest};
///
/// let html = r#"<a href="/pricing">Pricing</a><img src="https://cdn.example.com/hero.jpg">"#;
/// let refs = scan_html(html, &ScanOptions::default(), &SiteManifest::new());
/// assert_eq!(refs.internal_links(), ["/pricing"]);
/// assert_eq!(refs.external_assets(), ["https://cdn.example.com/hero.jpg"]);
/// ```
#[must_use]
pub fn scan_html(content: &str, options: &ScanOptions, manifest: &SiteManifest) -> ReferenceSet {
    let mut collector = Collector::new(options);
    let doc = dom::parse(content);
    let mut refresh_seen = false;

    for node in dom::elements(&doc) {
        let el = Selection::from(node);
        let Some(tag) = dom::tag_name(&el) else {
            continue;
        };

        match ElementKind::of(&tag, &el) {
            ElementKind::Anchor => {
                if let Some(href) = dom::get_attribute(&el, "href") {
                    if !href.is_empty() && !href.contains('#') {
                        collector.add(&href, false);
                    }
                }
            }
            ElementKind::Link => {
                if let Some(href) = dom::get_attribute(&el, "href") {
                    if !href.is_empty() {
                        collector.add(&href, true);
                    }
                }
            }
            ElementKind::MetaRefresh if !refresh_seen => {
                refresh_seen = true;
                if let Some(content) = dom::get_attribute(&el, "content") {
                    if let Some(target) = refresh_target(&content) {
                        collector.add(target, false);
                    }
                }
            }
            ElementKind::Style => {
                let css = strip_whitespace(&dom::raw_text(&el));
                collect_css_urls(&css, &mut collector);
            }
            ElementKind::Script if collector.options().scan_js => {
                let script = strip_whitespace(&dom::raw_text(&el));
                collect_manifest_matches(&script, manifest, &mut collector);
            }
            _ => {}
        }

        if let Some(src) = dom::get_attribute(&el, "src") {
            collector.add(&src, true);
        }
        if let Some(srcset) = dom::get_attribute(&el, "srcset") {
            for url in parse_srcset(&srcset) {
                collector.add(url, true);
            }
        }
    }

    collector.finish()
}

/// Target of a meta refresh `content` value: the rest of the first
/// `;`-separated part that starts with `url=`.
fn refresh_target(content: &str) -> Option<&str> {
    content.split(';').find_map(|part| part.strip_prefix("url="))
}
