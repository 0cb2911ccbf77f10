//! Compiled regex patterns used across the scanners.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Syntactic "external" test: up to five ASCII letters, a colon, then a slash,
/// anchored at the start of the value.
///
/// Kept literal: `https://x` matches, while a six-letter scheme such as
/// `custom:/x` and a protocol-relative `//cdn.example.com/x` do not.
pub static EXTERNAL_URI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]{0,5}:/").expect("EXTERNAL_URI regex"));

/// A manifest path ending in a 2-4 letter extension names an asset.
pub static ASSET_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[a-zA-Z]{2,4}$").expect("ASSET_EXTENSION regex"));

/// Trailing index document, collapsed to its directory in site paths.
pub static INDEX_DOCUMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)/index\.html?$").expect("INDEX_DOCUMENT regex"));

/// Match `<meta charset="...">` tag
pub static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("CHARSET_META regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
pub static CONTENT_TYPE_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#)
        .expect("CONTENT_TYPE_CHARSET regex")
});

/// Match a leading `@charset "...";` rule in a stylesheet.
pub static CSS_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^@charset\s+["']([^"']+)["']\s*;"#).expect("CSS_CHARSET regex")
});
