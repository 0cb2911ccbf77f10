//! Character encoding detection and decoding of raw file bytes.
//!
//! HTML declares its charset in meta tags, CSS in a leading `@charset`
//! rule; everything else is read as UTF-8. A byte-order mark always wins.

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::{CHARSET_META, CONTENT_TYPE_CHARSET, CSS_CHARSET};
use crate::record::Format;

/// Decodes file bytes to text for scanning.
///
/// A byte-order mark selects the encoding outright. Without one, bytes
/// containing a NUL are not text and decode to an empty string, so a
/// mislabelled binary file scans as empty. Invalid sequences are replaced
/// with U+FFFD rather than causing errors.
///
/// # Examples
///
/// ```
/// use site_refs::encoding::decode_content;
/// use site_refs::Format;
///
/// let css = decode_content(Format::Css, b"a{b:url(/x.png)}");
/// assert_eq!(css, "a{b:url(/x.png)}");
///
/// assert_eq!(decode_content(Format::Html, b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR"), "");
/// ```
#[must_use]
pub fn decode_content(format: Format, bytes: &[u8]) -> String {
    // UTF-16 text is full of NULs, so the BOM has to be checked first.
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (decoded, _had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return decoded.into_owned();
    }

    if bytes.contains(&0) {
        return String::new();
    }

    let encoding = match format {
        Format::Html => detect_html_encoding(bytes),
        Format::Css => detect_css_encoding(bytes),
        Format::Js | Format::Other => UTF_8,
    };

    let (decoded, _had_errors) = encoding.decode_without_bom_handling(bytes);
    decoded.into_owned()
}

/// Detect character encoding from HTML bytes.
///
/// Looks for charset declarations in the following order:
/// 1. `<meta charset="...">`
/// 2. `<meta http-equiv="Content-Type" content="...; charset=...">`
/// 3. Defaults to UTF-8 if no declaration found
///
/// Only examines the first 1024 bytes.
#[must_use]
pub fn detect_html_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    [&CHARSET_META, &CONTENT_TYPE_CHARSET]
        .into_iter()
        .find_map(|re| {
            re.captures(&head_str)
                .and_then(|c| c.get(1))
                .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        })
        .unwrap_or(UTF_8)
}

/// Detect character encoding from a leading `@charset "...";` rule.
#[must_use]
pub fn detect_css_encoding(css: &[u8]) -> &'static Encoding {
    let head = &css[..css.len().min(128)];
    let head_str = String::from_utf8_lossy(head);

    CSS_CHARSET
        .captures(&head_str)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}
