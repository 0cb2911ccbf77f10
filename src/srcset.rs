//! `srcset` attribute parsing.
//!
//! Splits a srcset value into its image candidate URLs, following the
//! candidate-splitting steps of the HTML standard. Descriptors (`1x`,
//! `480w`) are skipped, not validated.

/// Returns the candidate URLs of a `srcset` attribute value.
///
/// Commas inside a URL (as in `data:` URIs) stay part of the URL; a comma
/// directly after a URL ends that candidate.
///
/// ```
/// use site_refs::srcset::parse_srcset;
///
/// assert_eq!(parse_srcset("/a.jpg 1x, /b.jpg 2x"), ["/a.jpg", "/b.jpg"]);
/// assert_eq!(parse_srcset("/small.jpg 480w,/large.jpg 1080w"), ["/small.jpg", "/large.jpg"]);
/// ```
#[must_use]
pub fn parse_srcset(value: &str) -> Vec<&str> {
    let bytes = value.as_bytes();
    let mut urls = Vec::new();
    let mut pos = 0;

    loop {
        // Leading separators.
        while pos < bytes.len() && (is_space(bytes[pos]) || bytes[pos] == b',') {
            pos += 1;
        }
        if pos >= bytes.len() {
            break;
        }

        let start = pos;
        while pos < bytes.len() && !is_space(bytes[pos]) {
            pos += 1;
        }
        let raw = &value[start..pos];
        let url = raw.trim_end_matches(',');
        if !url.is_empty() {
            urls.push(url);
        }
        if url.len() != raw.len() {
            // Trailing comma closed the candidate without descriptors.
            continue;
        }

        // Descriptors run to the next comma outside parentheses.
        let mut depth = 0usize;
        while pos < bytes.len() {
            match bytes[pos] {
                b'(' => depth += 1,
                b')' => depth = depth.saturating_sub(1),
                b',' if depth == 0 => break,
                _ => {}
            }
            pos += 1;
        }
    }

    urls
}

/// ASCII whitespace as defined for HTML attribute microsyntaxes.
const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0C' | b'\r')
}
