//! Configuration options for reference scanning.
//!
//! `ScanOptions` holds the opt-in suppression rules and the switch that
//! enables script scanning. Every option defaults to `false`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration options for reference scanning.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use site_refs::ScanOptions;
///
/// // Use defaults
/// let options = ScanOptions::default();
/// assert!(!options.scan_js);
///
/// // Customize specific fields
/// let options = ScanOptions {
///     ignore_mailto: true,
///     scan_js: true,
///     ..ScanOptions::default()
/// };
/// assert!(options.ignore_mailto);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScanOptions {
    /// Drop inline SVG images (`data:image/svg+xml...`).
    ///
    /// Default: `false`
    pub ignore_inline_svg: bool,

    /// Drop any reference containing `mailto:`.
    ///
    /// Default: `false`
    pub ignore_mailto: bool,

    /// Drop any reference containing the editor pseudo-scheme `cloudcannon:`.
    ///
    /// Default: `false`
    pub ignore_cc_editor_links: bool,

    /// Scan inline `<script>` blocks and top-level `.js` files for
    /// manifest paths.
    ///
    /// When disabled, no script text is ever inspected.
    ///
    /// Default: `false`
    pub scan_js: bool,
}

impl ScanOptions {
    /// Parses options from a JSON object.
    ///
    /// Missing keys fall back to `false`, unknown keys are ignored.
    ///
    /// ```rust
    /// use site_refs::ScanOptions;
    ///
    /// let options = ScanOptions::from_json_str(r#"{"scan_js": true}"#)?;
    /// assert!(options.scan_js);
    /// assert!(!options.ignore_mailto);
    /// # Ok::<(), site_refs::Error>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads options from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Returns options with every flag switched on where either side has it.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            ignore_inline_svg: self.ignore_inline_svg || other.ignore_inline_svg,
            ignore_mailto: self.ignore_mailto || other.ignore_mailto,
            ignore_cc_editor_links: self.ignore_cc_editor_links || other.ignore_cc_editor_links,
            scan_js: self.scan_js || other.scan_js,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_all_off() {
        let opts = ScanOptions::default();

        assert!(!opts.ignore_inline_svg);
        assert!(!opts.ignore_mailto);
        assert!(!opts.ignore_cc_editor_links);
        assert!(!opts.scan_js);
    }

    #[test]
    fn test_from_json_partial_object() {
        let opts = ScanOptions::from_json_str(r#"{"ignore_mailto": true}"#)
            .unwrap_or_else(|e| panic!("parse failed: {e}"));

        assert!(opts.ignore_mailto);
        assert!(!opts.scan_js);
    }

    #[test]
    fn test_from_json_ignores_unknown_keys() {
        let opts = ScanOptions::from_json_str(r#"{"scan_js": true, "source": "site"}"#)
            .unwrap_or_else(|e| panic!("parse failed: {e}"));

        assert!(opts.scan_js);
    }

    #[test]
    fn test_from_json_rejects_wrong_type() {
        let err = ScanOptions::from_json_str(r#"{"scan_js": "yes"}"#);
        assert!(matches!(err, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = ScanOptions::from_json_file(Path::new("/nonexistent/site-refs.json"));
        assert!(matches!(err, Err(Error::Io { .. })));
    }

    #[test]
    fn test_merge_ors_flags() {
        let file = ScanOptions {
            ignore_mailto: true,
            ..ScanOptions::default()
        };
        let flags = ScanOptions {
            scan_js: true,
            ..ScanOptions::default()
        };

        let merged = file.merge(flags);
        assert!(merged.ignore_mailto);
        assert!(merged.scan_js);
        assert!(!merged.ignore_inline_svg);
        assert!(!merged.ignore_cc_editor_links);
    }
}
