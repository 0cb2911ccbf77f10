//! Scanned files and their site paths.

use std::path::Path;

use crate::encoding::decode_content;
use crate::patterns::INDEX_DOCUMENT;

/// Content format, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Html,
    Css,
    Js,
    /// Anything else. Scanning it yields an empty result.
    Other,
}

impl Format {
    /// Maps an extension (without the dot, any case) to a format.
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "html" | "htm" => Self::Html,
            "css" => Self::Css,
            "js" => Self::Js,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map_or(Self::Other, Self::from_extension)
    }
}

/// One rendered site file, ready to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    site_path: String,
    format: Format,
    content: String,
}

impl FileRecord {
    /// Builds a record for `path`, which lives under the site directory `base`.
    ///
    /// ```
    /// use std::path::Path;
    /// use site_refs::{FileRecord, Format};
    ///
    /// let record = FileRecord::new(Path::new("public/blog/index.html"), Path::new("public"), "<p>hi</p>");
    /// assert_eq!(record.site_path(), "/blog/");
    /// assert_eq!(record.format(), Format::Html);
    /// ```
    #[must_use]
    pub fn new(path: &Path, base: &Path, content: impl Into<String>) -> Self {
        Self {
            site_path: site_path(path, base),
            format: Format::from_path(path),
            content: content.into(),
        }
    }

    /// Builds a record from raw file bytes, decoding them for the file's format.
    #[must_use]
    pub fn from_bytes(path: &Path, base: &Path, bytes: &[u8]) -> Self {
        let format = Format::from_path(path);
        Self {
            site_path: site_path(path, base),
            format,
            content: decode_content(format, bytes),
        }
    }

    #[must_use]
    pub fn site_path(&self) -> &str {
        &self.site_path
    }

    #[must_use]
    pub fn format(&self) -> Format {
        self.format
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Derives the site path of `path` relative to `base`.
///
/// The base prefix is stripped, separators become `/`, the result always
/// starts with `/`, and a trailing `/index.html` or `/index.htm` (any case)
/// collapses to `/`. A path outside `base` keeps its full form.
///
/// ```
/// use std::path::Path;
/// use site_refs::record::site_path;
///
/// let base = Path::new("_site");
/// assert_eq!(site_path(Path::new("_site/index.html"), base), "/");
/// assert_eq!(site_path(Path::new("_site/css/main.css"), base), "/css/main.css");
/// assert_eq!(site_path(Path::new("_site/Docs/INDEX.HTM"), base), "/Docs/");
/// ```
#[must_use]
pub fn site_path(path: &Path, base: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    let joined = relative
        .components()
        .filter_map(|c| match c {
            std::path::Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");

    let with_root = format!("/{joined}");
    INDEX_DOCUMENT.replace(&with_root, "/").into_owned()
}
