//! The set of site paths known before scanning starts.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::record::site_path;
use crate::site::collect_files;

/// Ordered, de-duplicated list of site-relative paths.
///
/// Scanners only read it; once built it never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteManifest {
    paths: Vec<String>,
    seen: HashSet<String>,
}

impl SiteManifest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the site paths of every regular file under `base`, sorted.
    pub fn from_dir(base: &Path) -> Result<Self> {
        Ok(Self::from_files(&collect_files(base)?, base))
    }

    pub(crate) fn from_files(files: &[PathBuf], base: &Path) -> Self {
        let mut paths: Vec<String> = files.iter().map(|p| site_path(p, base)).collect();
        paths.sort_unstable();
        paths.dedup();
        let seen = paths.iter().cloned().collect();
        Self { paths, seen }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.seen.contains(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SiteManifest {
    /// Keeps the first occurrence of each path, in input order.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut manifest = Self::default();
        for path in iter {
            let path = path.into();
            if manifest.seen.insert(path.clone()) {
                manifest.paths.push(path);
            }
        }
        manifest
    }
}
