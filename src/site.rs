//! Whole-site scanning.
//!
//! Walks a rendered site directory, builds the manifest from the files it
//! finds, and scans every file on the rayon pool. Files are independent: a
//! file that cannot be read is logged and recorded with no references.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::manifest::SiteManifest;
use crate::options::ScanOptions;
use crate::record::{site_path, FileRecord};
use crate::result::{ReferenceSet, ScanResult};
use crate::scan::scan_file;

/// Scans a batch of files in parallel against a shared manifest.
#[must_use]
pub fn scan_records(
    records: &[FileRecord],
    options: &ScanOptions,
    manifest: &SiteManifest,
) -> ScanResult {
    records
        .par_iter()
        .map(|record| scan_file(record, options, manifest))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

/// Scans every file under `base`.
///
/// The manifest is the set of site paths of all files found, so it is
/// complete before the first file is scanned.
pub fn scan_site(base: &Path, options: &ScanOptions) -> Result<ScanResult> {
    let files = collect_files(base)?;
    let manifest = SiteManifest::from_files(&files, base);

    tracing::info!(
        base = %base.display(),
        files = files.len(),
        scan_js = options.scan_js,
        "scanning site"
    );

    let result: ScanResult = files
        .par_iter()
        .map(|path| match std::fs::read(path) {
            Ok(bytes) => scan_file(&FileRecord::from_bytes(path, base, &bytes), options, &manifest),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "unreadable file, recording no references");
                (site_path(path, base), ReferenceSet::new())
            }
        })
        .collect::<Vec<_>>()
        .into_iter()
        .collect();

    let references: usize = result.iter().map(|(_, refs)| refs.len()).sum();
    tracing::info!(files = result.len(), references, "site scan finished");

    Ok(result)
}

/// Regular files under `base`, sorted by path.
///
/// Failing to read `base` itself is an error; anything unreadable below it
/// is logged and skipped.
pub(crate) fn collect_files(base: &Path) -> Result<Vec<PathBuf>> {
    if !base.is_dir() {
        return Err(Error::InvalidBase(base.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(base).min_depth(1) {
        match entry {
            Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(err) => tracing::warn!(error = %err, "skipping unreadable directory entry"),
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_records_keys_by_site_path() {
        let base = Path::new("site");
        let records = vec![
            FileRecord::new(Path::new("site/index.html"), base, r#"<a href="/about/">a</a>"#),
            FileRecord::new(Path::new("site/main.css"), base, "a{b:url(/x.png)}"),
            FileRecord::new(Path::new("site/data.json"), base, r#"{"url":"/y"}"#),
        ];
        let result = scan_records(&records, &ScanOptions::default(), &SiteManifest::new());

        assert_eq!(result.len(), 3);
        assert_eq!(result.get("/").map(ReferenceSet::internal_links), Some(&["/about/".to_string()][..]));
        assert_eq!(result.get("/main.css").map(ReferenceSet::internal_assets), Some(&["/x.png".to_string()][..]));
        assert!(result.get("/data.json").is_some_and(ReferenceSet::is_empty));
    }

    #[test]
    fn test_scan_site_rejects_missing_base() {
        let err = scan_site(Path::new("/nonexistent/site"), &ScanOptions::default());
        assert!(matches!(err, Err(Error::InvalidBase(_))));
    }
}
