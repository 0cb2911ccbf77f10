//! Result types for reference scanning.
//!
//! A [`ReferenceSet`] holds the four classification buckets for one file and a
//! [`ScanResult`] maps site paths to those sets for a whole site.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One of the four classification buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    InternalAssets,
    ExternalAssets,
    InternalLinks,
    ExternalLinks,
}

impl Bucket {
    /// Every bucket, in report order.
    pub const ALL: [Self; 4] = [
        Self::InternalAssets,
        Self::ExternalAssets,
        Self::InternalLinks,
        Self::ExternalLinks,
    ];

    /// Routes a reference by kind and locality.
    #[must_use]
    pub const fn route(is_asset: bool, is_external: bool) -> Self {
        match (is_asset, is_external) {
            (true, true) => Self::ExternalAssets,
            (true, false) => Self::InternalAssets,
            (false, true) => Self::ExternalLinks,
            (false, false) => Self::InternalLinks,
        }
    }

    /// Report heading for this bucket.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InternalAssets => "Internal Assets",
            Self::ExternalAssets => "External Assets",
            Self::InternalLinks => "Internal Links",
            Self::ExternalLinks => "External Links",
        }
    }
}

/// The references found in a single file, split into four buckets.
///
/// Each bucket keeps first-seen order and never holds the same value twice.
/// Deduplication is per bucket: one value may appear in two buckets when it
/// was seen both as an asset and as a link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSet {
    #[serde(rename = "Internal Assets")]
    internal_assets: Vec<String>,

    #[serde(rename = "External Assets")]
    external_assets: Vec<String>,

    #[serde(rename = "Internal Links")]
    internal_links: Vec<String>,

    #[serde(rename = "External Links")]
    external_links: Vec<String>,
}

impl ReferenceSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Values held in `bucket`, in first-seen order.
    #[must_use]
    pub fn bucket(&self, bucket: Bucket) -> &[String] {
        match bucket {
            Bucket::InternalAssets => &self.internal_assets,
            Bucket::ExternalAssets => &self.external_assets,
            Bucket::InternalLinks => &self.internal_links,
            Bucket::ExternalLinks => &self.external_links,
        }
    }

    #[must_use]
    pub fn internal_assets(&self) -> &[String] {
        &self.internal_assets
    }

    #[must_use]
    pub fn external_assets(&self) -> &[String] {
        &self.external_assets
    }

    #[must_use]
    pub fn internal_links(&self) -> &[String] {
        &self.internal_links
    }

    #[must_use]
    pub fn external_links(&self) -> &[String] {
        &self.external_links
    }

    /// Appends `value` to `bucket` unless it is already there.
    ///
    /// Returns `true` when the value was added.
    pub(crate) fn insert(&mut self, bucket: Bucket, value: &str) -> bool {
        let values = match bucket {
            Bucket::InternalAssets => &mut self.internal_assets,
            Bucket::ExternalAssets => &mut self.external_assets,
            Bucket::InternalLinks => &mut self.internal_links,
            Bucket::ExternalLinks => &mut self.external_links,
        };
        if values.iter().any(|v| v == value) {
            return false;
        }
        values.push(value.to_string());
        true
    }

    /// Total number of references across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        Bucket::ALL.iter().map(|b| self.bucket(*b).len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Whole-site mapping from site path to the references found in that file.
///
/// Iterates in site-path order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanResult {
    files: BTreeMap<String, ReferenceSet>,
}

impl ScanResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the references for one file, replacing any earlier entry for
    /// the same site path.
    pub fn insert(&mut self, site_path: String, references: ReferenceSet) {
        self.files.insert(site_path, references);
    }

    #[must_use]
    pub fn get(&self, site_path: &str) -> Option<&ReferenceSet> {
        self.files.get(site_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReferenceSet)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FromIterator<(String, ReferenceSet)> for ScanResult {
    fn from_iter<I: IntoIterator<Item = (String, ReferenceSet)>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}
