// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture file discovery.
//!
//! Recursively walks the fixture root collecting files whose extension is
//! in the configured set. Unreadable directories are logged and skipped;
//! that subtree's files are simply absent from the result.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::error::{Error, Result};

/// Discovered fixture files, relative to the fixture root.
///
/// Discovery owns the canonical set; the runner only reads it via
/// membership checks. BTreeSet keeps iteration lexicographic.
#[derive(Debug)]
pub struct FixtureSet {
    root: PathBuf,
    files: BTreeSet<PathBuf>,
    pub stats: DiscoveryStats,
}

/// Statistics from a discovery walk.
#[derive(Debug, Default)]
pub struct DiscoveryStats {
    /// Files matching the extension set.
    pub files_found: usize,
    /// Walk errors (unreadable directories, broken symlinks). Soft failures.
    pub errors: usize,
}

impl FixtureSet {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: BTreeSet::new(),
            stats: DiscoveryStats::default(),
        }
    }

    pub(crate) fn insert(&mut self, rel: PathBuf) {
        self.files.insert(rel);
    }

    /// Whether a root-relative path was discovered.
    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    /// Resolve a root-relative path to the on-disk location.
    pub fn resolve(&self, rel: &Path) -> PathBuf {
        self.root.join(rel)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate discovered paths in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.files.iter()
    }
}

/// Build the extension matcher (e.g., `**/*.js` for "js").
fn extension_globs(extensions: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for ext in extensions {
        let glob = Glob::new(&format!("**/*.{}", ext)).map_err(|e| Error::Config {
            message: format!("invalid fixture extension `{}`: {}", ext, e),
            path: None,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| Error::Config {
        message: e.to_string(),
        path: None,
    })
}

/// Walk `root` and collect matching files.
///
/// A missing root is fatal (the config points at nothing); errors inside
/// the tree are soft failures counted in the stats.
pub fn discover(root: &Path, extensions: &[String]) -> Result<FixtureSet> {
    if !root.is_dir() {
        return Err(Error::Config {
            message: format!("fixture root not found: {}", root.display()),
            path: Some(root.to_path_buf()),
        });
    }

    let globs = extension_globs(extensions)?;
    let mut set = FixtureSet::new(root);

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(true)
        .build();

    for entry in walker {
        match entry {
            Ok(entry) => {
                if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                    continue;
                }
                let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
                if globs.is_match(rel) {
                    set.stats.files_found += 1;
                    set.insert(rel.to_path_buf());
                }
            }
            Err(err) => {
                tracing::warn!("discovery: skipping unreadable entry: {}", err);
                set.stats.errors += 1;
            }
        }
    }

    Ok(set)
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
