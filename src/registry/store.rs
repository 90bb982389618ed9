use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::package::{MarkerPackage, PackageError, PackageLoader};
use crate::core::types::HmmBasename;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to list package directory {}: {}", .path.display(), .source)]
    ListDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No marker packages (*.spkg) found in {}", .0.display())]
    NoPackagesFound(PathBuf),

    #[error("Failed to load package {}: {}", .path.display(), .source)]
    PackageLoad {
        path: PathBuf,
        source: PackageError,
    },
}

/// Filename suffix by which package sources are recognized during discovery
pub const PACKAGE_SUFFIX: &str = ".spkg";

/// The in-memory registry of marker-gene packages.
///
/// Built once at startup from a database directory, read-only afterward.
/// Packages are keyed by their HMM base name; a collision keeps the
/// last-loaded package in the index while every acquired package remains in
/// the owned sequence.
#[derive(Debug)]
pub struct PackageRegistry {
    /// All acquired packages, in discovery order
    packages: Vec<Box<dyn MarkerPackage>>,

    /// Index: HMM base name -> index in packages vec.
    /// Insertion-ordered; on collision the value is replaced in place.
    by_basename: IndexMap<HmmBasename, usize>,
}

impl PackageRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            packages: Vec::new(),
            by_basename: IndexMap::new(),
        }
    }

    /// Build a registry from every package source in `db_directory`.
    ///
    /// The directory is scanned non-recursively for entries whose name ends
    /// with [`PACKAGE_SUFFIX`]; each match is acquired through `loader` in
    /// directory-listing order. All packages must load: a single failure
    /// aborts the whole build.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ListDir`] if the directory cannot be read,
    /// [`RegistryError::NoPackagesFound`] if no entry matches, or
    /// [`RegistryError::PackageLoad`] if any package fails to load.
    pub fn build(db_directory: &Path, loader: &dyn PackageLoader) -> Result<Self, RegistryError> {
        let list_err = |source| RegistryError::ListDir {
            path: db_directory.to_path_buf(),
            source,
        };

        let mut pkg_paths = Vec::new();
        for entry in std::fs::read_dir(db_directory).map_err(list_err)? {
            let entry = entry.map_err(list_err)?;
            if entry.file_name().to_string_lossy().ends_with(PACKAGE_SUFFIX) {
                pkg_paths.push(entry.path());
            }
        }

        debug!(
            "Found {} marker packages in {}",
            pkg_paths.len(),
            db_directory.display()
        );

        if pkg_paths.is_empty() {
            return Err(RegistryError::NoPackagesFound(db_directory.to_path_buf()));
        }

        let mut registry = Self::new();
        for path in pkg_paths {
            let package = loader
                .acquire(&path)
                .map_err(|source| RegistryError::PackageLoad {
                    path: path.clone(),
                    source,
                })?;
            registry.add_package(package);
        }

        Ok(registry)
    }

    /// Add a package to the registry.
    ///
    /// On a base-name collision the new package replaces the earlier one in
    /// the index (the earlier one stays in the owned sequence) and a warning
    /// is logged naming both packages.
    pub fn add_package(&mut self, package: Box<dyn MarkerPackage>) {
        let index = self.packages.len();
        let basename = HmmBasename::new(package.hmm_basename());

        if let Some(&previous) = self.by_basename.get(&basename) {
            warn!(
                "Duplicate HMM base name '{}': {:?} replaces {:?} in the index",
                basename, package, self.packages[previous]
            );
        }

        self.by_basename.insert(basename, index);
        self.packages.push(package);
    }

    /// Get a package by its HMM base name
    pub fn get(&self, basename: &HmmBasename) -> Option<&dyn MarkerPackage> {
        self.by_basename
            .get(basename)
            .map(|&idx| self.packages[idx].as_ref())
    }

    /// Iterate over the indexed packages, each base name exactly once.
    ///
    /// Order is the first-insertion order of each base name; after a
    /// collision the yielded package is the last-loaded one, so the order can
    /// differ from raw discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn MarkerPackage> {
        self.by_basename
            .values()
            .map(|&idx| self.packages[idx].as_ref())
    }

    /// Every search HMM path across all indexed packages, concatenated in
    /// iteration order. No deduplication is performed.
    #[must_use]
    pub fn all_search_paths(&self) -> Vec<PathBuf> {
        self.iter().flat_map(MarkerPackage::search_hmm_paths).collect()
    }

    /// All acquired packages in discovery order, including any that lost
    /// their index slot to a collision
    #[must_use]
    pub fn packages(&self) -> &[Box<dyn MarkerPackage>] {
        &self.packages
    }

    /// Number of distinct HMM base names in the registry
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_basename.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_basename.is_empty()
    }
}

impl Default for PackageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
