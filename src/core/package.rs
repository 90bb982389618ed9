use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure modes a package-acquisition collaborator may surface.
///
/// The registry wraps these in [`RegistryError::PackageLoad`] together with
/// the offending package path.
///
/// [`RegistryError::PackageLoad`]: crate::registry::store::RegistryError::PackageLoad
#[derive(Error, Debug)]
pub enum PackageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse package manifest: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid package: {0}")]
    InvalidPackage(String),
}

/// Capability interface for a marker-gene package.
///
/// The registry never depends on a package source's internal layout. It sees
/// exactly two things: the base name under which the package is keyed, and
/// the search-model files the package contributes. Consumers open the
/// returned paths themselves; a package holds no file handles.
pub trait MarkerPackage: std::fmt::Debug + Send + Sync {
    /// Base name of the package's primary search HMM
    fn hmm_basename(&self) -> &str;

    /// Paths to the HMM files this package contributes to the search step
    fn search_hmm_paths(&self) -> Vec<PathBuf>;
}

/// Acquires a [`MarkerPackage`] from a package-source path.
pub trait PackageLoader {
    /// Load the package at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PackageError`] when the source is unreadable or malformed.
    fn acquire(&self, path: &Path) -> Result<Box<dyn MarkerPackage>, PackageError>;
}
