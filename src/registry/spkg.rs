use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::package::{MarkerPackage, PackageError, PackageLoader};

/// Manifest version this crate expects
pub const MANIFEST_VERSION: &str = "1.0";

/// Name of the manifest file inside a `.spkg` directory
pub const MANIFEST_NAME: &str = "CONTENTS.json";

/// Serializable manifest format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpkgManifest {
    pub version: String,

    /// Search HMM paths relative to the package directory
    pub search_hmms: Vec<PathBuf>,
}

/// A marker package backed by an on-disk `.spkg` directory.
///
/// The directory carries a [`MANIFEST_NAME`] manifest listing the package's
/// search HMMs; everything else in the directory is opaque to this crate.
#[derive(Debug)]
pub struct SpkgPackage {
    path: PathBuf,
    hmm_basename: String,
    search_hmm_paths: Vec<PathBuf>,
}

impl SpkgPackage {
    /// Load a package from a `.spkg` directory.
    ///
    /// HMM paths from the manifest are resolved against the package
    /// directory but not opened; consumers read them lazily.
    ///
    /// # Errors
    ///
    /// Returns `PackageError::Io` if the manifest cannot be read,
    /// `PackageError::Parse` if it is not valid JSON, or
    /// `PackageError::InvalidPackage` if it lists no search HMMs.
    pub fn acquire(path: &Path) -> Result<Self, PackageError> {
        let content = std::fs::read_to_string(path.join(MANIFEST_NAME))?;
        let manifest: SpkgManifest = serde_json::from_str(&content)?;

        // Version check (warn but don't fail)
        if manifest.version != MANIFEST_VERSION {
            warn!(
                "Package {} declares manifest version {} (expected {})",
                path.display(),
                manifest.version,
                MANIFEST_VERSION
            );
        }

        if manifest.search_hmms.is_empty() {
            return Err(PackageError::InvalidPackage(format!(
                "{}: manifest lists no search HMMs",
                path.display()
            )));
        }

        let search_hmm_paths: Vec<PathBuf> = manifest
            .search_hmms
            .iter()
            .map(|rel| path.join(rel))
            .collect();

        // The first search HMM names the package
        let hmm_basename = search_hmm_paths[0]
            .file_name()
            .ok_or_else(|| {
                PackageError::InvalidPackage(format!(
                    "{}: search HMM entry has no file name",
                    path.display()
                ))
            })?
            .to_string_lossy()
            .into_owned();

        debug!(
            "Loaded package {} ({} search HMMs)",
            hmm_basename,
            search_hmm_paths.len()
        );

        Ok(Self {
            path: path.to_path_buf(),
            hmm_basename,
            search_hmm_paths,
        })
    }

    /// Directory this package was loaded from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MarkerPackage for SpkgPackage {
    fn hmm_basename(&self) -> &str {
        &self.hmm_basename
    }

    fn search_hmm_paths(&self) -> Vec<PathBuf> {
        self.search_hmm_paths.clone()
    }
}

/// The default [`PackageLoader`], acquiring manifest-backed `.spkg`
/// directories
#[derive(Debug, Clone, Copy, Default)]
pub struct SpkgLoader;

impl PackageLoader for SpkgLoader {
    fn acquire(&self, path: &Path) -> Result<Box<dyn MarkerPackage>, PackageError> {
        Ok(Box::new(SpkgPackage::acquire(path)?))
    }
}
