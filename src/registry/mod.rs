//! Marker package registry: discovery, indexing, and enumeration.
//!
//! A [`PackageRegistry`] is built once at process start from a database
//! directory and used read-only thereafter. Discovery is non-recursive: any
//! entry whose name ends in `.spkg` is treated as a package source and
//! acquired through a [`PackageLoader`]. The registry indexes packages by
//! HMM base name and aggregates the search-model paths the surrounding
//! pipeline hands to its HMM search step.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use marker_registry::registry::spkg::SpkgLoader;
//! use marker_registry::registry::store::PackageRegistry;
//!
//! let registry = PackageRegistry::build(Path::new("db"), &SpkgLoader).unwrap();
//!
//! for package in registry.iter() {
//!     println!("{}", package.hmm_basename());
//! }
//!
//! // Paths for the downstream HMM search step
//! let hmms = registry.all_search_paths();
//! ```
//!
//! ## Failure Policy
//!
//! Registry construction is fail-fast: an unreadable directory, an empty
//! directory, or any single package that fails to load aborts the whole
//! build. A registry either holds every package in the database or does not
//! exist.
//!
//! [`PackageRegistry`]: store::PackageRegistry
//! [`PackageLoader`]: crate::core::package::PackageLoader

pub mod spkg;
pub mod store;
