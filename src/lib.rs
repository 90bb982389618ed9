//! # marker-registry
//!
//! A library for managing marker-gene HMM search packages and resolving
//! gene-caller sequence identifiers back to their taxonomic annotation.
//!
//! Marker-gene profiling pipelines search reads against a database of
//! hidden-Markov-model packages, one per marker gene. Two bookkeeping
//! problems sit underneath every such pipeline: knowing which packages exist
//! and where their search models live on disk, and mapping the open reading
//! frame (ORF) identifiers a gene caller emits back to the taxonomy assigned
//! to the original sequences.
//!
//! `marker-registry` solves both with a build-once/read-many registry and
//! taxonomy index.
//!
//! ## Features
//!
//! - **Package discovery**: Scans a database directory for `.spkg` sources
//! - **Base-name indexing**: O(1) package lookup with documented
//!   last-loaded-wins collision semantics
//! - **Search path aggregation**: One flat list of every search HMM to run
//! - **ORF identifier normalization**: Strips the `_<int>_<int>_<int>`
//!   suffix gene callers append
//! - **Taxonomy lookup**: Tab-separated taxonomy files indexed by
//!   normalized identifier
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use marker_registry::{PackageRegistry, SpkgLoader, TaxonomyIndex};
//!
//! // Build the registry once at startup
//! let registry = PackageRegistry::build(Path::new("db"), &SpkgLoader).unwrap();
//! for hmm in registry.all_search_paths() {
//!     println!("{}", hmm.display());
//! }
//!
//! // Annotate search results with taxonomy
//! let taxonomy = TaxonomyIndex::from_file(Path::new("taxonomy.tsv")).unwrap();
//! let lineage = taxonomy.lookup_orf("contig49_2_4_11").unwrap();
//! println!("{lineage}");
//! ```
//!
//! ## Modules
//!
//! - [`registry`]: Package discovery, indexing, and enumeration
//! - [`taxonomy`]: Taxonomy file parsing and identifier lookup
//! - [`core`]: Package capability traits and key types
//! - [`utils`]: ORF identifier normalization
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod registry;
pub mod taxonomy;
pub mod utils;

// Re-export commonly used types for convenience
pub use self::core::package::{MarkerPackage, PackageError, PackageLoader};
pub use self::core::types::HmmBasename;
pub use self::registry::spkg::{SpkgLoader, SpkgPackage};
pub use self::registry::store::{PackageRegistry, RegistryError};
pub use self::taxonomy::index::{TaxonomyError, TaxonomyIndex};
pub use self::utils::orf::strip_orf_suffix;
