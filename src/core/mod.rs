//! Core data types for marker package management.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`MarkerPackage`]: Capability interface a package exposes to the registry
//! - [`PackageLoader`]: Acquires a package object from a package-source path
//! - [`PackageError`]: Failure modes of package acquisition
//! - [`HmmBasename`]: Unique key for a package within one registry
//!
//! ## Identifier Spaces
//!
//! Two identifier flavors flow through the surrounding pipeline:
//!
//! | Flavor      | Example           | Produced by |
//! |-------------|-------------------|-------------|
//! | original    | `contig49`        | assembler / input FASTA |
//! | ORF-derived | `contig49_2_4_11` | gene caller |
//!
//! Taxonomy files are keyed by original identifiers; search results carry
//! ORF-derived ones. [`strip_orf_suffix`] bridges the two spaces.
//!
//! [`MarkerPackage`]: package::MarkerPackage
//! [`PackageLoader`]: package::PackageLoader
//! [`PackageError`]: package::PackageError
//! [`HmmBasename`]: types::HmmBasename
//! [`strip_orf_suffix`]: crate::utils::orf::strip_orf_suffix

pub mod package;
pub mod types;
