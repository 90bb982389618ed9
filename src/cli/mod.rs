//! Command-line interface for marker-registry.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **packages list**: Enumerate the packages in a database directory
//! - **packages paths**: Print every search HMM path across all packages
//! - **resolve**: Resolve ORF identifiers to their taxonomy strings
//!
//! ## Usage
//!
//! ```text
//! # List the packages in a database directory
//! marker-registry packages list db/
//!
//! # HMM paths for the downstream search step
//! marker-registry packages paths db/
//!
//! # Resolve ORF identifiers against a taxonomy file
//! marker-registry resolve taxonomy.tsv contig49_2_4_11 contig50_1_1_3
//!
//! # Or pipe identifiers in, one per line
//! cut -f1 hits.tsv | marker-registry resolve taxonomy.tsv
//!
//! # JSON output for scripting
//! marker-registry resolve taxonomy.tsv contig49_2_4_11 --format json
//! ```

use clap::{Parser, Subcommand};

pub mod packages;
pub mod resolve;

#[derive(Parser)]
#[command(name = "marker-registry")]
#[command(version)]
#[command(about = "Enumerate marker-gene HMM packages and resolve ORF taxonomy")]
#[command(
    long_about = "marker-registry manages a database of marker-gene HMM search packages and maps gene-caller ORF identifiers back to the taxonomy of their originating sequences.\n\nIt provides:\n- Package enumeration from a directory of .spkg sources\n- Aggregated search HMM paths for the downstream search step\n- Taxonomy lookup keyed by normalized sequence identifiers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect a marker package database
    Packages(packages::PackagesArgs),

    /// Resolve ORF identifiers to taxonomy strings
    Resolve(resolve::ResolveArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
