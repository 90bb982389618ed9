use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::registry::spkg::SpkgLoader;
use crate::registry::store::PackageRegistry;

#[derive(Args)]
pub struct PackagesArgs {
    #[command(subcommand)]
    pub command: PackagesCommands,
}

#[derive(Subcommand)]
pub enum PackagesCommands {
    /// List all packages in a database directory
    List {
        /// Directory containing .spkg package sources
        #[arg(required = true)]
        db_directory: PathBuf,
    },

    /// Print every search HMM path across all packages
    Paths {
        /// Directory containing .spkg package sources
        #[arg(required = true)]
        db_directory: PathBuf,
    },
}

pub fn run(args: PackagesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        PackagesCommands::List { db_directory } => run_list(&db_directory, format, verbose),
        PackagesCommands::Paths { db_directory } => run_paths(&db_directory, format, verbose),
    }
}

fn run_list(db_directory: &Path, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let registry = PackageRegistry::build(db_directory, &SpkgLoader)?;

    if verbose {
        eprintln!(
            "Loaded {} marker packages from {}",
            registry.len(),
            db_directory.display()
        );
    }

    match format {
        OutputFormat::Text => {
            println!("Marker packages ({})\n", registry.len());
            for package in registry.iter() {
                println!(
                    "{:<45} {:>3} search HMM(s)",
                    package.hmm_basename(),
                    package.search_hmm_paths().len()
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = registry
                .iter()
                .map(|package| {
                    serde_json::json!({
                        "hmm_basename": package.hmm_basename(),
                        "search_hmm_paths": package
                            .search_hmm_paths()
                            .iter()
                            .map(|p| p.display().to_string())
                            .collect::<Vec<_>>(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("hmm_basename\tsearch_hmm_count");
            for package in registry.iter() {
                println!(
                    "{}\t{}",
                    package.hmm_basename(),
                    package.search_hmm_paths().len()
                );
            }
        }
    }

    Ok(())
}

fn run_paths(db_directory: &Path, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let registry = PackageRegistry::build(db_directory, &SpkgLoader)?;
    let paths = registry.all_search_paths();

    if verbose {
        eprintln!(
            "{} search HMMs across {} packages",
            paths.len(),
            registry.len()
        );
    }

    match format {
        OutputFormat::Text | OutputFormat::Tsv => {
            for path in &paths {
                println!("{}", path.display());
            }
        }
        OutputFormat::Json => {
            let output: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
