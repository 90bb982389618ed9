use std::io::BufRead;
use std::path::PathBuf;

use clap::Args;
use tracing::warn;

use crate::cli::OutputFormat;
use crate::taxonomy::index::{TaxonomyError, TaxonomyIndex};
use crate::utils::orf::strip_orf_suffix;

#[derive(Args)]
pub struct ResolveArgs {
    /// Tab-separated taxonomy file: identifier, then taxonomy string
    #[arg(required = true)]
    pub taxonomy: PathBuf,

    /// ORF identifiers to resolve; read from stdin (one per line) when omitted
    pub ids: Vec<String>,

    /// Skip identifiers without a taxonomy entry instead of failing
    #[arg(long)]
    pub skip_missing: bool,
}

struct ResolvedRow {
    id: String,
    normalized: String,
    taxonomy: String,
}

pub fn run(args: ResolveArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let index = TaxonomyIndex::from_file(&args.taxonomy)?;

    if verbose {
        eprintln!(
            "Loaded {} taxonomy entries from {}",
            index.len(),
            args.taxonomy.display()
        );
    }

    let ids = if args.ids.is_empty() {
        read_ids_from_stdin()?
    } else {
        args.ids
    };

    let mut rows = Vec::new();
    for id in ids {
        let normalized = strip_orf_suffix(&id);
        match index.lookup(normalized) {
            Ok(taxonomy) => rows.push(ResolvedRow {
                normalized: normalized.to_string(),
                taxonomy: taxonomy.to_string(),
                id,
            }),
            Err(TaxonomyError::KeyNotFound(_)) if args.skip_missing => {
                warn!("No taxonomy entry for '{normalized}', skipping");
            }
            Err(e) => return Err(e.into()),
        }
    }

    match format {
        OutputFormat::Text => {
            for row in &rows {
                println!("{}\t{}", row.id, row.taxonomy);
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = rows
                .iter()
                .map(|row| {
                    serde_json::json!({
                        "id": row.id,
                        "normalized": row.normalized,
                        "taxonomy": row.taxonomy,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("id\tnormalized\ttaxonomy");
            for row in &rows {
                println!("{}\t{}\t{}", row.id, row.normalized, row.taxonomy);
            }
        }
    }

    Ok(())
}

fn read_ids_from_stdin() -> anyhow::Result<Vec<String>> {
    let mut ids = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let id = line.trim();
        if !id.is_empty() {
            ids.push(id.to_string());
        }
    }
    Ok(ids)
}
