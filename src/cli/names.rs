use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Args;

use crate::annotation::build_name_map;
use crate::cli::OutputFormat;
use crate::parsing;

#[derive(Args)]
pub struct NamesArgs {
    /// Pangenome gene presence/absence CSV (Panaroo or Roary format)
    #[arg(required = true)]
    pub table: PathBuf,

    /// Only show clusters whose display name differs from their identifier
    #[arg(long)]
    pub renamed_only: bool,
}

/// Execute names subcommand
///
/// # Errors
///
/// Returns an error if the table is missing a required column, has a malformed
/// row, or cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: NamesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let rows = parsing::panaroo::read_presence_absence_file(&args.table)?;
    let map = build_name_map(&rows);

    if verbose {
        eprintln!("Read {} rows, {} distinct clusters", rows.len(), map.len());
    }

    // Sorted for stable output
    let sorted: BTreeMap<&str, &str> = map
        .iter()
        .filter(|(id, name)| !args.renamed_only || id != name)
        .map(|(id, name)| (id.as_str(), name.as_str()))
        .collect();

    match format {
        OutputFormat::Text => {
            for (id, name) in &sorted {
                println!("{id:<30} {name}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sorted)?),
        OutputFormat::Tsv => {
            println!("cluster\tname");
            for (id, name) in &sorted {
                println!("{id}\t{name}");
            }
        }
    }

    Ok(())
}
