use clap::Args;
use tracing::warn;

use crate::cli::{OutputFormat, SearchArgs};
use crate::core::{Hit, MotifGroups};
use crate::parsing;
use crate::search::{summarize, HitCount, LocateReport, LocatorConfig, MotifLocator};

#[derive(Args)]
pub struct LocateArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// Report one line per principal component, unitig and reference with its
    /// raw hit count instead of one line per hit
    #[arg(long)]
    pub summary: bool,
}

/// Load the unitig groups named on the command line
///
/// # Errors
///
/// Returns an error if the motif file cannot be read or parsed.
pub fn load_motifs(args: &SearchArgs, verbose: bool) -> anyhow::Result<MotifGroups> {
    let groups = parsing::motifs::parse_motif_file(&args.motifs)?;

    if verbose {
        eprintln!(
            "Loaded {} unitigs across {} principal components",
            groups.motif_count(),
            groups.len()
        );
    }

    Ok(groups)
}

/// Execute locate subcommand
///
/// # Errors
///
/// Returns an error if the motif file cannot be parsed or output fails.
/// Unreadable or empty reference files are reported as warnings and skipped.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: LocateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let groups = load_motifs(&args.search, verbose)?;

    let config = LocatorConfig {
        parallel: args.search.parallel,
    };
    let locator = MotifLocator::with_config(&groups, config);
    let report = locator.locate_sources(&args.search.references, args.search.input_format);

    for issue in &report.issues {
        warn!("{issue}");
    }

    if verbose && report.is_clean() {
        eprintln!(
            "Searched all {} reference files, {} hits",
            args.search.references.len(),
            report.hits.len()
        );
    } else if verbose {
        eprintln!(
            "Searched {} of {} reference files, {} hits",
            args.search.references.len() - report.issues.len(),
            args.search.references.len(),
            report.hits.len()
        );
    }

    if report.hits.is_empty() && !matches!(format, OutputFormat::Json) {
        eprintln!("No unitig hits found.");
        return Ok(());
    }

    if args.summary {
        let counts = summarize(&report.hits);
        match format {
            OutputFormat::Text => print_text_counts(&counts),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&counts)?),
            OutputFormat::Tsv => print_tsv_counts(&counts),
        }
    } else {
        match format {
            OutputFormat::Text => print_text_hits(&report.hits),
            OutputFormat::Json => print_json_report(&report)?,
            OutputFormat::Tsv => print_tsv_hits(&report.hits),
        }
    }

    Ok(())
}

fn print_text_hits(hits: &[Hit]) {
    for hit in hits {
        println!("PC{:<4} {:<40} {}", hit.pc, hit.unitig, hit.reference);
    }
}

fn print_json_report(report: &LocateReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_tsv_hits(hits: &[Hit]) {
    println!("pc\tunitig\treference");
    for hit in hits {
        println!("{}\t{}\t{}", hit.pc, hit.unitig, hit.reference);
    }
}

fn print_text_counts(counts: &[HitCount]) {
    for c in counts {
        println!(
            "PC{:<4} {:<40} {:<24} {} hit{}",
            c.pc,
            c.unitig,
            c.reference,
            c.count,
            if c.count == 1 { "" } else { "s" }
        );
    }
}

fn print_tsv_counts(counts: &[HitCount]) {
    println!("pc\tunitig\treference\thits");
    for c in counts {
        println!("{}\t{}\t{}\t{}", c.pc, c.unitig, c.reference, c.count);
    }
}
