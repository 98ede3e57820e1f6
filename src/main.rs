use clap::Parser;
use tracing_subscriber::EnvFilter;

use unitig_locator::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("unitig_locator=debug,info")
    } else {
        EnvFilter::new("unitig_locator=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Locate(args) => {
            cli::locate::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Annotate(args) => {
            cli::annotate::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Names(args) => {
            cli::names::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
