use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod registry;
mod taxonomy;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("marker_registry=debug,info")
    } else {
        EnvFilter::new("marker_registry=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Packages(args) => {
            cli::packages::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Resolve(args) => {
            cli::resolve::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
