use clap::Parser;
use tracing_subscriber::EnvFilter;

use blast_diff::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("blast_diff=debug,info")
    } else {
        EnvFilter::new("blast_diff=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Compare(args) => {
            cli::compare::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Summaries(args) => {
            cli::summaries::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
