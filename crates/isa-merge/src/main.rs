use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use isa_merge::config::{DEFAULT_INSTRUCTIONS, DEFAULT_OUTPUT, DEFAULT_PSEUDO};
use isa_merge::MergeConfig;

#[derive(Parser)]
#[command(author, version, about = "Merge native and pseudo instruction tables.")]
struct Args {
    /// Native instruction table.
    #[arg(long, default_value = DEFAULT_INSTRUCTIONS)]
    instructions: PathBuf,

    /// Pseudo-instruction table.
    #[arg(long, default_value = DEFAULT_PSEUDO)]
    pseudo: PathBuf,

    /// Where to write the merged catalog.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Indent the output JSON.
    #[arg(long)]
    pretty: bool,

    /// Log every merged mnemonic.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);
    if let Err(error) = run(args) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let config = MergeConfig::new(args.instructions, args.pseudo, args.output)
        .with_pretty(args.pretty);
    let stats = isa_merge::run(&config)
        .with_context(|| format!("merge into {} failed", config.output.display()))?;
    tracing::debug!(?stats, "done");
    Ok(())
}
