mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::breakdown::{handle_breakdown, BreakdownArgs};
use commands::catalog::{handle_catalog, ListArgs};
use commands::verify::{handle_verify, VerifyArgs};
use commands::CatalogArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Capital ship construction verifier")]
struct Cli {
    #[command(flatten)]
    catalog: CatalogArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a design against the construction rules.
    Verify(VerifyArgs),
    /// Show the derived weights and limits of a design.
    Breakdown(BreakdownArgs),
    /// List the reference catalog.
    Catalog(ListArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Command::Verify(args) => handle_verify(&cli.catalog, args),
        Command::Breakdown(args) => handle_breakdown(&cli.catalog, args),
        Command::Catalog(args) => handle_catalog(&cli.catalog, args),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
