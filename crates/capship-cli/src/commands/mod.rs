// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs parses arguments and dispatches.

pub mod breakdown;
pub mod catalog;
pub mod verify;

use std::path::PathBuf;

use clap::Args;

/// Reference catalog locations shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct CatalogArgs {
    /// Equipment catalog CSV (defaults to $CAPSHIP_EQUIPMENT_DATA).
    #[arg(long, global = true)]
    pub equipment_data: Option<PathBuf>,
    /// Armor catalog CSV (defaults to $CAPSHIP_ARMOR_DATA).
    #[arg(long, global = true)]
    pub armor_data: Option<PathBuf>,
}
