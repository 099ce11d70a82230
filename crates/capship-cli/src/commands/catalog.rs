//! Catalog command handler for listing reference records.

use anyhow::Result;
use clap::{Args, ValueEnum};

use capship_lib::catalog::legal_armors_for;
use capship_lib::{IntroductionDateOracle, ReferenceCatalog, TechBase, TechContext};

use capship_cli::output::{render_armor, render_equipment, to_json, OutputFormat};
use capship_cli::paths::load_catalog;

use super::CatalogArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Listing {
    Equipment,
    Armor,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(value_enum, default_value_t = Listing::Equipment)]
    pub listing: Listing,
    /// Only list armor legal in this year (armor listing only).
    #[arg(long)]
    pub year: Option<u32>,
    /// Only list armor for this tech base (armor listing only).
    #[arg(long)]
    pub tech_base: Option<TechBase>,
    /// List the armor available to primitive hulls.
    #[arg(long)]
    pub primitive: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn handle_catalog(catalog_args: &CatalogArgs, args: &ListArgs) -> Result<()> {
    let catalog = load_catalog(catalog_args.equipment_data.as_deref(), catalog_args.armor_data.as_deref())?;

    match args.listing {
        Listing::Equipment => {
            let items = catalog.equipment_sorted();
            match args.format {
                OutputFormat::Text => print!("{}", render_equipment(&items)),
                OutputFormat::Json => print!("{}", to_json(&items)?),
            }
        }
        Listing::Armor => {
            let filtered = args.year.is_some() || args.tech_base.is_some() || args.primitive;
            let items = if filtered {
                let context = TechContext {
                    year: args.year,
                    tech_base: args.tech_base.unwrap_or_default(),
                    ..TechContext::default()
                };
                legal_armors_for(&catalog, &IntroductionDateOracle, &context, args.primitive)?
            } else {
                catalog.armor_types()
            };
            match args.format {
                OutputFormat::Text => print!("{}", render_armor(&items)),
                OutputFormat::Json => print!("{}", to_json(&items)?),
            }
        }
    }
    Ok(())
}
