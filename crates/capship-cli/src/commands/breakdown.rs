//! Breakdown command handler: derived weights and limits without the checks.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use capship_lib::{AttributeSet, UnitDesign, Vessel};

use capship_cli::output::{to_json, Breakdown, OutputFormat};
use capship_cli::paths::load_catalog;

use super::CatalogArgs;

#[derive(Args, Debug)]
pub struct BreakdownArgs {
    /// Design file (JSON).
    pub design: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn handle_breakdown(catalog_args: &CatalogArgs, args: &BreakdownArgs) -> Result<()> {
    let catalog = load_catalog(catalog_args.equipment_data.as_deref(), catalog_args.armor_data.as_deref())?;
    let design = UnitDesign::from_path(&args.design)
        .with_context(|| format!("failed to load design from {}", args.design.display()))?;
    let vessel = Vessel::resolve(&design, &catalog)
        .with_context(|| format!("failed to resolve design {}", design.name))?;
    let attrs = AttributeSet::compute(&vessel);
    let breakdown = Breakdown::new(&vessel, &attrs);

    match args.format {
        OutputFormat::Text => print!("{}", breakdown.render_text()),
        OutputFormat::Json => print!("{}", to_json(&breakdown)?),
    }
    Ok(())
}
