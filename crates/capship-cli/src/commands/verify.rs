//! Verify command handler.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use capship_lib::{
    verify, AttributeSet, IntroductionDateOracle, TechBase, UnitDesign, VerificationReport,
    VerifierOptions, Vessel,
};

use capship_cli::output::{to_json, OutputFormat};
use capship_cli::paths::load_catalog;

use super::CatalogArgs;

/// Process exit codes for the verify command.
pub mod exit_codes {
    pub const ILLEGAL: i32 = 2;
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Design file (JSON).
    pub design: PathBuf,
    /// Verifier options file (JSON).
    #[arg(long)]
    pub options: Option<PathBuf>,
    /// Game year for tech legality; overrides the options file.
    #[arg(long)]
    pub year: Option<u32>,
    /// Faction tech base (all, inner_sphere, clan); overrides the options file.
    #[arg(long)]
    pub tech_base: Option<TechBase>,
    /// Report designs that leave tonnage unused.
    #[arg(long)]
    pub show_underweight: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Load the options file, if any, and apply command-line overrides.
fn resolve_options(args: &VerifyArgs) -> Result<VerifierOptions> {
    let mut options = match &args.options {
        Some(path) => VerifierOptions::from_path(path)
            .with_context(|| format!("failed to load options from {}", path.display()))?,
        None => VerifierOptions::default(),
    };
    if args.year.is_some() {
        options.tech.year = args.year;
    }
    if let Some(tech_base) = args.tech_base {
        options.tech.tech_base = tech_base;
    }
    if args.show_underweight {
        options.show_underweight = true;
    }
    Ok(options)
}

/// Handle the verify subcommand.
///
/// Prints the report and exits with [`exit_codes::ILLEGAL`] when the design
/// breaks the construction rules.
pub fn handle_verify(catalog_args: &CatalogArgs, args: &VerifyArgs) -> Result<()> {
    let catalog = load_catalog(catalog_args.equipment_data.as_deref(), catalog_args.armor_data.as_deref())?;
    let options = resolve_options(args)?;
    debug!(?options, "verifier options");

    let design = UnitDesign::from_path(&args.design)
        .with_context(|| format!("failed to load design from {}", args.design.display()))?;
    let vessel = Vessel::resolve(&design, &catalog)
        .with_context(|| format!("failed to resolve design {}", design.name))?;
    let attrs = AttributeSet::compute(&vessel);
    let result = verify(&vessel, &attrs, &IntroductionDateOracle, &options);
    let report = VerificationReport::new(&vessel, &attrs, &result);

    match args.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => print!("{}", to_json(&report)?),
    }

    if !report.legal {
        std::process::exit(exit_codes::ILLEGAL);
    }
    Ok(())
}
