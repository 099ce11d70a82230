use std::fmt::Write;

use serde::Serialize;

use crate::calc::loadout::ammo_mount_weight;
use crate::calc::{AttributeSet, LedgerEntry};
use crate::hull::{Arc, Hull};
use crate::verifier::ValidationResult;
use crate::vessel::Vessel;

const LABEL_WIDTH: usize = 32;
const TONS_WIDTH: usize = 14;

/// An item inside a weapon bay listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BayItem {
    pub name: String,
    pub tons: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shots: Option<u32>,
}

/// Contents of one weapon bay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BayListing {
    pub name: String,
    pub arc: Arc,
    pub tons: f64,
    pub items: Vec<BayItem>,
}

/// Structured outcome of a verification run that consumers can render or serialise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationReport {
    pub name: String,
    pub hull: Hull,
    pub tonnage: f64,
    pub ledger: Vec<LedgerEntry>,
    pub total_weight: f64,
    /// One line per arc that needs extra fire control.
    pub fire_control: Vec<String>,
    pub weapon_bays: Vec<BayListing>,
    pub legal: bool,
    pub overridden: bool,
    pub diagnostics: Vec<String>,
}

impl VerificationReport {
    pub fn new(vessel: &Vessel<'_>, attrs: &AttributeSet, result: &ValidationResult) -> Self {
        let fire_control = attrs
            .fire_control
            .iter()
            .filter(|arc| arc.surcharge > 0.0)
            .map(|arc| {
                format!(
                    "{} requires {} tons of additional fire control.",
                    arc.arc.abbr(),
                    arc.surcharge
                )
            })
            .collect();

        let weapon_bays = vessel
            .bays
            .iter()
            .map(|bay| {
                let items: Vec<BayItem> = bay
                    .weapons
                    .iter()
                    .map(|m| BayItem {
                        name: m.name().to_string(),
                        tons: m.tonnage(),
                        shots: None,
                    })
                    .chain(bay.ammo.iter().map(|m| BayItem {
                        name: m.name().to_string(),
                        tons: ammo_mount_weight(m),
                        shots: Some(m.mount.shots),
                    }))
                    .collect();
                BayListing {
                    name: bay.bay.name.clone(),
                    arc: bay.bay.arc,
                    tons: items.iter().map(|item| item.tons).sum(),
                    items,
                }
            })
            .collect();

        Self {
            name: vessel.design.name.clone(),
            hull: vessel.design.hull,
            tonnage: vessel.tonnage(),
            ledger: attrs.ledger(),
            total_weight: attrs.total_weight,
            fire_control,
            weapon_bays,
            legal: result.legal,
            overridden: result.overridden,
            diagnostics: result.diagnostics().into_iter().map(str::to_string).collect(),
        }
    }

    pub fn verdict(&self) -> &'static str {
        match (self.legal, self.overridden) {
            (true, true) => "Legal (canon override)",
            (true, false) => "Legal",
            (false, _) => "Illegal",
        }
    }

    /// Fixed-width weight breakdown followed by the verdict and diagnostics.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{} ({}, {} tons)", self.name, self.hull, self.tonnage);
        let _ = writeln!(buffer, "{:<LABEL_WIDTH$}{:>TONS_WIDTH$}", "Item", "Tons");
        for entry in &self.ledger {
            let _ = writeln!(buffer, "{:<LABEL_WIDTH$}{:>TONS_WIDTH$}", entry.label, entry.tons);
        }
        let _ = writeln!(buffer, "{:<LABEL_WIDTH$}{:>TONS_WIDTH$}", "Total", self.total_weight);

        for line in &self.fire_control {
            let _ = writeln!(buffer, "{line}");
        }

        if !self.weapon_bays.is_empty() {
            let _ = writeln!(buffer);
            let _ = writeln!(buffer, "Weapon bays:");
            for bay in &self.weapon_bays {
                let _ = writeln!(buffer, "  {} [{}] {} tons", bay.name, bay.arc.abbr(), bay.tons);
                for item in &bay.items {
                    let name = match item.shots {
                        Some(shots) => format!("{} ({shots})", item.name),
                        None => item.name.clone(),
                    };
                    let _ = writeln!(
                        buffer,
                        "    {:<width$}{:>TONS_WIDTH$}",
                        name,
                        item.tons,
                        width = LABEL_WIDTH - 4
                    );
                }
            }
        }

        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "Verdict: {}", self.verdict());
        for diagnostic in &self.diagnostics {
            let _ = writeln!(buffer, "  - {diagnostic}");
        }
        buffer
    }
}
