//! Output formatting for verification results, breakdowns and catalogs.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use capship_lib::catalog::EquipmentKind;
use capship_lib::{ArmorType, AttributeSet, EquipmentType, HullClass, Vessel};

/// Output style selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Pretty-printed JSON followed by a newline.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Derived budgets and limits of a vessel, without running the checks.
#[derive(Debug, Serialize)]
pub struct Breakdown<'a> {
    pub name: &'a str,
    pub hull: HullClass,
    pub primitive: bool,
    pub tonnage: f64,
    pub attributes: &'a AttributeSet,
}

impl<'a> Breakdown<'a> {
    pub fn new(vessel: &'a Vessel<'_>, attributes: &'a AttributeSet) -> Self {
        Self {
            name: &vessel.design.name,
            hull: vessel.class(),
            primitive: vessel.is_primitive(),
            tonnage: vessel.tonnage(),
            attributes,
        }
    }

    pub fn render_text(&self) -> String {
        let attrs = self.attributes;
        let mut buffer = String::new();
        let primitive = if self.primitive { "Primitive " } else { "" };
        let _ = writeln!(buffer, "{} ({primitive}{}, {} tons)", self.name, self.hull, self.tonnage);

        let _ = writeln!(buffer, "\nWeights:");
        for entry in attrs.ledger() {
            let _ = writeln!(buffer, "  {:<28} {:>14}", entry.label, entry.tons);
        }
        let _ = writeln!(buffer, "  {:<28} {:>14}", "Total", attrs.total_weight);

        let _ = writeln!(buffer, "\nLimits:");
        let limits = [
            ("Max armor tonnage", attrs.max_armor_weight.to_string()),
            ("Max armor points", attrs.max_armor_points.to_string()),
            ("Armor points available", attrs.armor_points_available.to_string()),
            ("Free heat sinks", attrs.free_heat_sinks.to_string()),
            ("Minimum base crew", attrs.minimum_base_crew.to_string()),
            ("Required gunners", attrs.required_gunners.to_string()),
            ("Gravity decks", attrs.max_grav_decks.to_string()),
            ("Grav deck diameter (m)", attrs.max_grav_deck_diameter.to_string()),
            ("Docking hardpoints", attrs.max_docking_hardpoints.to_string()),
            ("Bay doors", attrs.max_bay_doors.to_string()),
        ];
        for (label, value) in limits {
            let _ = writeln!(buffer, "  {label:<28} {value:>14}");
        }

        let _ = writeln!(buffer, "\nFire control:");
        let _ = writeln!(buffer, "  {:<6} {:>6} {:>12} {:>12}", "Arc", "Slots", "Weapons", "Extra");
        for arc in &attrs.fire_control {
            let _ = writeln!(
                buffer,
                "  {:<6} {:>6} {:>12} {:>12}",
                arc.arc.abbr(),
                arc.slots,
                arc.weapon_tonnage,
                arc.surcharge
            );
        }
        buffer
    }
}

/// Fixed-width equipment listing.
pub fn render_equipment(items: &[&EquipmentType]) -> String {
    let mut buffer = String::new();
    if items.is_empty() {
        let _ = writeln!(buffer, "No equipment in catalog.");
        return buffer;
    }
    let _ = writeln!(buffer, "Equipment ({}):", items.len());
    let _ = writeln!(
        buffer,
        "{:<24} {:<32} {:<7} {:>10} {:>6}",
        "Id", "Name", "Kind", "Tons", "Intro"
    );
    for item in items {
        let kind = match item.kind {
            EquipmentKind::Weapon => "weapon",
            EquipmentKind::Misc => "misc",
            EquipmentKind::Ammo => "ammo",
        };
        let _ = writeln!(
            buffer,
            "{:<24} {:<32} {:<7} {:>10} {:>6}",
            item.id, item.name, kind, item.tonnage, item.tech.intro_year
        );
    }
    buffer
}

/// Fixed-width armor listing with points per ton by hull class.
pub fn render_armor(items: &[&ArmorType]) -> String {
    let mut buffer = String::new();
    if items.is_empty() {
        let _ = writeln!(buffer, "No armor in catalog.");
        return buffer;
    }
    let _ = writeln!(buffer, "Armor ({}):", items.len());
    let _ = writeln!(
        buffer,
        "{:<24} {:<28} {:>6} {:>6} {:>6} {:>6}",
        "Id", "Name", "JS", "WS", "SS", "Intro"
    );
    for armor in items {
        let ppt = armor.points_per_ton;
        let _ = writeln!(
            buffer,
            "{:<24} {:<28} {:>6} {:>6} {:>6} {:>6}",
            armor.id,
            armor.name,
            ppt.jump_ship,
            ppt.war_ship,
            ppt.space_station,
            armor.tech.intro_year
        );
    }
    buffer
}
