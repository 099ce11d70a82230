//! Illegal equipment combinations.
//!
//! Weapon bays must hold weapons and enough ammunition for them; equipment must
//! suit the hull; mass drivers are restricted by hull, tonnage and arc; and the
//! standalone weapons on each left/right arc pair must mirror each other.

use std::collections::BTreeMap;

use crate::calc::tables::{BAY_SHOTS_PER_WEAPON, ROTARY_AMMO_FACTOR, ULTRA_AMMO_FACTOR};
use crate::catalog::{EquipmentFlags, EquipmentType};
use crate::hull::{Arc, HullClass, LATERAL_PAIRS};
use crate::vessel::{ResolvedBay, Vessel};

use super::outcome::{CheckKind, CheckOutcome};

pub fn check_equipment_combinations(vessel: &Vessel<'_>) -> CheckOutcome {
    let mut outcome = CheckOutcome::new(CheckKind::EquipmentCombinations);
    for bay in &vessel.bays {
        check_weapon_bay(bay, &mut outcome);
    }
    check_mountability(vessel, &mut outcome);
    check_mass_driver_arcs(vessel, &mut outcome);
    if !lateral_loads_match(vessel) {
        outcome.fail("Left and right side weapon loads do not match.");
    }
    outcome
}

/// Shots a bay must carry per weapon of this type.
fn shots_required(weapon: &EquipmentType) -> u32 {
    if weapon.has_flag(EquipmentFlags::ROTARY) {
        BAY_SHOTS_PER_WEAPON * ROTARY_AMMO_FACTOR
    } else if weapon.has_flag(EquipmentFlags::ULTRA) {
        BAY_SHOTS_PER_WEAPON * ULTRA_AMMO_FACTOR
    } else {
        BAY_SHOTS_PER_WEAPON
    }
}

fn check_weapon_bay(bay: &ResolvedBay<'_>, outcome: &mut CheckOutcome) {
    let name = &bay.bay.name;
    if bay.weapons.is_empty() {
        outcome.fail(format!("Bay {name} has no weapons"));
    }

    let mut needed: BTreeMap<&str, u32> = BTreeMap::new();
    for weapon in &bay.weapons {
        if weapon.kind.has_flag(EquipmentFlags::ONE_SHOT) {
            continue;
        }
        if let Some(family) = weapon.kind.ammo_family.as_deref() {
            *needed.entry(family).or_default() += shots_required(weapon.kind);
        }
    }

    let mut loaded: BTreeMap<&str, u32> = BTreeMap::new();
    for ammo in &bay.ammo {
        if let Some(family) = ammo.kind.ammo_family.as_deref() {
            let usable = if ammo.mount.disabled { 0 } else { ammo.mount.shots };
            *loaded.entry(family).or_default() += usable;
        }
    }

    let short = needed
        .iter()
        .any(|(family, shots)| loaded.get(family).copied().unwrap_or(0) < *shots);
    if short {
        outcome.fail(format!(
            "Bay {name} does not have the minimum 10 shots of ammo for each weapon"
        ));
    }
    if loaded.keys().any(|family| !needed.contains_key(family)) {
        outcome.fail(format!("Bay {name} has ammo for a weapon not in the bay"));
    }
}

/// Hull category of misc equipment, aerospace weapons, and mass driver
/// hull and tonnage limits.
fn check_mountability(vessel: &Vessel<'_>, outcome: &mut CheckOutcome) {
    let class = vessel.class();
    let category = EquipmentFlags::category_for(class);
    for mounted in vessel.all_mounted() {
        let kind = mounted.kind;
        if kind.is_misc() {
            if !kind.has_flag(category) {
                outcome.fail(format!("Cannot mount {}", kind.name));
            }
            continue;
        }
        if !kind.is_weapon() {
            continue;
        }
        if kind.is_mass_driver() && class == HullClass::JumpShip {
            outcome.fail("A mass driver may not be mounted on a Jumpship.");
        }
        if !kind.has_flag(EquipmentFlags::AERO) {
            outcome.fail(format!("Cannot mount {}", kind.name));
        }
        if let Some(driver) = kind.mass_driver {
            if vessel.tonnage() < driver.min_vessel_tonnage() {
                outcome.fail(format!(
                    "Minimum vessel tonnage for {} is {} tons",
                    kind.name,
                    driver.min_tonnage_label()
                ));
            }
        }
    }
}

fn check_mass_driver_arcs(vessel: &Vessel<'_>, outcome: &mut CheckOutcome) {
    let mut per_arc: BTreeMap<Arc, u32> = BTreeMap::new();
    for mounted in vessel.weapons().filter(|m| m.kind.is_mass_driver()) {
        if let Some(arc) = mounted.arc {
            *per_arc.entry(arc).or_default() += 1;
        }
    }
    for (arc, count) in per_arc {
        if vessel.class() == HullClass::WarShip && arc != Arc::Nose {
            outcome.fail("A warship may only mount a mass driver in the nose firing arc.");
        } else if count > 1 {
            outcome.fail("A ship may not mount more than one mass driver in a firing arc.");
        }
    }
}

/// Standalone weapon counts by type for one arc.
fn arc_load<'a>(vessel: &Vessel<'a>, arc: Arc) -> BTreeMap<&'a str, u32> {
    let mut load = BTreeMap::new();
    for mounted in vessel
        .equipment
        .iter()
        .filter(|m| m.kind.is_weapon() && m.arc == Some(arc))
    {
        *load.entry(mounted.kind.id.as_str()).or_default() += 1;
    }
    load
}

fn lateral_loads_match(vessel: &Vessel<'_>) -> bool {
    LATERAL_PAIRS
        .iter()
        .all(|&(left, right)| arc_load(vessel, left) == arc_load(vessel, right))
}
