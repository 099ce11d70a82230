//! Crew, gunnery and quarters requirements.

use crate::catalog::EquipmentType;
use crate::design::TransportBay;
use crate::hull::HullClass;
use crate::rounding::ceil_ton;

use super::tables::{
    CREW_PER_OFFICER, LIFEBOAT_TONS, MASS_DRIVER_GUNNERS, STANDARD_WEAPONS_PER_GUNNER,
};

/// Operating crew for the hull, plus crew required by installed equipment.
pub fn minimum_base_crew(class: HullClass, tonnage: f64, equipment_crew: u32) -> u32 {
    let (base, tons_per_crew) = class.crew_terms();
    base + ceil_ton(tonnage / tons_per_crew) as u32 + equipment_crew
}

/// Gunners needed to serve the weapons.
///
/// Mass drivers need ten gunners each, other capital weapons and screen
/// launchers one each, and standard-scale weapons one per six. Weapons with a
/// long range of one hex or less need no gunner.
pub fn required_gunners<'e>(weapons: impl IntoIterator<Item = &'e EquipmentType>) -> u32 {
    let mut capital: u32 = 0;
    let mut standard: u32 = 0;
    for weapon in weapons {
        if weapon.long_range <= 1 {
            continue;
        }
        if weapon.is_mass_driver() {
            capital += MASS_DRIVER_GUNNERS;
        } else if weapon.is_capital_crewed() {
            capital += 1;
        } else {
            standard += 1;
        }
    }
    capital + standard.div_ceil(STANDARD_WEAPONS_PER_GUNNER)
}

pub fn required_officers(required_crew: u32) -> u32 {
    required_crew.div_ceil(CREW_PER_OFFICER)
}

/// People that can be housed by the quarters bays.
pub fn quarters_capacity(bays: &[TransportBay]) -> u32 {
    bays.iter()
        .filter(|bay| bay.kind.is_quarters())
        .fold(0, |total: u32, bay| total.saturating_add(bay.capacity as u32))
}

pub fn lifeboat_weight(lifeboats: u32, escape_pods: u32) -> f64 {
    (f64::from(lifeboats) + f64::from(escape_pods)) * LIFEBOAT_TONS
}
