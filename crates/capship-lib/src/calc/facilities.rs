//! Gravity decks, docking hardpoints and transport bays.

use crate::design::TransportBay;
use crate::hull::{HullClass, GRAV_DECK_LARGE_MAX, GRAV_DECK_STANDARD_MAX};
use crate::rounding::ceil_ton;

use super::tables::{
    BASE_BAY_DOORS, BASE_GRAV_DECKS, DOCKING_HARDPOINT_TONS, GRAV_DECK_HUGE_TONS,
    GRAV_DECK_LARGE_TONS, GRAV_DECK_STANDARD_TONS, MIN_HARDPOINT_TONNAGE, TONS_PER_BAY_DOOR,
    TONS_PER_GRAV_DECK, TONS_PER_HARDPOINT,
};

/// Weight of a gravity deck by its diameter tier.
pub fn grav_deck_tons(diameter: u32) -> f64 {
    if diameter <= GRAV_DECK_STANDARD_MAX {
        GRAV_DECK_STANDARD_TONS
    } else if diameter <= GRAV_DECK_LARGE_MAX {
        GRAV_DECK_LARGE_TONS
    } else {
        GRAV_DECK_HUGE_TONS
    }
}

pub fn grav_deck_weight(decks: &[u32]) -> f64 {
    decks.iter().map(|&diameter| grav_deck_tons(diameter)).sum()
}

pub fn max_grav_decks(tonnage: f64) -> u32 {
    BASE_GRAV_DECKS + ceil_ton(tonnage / TONS_PER_GRAV_DECK) as u32
}

pub fn max_grav_deck_diameter(class: HullClass) -> u32 {
    class.max_grav_deck_diameter()
}

/// Docking collars the hull can mount after repair facilities and drop
/// shuttle bays claim their hardpoints.
pub fn max_docking_hardpoints(tonnage: f64, bays: &[TransportBay]) -> u32 {
    if tonnage < MIN_HARDPOINT_TONNAGE {
        return 0;
    }
    let base = ceil_ton(tonnage / TONS_PER_HARDPOINT) as u32;
    let used: u32 = bays.iter().map(|bay| bay.kind.hardpoint_cost()).sum();
    base.saturating_sub(used)
}

pub fn docking_hardpoint_weight(collars: u32) -> f64 {
    f64::from(collars) * DOCKING_HARDPOINT_TONS
}

pub fn max_bay_doors(tonnage: f64) -> u32 {
    BASE_BAY_DOORS + ceil_ton(tonnage / TONS_PER_BAY_DOOR) as u32
}

/// Weight of transport bays other than quarters.
pub fn carrying_space_weight(bays: &[TransportBay]) -> f64 {
    bays.iter()
        .filter(|bay| !bay.kind.is_quarters())
        .map(TransportBay::weight)
        .sum()
}

pub fn quarters_weight(bays: &[TransportBay]) -> f64 {
    bays.iter()
        .filter(|bay| bay.kind.is_quarters())
        .map(TransportBay::weight)
        .sum()
}
