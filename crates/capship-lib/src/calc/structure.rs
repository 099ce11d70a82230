//! Structure and armor budgets.

use crate::hull::{Hull, HullClass};
use crate::rounding::{floor_half_ton, round, round_half_ton, Granularity, RoundMode};

use super::tables::{FREE_SI_FACINGS, PRIMITIVE_ARMOR_FACTOR};

/// Weight of the structural integrity framework, to the nearest half ton.
pub fn structure_weight(class: HullClass, structural_integrity: u32, tonnage: f64) -> f64 {
    round_half_ton(f64::from(structural_integrity) * tonnage / class.structure_divisor())
}

/// Largest armor tonnage the hull can carry, floored to the half ton.
pub fn max_armor_weight(class: HullClass, structural_integrity: u32, tonnage: f64) -> f64 {
    let (divisor, bonus) = class.armor_weight_terms();
    floor_half_ton(f64::from(structural_integrity) * tonnage / divisor + bonus)
}

/// Free armor granted by structural integrity: a tenth of SI, rounded, on each facing.
pub fn free_si_armor(structural_integrity: u32) -> f64 {
    let per_facing = round(
        f64::from(structural_integrity) / 10.0,
        Granularity::Ton,
        RoundMode::Nearest,
    );
    per_facing * FREE_SI_FACINGS
}

/// Armor points bought by `armor_tonnage` plus the free SI armor.
///
/// Primitive hulls floor the purchased points and the reduced free armor
/// separately before adding them.
pub fn armor_points_available(
    hull: Hull,
    structural_integrity: u32,
    armor_tonnage: f64,
    points_per_ton: f64,
) -> u32 {
    let free = free_si_armor(structural_integrity);
    let points = if hull.primitive {
        floor(points_per_ton * armor_tonnage) + floor(free * PRIMITIVE_ARMOR_FACTOR)
    } else {
        floor(points_per_ton * armor_tonnage + free)
    };
    points.max(0.0) as u32
}

/// Armor points available when the maximum armor tonnage is purchased.
pub fn max_armor_points(hull: Hull, structural_integrity: u32, tonnage: f64, points_per_ton: f64) -> u32 {
    let max_weight = max_armor_weight(hull.class, structural_integrity, tonnage);
    armor_points_available(hull, structural_integrity, max_weight, points_per_ton)
}

fn floor(value: f64) -> f64 {
    round(value, Granularity::Ton, RoundMode::Floor)
}
