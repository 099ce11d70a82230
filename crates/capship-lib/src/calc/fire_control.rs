//! Extra fire control for crowded firing arcs.
//!
//! Each arc supports a base number of weapon slots (12 on JumpShips, 20 on
//! WarShips and stations). Every full allowance beyond the first slot costs a
//! tenth of the arc's weapon tonnage, rounded up to the half ton. A working
//! naval C3 network doubles the surcharge.

use serde::Serialize;

use crate::catalog::{EquipmentFlags, EquipmentType};
use crate::hull::{Arc, HullClass};
use crate::rounding::ceil_half_ton;
use crate::vessel::Vessel;

use super::tables::MASS_DRIVER_SLOTS;

/// Fire control load of a single firing arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcFireControl {
    pub arc: Arc,
    pub slots: u32,
    pub weapon_tonnage: f64,
    pub surcharge: f64,
}

/// Slots a weapon occupies in its arc.
pub fn weapon_slots(kind: &EquipmentType) -> u32 {
    if kind.is_mass_driver() {
        MASS_DRIVER_SLOTS
    } else {
        1
    }
}

pub fn arc_surcharge(class: HullClass, slots: u32, weapon_tonnage: f64, naval_c3: bool) -> f64 {
    let excess = slots.saturating_sub(1) / class.slots_per_arc();
    if excess == 0 {
        return 0.0;
    }
    let surcharge = ceil_half_ton(f64::from(excess) * weapon_tonnage / 10.0);
    if naval_c3 {
        surcharge * 2.0
    } else {
        surcharge
    }
}

/// Per-arc fire control, in the hull's arc order. Bay contents count as
/// individual weapons in the bay's arc.
pub fn fire_control_by_arc(vessel: &Vessel<'_>) -> Vec<ArcFireControl> {
    let class = vessel.class();
    let naval_c3 = vessel.has_working_misc(EquipmentFlags::NAVAL_C3);
    class
        .arcs()
        .iter()
        .map(|&arc| {
            let (slots, weapon_tonnage) = vessel
                .weapons()
                .filter(|m| m.arc == Some(arc))
                .fold((0, 0.0), |(slots, tons), m| {
                    (slots + weapon_slots(m.kind), tons + m.tonnage())
                });
            ArcFireControl {
                arc,
                slots,
                weapon_tonnage,
                surcharge: arc_surcharge(class, slots, weapon_tonnage, naval_c3),
            }
        })
        .collect()
}

pub fn fire_control_surcharge(arcs: &[ArcFireControl]) -> f64 {
    arcs.iter().map(|arc| arc.surcharge).sum()
}
