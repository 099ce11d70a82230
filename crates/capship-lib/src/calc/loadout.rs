//! Weapons, equipment and ammunition weights.

use crate::rounding::ceil_half_ton;
use crate::vessel::{Mounted, Vessel};

/// Standalone miscellaneous equipment.
pub fn misc_weight(vessel: &Vessel<'_>) -> f64 {
    vessel.misc().map(Mounted::tonnage).sum()
}

/// Every weapon, standalone or inside a bay.
pub fn weapon_weight(vessel: &Vessel<'_>) -> f64 {
    vessel.weapons().map(Mounted::tonnage).sum()
}

/// Weight of one ammo mount: whole bins of `shots_per_ton`, half-ton rounded.
pub fn ammo_mount_weight(mounted: &Mounted<'_>) -> f64 {
    let shots_per_ton = mounted.kind.shots_per_ton.max(1);
    let bins = mounted.mount.shots.div_ceil(shots_per_ton);
    ceil_half_ton(mounted.tonnage() * f64::from(bins))
}

/// Ammunition that has a location. Unplaced ammo belongs to one-shot weapons
/// and is carried in the launcher's own weight.
pub fn ammo_weight(vessel: &Vessel<'_>) -> f64 {
    vessel
        .all_mounted()
        .filter(|m| m.kind.is_ammo() && m.arc.is_some())
        .map(ammo_mount_weight)
        .sum()
}

/// Crew required by installed miscellaneous equipment.
pub fn equipment_crew(vessel: &Vessel<'_>) -> u32 {
    vessel.misc().map(|m| m.kind.crew).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{EquipmentMount, WeaponBay};
    use crate::hull::{Arc, HullClass};
    use crate::test_helpers;

    #[test]
    fn loadout_weights() {
        let catalog = test_helpers::catalog();
        let mut design = test_helpers::design(HullClass::WarShip, 500_000.0);
        design.equipment = vec![
            EquipmentMount::new("NL55", Arc::Nose),
            EquipmentMount::new("HPG", Arc::Nose),
            EquipmentMount {
                tonnage: Some(75.0),
                ..EquipmentMount::new("HPG", Arc::Aft)
            },
            EquipmentMount {
                arc: None,
                ..EquipmentMount::ammo("AC5Ammo", Arc::Nose, 20)
            },
        ];
        design.weapon_bays = vec![WeaponBay {
            name: "Nose AC".to_string(),
            arc: Arc::Nose,
            weapons: vec![
                EquipmentMount::new("AC5", Arc::Nose),
                EquipmentMount::new("AC5", Arc::Nose),
            ],
            ammo: vec![EquipmentMount::ammo("AC5Ammo", Arc::Nose, 45)],
        }];
        let vessel = Vessel::resolve(&design, &catalog).expect("resolve");

        assert_eq!(misc_weight(&vessel), 125.0);
        assert_eq!(weapon_weight(&vessel), 1100.0 + 16.0);
        // 45 shots at 20 per ton fill three bins; unplaced ammo is free.
        assert_eq!(ammo_weight(&vessel), 3.0);
        assert_eq!(equipment_crew(&vessel), 20);
    }
}
