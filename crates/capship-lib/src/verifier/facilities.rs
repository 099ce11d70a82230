//! Gravity deck and transport bay checks.

use std::collections::BTreeSet;

use crate::calc::AttributeSet;
use crate::hull::HullClass;
use crate::vessel::Vessel;

use super::outcome::{CheckKind, CheckOutcome};

pub fn check_grav_decks(vessel: &Vessel<'_>, attrs: &AttributeSet) -> CheckOutcome {
    let mut outcome = CheckOutcome::new(CheckKind::GravDecks);
    let decks = &vessel.design.grav_decks;

    if decks.len() > attrs.max_grav_decks as usize {
        outcome.fail(format!("Exceeds maximum {} gravity decks.", attrs.max_grav_decks));
    }
    if decks.iter().any(|&diameter| diameter > attrs.max_grav_deck_diameter) {
        outcome.fail(format!(
            "Maximum grav deck diameter is {}",
            attrs.max_grav_deck_diameter
        ));
    }
    outcome
}

/// Hardpoint bay facings, repair facility count, docking collars and doors.
pub fn check_bays(vessel: &Vessel<'_>, attrs: &AttributeSet) -> CheckOutcome {
    let mut outcome = CheckOutcome::new(CheckKind::Bays);
    let design = vessel.design;

    let mut facings = BTreeSet::new();
    let mut repair_facilities = 0;
    for bay in design.transport_bays.iter().filter(|b| b.kind.hardpoint_cost() > 0) {
        match bay.facing {
            Some(facing) if facing.is_armor_facing() => {
                if !facings.insert(facing) {
                    outcome.fail(
                        "Exceeds maximum of one repair facility or drop shuttle bay per armor facing.",
                    );
                }
            }
            _ => outcome.fail(format!("{} is not assigned a legal armor facing.", bay.kind)),
        }
        if bay.kind.is_repair_facility() {
            repair_facilities += 1;
        }
    }
    if repair_facilities > 1 && vessel.class() != HullClass::SpaceStation {
        outcome.fail("Only a space station may mount multiple naval repair facilities.");
    }

    if design.docking_collars > attrs.max_docking_hardpoints {
        outcome.fail(format!(
            "Exceeds maximum of {} docking hardpoints.",
            attrs.max_docking_hardpoints
        ));
    }

    for bay in design
        .transport_bays
        .iter()
        .filter(|b| b.doors == 0 && b.kind.requires_door())
    {
        outcome.fail(format!(
            "Transport bays other than cargo and infantry require at least one door. ({} bay has none)",
            bay.kind
        ));
    }
    let doors: u32 = design.transport_bays.iter().map(|b| b.doors).sum();
    if doors > attrs.max_bay_doors {
        outcome.fail("Exceeds maximum number of bay doors.");
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{BayKind, TransportBay, UnitDesign};
    use crate::hull::Arc;
    use crate::test_helpers;

    fn run(design: &UnitDesign, check: fn(&Vessel<'_>, &AttributeSet) -> CheckOutcome) -> CheckOutcome {
        let catalog = test_helpers::catalog();
        let vessel = Vessel::resolve(design, &catalog).expect("resolve");
        let attrs = AttributeSet::compute(&vessel);
        check(&vessel, &attrs)
    }

    fn bay(kind: BayKind, facing: Option<Arc>, doors: u32) -> TransportBay {
        TransportBay {
            kind,
            capacity: 1.0,
            doors,
            facing,
            personnel: 0,
        }
    }

    #[test]
    fn grav_deck_limits() {
        let mut design = test_helpers::design(HullClass::WarShip, 100_000.0);
        design.grav_decks = vec![100, 100, 250, 250];
        assert!(run(&design, check_grav_decks).passed);

        design.grav_decks = vec![100, 100, 250, 251, 90];
        assert_eq!(
            run(&design, check_grav_decks).diagnostics,
            vec![
                "Exceeds maximum 4 gravity decks.".to_string(),
                "Maximum grav deck diameter is 250".to_string(),
            ]
        );

        let mut station = test_helpers::design(HullClass::SpaceStation, 100_000.0);
        station.grav_decks = vec![1500];
        assert!(run(&station, check_grav_decks).passed);
    }

    #[test]
    fn hardpoint_bays_need_distinct_armor_facings() {
        let mut design = test_helpers::design(HullClass::WarShip, 500_000.0);
        design.transport_bays.extend([
            bay(BayKind::DropShuttle, Some(Arc::Nose), 1),
            bay(BayKind::NavalRepair, Some(Arc::Nose), 1),
            bay(BayKind::NavalRepairPressurized, Some(Arc::BroadsideLeft), 1),
        ]);
        assert_eq!(
            run(&design, check_bays).diagnostics,
            vec![
                "Exceeds maximum of one repair facility or drop shuttle bay per armor facing.".to_string(),
                "Pressurized Naval Repair Facility is not assigned a legal armor facing.".to_string(),
                "Only a space station may mount multiple naval repair facilities.".to_string(),
            ]
        );
    }

    #[test]
    fn stations_may_mount_several_repair_facilities() {
        let mut design = test_helpers::design(HullClass::SpaceStation, 500_000.0);
        design.transport_bays.extend([
            bay(BayKind::NavalRepair, Some(Arc::Nose), 1),
            bay(BayKind::NavalRepair, Some(Arc::Aft), 1),
        ]);
        assert!(run(&design, check_bays).passed);
    }

    #[test]
    fn docking_collars_and_doors() {
        let mut design = test_helpers::design(HullClass::JumpShip, 100_000.0);
        design.docking_collars = 3;
        design.transport_bays.extend([
            bay(BayKind::Cargo, None, 0),
            bay(BayKind::SmallCraft, None, 0),
            bay(BayKind::Fighter, None, 10),
        ]);
        assert_eq!(
            run(&design, check_bays).diagnostics,
            vec![
                "Exceeds maximum of 2 docking hardpoints.".to_string(),
                "Transport bays other than cargo and infantry require at least one door. (Small Craft bay has none)"
                    .to_string(),
                "Exceeds maximum number of bay doors.".to_string(),
            ]
        );
    }
}
