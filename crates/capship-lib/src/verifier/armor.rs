use crate::calc::AttributeSet;
use crate::vessel::Vessel;

use super::options::VerifierOptions;
use super::outcome::{CheckKind, CheckOutcome};

/// Armor tonnage, point allocation and armor type.
pub fn check_armor(vessel: &Vessel<'_>, attrs: &AttributeSet, options: &VerifierOptions) -> CheckOutcome {
    if !options.check_armor {
        return CheckOutcome::skipped(CheckKind::Armor);
    }
    let mut outcome = CheckOutcome::new(CheckKind::Armor);
    let allocation = &vessel.design.armor;

    if allocation.tonnage > attrs.max_armor_weight {
        outcome.fail(format!(
            "Total armor, {} tons, is greater than the maximum: {}",
            allocation.tonnage, attrs.max_armor_weight
        ));
    }

    let allocated = allocation.total_points();
    if allocated > attrs.armor_points_available {
        let facings = allocation
            .points
            .iter()
            .map(|(arc, points)| format!("{} {points}", arc.abbr()))
            .collect::<Vec<_>>()
            .join(", ");
        outcome.fail(format!(
            "Allocated armor points ({facings}) total {allocated}, more than the {} points available",
            attrs.armor_points_available
        ));
    }

    match vessel.armor {
        Some(armor) if !armor.is_capital() => {
            outcome.fail(format!("{} cannot be mounted on advanced aerospace units", armor.name));
        }
        None if allocation.tonnage > 0.0 => {
            outcome.fail("Armor tonnage is allocated without an armor type");
        }
        _ => {}
    }
    outcome
}
