//! Failed equipment and tech legality checks.

use std::collections::BTreeSet;

use crate::tech::{TechContext, TechOracle};
use crate::vessel::Vessel;

use super::options::VerifierOptions;
use super::outcome::{CheckKind, CheckOutcome};

/// Mounted items on the failed equipment list, each reported once.
pub fn check_failed_equipment(vessel: &Vessel<'_>, options: &VerifierOptions) -> CheckOutcome {
    if !options.check_failed_equipment {
        return CheckOutcome::skipped(CheckKind::FailedEquipment);
    }
    let mut outcome = CheckOutcome::new(CheckKind::FailedEquipment);
    let mut reported = BTreeSet::new();
    for mounted in vessel.all_mounted() {
        let id = mounted.kind.id.as_str();
        if options.is_failed(id) && reported.insert(id) {
            outcome.fail(format!("Failed equipment: {}", mounted.name()));
        }
    }
    outcome
}

/// Every distinct equipment type and the armor must be legal in `context`.
pub fn check_tech_level(vessel: &Vessel<'_>, oracle: &dyn TechOracle, context: &TechContext) -> CheckOutcome {
    let mut outcome = CheckOutcome::new(CheckKind::TechLevel);
    let mut seen = BTreeSet::new();
    for mounted in vessel.all_mounted() {
        let kind = mounted.kind;
        if seen.insert(kind.id.as_str()) && !oracle.is_legal(&kind.tech, context) {
            outcome.fail(illegal(&kind.name, context));
        }
    }
    if let Some(armor) = vessel.armor {
        if !oracle.is_legal(&armor.tech, context) {
            outcome.fail(illegal(&armor.name, context));
        }
    }
    outcome
}

fn illegal(name: &str, context: &TechContext) -> String {
    match context.year {
        Some(year) => format!("{name} is not legal for {} tech in {year}", context.tech_base),
        None => format!("{name} is not legal for {} tech", context.tech_base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::EquipmentMount;
    use crate::hull::{Arc, HullClass};
    use crate::tech::{IntroductionDateOracle, PermissiveOracle, TechBase};
    use crate::test_helpers;

    #[test]
    fn failed_equipment_reported_once_per_type() {
        let catalog = test_helpers::catalog();
        let mut design = test_helpers::design(HullClass::WarShip, 500_000.0);
        design.equipment = vec![
            EquipmentMount::new("NL55", Arc::Nose),
            EquipmentMount::new("NL55", Arc::Aft),
            EquipmentMount::new("ERLargeLaser", Arc::Aft),
        ];
        let vessel = Vessel::resolve(&design, &catalog).expect("resolve");
        let options = VerifierOptions {
            failed_equipment: vec!["nl55".to_string()],
            ..VerifierOptions::default()
        };

        let outcome = check_failed_equipment(&vessel, &options);
        assert_eq!(outcome.diagnostics, vec!["Failed equipment: Naval Laser 55".to_string()]);

        let disabled = VerifierOptions {
            check_failed_equipment: false,
            ..options
        };
        assert!(check_failed_equipment(&vessel, &disabled).skipped);
    }

    #[test]
    fn armor_intro_year_is_checked() {
        let catalog = test_helpers::catalog();
        let mut design = test_helpers::design(HullClass::WarShip, 500_000.0);
        design.armor.armor_type = Some("mech-standard".to_string());
        let vessel = Vessel::resolve(&design, &catalog).expect("resolve");
        let context = TechContext {
            year: Some(2400),
            tech_base: TechBase::InnerSphere,
            allow_unofficial: true,
        };

        let outcome = check_tech_level(&vessel, &IntroductionDateOracle, &context);
        assert_eq!(
            outcome.diagnostics,
            vec!["Standard Mech Armor is not legal for Inner Sphere tech in 2400".to_string()]
        );
        assert!(check_tech_level(&vessel, &PermissiveOracle, &context).passed);
    }
}
