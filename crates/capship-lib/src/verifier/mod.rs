//! Construction rule checks.
//!
//! Every check is a pure function of the resolved vessel and its derived
//! attributes that returns a [`CheckOutcome`]. [`verify`] runs all of them in a
//! fixed order without short-circuiting, so a design that breaks several rules
//! gets a diagnostic for each of them, and folds the outcomes into a
//! [`ValidationResult`].

pub mod armor;
pub mod budget;
pub mod combinations;
pub mod crew;
pub mod equipment;
pub mod facilities;
pub mod options;
pub mod outcome;

use tracing::{debug, info, warn};

use crate::calc::AttributeSet;
use crate::tech::TechOracle;
use crate::vessel::Vessel;

pub use options::VerifierOptions;
pub use outcome::{CheckKind, CheckOutcome, ValidationResult};

/// Run every check against `vessel` and combine the outcomes.
///
/// `attrs` must have been computed from the same vessel. The design's canon
/// flag forces a legal verdict but the diagnostics are still reported.
pub fn verify(
    vessel: &Vessel<'_>,
    attrs: &AttributeSet,
    oracle: &dyn TechOracle,
    options: &VerifierOptions,
) -> ValidationResult {
    let outcomes = vec![
        budget::check_weight(vessel, attrs, options),
        budget::check_tonnage(vessel, attrs),
        budget::check_heat_sinks(vessel, attrs),
        armor::check_armor(vessel, attrs, options),
        equipment::check_failed_equipment(vessel, options),
        equipment::check_tech_level(vessel, oracle, &options.tech),
        combinations::check_equipment_combinations(vessel),
        crew::check_crew(vessel, attrs),
        facilities::check_grav_decks(vessel, attrs),
        facilities::check_bays(vessel, attrs),
    ];

    for outcome in &outcomes {
        debug!(
            check = %outcome.check,
            passed = outcome.passed,
            skipped = outcome.skipped,
            diagnostics = outcome.diagnostics.len(),
            "check complete"
        );
    }

    let design = vessel.design;
    let result = ValidationResult::from_outcomes(outcomes, design.overrides.canon_invalid_build);
    if result.overridden {
        warn!(
            design = %design.name,
            failed = result.failed_checks().len(),
            "design fails construction rules but is accepted as canon"
        );
    }
    info!(design = %design.name, legal = result.legal, "verification finished");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::UnitDesign;
    use crate::hull::{Arc, HullClass};
    use crate::tech::PermissiveOracle;
    use crate::test_helpers;

    fn run(design: &UnitDesign) -> ValidationResult {
        let catalog = test_helpers::catalog();
        let vessel = Vessel::resolve(design, &catalog).expect("resolve");
        let attrs = AttributeSet::compute(&vessel);
        verify(&vessel, &attrs, &PermissiveOracle, &VerifierOptions::default())
    }

    /// 500 kt WarShip whose armor and crew both break the rules.
    fn broken_design() -> UnitDesign {
        let mut design = test_helpers::design(HullClass::WarShip, 500_000.0);
        design.structural_integrity = 100;
        design.armor.tonnage = 100.0;
        design.armor.points.insert(Arc::Nose, 200);
        design.crew.officers = 25;
        design.crew.enlisted = 100;
        design
    }

    #[test]
    fn reference_design_is_legal() {
        let design = test_helpers::design(HullClass::WarShip, 500_000.0);
        let result = run(&design);
        assert!(result.legal, "{:?}", result.diagnostics());
        assert!(!result.overridden);
        assert_eq!(result.outcomes.len(), CheckKind::ORDER.len());
        let order: Vec<CheckKind> = result.outcomes.iter().map(|o| o.check).collect();
        assert_eq!(order, CheckKind::ORDER.to_vec());
    }

    #[test]
    fn every_failing_check_is_reported() {
        let result = run(&broken_design());
        assert!(!result.legal);
        assert_eq!(result.failed_checks(), vec![CheckKind::Armor, CheckKind::Crew]);
        assert!(result
            .diagnostics()
            .contains(&"Requires 145 crew and only has 125"));
    }

    #[test]
    fn canon_override_keeps_diagnostics() {
        let mut design = broken_design();
        design.overrides.canon_invalid_build = true;
        let result = run(&design);
        assert!(result.legal);
        assert!(result.overridden);
        assert_eq!(result.failed_checks(), vec![CheckKind::Armor, CheckKind::Crew]);
    }

    #[test]
    fn disabled_checks_are_skipped() {
        let catalog = test_helpers::catalog();
        let design = broken_design();
        let vessel = Vessel::resolve(&design, &catalog).expect("resolve");
        let attrs = AttributeSet::compute(&vessel);
        let options = VerifierOptions {
            check_armor: false,
            ..VerifierOptions::default()
        };
        let result = verify(&vessel, &attrs, &PermissiveOracle, &options);
        assert_eq!(result.failed_checks(), vec![CheckKind::Crew]);
        assert!(result.outcome(CheckKind::Armor).is_some_and(|o| o.skipped));
    }
}
