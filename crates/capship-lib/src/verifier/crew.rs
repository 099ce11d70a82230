use crate::calc::{quarters_capacity, required_officers, AttributeSet};
use crate::vessel::Vessel;

use super::outcome::{CheckKind, CheckOutcome};

/// Crew size, officers and quarters.
///
/// Bay personnel do not count toward the operating crew but do need quarters
/// along with passengers, marines and battle armor troops.
pub fn check_crew(vessel: &Vessel<'_>, attrs: &AttributeSet) -> CheckOutcome {
    let mut outcome = CheckOutcome::new(CheckKind::Crew);
    let design = vessel.design;
    let crew = design.crew;

    let crew_size = crew.total().saturating_sub(design.bay_personnel());
    let required = attrs.required_crew();
    if crew_size < required {
        outcome.fail(format!("Requires {required} crew and only has {crew_size}"));
    }

    let officers = required_officers(required);
    if crew.officers < officers {
        outcome.fail(format!("Requires at least {officers} officers"));
    }

    let personnel = [crew.passengers, crew.marines, crew.battle_armor]
        .into_iter()
        .fold(crew_size, u32::saturating_add);
    let quarters = quarters_capacity(&design.transport_bays);
    if quarters < personnel {
        outcome.fail(format!(
            "Requires quarters for {personnel} crew but only has {quarters}"
        ));
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{BayKind, TransportBay};
    use crate::hull::HullClass;
    use crate::test_helpers;

    fn outcome_for(design: &crate::design::UnitDesign) -> CheckOutcome {
        let catalog = test_helpers::catalog();
        let vessel = Vessel::resolve(design, &catalog).expect("resolve");
        let attrs = AttributeSet::compute(&vessel);
        check_crew(&vessel, &attrs)
    }

    #[test]
    fn bay_personnel_do_not_crew_the_ship() {
        let mut design = test_helpers::design(HullClass::WarShip, 500_000.0);
        design.crew.officers = 25;
        design.crew.enlisted = 130;
        design.transport_bays.push(TransportBay {
            kind: BayKind::Fighter,
            capacity: 6.0,
            doors: 1,
            facing: None,
            personnel: 12,
        });
        assert_eq!(
            outcome_for(&design).diagnostics,
            vec!["Requires 145 crew and only has 143".to_string()]
        );

        design.crew.enlisted = 132;
        assert!(outcome_for(&design).passed);
    }

    #[test]
    fn officers_and_quarters() {
        let mut design = test_helpers::design(HullClass::WarShip, 500_000.0);
        design.crew.officers = 20;
        design.crew.enlisted = 200;
        design.crew.marines = 400;
        design.crew.passengers = 10;
        assert_eq!(
            outcome_for(&design).diagnostics,
            vec![
                "Requires at least 25 officers".to_string(),
                "Requires quarters for 630 crew but only has 600".to_string(),
            ]
        );
    }

    #[test]
    fn huge_crew_counts_saturate() {
        let mut design = test_helpers::design(HullClass::WarShip, 500_000.0);
        design.crew.officers = u32::MAX;
        design.crew.enlisted = 10;
        design.crew.marines = 50;
        let outcome = outcome_for(&design);
        assert_eq!(
            outcome.diagnostics,
            vec![format!("Requires quarters for {} crew but only has 600", u32::MAX)]
        );
    }
}
