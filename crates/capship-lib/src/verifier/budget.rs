//! Weight, tonnage and heat sink checks.

use crate::calc::AttributeSet;
use crate::design::HeatSinkKind;
use crate::rounding::SNAP_EPSILON;
use crate::vessel::Vessel;

use super::options::VerifierOptions;
use super::outcome::{CheckKind, CheckOutcome};

/// Total weight must not exceed the declared tonnage unless overweight
/// construction is allowed.
pub fn check_weight(vessel: &Vessel<'_>, attrs: &AttributeSet, options: &VerifierOptions) -> CheckOutcome {
    let mut outcome = CheckOutcome::new(CheckKind::Weight);
    let given = vessel.tonnage();
    let calculated = attrs.total_weight;

    if calculated > given && !vessel.design.overrides.allow_overweight {
        outcome.fail(format!(
            "Weight Calculated: {calculated}, Weight Given: {given}, overweight by {} tons",
            calculated - given
        ));
    } else if calculated < given && options.show_underweight {
        outcome.fail(format!(
            "Weight Calculated: {calculated}, Weight Given: {given}, underweight by {} tons",
            given - calculated
        ));
    }
    outcome
}

/// Hull tonnage must meet the drive core minimum and step in its increment.
pub fn check_tonnage(vessel: &Vessel<'_>, attrs: &AttributeSet) -> CheckOutcome {
    let mut outcome = CheckOutcome::new(CheckKind::Tonnage);
    let tonnage = vessel.tonnage();

    if tonnage < attrs.min_tonnage {
        outcome.fail(format!(
            "Vessel tonnage {tonnage} is below the minimum of {} tons",
            attrs.min_tonnage
        ));
    }
    let steps = tonnage / attrs.weight_increment;
    if (steps - steps.round()).abs() > SNAP_EPSILON {
        outcome.fail(format!(
            "Vessel tonnage must be a multiple of {} tons",
            attrs.weight_increment
        ));
    }
    outcome
}

pub fn check_heat_sinks(vessel: &Vessel<'_>, attrs: &AttributeSet) -> CheckOutcome {
    let mut outcome = CheckOutcome::new(CheckKind::HeatSinks);
    let heat_sinks = vessel.design.heat_sinks;

    if heat_sinks.count < attrs.free_heat_sinks {
        outcome.fail(format!(
            "Heat Sinks: Total {}, Required {}",
            heat_sinks.count, attrs.free_heat_sinks
        ));
    }
    if heat_sinks.kind == HeatSinkKind::Unsupported {
        outcome.fail("Invalid heat sink type! Valid types are single and double.");
    }
    outcome
}
