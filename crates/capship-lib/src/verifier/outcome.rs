use std::fmt;

use serde::Serialize;

/// The checks of a verification pass, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Weight,
    Tonnage,
    HeatSinks,
    Armor,
    FailedEquipment,
    TechLevel,
    EquipmentCombinations,
    Crew,
    GravDecks,
    Bays,
}

impl CheckKind {
    pub const ORDER: [CheckKind; 10] = [
        CheckKind::Weight,
        CheckKind::Tonnage,
        CheckKind::HeatSinks,
        CheckKind::Armor,
        CheckKind::FailedEquipment,
        CheckKind::TechLevel,
        CheckKind::EquipmentCombinations,
        CheckKind::Crew,
        CheckKind::GravDecks,
        CheckKind::Bays,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CheckKind::Weight => "weight",
            CheckKind::Tonnage => "tonnage",
            CheckKind::HeatSinks => "heat sinks",
            CheckKind::Armor => "armor",
            CheckKind::FailedEquipment => "failed equipment",
            CheckKind::TechLevel => "tech level",
            CheckKind::EquipmentCombinations => "equipment combinations",
            CheckKind::Crew => "crew",
            CheckKind::GravDecks => "gravity decks",
            CheckKind::Bays => "bays",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub check: CheckKind,
    pub passed: bool,
    /// The check was disabled by the verifier options.
    pub skipped: bool,
    pub diagnostics: Vec<String>,
}

impl CheckOutcome {
    pub fn new(check: CheckKind) -> Self {
        Self {
            check,
            passed: true,
            skipped: false,
            diagnostics: Vec::new(),
        }
    }

    pub fn skipped(check: CheckKind) -> Self {
        Self {
            skipped: true,
            ..Self::new(check)
        }
    }

    /// Record a violation.
    pub fn fail(&mut self, diagnostic: impl Into<String>) {
        self.passed = false;
        self.diagnostics.push(diagnostic.into());
    }
}

/// Verdict and diagnostics of a verification pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub legal: bool,
    /// The design failed at least one check but is published as canon.
    pub overridden: bool,
    pub outcomes: Vec<CheckOutcome>,
}

impl ValidationResult {
    /// Combine outcomes into a verdict. The canon override forces the verdict
    /// to legal; outcomes and diagnostics are kept as they are.
    pub fn from_outcomes(outcomes: Vec<CheckOutcome>, canon_override: bool) -> Self {
        let all_passed = outcomes.iter().all(|outcome| outcome.passed);
        Self {
            legal: all_passed || canon_override,
            overridden: canon_override && !all_passed,
            outcomes,
        }
    }

    /// Every diagnostic, in check order.
    pub fn diagnostics(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .flat_map(|outcome| outcome.diagnostics.iter().map(String::as_str))
            .collect()
    }

    pub fn outcome(&self, check: CheckKind) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|outcome| outcome.check == check)
    }

    pub fn failed_checks(&self) -> Vec<CheckKind> {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.passed)
            .map(|outcome| outcome.check)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing(check: CheckKind, message: &str) -> CheckOutcome {
        let mut outcome = CheckOutcome::new(check);
        outcome.fail(message);
        outcome
    }

    #[test]
    fn verdict_is_the_and_of_outcomes() {
        let result = ValidationResult::from_outcomes(
            vec![
                CheckOutcome::new(CheckKind::Weight),
                failing(CheckKind::Crew, "Requires 10 crew and only has 4"),
            ],
            false,
        );
        assert!(!result.legal);
        assert!(!result.overridden);
        assert_eq!(result.failed_checks(), vec![CheckKind::Crew]);
    }

    #[test]
    fn canon_override_keeps_diagnostics() {
        let outcomes = vec![
            failing(CheckKind::Armor, "armor"),
            failing(CheckKind::Crew, "crew"),
        ];
        let result = ValidationResult::from_outcomes(outcomes, true);
        assert!(result.legal);
        assert!(result.overridden);
        assert_eq!(result.diagnostics(), vec!["armor", "crew"]);
    }

    #[test]
    fn override_on_a_legal_design_is_not_marked() {
        let result = ValidationResult::from_outcomes(vec![CheckOutcome::skipped(CheckKind::Armor)], true);
        assert!(result.legal);
        assert!(!result.overridden);
        assert!(result.diagnostics().is_empty());
    }
}
