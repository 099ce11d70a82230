//! Tech-legality oracle.
//!
//! Era and faction legality is owned by an external rules service; the verifier
//! only asks "is this record legal in this context". [`IntroductionDateOracle`]
//! is a simple date/tech-base implementation for command-line use and tests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Technology base of an item or of the ruleset context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechBase {
    /// Usable by anyone.
    #[default]
    All,
    InnerSphere,
    Clan,
}

impl TechBase {
    pub fn label(self) -> &'static str {
        match self {
            TechBase::All => "All",
            TechBase::InnerSphere => "Inner Sphere",
            TechBase::Clan => "Clan",
        }
    }
}

impl fmt::Display for TechBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TechBase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" | "any" => Ok(TechBase::All),
            "is" | "inner_sphere" | "innersphere" | "inner sphere" => Ok(TechBase::InnerSphere),
            "clan" | "cl" => Ok(TechBase::Clan),
            other => Err(Error::CatalogValidation {
                message: format!("unknown tech base '{other}'"),
            }),
        }
    }
}

/// Tech metadata carried by every catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TechRecord {
    pub tech_base: TechBase,
    /// Year the item enters production; 0 when always available.
    pub intro_year: u32,
    pub unofficial: bool,
}

/// Ruleset context a design is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechContext {
    /// Game year; `None` disables date checks.
    pub year: Option<u32>,
    /// Faction tech base; `All` means mixed tech is permitted.
    pub tech_base: TechBase,
    pub allow_unofficial: bool,
}

impl Default for TechContext {
    fn default() -> Self {
        Self {
            year: None,
            tech_base: TechBase::All,
            allow_unofficial: true,
        }
    }
}

/// Answers whether a record may be used under a ruleset context.
pub trait TechOracle: Send + Sync {
    fn is_legal(&self, record: &TechRecord, context: &TechContext) -> bool;
}

/// Oracle that accepts everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveOracle;

impl TechOracle for PermissiveOracle {
    fn is_legal(&self, _record: &TechRecord, _context: &TechContext) -> bool {
        true
    }
}

/// Oracle keyed on introduction year, tech base and the unofficial marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntroductionDateOracle;

impl TechOracle for IntroductionDateOracle {
    fn is_legal(&self, record: &TechRecord, context: &TechContext) -> bool {
        if record.unofficial && !context.allow_unofficial {
            return false;
        }
        if let Some(year) = context.year {
            if record.intro_year > year {
                return false;
            }
        }
        match (context.tech_base, record.tech_base) {
            (TechBase::All, _) | (_, TechBase::All) => true,
            (wanted, have) => wanted == have,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tech_base: TechBase, intro_year: u32, unofficial: bool) -> TechRecord {
        TechRecord {
            tech_base,
            intro_year,
            unofficial,
        }
    }

    #[test]
    fn introduction_date_oracle_honours_year_base_and_unofficial() {
        let oracle = IntroductionDateOracle;
        let ctx = TechContext {
            year: Some(3050),
            tech_base: TechBase::InnerSphere,
            allow_unofficial: false,
        };

        assert!(oracle.is_legal(&record(TechBase::InnerSphere, 2700, false), &ctx));
        assert!(oracle.is_legal(&record(TechBase::All, 2300, false), &ctx));
        assert!(!oracle.is_legal(&record(TechBase::InnerSphere, 3067, false), &ctx));
        assert!(!oracle.is_legal(&record(TechBase::Clan, 2830, false), &ctx));
        assert!(!oracle.is_legal(&record(TechBase::InnerSphere, 3051, true), &ctx));
    }

    #[test]
    fn default_context_allows_everything_dated() {
        let oracle = IntroductionDateOracle;
        let ctx = TechContext::default();
        assert!(oracle.is_legal(&record(TechBase::Clan, 3100, true), &ctx));
    }

    #[test]
    fn parses_tech_base_aliases() {
        assert_eq!("IS".parse::<TechBase>().unwrap(), TechBase::InnerSphere);
        assert_eq!("clan".parse::<TechBase>().unwrap(), TechBase::Clan);
        assert_eq!("".parse::<TechBase>().unwrap(), TechBase::All);
        assert!("martian".parse::<TechBase>().is_err());
    }
}
