//! Equipment reference records.

use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hull::HullClass;
use crate::tech::TechRecord;

bitflags! {
    /// Rule markers queried by the construction checks.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct EquipmentFlags: u32 {
        /// Capital-scale weapon.
        const CAPITAL         = 1 << 0;
        /// Screen launcher (crewed like a capital weapon).
        const SCREEN_LAUNCHER = 1 << 1;
        /// Carries its own single-use ammunition.
        const ONE_SHOT        = 1 << 2;
        /// Ultra autocannon family (double ammo requirement in bays).
        const ULTRA           = 1 << 3;
        /// Rotary autocannon family (six-fold ammo requirement in bays).
        const ROTARY          = 1 << 4;
        /// Weapon may be mounted on aerospace units.
        const AERO            = 1 << 5;
        /// Naval C3 network (doubles extra fire control weight).
        const NAVAL_C3        = 1 << 6;
        /// Misc equipment mountable on JumpShips.
        const JS_EQUIPMENT    = 1 << 7;
        /// Misc equipment mountable on WarShips.
        const WS_EQUIPMENT    = 1 << 8;
        /// Misc equipment mountable on space stations.
        const SS_EQUIPMENT    = 1 << 9;
        /// Primitive capital armor.
        const PRIMITIVE       = 1 << 10;
    }
}

impl EquipmentFlags {
    /// Category flag a misc item must carry to be mounted on `class`.
    pub fn category_for(class: HullClass) -> Self {
        match class {
            HullClass::JumpShip => EquipmentFlags::JS_EQUIPMENT,
            HullClass::WarShip => EquipmentFlags::WS_EQUIPMENT,
            HullClass::SpaceStation => EquipmentFlags::SS_EQUIPMENT,
        }
    }

    /// Parse a `|`, `;` or whitespace separated list of flag names.
    pub fn parse_list(raw: &str) -> Result<Self> {
        let mut flags = EquipmentFlags::empty();
        for token in raw
            .split(|c: char| c == '|' || c == ';' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let name = token.to_ascii_uppercase();
            let flag =
                EquipmentFlags::from_name(&name).ok_or_else(|| Error::CatalogValidation {
                    message: format!("unknown equipment flag '{token}'"),
                })?;
            flags |= flag;
        }
        Ok(flags)
    }
}

/// Broad kind of an equipment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentKind {
    Weapon,
    Misc,
    Ammo,
}

impl FromStr for EquipmentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weapon" => Ok(EquipmentKind::Weapon),
            "misc" | "equipment" => Ok(EquipmentKind::Misc),
            "ammo" | "ammunition" => Ok(EquipmentKind::Ammo),
            other => Err(Error::CatalogValidation {
                message: format!("unknown equipment kind '{other}'"),
            }),
        }
    }
}

/// Mass driver size classes, each with a minimum hull tonnage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassDriverClass {
    Light,
    Medium,
    Heavy,
}

impl MassDriverClass {
    pub fn min_vessel_tonnage(self) -> f64 {
        match self {
            MassDriverClass::Light => 750_000.0,
            MassDriverClass::Medium => 1_500_000.0,
            MassDriverClass::Heavy => 2_000_000.0,
        }
    }

    /// Tonnage as written in diagnostics.
    pub fn min_tonnage_label(self) -> &'static str {
        match self {
            MassDriverClass::Light => "750,000",
            MassDriverClass::Medium => "1,500,000",
            MassDriverClass::Heavy => "2,000,000",
        }
    }
}

impl FromStr for MassDriverClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" | "lmass" => Ok(MassDriverClass::Light),
            "medium" | "mmass" => Ok(MassDriverClass::Medium),
            "heavy" | "hmass" => Ok(MassDriverClass::Heavy),
            other => Err(Error::CatalogValidation {
                message: format!("unknown mass driver class '{other}'"),
            }),
        }
    }
}

/// A single equipment record from the reference catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentType {
    pub id: String,
    pub name: String,
    pub kind: EquipmentKind,
    /// Tons per item, or per full ton of ammunition.
    pub tonnage: f64,
    /// Ammunition family shared by weapons and their ammo; `None` for energy weapons.
    pub ammo_family: Option<String>,
    /// Long range bracket in hexes.
    pub long_range: u32,
    /// Shots in one ton of ammunition.
    pub shots_per_ton: u32,
    /// Additional crew required to operate the item.
    pub crew: u32,
    pub mass_driver: Option<MassDriverClass>,
    pub flags: EquipmentFlags,
    pub tech: TechRecord,
}

impl EquipmentType {
    pub fn is_weapon(&self) -> bool {
        self.kind == EquipmentKind::Weapon
    }

    pub fn is_misc(&self) -> bool {
        self.kind == EquipmentKind::Misc
    }

    pub fn is_ammo(&self) -> bool {
        self.kind == EquipmentKind::Ammo
    }

    pub fn is_mass_driver(&self) -> bool {
        self.is_weapon() && self.mass_driver.is_some()
    }

    pub fn has_flag(&self, flag: EquipmentFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Capital weapons and screen launchers each need a dedicated gunner.
    pub fn is_capital_crewed(&self) -> bool {
        self.has_flag(EquipmentFlags::CAPITAL) || self.has_flag(EquipmentFlags::SCREEN_LAUNCHER)
    }

    /// Validate the record for internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::CatalogValidation {
                message: "equipment id must not be empty".to_string(),
            });
        }
        if !self.tonnage.is_finite() || self.tonnage < 0.0 {
            return Err(Error::CatalogValidation {
                message: format!("tonnage for '{}' must be finite and non-negative", self.id),
            });
        }
        if self.is_ammo() {
            if self.shots_per_ton == 0 {
                return Err(Error::CatalogValidation {
                    message: format!("ammo '{}' must declare shots_per_ton", self.id),
                });
            }
            if self.ammo_family.is_none() {
                return Err(Error::CatalogValidation {
                    message: format!("ammo '{}' must declare an ammo_family", self.id),
                });
            }
        }
        if self.mass_driver.is_some() && !self.is_weapon() {
            return Err(Error::CatalogValidation {
                message: format!("mass driver class on non-weapon '{}'", self.id),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flag_lists_case_insensitively() {
        let flags = EquipmentFlags::parse_list("capital|aero  ws_equipment;ONE_SHOT").unwrap();
        assert!(flags.contains(EquipmentFlags::CAPITAL));
        assert!(flags.contains(EquipmentFlags::AERO));
        assert!(flags.contains(EquipmentFlags::WS_EQUIPMENT));
        assert!(flags.contains(EquipmentFlags::ONE_SHOT));
        assert!(!flags.contains(EquipmentFlags::ROTARY));
    }

    #[test]
    fn rejects_unknown_flags() {
        let err = EquipmentFlags::parse_list("capital|warp_core").unwrap_err();
        assert!(err.to_string().contains("warp_core"));
    }

    #[test]
    fn empty_flag_list_is_empty() {
        assert_eq!(EquipmentFlags::parse_list("").unwrap(), EquipmentFlags::empty());
    }
}
