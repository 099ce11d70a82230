//! Capital armor records.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hull::HullClass;
use crate::tech::TechRecord;

use super::equipment::EquipmentFlags;

/// Armor points per ton for each hull class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointsPerTon {
    pub jump_ship: f64,
    pub war_ship: f64,
    pub space_station: f64,
}

impl PointsPerTon {
    pub fn for_class(&self, class: HullClass) -> f64 {
        match class {
            HullClass::JumpShip => self.jump_ship,
            HullClass::WarShip => self.war_ship,
            HullClass::SpaceStation => self.space_station,
        }
    }

    fn values(&self) -> [f64; 3] {
        [self.jump_ship, self.war_ship, self.space_station]
    }
}

/// An armor type from the reference catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmorType {
    pub id: String,
    pub name: String,
    pub flags: EquipmentFlags,
    pub points_per_ton: PointsPerTon,
    /// Clan-built variant, when the armor is produced with a different yield.
    pub clan_points_per_ton: Option<PointsPerTon>,
    pub tech: TechRecord,
}

impl ArmorType {
    /// Armor points per ton for a hull class and tech base.
    pub fn points_per_ton(&self, class: HullClass, clan: bool) -> f64 {
        match (clan, &self.clan_points_per_ton) {
            (true, Some(clan_ppt)) => clan_ppt.for_class(class),
            _ => self.points_per_ton.for_class(class),
        }
    }

    /// Whether the armor may be fitted to advanced aerospace hulls.
    pub fn is_capital(&self) -> bool {
        self.flags.contains(EquipmentFlags::JS_EQUIPMENT)
    }

    pub fn is_primitive(&self) -> bool {
        self.flags.contains(EquipmentFlags::PRIMITIVE)
    }

    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::CatalogValidation {
                message: "armor id must not be empty".to_string(),
            });
        }
        let tables = std::iter::once(&self.points_per_ton).chain(self.clan_points_per_ton.iter());
        for table in tables {
            if table.values().iter().any(|v| !v.is_finite() || *v <= 0.0) {
                return Err(Error::CatalogValidation {
                    message: format!(
                        "points per ton for armor '{}' must be finite positive numbers",
                        self.id
                    ),
                });
            }
        }
        Ok(())
    }
}
