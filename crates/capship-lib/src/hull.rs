//! Hull classes, drive cores, firing arcs and era tables.
//!
//! Hull-dependent formula constants live on [`HullClass`] as exhaustive matches,
//! so adding a class is a compile-time checked change across every formula.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of advanced aerospace hull.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HullClass {
    JumpShip,
    WarShip,
    SpaceStation,
}

impl HullClass {
    /// Human-readable label shown in reports.
    pub fn label(self) -> &'static str {
        match self {
            HullClass::JumpShip => "JumpShip",
            HullClass::WarShip => "WarShip",
            HullClass::SpaceStation => "Space Station",
        }
    }

    /// WarShips and stations share the larger crew and fire-control allowances.
    pub fn is_capital_crewed(self) -> bool {
        matches!(self, HullClass::WarShip | HullClass::SpaceStation)
    }

    /// Divisor applied to `SI × tonnage` to obtain structure weight.
    pub(crate) fn structure_divisor(self) -> f64 {
        match self {
            HullClass::WarShip => 1000.0,
            HullClass::SpaceStation => 100.0,
            HullClass::JumpShip => 150.0,
        }
    }

    /// `(divisor, flat bonus)` applied to `SI × tonnage` for maximum armor tonnage.
    pub(crate) fn armor_weight_terms(self) -> (f64, f64) {
        match self {
            HullClass::WarShip => (50_000.0, 0.0),
            HullClass::SpaceStation => (300.0, 60.0),
            HullClass::JumpShip => (1800.0, 0.0),
        }
    }

    /// Weapon slots allowed per firing arc before extra fire control is required.
    pub(crate) fn slots_per_arc(self) -> u32 {
        match self {
            HullClass::JumpShip => 12,
            HullClass::WarShip | HullClass::SpaceStation => 20,
        }
    }

    /// Control system weight multiplier for non-primitive hulls.
    pub(crate) fn control_multiplier(self) -> f64 {
        match self {
            HullClass::SpaceStation => 0.001,
            HullClass::JumpShip | HullClass::WarShip => 0.0025,
        }
    }

    /// `(divisor, offset)` of the non-primitive sail formula `⌈t / divisor⌉ + offset`.
    pub(crate) fn sail_terms(self) -> (f64, f64) {
        match self {
            HullClass::WarShip => (20_000.0, 30.0),
            HullClass::JumpShip | HullClass::SpaceStation => (7500.0, 30.0),
        }
    }

    /// `(base crew, tons per additional crew member)`.
    pub(crate) fn crew_terms(self) -> (u32, f64) {
        match self {
            HullClass::WarShip | HullClass::SpaceStation => (45, 5000.0),
            HullClass::JumpShip => (6, 20_000.0),
        }
    }

    /// Largest legal gravity deck diameter in meters.
    pub(crate) fn max_grav_deck_diameter(self) -> u32 {
        match self {
            HullClass::SpaceStation => GRAV_DECK_HUGE_MAX,
            HullClass::JumpShip | HullClass::WarShip => GRAV_DECK_LARGE_MAX,
        }
    }

    /// Firing arcs available to this hull.
    pub fn arcs(self) -> &'static [Arc] {
        match self {
            HullClass::WarShip => &Arc::WARSHIP,
            HullClass::JumpShip | HullClass::SpaceStation => &Arc::ARMOR_FACINGS,
        }
    }
}

impl fmt::Display for HullClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hull class plus the primitive marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hull {
    pub class: HullClass,
    #[serde(default)]
    pub primitive: bool,
}

impl Hull {
    pub const fn new(class: HullClass) -> Self {
        Self {
            class,
            primitive: false,
        }
    }

    pub const fn primitive(class: HullClass) -> Self {
        Self {
            class,
            primitive: true,
        }
    }
}

impl fmt::Display for Hull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.primitive {
            write!(f, "Primitive {}", self.class)
        } else {
            write!(f, "{}", self.class)
        }
    }
}

/// Kearny-Fuchida drive core fitted to the hull.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveCore {
    #[default]
    Standard,
    Compact,
    Subcompact,
    None,
}

impl DriveCore {
    /// Smallest legal hull tonnage for this core.
    pub fn min_tonnage(self) -> f64 {
        match self {
            DriveCore::Compact => 100_000.0,
            DriveCore::Subcompact => 5000.0,
            DriveCore::None => 2000.0,
            DriveCore::Standard => 50_000.0,
        }
    }

    /// Hull tonnage must be a multiple of this increment.
    pub fn weight_increment(self) -> f64 {
        match self {
            DriveCore::Compact => 10_000.0,
            DriveCore::Subcompact => 100.0,
            DriveCore::None => 500.0,
            DriveCore::Standard => 1000.0,
        }
    }

    /// Fraction of hull tonnage taken by the drive core.
    pub(crate) fn mass_fraction(self) -> f64 {
        match self {
            DriveCore::Standard => 0.95,
            DriveCore::Compact | DriveCore::Subcompact => 0.4525,
            DriveCore::None => 0.0,
        }
    }
}

/// Firing arcs and armor facings.
///
/// The first six variants are the armor facings shared by every hull; the two
/// broadsides exist only on WarShips and never carry armor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arc {
    Nose,
    ForwardLeft,
    ForwardRight,
    AftLeft,
    AftRight,
    Aft,
    BroadsideLeft,
    BroadsideRight,
}

impl Arc {
    pub const ARMOR_FACINGS: [Arc; 6] = [
        Arc::Nose,
        Arc::ForwardLeft,
        Arc::ForwardRight,
        Arc::AftLeft,
        Arc::AftRight,
        Arc::Aft,
    ];

    pub const WARSHIP: [Arc; 8] = [
        Arc::Nose,
        Arc::ForwardLeft,
        Arc::ForwardRight,
        Arc::AftLeft,
        Arc::AftRight,
        Arc::Aft,
        Arc::BroadsideLeft,
        Arc::BroadsideRight,
    ];

    /// Whether armor can be placed on this arc (broadsides excluded).
    pub fn is_armor_facing(self) -> bool {
        !matches!(self, Arc::BroadsideLeft | Arc::BroadsideRight)
    }

    /// Short location code used in listings.
    pub fn abbr(self) -> &'static str {
        match self {
            Arc::Nose => "NOS",
            Arc::ForwardLeft => "FLS",
            Arc::ForwardRight => "FRS",
            Arc::AftLeft => "ALS",
            Arc::AftRight => "ARS",
            Arc::Aft => "AFT",
            Arc::BroadsideLeft => "LBS",
            Arc::BroadsideRight => "RBS",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Arc::Nose => "Nose",
            Arc::ForwardLeft => "Forward Left",
            Arc::ForwardRight => "Forward Right",
            Arc::AftLeft => "Aft Left",
            Arc::AftRight => "Aft Right",
            Arc::Aft => "Aft",
            Arc::BroadsideLeft => "Left Broadside",
            Arc::BroadsideRight => "Right Broadside",
        }
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Left/right arc pairs whose weapon loads must mirror each other.
pub const LATERAL_PAIRS: [(Arc, Arc); 3] = [
    (Arc::ForwardLeft, Arc::ForwardRight),
    (Arc::AftLeft, Arc::AftRight),
    (Arc::BroadsideLeft, Arc::BroadsideRight),
];

/// Largest standard gravity deck diameter in meters.
pub const GRAV_DECK_STANDARD_MAX: u32 = 100;
/// Largest large gravity deck diameter in meters.
pub const GRAV_DECK_LARGE_MAX: u32 = 250;
/// Largest huge gravity deck diameter in meters.
pub const GRAV_DECK_HUGE_MAX: u32 = 1500;

/// Ordered era table: the first row whose `from_year` is at or below the build
/// year wins, otherwise `fallback` applies.
///
/// Rows must be sorted by descending `from_year`.
#[derive(Debug, Clone, Copy)]
pub struct YearTable<T: 'static> {
    pub rows: &'static [(u32, T)],
    pub fallback: T,
}

impl<T: Copy> YearTable<T> {
    pub fn lookup(&self, year: u32) -> T {
        self.rows
            .iter()
            .find(|(from_year, _)| year >= *from_year)
            .map(|(_, value)| *value)
            .unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: YearTable<f64> = YearTable {
        rows: &[(2300, 1.0), (2200, 2.0)],
        fallback: 3.0,
    };

    #[test]
    fn year_table_selects_first_matching_row() {
        assert_eq!(TABLE.lookup(2350), 1.0);
        assert_eq!(TABLE.lookup(2300), 1.0);
        assert_eq!(TABLE.lookup(2299), 2.0);
        assert_eq!(TABLE.lookup(2200), 2.0);
        assert_eq!(TABLE.lookup(2199), 3.0);
    }

    #[test]
    fn only_warships_have_broadsides() {
        assert_eq!(HullClass::WarShip.arcs().len(), 8);
        assert!(HullClass::JumpShip
            .arcs()
            .iter()
            .all(|arc| arc.is_armor_facing()));
    }
}
