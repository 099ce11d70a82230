//! Fixed construction constants and era tables.

use crate::hull::YearTable;

/// Engine multiplier per ton per point of thrust for primitive hulls.
pub const PRIMITIVE_ENGINE: YearTable<f64> = YearTable {
    rows: &[(2300, 0.06), (2251, 0.066), (2201, 0.084), (2151, 0.102)],
    fallback: 0.12,
};

/// Control system multiplier per ton for primitive hulls.
pub const PRIMITIVE_CONTROL: YearTable<f64> = YearTable {
    rows: &[(2300, 0.0025), (2251, 0.00275), (2201, 0.0035), (2151, 0.005)],
    fallback: 0.00625,
};

/// `(divisor, offset)` of the primitive jump sail formula `⌈t / divisor⌉ + offset`.
pub const PRIMITIVE_SAIL: YearTable<(f64, f64)> = YearTable {
    rows: &[
        (2300, (20_000.0, 30.0)),
        (2260, (8000.0, 75.0)),
        (2230, (4000.0, 150.0)),
    ],
    fallback: (2000.0, 300.0),
};

/// Engine multiplier per ton for station-keeping drives.
pub const STATION_KEEPING_ENGINE: f64 = 0.012;
/// Engine multiplier per ton per point of thrust.
pub const STANDARD_ENGINE: f64 = 0.06;

/// Heat sinks included with the engine before the tonnage term.
pub const FREE_HEAT_SINK_BASE: f64 = 45.0;

/// Pump and tankage overhead on fuel.
pub const FUEL_PUMP_FRACTION: f64 = 0.02;
pub const LF_BATTERY_FRACTION: f64 = 0.01;

/// Armor facings that receive free structural-integrity armor.
pub const FREE_SI_FACINGS: f64 = 6.0;
/// Armor yield factor for primitive hulls.
pub const PRIMITIVE_ARMOR_FACTOR: f64 = 0.66;

/// Weapon slots taken by a single mass driver.
pub const MASS_DRIVER_SLOTS: u32 = 10;
/// Gunners required per mass driver.
pub const MASS_DRIVER_GUNNERS: u32 = 10;
/// Standard-scale weapons served by one gunner.
pub const STANDARD_WEAPONS_PER_GUNNER: u32 = 6;
/// Crew members served by one officer.
pub const CREW_PER_OFFICER: u32 = 6;

/// Lifeboat or escape pod, including the launch mechanism.
pub const LIFEBOAT_TONS: f64 = 7.0;

pub const DOCKING_HARDPOINT_TONS: f64 = 1000.0;
/// Vessels lighter than this cannot mount docking hardpoints.
pub const MIN_HARDPOINT_TONNAGE: f64 = 50_000.0;
pub const TONS_PER_HARDPOINT: f64 = 50_000.0;

pub const BASE_GRAV_DECKS: u32 = 3;
pub const TONS_PER_GRAV_DECK: f64 = 100_000.0;
pub const GRAV_DECK_STANDARD_TONS: f64 = 50.0;
pub const GRAV_DECK_LARGE_TONS: f64 = 100.0;
pub const GRAV_DECK_HUGE_TONS: f64 = 500.0;

pub const BASE_BAY_DOORS: u32 = 8;
pub const TONS_PER_BAY_DOOR: f64 = 100_000.0;

/// Usable shots each ammo-fed weapon in a bay must be supplied with.
pub const BAY_SHOTS_PER_WEAPON: u32 = 10;
pub const ULTRA_AMMO_FACTOR: u32 = 2;
pub const ROTARY_AMMO_FACTOR: u32 = 6;
