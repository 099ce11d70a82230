//! Engine, drive core, controls, fuel and sail weights.

use crate::hull::{DriveCore, Hull};
use crate::rounding::{ceil_ton, round, round_half_ton, Granularity, RoundMode};

use super::tables::{
    FREE_HEAT_SINK_BASE, FUEL_PUMP_FRACTION, LF_BATTERY_FRACTION, PRIMITIVE_CONTROL,
    PRIMITIVE_ENGINE, PRIMITIVE_SAIL, STANDARD_ENGINE, STATION_KEEPING_ENGINE,
};

/// Engine tonnage, to the nearest half ton.
///
/// A safe thrust of zero is a station-keeping drive, which ignores hull era.
pub fn engine_tonnage(hull: Hull, tonnage: f64, safe_thrust: u32, build_year: u32) -> f64 {
    let thrust = f64::from(safe_thrust);
    let raw = if safe_thrust == 0 {
        tonnage * STATION_KEEPING_ENGINE
    } else if hull.primitive {
        tonnage * thrust * PRIMITIVE_ENGINE.lookup(build_year)
    } else {
        tonnage * thrust * STANDARD_ENGINE
    };
    round_half_ton(raw)
}

/// Heat sinks whose weight is included in the engine.
pub fn free_heat_sinks(primitive: bool, engine_tonnage: f64) -> u32 {
    let factor = if primitive { 1.0 } else { 2.0 };
    let free = FREE_HEAT_SINK_BASE + (engine_tonnage * factor).sqrt();
    round(free, Granularity::Ton, RoundMode::Floor) as u32
}

/// One ton for every heat sink beyond the free allotment.
pub fn heat_sink_weight(count: u32, free: u32) -> f64 {
    f64::from(count.saturating_sub(free))
}

pub fn kf_drive_weight(drive_core: DriveCore, tonnage: f64) -> f64 {
    ceil_ton(tonnage * drive_core.mass_fraction())
}

pub fn lf_battery_weight(fitted: bool, tonnage: f64) -> f64 {
    if fitted {
        tonnage * LF_BATTERY_FRACTION
    } else {
        0.0
    }
}

/// Bridge and control systems, rounded up to the whole ton.
pub fn control_weight(hull: Hull, tonnage: f64, build_year: u32) -> f64 {
    let multiplier = if hull.primitive {
        PRIMITIVE_CONTROL.lookup(build_year)
    } else {
        hull.class.control_multiplier()
    };
    ceil_ton(tonnage * multiplier)
}

/// Fuel plus pumps and tankage.
pub fn fuel_weight(fuel_tonnage: f64) -> f64 {
    fuel_tonnage + ceil_ton(fuel_tonnage * FUEL_PUMP_FRACTION)
}

/// Jump sail or energy collection sail.
pub fn sail_weight(hull: Hull, sail: bool, tonnage: f64, build_year: u32) -> f64 {
    if !sail {
        return 0.0;
    }
    let (divisor, offset) = if hull.primitive {
        PRIMITIVE_SAIL.lookup(build_year)
    } else {
        hull.class.sail_terms()
    };
    ceil_ton(tonnage / divisor) + offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::HullClass;

    const WARSHIP: Hull = Hull::new(HullClass::WarShip);
    const PRIMITIVE_JUMPSHIP: Hull = Hull::primitive(HullClass::JumpShip);

    #[test]
    fn station_keeping_engine() {
        let station = Hull::new(HullClass::SpaceStation);
        assert_eq!(engine_tonnage(station, 200_000.0, 0, 3050), 2400.0);
    }

    #[test]
    fn thrust_engines_by_era() {
        assert_eq!(engine_tonnage(WARSHIP, 500_000.0, 3, 3050), 90_000.0);
        assert_eq!(engine_tonnage(PRIMITIVE_JUMPSHIP, 100_000.0, 1, 2150), 12_000.0);
        assert_eq!(engine_tonnage(PRIMITIVE_JUMPSHIP, 100_000.0, 1, 2251), 6600.0);
        assert_eq!(engine_tonnage(PRIMITIVE_JUMPSHIP, 100_000.0, 1, 2300), 6000.0);
    }

    #[test]
    fn free_heat_sinks_depend_on_primitive_flag() {
        // 45 + sqrt(2400 * 2) = 114.28
        assert_eq!(free_heat_sinks(false, 2400.0), 114);
        // 45 + sqrt(2400) = 93.98
        assert_eq!(free_heat_sinks(true, 2400.0), 93);
        assert_eq!(heat_sink_weight(100, 114), 0.0);
        assert_eq!(heat_sink_weight(120, 114), 6.0);
    }

    #[test]
    fn control_weight_rounds_up() {
        assert_eq!(control_weight(WARSHIP, 500_000.0, 3050), 1250.0);
        assert_eq!(control_weight(Hull::new(HullClass::SpaceStation), 200_500.0, 3050), 201.0);
        assert_eq!(control_weight(PRIMITIVE_JUMPSHIP, 100_000.0, 2100), 625.0);
    }

    #[test]
    fn fuel_adds_pump_overhead() {
        assert_eq!(fuel_weight(1000.0), 1020.0);
        assert_eq!(fuel_weight(1010.0), 1031.0);
        assert_eq!(fuel_weight(0.0), 0.0);
    }

    #[test]
    fn sail_weight_by_hull() {
        assert_eq!(sail_weight(WARSHIP, false, 500_000.0, 3050), 0.0);
        assert_eq!(sail_weight(WARSHIP, true, 500_000.0, 3050), 55.0);
        assert_eq!(sail_weight(Hull::new(HullClass::JumpShip), true, 100_000.0, 3050), 44.0);
        assert_eq!(sail_weight(PRIMITIVE_JUMPSHIP, true, 100_000.0, 2200), 350.0);
        assert_eq!(sail_weight(PRIMITIVE_JUMPSHIP, true, 100_000.0, 2270), 88.0);
    }

    #[test]
    fn drive_core_weight() {
        assert_eq!(kf_drive_weight(DriveCore::Standard, 100_000.0), 95_000.0);
        assert_eq!(kf_drive_weight(DriveCore::Compact, 500_000.0), 226_250.0);
        assert_eq!(kf_drive_weight(DriveCore::None, 500_000.0), 0.0);
    }
}
