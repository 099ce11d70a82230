//! Tonnage rounding primitives.
//!
//! Every weight formula states explicitly which granularity and direction it
//! rounds with. Values that sit within [`SNAP_EPSILON`] of a granularity step are
//! treated as exactly on that step before rounding, so products such as
//! `500_000.0 * 0.0025` round up to `1250` rather than `1251`.

use serde::{Deserialize, Serialize};

/// Tolerance (in granularity steps) absorbed before directional rounding.
pub const SNAP_EPSILON: f64 = 1e-6;

/// The unit a weight is rounded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// Whole tons.
    Ton,
    /// Half tons.
    HalfTon,
}

impl Granularity {
    /// Number of granularity steps per ton.
    pub const fn steps_per_ton(self) -> f64 {
        match self {
            Granularity::Ton => 1.0,
            Granularity::HalfTon => 2.0,
        }
    }
}

/// Direction of rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundMode {
    /// Conventional rounding, halves go up.
    Nearest,
    /// Toward positive infinity.
    Ceil,
    /// Toward negative infinity.
    Floor,
}

/// Round `value` to `granularity` using `mode`.
pub fn round(value: f64, granularity: Granularity, mode: RoundMode) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let steps = granularity.steps_per_ton();
    let scaled = value * steps;
    let nearest_step = scaled.round();
    let scaled = if (scaled - nearest_step).abs() < SNAP_EPSILON {
        nearest_step
    } else {
        scaled
    };
    let rounded = match mode {
        // f64::round rounds half away from zero; half-up wants floor(x + 0.5).
        RoundMode::Nearest => (scaled + 0.5).floor(),
        RoundMode::Ceil => scaled.ceil(),
        RoundMode::Floor => scaled.floor(),
    };
    rounded / steps
}

pub fn round_half_ton(value: f64) -> f64 {
    round(value, Granularity::HalfTon, RoundMode::Nearest)
}

pub fn ceil_ton(value: f64) -> f64 {
    round(value, Granularity::Ton, RoundMode::Ceil)
}

pub fn ceil_half_ton(value: f64) -> f64 {
    round(value, Granularity::HalfTon, RoundMode::Ceil)
}

pub fn floor_half_ton(value: f64) -> f64 {
    round(value, Granularity::HalfTon, RoundMode::Floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODES: [RoundMode; 3] = [RoundMode::Nearest, RoundMode::Ceil, RoundMode::Floor];
    const GRANULARITIES: [Granularity; 2] = [Granularity::Ton, Granularity::HalfTon];

    #[test]
    fn nearest_rounds_halves_up() {
        assert_eq!(round(2.5, Granularity::Ton, RoundMode::Nearest), 3.0);
        assert_eq!(round(2.25, Granularity::HalfTon, RoundMode::Nearest), 2.5);
        assert_eq!(round(2.2, Granularity::HalfTon, RoundMode::Nearest), 2.0);
        assert_eq!(round(-2.5, Granularity::Ton, RoundMode::Nearest), -2.0);
    }

    #[test]
    fn directional_modes() {
        assert_eq!(ceil_ton(10.01), 11.0);
        assert_eq!(ceil_half_ton(10.01), 10.5);
        assert_eq!(floor_half_ton(10.99), 10.5);
        assert_eq!(round(10.99, Granularity::Ton, RoundMode::Floor), 10.0);
    }

    #[test]
    fn float_noise_does_not_push_ceiling_over() {
        assert_eq!(ceil_ton(500_000.0 * 0.0025), 1250.0);
        assert_eq!(ceil_ton(200_000.0 * 0.001), 200.0);
        assert_eq!(round_half_ton(200_000.0 * 0.012), 2400.0);
    }

    #[test]
    fn rounding_is_idempotent() {
        let samples = [0.0, 0.1, 0.25, 0.5, 0.75, 1.3, 17.74, 2400.0, 1249.999_999_9, 33.333];
        for value in samples {
            for granularity in GRANULARITIES {
                for mode in MODES {
                    let once = round(value, granularity, mode);
                    assert_eq!(round(once, granularity, mode), once, "{value} {granularity:?} {mode:?}");
                }
            }
        }
    }
}
