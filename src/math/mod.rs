pub mod color;
pub mod scale;
pub mod units;

pub use color::*;
pub use scale::*;
pub use units::*;

use glam::DVec2;

pub const TAU: f64 = std::f64::consts::TAU;

/// Mathematical utilities for laying out a top-down orbital diagram
pub struct MathUtils;

impl MathUtils {
    /// Round to a fixed number of decimal places, as shown in result summaries
    pub fn round_to(value: f64, precision: i32) -> f64 {
        let factor = 10f64.powi(precision);
        (value * factor).round() / factor
    }

    /// Point on a circular orbit of `radius` around `center` at `angle` radians
    #[inline]
    pub fn orbit_point(center: DVec2, radius: f64, angle: f64) -> DVec2 {
        center + DVec2::new(angle.cos(), angle.sin()) * radius
    }

    /// Angle swept after `elapsed_ms` on an orbit completing one revolution every
    /// `period_seconds` display seconds. Position is a pure function of wall-clock time,
    /// so a resumed animation lands exactly where an uninterrupted one would.
    pub fn orbital_angle(period_seconds: f64, elapsed_ms: f64) -> f64 {
        if !(period_seconds.is_finite() && period_seconds > 0.0) {
            return 0.0;
        }
        (TAU / (period_seconds * 1000.0)) * elapsed_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(MathUtils::round_to(1.23456, 2), 1.23);
        assert_eq!(MathUtils::round_to(0.0456, 2), 0.05);
        assert_eq!(MathUtils::round_to(12.5, 0), 13.0);
    }

    #[test]
    fn test_orbit_point() {
        let center = DVec2::new(700.0, 450.0);

        assert_eq!(MathUtils::orbit_point(center, 600.0, 0.0), DVec2::new(1300.0, 450.0));

        let quarter = MathUtils::orbit_point(center, 600.0, TAU / 4.0);
        assert!((quarter - DVec2::new(700.0, 1050.0)).length() < 1e-9);
    }

    #[test]
    fn test_orbital_angle() {
        // A 365 second display period completes one revolution in 365 000 ms
        let angle = MathUtils::orbital_angle(365.0, 365_000.0);
        assert!((angle - TAU).abs() < 1e-12);

        let half = MathUtils::orbital_angle(2.0, 1_000.0);
        assert!((half - TAU / 2.0).abs() < 1e-12);

        assert_eq!(MathUtils::orbital_angle(0.0, 1_000.0), 0.0);
        assert_eq!(MathUtils::orbital_angle(f64::NAN, 1_000.0), 0.0);
    }

    #[test]
    fn test_orbital_angle_is_time_driven() {
        // Same timestamp, same angle, no matter how many frames were drawn in between
        let now = 1_700_000_000_123.0;
        assert_eq!(
            MathUtils::orbital_angle(88.0, now),
            MathUtils::orbital_angle(88.0, now)
        );
    }
}
