//! Physical constants and default display scales for exoplanet diagrams

/// Ratio of the Sun's radius to the Earth's radius
pub const SUN_EARTH_RATIO: f64 = 109.0;

/// Planets are drawn this many times larger than true proportion so they stay
/// visible next to their star
pub const PLANET_INFLATION: f64 = 10.0;

/// Default pixels per solar radius
pub const RADIUS_SCALE: f64 = 36.0;

/// Default pixels per astronomical unit (Earth's orbital radius)
pub const ORBIT_SCALE: f64 = 600.0;

/// Planets hotter than this glow, and are colored as blackbodies
pub const GLOWING_TEMPERATURE_KELVIN: u32 = 1000;

/// Conversion utilities for time scales
pub mod time {
    /// Display seconds of animation per orbital period; one display second stands for
    /// one Earth day.
    pub fn orbital_period_seconds(period_days: f64) -> f64 {
        period_days
    }
}
