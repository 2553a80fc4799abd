//! Mapping from physical quantities to display quantities

use serde::{Deserialize, Serialize};
use std::fmt;

use super::units::{ORBIT_SCALE, PLANET_INFLATION, RADIUS_SCALE, SUN_EARTH_RATIO};

/// Best guess at a planet's type from its radius alone.
///
/// Mass would improve the guess but Kepler transit data does not carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlanetType {
    SubEarth,
    Terrestrial,
    SuperEarth,
    IceGiant,
    GasGiant,
}

impl PlanetType {
    pub const ALL: [PlanetType; 5] = [
        PlanetType::SubEarth,
        PlanetType::Terrestrial,
        PlanetType::SuperEarth,
        PlanetType::IceGiant,
        PlanetType::GasGiant,
    ];

    /// Classify by radius in Earth radii. Each band's upper bound is exclusive.
    pub fn from_earth_radii(earth_radii: f64) -> Self {
        if earth_radii < 0.75 {
            PlanetType::SubEarth
        } else if earth_radii < 1.5 {
            PlanetType::Terrestrial
        } else if earth_radii < 2.5 {
            PlanetType::SuperEarth
        } else if earth_radii < 8.0 {
            PlanetType::IceGiant
        } else {
            PlanetType::GasGiant
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlanetType::SubEarth => "Sub-Earth",
            PlanetType::Terrestrial => "Terrestrial",
            PlanetType::SuperEarth => "Super-Earth",
            PlanetType::IceGiant => "Ice Giant",
            PlanetType::GasGiant => "Gas Giant",
        }
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pixel scales for celestial radii and orbits.
///
/// Carried as a value rather than global constants so the whole pipeline can be driven
/// at any scale; the defaults are 36 px per solar radius and 600 px per AU.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalScale {
    /// Pixels per solar radius
    pub radius_scale: f64,
    /// Pixels per astronomical unit
    pub orbit_scale: f64,
}

impl Default for PhysicalScale {
    fn default() -> Self {
        Self::new(RADIUS_SCALE, ORBIT_SCALE)
    }
}

impl PhysicalScale {
    pub const fn new(radius_scale: f64, orbit_scale: f64) -> Self {
        Self {
            radius_scale,
            orbit_scale,
        }
    }

    /// Display radius of a planet.
    ///
    /// Planets are inflated tenfold relative to their star so that Earth-sized bodies
    /// remain visible. Negative radii are not physical and saturate to zero.
    pub fn planet_radius_pixels(&self, earth_radii: f64) -> u32 {
        (earth_radii / (SUN_EARTH_RATIO / PLANET_INFLATION) * self.radius_scale).round() as u32
    }

    /// Display radius of a star, unrounded
    pub fn star_radius_pixels(&self, sol_radii: f64) -> f64 {
        sol_radii * self.radius_scale
    }

    /// Display radius of an orbit with semi-major axis `axis_au`
    pub fn orbit_pixels(&self, axis_au: f64) -> u32 {
        (axis_au * self.orbit_scale).round() as u32
    }

    /// Display radius of Earth's orbit, the smallest orbit the viewport is fitted to
    pub fn earth_orbit_pixels(&self) -> u32 {
        self.orbit_pixels(1.0)
    }
}

pub fn probable_type(earth_radii: f64) -> PlanetType {
    PlanetType::from_earth_radii(earth_radii)
}
