use std::collections::BTreeMap;

use crate::math::{self, Color, PhysicalScale};
use crate::{ExplorerError, ExplorerResult};

use super::record::{Record, fields};
use super::{Planet, PlanetId, StarId};

/// A Kepler host star and its known planets.
///
/// Built once per result set and never mutated; selecting another star builds a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    star_id: StarId,
    sol_radii: f64,
    /// Effective temperature in Kelvin
    temperature: u32,
    planets: BTreeMap<PlanetId, Planet>,
}

impl Star {
    /// Build a star from planets already known to orbit it
    pub fn new(
        star_id: StarId,
        sol_radii: f64,
        temperature: u32,
        planets: impl IntoIterator<Item = Planet>,
    ) -> ExplorerResult<Self> {
        let mut star = Self {
            star_id,
            sol_radii,
            temperature,
            planets: BTreeMap::new(),
        };
        for planet in planets {
            if planet.star_id() != star_id {
                return Err(ExplorerError::InvalidInput(format!(
                    "planet {} does not orbit star {}",
                    planet.planet_id(),
                    star_id
                )));
            }
            star.planets.insert(planet.planet_id(), planet);
        }
        Ok(star)
    }

    /// Build a star from result rows sharing one star identity.
    ///
    /// Stellar fields come from the first row; every row contributes one planet.
    pub fn from_result_set(records: &[Record]) -> ExplorerResult<Self> {
        let first = records.first().ok_or_else(|| {
            ExplorerError::InvalidInput("cannot build a star from an empty result set".into())
        })?;

        let star_id = first.planet_id()?.star_id();
        let sol_radii = first.number(fields::STAR_RADIUS)?;
        let temperature = first.kelvin(fields::STAR_TEMPERATURE)?;

        let planets = records
            .iter()
            .map(Planet::from_record)
            .collect::<ExplorerResult<Vec<_>>>()?;

        Self::new(star_id, sol_radii, temperature, planets)
    }

    pub fn star_id(&self) -> StarId {
        self.star_id
    }

    pub fn sol_radii(&self) -> f64 {
        self.sol_radii
    }

    pub fn temperature(&self) -> u32 {
        self.temperature
    }

    pub fn planets(&self) -> &BTreeMap<PlanetId, Planet> {
        &self.planets
    }

    pub fn planet(&self, planet_id: PlanetId) -> Option<&Planet> {
        self.planets.get(&planet_id)
    }

    pub fn radius_pixels(&self, scale: &PhysicalScale) -> f64 {
        scale.star_radius_pixels(self.sol_radii)
    }

    /// Stars are always colored as blackbodies
    pub fn color(&self) -> Color {
        math::color_from_temperature(self.temperature)
    }

    pub fn label(&self) -> String {
        format!("Kepler Star {}", self.star_id)
    }
}
