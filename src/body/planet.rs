use crate::math::{self, Color, MathUtils, PhysicalScale, PlanetType};
use crate::ExplorerResult;

use super::record::{Record, fields};
use super::{PlanetId, StarId};

/// A Kepler planet candidate.
///
/// Held by its [`Star`](super::Star) and, independently, by result lists. Clones are
/// cheap and never share mutable state.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    planet_id: PlanetId,
    /// Radius in Earth radii
    earth_radii: f64,
    /// Equilibrium temperature in Kelvin
    temperature: u32,
    /// Semi-major axis in AU
    axis: f64,
    period_days: f64,
}

impl Planet {
    pub fn new(
        planet_id: PlanetId,
        earth_radii: f64,
        temperature: u32,
        axis: f64,
        period_days: f64,
    ) -> Self {
        Self {
            planet_id,
            earth_radii,
            temperature,
            axis,
            period_days,
        }
    }

    /// Build a planet from one result row. Fails on any missing or non-numeric field.
    pub fn from_record(record: &Record) -> ExplorerResult<Self> {
        Ok(Self::new(
            record.planet_id()?,
            record.number(fields::PLANET_RADIUS)?,
            record.kelvin(fields::PLANET_TEMPERATURE)?,
            record.number(fields::AXIS)?,
            record.number(fields::PERIOD)?,
        ))
    }

    pub fn planet_id(&self) -> PlanetId {
        self.planet_id
    }

    pub fn star_id(&self) -> StarId {
        self.planet_id.star_id()
    }

    pub fn earth_radii(&self) -> f64 {
        self.earth_radii
    }

    pub fn temperature(&self) -> u32 {
        self.temperature
    }

    pub fn axis(&self) -> f64 {
        self.axis
    }

    pub fn period_days(&self) -> f64 {
        self.period_days
    }

    pub fn radius_pixels(&self, scale: &PhysicalScale) -> u32 {
        scale.planet_radius_pixels(self.earth_radii)
    }

    pub fn orbit_pixels(&self, scale: &PhysicalScale) -> u32 {
        scale.orbit_pixels(self.axis)
    }

    /// Animation period in display seconds
    pub fn period_seconds(&self) -> f64 {
        math::time::orbital_period_seconds(self.period_days)
    }

    pub fn probable_type(&self) -> PlanetType {
        PlanetType::from_earth_radii(self.earth_radii)
    }

    pub fn color(&self) -> Color {
        math::planet_color(self.temperature, self.earth_radii)
    }

    pub fn label(&self) -> String {
        format!("Kepler Planet {}", self.planet_id)
    }

    /// One-line description for result lists, e.g. `Terrestrial: 288K, 1 AU, 1 R⊕`
    pub fn summary(&self) -> String {
        format!(
            "{}: {}K, {} AU, {} R⊕",
            self.probable_type(),
            self.temperature,
            MathUtils::round_to(self.axis, 2),
            self.earth_radii
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExplorerError;

    fn earth_record() -> Record {
        Record::new()
            .with(fields::KOI, 1.01)
            .with(fields::PLANET_RADIUS, 1.0)
            .with(fields::PLANET_TEMPERATURE, 288)
            .with(fields::AXIS, 1.0)
            .with(fields::PERIOD, 365.0)
    }

    #[test]
    fn test_from_record() {
        let planet = Planet::from_record(&earth_record()).unwrap();

        assert_eq!(planet.planet_id(), PlanetId::new(1.01).unwrap());
        assert_eq!(planet.star_id(), StarId(1));
        assert_eq!(planet.earth_radii(), 1.0);
        assert_eq!(planet.temperature(), 288);
        assert_eq!(planet.axis(), 1.0);
        assert_eq!(planet.period_days(), 365.0);
    }

    #[test]
    fn test_from_record_missing_field() {
        let mut record = Record::new()
            .with(fields::KOI, 1.01)
            .with(fields::PLANET_RADIUS, 1.0)
            .with(fields::PLANET_TEMPERATURE, 288)
            .with(fields::PERIOD, 365.0);

        let err = Planet::from_record(&record).unwrap_err();
        assert!(matches!(err, ExplorerError::InvalidInput(ref msg) if msg.contains("A")));

        record = record.with(fields::AXIS, serde_json::Value::Null);
        assert!(Planet::from_record(&record).is_err());
    }

    #[test]
    fn test_derived_attributes() {
        let planet = Planet::from_record(&earth_record()).unwrap();
        let scale = PhysicalScale::default();

        assert_eq!(planet.radius_pixels(&scale), 3);
        assert_eq!(planet.orbit_pixels(&scale), 600);
        assert_eq!(planet.period_seconds(), 365.0);
        assert_eq!(planet.probable_type(), PlanetType::Terrestrial);
        assert_eq!(planet.color(), Color::EARTH);
    }

    #[test]
    fn test_hot_planet_color() {
        let planet = Planet::new(PlanetId::new(13.01).unwrap(), 20.0, 2550, 0.036, 1.76);
        assert_eq!(planet.color(), math::color_from_temperature(2550));
        assert_eq!(planet.probable_type(), PlanetType::GasGiant);
    }

    #[test]
    fn test_labels() {
        let planet = Planet::new(PlanetId::new(701.04).unwrap(), 1.61, 270, 0.71849, 267.29);

        assert_eq!(planet.label(), "Kepler Planet 701.04");
        assert_eq!(planet.summary(), "Super-Earth: 270K, 0.72 AU, 1.61 R⊕");
    }
}
