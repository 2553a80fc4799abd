//! Search result sets grouped into star systems

use std::collections::BTreeMap;
use std::path::Path;

use crate::body::{Planet, PlanetId, Record, Star, StarId};
use crate::{ExplorerError, ExplorerResult};

/// An already-fetched search result set: the matching planets in result order, plus
/// every star system those planets belong to.
#[derive(Debug, Clone, Default)]
pub struct Scenario {
    pub results: Vec<Planet>,
    pub stars: BTreeMap<StarId, Star>,
}

impl Scenario {
    /// Build from result rows. Any malformed row rejects the whole set.
    pub fn from_records(records: &[Record]) -> ExplorerResult<Self> {
        let results = records
            .iter()
            .map(Planet::from_record)
            .collect::<ExplorerResult<Vec<_>>>()?;
        let stars = group_by_star(records)?;

        log::info!(
            "Loaded {} planets across {} star systems",
            results.len(),
            stars.len()
        );

        Ok(Self { results, stars })
    }

    pub fn from_json(json: &str) -> ExplorerResult<Self> {
        Self::from_records(&Record::parse_many(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> ExplorerResult<Self> {
        let path = path.as_ref();
        log::info!("Reading result set from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn star(&self, star_id: StarId) -> Option<&Star> {
        self.stars.get(&star_id)
    }

    pub fn star_of(&self, planet_id: PlanetId) -> Option<&Star> {
        self.star(planet_id.star_id())
    }

    pub fn planet(&self, planet_id: PlanetId) -> Option<&Planet> {
        self.star_of(planet_id)
            .and_then(|star| star.planet(planet_id))
    }

    /// The planet shown when nothing has been selected yet
    pub fn first_planet(&self) -> Option<&Planet> {
        self.results.first()
    }
}

/// Group result rows by star identity, preserving row order within each group, and
/// build one star per group.
pub fn group_by_star(records: &[Record]) -> ExplorerResult<BTreeMap<StarId, Star>> {
    let mut groups: BTreeMap<StarId, Vec<Record>> = BTreeMap::new();
    for record in records {
        let star_id = record.planet_id()?.star_id();
        groups.entry(star_id).or_default().push(record.clone());
    }

    groups
        .into_iter()
        .map(|(star_id, rows)| Ok((star_id, Star::from_result_set(&rows)?)))
        .collect()
}

pub fn require_non_empty(scenario: &Scenario) -> ExplorerResult<()> {
    if scenario.is_empty() {
        return Err(ExplorerError::InvalidInput(
            "result set contains no planets".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS: &str = r#"[
        {"KOI": 701.03, "RSTAR": 0.64, "TSTAR": 4925, "RPLANET": 1.61,
         "TPLANET": 270, "A": 0.718, "PER": 267.29},
        {"KOI": 72.01, "RSTAR": 1.06, "TSTAR": 5627, "RPLANET": 1.47,
         "TPLANET": 1968, "A": 0.0168, "PER": 0.837},
        {"KOI": 701.01, "RSTAR": 0.64, "TSTAR": 4925, "RPLANET": 1.95,
         "TPLANET": 750, "A": 0.0553, "PER": 18.16}
    ]"#;

    #[test]
    fn test_parse_simple_scenario() {
        let scenario = Scenario::from_json(RESULTS).unwrap();

        assert_eq!(scenario.results.len(), 3);
        assert_eq!(scenario.stars.len(), 2);

        // Result order is kept for result lists
        assert_eq!(
            scenario.first_planet().unwrap().planet_id(),
            PlanetId::new(701.03).unwrap()
        );

        let kepler_62 = scenario.star(StarId(701)).unwrap();
        assert_eq!(kepler_62.planets().len(), 2);
        assert_eq!(kepler_62.temperature(), 4925);

        let kepler_10 = scenario.star_of(PlanetId::new(72.01).unwrap()).unwrap();
        assert_eq!(kepler_10.star_id(), StarId(72));
        assert_eq!(kepler_10.planets().len(), 1);
    }

    #[test]
    fn test_planet_lookup() {
        let scenario = Scenario::from_json(RESULTS).unwrap();

        let planet = scenario.planet(PlanetId::new(701.01).unwrap()).unwrap();
        assert_eq!(planet.period_days(), 18.16);
        assert!(scenario.planet(PlanetId::new(701.02).unwrap()).is_none());
    }

    #[test]
    fn test_malformed_row_rejects_set() {
        let json = r#"[
            {"KOI": 1.01, "RSTAR": 1.0, "TSTAR": 5778, "RPLANET": 1.0,
             "TPLANET": 288, "A": 1.0, "PER": 365.0},
            {"KOI": 2.01, "RSTAR": 1.0, "TSTAR": 5778, "RPLANET": null,
             "TPLANET": 288, "A": 1.0, "PER": 365.0}
        ]"#;

        assert!(matches!(
            Scenario::from_json(json),
            Err(ExplorerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_bundled_result_set() {
        let scenario = Scenario::from_json(include_str!("../data/kepler_results.json")).unwrap();

        assert_eq!(scenario.results.len(), 10);
        assert_eq!(scenario.stars.len(), 4);
        assert_eq!(scenario.star(StarId(701)).unwrap().planets().len(), 5);
    }

    #[test]
    fn test_empty_scenario() {
        let scenario = Scenario::from_json("[]").unwrap();
        assert!(scenario.is_empty());
        assert!(require_non_empty(&scenario).is_err());
    }
}
