//! Raw result rows from the Kepler planet API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::PlanetId;
use crate::{ExplorerError, ExplorerResult};

/// Field names used by the Kepler API result rows
pub mod fields {
    /// Combined star and planet identifier (KOI number)
    pub const KOI: &str = "KOI";
    /// Stellar radius in solar radii
    pub const STAR_RADIUS: &str = "RSTAR";
    /// Stellar effective temperature in Kelvin
    pub const STAR_TEMPERATURE: &str = "TSTAR";
    /// Planet radius in Earth radii
    pub const PLANET_RADIUS: &str = "RPLANET";
    /// Planet equilibrium temperature in Kelvin
    pub const PLANET_TEMPERATURE: &str = "TPLANET";
    /// Orbital semi-major axis in AU
    pub const AXIS: &str = "A";
    /// Orbital period in days
    pub const PERIOD: &str = "PER";
}

/// One already-fetched result row.
///
/// Rows are loosely typed JSON objects; fields are validated only when a body is built
/// from them, so a bad row fails that construction and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    values: Map<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly for assembling rows by hand
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.values.insert(field.to_string(), value.into());
        self
    }

    /// Parse a JSON array of result rows, as returned by the search proxy
    pub fn parse_many(json: &str) -> ExplorerResult<Vec<Record>> {
        let value: Value = serde_json::from_str(json)?;
        match value {
            Value::Array(rows) => rows
                .into_iter()
                .enumerate()
                .map(|(index, row)| match row {
                    Value::Object(values) => Ok(Record { values }),
                    other => Err(ExplorerError::InvalidInput(format!(
                        "result row {index} is not an object: {other}"
                    ))),
                })
                .collect(),
            other => Err(ExplorerError::InvalidInput(format!(
                "expected an array of result rows, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// A numeric field. Numeric strings are accepted since some API mirrors quote numbers.
    pub fn number(&self, field: &str) -> ExplorerResult<f64> {
        let value = self
            .values
            .get(field)
            .ok_or_else(|| ExplorerError::InvalidInput(format!("missing field {field}")))?;

        let number = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        match number {
            Some(n) if n.is_finite() => Ok(n),
            _ => Err(ExplorerError::InvalidInput(format!(
                "field {field} is not numeric: {value}"
            ))),
        }
    }

    /// A temperature field, rounded to whole Kelvin
    pub fn kelvin(&self, field: &str) -> ExplorerResult<u32> {
        let kelvin = self.number(field)?;
        if kelvin < 0.0 || kelvin > u32::MAX as f64 {
            return Err(ExplorerError::InvalidInput(format!(
                "field {field} is not a valid temperature: {kelvin}"
            )));
        }
        Ok(kelvin.round() as u32)
    }

    pub fn planet_id(&self) -> ExplorerResult<PlanetId> {
        PlanetId::new(self.number(fields::KOI)?)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_many() {
        let json = r#"[
            {"KOI": 701.01, "RSTAR": 0.64, "TSTAR": 4925, "RPLANET": 1.95,
             "TPLANET": 750, "A": 0.0523, "PER": 5.715},
            {"KOI": 701.04, "RSTAR": 0.64, "TSTAR": 4925, "RPLANET": 1.61,
             "TPLANET": 270, "A": 0.718, "PER": 267.29}
        ]"#;

        let records = Record::parse_many(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].number(fields::PERIOD).unwrap(), 267.29);
        assert_eq!(records[0].planet_id().unwrap(), PlanetId::new(701.01).unwrap());
    }

    #[test]
    fn test_parse_many_rejects_non_array() {
        let err = Record::parse_many(r#"{"KOI": 1.01}"#).unwrap_err();
        assert!(matches!(err, ExplorerError::InvalidInput(_)));

        let err = Record::parse_many(r#"[{"KOI": 1.01}, 3]"#).unwrap_err();
        assert!(matches!(err, ExplorerError::InvalidInput(_)));

        assert!(matches!(
            Record::parse_many("not json"),
            Err(ExplorerError::Json(_))
        ));
    }

    #[test]
    fn test_number_fields() {
        let record = Record::new()
            .with(fields::AXIS, 1.0)
            .with(fields::PERIOD, "365.25")
            .with(fields::PLANET_RADIUS, Value::Null)
            .with(fields::STAR_RADIUS, "large");

        assert_eq!(record.number(fields::AXIS).unwrap(), 1.0);
        assert_eq!(record.number(fields::PERIOD).unwrap(), 365.25);
        assert!(record.number(fields::PLANET_RADIUS).is_err());
        assert!(record.number(fields::STAR_RADIUS).is_err());
        assert!(record.number(fields::KOI).is_err());
    }

    #[test]
    fn test_kelvin_fields() {
        let record = Record::new()
            .with(fields::STAR_TEMPERATURE, 5777.6)
            .with(fields::PLANET_TEMPERATURE, -4);

        assert_eq!(record.kelvin(fields::STAR_TEMPERATURE).unwrap(), 5778);
        assert!(matches!(
            record.kelvin(fields::PLANET_TEMPERATURE),
            Err(ExplorerError::InvalidInput(_))
        ));
    }
}
