//! Stars and planets as read from Kepler result sets
//!
//! Bodies hold raw physical attributes only. Every display attribute is derived on
//! demand through a [`PhysicalScale`](crate::math::PhysicalScale), so nothing cached can
//! drift from the source data.

pub mod planet;
pub mod record;
pub mod star;

pub use planet::Planet;
pub use record::Record;
pub use star::Star;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::{ExplorerError, ExplorerResult};

/// Kepler star identifier, the integer part of a KOI number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StarId(pub i64);

impl fmt::Display for StarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kepler Object of Interest number such as `701.04`.
///
/// The integer part names the host star and the fractional part tells siblings apart.
/// Only finite values are constructible, which makes bitwise equality a total order.
#[derive(Debug, Clone, Copy)]
pub struct PlanetId(f64);

impl PlanetId {
    pub fn new(koi: f64) -> ExplorerResult<Self> {
        if !koi.is_finite() {
            return Err(ExplorerError::InvalidInput(format!(
                "planet identifier must be finite, got {koi}"
            )));
        }
        // Fold -0.0 into 0.0 so equal ids compare equal bitwise
        Ok(Self(koi + 0.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn star_id(&self) -> StarId {
        StarId(self.0.trunc() as i64)
    }
}

impl PartialEq for PlanetId {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for PlanetId {}

impl Hash for PlanetId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for PlanetId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PlanetId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlanetId {
    type Err = ExplorerError;

    fn from_str(s: &str) -> ExplorerResult<Self> {
        let koi = s.trim().parse::<f64>().map_err(|e| {
            ExplorerError::InvalidInput(format!("invalid planet identifier '{s}': {e}"))
        })?;
        Self::new(koi)
    }
}
