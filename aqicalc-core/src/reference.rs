//! Pollutant Reference Data
//!
//! The static tables the calculator and converter read from. Nothing in this
//! crate edits a table once it is built: callers construct a
//! [`PollutantTable`] (or use [`PollutantTable::epa`]) and hand out shared
//! references to it.
//!
//! ## Breakpoint Bands
//!
//! Each pollutant carries an ascending list of bands pairing a concentration
//! range with an AQI range:
//!
//! ```text
//! Band               Concentration      AQI
//! ------------------ ------------------ ---------
//! Good               0.0   - 12.0       0   - 50
//! Moderate           12.1  - 35.4       51  - 100
//! ...
//! ```
//!
//! Bands are stored inline (up to [`MAX_BREAKPOINTS`]) so a lookup touches a
//! single contiguous block. Ordering and overlap are the table author's
//! responsibility; `aqicalc-schemas` can check a table before use.

use alloc::collections::BTreeMap;
use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::MAX_BREAKPOINTS;
use crate::errors::{AqiError, AqiResult};

/// Inline breakpoint storage for one pollutant
pub type Breakpoints = heapless::Vec<BreakPoint, MAX_BREAKPOINTS>;

/// One AQI category band
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BreakPoint {
    /// Human label (e.g. "Moderate"), not used in calculation
    pub category_name: String,

    /// Inclusive lower concentration bound
    pub concentration_low: f64,

    /// Inclusive upper concentration bound
    pub concentration_high: f64,

    /// AQI at `concentration_low`
    pub aqi_low: u16,

    /// AQI at `concentration_high`
    pub aqi_high: u16,
}

impl BreakPoint {
    /// Create a band from its bounds
    pub fn new(
        category_name: impl Into<String>,
        concentration: (f64, f64),
        aqi: (u16, u16),
    ) -> Self {
        Self {
            category_name: category_name.into(),
            concentration_low: concentration.0,
            concentration_high: concentration.1,
            aqi_low: aqi.0,
            aqi_high: aqi.1,
        }
    }

    /// True if `concentration` lies inside the band (both ends inclusive)
    pub fn contains(&self, concentration: f64) -> bool {
        self.concentration_low <= concentration && concentration <= self.concentration_high
    }
}

/// Reference data for a single pollutant
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PollutantInfo {
    /// Identifier, unique within a table (e.g. "o3", "pm2_5")
    pub name: String,

    /// Grams per mole. `0.0` marks pollutants with no fixed molar mass.
    #[cfg_attr(feature = "serde", serde(default))]
    pub molecular_weight: f64,

    /// Ascending, non-overlapping bands
    pub breakpoints: Breakpoints,
}

impl PollutantInfo {
    /// Create a pollutant with no molecular weight and no bands
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            molecular_weight: 0.0,
            breakpoints: Breakpoints::new(),
        }
    }

    /// Set the molecular weight (g/mol)
    pub fn with_molecular_weight(mut self, grams_per_mole: f64) -> Self {
        self.molecular_weight = grams_per_mole;
        self
    }

    /// Append a band, failing once the inline capacity is used up
    pub fn with_breakpoint(mut self, breakpoint: BreakPoint) -> AqiResult<Self> {
        self.breakpoints
            .push(breakpoint)
            .map_err(|_| AqiError::TooManyBreakpoints {
                pollutant: self.name.clone(),
                capacity: MAX_BREAKPOINTS,
            })?;
        Ok(self)
    }

    /// Append several bands in order
    pub fn with_breakpoints<I>(self, breakpoints: I) -> AqiResult<Self>
    where
        I: IntoIterator<Item = BreakPoint>,
    {
        breakpoints
            .into_iter()
            .try_fold(self, |info, breakpoint| info.with_breakpoint(breakpoint))
    }

    /// Whether ppb/ppm conversion is possible for this pollutant
    pub fn has_molecular_weight(&self) -> bool {
        self.molecular_weight.is_finite() && self.molecular_weight > 0.0
    }

    /// The band with the highest concentrations, if any
    pub fn last_breakpoint(&self) -> Option<&BreakPoint> {
        self.breakpoints.last()
    }
}

/// Mapping of pollutant id to reference data
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct PollutantTable {
    pollutants: BTreeMap<String, PollutantInfo>,
}

impl PollutantTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// US EPA table for o3, pm2_5, pm10, co, so2 and no2
    pub fn epa() -> Self {
        crate::defaults::epa_pollutants().into_iter().collect()
    }

    /// Add a pollutant keyed by its name, returning any entry it replaced
    pub fn insert(&mut self, info: PollutantInfo) -> Option<PollutantInfo> {
        self.pollutants.insert(info.name.clone(), info)
    }

    /// Look up a pollutant by id
    pub fn get(&self, id: &str) -> Option<&PollutantInfo> {
        self.pollutants.get(id)
    }

    /// Number of pollutants
    pub fn len(&self) -> usize {
        self.pollutants.len()
    }

    /// True if the table holds no pollutants
    pub fn is_empty(&self) -> bool {
        self.pollutants.is_empty()
    }

    /// Pollutants in id order
    pub fn iter(&self) -> impl Iterator<Item = &PollutantInfo> {
        self.pollutants.values()
    }

    /// Pollutant ids in order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.pollutants.keys().map(String::as_str)
    }
}

impl FromIterator<PollutantInfo> for PollutantTable {
    fn from_iter<I: IntoIterator<Item = PollutantInfo>>(iter: I) -> Self {
        let mut table = Self::new();
        for info in iter {
            table.insert(info);
        }
        table
    }
}

impl From<BTreeMap<String, PollutantInfo>> for PollutantTable {
    fn from(pollutants: BTreeMap<String, PollutantInfo>) -> Self {
        Self { pollutants }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good_band() -> BreakPoint {
        BreakPoint::new("Good", (0.0, 0.054), (0, 50))
    }

    #[test]
    fn band_bounds_are_inclusive() {
        let band = good_band();
        assert!(band.contains(0.0));
        assert!(band.contains(0.054));
        assert!(band.contains(0.03));
        assert!(!band.contains(0.055));
        assert!(!band.contains(-0.001));
    }

    #[test]
    fn builder_keeps_band_order() {
        let info = PollutantInfo::new("o3")
            .with_molecular_weight(47.99)
            .with_breakpoints([
                good_band(),
                BreakPoint::new("Moderate", (0.055, 0.070), (51, 100)),
            ])
            .unwrap();

        assert_eq!(info.breakpoints.len(), 2);
        assert_eq!(info.breakpoints[0].category_name, "Good");
        assert_eq!(info.last_breakpoint().unwrap().aqi_high, 100);
        assert!(info.has_molecular_weight());
    }

    #[test]
    fn builder_rejects_too_many_bands() {
        let bands = (0..=MAX_BREAKPOINTS as u16).map(|i| {
            BreakPoint::new("Band", (f64::from(i), f64::from(i) + 0.9), (i * 10, i * 10 + 9))
        });

        let result = PollutantInfo::new("x").with_breakpoints(bands);
        assert!(matches!(
            result,
            Err(AqiError::TooManyBreakpoints { capacity: MAX_BREAKPOINTS, .. })
        ));
    }

    #[test]
    fn particulates_have_no_molecular_weight() {
        let info = PollutantInfo::new("pm10");
        assert!(!info.has_molecular_weight());
        assert!(!info.clone().with_molecular_weight(f64::NAN).has_molecular_weight());
        assert!(!info.with_molecular_weight(-4.0).has_molecular_weight());
    }

    #[test]
    fn table_is_keyed_by_name() {
        let mut table = PollutantTable::new();
        assert!(table.is_empty());

        assert!(table.insert(PollutantInfo::new("co")).is_none());
        assert!(table.insert(PollutantInfo::new("o3")).is_none());
        assert!(table.insert(PollutantInfo::new("co").with_molecular_weight(28.01)).is_some());

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("co").unwrap().molecular_weight, 28.01);
        assert!(table.get("so2").is_none());
        assert_eq!(table.ids().collect::<alloc::vec::Vec<_>>(), ["co", "o3"]);
    }
}
