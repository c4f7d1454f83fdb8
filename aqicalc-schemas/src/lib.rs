//! JSON Reference Tables for AQICalc
//!
//! ## Overview
//!
//! The calculator treats breakpoint tables as a fixed input. This crate is
//! where those tables come from when they are not the built-in EPA defaults:
//! a small JSON document format, a loader, and a checker that catches table
//! mistakes before they reach the calculator.
//!
//! ## Why a Separate Crate?
//!
//! `aqicalc-core` runs without `std` and never inspects a table for
//! correctness; a bad table simply gives bad numbers. Parsing and checking
//! belong to whoever produces the table, which is usually a gateway or a
//! build step with `std` available.
//!
//! ## Document Format
//!
//! ```json
//! {
//!   "source": "EPA-454/B-18-007 (September 2018)",
//!   "pollutants": [
//!     {
//!       "name": "co",
//!       "molecular_weight": 28.01,
//!       "breakpoints": [
//!         {
//!           "category_name": "Good",
//!           "concentration_low": 0.0,
//!           "concentration_high": 4.4,
//!           "aqi_low": 0,
//!           "aqi_high": 50
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! `molecular_weight` may be omitted for particulate matter.
//!
//! ## Usage Example
//!
//! ```rust
//! use aqicalc_core::AqiCalculator;
//! use aqicalc_schemas::{check_table, load_epa_2018};
//!
//! let table = load_epa_2018()?;
//! assert!(check_table(&table).is_valid());
//!
//! let calculator = AqiCalculator::new(&table);
//! assert_eq!(calculator.calculate("co", 8.4)?, 90);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use aqicalc_core::{PollutantInfo, PollutantTable};
use serde::{Deserialize, Serialize};

pub mod validation;

pub use validation::{check_table, IssueType, Severity, TableIssue, TableReport};

/// EPA 2018 breakpoints as a JSON document
pub const EPA_2018_JSON: &str = include_str!("../tables/epa_2018.json");

/// Table document as stored on disk or sent over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDocument {
    /// Where the breakpoints were taken from
    #[serde(default)]
    pub source: String,

    /// Pollutant definitions, in any order
    pub pollutants: Vec<PollutantInfo>,
}

impl TableDocument {
    /// Build a document from a table
    pub fn from_table(source: &str, table: &PollutantTable) -> Self {
        Self {
            source: source.to_string(),
            pollutants: table.iter().cloned().collect(),
        }
    }

    /// Convert into a lookup table, rejecting duplicate pollutant names
    pub fn into_table(self) -> Result<PollutantTable, SchemaError> {
        let mut table = PollutantTable::new();
        for info in self.pollutants {
            let name = info.name.clone();
            if table.insert(info).is_some() {
                return Err(SchemaError::DuplicatePollutant(name));
            }
        }
        log::debug!("Loaded {} pollutants from '{}'", table.len(), self.source);
        Ok(table)
    }
}

/// Parse a table document
pub fn load_table_json(json: &str) -> Result<PollutantTable, SchemaError> {
    let document: TableDocument =
        serde_json::from_str(json).map_err(|e| SchemaError::ParseError(e.to_string()))?;
    document.into_table()
}

/// Serialize a table as a pretty-printed document
pub fn table_to_json(source: &str, table: &PollutantTable) -> Result<String, SchemaError> {
    serde_json::to_string_pretty(&TableDocument::from_table(source, table))
        .map_err(|e| SchemaError::SerializeError(e.to_string()))
}

/// Load the bundled EPA 2018 table
pub fn load_epa_2018() -> Result<PollutantTable, SchemaError> {
    load_table_json(EPA_2018_JSON)
}

/// Table loading errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    #[error("Failed to parse table: {0}")]
    ParseError(String),

    #[error("Failed to serialize table: {0}")]
    SerializeError(String),

    #[error("Pollutant defined more than once: {0}")]
    DuplicatePollutant(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_table_matches_defaults() {
        let table = load_epa_2018().unwrap();
        assert_eq!(table, PollutantTable::epa());
    }

    #[test]
    fn molecular_weight_is_optional() {
        let json = r#"{
            "pollutants": [
                {
                    "name": "pm10",
                    "breakpoints": [
                        {
                            "category_name": "Good",
                            "concentration_low": 0,
                            "concentration_high": 54,
                            "aqi_low": 0,
                            "aqi_high": 50
                        }
                    ]
                }
            ]
        }"#;

        let table = load_table_json(json).unwrap();
        let pm10 = table.get("pm10").unwrap();
        assert_eq!(pm10.molecular_weight, 0.0);
        assert!(!pm10.has_molecular_weight());
    }

    #[test]
    fn duplicate_names_rejected() {
        let json = r#"{
            "source": "test",
            "pollutants": [
                { "name": "co", "breakpoints": [] },
                { "name": "co", "breakpoints": [] }
            ]
        }"#;

        assert!(matches!(
            load_table_json(json),
            Err(SchemaError::DuplicatePollutant(name)) if name == "co"
        ));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            load_table_json("{ \"pollutants\": [ { \"name\": 3 } ] }"),
            Err(SchemaError::ParseError(_))
        ));
    }

    #[test]
    fn too_many_bands_rejected() {
        let band = r#"{
            "category_name": "Band",
            "concentration_low": 0,
            "concentration_high": 1,
            "aqi_low": 0,
            "aqi_high": 1
        }"#;
        let bands = vec![band; aqicalc_core::constants::MAX_BREAKPOINTS + 1].join(",");
        let json = format!(r#"{{ "pollutants": [ {{ "name": "x", "breakpoints": [{bands}] }} ] }}"#);

        assert!(matches!(load_table_json(&json), Err(SchemaError::ParseError(_))));
    }
}
