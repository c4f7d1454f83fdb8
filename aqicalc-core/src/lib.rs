//! Air Quality Index calculation for AQICalc
//!
//! Turns raw pollutant concentrations into EPA-standard AQI values and
//! converts mass concentrations (µg/m³) into volumetric ones (ppb/ppm).
//! Built for sensor ingestion on anything from a gateway to a dashboard
//! backend.
//!
//! Key constraints:
//! - Pure functions over immutable reference data
//! - No heap allocation in the calculation path
//! - Runs without `std` (needs `alloc` for the pollutant table)
//!
//! ```
//! use aqicalc_core::{AqiCalculator, PollutantTable, UnitConverter};
//!
//! let table = PollutantTable::epa();
//! let calculator = AqiCalculator::new(&table);
//! let converter = UnitConverter::new(&table);
//!
//! assert_eq!(calculator.calculate("pm2_5", 35.9)?, 102);
//! assert_eq!(converter.to_ppb("so2", 2.77)?, 1.057);
//! # Ok::<(), aqicalc_core::AqiError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod calculator;
pub mod constants;
pub mod converter;
pub mod defaults;
pub mod errors;
pub mod reference;
pub mod traits;
pub mod utils;

// Public API
pub use calculator::{AqiCalculator, AqiReading, BandMatch};
pub use converter::{ConversionConditions, UnitConverter};
pub use errors::{AqiError, AqiResult};
pub use reference::{BreakPoint, Breakpoints, PollutantInfo, PollutantTable};
pub use traits::ReferenceData;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
