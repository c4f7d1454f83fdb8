//! Error Types for AQI Calculation and Unit Conversion
//!
//! ## Design Philosophy
//!
//! Every error here is a caller-input failure. Nothing is internal or fatal,
//! and nothing is retried:
//!
//! 1. **Detected Up Front**: All checks run at the start of an operation,
//!    before any arithmetic, so a failed call never produces a partial result.
//!
//! 2. **No Placeholder Values**: A failed call returns `Err`, never a `0` AQI
//!    or `0.0` ppb that could be mistaken for a real reading.
//!
//! 3. **Actionable Information**: Each variant carries the offending
//!    pollutant id or value so callers can log or reject the reading without
//!    a second lookup.
//!
//! ## Error Categories
//!
//! ### Reference Lookups
//! - `UnknownPollutant`: id not present in the reference table
//! - `NoMolecularWeight`: conversion asked for a pollutant without a fixed
//!   molar mass (particulate matter)
//! - `NoBreakpoints`: the table lists the pollutant but defines no bands
//! - `TooManyBreakpoints`: a pollutant definition exceeds inline band storage
//!
//! ### Input Values
//! - `InvalidConcentration`: negative, NaN or infinite reading
//! - `InvalidConditions`: impossible temperature/pressure for molar volume
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use aqicalc_core::{AqiCalculator, AqiError, PollutantTable};
//!
//! fn ingest(pollutant: &str, value: f64, calculator: &AqiCalculator<'_, PollutantTable>) {
//!     match calculator.calculate(pollutant, value) {
//!         Ok(aqi) => {
//!             // publish_index(pollutant, aqi);
//!             let _ = aqi;
//!         }
//!         Err(AqiError::UnknownPollutant { .. }) => {
//!             // Sensor is reporting something we have no table for
//!         }
//!         Err(AqiError::InvalidConcentration { .. }) => {
//!             // Sensor fault - drop the reading
//!         }
//!         Err(_) => {
//!             // Reference data problem - investigate the table
//!         }
//!     }
//! }
//! ```

use alloc::string::String;
use thiserror_no_std::Error;

/// Result type for AQI and conversion operations
pub type AqiResult<T> = Result<T, AqiError>;

/// Errors returned by the calculator and converter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AqiError {
    /// Pollutant id not present in the reference data
    #[error("Pollution information can't be found for {pollutant}")]
    UnknownPollutant {
        /// The id the caller asked for
        pollutant: String,
    },

    /// Concentration is negative or not a finite number
    #[error("Pollution concentration must be 0 or greater, got {value}")]
    InvalidConcentration {
        /// The rejected concentration
        value: f64,
    },

    /// Pollutant has no fixed molecular weight, so ppb/ppm are undefined
    #[error("Molecular weight information can't be found for {pollutant}")]
    NoMolecularWeight {
        /// Pollutant lacking a molecular weight
        pollutant: String,
    },

    /// Pollutant exists but its breakpoint table is empty
    #[error("No breakpoints defined for {pollutant}")]
    NoBreakpoints {
        /// Pollutant with the empty table
        pollutant: String,
    },

    /// Pollutant definition has more bands than inline storage allows
    #[error("{pollutant} defines more than {capacity} breakpoints")]
    TooManyBreakpoints {
        /// Pollutant being built
        pollutant: String,
        /// Inline band capacity
        capacity: usize,
    },

    /// Temperature or pressure cannot describe a real gas
    #[error("Invalid conversion conditions: {reason}")]
    InvalidConditions {
        reason: &'static str,
    },
}

impl AqiError {
    /// Shorthand for an unknown pollutant error
    pub fn unknown(pollutant: &str) -> Self {
        Self::UnknownPollutant {
            pollutant: pollutant.into(),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AqiError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::UnknownPollutant { pollutant } =>
                defmt::write!(fmt, "Unknown pollutant {}", pollutant.as_str()),
            Self::InvalidConcentration { value } =>
                defmt::write!(fmt, "Invalid concentration {}", value),
            Self::NoMolecularWeight { pollutant } =>
                defmt::write!(fmt, "No molecular weight for {}", pollutant.as_str()),
            Self::NoBreakpoints { pollutant } =>
                defmt::write!(fmt, "No breakpoints for {}", pollutant.as_str()),
            Self::TooManyBreakpoints { pollutant, capacity } =>
                defmt::write!(fmt, "{} has over {} breakpoints", pollutant.as_str(), capacity),
            Self::InvalidConditions { reason } =>
                defmt::write!(fmt, "Invalid conditions: {}", reason),
        }
    }
}
