//! Constants for AQICalc Core
//!
//! Centralized numeric values used by the calculator and converter, each
//! documented with its unit and source.
//!
//! ## Organization
//!
//! - **Physics**: Gas-law values for unit conversion
//! - **Limits**: Table capacity, output precision and AQI scale bounds
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Reference the EPA technical document or NIST where applicable
//! 3. Use descriptive names that include units

/// Gas-law constants used for µg/m³ to ppb/ppm conversion.
pub mod physics;

/// Storage capacities, rounding precision and AQI scale limits.
pub mod limits;

// Re-export commonly used constants for convenience
pub use physics::{
    STANDARD_MOLE_VOLUME_L, ABSOLUTE_ZERO_CELSIUS, SEA_LEVEL_PRESSURE_HPA,
};

pub use limits::{
    MAX_BREAKPOINTS, OUTPUT_DECIMAL_PLACES, PPB_PER_PPM, AQI_SCALE_MAX,
};
