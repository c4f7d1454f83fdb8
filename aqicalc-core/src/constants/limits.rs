//! Capacity and Precision Limits
//!
//! Sizes here are compile-time so breakpoint storage stays inline and the
//! calculation path never allocates.

/// Maximum number of breakpoint bands per pollutant.
///
/// EPA tables define six or seven categories (Good through Hazardous, with
/// Hazardous sometimes split in two). Eight leaves room for local indices.
///
/// Memory: 8 bands × ~56 bytes ≈ 450 bytes per pollutant
pub const MAX_BREAKPOINTS: usize = 8;

/// Decimal places kept on ppb/ppm conversion results.
///
/// Three places match typical reference-monitor reporting precision.
pub const OUTPUT_DECIMAL_PLACES: u32 = 3;

/// Parts per billion in one part per million.
pub const PPB_PER_PPM: f64 = 1000.0;

/// Highest value on the EPA AQI scale.
///
/// Source: EPA-454/B-18-007, Table 5
pub const AQI_SCALE_MAX: u16 = 500;
