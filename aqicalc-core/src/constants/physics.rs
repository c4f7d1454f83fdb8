//! Physical Constants for Unit Conversion
//!
//! Mass concentration (µg/m³) and volumetric concentration (ppb) are related
//! through the volume one mole of gas occupies:
//!
//! ```text
//! ppb = Vm × C(µg/m³) / MW
//!
//! Where:
//! - Vm = molar volume (L/mol) at the sampling temperature and pressure
//! - MW = molecular weight (g/mol)
//! ```

// ===== MOLAR VOLUMES =====

/// Molar volume of an ideal gas at 25°C and 1 atm (L/mol).
///
/// The volume (litres) of a mole (gram molecular weight) of gas when the
/// temperature is 25°C and the pressure is 1 atmosphere (1.01325 bar).
/// This is the reference condition for US EPA ppb/µg/m³ conversions.
///
/// Source: US EPA, 40 CFR Part 50
pub const STANDARD_MOLE_VOLUME_L: f64 = 24.45;

/// Molar volume of an ideal gas at 0°C and 1 atm (L/mol).
///
/// Standard temperature and pressure (STP). Scaled by the ideal-gas law
/// to derive molar volume at any other sampling condition.
///
/// Source: NIST CODATA 2018
pub const STP_MOLE_VOLUME_L: f64 = 22.414;

// ===== REFERENCE CONDITIONS =====

/// Absolute zero in Celsius (°C).
///
/// No gas sample can be at or below this temperature.
///
/// Source: NIST Special Publication 330 (2019)
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// Standard atmospheric pressure at sea level (hPa/mbar).
///
/// Source: International Standard Atmosphere (ISA)
pub const SEA_LEVEL_PRESSURE_HPA: f64 = 1013.25;

/// EPA reference temperature for conversions (°C).
pub const EPA_REFERENCE_TEMP_C: f64 = 25.0;

// ===== MOLECULAR WEIGHTS =====

/// Ozone, O₃ (g/mol).
///
/// Source: PubChem CID 24823
pub const MOLECULAR_WEIGHT_O3: f64 = 47.99;

/// Carbon monoxide, CO (g/mol).
///
/// Source: PubChem CID 281
pub const MOLECULAR_WEIGHT_CO: f64 = 28.01;

/// Sulfur dioxide, SO₂ (g/mol).
///
/// Source: PubChem CID 1119
pub const MOLECULAR_WEIGHT_SO2: f64 = 64.07;

/// Nitrogen dioxide, NO₂ (g/mol).
///
/// Source: PubChem CID 3032552
pub const MOLECULAR_WEIGHT_NO2: f64 = 46.00;
