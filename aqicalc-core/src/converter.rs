//! Mass to Volumetric Concentration Conversion
//!
//! Sensors and reference monitors disagree on units: electrochemical gas
//! sensors often report µg/m³ while the EPA breakpoints for o3, co, so2 and
//! no2 are in ppm or ppb. The two are linked by the molar volume:
//!
//! ```text
//! ppb = Vm × C(µg/m³) / MW
//! ppm = ppb / 1000
//! ```
//!
//! `Vm` defaults to 24.45 L/mol (25°C, 1 atm). Both results are rounded to
//! three decimal places; ppm is derived from the already-rounded ppb.
//!
//! ## Other Sampling Conditions
//!
//! Molar volume scales with the ideal-gas law:
//!
//! ```text
//! Vm(T, P) = 22.414 × (T / 273.15 K) × (1013.25 hPa / P)
//! ```
//!
//! [`ConversionConditions::at`] derives `Vm` for a given temperature and
//! pressure when samples are not taken at the EPA reference condition.

use crate::constants::limits::{OUTPUT_DECIMAL_PLACES, PPB_PER_PPM};
use crate::constants::physics::{
    ABSOLUTE_ZERO_CELSIUS, SEA_LEVEL_PRESSURE_HPA, STANDARD_MOLE_VOLUME_L, STP_MOLE_VOLUME_L,
};
use crate::errors::{AqiError, AqiResult};
use crate::traits::ReferenceData;
use crate::utils;

/// Gas conditions used for conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionConditions {
    molar_volume_l: f64,
}

impl Default for ConversionConditions {
    fn default() -> Self {
        Self::epa()
    }
}

impl ConversionConditions {
    /// EPA reference condition: 25°C, 1 atm, 24.45 L/mol
    pub const fn epa() -> Self {
        Self {
            molar_volume_l: STANDARD_MOLE_VOLUME_L,
        }
    }

    /// Use an explicit molar volume (L/mol)
    pub fn with_molar_volume(litres_per_mole: f64) -> AqiResult<Self> {
        if !(litres_per_mole.is_finite() && litres_per_mole > 0.0) {
            return Err(AqiError::InvalidConditions {
                reason: "molar volume must be a positive number",
            });
        }

        Ok(Self {
            molar_volume_l: litres_per_mole,
        })
    }

    /// Derive molar volume for a sampling temperature (°C) and pressure (hPa)
    pub fn at(temperature_c: f64, pressure_hpa: f64) -> AqiResult<Self> {
        if !(temperature_c.is_finite() && temperature_c > ABSOLUTE_ZERO_CELSIUS) {
            return Err(AqiError::InvalidConditions {
                reason: "temperature must be above absolute zero",
            });
        }
        if !(pressure_hpa.is_finite() && pressure_hpa > 0.0) {
            return Err(AqiError::InvalidConditions {
                reason: "pressure must be positive",
            });
        }

        let kelvin = temperature_c - ABSOLUTE_ZERO_CELSIUS;
        let molar_volume = STP_MOLE_VOLUME_L
            * (kelvin / -ABSOLUTE_ZERO_CELSIUS)
            * (SEA_LEVEL_PRESSURE_HPA / pressure_hpa);

        Self::with_molar_volume(molar_volume)
    }

    /// Molar volume in litres per mole
    pub fn molar_volume(&self) -> f64 {
        self.molar_volume_l
    }
}

/// Converts µg/m³ readings into ppb and ppm
#[derive(Debug)]
pub struct UnitConverter<'a, R: ReferenceData + ?Sized> {
    reference: &'a R,
    conditions: ConversionConditions,
}

impl<'a, R: ReferenceData + ?Sized> Clone for UnitConverter<'a, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, R: ReferenceData + ?Sized> Copy for UnitConverter<'a, R> {}

impl<'a, R: ReferenceData + ?Sized> UnitConverter<'a, R> {
    /// Converter at the EPA reference condition
    pub fn new(reference: &'a R) -> Self {
        Self::with_conditions(reference, ConversionConditions::epa())
    }

    /// Converter at custom sampling conditions
    pub fn with_conditions(reference: &'a R, conditions: ConversionConditions) -> Self {
        Self {
            reference,
            conditions,
        }
    }

    /// Conditions this converter applies
    pub fn conditions(&self) -> ConversionConditions {
        self.conditions
    }

    /// Parts per billion from µg/m³, rounded to three decimals
    pub fn to_ppb(&self, pollutant: &str, concentration_ugm3: f64) -> AqiResult<f64> {
        let info = self.reference.lookup(pollutant)?;
        let concentration = utils::check_concentration(concentration_ugm3)?;

        if !info.has_molecular_weight() {
            return Err(AqiError::NoMolecularWeight {
                pollutant: info.name.clone(),
            });
        }

        let ppb = self.conditions.molar_volume_l * concentration / info.molecular_weight;
        log_debug!(
            "{}: {} µg/m³ -> {} ppb (Vm {} L/mol)",
            pollutant, concentration, ppb, self.conditions.molar_volume_l
        );

        Ok(utils::round_to(ppb, OUTPUT_DECIMAL_PLACES))
    }

    /// Parts per million from µg/m³, rounded to three decimals
    pub fn to_ppm(&self, pollutant: &str, concentration_ugm3: f64) -> AqiResult<f64> {
        let ppb = self.to_ppb(pollutant, concentration_ugm3)?;
        Ok(utils::round_to(ppb / PPB_PER_PPM, OUTPUT_DECIMAL_PLACES))
    }
}
