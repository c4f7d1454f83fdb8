//! AQI Calculation by Breakpoint Interpolation
//!
//! ## Algorithm
//!
//! The EPA index is piecewise linear in concentration. Each band maps a
//! concentration range onto an AQI range, and a reading inside a band is
//! interpolated (EPA-454/B-18-007, Equation 1):
//!
//! ```text
//!       I_hi - I_lo
//! I = --------------- × (C - BP_lo) + I_lo
//!      BP_hi - BP_lo
//!
//! Where:
//! - C      = measured concentration
//! - BP_lo  = band lower concentration bound
//! - BP_hi  = band upper concentration bound
//! - I_lo   = AQI at BP_lo
//! - I_hi   = AQI at BP_hi
//! ```
//!
//! The result is rounded half away from zero to an integer.
//!
//! ## Band Selection
//!
//! Bands are scanned in table order and the first band containing the
//! reading (inclusive at both ends) wins. Two other outcomes are possible,
//! and each is reported through [`BandMatch`] rather than a sentinel value:
//!
//! ```text
//! Outcome     | Reading                          | AQI reported
//! ------------|----------------------------------|-------------------
//! Within      | inside a band                    | interpolated
//! Gap         | between two bands (12.05 µg/m³)  | next band's I_lo
//! Saturated   | above every band                 | last band's I_hi
//! ```
//!
//! Saturation caps readings at the worst defined category instead of
//! extrapolating past it.

use crate::errors::{AqiError, AqiResult};
use crate::reference::BreakPoint;
use crate::traits::ReferenceData;
use crate::utils;

/// How a reading was placed against a pollutant's bands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandMatch {
    /// Inside a band; AQI was interpolated
    Within,
    /// Between two bands; reported at the upper band's lowest AQI
    Gap,
    /// Above every band; capped at the last band's highest AQI
    Saturated,
}

/// Detailed result of an AQI calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AqiReading<'a> {
    /// Integer index value
    pub aqi: u16,
    /// Category label of the band the reading was placed in
    pub category: &'a str,
    /// How the band was chosen
    pub band: BandMatch,
}

/// Converts pollutant concentrations into AQI values
#[derive(Debug)]
pub struct AqiCalculator<'a, R: ReferenceData + ?Sized> {
    reference: &'a R,
}

impl<'a, R: ReferenceData + ?Sized> Clone for AqiCalculator<'a, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, R: ReferenceData + ?Sized> Copy for AqiCalculator<'a, R> {}

impl<'a, R: ReferenceData + ?Sized> AqiCalculator<'a, R> {
    /// Create a calculator over the given reference data
    pub fn new(reference: &'a R) -> Self {
        Self { reference }
    }

    /// AQI for `pollutant` at `concentration`
    ///
    /// Concentration must be in the unit of the pollutant's table (ppm for
    /// o3 and co, ppb for so2 and no2, µg/m³ for particulates in the EPA
    /// defaults).
    pub fn calculate(&self, pollutant: &str, concentration: f64) -> AqiResult<u16> {
        self.calculate_detailed(pollutant, concentration)
            .map(|reading| reading.aqi)
    }

    /// AQI plus the band it came from
    pub fn calculate_detailed(
        &self,
        pollutant: &str,
        concentration: f64,
    ) -> AqiResult<AqiReading<'a>> {
        let reference: &'a R = self.reference;
        let info = reference.lookup(pollutant)?;
        let concentration = utils::check_concentration(concentration)?;

        let last = info
            .last_breakpoint()
            .ok_or_else(|| AqiError::NoBreakpoints {
                pollutant: info.name.clone(),
            })?;

        let reading = match locate_band(&info.breakpoints, concentration) {
            Some((band, BandMatch::Within)) => {
                log_debug!(
                    "{}: {} in band '{}' [{}, {}]",
                    pollutant, concentration, band.category_name,
                    band.concentration_low, band.concentration_high
                );
                AqiReading {
                    aqi: interpolate(band, concentration),
                    category: &band.category_name,
                    band: BandMatch::Within,
                }
            }
            Some((band, kind)) => {
                log_warn!(
                    "{}: {} falls between bands, reporting '{}' floor",
                    pollutant, concentration, band.category_name
                );
                AqiReading {
                    aqi: band.aqi_low,
                    category: &band.category_name,
                    band: kind,
                }
            }
            None => {
                log_warn!(
                    "{}: {} above highest band ({}), capping AQI at {}",
                    pollutant, concentration, last.concentration_high, last.aqi_high
                );
                AqiReading {
                    aqi: last.aqi_high,
                    category: &last.category_name,
                    band: BandMatch::Saturated,
                }
            }
        };

        Ok(reading)
    }
}

/// Find the band for a reading; `None` means it is above every band
fn locate_band(breakpoints: &[BreakPoint], concentration: f64) -> Option<(&BreakPoint, BandMatch)> {
    if let Some(band) = breakpoints.iter().find(|band| band.contains(concentration)) {
        return Some((band, BandMatch::Within));
    }

    breakpoints
        .iter()
        .find(|band| concentration < band.concentration_low)
        .map(|band| (band, BandMatch::Gap))
}

/// Linear interpolation inside a band, rounded to an integer AQI
pub fn interpolate(band: &BreakPoint, concentration: f64) -> u16 {
    let span = band.concentration_high - band.concentration_low;
    if span <= 0.0 {
        return band.aqi_low;
    }

    let aqi_span = f64::from(band.aqi_high) - f64::from(band.aqi_low);
    let aqi = aqi_span / span * (concentration - band.concentration_low) + f64::from(band.aqi_low);

    utils::round_half_away(aqi) as u16
}
