//! Shared Validation and Rounding Helpers
//!
//! Both the calculator and the converter validate their inputs the same way
//! and round the same way. Keeping these in one place means an AQI of 102 and
//! a ppb of 1.057 are produced by identical rules.
//!
//! ## Rounding
//!
//! Rounding is half away from zero (`libm::round`), so 125.5 becomes 126.
//! Inputs are never negative by the time they get here, which makes this the
//! same as the "round half up" used in the EPA technical document.
//!
//! ## Concentration Checks
//!
//! A concentration is a physical measurement:
//! - Negative values are sensor faults
//! - NaN and infinity are decoding or wiring faults
//!
//! All of them are rejected with `InvalidConcentration`.

use crate::errors::{AqiError, AqiResult};

/// Reject negative and non-finite concentrations
pub fn check_concentration(value: f64) -> AqiResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AqiError::InvalidConcentration { value })
    }
}

/// Round to the nearest integer, halves away from zero
pub fn round_half_away(value: f64) -> f64 {
    libm::round(value)
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, places: u32) -> f64 {
    let ratio = libm::pow(10.0, f64::from(places));
    round_half_away(value * ratio) / ratio
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concentration_check() {
        assert_eq!(check_concentration(0.0), Ok(0.0));
        assert_eq!(check_concentration(35.9), Ok(35.9));
        assert!(check_concentration(-0.24).is_err());
        assert!(check_concentration(f64::NAN).is_err());
        assert!(check_concentration(f64::INFINITY).is_err());
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(round_half_away(125.5), 126.0);
        assert_eq!(round_half_away(101.98), 102.0);
        assert_eq!(round_half_away(90.49), 90.0);
    }

    #[test]
    fn three_decimal_rounding() {
        assert_eq!(round_to(1.0570703, 3), 1.057);
        assert_eq!(round_to(227.26017, 3), 227.26);
        assert_eq!(round_to(0.22726, 3), 0.227);
        assert_eq!(round_to(0.0302480, 3), 0.03);
    }
}
