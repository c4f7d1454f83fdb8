//! Core traits for reference data
//!
//! The calculator and converter only need to find a pollutant by id. Keep
//! the seam that small so callers can plug in whatever mapping they already
//! hold.

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::errors::{AqiError, AqiResult};
use crate::reference::{PollutantInfo, PollutantTable};

/// Read-only source of pollutant reference data
pub trait ReferenceData {
    /// Find a pollutant by id
    fn pollutant(&self, id: &str) -> Option<&PollutantInfo>;

    /// Find a pollutant by id, failing with `UnknownPollutant`
    fn lookup(&self, id: &str) -> AqiResult<&PollutantInfo> {
        self.pollutant(id).ok_or_else(|| AqiError::unknown(id))
    }
}

impl ReferenceData for PollutantTable {
    fn pollutant(&self, id: &str) -> Option<&PollutantInfo> {
        self.get(id)
    }
}

impl ReferenceData for BTreeMap<String, PollutantInfo> {
    fn pollutant(&self, id: &str) -> Option<&PollutantInfo> {
        self.get(id)
    }
}

#[cfg(feature = "std")]
impl<S: std::hash::BuildHasher> ReferenceData for std::collections::HashMap<String, PollutantInfo, S> {
    fn pollutant(&self, id: &str) -> Option<&PollutantInfo> {
        self.get(id)
    }
}
