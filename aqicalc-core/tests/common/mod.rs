//! Shared fixtures for integration tests

#![allow(dead_code)]

use aqicalc_core::{BreakPoint, PollutantInfo, PollutantTable};

/// Pollutant ids in the default EPA table
pub const EPA_POLLUTANTS: [&str; 6] = ["o3", "pm2_5", "pm10", "co", "so2", "no2"];

/// Gaseous pollutants that support ppb/ppm conversion
pub const GASES: [&str; 4] = ["o3", "co", "so2", "no2"];

/// Highest concentration covered by a pollutant's bands
pub fn top_of_range(table: &PollutantTable, pollutant: &str) -> f64 {
    table
        .get(pollutant)
        .and_then(PollutantInfo::last_breakpoint)
        .map(|band| band.concentration_high)
        .expect("pollutant in table")
}

/// Every band of every pollutant, paired with its pollutant id
pub fn all_bands(table: &PollutantTable) -> Vec<(String, BreakPoint)> {
    table
        .iter()
        .flat_map(|info| {
            info.breakpoints
                .iter()
                .cloned()
                .map(move |band| (info.name.clone(), band))
        })
        .collect()
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
