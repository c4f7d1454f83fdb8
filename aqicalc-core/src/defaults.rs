//! Default US EPA Pollutant Tables
//!
//! Breakpoints from the EPA Technical Assistance Document for the Reporting
//! of Daily Air Quality (EPA-454/B-18-007, September 2018), Table 5.
//!
//! ## Units
//!
//! ```text
//! Pollutant | Averaging | Unit
//! ----------|-----------|-------
//! o3        | 8-hour    | ppm
//! pm2_5     | 24-hour   | µg/m³
//! pm10      | 24-hour   | µg/m³
//! co        | 8-hour    | ppm
//! so2       | 1-hour    | ppb
//! no2       | 1-hour    | ppb
//! ```
//!
//! Particulate matter has no fixed molar mass, so `pm2_5` and `pm10` carry
//! no molecular weight and cannot be converted to ppb/ppm.
//!
//! Consecutive bands are separated by the table's reporting precision
//! (12.0 → 12.1), never by a shared boundary.

use alloc::vec::Vec;

use crate::constants::limits::MAX_BREAKPOINTS;
use crate::constants::physics::{
    MOLECULAR_WEIGHT_CO, MOLECULAR_WEIGHT_NO2, MOLECULAR_WEIGHT_O3, MOLECULAR_WEIGHT_SO2,
};
use crate::reference::{BreakPoint, Breakpoints, PollutantInfo};

/// (category, concentration low, concentration high, AQI low, AQI high)
type Band = (&'static str, f64, f64, u16, u16);

const EPA_BANDS: usize = 6;

const _: () = assert!(EPA_BANDS <= MAX_BREAKPOINTS);

const O3: [Band; EPA_BANDS] = [
    ("Good", 0.0, 0.054, 0, 50),
    ("Moderate", 0.055, 0.070, 51, 100),
    ("Unhealthy for Sensitive Groups", 0.071, 0.085, 101, 150),
    ("Unhealthy", 0.086, 0.105, 151, 200),
    ("Very unhealthy", 0.106, 0.200, 201, 300),
    ("Hazardous", 0.201, 0.300, 301, 400),
];

const PM2_5: [Band; EPA_BANDS] = [
    ("Good", 0.0, 12.0, 0, 50),
    ("Moderate", 12.1, 35.4, 51, 100),
    ("Unhealthy for Sensitive Groups", 35.5, 55.4, 101, 150),
    ("Unhealthy", 55.5, 150.4, 151, 200),
    ("Very unhealthy", 150.5, 250.4, 201, 300),
    ("Hazardous", 250.5, 350.4, 301, 400),
];

const PM10: [Band; EPA_BANDS] = [
    ("Good", 0.0, 54.0, 0, 50),
    ("Moderate", 55.0, 154.0, 51, 100),
    ("Unhealthy for Sensitive Groups", 155.0, 254.0, 101, 150),
    ("Unhealthy", 255.0, 354.0, 151, 200),
    ("Very unhealthy", 355.0, 424.0, 201, 300),
    ("Hazardous", 425.0, 504.0, 301, 400),
];

const CO: [Band; EPA_BANDS] = [
    ("Good", 0.0, 4.4, 0, 50),
    ("Moderate", 4.5, 9.4, 51, 100),
    ("Unhealthy for Sensitive Groups", 9.5, 12.4, 101, 150),
    ("Unhealthy", 12.5, 15.4, 151, 200),
    ("Very unhealthy", 15.5, 30.4, 201, 300),
    ("Hazardous", 30.5, 40.4, 301, 400),
];

const SO2: [Band; EPA_BANDS] = [
    ("Good", 0.0, 35.0, 0, 50),
    ("Moderate", 36.0, 75.0, 51, 100),
    ("Unhealthy for Sensitive Groups", 76.0, 185.0, 101, 150),
    ("Unhealthy", 186.0, 304.0, 151, 200),
    ("Very unhealthy", 305.0, 604.0, 201, 300),
    ("Hazardous", 605.0, 804.0, 301, 400),
];

const NO2: [Band; EPA_BANDS] = [
    ("Good", 0.0, 53.0, 0, 50),
    ("Moderate", 54.0, 100.0, 51, 100),
    ("Unhealthy for Sensitive Groups", 101.0, 360.0, 101, 150),
    ("Unhealthy", 361.0, 649.0, 151, 200),
    ("Very unhealthy", 650.0, 1249.0, 201, 300),
    ("Hazardous", 1250.0, 1649.0, 301, 400),
];

fn pollutant(name: &str, molecular_weight: f64, bands: &[Band; EPA_BANDS]) -> PollutantInfo {
    // Fits: EPA_BANDS <= MAX_BREAKPOINTS is checked at compile time.
    let breakpoints: Breakpoints = bands
        .iter()
        .map(|&(category, c_low, c_high, aqi_low, aqi_high)| {
            BreakPoint::new(category, (c_low, c_high), (aqi_low, aqi_high))
        })
        .collect();

    PollutantInfo {
        name: name.into(),
        molecular_weight,
        breakpoints,
    }
}

/// Default US EPA pollutant information
pub fn epa_pollutants() -> Vec<PollutantInfo> {
    alloc::vec![
        pollutant("o3", MOLECULAR_WEIGHT_O3, &O3),
        pollutant("pm2_5", 0.0, &PM2_5),
        pollutant("pm10", 0.0, &PM10),
        pollutant("co", MOLECULAR_WEIGHT_CO, &CO),
        pollutant("so2", MOLECULAR_WEIGHT_SO2, &SO2),
        pollutant("no2", MOLECULAR_WEIGHT_NO2, &NO2),
    ]
}
