//! Reference Table Consistency Checks
//!
//! The calculator assumes each pollutant's bands ascend, do not overlap, and
//! cover increasing AQI ranges. It never checks. This module does, and
//! reports every problem it finds instead of stopping at the first.
//!
//! ## What Gets Checked
//!
//! ```text
//! Check                         | Severity
//! ------------------------------|---------
//! No bands                      | Error
//! Low bound above high bound    | Error
//! Negative or non-finite bound  | Error
//! Bands out of order            | Error
//! Bands overlapping or touching | Error
//! AQI ranges overlapping        | Error
//! Bad molecular weight          | Error
//! AQI above 500                 | Warning
//! AQI ranges not contiguous     | Warning
//! Empty table                   | Warning
//! Concentration gap             | Info
//! No molecular weight           | Info
//! ```
//!
//! Gaps between bands are normal in EPA tables (12.0 → 12.1) and reported
//! only as info.

use aqicalc_core::constants::AQI_SCALE_MAX;
use aqicalc_core::{BreakPoint, PollutantInfo, PollutantTable};

/// Check a whole table
pub fn check_table(table: &PollutantTable) -> TableReport {
    let mut report = TableReport::new();

    if table.is_empty() {
        report.add(TableIssue::new(
            IssueType::EmptyTable,
            "",
            None,
            "Table defines no pollutants".to_string(),
            Severity::Warning,
        ));
    }

    for info in table.iter() {
        check_pollutant(info, &mut report);
    }

    if !report.is_valid() {
        log::warn!("Reference table has {} errors", report.errors.len());
    }

    report
}

/// Check a single pollutant, appending findings to `report`
pub fn check_pollutant(info: &PollutantInfo, report: &mut TableReport) {
    let name = info.name.as_str();

    if info.breakpoints.is_empty() {
        report.add(TableIssue::new(
            IssueType::NoBreakpoints,
            name,
            None,
            "Pollutant defines no breakpoints".to_string(),
            Severity::Error,
        ));
    }

    if info.molecular_weight == 0.0 {
        report.add(TableIssue::new(
            IssueType::NoMolecularWeight,
            name,
            None,
            "No molecular weight; ppb/ppm conversion unavailable".to_string(),
            Severity::Info,
        ));
    } else if !info.has_molecular_weight() {
        report.add(TableIssue::new(
            IssueType::InvalidMolecularWeight,
            name,
            None,
            format!("Molecular weight {} is not a positive number", info.molecular_weight),
            Severity::Error,
        ));
    }

    for (index, band) in info.breakpoints.iter().enumerate() {
        check_band(name, index, band, report);
    }

    for (index, pair) in info.breakpoints.windows(2).enumerate() {
        check_neighbours(name, index + 1, &pair[0], &pair[1], report);
    }
}

fn check_band(name: &str, index: usize, band: &BreakPoint, report: &mut TableReport) {
    let bounds_finite = band.concentration_low.is_finite() && band.concentration_high.is_finite();
    if !bounds_finite || band.concentration_low < 0.0 {
        report.add(TableIssue::new(
            IssueType::InvalidBound,
            name,
            Some(index),
            format!(
                "'{}' has invalid bounds [{}, {}]",
                band.category_name, band.concentration_low, band.concentration_high
            ),
            Severity::Error,
        ));
    }

    if band.concentration_low > band.concentration_high {
        report.add(TableIssue::new(
            IssueType::InvertedBand,
            name,
            Some(index),
            format!(
                "'{}' low bound {} is above high bound {}",
                band.category_name, band.concentration_low, band.concentration_high
            ),
            Severity::Error,
        ));
    }

    if band.aqi_low > band.aqi_high {
        report.add(TableIssue::new(
            IssueType::InvertedAqi,
            name,
            Some(index),
            format!(
                "'{}' AQI low {} is above AQI high {}",
                band.category_name, band.aqi_low, band.aqi_high
            ),
            Severity::Error,
        ));
    }

    if band.aqi_high > AQI_SCALE_MAX {
        report.add(TableIssue::new(
            IssueType::AqiAboveScale,
            name,
            Some(index),
            format!("'{}' AQI {} exceeds {}", band.category_name, band.aqi_high, AQI_SCALE_MAX),
            Severity::Warning,
        ));
    }
}

fn check_neighbours(
    name: &str,
    index: usize,
    previous: &BreakPoint,
    band: &BreakPoint,
    report: &mut TableReport,
) {
    if band.concentration_low < previous.concentration_low {
        report.add(TableIssue::new(
            IssueType::OutOfOrder,
            name,
            Some(index),
            format!(
                "'{}' starts at {}, below '{}' at {}",
                band.category_name, band.concentration_low,
                previous.category_name, previous.concentration_low
            ),
            Severity::Error,
        ));
    } else if band.concentration_low <= previous.concentration_high {
        report.add(TableIssue::new(
            IssueType::Overlap,
            name,
            Some(index),
            format!(
                "'{}' starts at {}, inside '{}' ending at {}",
                band.category_name, band.concentration_low,
                previous.category_name, previous.concentration_high
            ),
            Severity::Error,
        ));
    } else {
        report.add(TableIssue::new(
            IssueType::Gap,
            name,
            Some(index),
            format!(
                "Concentrations ({}, {}) fall between '{}' and '{}'",
                previous.concentration_high, band.concentration_low,
                previous.category_name, band.category_name
            ),
            Severity::Info,
        ));
    }

    if band.aqi_low <= previous.aqi_high {
        report.add(TableIssue::new(
            IssueType::AqiOverlap,
            name,
            Some(index),
            format!(
                "'{}' AQI starts at {}, not above '{}' AQI {}",
                band.category_name, band.aqi_low, previous.category_name, previous.aqi_high
            ),
            Severity::Error,
        ));
    } else if band.aqi_low > previous.aqi_high + 1 {
        report.add(TableIssue::new(
            IssueType::AqiDiscontinuity,
            name,
            Some(index),
            format!(
                "AQI values {}..{} are unreachable between '{}' and '{}'",
                previous.aqi_high + 1, band.aqi_low,
                previous.category_name, band.category_name
            ),
            Severity::Warning,
        ));
    }
}

/// Findings from a table check
#[derive(Debug, Default)]
pub struct TableReport {
    /// Problems that make calculation results wrong
    pub errors: Vec<TableIssue>,

    /// Suspicious but usable
    pub warnings: Vec<TableIssue>,

    /// Informational notes
    pub info: Vec<TableIssue>,
}

impl TableReport {
    /// Create new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the table passed (no errors)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// File an issue under its severity
    pub fn add(&mut self, issue: TableIssue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
            Severity::Info => self.info.push(issue),
        }
    }

    /// Get total issue count
    pub fn total_issues(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.info.len()
    }

    /// All issues of one type, any severity
    pub fn issues_of(&self, issue_type: IssueType) -> impl Iterator<Item = &TableIssue> {
        self.errors
            .iter()
            .chain(&self.warnings)
            .chain(&self.info)
            .filter(move |issue| issue.issue_type == issue_type)
    }
}

/// Individual table issue
#[derive(Debug, Clone)]
pub struct TableIssue {
    /// Type of issue
    pub issue_type: IssueType,

    /// Pollutant the issue belongs to (empty for table-wide issues)
    pub pollutant: String,

    /// Band index, if the issue concerns one band
    pub band: Option<usize>,

    /// Human-readable message
    pub message: String,

    /// Issue severity
    pub severity: Severity,
}

impl TableIssue {
    fn new(
        issue_type: IssueType,
        pollutant: &str,
        band: Option<usize>,
        message: String,
        severity: Severity,
    ) -> Self {
        Self {
            issue_type,
            pollutant: pollutant.to_string(),
            band,
            message,
            severity,
        }
    }
}

/// Types of table issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    /// Table has no pollutants
    EmptyTable,

    /// Pollutant has no bands
    NoBreakpoints,

    /// Molecular weight is negative or not a number
    InvalidMolecularWeight,

    /// Pollutant cannot be converted to ppb/ppm
    NoMolecularWeight,

    /// Concentration bound negative or non-finite
    InvalidBound,

    /// Band low bound above high bound
    InvertedBand,

    /// Band AQI low above AQI high
    InvertedAqi,

    /// AQI beyond the top of the EPA scale
    AqiAboveScale,

    /// Band starts below the previous band
    OutOfOrder,

    /// Band starts at or before the previous band's end
    Overlap,

    /// Concentrations between two bands belong to neither
    Gap,

    /// AQI range starts at or below the previous band's AQI
    AqiOverlap,

    /// AQI values skipped between bands
    AqiDiscontinuity,
}

/// Issue severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational only
    Info,

    /// Should be reviewed
    Warning,

    /// Must be fixed
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(info: PollutantInfo) -> PollutantTable {
        std::iter::once(info).collect()
    }

    #[test]
    fn epa_table_is_valid() {
        let report = check_table(&PollutantTable::epa());
        assert!(report.is_valid(), "{:?}", report.errors);
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);

        // Five precision gaps per pollutant, plus two particulates without MW
        assert_eq!(report.issues_of(IssueType::Gap).count(), 6 * 5);
        assert_eq!(report.issues_of(IssueType::NoMolecularWeight).count(), 2);
    }

    #[test]
    fn inverted_band_detected() {
        // Hazardous band written high-to-low
        let info = PollutantInfo::new("pm2_5")
            .with_breakpoints([
                BreakPoint::new("Very unhealthy", (150.5, 250.4), (201, 300)),
                BreakPoint::new("Hazardous", (350.4, 250.5), (301, 400)),
            ])
            .unwrap();

        let report = check_table(&single(info));
        assert!(!report.is_valid());
        let issue = report.issues_of(IssueType::InvertedBand).next().unwrap();
        assert_eq!(issue.pollutant, "pm2_5");
        assert_eq!(issue.band, Some(1));
    }

    #[test]
    fn overlap_detected() {
        // Shared 15.4 boundary between Unhealthy and Very unhealthy
        let info = PollutantInfo::new("co")
            .with_molecular_weight(28.01)
            .with_breakpoints([
                BreakPoint::new("Unhealthy", (12.5, 15.4), (151, 200)),
                BreakPoint::new("Very unhealthy", (15.4, 30.4), (201, 300)),
            ])
            .unwrap();

        let report = check_table(&single(info));
        assert_eq!(report.issues_of(IssueType::Overlap).count(), 1);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn order_and_aqi_problems_detected() {
        let info = PollutantInfo::new("x")
            .with_molecular_weight(-1.0)
            .with_breakpoints([
                BreakPoint::new("B", (10.0, 20.0), (51, 100)),
                BreakPoint::new("A", (0.0, 9.0), (0, 50)),
                BreakPoint::new("C", (21.0, 30.0), (120, 600)),
            ])
            .unwrap();

        let report = check_table(&single(info));
        assert_eq!(report.issues_of(IssueType::OutOfOrder).count(), 1);
        assert_eq!(report.issues_of(IssueType::AqiOverlap).count(), 1);
        assert_eq!(report.issues_of(IssueType::AqiDiscontinuity).count(), 1);
        assert_eq!(report.issues_of(IssueType::AqiAboveScale).count(), 1);
        assert_eq!(report.issues_of(IssueType::InvalidMolecularWeight).count(), 1);
    }

    #[test]
    fn empty_inputs_flagged() {
        let report = check_table(&PollutantTable::new());
        assert!(report.is_valid());
        assert_eq!(report.warnings[0].issue_type, IssueType::EmptyTable);

        let report = check_table(&single(PollutantInfo::new("co")));
        assert_eq!(report.errors[0].issue_type, IssueType::NoBreakpoints);
        assert_eq!(report.total_issues(), 2);
    }

    #[test]
    fn negative_bound_flagged() {
        let info = PollutantInfo::new("o3")
            .with_breakpoint(BreakPoint::new("Good", (-0.01, 0.054), (0, 50)))
            .unwrap();

        let report = check_table(&single(info));
        assert_eq!(report.issues_of(IssueType::InvalidBound).count(), 1);
    }
}
