//! Integration tests for table documents feeding the calculator

use aqicalc_core::{AqiCalculator, BandMatch, PollutantTable, UnitConverter};
use aqicalc_schemas::{
    check_table, load_epa_2018, load_table_json, table_to_json, IssueType, TableDocument,
};

#[test]
fn test_document_roundtrip_preserves_table() {
    let table = PollutantTable::epa();

    let json = table_to_json("roundtrip", &table).unwrap();
    let reloaded = load_table_json(&json).unwrap();

    assert_eq!(reloaded, table);

    let document: TableDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(document.source, "roundtrip");
    assert_eq!(document.pollutants.len(), 6);
}

#[test]
fn test_loaded_table_drives_calculations() {
    let table = load_epa_2018().unwrap();
    let calc = AqiCalculator::new(&table);
    let conv = UnitConverter::new(&table);

    assert_eq!(calc.calculate("pm2_5", 35.9).unwrap(), 102);
    assert_eq!(calc.calculate("o3", 0.078).unwrap(), 126);
    assert_eq!(calc.calculate("so2", 1100.0).unwrap(), 400);
    assert_eq!(conv.to_ppb("no2", 3.17).unwrap(), 1.685);
}

#[test]
fn test_flawed_table_is_reported_but_still_usable() {
    // Hazardous pm2_5 band with its bounds swapped
    let json = r#"{
        "source": "hand-edited",
        "pollutants": [
            {
                "name": "pm2_5",
                "breakpoints": [
                    { "category_name": "Very unhealthy", "concentration_low": 150.5,
                      "concentration_high": 250.4, "aqi_low": 201, "aqi_high": 300 },
                    { "category_name": "Hazardous", "concentration_low": 350.4,
                      "concentration_high": 250.5, "aqi_low": 301, "aqi_high": 400 }
                ]
            }
        ]
    }"#;

    let table = load_table_json(json).unwrap();
    let report = check_table(&table);
    assert!(!report.is_valid());
    assert_eq!(report.issues_of(IssueType::InvertedBand).count(), 1);

    // The calculator trusts the table: nothing contains 300, and the swapped
    // band's low bound makes it look like the next band up
    let calc = AqiCalculator::new(&table);
    let reading = calc.calculate_detailed("pm2_5", 300.0).unwrap();
    assert_eq!(reading.aqi, 301);
    assert_eq!(reading.band, BandMatch::Gap);
    assert_eq!(calc.calculate("pm2_5", 200.0).unwrap(), 250);
}
