//! Load named projection scenarios from CSV
//!
//! Expected header:
//! `name,basePrice,annualCapacity,capacityFactor,contractYears,escalationRate,discountRate`

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use log::info;

use crate::error::Result;
use crate::projection::{NamedScenario, ProjectionInput};

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    name: String,
    #[serde(rename = "basePrice")]
    base_price: f64,
    #[serde(rename = "annualCapacity")]
    annual_capacity: f64,
    #[serde(rename = "capacityFactor")]
    capacity_factor: f64,
    #[serde(rename = "contractYears")]
    contract_years: u32,
    #[serde(rename = "escalationRate")]
    escalation_rate: f64,
    #[serde(rename = "discountRate")]
    discount_rate: f64,
}

impl From<CsvRow> for NamedScenario {
    fn from(row: CsvRow) -> Self {
        NamedScenario::new(
            row.name,
            ProjectionInput {
                base_price: row.base_price,
                annual_capacity: row.annual_capacity,
                capacity_factor: row.capacity_factor,
                contract_years: row.contract_years,
                escalation_rate: row.escalation_rate,
                discount_rate: row.discount_rate,
            },
        )
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let scenarios = load_scenarios_from_reader(file)?;
    info!("Loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<NamedScenario>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into());
    }

    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;

    const SAMPLE: &str = "\
name,basePrice,annualCapacity,capacityFactor,contractYears,escalationRate,discountRate
Solar 100MW, 50, 100, 85, 20, 2.0, 5.0
Wind 250MW,42.5,250,38,15,1.5,6.5
";

    #[test]
    fn test_load_from_reader() {
        let scenarios = load_scenarios_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 2);

        assert_eq!(scenarios[0].name, "Solar 100MW");
        assert_eq!(scenarios[0].input, ProjectionInput::default());

        let wind = &scenarios[1].input;
        assert_eq!(wind.contract_years, 15);
        assert_eq!(wind.base_price, 42.5);
        assert_eq!(wind.discount_rate, 6.5);
    }

    #[test]
    fn test_malformed_row() {
        let data = "\
name,basePrice,annualCapacity,capacityFactor,contractYears,escalationRate,discountRate
Bad,fifty,100,85,20,2.0,5.0
";
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ProjectionError::Csv(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_scenarios("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, ProjectionError::Io(_)));
    }
}
