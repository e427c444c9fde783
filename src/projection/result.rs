//! Projection output structures

use serde::{Deserialize, Serialize};

/// Year-by-year projection output.
///
/// Each sequence holds one entry per contract year and is index-aligned with
/// `years`. The struct serializes to the shape the dashboard charts consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Year labels, 1..=contract_years
    pub years: Vec<u32>,

    /// Escalated contract price per year ($/MWh)
    pub prices: Vec<f64>,

    /// Undiscounted revenue per year ($)
    pub revenues: Vec<f64>,

    /// Revenue discounted to today ($)
    pub present_values: Vec<f64>,

    /// Running sum of revenues
    pub cumulative_revenue: Vec<f64>,

    /// Running sum of present values
    #[serde(rename = "cumulativeNPV")]
    pub cumulative_npv: Vec<f64>,

    pub total_revenue: f64,
    pub net_present_value: f64,

    /// NPV per undiscounted MWh over the contract
    pub levelized_cost: f64,

    /// Generation per year (MWh)
    pub annual_generation: f64,
}

/// A single year of projection output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    pub year: u32,
    pub price: f64,
    pub revenue: f64,
    pub present_value: f64,
    pub cumulative_revenue: f64,
    pub cumulative_npv: f64,
}

impl ProjectionResult {
    pub(crate) fn with_capacity(contract_years: usize, annual_generation: f64) -> Self {
        Self {
            years: Vec::with_capacity(contract_years),
            prices: Vec::with_capacity(contract_years),
            revenues: Vec::with_capacity(contract_years),
            present_values: Vec::with_capacity(contract_years),
            cumulative_revenue: Vec::with_capacity(contract_years),
            cumulative_npv: Vec::with_capacity(contract_years),
            total_revenue: 0.0,
            net_present_value: 0.0,
            levelized_cost: 0.0,
            annual_generation,
        }
    }

    /// Append one year, extending the running sums
    pub(crate) fn push_year(&mut self, year: u32, price: f64, revenue: f64, present_value: f64) {
        let prev_revenue = self.cumulative_revenue.last().copied().unwrap_or(0.0);
        let prev_npv = self.cumulative_npv.last().copied().unwrap_or(0.0);

        self.years.push(year);
        self.prices.push(price);
        self.revenues.push(revenue);
        self.present_values.push(present_value);
        self.cumulative_revenue.push(prev_revenue + revenue);
        self.cumulative_npv.push(prev_npv + present_value);
    }

    /// Number of projected years
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Row for the given 0-based year index; `None` if any sequence is too short
    pub fn row(&self, index: usize) -> Option<YearRow> {
        Some(YearRow {
            year: *self.years.get(index)?,
            price: *self.prices.get(index)?,
            revenue: *self.revenues.get(index)?,
            present_value: *self.present_values.get(index)?,
            cumulative_revenue: *self.cumulative_revenue.get(index)?,
            cumulative_npv: *self.cumulative_npv.get(index)?,
        })
    }

    /// Iterate over the projection one year at a time
    pub fn rows(&self) -> impl Iterator<Item = YearRow> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary {
            contract_years: self.len() as u32,
            annual_generation: self.annual_generation,
            total_revenue: self.total_revenue,
            net_present_value: self.net_present_value,
            levelized_cost: self.levelized_cost,
            first_year_price: self.prices.first().copied().unwrap_or(0.0),
            final_year_price: self.prices.last().copied().unwrap_or(0.0),
        }
    }
}

/// Headline figures for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub contract_years: u32,
    pub annual_generation: f64,
    pub total_revenue: f64,
    pub net_present_value: f64,
    pub levelized_cost: f64,
    pub first_year_price: f64,
    pub final_year_price: f64,
}
