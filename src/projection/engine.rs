//! Core projection engine for annual PPA cash flows

use log::debug;

use super::discount::DiscountCurve;
use super::input::ProjectionInput;
use super::result::ProjectionResult;
use crate::error::Result;

/// Annual cash-flow projection engine.
///
/// Stateless; holds no assumptions beyond what the input carries, so a single
/// engine can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionEngine;

impl ProjectionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run the projection without checking preconditions.
    ///
    /// Degenerate inputs propagate through the arithmetic: zero capacity gives
    /// an all-zero projection and zero contract years gives empty sequences
    /// with a NaN levelized cost.
    pub fn project(&self, input: &ProjectionInput) -> ProjectionResult {
        let annual_generation = input.annual_generation();
        let growth = 1.0 + input.escalation_decimal();
        let curve = DiscountCurve::from_percent(input.discount_rate);

        let mut result = ProjectionResult::with_capacity(input.contract_years as usize, annual_generation);

        for year in 1..=input.contract_years {
            // Year 1 is priced at the base price, unescalated
            let price = input.base_price * growth.powf(f64::from(year - 1));
            let revenue = price * annual_generation;
            let present_value = curve.present_value(revenue, year);
            result.push_year(year, price, revenue, present_value);
        }

        result.total_revenue = result.revenues.iter().sum();
        result.net_present_value = result.present_values.iter().sum();
        result.levelized_cost =
            result.net_present_value / (annual_generation * input.contract_years as f64);

        debug!(
            "Projected {} years: revenue={:.2} npv={:.2} levelized={:.4}",
            input.contract_years, result.total_revenue, result.net_present_value, result.levelized_cost
        );

        result
    }

    /// Validate the input, then run the projection
    pub fn try_project(&self, input: &ProjectionInput) -> Result<ProjectionResult> {
        input.validate()?;
        Ok(self.project(input))
    }
}
