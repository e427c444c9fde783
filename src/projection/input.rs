//! Simulation parameters for a PPA cash-flow projection

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

/// Hours in a (non-leap) year, used to convert capacity to annual generation
pub const ANNUAL_HOURS: f64 = 8760.0;

/// The six scalar inputs of a projection.
///
/// Rates and the capacity factor are expressed in percent, matching how the
/// dashboard's simulator collects them (`2.0` means 2%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    /// Contract price in year 1 ($/MWh)
    pub base_price: f64,

    /// Nameplate capacity (MW)
    pub annual_capacity: f64,

    /// Capacity factor (%)
    pub capacity_factor: f64,

    /// Contract duration (years)
    pub contract_years: u32,

    /// Annual price escalation (%)
    pub escalation_rate: f64,

    /// Annual discount rate (%)
    pub discount_rate: f64,
}

impl ProjectionInput {
    /// Expected generation per year (MWh), constant across the contract
    pub fn annual_generation(&self) -> f64 {
        self.annual_capacity * (self.capacity_factor / 100.0) * ANNUAL_HOURS
    }

    /// Escalation as a decimal growth rate
    pub fn escalation_decimal(&self) -> f64 {
        self.escalation_rate / 100.0
    }

    /// Check the preconditions the engine itself does not enforce.
    ///
    /// Zero base price or capacity is allowed (it projects to zeros); a zero
    /// capacity factor is not, since the simulator bounds it to (0, 100].
    pub fn validate(&self) -> Result<()> {
        let reals = [
            ("basePrice", self.base_price),
            ("annualCapacity", self.annual_capacity),
            ("capacityFactor", self.capacity_factor),
            ("escalationRate", self.escalation_rate),
            ("discountRate", self.discount_rate),
        ];
        for (field, value) in reals {
            if !value.is_finite() {
                return Err(ProjectionError::invalid(field, format!("must be finite, got {}", value)));
            }
        }

        if self.base_price < 0.0 {
            return Err(ProjectionError::invalid("basePrice", "must not be negative"));
        }
        if self.annual_capacity < 0.0 {
            return Err(ProjectionError::invalid("annualCapacity", "must not be negative"));
        }
        if self.capacity_factor <= 0.0 || self.capacity_factor > 100.0 {
            return Err(ProjectionError::invalid(
                "capacityFactor",
                format!("must be in (0, 100], got {}", self.capacity_factor),
            ));
        }
        if self.contract_years == 0 {
            return Err(ProjectionError::invalid("contractYears", "must be at least 1"));
        }
        if self.escalation_rate <= -100.0 {
            return Err(ProjectionError::invalid("escalationRate", "must be greater than -100%"));
        }
        if self.discount_rate <= -100.0 {
            return Err(ProjectionError::invalid("discountRate", "must be greater than -100%"));
        }

        Ok(())
    }
}

impl Default for ProjectionInput {
    /// 100 MW at 85% capacity factor, $50/MWh escalating 2% over 20 years, 5% discount
    fn default() -> Self {
        Self {
            base_price: 50.0,
            annual_capacity: 100.0,
            capacity_factor: 85.0,
            contract_years: 20,
            escalation_rate: 2.0,
            discount_rate: 5.0,
        }
    }
}

/// A projection input with a display name, as read from a scenario file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedScenario {
    pub name: String,
    #[serde(flatten)]
    pub input: ProjectionInput,
}

impl NamedScenario {
    pub fn new(name: impl Into<String>, input: ProjectionInput) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}
