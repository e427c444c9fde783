//! Scenario runner for batch and sensitivity projections
//!
//! Applies the configured validation policy once per input, then fans the
//! independent projections out over the rayon pool.

mod loader;

pub use loader::{load_scenarios, load_scenarios_from_reader};

use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::projection::{NamedScenario, ProjectionEngine, ProjectionInput, ProjectionResult};

/// Outcome of one named scenario in a batch
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: Result<ProjectionResult>,
}

/// One cell of an escalation x discount sensitivity grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityPoint {
    pub escalation_rate: f64,
    pub discount_rate: f64,
    pub total_revenue: f64,
    pub net_present_value: f64,
    pub levelized_cost: f64,
}

/// Runs projections under a shared configuration
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_env()?;
/// let grid = runner.sensitivity(&base, &[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0])?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
    config: AnalyzerConfig,
}

impl ScenarioRunner {
    /// Create runner with the default (strict) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with configuration read from the environment
    pub fn from_env() -> Result<Self> {
        Ok(Self::with_config(AnalyzerConfig::from_env()?))
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(),
            config,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run a single projection, checking the input against the policy first
    pub fn run(&self, input: &ProjectionInput) -> Result<ProjectionResult> {
        self.config.check(input)?;
        Ok(self.engine.project(input))
    }

    /// Run every scenario in parallel; outcomes keep the input order
    pub fn run_batch(&self, scenarios: &[NamedScenario]) -> Vec<ScenarioOutcome> {
        info!("Running {} scenarios", scenarios.len());

        let outcomes: Vec<ScenarioOutcome> = scenarios
            .par_iter()
            .map(|scenario| ScenarioOutcome {
                name: scenario.name.clone(),
                result: self.run(&scenario.input),
            })
            .collect();

        for outcome in &outcomes {
            if let Err(e) = &outcome.result {
                warn!("Scenario {} rejected: {}", outcome.name, e);
            }
        }

        outcomes
    }

    /// Project every (escalation, discount) pair applied to `base`.
    ///
    /// Points are escalation-major: all discount rates for the first
    /// escalation rate come first. Fails on the first rejected input, or up
    /// front when the grid exceeds the configured size limit.
    pub fn sensitivity(
        &self,
        base: &ProjectionInput,
        escalation_rates: &[f64],
        discount_rates: &[f64],
    ) -> Result<Vec<SensitivityPoint>> {
        self.config.check_grid(escalation_rates.len(), discount_rates.len())?;

        let inputs: Vec<ProjectionInput> = escalation_rates
            .iter()
            .flat_map(|&escalation_rate| {
                discount_rates.iter().map(move |&discount_rate| ProjectionInput {
                    escalation_rate,
                    discount_rate,
                    ..*base
                })
            })
            .collect();

        info!(
            "Sensitivity grid: {} escalation x {} discount rates",
            escalation_rates.len(),
            discount_rates.len()
        );

        inputs
            .par_iter()
            .map(|input| -> Result<SensitivityPoint> {
                let result = self.run(input)?;
                Ok(SensitivityPoint {
                    escalation_rate: input.escalation_rate,
                    discount_rate: input.discount_rate,
                    total_revenue: result.total_revenue,
                    net_present_value: result.net_present_value,
                    levelized_cost: result.levelized_cost,
                })
            })
            .collect()
    }
}
