//! Analyzer configuration passed explicitly to the calling layer

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};
use crate::projection::ProjectionInput;

/// Environment variable selecting the validation policy
pub const VALIDATION_ENV: &str = "PPA_VALIDATION";

/// Environment variable overriding the maximum contract duration
pub const MAX_CONTRACT_YEARS_ENV: &str = "PPA_MAX_CONTRACT_YEARS";

/// Environment variable overriding the sensitivity grid size limit
pub const MAX_SENSITIVITY_POINTS_ENV: &str = "PPA_MAX_SENSITIVITY_POINTS";

/// Upper bound on contract years accepted by the simulator
pub const DEFAULT_MAX_CONTRACT_YEARS: u32 = 50;

/// Upper bound on escalation x discount pairs in one sensitivity run
pub const DEFAULT_MAX_SENSITIVITY_POINTS: usize = 400;

/// How inputs are checked before projecting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Reject invalid inputs with `InvalidInput`
    #[default]
    Strict,
    /// Skip input checks; degenerate values propagate as NaN/Infinity.
    /// The contract-year cap still applies.
    Permissive,
}

impl std::str::FromStr for ValidationPolicy {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ValidationPolicy::Strict),
            "permissive" => Ok(ValidationPolicy::Permissive),
            other => Err(ProjectionError::Config(format!("Unknown validation policy: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Parameters the simulator starts from before the user edits them
    pub defaults: ProjectionInput,

    pub validation: ValidationPolicy,

    /// Longest contract accepted, under either policy
    pub max_contract_years: u32,

    /// Largest sensitivity grid accepted, under either policy
    pub max_sensitivity_points: usize,
}

impl AnalyzerConfig {
    /// Build from `PPA_VALIDATION`, `PPA_MAX_CONTRACT_YEARS` and
    /// `PPA_MAX_SENSITIVITY_POINTS`, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(VALIDATION_ENV) {
            config.validation = value.parse()?;
        }

        if let Some(value) = lookup(MAX_CONTRACT_YEARS_ENV) {
            config.max_contract_years = parse_limit(MAX_CONTRACT_YEARS_ENV, &value)?;
        }

        if let Some(value) = lookup(MAX_SENSITIVITY_POINTS_ENV) {
            config.max_sensitivity_points = parse_limit(MAX_SENSITIVITY_POINTS_ENV, &value)?;
        }

        Ok(config)
    }

    /// Apply the configured policy to an input
    pub fn check(&self, input: &ProjectionInput) -> Result<()> {
        if self.validation == ValidationPolicy::Strict {
            input.validate()?;
        }
        if input.contract_years > self.max_contract_years {
            return Err(ProjectionError::invalid(
                "contractYears",
                format!("must be at most {}, got {}", self.max_contract_years, input.contract_years),
            ));
        }
        Ok(())
    }

    /// Reject sensitivity grids with more points than the configured limit
    pub fn check_grid(&self, escalation_points: usize, discount_points: usize) -> Result<()> {
        let points = escalation_points.saturating_mul(discount_points);
        if points > self.max_sensitivity_points {
            return Err(ProjectionError::invalid(
                "sensitivityGrid",
                format!("{} points exceeds the limit of {}", points, self.max_sensitivity_points),
            ));
        }
        Ok(())
    }
}

fn parse_limit<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr + PartialEq + Default,
{
    let limit: T = value.trim().parse().map_err(|_| {
        ProjectionError::Config(format!("{} must be a positive integer, got {:?}", key, value))
    })?;
    if limit == T::default() {
        return Err(ProjectionError::Config(format!("{} must be at least 1", key)));
    }
    Ok(limit)
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            defaults: ProjectionInput::default(),
            validation: ValidationPolicy::Strict,
            max_contract_years: DEFAULT_MAX_CONTRACT_YEARS,
            max_sensitivity_points: DEFAULT_MAX_SENSITIVITY_POINTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = AnalyzerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AnalyzerConfig::default());
        assert_eq!(config.validation, ValidationPolicy::Strict);
    }

    #[test]
    fn test_overrides() {
        let config = AnalyzerConfig::from_lookup(lookup(&[
            (VALIDATION_ENV, "Permissive"),
            (MAX_CONTRACT_YEARS_ENV, "30"),
            (MAX_SENSITIVITY_POINTS_ENV, "25"),
        ]))
        .unwrap();
        assert_eq!(config.validation, ValidationPolicy::Permissive);
        assert_eq!(config.max_contract_years, 30);
        assert_eq!(config.max_sensitivity_points, 25);
    }

    #[test]
    fn test_bad_values() {
        assert!(AnalyzerConfig::from_lookup(lookup(&[(VALIDATION_ENV, "lenient")])).is_err());
        assert!(AnalyzerConfig::from_lookup(lookup(&[(MAX_CONTRACT_YEARS_ENV, "ten")])).is_err());
        assert!(AnalyzerConfig::from_lookup(lookup(&[(MAX_CONTRACT_YEARS_ENV, "0")])).is_err());
        assert!(AnalyzerConfig::from_lookup(lookup(&[(MAX_SENSITIVITY_POINTS_ENV, "-5")])).is_err());
    }

    #[test]
    fn test_year_cap_applies_under_both_policies() {
        let long = ProjectionInput { contract_years: 51, ..Default::default() };
        let huge = ProjectionInput { contract_years: 4_000_000_000, ..Default::default() };

        let strict = AnalyzerConfig::default();
        assert!(strict.check(&long).is_err());

        let permissive = AnalyzerConfig { validation: ValidationPolicy::Permissive, ..Default::default() };
        assert!(permissive.check(&long).is_err());
        assert!(matches!(
            permissive.check(&huge),
            Err(ProjectionError::InvalidInput { field: "contractYears", .. })
        ));

        // Permissive still lets degenerate-but-cheap inputs through
        let empty = ProjectionInput { contract_years: 0, ..Default::default() };
        assert!(permissive.check(&empty).is_ok());
    }

    #[test]
    fn test_grid_limit() {
        let config = AnalyzerConfig { max_sensitivity_points: 9, ..Default::default() };
        assert!(config.check_grid(3, 3).is_ok());
        assert!(config.check_grid(3, 4).is_err());
        assert!(config.check_grid(usize::MAX, 2).is_err());
    }
}
