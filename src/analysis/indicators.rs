//! Score classifiers for project risk and news sentiment

use serde::{Deserialize, Serialize};

/// Risk band for a project or company risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Unknown,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Scores below 35 are low and below 45 medium. A missing, zero or NaN
    /// score is treated as not yet assessed.
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            None => RiskLevel::Unknown,
            Some(s) if s == 0.0 || s.is_nan() => RiskLevel::Unknown,
            Some(s) if s < 35.0 => RiskLevel::Low,
            Some(s) if s < 45.0 => RiskLevel::Medium,
            Some(_) => RiskLevel::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Unknown => "Unknown",
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }
}

/// Sentiment band for a news score, typically in [-1, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Unknown,
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// 0.5 and above is positive, 0 and above neutral, anything else negative
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            None => Sentiment::Unknown,
            Some(s) if s >= 0.5 => Sentiment::Positive,
            Some(s) if s >= 0.0 => Sentiment::Neutral,
            Some(_) => Sentiment::Negative,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Unknown => "Unknown",
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}
