//! Risk findings and their severity/category summaries

use serde::{Deserialize, Serialize};

use super::terms::FinancialTerms;
use crate::error::Result;

/// Severity assigned to a risk finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// A single risk identified in a PPA document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFinding {
    pub id: u32,
    pub category: String,
    pub severity: Severity,
    pub description: String,
    #[serde(default)]
    pub mitigation: String,
}

/// Analysis result for one PPA document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpaAnalysis {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub risks: Vec<RiskFinding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_terms: Option<FinancialTerms>,
}

/// Number of findings per severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SeverityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// Findings grouped under one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub name: String,
    pub count: usize,
    pub high_count: usize,
}

impl PpaAnalysis {
    /// Parse an analysis payload
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn severity_counts(&self) -> SeverityCounts {
        let mut counts = SeverityCounts::default();
        for risk in &self.risks {
            match risk.severity {
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => counts.low += 1,
            }
        }
        counts
    }

    /// Per-category counts, in the order categories first appear
    pub fn category_breakdown(&self) -> Vec<CategoryBreakdown> {
        let mut breakdown: Vec<CategoryBreakdown> = Vec::new();

        for risk in &self.risks {
            let idx = match breakdown.iter().position(|c| c.name == risk.category) {
                Some(idx) => idx,
                None => {
                    breakdown.push(CategoryBreakdown {
                        name: risk.category.clone(),
                        count: 0,
                        high_count: 0,
                    });
                    breakdown.len() - 1
                }
            };

            let entry = &mut breakdown[idx];
            entry.count += 1;
            if risk.severity == Severity::High {
                entry.high_count += 1;
            }
        }

        breakdown
    }

    /// Findings whose category is one of `categories` and whose severity is
    /// one of `severities`, narrowed to those whose description or category
    /// contains `search` case-insensitively. An empty list or search matches all.
    pub fn filter<'a>(
        &'a self,
        severities: &[Severity],
        categories: &[&str],
        search: &str,
    ) -> Vec<&'a RiskFinding> {
        let needle = search.trim().to_lowercase();

        self.risks
            .iter()
            .filter(|risk| categories.is_empty() || categories.iter().any(|c| *c == risk.category))
            .filter(|risk| severities.is_empty() || severities.contains(&risk.severity))
            .filter(|risk| {
                needle.is_empty()
                    || risk.description.to_lowercase().contains(&needle)
                    || risk.category.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;

    const SAMPLE: &str = r#"{
        "summary": "20-year contract for a 100MW solar facility.",
        "risks": [
            {"id": 1, "category": "Pricing", "severity": "HIGH",
             "description": "Escalation clause allows for price increases above market rates",
             "mitigation": "Cap the escalation formula"},
            {"id": 2, "category": "Operational", "severity": "MEDIUM",
             "description": "Ambiguous performance guarantees for capacity factors",
             "mitigation": "Clarify minimum performance standards"},
            {"id": 3, "category": "Pricing", "severity": "LOW",
             "description": "Settlement period longer than market norm"}
        ]
    }"#;

    fn sample() -> PpaAnalysis {
        PpaAnalysis::from_json(SAMPLE).unwrap()
    }

    #[test]
    fn test_severity_counts() {
        let counts = sample().severity_counts();
        assert_eq!(counts, SeverityCounts { high: 1, medium: 1, low: 1 });
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.get(Severity::High), 1);
    }

    #[test]
    fn test_category_breakdown_order() {
        let breakdown = sample().category_breakdown();
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0], CategoryBreakdown { name: "Pricing".into(), count: 2, high_count: 1 });
        assert_eq!(breakdown[1], CategoryBreakdown { name: "Operational".into(), count: 1, high_count: 0 });
    }

    #[test]
    fn test_filter() {
        let analysis = sample();
        assert_eq!(analysis.filter(&[], &[], "").len(), 3);
        assert_eq!(analysis.filter(&[Severity::High, Severity::Low], &[], "").len(), 2);

        let hits = analysis.filter(&[], &[], "CAPACITY");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);

        assert!(analysis.filter(&[Severity::Medium], &[], "pricing").is_empty());
    }

    #[test]
    fn test_filter_by_category_and_severity() {
        let analysis = sample();

        let pricing: Vec<u32> = analysis.filter(&[], &["Pricing"], "").iter().map(|r| r.id).collect();
        assert_eq!(pricing, [1, 3]);

        let pricing_low: Vec<u32> = analysis
            .filter(&[Severity::Low], &["Pricing"], "")
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(pricing_low, [3]);

        let either: Vec<u32> = analysis
            .filter(&[Severity::High, Severity::Medium], &["Pricing", "Operational"], "")
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(either, [1, 2]);

        // Category names match exactly
        assert!(analysis.filter(&[], &["pricing"], "").is_empty());
        assert!(analysis.filter(&[Severity::High], &["Operational"], "").is_empty());
    }

    #[test]
    fn test_rejects_unknown_severity() {
        let err = PpaAnalysis::from_json(
            r#"{"summary":"","risks":[{"id":1,"category":"Legal","severity":"CRITICAL","description":"x"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ProjectionError::Json(_)));
    }

    #[test]
    fn test_empty_payload() {
        let analysis = PpaAnalysis::from_json("{}").unwrap();
        assert_eq!(analysis.severity_counts().total(), 0);
        assert!(analysis.category_breakdown().is_empty());
        assert!(analysis.financial_terms.is_none());
    }
}
