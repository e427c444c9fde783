//! Key financial terms extracted from a PPA document

use serde::{Deserialize, Serialize};

/// Placeholder shown for a term the extraction did not find
pub const NOT_AVAILABLE: &str = "Not available";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermField {
    PriceStructure,
    Duration,
    PaymentTerms,
    Commitments,
    Escalation,
    CreditRequirements,
}

impl TermField {
    pub const ALL: [TermField; 6] = [
        TermField::PriceStructure,
        TermField::Duration,
        TermField::PaymentTerms,
        TermField::Commitments,
        TermField::Escalation,
        TermField::CreditRequirements,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TermField::PriceStructure => "Price Structure",
            TermField::Duration => "Contract Duration",
            TermField::PaymentTerms => "Payment Terms",
            TermField::Commitments => "Capacity & Energy Commitments",
            TermField::Escalation => "Price Escalation",
            TermField::CreditRequirements => "Credit Requirements",
        }
    }
}

/// Free-text financial terms; any of them may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialTerms {
    pub price_structure: Option<String>,
    pub duration: Option<String>,
    pub payment_terms: Option<String>,
    pub commitments: Option<String>,
    pub escalation: Option<String>,
    pub credit_requirements: Option<String>,
}

impl FinancialTerms {
    pub fn get(&self, field: TermField) -> Option<&str> {
        let value = match field {
            TermField::PriceStructure => &self.price_structure,
            TermField::Duration => &self.duration,
            TermField::PaymentTerms => &self.payment_terms,
            TermField::Commitments => &self.commitments,
            TermField::Escalation => &self.escalation,
            TermField::CreditRequirements => &self.credit_requirements,
        };
        value.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Term text, or "Not available" when absent or blank
    pub fn display(&self, field: TermField) -> &str {
        self.get(field).unwrap_or(NOT_AVAILABLE)
    }
}
