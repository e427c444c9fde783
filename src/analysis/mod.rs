//! Typed schema for PPA document analysis payloads
//!
//! The backend returns the analysis as JSON; parsing it into these types
//! rejects unknown severities and missing fields at the boundary. Score
//! classifiers and document helpers cover the remaining dashboard records.

mod documents;
mod indicators;
mod risk;
mod terms;

pub use documents::{
    category_label, is_allowed_file_type, is_valid_file_type, DocumentCategory, DocumentKind, ALLOWED_MIME_TYPES,
};
pub use indicators::{RiskLevel, Sentiment};
pub use risk::{CategoryBreakdown, PpaAnalysis, RiskFinding, Severity, SeverityCounts};
pub use terms::{FinancialTerms, TermField, NOT_AVAILABLE};
