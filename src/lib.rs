//! PPA Projection - Cash-flow projection engine for power purchase agreements
//!
//! This library provides:
//! - Annual revenue and present-value projections from six contract parameters
//! - Input validation under a configurable policy
//! - Batch and sensitivity-grid scenario runs
//! - Typed schema for PPA risk analysis payloads
//! - Display formatting for dashboard figures

pub mod analysis;
pub mod config;
pub mod error;
pub mod format;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use config::{AnalyzerConfig, ValidationPolicy};
pub use error::{ProjectionError, Result};
pub use projection::{ProjectionEngine, ProjectionInput, ProjectionResult, ProjectionSummary};
pub use scenario::ScenarioRunner;
