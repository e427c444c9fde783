//! Projection engine for PPA revenue and present-value projections

mod discount;
mod engine;
mod input;
mod result;

pub use discount::DiscountCurve;
pub use engine::ProjectionEngine;
pub use input::{NamedScenario, ProjectionInput, ANNUAL_HOURS};
pub use result::{ProjectionResult, ProjectionSummary, YearRow};
