//! Mortgage Engine - UK mortgage calculation engine
//!
//! This library provides:
//! - Affordability assessment with stress-tested lending criteria
//! - Repayment schedules with overpayment impact analysis
//! - Remortgage comparison with break-even analysis
//! - Table-driven property valuation estimates
//!
//! The engine is a pure function of (calculator kind, input record);
//! it performs no I/O and holds no mutable state.

pub mod criteria;
pub mod engine;
pub mod error;
pub mod request;

// Re-export commonly used types
pub use criteria::{LendingCriteria, LendingPolicy, RateSnapshot};
pub use engine::{CalculationResult, CalculatorEngine};
pub use error::{EngineError, EngineResult};
pub use request::{CalculationRequest, CalculatorKind, FieldMap, FieldValue};
