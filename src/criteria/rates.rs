//! Current interest rate snapshot
//!
//! The engine never fetches rates itself. A caller with access to live
//! lender feeds refreshes a snapshot on its own schedule (hourly in the
//! production deployment) and passes it in as data; without one, the
//! static default keeps every calculation well defined.

use serde::{Deserialize, Serialize};

/// Default standard variable rate when no live snapshot is supplied (4%)
pub const DEFAULT_STANDARD_VARIABLE_RATE: f64 = 0.04;

/// Point-in-time view of market rates, injected by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSnapshot {
    /// Representative standard variable rate, as a decimal
    pub standard_variable_rate: f64,
}

impl Default for RateSnapshot {
    fn default() -> Self {
        Self {
            standard_variable_rate: DEFAULT_STANDARD_VARIABLE_RATE,
        }
    }
}

impl RateSnapshot {
    /// Snapshot pinned to a specific standard variable rate
    pub fn with_rate(standard_variable_rate: f64) -> Self {
        Self { standard_variable_rate }
    }
}
