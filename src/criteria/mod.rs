//! Lending criteria: policy constants, rate snapshot, and lookup tables
//!
//! Everything the calculation routines consume beyond the request itself
//! lives here, passed explicitly into the engine rather than read from
//! ambient configuration.

pub mod lending;
pub mod property;
mod rates;
pub mod regional;

pub use lending::LendingPolicy;
pub use property::PropertyValueTable;
pub use rates::RateSnapshot;
pub use regional::RegionalMultipliers;

/// Container for all criteria the engine needs
#[derive(Debug, Clone, Default)]
pub struct LendingCriteria {
    pub policy: LendingPolicy,
    pub rates: RateSnapshot,
    pub regional: RegionalMultipliers,
    pub property: PropertyValueTable,
}

impl LendingCriteria {
    /// Criteria with built-in UK defaults
    pub fn default_uk() -> Self {
        Self {
            policy: LendingPolicy::default(),
            rates: RateSnapshot::default(),
            regional: RegionalMultipliers::default_uk(),
            property: PropertyValueTable::default_uk(),
        }
    }

    /// Same criteria with the rate snapshot replaced by a live one
    pub fn with_rates(mut self, rates: RateSnapshot) -> Self {
        self.rates = rates;
        self
    }
}
