//! Property valuation tables: base values and adjustment multipliers
//!
//! These figures are a deliberate placeholder for a real valuation API.
//! Estimates built from them are coarse by design and always rounded to
//! the nearest thousand pounds downstream.

use crate::request::{PropertyAge, PropertyFeature, PropertyType};
use std::collections::HashMap;

/// Value added per bedroom above (or below) the two-bedroom baseline
pub const BEDROOM_STEP: f64 = 0.15;

/// Value added per bathroom above the first
pub const BATHROOM_STEP: f64 = 0.05;

/// Average price per square foot used for the floor-area blend
pub const PRICE_PER_SQFT: f64 = 300.0;

/// Base confidence for a table-driven estimate
pub const BASE_CONFIDENCE: u32 = 60;

/// Base property values and adjustment factors
#[derive(Debug, Clone)]
pub struct PropertyValueTable {
    base_values: HashMap<PropertyType, f64>,
}

impl Default for PropertyValueTable {
    fn default() -> Self {
        Self::default_uk()
    }
}

impl PropertyValueTable {
    /// Built-in UK base values per property type
    pub fn default_uk() -> Self {
        let mut base_values = HashMap::new();
        base_values.insert(PropertyType::Flat, 250_000.0);
        base_values.insert(PropertyType::Terraced, 300_000.0);
        base_values.insert(PropertyType::SemiDetached, 350_000.0);
        base_values.insert(PropertyType::Detached, 450_000.0);
        base_values.insert(PropertyType::Bungalow, 320_000.0);
        Self { base_values }
    }

    /// Base value for a property type
    pub fn base_value(&self, property_type: PropertyType) -> f64 {
        self.base_values.get(&property_type).copied().unwrap_or(300_000.0)
    }

    /// Bedroom adjustment relative to the two-bedroom baseline
    pub fn bedroom_multiplier(&self, bedrooms: u32) -> f64 {
        1.0 + (bedrooms as f64 - 2.0) * BEDROOM_STEP
    }

    /// Bathroom adjustment relative to a single bathroom
    pub fn bathroom_multiplier(&self, bathrooms: u32) -> f64 {
        1.0 + (bathrooms.saturating_sub(1)) as f64 * BATHROOM_STEP
    }

    /// Age-band adjustment
    pub fn age_multiplier(&self, age: PropertyAge) -> f64 {
        match age {
            PropertyAge::New => 1.10,
            PropertyAge::Modern => 1.05,
            PropertyAge::Established => 1.00,
            PropertyAge::Period => 0.95,
        }
    }

    /// Per-feature adjustment, compounded across features
    pub fn feature_multiplier(&self, feature: PropertyFeature) -> f64 {
        match feature {
            PropertyFeature::Garden => 1.03,
            PropertyFeature::Parking => 1.03,
            PropertyFeature::Garage => 1.05,
            PropertyFeature::Conservatory => 1.02,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_values() {
        let table = PropertyValueTable::default_uk();
        assert_eq!(table.base_value(PropertyType::Flat), 250_000.0);
        assert_eq!(table.base_value(PropertyType::Detached), 450_000.0);
    }

    #[test]
    fn test_bedroom_multiplier() {
        let table = PropertyValueTable::default_uk();

        // Two bedrooms is the baseline
        assert_eq!(table.bedroom_multiplier(2), 1.0);
        assert_eq!(table.bedroom_multiplier(4), 1.3);
        // A one-bed values below baseline
        assert!((table.bedroom_multiplier(1) - 0.85).abs() < 1e-12);
    }

    #[test]
    fn test_bathroom_multiplier() {
        let table = PropertyValueTable::default_uk();
        assert_eq!(table.bathroom_multiplier(1), 1.0);
        assert_eq!(table.bathroom_multiplier(3), 1.1);
    }
}
