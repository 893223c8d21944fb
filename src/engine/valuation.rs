//! Valuation routine: table-driven property estimate
//!
//! A placeholder for a real valuation API. The estimate is deliberately
//! coarse: nearest-thousand rounding, a wide confidence range, and a
//! synthetic comparable-sales count for the result card.

use super::result::{round_to_thousand, ValuationResult, ValuedProperty};
use crate::criteria::property::{BASE_CONFIDENCE, PRICE_PER_SQFT};
use crate::criteria::regional::{is_valid_postcode, postcode_area};
use crate::criteria::LendingCriteria;
use crate::error::{EngineError, EngineResult};
use crate::request::ValuationRequest;

/// Range half-width per confidence point below 100 (75% -> +/-15%)
const RANGE_SPREAD_PER_POINT: f64 = 0.006;

pub(crate) fn calculate(
    criteria: &LendingCriteria,
    request: &ValuationRequest,
) -> EngineResult<ValuationResult> {
    validate(request)?;

    let table = &criteria.property;
    let mut value = table.base_value(request.property_type) * table.bedroom_multiplier(request.bedrooms);

    if let Some(bathrooms) = request.bathrooms {
        value *= table.bathroom_multiplier(bathrooms);
    }

    // Blend with a floor-area-derived value when the area is known
    if let Some(floor_area) = request.floor_area {
        value = (value + floor_area * PRICE_PER_SQFT) / 2.0;
    }

    if let Some(age) = request.property_age {
        value *= table.age_multiplier(age);
    }
    for &feature in &request.features {
        value *= table.feature_multiplier(feature);
    }

    let regional_multiplier = criteria.regional.multiplier_for(&request.postcode);
    value *= regional_multiplier;

    // More detail supplied -> higher confidence -> narrower range
    let mut confidence = BASE_CONFIDENCE;
    if request.floor_area.is_some() {
        confidence += 10;
    }
    if request.bathrooms.is_some() {
        confidence += 5;
    }

    let spread = (100 - confidence) as f64 * RANGE_SPREAD_PER_POINT;

    Ok(ValuationResult {
        estimated_value: round_to_thousand(value),
        value_range_low: round_to_thousand(value * (1.0 - spread)),
        value_range_high: round_to_thousand(value * (1.0 + spread)),
        confidence_level: confidence,
        comparable_sales: comparable_sales_count(&request.postcode, request.bedrooms),
        regional_multiplier,
        property_details: ValuedProperty {
            property_type: request.property_type,
            bedrooms: request.bedrooms,
            bathrooms: request.bathrooms,
            floor_area: request.floor_area,
        },
    })
}

/// Synthetic comparable-sales count in 8..=15, derived from the inputs so
/// identical requests always report the same figure.
fn comparable_sales_count(postcode: &str, bedrooms: u32) -> u32 {
    let area_seed: u32 = postcode_area(postcode).bytes().map(u32::from).sum();
    8 + (area_seed + bedrooms) % 8
}

fn validate(request: &ValuationRequest) -> EngineResult<()> {
    if request.postcode.trim().is_empty() {
        return Err(EngineError::validation("Postcode is required."));
    }
    if !is_valid_postcode(&request.postcode) {
        return Err(EngineError::validation("Please enter a valid UK postcode."));
    }
    if request.bedrooms < 1 || request.bedrooms > 10 {
        return Err(EngineError::validation("Number of bedrooms must be between 1 and 10."));
    }
    if let Some(bathrooms) = request.bathrooms {
        if bathrooms < 1 || bathrooms > 10 {
            return Err(EngineError::validation("Number of bathrooms must be between 1 and 10."));
        }
    }
    if let Some(floor_area) = request.floor_area {
        if !floor_area.is_finite() || floor_area <= 0.0 {
            return Err(EngineError::validation("Floor area must be greater than 0."));
        }
    }
    Ok(())
}
