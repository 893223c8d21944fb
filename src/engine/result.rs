//! Typed calculation results, one struct per calculator kind
//!
//! All monetary fields are rounded to 2 decimal places before they leave
//! the engine; valuation estimates are deliberately coarsened to the
//! nearest thousand pounds. Percentages and ratios carry 1 decimal place.

use crate::request::{PropertyType, RemortgageFees, RepaymentType};
use serde::{Deserialize, Serialize};

/// Round a monetary amount to 2 decimal places
pub(crate) fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round a percentage or ratio to 1 decimal place
pub(crate) fn round_pct(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round a valuation estimate to the nearest thousand pounds
pub(crate) fn round_to_thousand(value: f64) -> f64 {
    (value / 1_000.0).round() * 1_000.0
}

/// Affordability calculator output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffordabilityResult {
    /// Maximum lending after the stress-test cap
    pub max_borrowing: f64,

    /// Lending plus deposit
    pub max_property_value: f64,

    /// Capped monthly payment budget
    pub monthly_budget: f64,

    /// Monthly income remaining after committed outgoings
    pub available_monthly_income: f64,

    /// Committed outgoings as a share of gross monthly income (%)
    pub debt_to_income_ratio: f64,

    /// Loan-to-value at the maximum property value (%)
    pub loan_to_value: f64,

    /// Stress-test rate applied (%)
    pub stress_test_rate: f64,

    /// Income multiplier applied after adjustments
    pub income_multiplier: f64,
}

/// Repayment calculator output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentResult {
    pub monthly_payment: f64,

    /// Scheduled payment plus the requested overpayment
    pub total_monthly_with_overpayment: f64,

    /// Total paid over the full term without overpayments
    pub total_paid: f64,

    pub total_interest: f64,

    pub repayment_type: RepaymentType,

    /// Interest avoided by overpaying (0 when not applicable)
    pub overpayment_savings: f64,

    /// Months shaved off the term by overpaying (0 when not applicable)
    pub time_saved_months: u32,

    /// Total paid on the overpaying schedule, when one was simulated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_with_overpayments: Option<f64>,
}

/// Remortgage calculator output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemortgageResult {
    pub current_monthly_payment: f64,
    pub new_monthly_payment: f64,
    pub monthly_saving: f64,
    pub annual_saving: f64,
    pub total_fees: f64,

    /// Months until the fee outlay is recovered; 0 when there is nothing
    /// to recover or no saving to recover it with
    pub break_even_months: u32,

    /// Positive saving recovered within the policy horizon
    pub worthwhile: bool,

    pub fee_breakdown: RemortgageFees,
}

/// Property details echoed back with a valuation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuedProperty {
    pub property_type: PropertyType,
    pub bedrooms: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_area: Option<f64>,
}

/// Valuation calculator output. An estimate only; it carries no guarantee
/// of accuracy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Estimate rounded to the nearest thousand pounds
    pub estimated_value: f64,

    pub value_range_low: f64,
    pub value_range_high: f64,

    /// Confidence in the estimate (%); higher confidence narrows the range
    pub confidence_level: u32,

    /// Synthetic comparable-sales count for display
    pub comparable_sales: u32,

    /// Regional multiplier that was applied
    pub regional_multiplier: f64,

    pub property_details: ValuedProperty,
}

/// Tagged union over the four typed results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "lowercase")]
pub enum CalculationResult {
    Affordability(AffordabilityResult),
    Repayment(RepaymentResult),
    Remortgage(RemortgageResult),
    Valuation(ValuationResult),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(round_money(1501.6789), 1501.68);
        assert_eq!(round_pct(34.56), 34.6);
        assert_eq!(round_to_thousand(412_499.0), 412_000.0);
        assert_eq!(round_to_thousand(412_500.0), 413_000.0);
    }

    #[test]
    fn test_result_serializes_with_tag() {
        let result = CalculationResult::Remortgage(RemortgageResult {
            current_monthly_payment: 1_581.62,
            new_monthly_payment: 1_413.1,
            monthly_saving: 168.52,
            annual_saving: 2_022.24,
            total_fees: 1_799.0,
            break_even_months: 11,
            worthwhile: true,
            fee_breakdown: RemortgageFees::default(),
        });

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["calculator"], "remortgage");
        assert_eq!(json["worthwhile"], true);
    }
}
