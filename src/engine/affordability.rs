//! Affordability routine: maximum borrowing under stress-tested criteria

use super::annuity::{loan_amount_for_payment, monthly_payment};
use super::result::{round_money, round_pct, AffordabilityResult};
use crate::criteria::lending::AFFORDABILITY_TERM_YEARS;
use crate::criteria::LendingCriteria;
use crate::error::{EngineError, EngineResult};
use crate::request::AffordabilityRequest;

pub(crate) fn calculate(
    criteria: &LendingCriteria,
    request: &AffordabilityRequest,
) -> EngineResult<AffordabilityResult> {
    validate(request)?;

    let total_income = request.annual_income + request.partner_income;
    let monthly_income = total_income / 12.0;
    let available_monthly = monthly_income - request.monthly_outgoings;

    if available_monthly <= 0.0 {
        return Err(EngineError::validation(
            "Monthly outgoings exceed income. Please review your figures.",
        ));
    }

    // Income-multiple ceiling, adjusted for the applicant's profile
    let strong_deposit = request.deposit >= total_income;
    let income_multiplier =
        criteria
            .policy
            .income_multiplier(request.credit_rating, request.employment_status, strong_deposit);
    let mut max_lending = total_income * income_multiplier;

    // Stress test: the payment at an elevated rate must stay within the
    // capped share of free monthly income. When it does not, back out the
    // lending that share can service at the stress rate.
    let stress_rate = criteria.policy.stress_rate(criteria.rates.standard_variable_rate);
    let max_affordable_payment = available_monthly * criteria.policy.capped_payment_share();
    let stressed_payment = monthly_payment(max_lending, stress_rate, request.term_years);

    if stressed_payment > max_affordable_payment {
        max_lending = loan_amount_for_payment(max_affordable_payment, stress_rate, request.term_years);
    }

    let max_property_value = max_lending + request.deposit;
    let loan_to_value = if max_property_value > 0.0 {
        (max_lending / max_property_value) * 100.0
    } else {
        0.0
    };

    Ok(AffordabilityResult {
        max_borrowing: round_money(max_lending),
        max_property_value: round_money(max_property_value),
        monthly_budget: round_money(max_affordable_payment),
        available_monthly_income: round_money(available_monthly),
        debt_to_income_ratio: round_pct((request.monthly_outgoings / monthly_income) * 100.0),
        loan_to_value: round_pct(loan_to_value),
        stress_test_rate: round_pct(stress_rate * 100.0),
        income_multiplier,
    })
}

fn validate(request: &AffordabilityRequest) -> EngineResult<()> {
    if !request.annual_income.is_finite() || request.annual_income <= 0.0 {
        return Err(EngineError::validation("Annual income must be greater than 0."));
    }
    if request.partner_income < 0.0 {
        return Err(EngineError::validation("Partner income cannot be negative."));
    }
    if request.monthly_outgoings < 0.0 {
        return Err(EngineError::validation("Monthly outgoings cannot be negative."));
    }
    if request.deposit < 0.0 {
        return Err(EngineError::validation("Deposit cannot be negative."));
    }

    let (min_term, max_term) = AFFORDABILITY_TERM_YEARS;
    if request.term_years < min_term || request.term_years > max_term {
        return Err(EngineError::validation(format!(
            "Term must be between {} and {} years.",
            min_term, max_term
        )));
    }
    Ok(())
}
