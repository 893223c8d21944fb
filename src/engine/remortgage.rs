//! Remortgage routine: payment comparison, break-even, and worthwhileness

use super::annuity::monthly_payment;
use super::result::{round_money, RemortgageResult};
use crate::criteria::lending::{MAX_INTEREST_RATE_PCT, REMORTGAGE_TERM_YEARS};
use crate::criteria::LendingCriteria;
use crate::error::{EngineError, EngineResult};
use crate::request::RemortgageRequest;

pub(crate) fn calculate(
    criteria: &LendingCriteria,
    request: &RemortgageRequest,
) -> EngineResult<RemortgageResult> {
    validate(request)?;

    let current_monthly = monthly_payment(
        request.current_balance,
        request.current_rate / 100.0,
        request.remaining_term,
    );
    let new_monthly = monthly_payment(
        request.current_balance,
        request.new_rate / 100.0,
        request.remaining_term,
    );

    let monthly_saving = current_monthly - new_monthly;
    let total_fees = request.fees.total();

    let break_even_months = if monthly_saving > 0.0 && total_fees > 0.0 {
        (total_fees / monthly_saving).ceil() as u32
    } else {
        0
    };

    let worthwhile = monthly_saving > 0.0
        && break_even_months <= criteria.policy.worthwhile_break_even_months;

    Ok(RemortgageResult {
        current_monthly_payment: round_money(current_monthly),
        new_monthly_payment: round_money(new_monthly),
        monthly_saving: round_money(monthly_saving),
        annual_saving: round_money(monthly_saving * 12.0),
        total_fees: round_money(total_fees),
        break_even_months,
        worthwhile,
        fee_breakdown: request.fees.clone(),
    })
}

fn validate(request: &RemortgageRequest) -> EngineResult<()> {
    if !request.current_balance.is_finite() || request.current_balance <= 0.0 {
        return Err(EngineError::validation("Current balance must be greater than 0."));
    }
    for (label, rate) in [
        ("Current rate", request.current_rate),
        ("New rate", request.new_rate),
    ] {
        if rate < 0.0 || rate > MAX_INTEREST_RATE_PCT {
            return Err(EngineError::validation(format!(
                "{} must be between 0 and {}%.",
                label, MAX_INTEREST_RATE_PCT
            )));
        }
    }
    for (label, fee) in [
        ("Arrangement fee", request.fees.arrangement_fee),
        ("Valuation fee", request.fees.valuation_fee),
        ("Legal fees", request.fees.legal_fees),
        ("Exit fee", request.fees.exit_fee),
        ("Broker fee", request.fees.broker_fee),
    ] {
        if fee < 0.0 {
            return Err(EngineError::validation(format!("{} cannot be negative.", label)));
        }
    }

    let (min_term, max_term) = REMORTGAGE_TERM_YEARS;
    if request.remaining_term < min_term || request.remaining_term > max_term {
        return Err(EngineError::validation(format!(
            "Remaining term must be between {} and {} years.",
            min_term, max_term
        )));
    }
    Ok(())
}
