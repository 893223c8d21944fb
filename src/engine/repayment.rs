//! Repayment routine: scheduled payments, total cost, and overpayment impact

use super::annuity::{monthly_payment, simulate_payoff};
use super::result::{round_money, RepaymentResult};
use crate::criteria::lending::{MAX_INTEREST_RATE_PCT, REPAYMENT_TERM_YEARS};
use crate::criteria::LendingCriteria;
use crate::error::{EngineError, EngineResult};
use crate::request::{RepaymentRequest, RepaymentType};

pub(crate) fn calculate(
    _criteria: &LendingCriteria,
    request: &RepaymentRequest,
) -> EngineResult<RepaymentResult> {
    validate(request)?;

    let annual_rate = request.interest_rate / 100.0;
    let num_payments = (request.term_years * 12) as f64;

    let (scheduled, total_paid) = match request.repayment_type {
        RepaymentType::InterestOnly => {
            // Interest accrues flat; the principal is returned at term end
            let payment = request.loan_amount * annual_rate / 12.0;
            (payment, payment * num_payments + request.loan_amount)
        }
        RepaymentType::Repayment => {
            let payment = monthly_payment(request.loan_amount, annual_rate, request.term_years);
            (payment, payment * num_payments)
        }
    };
    let total_interest = total_paid - request.loan_amount;

    let mut result = RepaymentResult {
        monthly_payment: round_money(scheduled),
        total_monthly_with_overpayment: round_money(scheduled + request.overpayment),
        total_paid: round_money(total_paid),
        total_interest: round_money(total_interest),
        repayment_type: request.repayment_type,
        overpayment_savings: 0.0,
        time_saved_months: 0,
        total_with_overpayments: None,
    };

    // Overpayments only shorten an amortizing schedule
    if request.overpayment > 0.0 && request.repayment_type == RepaymentType::Repayment {
        let outcome = simulate_payoff(
            request.loan_amount,
            annual_rate,
            request.term_years,
            request.overpayment,
        );

        let ceiling = request.term_years * 12;
        result.overpayment_savings = round_money((total_paid - outcome.total_paid).max(0.0));
        result.time_saved_months = ceiling.saturating_sub(outcome.months_to_clear);
        result.total_with_overpayments = Some(round_money(outcome.total_paid));
    }

    Ok(result)
}

fn validate(request: &RepaymentRequest) -> EngineResult<()> {
    if !request.loan_amount.is_finite() || request.loan_amount <= 0.0 {
        return Err(EngineError::validation("Loan amount must be greater than 0."));
    }
    if request.interest_rate < 0.0 || request.interest_rate > MAX_INTEREST_RATE_PCT {
        return Err(EngineError::validation(format!(
            "Interest rate must be between 0 and {}%.",
            MAX_INTEREST_RATE_PCT
        )));
    }
    if request.overpayment < 0.0 {
        return Err(EngineError::validation("Overpayment cannot be negative."));
    }

    let (min_term, max_term) = REPAYMENT_TERM_YEARS;
    if request.term_years < min_term || request.term_years > max_term {
        return Err(EngineError::validation(format!(
            "Term must be between {} and {} years.",
            min_term, max_term
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria() -> LendingCriteria {
        LendingCriteria::default_uk()
    }

    fn request(loan: f64, rate: f64, term: u32, overpayment: f64) -> RepaymentRequest {
        RepaymentRequest {
            loan_amount: loan,
            interest_rate: rate,
            term_years: term,
            overpayment,
            repayment_type: RepaymentType::Repayment,
        }
    }

    #[test]
    fn test_standard_repayment_example() {
        // 300k at 3.5% over 25 years
        let result = calculate(&criteria(), &request(300_000.0, 3.5, 25, 0.0)).unwrap();

        assert!((result.monthly_payment - 1_501.68).abs() < 1.0, "{}", result.monthly_payment);
        assert!((result.total_interest - 150_504.0).abs() < 200.0, "{}", result.total_interest);
        assert_eq!(result.overpayment_savings, 0.0);
        assert_eq!(result.time_saved_months, 0);
        assert_eq!(result.total_with_overpayments, None);
    }

    #[test]
    fn test_interest_only() {
        let result = calculate(
            &criteria(),
            &RepaymentRequest {
                repayment_type: RepaymentType::InterestOnly,
                ..request(200_000.0, 3.0, 20, 0.0)
            },
        )
        .unwrap();

        // 200k x 3% / 12 = 500/month; principal still owed at term end
        assert_eq!(result.monthly_payment, 500.0);
        assert_eq!(result.total_paid, 500.0 * 240.0 + 200_000.0);
        assert_eq!(result.total_interest, 120_000.0);
    }

    #[test]
    fn test_overpayment_saves_time_and_interest() {
        let without = calculate(&criteria(), &request(200_000.0, 3.5, 25, 0.0)).unwrap();
        let with = calculate(&criteria(), &request(200_000.0, 3.5, 25, 100.0)).unwrap();

        assert_eq!(with.monthly_payment, without.monthly_payment);
        assert!(with.time_saved_months > 0);
        assert!(with.overpayment_savings > 0.0);

        let overpaid_total = with.total_with_overpayments.unwrap();
        assert!(overpaid_total <= without.total_paid);
    }

    #[test]
    fn test_overpayment_ignored_for_interest_only() {
        let result = calculate(
            &criteria(),
            &RepaymentRequest {
                repayment_type: RepaymentType::InterestOnly,
                ..request(200_000.0, 3.0, 20, 150.0)
            },
        )
        .unwrap();

        assert_eq!(result.time_saved_months, 0);
        assert_eq!(result.total_with_overpayments, None);
        assert_eq!(result.total_monthly_with_overpayment, 650.0);
    }

    #[test]
    fn test_zero_rate_loan() {
        let result = calculate(&criteria(), &request(120_000.0, 0.0, 10, 0.0)).unwrap();
        assert_eq!(result.monthly_payment, 1_000.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_validation_bounds() {
        assert!(calculate(&criteria(), &request(0.0, 3.5, 25, 0.0)).is_err());
        assert!(calculate(&criteria(), &request(100_000.0, 21.0, 25, 0.0)).is_err());
        assert!(calculate(&criteria(), &request(100_000.0, 3.5, 0, 0.0)).is_err());
        assert!(calculate(&criteria(), &request(100_000.0, 3.5, 51, 0.0)).is_err());
    }
}
