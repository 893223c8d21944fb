//! Annuity mathematics shared by the calculation routines
//!
//! Closed-form fixed-rate payment and principal formulas, plus the
//! month-by-month payoff simulation used to quantify overpayments.

/// Fixed monthly payment that fully amortizes a loan.
///
/// Standard annuity formula. A zero rate degrades to straight-line
/// principal repayment, since the adjusted form has the rate in its
/// denominator.
pub fn monthly_payment(principal: f64, annual_rate: f64, term_years: u32) -> f64 {
    let num_payments = (term_years * 12) as f64;
    if annual_rate == 0.0 {
        return principal / num_payments;
    }

    let monthly_rate = annual_rate / 12.0;
    let growth = (1.0 + monthly_rate).powf(num_payments);
    principal * (monthly_rate * growth) / (growth - 1.0)
}

/// Maximum principal serviceable by a given monthly payment.
///
/// Algebraic inverse of [`monthly_payment`], with the same zero-rate
/// degeneracy handling.
pub fn loan_amount_for_payment(payment: f64, annual_rate: f64, term_years: u32) -> f64 {
    let num_payments = (term_years * 12) as f64;
    if annual_rate == 0.0 {
        return payment * num_payments;
    }

    let monthly_rate = annual_rate / 12.0;
    let growth = (1.0 + monthly_rate).powf(num_payments);
    payment * (growth - 1.0) / (monthly_rate * growth)
}

/// Balance position after one simulated month
#[derive(Debug, Clone, Copy)]
struct AmortizationStep {
    month: u32,
    remaining_balance: f64,
}

/// Outcome of paying a loan down with a fixed monthly budget
#[derive(Debug, Clone, Copy)]
pub struct PayoffOutcome {
    /// Months until the balance reaches zero (or the term ceiling)
    pub months_to_clear: u32,

    /// Total of all interest and principal paid
    pub total_paid: f64,
}

/// Simulate paying the loan down at the scheduled payment plus a fixed
/// monthly overpayment.
///
/// The loop is bounded by the original term in months and terminates
/// early once the balance clears. If the budget does not even cover the
/// interest accruing in a month the simulation stops, since the balance
/// can no longer fall.
pub fn simulate_payoff(principal: f64, annual_rate: f64, term_years: u32, overpayment: f64) -> PayoffOutcome {
    let scheduled = monthly_payment(principal, annual_rate, term_years);
    let monthly_rate = annual_rate / 12.0;
    let budget = scheduled + overpayment;
    let ceiling = term_years * 12;

    let mut step = AmortizationStep {
        month: 0,
        remaining_balance: principal,
    };
    let mut total_paid = 0.0;

    while step.remaining_balance > 0.0 && step.month < ceiling {
        let interest = step.remaining_balance * monthly_rate;
        let principal_paid = (budget - interest).min(step.remaining_balance);
        if principal_paid <= 0.0 {
            break;
        }

        total_paid += interest + principal_paid;
        step = AmortizationStep {
            month: step.month + 1,
            remaining_balance: step.remaining_balance - principal_paid,
        };
    }

    PayoffOutcome {
        months_to_clear: step.month,
        total_paid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate_degeneracy() {
        // Exactly straight-line, no annuity division by zero
        assert_eq!(monthly_payment(240_000.0, 0.0, 20), 1_000.0);
        assert_eq!(loan_amount_for_payment(1_000.0, 0.0, 20), 240_000.0);
    }

    #[test]
    fn test_standard_annuity_example() {
        // 300k at 3.5% over 25 years
        let payment = monthly_payment(300_000.0, 0.035, 25);
        assert!((payment - 1_501.68).abs() < 1.0, "payment {}", payment);
    }

    #[test]
    fn test_annuity_round_trip() {
        for &(principal, rate, term) in &[
            (50_000.0, 0.01, 5u32),
            (185_000.0, 0.0399, 25),
            (300_000.0, 0.035, 25),
            (750_000.0, 0.2, 50),
        ] {
            let payment = monthly_payment(principal, rate, term);
            let recovered = loan_amount_for_payment(payment, rate, term);
            assert_relative_eq!(recovered, principal, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_payoff_without_overpayment_runs_full_term() {
        let outcome = simulate_payoff(200_000.0, 0.035, 25, 0.0);
        assert_eq!(outcome.months_to_clear, 300);

        let scheduled_total = monthly_payment(200_000.0, 0.035, 25) * 300.0;
        assert_relative_eq!(outcome.total_paid, scheduled_total, max_relative = 1e-6);
    }

    #[test]
    fn test_overpayment_never_increases_total_cost() {
        let scheduled_total = monthly_payment(200_000.0, 0.035, 25) * 300.0;
        let outcome = simulate_payoff(200_000.0, 0.035, 25, 100.0);

        assert!(outcome.total_paid <= scheduled_total);
        assert!(outcome.months_to_clear <= 300);
    }

    #[test]
    fn test_zero_rate_payoff() {
        // 120k over 10 years at 0%: 1000/month scheduled, +1000 overpayment
        // clears in half the time at the same total cost
        let outcome = simulate_payoff(120_000.0, 0.0, 10, 1_000.0);
        assert_eq!(outcome.months_to_clear, 60);
        assert_relative_eq!(outcome.total_paid, 120_000.0, max_relative = 1e-9);
    }
}
