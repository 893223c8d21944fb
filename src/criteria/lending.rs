//! Lending policy constants for affordability and remortgage decisions
//!
//! The numbers here are underwriting policy, not market data: the income
//! multiplier, the stress-test construction, the share of free monthly
//! income a stressed payment may consume, and the remortgage break-even
//! threshold. They are plain struct fields so a caller can override any
//! of them; the defaults reproduce standard UK lending criteria.

use crate::request::{CreditRating, EmploymentStatus};

/// Baseline income multiplier (UK lending criteria: 4.5x gross income)
pub const BASE_INCOME_MULTIPLIER: f64 = 4.5;

/// Bounds the adjusted income multiplier is clamped into
pub const INCOME_MULTIPLIER_MIN: f64 = 3.0;
pub const INCOME_MULTIPLIER_MAX: f64 = 6.0;

/// Margin added to the reference rate when stress testing (3 points)
pub const STRESS_MARGIN: f64 = 0.03;

/// Stress rate never drops below this floor
pub const STRESS_RATE_FLOOR: f64 = 0.07;

/// Share of available monthly income a stressed payment may consume
pub const PAYMENT_CAP_SHARE: f64 = 0.35;

/// Bounds the payment cap share is clamped into
pub const PAYMENT_CAP_SHARE_MIN: f64 = 0.25;
pub const PAYMENT_CAP_SHARE_MAX: f64 = 0.45;

/// A remortgage is "worthwhile" when it breaks even within this many months
pub const WORTHWHILE_BREAK_EVEN_MONTHS: u32 = 24;

/// Affordability term bounds in years
pub const AFFORDABILITY_TERM_YEARS: (u32, u32) = (5, 40);

/// Repayment term bounds in years
pub const REPAYMENT_TERM_YEARS: (u32, u32) = (1, 50);

/// Remortgage remaining-term bounds in years
pub const REMORTGAGE_TERM_YEARS: (u32, u32) = (1, 40);

/// Maximum accepted interest rate, as a percentage
pub const MAX_INTEREST_RATE_PCT: f64 = 20.0;

/// Underwriting policy knobs
#[derive(Debug, Clone)]
pub struct LendingPolicy {
    /// Baseline income multiplier before adjustments
    pub base_income_multiplier: f64,

    /// Stress margin added to the reference rate (decimal)
    pub stress_margin: f64,

    /// Minimum stress rate (decimal)
    pub stress_rate_floor: f64,

    /// Share of available monthly income the stressed payment may consume
    pub payment_cap_share: f64,

    /// Break-even horizon within which a remortgage counts as worthwhile
    pub worthwhile_break_even_months: u32,
}

impl Default for LendingPolicy {
    fn default() -> Self {
        Self {
            base_income_multiplier: BASE_INCOME_MULTIPLIER,
            stress_margin: STRESS_MARGIN,
            stress_rate_floor: STRESS_RATE_FLOOR,
            payment_cap_share: PAYMENT_CAP_SHARE,
            worthwhile_break_even_months: WORTHWHILE_BREAK_EVEN_MONTHS,
        }
    }
}

impl LendingPolicy {
    /// Income multiplier for an applicant, adjusted for credit rating,
    /// employment status, and deposit strength, clamped to [3.0, 6.0].
    ///
    /// `strong_deposit` means the cash deposit is at least one year of
    /// total gross income.
    pub fn income_multiplier(
        &self,
        credit_rating: Option<CreditRating>,
        employment: Option<EmploymentStatus>,
        strong_deposit: bool,
    ) -> f64 {
        let mut multiplier = self.base_income_multiplier;

        multiplier += match credit_rating {
            Some(CreditRating::Excellent) => 0.5,
            Some(CreditRating::Good) => 0.25,
            Some(CreditRating::Fair) | None => 0.0,
            Some(CreditRating::Poor) => -0.75,
        };

        multiplier += match employment {
            Some(EmploymentStatus::SelfEmployed) => -0.5,
            Some(EmploymentStatus::Contractor) => -0.25,
            Some(EmploymentStatus::Employed) | Some(EmploymentStatus::Retired) | None => 0.0,
        };

        if strong_deposit {
            multiplier += 0.25;
        }

        multiplier.clamp(INCOME_MULTIPLIER_MIN, INCOME_MULTIPLIER_MAX)
    }

    /// Stress-test rate: reference rate plus margin, never below the floor
    pub fn stress_rate(&self, reference_rate: f64) -> f64 {
        (reference_rate + self.stress_margin).max(self.stress_rate_floor)
    }

    /// Payment cap share, clamped to the permitted band
    pub fn capped_payment_share(&self) -> f64 {
        self.payment_cap_share.clamp(PAYMENT_CAP_SHARE_MIN, PAYMENT_CAP_SHARE_MAX)
    }
}
