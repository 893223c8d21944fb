//! Typed calculation requests, one struct per calculator kind

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// The four supported calculators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorKind {
    Affordability,
    Repayment,
    Remortgage,
    Valuation,
}

impl CalculatorKind {
    /// Parse the form token ("affordability", "repayment", ...)
    pub fn parse(token: &str) -> Result<Self, EngineError> {
        match token {
            "affordability" => Ok(CalculatorKind::Affordability),
            "repayment" => Ok(CalculatorKind::Repayment),
            "remortgage" => Ok(CalculatorKind::Remortgage),
            "valuation" => Ok(CalculatorKind::Valuation),
            other => Err(EngineError::UnsupportedKind(other.to_string())),
        }
    }

    /// The string token used on the wire and in CSV exports
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorKind::Affordability => "affordability",
            CalculatorKind::Repayment => "repayment",
            CalculatorKind::Remortgage => "remortgage",
            CalculatorKind::Valuation => "valuation",
        }
    }
}

/// Credit rating band used to adjust the income multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Employment status used to adjust the income multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentStatus {
    Employed,
    SelfEmployed,
    Contractor,
    Retired,
}

/// Repayment basis for the repayment calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepaymentType {
    /// Capital and interest, fully amortizing
    Repayment,
    /// Interest only, principal returned at term end
    InterestOnly,
}

impl RepaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepaymentType::Repayment => "repayment",
            RepaymentType::InterestOnly => "interest-only",
        }
    }
}

/// Property type for the valuation calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    Flat,
    Terraced,
    SemiDetached,
    Detached,
    Bungalow,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Flat => "flat",
            PropertyType::Terraced => "terraced",
            PropertyType::SemiDetached => "semi-detached",
            PropertyType::Detached => "detached",
            PropertyType::Bungalow => "bungalow",
        }
    }
}

/// Property age band for the valuation calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyAge {
    /// New build (0-2 years)
    New,
    /// Modern (3-20 years)
    Modern,
    /// Established (21-50 years)
    Established,
    /// Period (50+ years)
    Period,
}

/// Additional property features that nudge the valuation upward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyFeature {
    Garden,
    Parking,
    Garage,
    Conservatory,
}

/// Affordability calculator inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffordabilityRequest {
    /// Primary applicant gross annual income, must be > 0
    pub annual_income: f64,

    /// Second applicant gross annual income
    #[serde(default)]
    pub partner_income: f64,

    /// Committed monthly outgoings (loans, cards, childcare, ...)
    #[serde(default)]
    pub monthly_outgoings: f64,

    /// Cash deposit available
    #[serde(default)]
    pub deposit: f64,

    /// Requested mortgage term in years (5-40)
    pub term_years: u32,

    /// Optional credit rating band
    #[serde(default)]
    pub credit_rating: Option<CreditRating>,

    /// Optional employment status
    #[serde(default)]
    pub employment_status: Option<EmploymentStatus>,
}

/// Repayment calculator inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentRequest {
    /// Loan principal, must be > 0
    pub loan_amount: f64,

    /// Annual interest rate as a percentage (e.g. 3.5 for 3.5%)
    pub interest_rate: f64,

    /// Mortgage term in years (1-50)
    pub term_years: u32,

    /// Fixed monthly overpayment on top of the scheduled payment
    #[serde(default)]
    pub overpayment: f64,

    /// Capital-and-interest or interest-only
    pub repayment_type: RepaymentType,
}

/// One-off remortgage switching fees
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemortgageFees {
    #[serde(default)]
    pub arrangement_fee: f64,
    #[serde(default)]
    pub valuation_fee: f64,
    #[serde(default)]
    pub legal_fees: f64,
    #[serde(default)]
    pub exit_fee: f64,
    #[serde(default)]
    pub broker_fee: f64,
}

impl RemortgageFees {
    /// Sum of all one-off fees
    pub fn total(&self) -> f64 {
        self.arrangement_fee + self.valuation_fee + self.legal_fees + self.exit_fee + self.broker_fee
    }
}

/// Remortgage calculator inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemortgageRequest {
    /// Outstanding balance on the current mortgage, must be > 0
    pub current_balance: f64,

    /// Current annual rate as a percentage
    pub current_rate: f64,

    /// Offered annual rate as a percentage
    pub new_rate: f64,

    /// Remaining term in years (1-40)
    pub remaining_term: u32,

    /// One-off switching fees
    #[serde(default)]
    pub fees: RemortgageFees,
}

/// Valuation calculator inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationRequest {
    /// Full UK postcode, e.g. "SW1A 1AA"
    pub postcode: String,

    pub property_type: PropertyType,

    /// Number of bedrooms (1-10)
    pub bedrooms: u32,

    /// Number of bathrooms (1-10)
    #[serde(default)]
    pub bathrooms: Option<u32>,

    /// Internal floor area in square feet
    #[serde(default)]
    pub floor_area: Option<f64>,

    #[serde(default)]
    pub property_age: Option<PropertyAge>,

    #[serde(default)]
    pub features: Vec<PropertyFeature>,
}

/// Tagged union over the four typed requests
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "lowercase")]
pub enum CalculationRequest {
    Affordability(AffordabilityRequest),
    Repayment(RepaymentRequest),
    Remortgage(RemortgageRequest),
    Valuation(ValuationRequest),
}

impl CalculationRequest {
    /// The calculator kind this request targets
    pub fn kind(&self) -> CalculatorKind {
        match self {
            CalculationRequest::Affordability(_) => CalculatorKind::Affordability,
            CalculationRequest::Repayment(_) => CalculatorKind::Repayment,
            CalculationRequest::Remortgage(_) => CalculatorKind::Remortgage,
            CalculationRequest::Valuation(_) => CalculatorKind::Valuation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tokens() {
        assert_eq!(CalculatorKind::parse("repayment").unwrap(), CalculatorKind::Repayment);
        assert_eq!(CalculatorKind::parse("valuation").unwrap(), CalculatorKind::Valuation);

        let err = CalculatorKind::parse("equity-release").unwrap_err();
        assert_eq!(err, EngineError::UnsupportedKind("equity-release".to_string()));
    }

    #[test]
    fn test_fees_total() {
        let fees = RemortgageFees {
            arrangement_fee: 999.0,
            valuation_fee: 300.0,
            legal_fees: 400.0,
            exit_fee: 100.0,
            broker_fee: 0.0,
        };
        assert_eq!(fees.total(), 1799.0);
    }

    #[test]
    fn test_request_json_round_trip() {
        let json = r#"{
            "calculator": "repayment",
            "loan_amount": 300000,
            "interest_rate": 3.5,
            "term_years": 25,
            "repayment_type": "repayment"
        }"#;
        let req: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.kind(), CalculatorKind::Repayment);

        match req {
            CalculationRequest::Repayment(r) => {
                assert_eq!(r.overpayment, 0.0);
                assert_eq!(r.repayment_type, RepaymentType::Repayment);
            }
            other => panic!("Unexpected variant: {:?}", other),
        }
    }
}
