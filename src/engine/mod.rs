//! Mortgage calculation engine
//!
//! Dispatches by calculator kind to one of four pure routines. The engine
//! holds only immutable lending criteria, performs no I/O, and is safe to
//! share across threads; every calculation is a function of its inputs.

mod affordability;
pub mod annuity;
mod remortgage;
mod repayment;
mod result;
mod valuation;

pub use result::{
    AffordabilityResult, CalculationResult, RemortgageResult, RepaymentResult, ValuationResult,
    ValuedProperty,
};

use crate::criteria::LendingCriteria;
use crate::error::EngineResult;
use crate::request::{
    parse_request, AffordabilityRequest, CalculationRequest, CalculatorKind, FieldMap,
    RemortgageRequest, RepaymentRequest, ValuationRequest,
};

/// Stateless calculator over a fixed set of lending criteria
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    criteria: LendingCriteria,
}

impl CalculatorEngine {
    /// Engine over the given criteria
    pub fn new(criteria: LendingCriteria) -> Self {
        Self { criteria }
    }

    /// Engine over the built-in UK defaults
    pub fn default_uk() -> Self {
        Self::new(LendingCriteria::default_uk())
    }

    /// The criteria this engine was built with
    pub fn criteria(&self) -> &LendingCriteria {
        &self.criteria
    }

    /// Full entry point for form submissions: resolve the kind token,
    /// parse the field map, and run the matching routine.
    pub fn calculate_fields(&self, kind_token: &str, fields: &FieldMap) -> EngineResult<CalculationResult> {
        let kind = CalculatorKind::parse(kind_token)?;
        let request = parse_request(kind, fields)?;
        self.calculate(&request)
    }

    /// Run a typed request
    pub fn calculate(&self, request: &CalculationRequest) -> EngineResult<CalculationResult> {
        match request {
            CalculationRequest::Affordability(r) => {
                Ok(CalculationResult::Affordability(self.affordability(r)?))
            }
            CalculationRequest::Repayment(r) => Ok(CalculationResult::Repayment(self.repayment(r)?)),
            CalculationRequest::Remortgage(r) => {
                Ok(CalculationResult::Remortgage(self.remortgage(r)?))
            }
            CalculationRequest::Valuation(r) => Ok(CalculationResult::Valuation(self.valuation(r)?)),
        }
    }

    /// Maximum borrowing under stress-tested lending criteria
    pub fn affordability(&self, request: &AffordabilityRequest) -> EngineResult<AffordabilityResult> {
        affordability::calculate(&self.criteria, request)
    }

    /// Scheduled payments, total cost, and overpayment impact
    pub fn repayment(&self, request: &RepaymentRequest) -> EngineResult<RepaymentResult> {
        repayment::calculate(&self.criteria, request)
    }

    /// Payment comparison and break-even for switching deals
    pub fn remortgage(&self, request: &RemortgageRequest) -> EngineResult<RemortgageResult> {
        remortgage::calculate(&self.criteria, request)
    }

    /// Table-driven property estimate
    pub fn valuation(&self, request: &ValuationRequest) -> EngineResult<ValuationResult> {
        valuation::calculate(&self.criteria, request)
    }
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::default_uk()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::request::FieldValue;

    #[test]
    fn test_field_map_end_to_end() {
        let engine = CalculatorEngine::default_uk();

        let mut fields = FieldMap::new();
        fields.insert("loan_amount".into(), FieldValue::Number(300_000.0));
        fields.insert("interest_rate".into(), FieldValue::Number(3.5));
        fields.insert("term_years".into(), FieldValue::Number(25.0));
        fields.insert("repayment_type".into(), FieldValue::Text("repayment".into()));

        let result = engine.calculate_fields("repayment", &fields).unwrap();
        match result {
            CalculationResult::Repayment(r) => {
                assert!((r.monthly_payment - 1_501.68).abs() < 1.0);
            }
            other => panic!("Unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_kind_token() {
        let engine = CalculatorEngine::default_uk();
        let err = engine.calculate_fields("pension", &FieldMap::new()).unwrap_err();
        assert_eq!(err, EngineError::UnsupportedKind("pension".to_string()));
    }

    #[test]
    fn test_validation_message_surfaces_verbatim() {
        let engine = CalculatorEngine::default_uk();

        let mut fields = FieldMap::new();
        fields.insert("annual_income".into(), FieldValue::Number(30_000.0));
        fields.insert("monthly_outgoings".into(), FieldValue::Number(9_000.0));
        fields.insert("term_years".into(), FieldValue::Number(25.0));

        let err = engine.calculate_fields("affordability", &fields).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Monthly outgoings exceed income. Please review your figures."
        );
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        use std::sync::Arc;

        let engine = Arc::new(CalculatorEngine::default_uk());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || {
                    let request = CalculationRequest::Repayment(RepaymentRequest {
                        loan_amount: 100_000.0 + i as f64 * 50_000.0,
                        interest_rate: 3.5,
                        term_years: 25,
                        overpayment: 0.0,
                        repayment_type: crate::request::RepaymentType::Repayment,
                    });
                    engine.calculate(&request).unwrap()
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
