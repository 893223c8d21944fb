//! Parse a flat form-field map into a typed calculation request
//!
//! The web layer submits everything as loosely typed key/value pairs.
//! This module is the single place where stringly-typed input is coerced
//! into numbers and enum tokens; the calculation routines downstream only
//! ever see typed requests. Shape problems (missing field, non-numeric
//! value, unknown token) are rejected here; domain range checks (income
//! must be positive, term within bounds) live with each routine.

use super::data::*;
use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single submitted form value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    List(Vec<String>),
}

/// Flat key/value record as submitted by the form layer
pub type FieldMap = HashMap<String, FieldValue>;

/// Parse and validate the field map for the given calculator kind
pub fn parse_request(kind: CalculatorKind, fields: &FieldMap) -> EngineResult<CalculationRequest> {
    match kind {
        CalculatorKind::Affordability => Ok(CalculationRequest::Affordability(parse_affordability(fields)?)),
        CalculatorKind::Repayment => Ok(CalculationRequest::Repayment(parse_repayment(fields)?)),
        CalculatorKind::Remortgage => Ok(CalculationRequest::Remortgage(parse_remortgage(fields)?)),
        CalculatorKind::Valuation => Ok(CalculationRequest::Valuation(parse_valuation(fields)?)),
    }
}

fn parse_affordability(fields: &FieldMap) -> EngineResult<AffordabilityRequest> {
    Ok(AffordabilityRequest {
        annual_income: require_number(fields, "annual_income")?,
        partner_income: optional_number(fields, "partner_income")?.unwrap_or(0.0),
        monthly_outgoings: optional_number(fields, "monthly_outgoings")?.unwrap_or(0.0),
        deposit: optional_number(fields, "deposit")?.unwrap_or(0.0),
        term_years: require_years(fields, "term_years")?,
        credit_rating: optional_token(fields, "credit_rating", parse_credit_rating)?,
        employment_status: optional_token(fields, "employment_status", parse_employment)?,
    })
}

fn parse_repayment(fields: &FieldMap) -> EngineResult<RepaymentRequest> {
    let repayment_type = match optional_text(fields, "repayment_type") {
        Some(token) => parse_repayment_type(&token)?,
        None => RepaymentType::Repayment,
    };

    Ok(RepaymentRequest {
        loan_amount: require_number(fields, "loan_amount")?,
        interest_rate: require_number(fields, "interest_rate")?,
        term_years: require_years(fields, "term_years")?,
        overpayment: optional_number(fields, "overpayment")?.unwrap_or(0.0),
        repayment_type,
    })
}

fn parse_remortgage(fields: &FieldMap) -> EngineResult<RemortgageRequest> {
    let fees = RemortgageFees {
        arrangement_fee: optional_number(fields, "arrangement_fee")?.unwrap_or(0.0),
        valuation_fee: optional_number(fields, "valuation_fee")?.unwrap_or(0.0),
        legal_fees: optional_number(fields, "legal_fees")?.unwrap_or(0.0),
        exit_fee: optional_number(fields, "exit_fee")?.unwrap_or(0.0),
        broker_fee: optional_number(fields, "broker_fee")?.unwrap_or(0.0),
    };

    Ok(RemortgageRequest {
        current_balance: require_number(fields, "current_balance")?,
        current_rate: require_number(fields, "current_rate")?,
        new_rate: require_number(fields, "new_rate")?,
        remaining_term: require_years(fields, "remaining_term")?,
        fees,
    })
}

fn parse_valuation(fields: &FieldMap) -> EngineResult<ValuationRequest> {
    let features = match fields.get("features") {
        None => Vec::new(),
        Some(FieldValue::List(tokens)) => {
            let mut parsed = Vec::with_capacity(tokens.len());
            for token in tokens {
                parsed.push(parse_feature(token.trim())?);
            }
            parsed
        }
        Some(FieldValue::Text(token)) => vec![parse_feature(token.trim())?],
        Some(FieldValue::Number(_)) => {
            return Err(EngineError::validation("'features' must be a list of feature names."));
        }
    };

    Ok(ValuationRequest {
        postcode: require_text(fields, "postcode")?,
        property_type: parse_property_type(&require_text(fields, "property_type")?)?,
        bedrooms: require_count(fields, "bedrooms")?,
        bathrooms: optional_count(fields, "bathrooms")?,
        floor_area: optional_number(fields, "floor_area")?.filter(|&a| a > 0.0),
        property_age: optional_token(fields, "property_age", parse_property_age)?,
        features,
    })
}

// --- field extraction helpers ---

/// Coerce a submitted value to a finite, non-negative number.
/// Numeric strings are accepted; currency formatting ("£250,000") is stripped.
fn coerce_number(key: &str, value: &FieldValue) -> EngineResult<f64> {
    let parsed = match value {
        FieldValue::Number(n) => *n,
        FieldValue::Text(s) => {
            let cleaned: String = s.chars().filter(|c| !c.is_whitespace() && *c != ',' && *c != '£').collect();
            cleaned
                .parse::<f64>()
                .map_err(|_| EngineError::validation(format!("'{}' must be a number.", key)))?
        }
        FieldValue::List(_) => {
            return Err(EngineError::validation(format!("'{}' must be a number.", key)));
        }
    };

    if !parsed.is_finite() {
        return Err(EngineError::validation(format!("'{}' must be a finite number.", key)));
    }
    if parsed < 0.0 {
        return Err(EngineError::validation(format!("'{}' cannot be negative.", key)));
    }
    Ok(parsed)
}

fn require_number(fields: &FieldMap, key: &str) -> EngineResult<f64> {
    match fields.get(key) {
        Some(value) => coerce_number(key, value),
        None => Err(EngineError::validation(format!("'{}' is required.", key))),
    }
}

fn optional_number(fields: &FieldMap, key: &str) -> EngineResult<Option<f64>> {
    match fields.get(key) {
        Some(FieldValue::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => Ok(Some(coerce_number(key, value)?)),
        None => Ok(None),
    }
}

/// Whole-number field (term years, bedroom counts). Fractional input truncates,
/// matching how the form layer has always handled these selects.
fn require_count(fields: &FieldMap, key: &str) -> EngineResult<u32> {
    let n = require_number(fields, key)?;
    Ok(n.trunc() as u32)
}

fn optional_count(fields: &FieldMap, key: &str) -> EngineResult<Option<u32>> {
    Ok(optional_number(fields, key)?.map(|n| n.trunc() as u32))
}

fn require_years(fields: &FieldMap, key: &str) -> EngineResult<u32> {
    require_count(fields, key)
}

fn require_text(fields: &FieldMap, key: &str) -> EngineResult<String> {
    match fields.get(key) {
        Some(FieldValue::Text(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(_) | None => Err(EngineError::validation(format!("'{}' is required.", key))),
    }
}

fn optional_text(fields: &FieldMap, key: &str) -> Option<String> {
    match fields.get(key) {
        Some(FieldValue::Text(s)) if !s.trim().is_empty() => Some(s.trim().to_lowercase()),
        _ => None,
    }
}

fn optional_token<T>(
    fields: &FieldMap,
    key: &str,
    parse: fn(&str) -> EngineResult<T>,
) -> EngineResult<Option<T>> {
    match optional_text(fields, key) {
        Some(token) => Ok(Some(parse(&token)?)),
        None => Ok(None),
    }
}

// --- enum token parsers ---

fn parse_repayment_type(token: &str) -> EngineResult<RepaymentType> {
    match token {
        "repayment" => Ok(RepaymentType::Repayment),
        "interest-only" => Ok(RepaymentType::InterestOnly),
        other => Err(EngineError::validation(format!("Unknown repayment type: {}", other))),
    }
}

fn parse_property_type(token: &str) -> EngineResult<PropertyType> {
    match token.to_lowercase().as_str() {
        "flat" => Ok(PropertyType::Flat),
        "terraced" => Ok(PropertyType::Terraced),
        "semi-detached" => Ok(PropertyType::SemiDetached),
        "detached" => Ok(PropertyType::Detached),
        "bungalow" => Ok(PropertyType::Bungalow),
        other => Err(EngineError::validation(format!("Unknown property type: {}", other))),
    }
}

fn parse_property_age(token: &str) -> EngineResult<PropertyAge> {
    match token {
        "new" => Ok(PropertyAge::New),
        "modern" => Ok(PropertyAge::Modern),
        "established" => Ok(PropertyAge::Established),
        "period" => Ok(PropertyAge::Period),
        other => Err(EngineError::validation(format!("Unknown property age: {}", other))),
    }
}

fn parse_feature(token: &str) -> EngineResult<PropertyFeature> {
    match token.to_lowercase().as_str() {
        "garden" => Ok(PropertyFeature::Garden),
        "parking" => Ok(PropertyFeature::Parking),
        "garage" => Ok(PropertyFeature::Garage),
        "conservatory" => Ok(PropertyFeature::Conservatory),
        other => Err(EngineError::validation(format!("Unknown property feature: {}", other))),
    }
}

fn parse_credit_rating(token: &str) -> EngineResult<CreditRating> {
    match token {
        "excellent" => Ok(CreditRating::Excellent),
        "good" => Ok(CreditRating::Good),
        "fair" => Ok(CreditRating::Fair),
        "poor" => Ok(CreditRating::Poor),
        other => Err(EngineError::validation(format!("Unknown credit rating: {}", other))),
    }
}

fn parse_employment(token: &str) -> EngineResult<EmploymentStatus> {
    match token {
        "employed" => Ok(EmploymentStatus::Employed),
        "self-employed" => Ok(EmploymentStatus::SelfEmployed),
        "contractor" => Ok(EmploymentStatus::Contractor),
        "retired" => Ok(EmploymentStatus::Retired),
        other => Err(EngineError::validation(format!("Unknown employment status: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(v: f64) -> FieldValue {
        FieldValue::Number(v)
    }

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn test_parse_repayment_with_defaults() {
        let mut fields = FieldMap::new();
        fields.insert("loan_amount".into(), num(300_000.0));
        fields.insert("interest_rate".into(), text("3.5"));
        fields.insert("term_years".into(), num(25.0));

        let req = parse_request(CalculatorKind::Repayment, &fields).unwrap();
        match req {
            CalculationRequest::Repayment(r) => {
                assert_eq!(r.loan_amount, 300_000.0);
                assert_eq!(r.interest_rate, 3.5);
                assert_eq!(r.overpayment, 0.0);
                assert_eq!(r.repayment_type, RepaymentType::Repayment);
            }
            other => panic!("Unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_currency_formatting_stripped() {
        let mut fields = FieldMap::new();
        fields.insert("annual_income".into(), text("£45,000"));
        fields.insert("term_years".into(), num(25.0));

        let req = parse_request(CalculatorKind::Affordability, &fields).unwrap();
        match req {
            CalculationRequest::Affordability(r) => assert_eq!(r.annual_income, 45_000.0),
            other => panic!("Unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_missing_required_field() {
        let mut fields = FieldMap::new();
        fields.insert("interest_rate".into(), num(3.5));
        fields.insert("term_years".into(), num(25.0));

        let err = parse_request(CalculatorKind::Repayment, &fields).unwrap_err();
        assert_eq!(err, EngineError::validation("'loan_amount' is required."));
    }

    #[test]
    fn test_non_numeric_rejected() {
        let mut fields = FieldMap::new();
        fields.insert("loan_amount".into(), text("lots"));
        fields.insert("interest_rate".into(), num(3.5));
        fields.insert("term_years".into(), num(25.0));

        let err = parse_request(CalculatorKind::Repayment, &fields).unwrap_err();
        assert_eq!(err, EngineError::validation("'loan_amount' must be a number."));
    }

    #[test]
    fn test_negative_rejected_at_parse() {
        let mut fields = FieldMap::new();
        fields.insert("loan_amount".into(), num(-5.0));
        fields.insert("interest_rate".into(), num(3.5));
        fields.insert("term_years".into(), num(25.0));

        let err = parse_request(CalculatorKind::Repayment, &fields).unwrap_err();
        assert_eq!(err, EngineError::validation("'loan_amount' cannot be negative."));
    }

    #[test]
    fn test_valuation_features_list() {
        let mut fields = FieldMap::new();
        fields.insert("postcode".into(), text("M1 4BT"));
        fields.insert("property_type".into(), text("terraced"));
        fields.insert("bedrooms".into(), num(3.0));
        fields.insert(
            "features".into(),
            FieldValue::List(vec!["garden".to_string(), "garage".to_string()]),
        );

        let req = parse_request(CalculatorKind::Valuation, &fields).unwrap();
        match req {
            CalculationRequest::Valuation(v) => {
                assert_eq!(v.features, vec![PropertyFeature::Garden, PropertyFeature::Garage]);
                assert_eq!(v.bathrooms, None);
                assert_eq!(v.property_age, None);
            }
            other => panic!("Unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_field_value_json_shapes() {
        let json = r#"{"annual_income": 52000, "deposit": "30000", "features": ["garden"]}"#;
        let fields: FieldMap = serde_json::from_str(json).unwrap();
        assert_eq!(fields["annual_income"], FieldValue::Number(52_000.0));
        assert_eq!(fields["deposit"], FieldValue::Text("30000".to_string()));
        assert_eq!(fields["features"], FieldValue::List(vec!["garden".to_string()]));
    }
}
