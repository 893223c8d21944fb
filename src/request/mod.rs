//! Calculation requests: typed structs plus the form-field parsing layer

mod data;
mod parse;

pub use data::{
    AffordabilityRequest, CalculationRequest, CalculatorKind, CreditRating, EmploymentStatus,
    PropertyAge, PropertyFeature, PropertyType, RemortgageFees, RemortgageRequest,
    RepaymentRequest, RepaymentType, ValuationRequest,
};
pub use parse::{parse_request, FieldMap, FieldValue};
