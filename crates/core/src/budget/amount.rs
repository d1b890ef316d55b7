//! Amount coercion from loosely typed JSON input.

use serde_json::Value;

use super::error::BudgetError;

/// Coerces a JSON value into a finite amount.
///
/// Numbers are taken as-is and strings are parsed after trimming, so both
/// `1200` and `"1200"` yield `1200.0`. Anything else, including `NaN` and
/// infinities spelled out in strings, is rejected.
///
/// # Errors
///
/// Returns `BudgetError::InvalidAmount` if the value is not convertible.
pub fn coerce_amount(value: &Value) -> Result<f64, BudgetError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(amount) if amount.is_finite() => Ok(amount),
        _ => Err(BudgetError::InvalidAmount(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(1500.5), 1500.5)]
    #[case(json!(0), 0.0)]
    #[case(json!(-42), -42.0)]
    #[case(json!("1200"), 1200.0)]
    #[case(json!(" 12.25 "), 12.25)]
    #[case(json!("1e3"), 1000.0)]
    fn test_accepts_numeric_input(#[case] input: Value, #[case] expected: f64) {
        assert_eq!(coerce_amount(&input), Ok(expected));
    }

    #[rstest]
    #[case(json!("abc"))]
    #[case(json!(""))]
    #[case(json!("NaN"))]
    #[case(json!("inf"))]
    #[case(json!(true))]
    #[case(json!(null))]
    #[case(json!([1, 2]))]
    #[case(json!({"value": 1}))]
    fn test_rejects_non_numeric_input(#[case] input: Value) {
        assert!(matches!(
            coerce_amount(&input),
            Err(BudgetError::InvalidAmount(_))
        ));
    }
}
