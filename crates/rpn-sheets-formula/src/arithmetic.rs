//! Arithmetic engine
//!
//! Applies one binary operator to two resolved operands. Results beyond the
//! safe-integer bound (the same symmetric threshold for every operator) are
//! reported as [`CellError`]s instead of numbers. Floating-point artifacts
//! are left alone.

use crate::parser::Operator;
use rpn_sheets_core::{CellError, CellValue, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};

/// Apply `operator` to two numbers.
///
/// Only the checks listed here are made:
/// - `+` and `*` report [`CellError::Overflow`] above the bound
/// - `-` reports [`CellError::Underflow`] below the negative bound
/// - `/` divides only by a strictly positive divisor; zero, negative and
///   NaN divisors all report [`CellError::DivideByZero`]
pub fn calculate(a: f64, b: f64, operator: Operator) -> Result<f64, CellError> {
    match operator {
        Operator::Add => {
            let result = a + b;
            if result > MAX_SAFE_INTEGER {
                Err(CellError::Overflow)
            } else {
                Ok(result)
            }
        }
        Operator::Subtract => {
            let result = a - b;
            if result < MIN_SAFE_INTEGER {
                Err(CellError::Underflow)
            } else {
                Ok(result)
            }
        }
        Operator::Multiply => {
            let result = a * b;
            if result > MAX_SAFE_INTEGER {
                Err(CellError::Overflow)
            } else {
                Ok(result)
            }
        }
        Operator::Divide => {
            if b > 0.0 {
                let result = a / b;
                if result > MAX_SAFE_INTEGER {
                    Err(CellError::Overflow)
                } else {
                    Ok(result)
                }
            } else {
                Err(CellError::DivideByZero)
            }
        }
    }
}

/// Apply `operator` to two resolved cell values.
///
/// # Examples
/// ```
/// use rpn_sheets_core::CellValue;
/// use rpn_sheets_formula::{apply, Operator};
///
/// let result = apply(&CellValue::text("11"), &CellValue::text("2"), Operator::Divide);
/// assert_eq!(result.to_string(), "5.5");
/// ```
pub fn apply(a: &CellValue, b: &CellValue, operator: Operator) -> CellValue {
    calculate(to_number(a), to_number(b), operator).into()
}

/// Numeric view of a resolved operand.
///
/// Computed numbers are used directly, text goes through [`parse_number`],
/// and stored errors are not numbers.
pub fn to_number(value: &CellValue) -> f64 {
    match value {
        CellValue::Number(n) => *n,
        CellValue::Text(s) => parse_number(s),
        CellValue::Error(_) => f64::NAN,
    }
}

/// Convert operand text to a number.
///
/// Surrounding whitespace is ignored and blank text is zero. Decimal and
/// exponent notation, `Infinity`, and unsigned `0x`/`0o`/`0b` integers are
/// accepted. Anything else (formula text, error text, words) is NaN.
pub fn parse_number(text: &str) -> f64 {
    let s = text.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(n) = parse_radix_integer(s) {
        return n;
    }

    // `f64::from_str` also takes "inf" and "nan", which are not numbers here
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return f64::NAN;
    }

    s.parse().unwrap_or(f64::NAN)
}

fn parse_radix_integer(s: &str) -> Option<f64> {
    let (radix, digits) = match s.get(..2)? {
        "0x" | "0X" => (16, &s[2..]),
        "0o" | "0O" => (8, &s[2..]),
        "0b" | "0B" => (2, &s[2..]),
        _ => return None,
    };
    Some(
        u64::from_str_radix(digits, radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN),
    )
}
