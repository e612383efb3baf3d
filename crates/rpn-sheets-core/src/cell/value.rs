//! Cell value types

use crate::number::format_number;
use std::fmt;

/// Represents the value stored in a cell
///
/// Cells start out as [`CellValue::Text`] straight from ingest. The evaluator
/// replaces formula cells with a [`CellValue::Number`] or a
/// [`CellValue::Error`]; the text form is only produced at display time.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Raw text as ingested: a literal or a formula (leading `=`)
    Text(String),

    /// Computed numeric result
    Number(f64),

    /// Computed arithmetic error
    Error(CellError),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Check if the cell holds formula text (starts with `=`)
    pub fn is_formula(&self) -> bool {
        self.formula_text().is_some()
    }

    /// Check if the cell contains an error
    pub fn is_error(&self) -> bool {
        matches!(self, CellValue::Error(_))
    }

    /// Get the formula text if this is a formula cell
    pub fn formula_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) if s.starts_with('=') => Some(s),
            _ => None,
        }
    }

    /// Get the raw text if this is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Text(String::new())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", format_number(*n)),
            CellValue::Error(e) => write!(f, "{}", e),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<CellError> for CellValue {
    fn from(e: CellError) -> Self {
        CellValue::Error(e)
    }
}

impl From<std::result::Result<f64, CellError>> for CellValue {
    fn from(result: std::result::Result<f64, CellError>) -> Self {
        match result {
            Ok(n) => CellValue::Number(n),
            Err(e) => CellValue::Error(e),
        }
    }
}

/// Arithmetic error values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellError {
    /// Result above the safe-integer bound
    Overflow,
    /// Difference below the negative safe-integer bound
    Underflow,
    /// Division by a zero, negative, or non-numeric divisor
    DivideByZero,
}

impl CellError {
    /// Get the display string for this error
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::Overflow => "Error: Overflow",
            CellError::Underflow => "Error: Underflow",
            CellError::DivideByZero => "Error: Divide by Zero",
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_conversions() {
        assert_eq!(CellValue::from(3.5), CellValue::Number(3.5));
        assert_eq!(CellValue::from("hello"), CellValue::text("hello"));
        assert_eq!(
            CellValue::from(Err::<f64, _>(CellError::Overflow)),
            CellValue::Error(CellError::Overflow)
        );
    }

    #[test]
    fn test_is_formula() {
        assert!(CellValue::text("=A1").is_formula());
        assert!(CellValue::text("=").is_formula());
        assert!(!CellValue::text("3.0").is_formula());
        assert!(!CellValue::text("").is_formula());
        assert!(!CellValue::text(" =A1").is_formula());
        assert!(!CellValue::Number(1.0).is_formula());
        assert!(!CellValue::Error(CellError::Overflow).is_formula());
    }

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::text("3.0").to_string(), "3.0");
        assert_eq!(CellValue::Number(9.0).to_string(), "9");
        assert_eq!(CellValue::Number(5.5).to_string(), "5.5");
        assert_eq!(
            CellValue::Error(CellError::DivideByZero).to_string(),
            "Error: Divide by Zero"
        );
    }

    #[test]
    fn test_cell_error_display() {
        assert_eq!(CellError::Overflow.to_string(), "Error: Overflow");
        assert_eq!(CellError::Underflow.to_string(), "Error: Underflow");
        assert_eq!(CellError::DivideByZero.to_string(), "Error: Divide by Zero");
    }
}
