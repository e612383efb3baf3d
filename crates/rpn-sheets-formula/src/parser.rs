//! Formula shape detection
//!
//! A formula is any cell text starting with `=`. The text is split on single
//! spaces and classified by token count; no deeper parsing happens here.

use std::fmt;

/// The shape of a formula cell, borrowing its tokens from the cell text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula<'a> {
    /// `=X`: a single operand copied verbatim into the cell
    Unary(&'a str),
    /// `=A B op`: two operands and an operator in postfix order
    Binary {
        lhs: &'a str,
        rhs: &'a str,
        operator: &'a str,
    },
    /// Any other token count; the cell is left as-is
    Unsupported { tokens: usize },
}

/// Classify cell text as a formula.
///
/// Returns `None` for literals (text not starting with `=`). Splitting is on
/// every single space, so doubled spaces produce empty tokens and change the
/// token count.
///
/// # Examples
/// ```
/// use rpn_sheets_formula::{parse_formula, Formula};
///
/// assert_eq!(parse_formula("3.0"), None);
/// assert_eq!(parse_formula("=B2"), Some(Formula::Unary("B2")));
/// assert_eq!(
///     parse_formula("=A1 2 +"),
///     Some(Formula::Binary { lhs: "A1", rhs: "2", operator: "+" })
/// );
/// ```
pub fn parse_formula(text: &str) -> Option<Formula<'_>> {
    let body = text.strip_prefix('=')?;
    let tokens: Vec<&str> = body.split(' ').collect();

    Some(match tokens.as_slice() {
        &[operand] => Formula::Unary(operand),
        &[lhs, rhs, operator] => Formula::Binary {
            lhs,
            rhs,
            operator,
        },
        other => Formula::Unsupported {
            tokens: other.len(),
        },
    })
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Parse an operator symbol
    pub fn parse(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    /// The operator's symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
