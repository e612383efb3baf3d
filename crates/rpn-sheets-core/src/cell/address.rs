//! Cell address type

use crate::error::{Error, Result};
use crate::MAX_COLS;
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "C12")
///
/// Addresses are a single column letter (`A`-`Z`) followed by a 1-based row
/// number. There are no multi-letter columns and no absolute (`$`) markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: usize,
    /// Column index (0-based, A=0, B=1, ..., Z=25)
    pub col: usize,
}

impl CellAddress {
    /// Create a new cell address from 0-based indices
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether a token should be treated as a cell address.
    ///
    /// Only the first character is inspected: anything starting with an
    /// uppercase ASCII letter is an address, everything else is a literal.
    pub fn is_address(token: &str) -> bool {
        token.as_bytes().first().is_some_and(u8::is_ascii_uppercase)
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use rpn_sheets_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("A1").unwrap();
    /// assert_eq!(addr.row, 0);
    /// assert_eq!(addr.col, 0);
    ///
    /// let addr = CellAddress::parse("C2").unwrap();
    /// assert_eq!(addr.row, 1);
    /// assert_eq!(addr.col, 2);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let letter = match chars.next() {
            Some(c) if c.is_ascii_uppercase() => c,
            Some(_) => {
                return Err(Error::InvalidAddress(format!(
                    "no column letter in '{}'",
                    s
                )))
            }
            None => return Err(Error::InvalidAddress("empty address".into())),
        };
        let col = Self::letter_to_column(letter)?;

        let row_str = chars.as_str();
        if row_str.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }

        let row: usize = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        // Row numbers are 1-based on the wire
        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Ok(Self { row: row - 1, col })
    }

    /// Convert a column letter to its index (A = 0, Z = 25)
    pub fn letter_to_column(letter: char) -> Result<usize> {
        if !letter.is_ascii_uppercase() {
            return Err(Error::InvalidAddress(format!(
                "invalid column letter '{}'",
                letter
            )));
        }
        Ok((letter as u8 - b'A') as usize)
    }

    /// Convert a column index to its letter (0 = A, 25 = Z)
    pub fn column_to_letter(col: usize) -> Option<char> {
        if col < MAX_COLS {
            Some((b'A' + col as u8) as char)
        } else {
            None
        }
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Self::column_to_letter(self.col) {
            Some(letter) => write!(f, "{}{}", letter, self.row + 1),
            None => write!(f, "C{}R{}", self.col, self.row + 1),
        }
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_address_parse() {
        let addr = CellAddress::parse("A1").unwrap();
        assert_eq!(addr, CellAddress::new(0, 0));

        let addr = CellAddress::parse("B2").unwrap();
        assert_eq!(addr.row, 1);
        assert_eq!(addr.col, 1);

        let addr = CellAddress::parse("Z100").unwrap();
        assert_eq!(addr.row, 99);
        assert_eq!(addr.col, 25);

        // Leading zeros in the row number are accepted
        assert_eq!(CellAddress::parse("C02").unwrap(), CellAddress::new(1, 2));
    }

    #[test]
    fn test_cell_address_parse_errors() {
        assert!(CellAddress::parse("").is_err());
        assert!(CellAddress::parse("A").is_err());
        assert!(CellAddress::parse("1").is_err());
        assert!(CellAddress::parse("a1").is_err());
        assert!(CellAddress::parse("A0").is_err());
        assert!(CellAddress::parse("AA1").is_err());
        assert!(CellAddress::parse("A1.5").is_err());
    }

    #[test]
    fn test_is_address() {
        assert!(CellAddress::is_address("B1"));
        assert!(CellAddress::is_address("Bogus"));
        assert!(!CellAddress::is_address("b1"));
        assert!(!CellAddress::is_address("12"));
        assert!(!CellAddress::is_address("+"));
        assert!(!CellAddress::is_address(""));
    }

    #[test]
    fn test_cell_address_display() {
        assert_eq!(CellAddress::new(0, 0).to_string(), "A1");
        assert_eq!(CellAddress::new(99, 2).to_string(), "C100");
        assert_eq!(CellAddress::new(0, 25).to_string(), "Z1");
        assert_eq!("D7".parse::<CellAddress>().unwrap().to_string(), "D7");
    }
}
