//! Number to text conversion
//!
//! Results are written back as the shortest decimal string that round-trips
//! to the same `f64`. Integers carry no fractional part, and very large or
//! very small magnitudes switch to exponent form (`1e+21`, `1.5e-7`).

/// Format a number using the shortest round-trip representation.
///
/// # Examples
/// ```
/// use rpn_sheets_core::format_number;
///
/// assert_eq!(format_number(9.0), "9");
/// assert_eq!(format_number(1234.567), "1234.567");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
pub fn format_number(n: f64) -> String {
    // Both zeroes print as "0"
    if n == 0.0 {
        return "0".to_string();
    }
    ryu_js::Buffer::new().format(n).to_string()
}
