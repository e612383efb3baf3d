//! CSV options

/// Options for reading CSV input
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Trim surrounding whitespace from every field (default: true)
    pub trim: bool,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            trim: true,
        }
    }
}

/// Options for writing a grid back out
#[derive(Debug, Clone)]
pub struct CsvWriteOptions {
    /// Field delimiter (default: comma)
    pub delimiter: char,
    /// Line terminator (default: LF)
    pub line_terminator: LineTerminator,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            line_terminator: LineTerminator::LF,
        }
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineTerminator {
    /// Unix-style (LF)
    #[default]
    LF,
    /// Windows-style (CRLF)
    CRLF,
}

impl LineTerminator {
    /// The terminator's text
    pub fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::LF => "\n",
            LineTerminator::CRLF => "\r\n",
        }
    }
}
