/// Error codes with category prefix
///
/// Categories:
/// - IO: File system operations
/// - JSN: Input payload parsing
/// - CFG: Configuration parsing/validation
/// - PAY: Table payload shape
/// - COL: Column lookup
/// - TUI: Terminal UI errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File could not be read or written
    Io001,
    /// Input is not valid JSON
    Jsn001,
    /// Invalid config format
    Cfg001,
    /// Invalid config value
    Cfg002,
    /// Payload cannot be turned into a table
    Pay001,
    /// Column not found
    Col001,
    /// Terminal initialization failed
    Tui001,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "IO001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "IO001",
            ErrorCode::Jsn001 => "JSN001",
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Cfg002 => "CFG002",
            ErrorCode::Pay001 => "PAY001",
            ErrorCode::Col001 => "COL001",
            ErrorCode::Tui001 => "TUI001",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "The file could not be read or written",
            ErrorCode::Jsn001 => "The input is not valid JSON",
            ErrorCode::Cfg001 => "The configuration file has an invalid format",
            ErrorCode::Cfg002 => "A configuration value is out of range",
            ErrorCode::Pay001 => "The input cannot be displayed as a table",
            ErrorCode::Col001 => "The requested column does not exist",
            ErrorCode::Tui001 => "Failed to initialize the terminal interface",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_error_codes_have_valid_string() {
        let codes = [
            ErrorCode::Io001,
            ErrorCode::Jsn001,
            ErrorCode::Cfg001,
            ErrorCode::Cfg002,
            ErrorCode::Pay001,
            ErrorCode::Col001,
            ErrorCode::Tui001,
        ];
        for code in codes {
            let s = code.as_str();
            assert!(s.len() >= 5, "{s} too short");
            assert!(s.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
            assert!(!code.cause().is_empty());
        }
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ErrorCode::Cfg002.to_string(), "CFG002");
    }
}
