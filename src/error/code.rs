/// Error codes with category prefix
///
/// Categories:
/// - NET: Network connectivity errors
/// - API: Collection API errors (non-2xx responses)
/// - PAR: Response body parsing errors
/// - IO: File system operations
/// - CFG: Configuration parsing/validation
/// - CCH: Category cache errors
/// - TUI: Terminal UI errors
/// - VAL: Input validation errors
/// - INT: Unexpected internal errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Network errors (NET001-NET099)
    /// Connection failed
    Net001,
    /// Request timeout
    Net002,

    // API errors (API001-API099)
    /// Rate limit exceeded
    Api001,
    /// Missing or rejected API key
    Api002,
    /// Resource not found
    Api003,
    /// Server error (5xx) or other non-success status
    Api004,

    // Parse errors (PAR001-PAR099)
    /// Body was not valid JSON or lacked expected fields
    Par001,

    // I/O errors (IO001-IO099)
    /// File operation failed
    Io001,

    // Config errors (CFG001-CFG099)
    /// Invalid config
    Cfg001,

    // Cache errors (CCH001-CCH099)
    /// Category cache unreadable or unwritable
    Cch001,

    // TUI errors (TUI001-TUI099)
    /// Terminal initialization failed
    Tui001,

    // Validation errors (VAL001-VAL099)
    /// Invalid argument
    Val001,

    // Internal errors (INT001-INT099)
    /// Unexpected internal error
    Int001,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "NET001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Net001 => "NET001",
            ErrorCode::Net002 => "NET002",
            ErrorCode::Api001 => "API001",
            ErrorCode::Api002 => "API002",
            ErrorCode::Api003 => "API003",
            ErrorCode::Api004 => "API004",
            ErrorCode::Par001 => "PAR001",
            ErrorCode::Io001 => "IO001",
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Cch001 => "CCH001",
            ErrorCode::Tui001 => "TUI001",
            ErrorCode::Val001 => "VAL001",
            ErrorCode::Int001 => "INT001",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Net001 => "Unable to reach the collection API",
            ErrorCode::Net002 => "The request timed out while waiting for a response",
            ErrorCode::Api001 => "API rate limit has been exceeded",
            ErrorCode::Api002 => "The API key is missing or was rejected",
            ErrorCode::Api003 => "The requested resource was not found",
            ErrorCode::Api004 => "The API answered with an unexpected status",
            ErrorCode::Par001 => "The API response could not be parsed",
            ErrorCode::Io001 => "A file could not be read or written",
            ErrorCode::Cfg001 => "The configuration is invalid",
            ErrorCode::Cch001 => "The category cache could not be used",
            ErrorCode::Tui001 => "Failed to initialize the terminal interface",
            ErrorCode::Val001 => "An invalid argument was provided",
            ErrorCode::Int001 => "An unexpected internal error occurred",
        }
    }

    /// Returns remediation steps
    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCode::Net001 => "1. Check your internet connection\n2. Verify base_url in the config\n3. Try again later if the server is down",
            ErrorCode::Net002 => "1. Check your internet connection speed\n2. Raise timeout_secs in the config\n3. Try again later",
            ErrorCode::Api001 => "1. Wait a few minutes before retrying\n2. Check your API key quota",
            ErrorCode::Api002 => "1. Set HARVARD_API_KEY or api_key in ~/.artq/config.toml\n2. Verify the key is still valid",
            ErrorCode::Api003 => "1. Verify the pagination link or filter values\n2. Run 'artq search' again from the first page",
            ErrorCode::Api004 => "1. Wait a few minutes and retry\n2. Report the issue if it persists",
            ErrorCode::Par001 => "1. Verify base_url points at the collection API\n2. Clear the cache with 'artq cache clear'",
            ErrorCode::Io001 => "1. Check file/directory permissions\n2. Verify the path exists",
            ErrorCode::Cfg001 => "1. Check ~/.artq/config.toml syntax\n2. Remove unknown keys",
            ErrorCode::Cch001 => "1. Run 'artq cache clear'\n2. Check permissions of the cache directory",
            ErrorCode::Tui001 => "1. Ensure your terminal supports raw mode\n2. Try a different terminal emulator",
            ErrorCode::Val001 => "1. Check the argument format\n2. Use 'artq --help' for usage information",
            ErrorCode::Int001 => "1. Try the operation again\n2. Report the issue with ARTQ_LOG=debug output",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCode; 13] = [
        ErrorCode::Net001,
        ErrorCode::Net002,
        ErrorCode::Api001,
        ErrorCode::Api002,
        ErrorCode::Api003,
        ErrorCode::Api004,
        ErrorCode::Par001,
        ErrorCode::Io001,
        ErrorCode::Cfg001,
        ErrorCode::Cch001,
        ErrorCode::Tui001,
        ErrorCode::Val001,
        ErrorCode::Int001,
    ];

    #[test]
    fn all_error_codes_have_valid_string() {
        for code in ALL {
            let s = code.as_str();
            assert!(
                s.len() >= 5 && s.len() <= 6,
                "Error code string should be 5-6 characters: {}",
                s
            );
        }
    }

    #[test]
    fn all_error_codes_have_cause_and_remediation() {
        for code in ALL {
            assert!(!code.cause().is_empty(), "Cause empty for {:?}", code);
            assert!(
                !code.remediation().is_empty(),
                "Remediation empty for {:?}",
                code
            );
        }
    }

    #[test]
    fn error_code_format_matches_pattern() {
        let codes = [
            (ErrorCode::Net001, "NET"),
            (ErrorCode::Api002, "API"),
            (ErrorCode::Par001, "PAR"),
            (ErrorCode::Io001, "IO0"),
            (ErrorCode::Cch001, "CCH"),
            (ErrorCode::Tui001, "TUI"),
        ];

        for (code, expected_prefix) in codes {
            assert!(code.as_str().starts_with(expected_prefix));
        }
    }
}
