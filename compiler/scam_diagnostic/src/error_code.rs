//! Error codes for all Scam diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E6001`) with the first digit
//! indicating the phase that produced it.

use std::fmt;

/// Error codes for all Scam diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime / eval errors
/// - E9xxx: Driver errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Invalid number literal
    E0003,
    /// Invalid escape sequence
    E0005,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Empty call `()`
    E1004,
    /// Extra input after a complete expression
    E1005,

    // Eval Errors (E6xxx)
    /// Division by zero
    E6001,
    /// Modulo by zero
    E6002,
    /// Integer overflow
    E6003,
    /// Math function outside its domain
    E6004,
    /// Argument of the wrong type
    E6010,
    /// Sequences of different kinds mixed
    E6011,
    /// Call head is not an operator
    E6012,
    /// Values cannot be ordered against each other
    E6013,
    /// Unknown operator
    E6020,
    /// Unbound symbol
    E6021,
    /// Index out of bounds
    E6025,
    /// Slice bounds out of range
    E6026,
    /// Element of an empty sequence
    E6027,
    /// Invalid range bounds
    E6028,
    /// Range too large to build
    E6029,
    /// Wrong number of arguments
    E6030,
    /// Assertion failed
    E6050,

    // Driver Errors (E9xxx)
    /// Source file could not be read
    E9001,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0005,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6010,
        ErrorCode::E6011,
        ErrorCode::E6012,
        ErrorCode::E6013,
        ErrorCode::E6020,
        ErrorCode::E6021,
        ErrorCode::E6025,
        ErrorCode::E6026,
        ErrorCode::E6027,
        ErrorCode::E6028,
        ErrorCode::E6029,
        ErrorCode::E6030,
        ErrorCode::E6050,
        ErrorCode::E9001,
    ];

    /// Get the error code as a string (e.g., "E6001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6010 => "E6010",
            ErrorCode::E6011 => "E6011",
            ErrorCode::E6012 => "E6012",
            ErrorCode::E6013 => "E6013",
            ErrorCode::E6020 => "E6020",
            ErrorCode::E6021 => "E6021",
            ErrorCode::E6025 => "E6025",
            ErrorCode::E6026 => "E6026",
            ErrorCode::E6027 => "E6027",
            ErrorCode::E6028 => "E6028",
            ErrorCode::E6029 => "E6029",
            ErrorCode::E6030 => "E6030",
            ErrorCode::E6050 => "E6050",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line description used by `scam explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid character in source",
            ErrorCode::E0003 => "invalid number literal",
            ErrorCode::E0005 => "invalid escape sequence in string literal",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected an expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "empty call; a call needs an operator",
            ErrorCode::E1005 => "unexpected input after the expression",
            ErrorCode::E6001 => "division by zero",
            ErrorCode::E6002 => "modulo by zero",
            ErrorCode::E6003 => "integer overflow",
            ErrorCode::E6004 => "argument outside the function's mathematical domain",
            ErrorCode::E6010 => "argument has the wrong type for the operator",
            ErrorCode::E6011 => "text and lists cannot be mixed in one call",
            ErrorCode::E6012 => "call head is not an operator",
            ErrorCode::E6013 => "values cannot be ordered against each other",
            ErrorCode::E6020 => "unknown operator",
            ErrorCode::E6021 => "symbol has no value",
            ErrorCode::E6025 => "index out of bounds",
            ErrorCode::E6026 => "slice bounds out of range",
            ErrorCode::E6027 => "sequence is empty",
            ErrorCode::E6028 => "range bounds are reversed",
            ErrorCode::E6029 => "range has too many elements",
            ErrorCode::E6030 => "wrong number of arguments",
            ErrorCode::E6050 => "assertion failed",
            ErrorCode::E9001 => "source file could not be read",
        }
    }

    /// Parse a code such as `E6001` (case-insensitive).
    pub fn parse(code: &str) -> Option<ErrorCode> {
        let upper = code.to_ascii_uppercase();
        ErrorCode::ALL.iter().copied().find(|c| c.as_str() == upper)
    }

    /// Check if this is a lexer error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Check if this is a parser error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a runtime error (E6xxx range).
    pub fn is_eval_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
