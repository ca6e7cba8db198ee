//! The `explain` command.

use std::io::Write;

use scam_diagnostic::ErrorCode;

use super::Status;

/// Print the description of an error code such as `E6001`.
pub fn explain_error(code: &str, out: &mut dyn Write, err: &mut dyn Write) -> Status {
    let Some(code) = ErrorCode::parse(code) else {
        let _ = writeln!(err, "error: unknown error code '{code}'");
        return Status::Usage;
    };
    let _ = writeln!(out, "{code}: {}", code.description());
    Status::Success
}
