//! `check-eq` and `check-err`: one-shot assertions for shell scripts.

use std::io::Write;

use scam_eval::Interpreter;

use super::test::{check_case, CaseOutcome};
use super::Status;
use crate::transcript::{Case, Expected};

fn check(query: &str, expected: Expected, err: &mut dyn Write) -> Status {
    let case = Case {
        line: 1,
        query: query.to_string(),
        expected,
    };
    match check_case(&Interpreter::new(), &case) {
        CaseOutcome::Passed => Status::Success,
        CaseOutcome::Failed(reason) => {
            let _ = writeln!(err, "{query}: {reason}");
            Status::Failure
        }
    }
}

/// Succeed iff `code` and `expected` both evaluate to the same rendering.
///
/// Stricter than `=`: `2` and `2.0` are equal values but render differently.
pub fn check_eq(code: &str, expected: &str, err: &mut dyn Write) -> Status {
    check(code, Expected::Value(expected.to_string()), err)
}

/// Succeed iff `code` fails to evaluate.
pub fn check_err(code: &str, err: &mut dyn Write) -> Status {
    check(code, Expected::Error, err)
}
