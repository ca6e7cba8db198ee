//! The `eval` command: evaluate one expression given on the command line.

use std::io::Write;

use scam_eval::Interpreter;

use super::{report, Status};
use crate::{eval_source, RunConfig};

/// Print the rendering of `source`, or its diagnostic.
pub fn eval_expr(
    source: &str,
    config: &RunConfig,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Status {
    match eval_source(&Interpreter::new(), source) {
        Ok(value) => {
            let _ = writeln!(out, "{value}");
            Status::Success
        }
        Err(problem) => {
            report(config, err, "<expr>", source, &problem);
            Status::Failure
        }
    }
}
