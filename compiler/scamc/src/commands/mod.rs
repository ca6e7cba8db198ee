//! Command handlers for the `scam` CLI.
//!
//! Every handler writes results to `out`, diagnostics to `err`, and returns
//! a [`Status`] instead of exiting, so `main` owns the process exit code.
//! Shared helpers live here in the module root.

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use scam_diagnostic::emitter::DiagnosticEmitter;

use crate::{Problem, RunConfig};

mod check;
mod eval;
mod explain;
mod repl;
mod run;
mod test;

pub use check::{check_eq, check_err};
pub use eval::eval_expr;
pub use explain::explain_error;
pub use repl::repl;
pub use run::run_file;
pub use test::{check_case, run_tests, CaseOutcome, FileReport, TestSummary};

/// How a command finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    /// Evaluation failed, or a check did not hold.
    Failure,
    /// The command line itself was wrong.
    Usage,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Failure => 1,
            Status::Usage => 2,
        }
    }

    fn failed_if(failed: bool) -> Status {
        if failed {
            Status::Failure
        } else {
            Status::Success
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

/// Render `problem` as a diagnostic against `source`, reported as `name`.
fn report(config: &RunConfig, err: &mut dyn Write, name: &str, source: &str, problem: &Problem) {
    let mut emitter = config.emitter(err).with_source(name, source);
    emitter.emit(&problem.to_diagnostic());
    emitter.flush();
}

fn read_source(path: &Path) -> Result<String, Problem> {
    std::fs::read_to_string(path).map_err(|source| Problem::io(path, source))
}
