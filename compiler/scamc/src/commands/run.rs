//! The `run` command: evaluate every top-level expression of a file.

use std::io::Write;
use std::path::Path;

use rayon::prelude::*;
use scam_eval::{EvalResult, Interpreter};
use scam_ir::Expr;
use tracing::debug;

use super::{read_source, report, Status};
use crate::{parse_source, Problem, RunConfig};

/// Evaluate each expression of `path` and print the results in source order.
///
/// A failing expression does not stop the others. The file fails if any
/// expression failed or if it does not lex or parse.
pub fn run_file(
    path: &Path,
    config: &RunConfig,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Status {
    let name = path.display().to_string();
    let source = match read_source(path) {
        Ok(source) => source,
        Err(problem) => {
            report(config, err, &name, "", &problem);
            return Status::Failure;
        }
    };

    let exprs = match parse_source(&source) {
        Ok(exprs) => exprs,
        Err(problem) => {
            report(config, err, &name, &source, &problem);
            return Status::Failure;
        }
    };

    debug!(file = %name, count = exprs.len(), parallel = config.parallel, "running");
    let results = evaluate_all(&exprs, config.parallel);

    let mut failed = false;
    for result in results {
        match result {
            Ok(value) => {
                let _ = writeln!(out, "{value}");
            }
            Err(error) => {
                failed = true;
                report(config, err, &name, &source, &Problem::Eval(error));
            }
        }
    }
    Status::failed_if(failed)
}

/// Results come back in the order of `exprs` either way.
fn evaluate_all(exprs: &[Expr], parallel: bool) -> Vec<EvalResult> {
    let interpreter = Interpreter::new();
    if parallel {
        exprs.par_iter().map(|expr| interpreter.eval(expr)).collect()
    } else {
        exprs.iter().map(|expr| interpreter.eval(expr)).collect()
    }
}
