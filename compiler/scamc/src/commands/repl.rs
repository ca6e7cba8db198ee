//! The `repl` command.

use std::io::{BufRead, Write};

use scam_eval::Interpreter;

use super::{report, Status};
use crate::{eval_source, RunConfig};

const PROMPT: &str = "scam> ";

/// Read-eval-print until end of input or `quit`.
///
/// Each line is one expression. Errors are reported and the loop goes on.
pub fn repl(
    input: &mut dyn BufRead,
    config: &RunConfig,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Status {
    let interpreter = Interpreter::new();
    let mut line = String::new();

    loop {
        let _ = write!(out, "{PROMPT}");
        let _ = out.flush();

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(error) => {
                let _ = writeln!(err, "error: cannot read input: {error}");
                return Status::Failure;
            }
        }

        let source = line.trim();
        if source.is_empty() {
            continue;
        }
        if source == "quit" {
            break;
        }

        match eval_source(&interpreter, source) {
            Ok(value) => {
                let _ = writeln!(out, "{value}");
            }
            Err(problem) => report(config, err, "<repl>", source, &problem),
        }
    }

    let _ = writeln!(out);
    Status::Success
}
