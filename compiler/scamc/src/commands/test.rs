//! The `test` command: replay transcript files.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use scam_eval::Interpreter;
use tracing::debug;

use super::{read_source, Status};
use crate::transcript::{self, Case, Expected};
use crate::{eval_source, RunConfig};

/// Outcome of one transcript case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    Failed(String),
}

impl CaseOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }
}

/// Results for one transcript file.
#[derive(Clone, Debug)]
pub struct FileReport {
    pub path: PathBuf,
    /// `(case, outcome)` in file order.
    pub cases: Vec<(Case, CaseOutcome)>,
    /// Set when the file could not be read or is not a valid transcript.
    pub error: Option<String>,
    pub duration: Duration,
}

impl FileReport {
    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|(_, o)| o.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    pub fn has_failures(&self) -> bool {
        self.error.is_some() || self.failed() > 0
    }
}

/// Results for a whole `scam test` invocation.
#[derive(Clone, Debug, Default)]
pub struct TestSummary {
    pub files: Vec<FileReport>,
}

impl TestSummary {
    pub fn passed(&self) -> usize {
        self.files.iter().map(FileReport::passed).sum()
    }

    pub fn failed(&self) -> usize {
        self.files.iter().map(FileReport::failed).sum()
    }

    pub fn broken_files(&self) -> usize {
        self.files.iter().filter(|f| f.error.is_some()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.files.iter().any(FileReport::has_failures)
    }
}

/// Decide one case.
///
/// A value answer passes when query and answer both evaluate and render
/// the same, so `6.0` and `6` are different answers.
pub fn check_case(interpreter: &Interpreter, case: &Case) -> CaseOutcome {
    let got = eval_source(interpreter, &case.query);
    match (&case.expected, got) {
        (Expected::Error, Err(_)) => CaseOutcome::Passed,
        (Expected::Error, Ok(value)) => {
            CaseOutcome::Failed(format!("expected an error, got {value}"))
        }
        (Expected::Value(_), Err(problem)) => {
            CaseOutcome::Failed(format!("query failed: {problem}"))
        }
        (Expected::Value(answer), Ok(value)) => match eval_source(interpreter, answer) {
            Ok(want) if want.to_string() == value.to_string() => CaseOutcome::Passed,
            Ok(want) => CaseOutcome::Failed(format!("expected {want}, got {value}")),
            Err(problem) => {
                CaseOutcome::Failed(format!("answer '{answer}' is invalid: {problem}"))
            }
        },
    }
}

fn run_one(interpreter: &Interpreter, path: &Path) -> FileReport {
    let start = Instant::now();
    let parsed = read_source(path)
        .map_err(|problem| problem.to_string())
        .and_then(|text| transcript::parse(&text).map_err(|e| e.to_string()));

    let (cases, error) = match parsed {
        Ok(cases) => {
            let cases = cases
                .into_iter()
                .map(|case| {
                    let outcome = check_case(interpreter, &case);
                    (case, outcome)
                })
                .collect();
            (cases, None)
        }
        Err(error) => (Vec::new(), Some(error)),
    };

    debug!(file = %path.display(), cases = cases.len(), "transcript done");
    FileReport {
        path: path.to_path_buf(),
        cases,
        error,
        duration: start.elapsed(),
    }
}

/// Run every transcript in `paths`, files in parallel unless configured
/// otherwise, and print a report.
pub fn run_tests(paths: &[PathBuf], config: &RunConfig, out: &mut dyn Write) -> TestSummary {
    let interpreter = Interpreter::new();
    let files = if config.parallel {
        paths.par_iter().map(|p| run_one(&interpreter, p)).collect()
    } else {
        paths.iter().map(|p| run_one(&interpreter, p)).collect()
    };
    let summary = TestSummary { files };
    print_summary(&summary, config, out);
    summary
}

fn print_summary(summary: &TestSummary, config: &RunConfig, out: &mut dyn Write) {
    for file in &summary.files {
        let name = file.path.display();
        if let Some(error) = &file.error {
            let _ = writeln!(out, "BROKEN {name}: {error}");
            continue;
        }
        for (case, outcome) in &file.cases {
            match outcome {
                CaseOutcome::Passed if config.verbose => {
                    let _ = writeln!(out, "ok     {name}:{} {}", case.line, case.query);
                }
                CaseOutcome::Passed => {}
                CaseOutcome::Failed(reason) => {
                    let _ = writeln!(out, "FAIL   {name}:{} {}", case.line, case.query);
                    let _ = writeln!(out, "       {reason}");
                }
            }
        }
        if config.verbose {
            let _ = writeln!(
                out,
                "{name}: {} passed, {} failed ({:.2?})",
                file.passed(),
                file.failed(),
                file.duration
            );
        }
    }

    let _ = write!(
        out,
        "test result: {}. {} passed; {} failed",
        if summary.has_failures() { "FAILED" } else { "ok" },
        summary.passed(),
        summary.failed()
    );
    match summary.broken_files() {
        0 => {
            let _ = writeln!(out);
        }
        n => {
            let _ = writeln!(out, "; {n} file(s) could not be run");
        }
    }
}

impl From<&TestSummary> for Status {
    fn from(summary: &TestSummary) -> Self {
        Status::failed_if(summary.has_failures())
    }
}
