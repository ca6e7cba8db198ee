//! Transcript files: recorded sessions replayed as tests.
//!
//! ```text
//! ; comment lines and blank lines are ignored
//! >>> (+ 1 2 3.0)
//! 6.0
//! >>> (head [])
//! ERROR
//! ```
//!
//! Each `>>>` query is followed by its answer line. The answer is either
//! `ERROR`, meaning the query must fail, or an expression whose rendering
//! must equal the query's.

use thiserror::Error;

const QUERY_PREFIX: &str = ">>>";
const ERROR_ANSWER: &str = "ERROR";

/// What a query is expected to produce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expected {
    /// Source of an expression with the same rendering.
    Value(String),
    /// Any error.
    Error,
}

/// One query/answer pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Case {
    /// 1-based line of the query.
    pub line: usize,
    pub query: String,
    pub expected: Expected,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TranscriptError {
    #[error("line {line}: query has no answer line")]
    MissingAnswer { line: usize },
    #[error("line {line}: answer '{text}' does not follow a query")]
    OrphanAnswer { line: usize, text: String },
}

fn is_skipped(line: &str) -> bool {
    line.is_empty() || line.starts_with(';')
}

/// Split a transcript into cases.
pub fn parse(text: &str) -> Result<Vec<Case>, TranscriptError> {
    let mut cases = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if is_skipped(trimmed) {
            continue;
        }

        if let Some(query) = trimmed.strip_prefix(QUERY_PREFIX) {
            if let Some((line, _)) = pending {
                return Err(TranscriptError::MissingAnswer { line });
            }
            pending = Some((line, query.trim().to_string()));
            continue;
        }

        let Some((query_line, query)) = pending.take() else {
            return Err(TranscriptError::OrphanAnswer {
                line,
                text: trimmed.to_string(),
            });
        };
        let expected = if trimmed == ERROR_ANSWER {
            Expected::Error
        } else {
            Expected::Value(trimmed.to_string())
        };
        cases.push(Case {
            line: query_line,
            query,
            expected,
        });
    }

    match pending {
        Some((line, _)) => Err(TranscriptError::MissingAnswer { line }),
        None => Ok(cases),
    }
}
