use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;

fn render(emitter: TerminalEmitter<Vec<u8>>, diag: &Diagnostic) -> String {
    let mut emitter = emitter;
    emitter.emit(diag);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

fn div_by_zero() -> Diagnostic {
    Diagnostic::error(ErrorCode::E6001)
        .with_message("division by zero")
        .with_label(Span::new(5, 6), "divisor is zero")
}

#[test]
fn test_bare_labels_without_source() {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    let diag = div_by_zero().with_note("both operands were integers");
    assert_eq!(
        render(emitter, &diag),
        "error[E6001]: division by zero\n  --> 5..6: divisor is zero\n  = note: both operands were integers\n\n"
    );
}

#[test]
fn test_snippet_with_source() {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("<eval>", "(/ 1 0)");
    assert_eq!(
        render(emitter, &div_by_zero()),
        "error[E6001]: division by zero\n --> <eval>:1:6\n  |\n1 | (/ 1 0)\n  |      ^ divisor is zero\n\n"
    );
}

#[test]
fn test_snippet_on_later_line() {
    let source = "(+ 1 2)\n(len 5)";
    let diag = Diagnostic::error(ErrorCode::E6010)
        .with_message("'len' expected a sequence, got int")
        .with_label(Span::new(8, 15), "in this call");
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("demo.scm", source);
    let text = render(emitter, &diag);
    assert!(text.contains(" --> demo.scm:2:1\n"));
    assert!(text.contains("2 | (len 5)\n"));
    assert!(text.contains("  | ^^^^^^^ in this call\n"));
}

#[test]
fn test_caret_clipped_to_line() {
    let source = "(+ 1\n 2)";
    let diag = Diagnostic::error(ErrorCode::E6030).with_label(Span::new(0, 9), "");
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("x", source);
    let text = render(emitter, &diag);
    assert!(text.contains("  | ^^^^\n"));
}

#[test]
fn test_colors_emit_ansi() {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    let text = render(emitter, &div_by_zero());
    assert!(text.contains("\x1b[1;31m"));
    assert!(text.contains("E6001"));
}

#[test]
fn test_color_mode() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::parse("sometimes"), None);
}

#[test]
fn test_emit_all_and_summary() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_all(&[
        Diagnostic::error(ErrorCode::E1001).with_message("error 1"),
        Diagnostic::error(ErrorCode::E6021).with_message("error 2"),
    ]);
    emitter.emit_summary(2, 1);
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(text.contains("error[E1001]: error 1"));
    assert!(text.contains("error[E6021]: error 2"));
    assert!(text.ends_with("error: aborting due to 2 previous errors; 1 warning emitted\n"));
}

#[test]
fn test_summary_single_error_and_silence() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(0, 0);
    emitter.emit_summary(1, 0);
    emitter.emit_summary(0, 3);
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(
        text,
        "error: aborting due to previous error\nwarning: 3 warnings emitted\n"
    );
}
