use super::*;
use crate::ErrorCode;
use fwjs_ir::Span;
use pretty_assertions::assert_eq;

fn render(emitter: TerminalEmitter<Vec<u8>>, diag: &Diagnostic) -> String {
    let mut emitter = emitter;
    emitter.emit(diag);
    String::from_utf8(emitter.into_inner()).unwrap_or_default()
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_emit_without_source_uses_byte_spans() {
    let diag = Diagnostic::error(ErrorCode::E6003)
        .with_message("value is not callable")
        .with_label(Span::new(4, 7), "called here");
    let out = render(
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false),
        &diag,
    );
    assert_eq!(
        out,
        "error[E6003]: value is not callable\n  --> 4..7: called here\n\n"
    );
}

#[test]
fn test_emit_with_source_snippet() {
    let source = "var x = 1;\nprint(x / 0);\n";
    let diag = Diagnostic::error(ErrorCode::E6010)
        .with_message("division by zero")
        .with_label(Span::new(17, 22), "divisor is zero");
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("div.fwjs", source);
    let out = render(emitter, &diag);
    assert_eq!(
        out,
        "error[E6010]: division by zero\n  --> div.fwjs:2:7\n    |\n  2 | print(x / 0);\n    |       ^^^^^ divisor is zero\n\n"
    );
}

#[test]
fn test_emit_notes() {
    let diag = Diagnostic::error(ErrorCode::E6030)
        .with_message("too few arguments")
        .with_note("expected 2 arguments, found 1");
    let out = render(
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false),
        &diag,
    );
    assert!(out.contains("  = note: expected 2 arguments, found 1\n"));
}

#[test]
fn test_summary() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(2, 0);
    emitter.emit_summary(1, 1);
    emitter.emit_summary(0, 0);
    let out = String::from_utf8(emitter.into_inner()).unwrap_or_default();
    assert_eq!(
        out,
        "error: aborting due to 2 previous errors\nerror: aborting due to previous error; 1 warning emitted\n"
    );
}

#[test]
fn test_colors_wrap_severity() {
    let diag = Diagnostic::error(ErrorCode::E1001).with_message("oops");
    let out = render(
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false),
        &diag,
    );
    assert!(out.starts_with("\x1b[1;31merror\x1b[0m"));
}

#[test]
fn test_stderr_constructor_infers_writer() {
    let emitter = TerminalEmitter::stderr(ColorMode::Never, true);
    assert!(!emitter.colors);
    let emitter = TerminalEmitter::stderr(ColorMode::Always, false).with_source("a.fwjs", "1;");
    assert!(emitter.colors);
    assert!(emitter.source.is_some());
}
