//! Rendering diagnostics to the terminal.

use std::io::IsTerminal;

use fwjs_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use fwjs_diagnostic::Diagnostic;

/// `Never` when `NO_COLOR` is set, otherwise `Auto`.
pub fn color_mode() -> ColorMode {
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        ColorMode::Never
    } else {
        ColorMode::Auto
    }
}

/// Emit `diagnostics` for `path` to stderr, with source snippets and a
/// closing summary line.
pub fn report_diagnostics(path: &str, source: &str, diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }

    let is_tty = std::io::stderr().is_terminal();
    let mut emitter =
        TerminalEmitter::stderr(color_mode(), is_tty).with_source(path, source);
    emit_with_summary(&mut emitter, diagnostics);
}

/// Render to a string without colors.
pub fn render_diagnostics(path: &str, source: &str, diagnostics: &[Diagnostic]) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source(path, source);
    emit_with_summary(&mut emitter, diagnostics);
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

fn emit_with_summary(emitter: &mut impl DiagnosticEmitter, diagnostics: &[Diagnostic]) {
    emitter.emit_all(diagnostics);
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    emitter.emit_summary(errors, diagnostics.len() - errors);
    emitter.flush();
}
