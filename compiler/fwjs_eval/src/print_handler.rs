//! Where `print` output goes.
//!
//! Stdout for normal runs, a buffer when the caller wants the lines back
//! (tests and `evaluate_source`). Enum dispatch keeps the per-print cost to
//! a match.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes each line to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        // A closed pipe must not abort evaluation.
        let _ = writeln!(io::stdout().lock(), "{msg}");
    }
}

/// Captures output in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
        }
    }

    /// Captured output; empty for stdout.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout(_) => String::new(),
            Self::Buffer(h) => h.get_output(),
        }
    }

    /// Captured output split into printed lines.
    pub fn lines(&self) -> Vec<String> {
        self.get_output().lines().map(str::to_owned).collect()
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_handler_captures_lines() {
        let handler = buffer_handler();
        handler.println("7");
        handler.println("true");
        assert_eq!(handler.get_output(), "7\ntrue\n");
        assert_eq!(handler.lines(), vec!["7".to_string(), "true".to_string()]);
    }

    #[test]
    fn buffer_handler_clear() {
        let handler = buffer_handler();
        handler.println("x");
        handler.clear();
        assert_eq!(handler.get_output(), "");
        assert!(handler.lines().is_empty());
    }

    #[test]
    fn stdout_handler_captures_nothing() {
        let handler = stdout_handler();
        assert_eq!(handler.get_output(), "");
    }
}
