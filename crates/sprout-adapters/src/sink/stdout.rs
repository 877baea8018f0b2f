//! Stdout line sink using `console::Term`.

use std::io;

use console::Term;
use sprout_core::application::ports::LineSink;

/// Production sink: one unbuffered write per line to stdout.
///
/// Escape sequences are written as-is, whether or not stdout is a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub const fn new() -> Self {
        Self
    }
}

impl LineSink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        Term::stdout().write_line(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_line_succeeds_without_tty() {
        assert!(StdoutSink::new().write_line("\x1b[32mok\x1b[0m").is_ok());
    }
}
