//! In-memory line sink for testing.

use std::{
    io,
    sync::{Arc, RwLock},
};

use sprout_core::application::ports::LineSink;

/// Captures lines instead of printing them. Clones share the buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<RwLock<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.read().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.write() {
            lines.clear();
        }
    }
}

impl LineSink for MemorySink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut lines = self
            .lines
            .write()
            .map_err(|_| io::Error::other("memory sink lock poisoned"))?;
        lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_lines() {
        let sink = MemorySink::new();
        let other = sink.clone();
        other.write_line("a").unwrap();
        sink.write_line("b").unwrap();
        assert_eq!(sink.lines(), vec!["a", "b"]);

        sink.clear();
        assert!(other.lines().is_empty());
    }
}
