//! Emitter - the single styled-output entry point.
//!
//! `emit(token, text)` resolves the token, applies the template, and writes
//! exactly one line to the sink. It never returns an error:
//!
//! - empty or missing text → [`MISSING_TEXT_MESSAGE`] in red/intense, token ignored
//! - unknown token → white/normal, silently (or with a log event under
//!   [`FallbackPolicy::Warn`])
//! - sink failure → dropped, logged at debug level

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    application::ports::LineSink,
    domain::{ColorName, Intensity, Palette, SemanticLevel, resolve_detailed},
};

/// Written instead of the caller's text when that text is missing.
pub const MISSING_TEXT_MESSAGE: &str = "Text or style is missing.";

/// What to do, besides falling back, when a token does not resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Fall back with no trace at all.
    #[default]
    Silent,
    /// Fall back and emit a `warn` event on the diagnostic log.
    Warn,
}

/// Styled line writer over a [`LineSink`].
///
/// Holds no mutable state; share it freely (`&Emitter` or `Arc<Emitter>`).
#[derive(Debug, Clone)]
pub struct Emitter<S> {
    sink: S,
    policy: FallbackPolicy,
}

impl<S: LineSink> Emitter<S> {
    /// Emitter with the silent fallback policy.
    pub const fn new(sink: S) -> Self {
        Self::with_policy(sink, FallbackPolicy::Silent)
    }

    pub const fn with_policy(sink: S, policy: FallbackPolicy) -> Self {
        Self { sink, policy }
    }

    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Write `text` styled by `token` as one line.
    pub fn emit(&self, token: &str, text: Option<&str>) {
        let line = match text.filter(|t| !t.is_empty()) {
            Some(text) => {
                let resolution = resolve_detailed(token);
                if resolution.is_fallback() && self.policy == FallbackPolicy::Warn {
                    warn!(token, "Unknown style token, using white.normal");
                }
                resolution.template().apply(text)
            }
            None => missing_text_line(),
        };

        if let Err(e) = self.sink.write_line(&line) {
            debug!(error = %e, "Styled write failed");
        }
    }

    /// [`Self::emit`] for a plain `&str`.
    pub fn emit_str(&self, token: &str, text: &str) {
        self.emit(token, Some(text));
    }

    /// The exact line [`Self::emit`] would write, without writing it.
    pub fn render(&self, token: &str, text: Option<&str>) -> String {
        match text.filter(|t| !t.is_empty()) {
            Some(text) => resolve_detailed(token).template().apply(text),
            None => missing_text_line(),
        }
    }

    pub fn level(&self, level: SemanticLevel, text: &str) {
        self.emit_str(level.as_str(), text);
    }

    pub fn info(&self, text: &str) {
        self.level(SemanticLevel::Info, text);
    }

    pub fn success(&self, text: &str) {
        self.level(SemanticLevel::Success, text);
    }

    pub fn error(&self, text: &str) {
        self.level(SemanticLevel::Error, text);
    }

    pub fn response(&self, text: &str) {
        self.level(SemanticLevel::Response, text);
    }

    pub fn warn(&self, text: &str) {
        self.level(SemanticLevel::Warn, text);
    }

    pub fn debug(&self, text: &str) {
        self.level(SemanticLevel::Debug, text);
    }
}

fn missing_text_line() -> String {
    Palette::get(ColorName::Red, Intensity::Intense).apply(MISSING_TEXT_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockLineSink;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Records every line; used where mock expectations get noisy.
    #[derive(Default)]
    struct Recorder(Mutex<Vec<String>>);

    impl LineSink for Recorder {
        fn write_line(&self, line: &str) -> io::Result<()> {
            self.0.lock().unwrap().push(line.to_string());
            Ok(())
        }
    }

    impl Recorder {
        fn lines(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    fn expect_one(line: &'static str) -> MockLineSink {
        let mut sink = MockLineSink::new();
        sink.expect_write_line()
            .withf(move |l| l == line)
            .times(1)
            .returning(|_| Ok(()));
        sink
    }

    #[test]
    fn warn_writes_yellow_normal() {
        Emitter::new(expect_one("\x1b[33;22mDisk low\x1b[0m")).emit_str("warn", "Disk low");
    }

    #[test]
    fn composite_and_alias_write_identical_lines() {
        let emitter = Emitter::new(Recorder::default());
        emitter.emit_str("red.intense", "Fatal");
        emitter.emit_str("error", "Fatal");

        let lines = emitter.sink().lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "\x1b[31;1mFatal\x1b[0m");
        assert_eq!(lines[0], lines[1]);
    }

    #[test]
    fn empty_text_writes_diagnostic_regardless_of_token() {
        let expected = "\x1b[31;1mText or style is missing.\x1b[0m";
        for token in ["success", "blue.dim", "nonsense", ""] {
            Emitter::new(expect_one(expected)).emit_str(token, "");
            Emitter::new(expect_one(expected)).emit(token, None);
        }
    }

    #[test]
    fn unknown_token_uses_default_template() {
        let emitter = Emitter::new(Recorder::default());
        emitter.emit_str("greenish", "hi");
        emitter.emit_str("not.a.color", "hi");
        emitter.emit_str("white.normal", "hi");

        let lines = emitter.sink().lines();
        assert!(lines.iter().all(|l| l == "\x1b[37;22mhi\x1b[0m"));
    }

    #[test]
    fn warn_policy_does_not_change_output() {
        let silent = Emitter::new(Recorder::default());
        let loud = Emitter::with_policy(Recorder::default(), FallbackPolicy::Warn);
        for e in [&silent, &loud] {
            e.emit_str("typo.dim", "x");
            e.emit_str("debug", "y");
        }
        assert_eq!(silent.sink().lines(), loud.sink().lines());
    }

    #[test]
    fn sink_failure_is_swallowed() {
        let mut sink = MockLineSink::new();
        sink.expect_write_line()
            .times(1)
            .returning(|_| Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed")));
        Emitter::new(sink).info("still fine");
    }

    #[test]
    fn repeated_calls_are_byte_identical() {
        let emitter = Emitter::new(Recorder::default());
        for _ in 0..3 {
            emitter.emit_str("magenta.dim", "Selected option");
        }
        let lines = emitter.sink().lines();
        assert_eq!(lines.len(), 3);
        assert!(lines.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn render_matches_emit() {
        let emitter = Emitter::new(Recorder::default());
        emitter.emit_str("cyan.intense", "Loading...");
        emitter.emit_str("cyan.intense", "");
        assert_eq!(
            emitter.sink().lines(),
            vec![
                emitter.render("cyan.intense", Some("Loading...")),
                emitter.render("cyan.intense", None),
            ]
        );
    }

    #[test]
    fn level_helpers_use_alias_templates() {
        let emitter = Emitter::new(Recorder::default());
        emitter.info("a");
        emitter.success("a");
        emitter.error("a");
        emitter.response("a");
        emitter.warn("a");
        emitter.debug("a");

        let expected: Vec<_> = SemanticLevel::ALL
            .iter()
            .map(|l| l.template().apply("a"))
            .collect();
        assert_eq!(emitter.sink().lines(), expected);
    }

    #[test]
    fn shared_across_threads() {
        let emitter = Arc::new(Emitter::new(Recorder::default()));
        std::thread::scope(|s| {
            for _ in 0..4 {
                let emitter = Arc::clone(&emitter);
                s.spawn(move || emitter.success("done"));
            }
        });
        let lines = emitter.sink().lines();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l == "\x1b[32;1mdone\x1b[0m"));
    }
}
