//! Console output for command handlers.
//!
//! Every line a command prints goes through one [`Emitter`], so commands
//! only ever name a style token. Writes cannot fail from the caller's side.

use sprout_adapters::StdoutSink;
use sprout_core::application::{Emitter, ports::LineSink};

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Style for section headers.
pub const HEADER_STYLE: &str = "cyan.intense";
/// Style for optional follow-up hints.
pub const HINT_STYLE: &str = "debug";

/// Styled stdout writer plus the flags that shape what gets printed.
pub struct OutputManager<S = StdoutSink> {
    emitter: Emitter<S>,
    quiet: bool,
}

impl OutputManager<StdoutSink> {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self::with_sink(StdoutSink::new(), args, config)
    }
}

impl<S: LineSink> OutputManager<S> {
    pub fn with_sink(sink: S, args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            emitter: Emitter::with_policy(sink, config.output.unknown_style),
            quiet: args.quiet,
        }
    }

    /// The emitter, for services that print their own status lines.
    pub fn emitter(&self) -> &Emitter<S> {
        &self.emitter
    }

    /// One line in an arbitrary style token.
    pub fn emit(&self, token: &str, text: Option<&str>) {
        self.emitter.emit(token, text);
    }

    pub fn info(&self, msg: &str) {
        self.emitter.info(msg);
    }

    pub fn success(&self, msg: &str) {
        self.emitter.success(msg);
    }

    pub fn warning(&self, msg: &str) {
        self.emitter.warn(msg);
    }

    pub fn header(&self, text: &str) {
        self.emitter.emit_str(HEADER_STYLE, text);
    }

    /// Follow-up guidance; suppressed in quiet mode.
    pub fn hint(&self, msg: &str) {
        if !self.quiet {
            self.emitter.emit_str(HINT_STYLE, msg);
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
