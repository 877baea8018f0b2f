//! Line sink adapters and the process-wide stdout emitter.

mod memory;
mod stdout;

pub use memory::MemorySink;
pub use stdout::StdoutSink;

use sprout_core::application::Emitter;

/// Process-wide emitter over stdout with the silent fallback policy.
pub static STDOUT: Emitter<StdoutSink> = Emitter::new(StdoutSink);

/// Write `text` styled by `token` to stdout as one line.
///
/// Never fails; see [`Emitter::emit`] for the degrade rules.
pub fn emit(token: &str, text: &str) {
    STDOUT.emit_str(token, text);
}
