//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "print a styled line" or "scaffold a backend".

pub mod emitter;
pub mod scaffold_service;

pub use emitter::{Emitter, FallbackPolicy, MISSING_TEXT_MESSAGE};
pub use scaffold_service::ScaffoldService;
