//! Application layer for Sprout.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (Emitter, ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but holds no tables or
//! validation rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{Emitter, FallbackPolicy, MISSING_TEXT_MESSAGE, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, LineSink};

pub use error::ApplicationError;
