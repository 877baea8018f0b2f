//! Sprout Core - styled console output and backend scaffolding.
//!
//! This crate provides the domain and application layers for Sprout,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           sprout-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      (Emitter, ScaffoldService)         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (LineSink, Filesystem)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     sprout-adapters (Infrastructure)    │
//! │  (StdoutSink, LocalFilesystem, etc.)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Palette, aliases, resolver, project)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::io;
//! use sprout_core::prelude::*;
//!
//! struct Stdout;
//!
//! impl LineSink for Stdout {
//!     fn write_line(&self, line: &str) -> io::Result<()> {
//!         println!("{line}");
//!         Ok(())
//!     }
//! }
//!
//! let emitter = Emitter::new(Stdout);
//! emitter.emit_str("success", "Build completed!");
//! emitter.emit_str("blue.dim", "Server is running on port 3000...");
//! assert_eq!(resolve("red.intense"), resolve("error"));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Emitter, FallbackPolicy, ScaffoldService,
        ports::{Filesystem, LineSink},
    };
    pub use crate::domain::{
        ColorName, EscapeTemplate, Intensity, Palette, ProjectBlueprint, ProjectName,
        Resolution, ScaffoldOutcome, SemanticLevel, resolve, resolve_detailed,
    };
    pub use crate::error::{SproutError, SproutResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
