//! Core domain layer for Sprout.
//!
//! This module contains pure logic with no I/O. The palette and alias tables
//! are `const` data; resolution and project validation are plain functions
//! over them. Writing to a terminal or a disk goes through the ports defined
//! in the application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, stdout, or external calls
//! - **Immutable**: Nothing here is mutated after construction

pub mod aliases;
pub mod error;
pub mod palette;
pub mod project;
pub mod resolver;
pub mod style;

pub use error::{DomainError, ErrorCategory};
pub use palette::{EscapeTemplate, Palette, RESET};
pub use project::{ProjectBlueprint, ProjectName, ScaffoldOutcome};
pub use resolver::{Resolution, resolve, resolve_detailed};
pub use style::{ColorName, Intensity, SemanticLevel};
