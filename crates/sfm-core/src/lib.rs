//! Core types for SFM script generation
//!
//! This crate provides the small set of types shared by every front-end
//! that emits SFM script text: resource kinds and the resource-identifier
//! resolver, endpoint sides, and validation of numeric text fields.

mod field;
mod resource;
mod side;

pub use field::{parse_count, positive_interval, FieldError, FieldResult};
pub use resource::{resolve, resolve_filter, ResourceKind};
pub use side::NodeSide;

/// Resource token matching every item
pub const WILDCARD: &str = "*";

/// Number of spaces per indent level in the structured dialect
pub const STRUCTURED_INDENT: &str = "    ";

/// Indent used for statement lines by the graph and wizard dialects
pub const FLAT_INDENT: &str = "  ";
