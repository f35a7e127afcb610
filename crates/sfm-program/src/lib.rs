//! SFM Program Model
//!
//! This crate provides the structured program model and its serializer.
//! A program is a tree of triggers and statements that renders to SFM script
//! text deterministically.
//!
//! # Architecture
//!
//! ```text
//! PROGRAM → TRIGGER* → STATEMENT* (input | output | if | forget)
//!                                      └─ if → then STATEMENT*, else STATEMENT*
//! ```
//!
//! # Key Types
//!
//! - [`Program`] - Named list of triggers
//! - [`Trigger`] - Schedule or redstone pulse plus its statements
//! - [`Statement`] - A single instruction
//! - [`serialize`] - Render a program as script text

pub mod condition;
pub mod program;
pub mod render;
pub mod statement;
pub mod template;

pub use condition::{Comparison, ConditionBuilder, SetOperator};
pub use program::{Program, Schedule, TimeUnit, Trigger, TriggerKind};
pub use render::serialize;
pub use statement::{ForgetStatement, IfStatement, Retention, Side, Statement, Transfer};
pub use template::{Template, TemplateError};
