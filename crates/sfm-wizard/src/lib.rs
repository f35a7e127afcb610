//! SFM Wizard
//!
//! The simplest front-end: one implicit scheduled trigger, a list of
//! sources and a list of targets. It compiles to the upper-case dialect of
//! the script language, which differs from the structured and graph
//! output in keyword casing, token order and wildcard handling.

pub mod compile;
pub mod entry;

pub use compile::{compile_wizard, entry_line};
pub use entry::{WizardEntry, WizardLayout, DEFAULT_TICK_INTERVAL};
