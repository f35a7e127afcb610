//! Program and trigger definitions
//!
//! A Program is a named, ordered list of triggers. Each trigger owns the
//! statements it runs when it fires.

use serde::{Deserialize, Serialize};

use crate::render;
use crate::statement::Statement;

/// Name given to a fresh program
pub const DEFAULT_PROGRAM_NAME: &str = "My Program";

/// Default interval of a scheduled trigger
pub const DEFAULT_INTERVAL: u32 = 20;

/// Unit of a scheduled trigger's interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    #[default]
    Ticks,
    Seconds,
}

impl TimeUnit {
    pub fn keyword(&self) -> &'static str {
        match self {
            TimeUnit::Ticks => "ticks",
            TimeUnit::Seconds => "seconds",
        }
    }
}

fn default_interval() -> u32 {
    DEFAULT_INTERVAL
}

/// Timing of a scheduled trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Always at least 1; stored `0` is read as 1
    #[serde(default = "default_interval", deserialize_with = "sfm_core::positive_interval")]
    pub interval: u32,

    #[serde(default)]
    pub unit: TimeUnit,

    /// Align on the global clock instead of per-program
    #[serde(default)]
    pub global: bool,

    /// Delay added to the interval; zero is the same as none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            unit: TimeUnit::Ticks,
            global: false,
            offset: None,
        }
    }
}

/// What makes a trigger fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "trigger", rename_all = "snake_case")]
pub enum TriggerKind {
    /// Fires on a fixed interval
    Scheduled(Schedule),

    /// Fires on each redstone pulse
    RedstonePulse,
}

impl Default for TriggerKind {
    fn default() -> Self {
        TriggerKind::Scheduled(Schedule::default())
    }
}

/// Trigger definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Trigger {
    #[serde(flatten)]
    pub kind: TriggerKind,

    #[serde(default)]
    pub statements: Vec<Statement>,
}

impl Trigger {
    /// Scheduled trigger running every `interval` ticks
    pub fn every(interval: u32) -> Self {
        Self::scheduled(Schedule {
            interval,
            ..Schedule::default()
        })
    }

    pub fn scheduled(schedule: Schedule) -> Self {
        Self {
            kind: TriggerKind::Scheduled(schedule),
            statements: Vec::new(),
        }
    }

    pub fn redstone_pulse() -> Self {
        Self {
            kind: TriggerKind::RedstonePulse,
            statements: Vec::new(),
        }
    }

    /// Append a statement
    pub fn with(mut self, statement: Statement) -> Self {
        self.statements.push(statement);
        self
    }

    /// Script header line, e.g. `every 20 ticks do`
    pub fn header(&self) -> String {
        render::trigger_header(&self.kind)
    }
}

/// A complete program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub triggers: Vec<Trigger>,
}

impl Program {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            triggers: Vec::new(),
        }
    }

    /// Append a trigger
    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.triggers.push(trigger);
        self
    }

    /// Render the program as script text
    pub fn to_script(&self) -> String {
        render::serialize(self)
    }

    /// Total number of statements, including nested branches
    pub fn statement_count(&self) -> usize {
        fn count(statements: &[Statement]) -> usize {
            statements
                .iter()
                .map(|s| match s {
                    Statement::If(s) => 1 + count(&s.then_branch) + count(&s.else_branch),
                    _ => 1,
                })
                .sum()
        }

        self.triggers.iter().map(|t| count(&t.statements)).sum()
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::IfStatement;

    #[test]
    fn test_trigger_deserialize_scheduled() {
        let json = r#"{
            "trigger": "scheduled",
            "interval": 5,
            "unit": "seconds",
            "global": true,
            "statements": [{"statement": "forget"}]
        }"#;

        let trigger: Trigger = serde_json::from_str(json).unwrap();
        match trigger.kind {
            TriggerKind::Scheduled(s) => {
                assert_eq!(s.interval, 5);
                assert_eq!(s.unit, TimeUnit::Seconds);
                assert!(s.global);
                assert_eq!(s.offset, None);
            }
            other => panic!("Expected Scheduled trigger, got {other:?}"),
        }
        assert_eq!(trigger.statements.len(), 1);
    }

    #[test]
    fn test_trigger_deserialize_defaults() {
        let trigger: Trigger = serde_json::from_str(r#"{"trigger": "scheduled"}"#).unwrap();
        assert_eq!(trigger.kind, TriggerKind::Scheduled(Schedule::default()));
        assert!(trigger.statements.is_empty());
    }

    #[test]
    fn test_trigger_deserialize_redstone() {
        let trigger: Trigger =
            serde_json::from_str(r#"{"trigger": "redstone_pulse", "statements": []}"#).unwrap();
        assert_eq!(trigger.kind, TriggerKind::RedstonePulse);
    }

    #[test]
    fn test_program_json_roundtrip() {
        let program = Program::new("test").with_trigger(
            Trigger::every(20)
                .with(Statement::input("a"))
                .with(Statement::output("b")),
        );

        let json = serde_json::to_string(&program).unwrap();
        let back: Program = serde_json::from_str(&json).unwrap();
        assert_eq!(program, back);
    }

    #[test]
    fn test_statement_count_includes_branches() {
        let program = Program::new("p").with_trigger(
            Trigger::every(20).with(Statement::If(
                IfStatement::new("a has > 0 stone")
                    .then(Statement::input("a"))
                    .otherwise(Statement::forget_all()),
            )),
        );
        assert_eq!(program.statement_count(), 3);
    }

    #[test]
    fn test_default_program() {
        let program = Program::default();
        assert_eq!(program.name, DEFAULT_PROGRAM_NAME);
        assert!(program.triggers.is_empty());
    }
}
