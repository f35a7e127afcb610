//! Statement types
//!
//! Statements are the instructions inside a trigger body or a conditional
//! branch. `If` statements own their branches, so a trigger's statements form
//! a strict tree.

use serde::{Deserialize, Serialize};
use sfm_core::{ResourceKind, WILDCARD};
use std::fmt;

/// Face of an endpoint addressed by an input or output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Top,
    Bottom,
    North,
    South,
    East,
    West,
    Left,
    Right,
    Front,
    Back,
}

impl Side {
    pub const ALL: [Side; 10] = [
        Side::Top,
        Side::Bottom,
        Side::North,
        Side::South,
        Side::East,
        Side::West,
        Side::Left,
        Side::Right,
        Side::Front,
        Side::Back,
    ];

    /// Lower-case side literal as written in the script
    pub fn keyword(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::North => "north",
            Side::South => "south",
            Side::East => "east",
            Side::West => "west",
            Side::Left => "left",
            Side::Right => "right",
            Side::Front => "front",
            Side::Back => "back",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Amount to leave behind instead of transferring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Retention {
    pub count: u32,

    /// Apply the retention per matching resource rather than overall
    #[serde(default)]
    pub each: bool,
}

fn default_resource_id() -> String {
    WILDCARD.to_string()
}

/// Fields shared by input and output statements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retain: Option<Retention>,

    #[serde(default)]
    pub kind: ResourceKind,

    /// Bare resource id; `"*"` matches everything
    #[serde(default = "default_resource_id")]
    pub resource_id: String,

    /// Raw exception list, emitted after `except`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub except: Option<String>,

    /// Named endpoint the resources move from or to
    pub label: String,

    /// Address every labelled block separately
    #[serde(default)]
    pub each: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,

    /// Raw slot specifier, emitted after `slots`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<String>,
}

impl Transfer {
    /// Transfer of every item from or to `label`
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            quantity: None,
            retain: None,
            kind: ResourceKind::Item,
            resource_id: default_resource_id(),
            except: None,
            label: label.into(),
            each: false,
            side: None,
            slots: None,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_retain(mut self, count: u32, each: bool) -> Self {
        self.retain = Some(Retention { count, each });
        self
    }

    pub fn with_resource(mut self, kind: ResourceKind, id: impl Into<String>) -> Self {
        self.kind = kind;
        self.resource_id = id.into();
        self
    }

    pub fn with_item(self, id: impl Into<String>) -> Self {
        self.with_resource(ResourceKind::Item, id)
    }

    pub fn with_except(mut self, except: impl Into<String>) -> Self {
        self.except = Some(except.into());
        self
    }

    pub fn with_each(mut self) -> Self {
        self.each = true;
        self
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    pub fn with_slots(mut self, slots: impl Into<String>) -> Self {
        self.slots = Some(slots.into());
        self
    }
}

/// Conditional block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfStatement {
    /// Free-form condition expression, e.g. `chest has > 0 iron_ingot`
    pub condition: String,

    #[serde(default)]
    pub then_branch: Vec<Statement>,

    /// An empty else branch is the same as no else branch
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub else_branch: Vec<Statement>,
}

impl IfStatement {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            then_branch: Vec::new(),
            else_branch: Vec::new(),
        }
    }

    pub fn then(mut self, statement: Statement) -> Self {
        self.then_branch.push(statement);
        self
    }

    pub fn otherwise(mut self, statement: Statement) -> Self {
        self.else_branch.push(statement);
        self
    }
}

/// Drop remembered labels; `None` forgets everything
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ForgetStatement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,
}

/// Statement definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "statement", rename_all = "snake_case")]
pub enum Statement {
    /// Pull resources from a labelled endpoint
    Input(Transfer),

    /// Push buffered resources into a labelled endpoint
    Output(Transfer),

    /// Run a branch depending on a condition
    If(IfStatement),

    /// Forget labels for the rest of the trigger
    Forget(ForgetStatement),
}

impl Statement {
    pub fn input(label: impl Into<String>) -> Self {
        Statement::Input(Transfer::new(label))
    }

    pub fn output(label: impl Into<String>) -> Self {
        Statement::Output(Transfer::new(label))
    }

    pub fn forget_all() -> Self {
        Statement::Forget(ForgetStatement::default())
    }

    pub fn forget(labels: impl Into<String>) -> Self {
        Statement::Forget(ForgetStatement {
            labels: Some(labels.into()),
        })
    }

    /// Statement keyword as used in the script
    pub fn keyword(&self) -> &'static str {
        match self {
            Statement::Input(_) => "input",
            Statement::Output(_) => "output",
            Statement::If(_) => "if",
            Statement::Forget(_) => "forget",
        }
    }

    /// One-line description for statement lists
    pub fn summary(&self) -> String {
        match self {
            Statement::Input(t) => transfer_summary("INPUT", "<-", t),
            Statement::Output(t) => transfer_summary("OUTPUT", "->", t),
            Statement::If(s) => {
                let count = s.then_branch.len();
                let noun = if count == 1 { "statement" } else { "statements" };
                format!("IF {} ({} {})", s.condition, count, noun)
            }
            Statement::Forget(f) => match non_blank(&f.labels) {
                Some(labels) => format!("FORGET {labels}"),
                None => "FORGET all".to_string(),
            },
        }
    }
}

fn transfer_summary(keyword: &str, arrow: &str, t: &Transfer) -> String {
    let resource = sfm_core::resolve(t.kind, &t.resource_id);
    let resource = if resource == WILDCARD {
        "everything".to_string()
    } else {
        resource
    };
    let quantity = t.quantity.map(|q| format!("{q}x ")).unwrap_or_default();
    let each = if t.each { " (each)" } else { "" };
    let side = t.side.map(|s| format!(" [{s}]")).unwrap_or_default();

    format!(
        "{keyword} {quantity}{resource} {arrow} {}{each}{side}",
        t.label
    )
}

/// Treat blank optional text the same as an unset field
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
