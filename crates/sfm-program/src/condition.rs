//! Condition builder
//!
//! Builds the free-form condition text of an `if` statement from its parts:
//! `[<set op> ]<label> has <comparison> <quantity> <resource>`.

use serde::{Deserialize, Serialize};
use sfm_core::{parse_count, FieldError, FieldResult};
use std::fmt;

/// How the label's inventories are aggregated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SetOperator {
    /// Total over every inventory (renders nothing)
    #[default]
    Overall,
    Some,
    Every,
    Each,
    One,
    Lone,
}

impl SetOperator {
    /// Keyword, or `None` for [`SetOperator::Overall`]
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            SetOperator::Overall => None,
            SetOperator::Some => Some("some"),
            SetOperator::Every => Some("every"),
            SetOperator::Each => Some("each"),
            SetOperator::One => Some("one"),
            SetOperator::Lone => Some("lone"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    #[default]
    Gt,
    Lt,
    Eq,
    Ge,
    Le,
}

impl Comparison {
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Gt => ">",
            Comparison::Lt => "<",
            Comparison::Eq => "=",
            Comparison::Ge => ">=",
            Comparison::Le => "<=",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Parts of an inventory condition, as entered by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionBuilder {
    #[serde(default)]
    pub set_op: SetOperator,
    pub label: String,
    #[serde(default)]
    pub comparison: Comparison,
    /// Raw quantity text, validated on [`ConditionBuilder::build`]
    pub quantity: String,
    pub resource_id: String,
}

impl Default for ConditionBuilder {
    fn default() -> Self {
        Self {
            set_op: SetOperator::Overall,
            label: "a".to_string(),
            comparison: Comparison::Gt,
            quantity: "0".to_string(),
            resource_id: "iron_ingot".to_string(),
        }
    }
}

impl ConditionBuilder {
    /// Render the condition text
    pub fn build(&self) -> FieldResult<String> {
        let quantity = parse_count("condition quantity", &self.quantity)?.ok_or_else(|| {
            FieldError::InvalidNumericField {
                field: "condition quantity".to_string(),
                value: self.quantity.clone(),
            }
        })?;

        let set_op = self
            .set_op
            .keyword()
            .map(|k| format!("{k} "))
            .unwrap_or_default();

        Ok(format!(
            "{set_op}{} has {} {quantity} {}",
            self.label, self.comparison, self.resource_id
        ))
    }
}
