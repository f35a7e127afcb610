//! Built-in starter programs

use serde::{Deserialize, Serialize};
use sfm_core::ResourceKind;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::program::{Program, Trigger};
use crate::statement::{IfStatement, Side, Statement, Transfer};

/// Template errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Unknown template: {0} (expected one of simple_move, smelting, sorting, fluid)")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    /// Move everything from `a` to `b`
    SimpleMove,
    /// Feed ore into a furnace and collect the result
    Smelting,
    /// Route ingots into per-metal storage
    Sorting,
    /// Move water between two tanks
    Fluid,
}

impl Template {
    pub const ALL: [Template; 4] = [
        Template::SimpleMove,
        Template::Smelting,
        Template::Sorting,
        Template::Fluid,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Template::SimpleMove => "simple_move",
            Template::Smelting => "smelting",
            Template::Sorting => "sorting",
            Template::Fluid => "fluid",
        }
    }

    /// Build a fresh program for this template
    pub fn build(&self) -> Program {
        debug!("Building template: {}", self.key());

        match self {
            Template::SimpleMove => Program::new("简单物品移动").with_trigger(
                Trigger::every(20)
                    .with(Statement::input("a"))
                    .with(Statement::output("b")),
            ),
            Template::Smelting => Program::new("自动熔炼系统")
                .with_trigger(
                    Trigger::every(20)
                        .with(Statement::Input(Transfer::new("chest").with_item("iron_ore")))
                        .with(Statement::Output(Transfer::new("furnace").with_side(Side::Top))),
                )
                .with_trigger(
                    Trigger::every(20)
                        .with(Statement::Input(
                            Transfer::new("furnace").with_side(Side::Bottom),
                        ))
                        .with(Statement::output("output")),
                ),
            Template::Sorting => Program::new("自动分类系统").with_trigger(
                Trigger::every(20)
                    .with(sort_ingot("iron_ingot", "iron_storage"))
                    .with(sort_ingot("gold_ingot", "gold_storage")),
            ),
            Template::Fluid => Program::new("流体传输").with_trigger(
                Trigger::every(20)
                    .with(Statement::Input(
                        Transfer::new("tank_a").with_resource(ResourceKind::Fluid, "minecraft:water"),
                    ))
                    .with(Statement::output("tank_b")),
            ),
        }
    }
}

fn sort_ingot(ingot: &str, storage: &str) -> Statement {
    Statement::If(
        IfStatement::new(format!("input has > 0 {ingot}"))
            .then(Statement::Input(Transfer::new("input").with_item(ingot)))
            .then(Statement::output(storage)),
    )
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .into_iter()
            .find(|t| t.key() == s.trim())
            .ok_or_else(|| TemplateError::Unknown(s.to_string()))
    }
}
