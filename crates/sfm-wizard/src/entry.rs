//! Wizard sources and targets

use serde::{Deserialize, Serialize};
use sfm_core::{NodeSide, ResourceKind};

/// Default tick interval of the wizard trigger
pub const DEFAULT_TICK_INTERVAL: u32 = 20;

/// One source or target row of the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardEntry {
    pub label: String,

    #[serde(default)]
    pub side: NodeSide,

    #[serde(default)]
    pub kind: ResourceKind,

    #[serde(default)]
    pub resource_id: String,

    /// Free-text quantity, emitted as-is when not blank
    #[serde(default)]
    pub quantity: String,
}

impl WizardEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            side: NodeSide::Any,
            kind: ResourceKind::Item,
            resource_id: String::new(),
            quantity: String::new(),
        }
    }

    pub fn with_side(mut self, side: NodeSide) -> Self {
        self.side = side;
        self
    }

    pub fn with_resource(mut self, kind: ResourceKind, id: impl Into<String>) -> Self {
        self.kind = kind;
        self.resource_id = id.into();
        self
    }

    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = quantity.into();
        self
    }

    /// Default source row (`a`)
    pub fn source() -> Self {
        Self::new("a")
    }

    /// Default target row (`b`)
    pub fn target() -> Self {
        Self::new("b")
    }
}

fn default_tick_interval() -> u32 {
    DEFAULT_TICK_INTERVAL
}

/// Complete wizard input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardLayout {
    #[serde(
        default = "default_tick_interval",
        deserialize_with = "sfm_core::positive_interval"
    )]
    pub tick_interval: u32,

    #[serde(default)]
    pub sources: Vec<WizardEntry>,

    #[serde(default)]
    pub targets: Vec<WizardEntry>,
}

impl Default for WizardLayout {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            sources: vec![WizardEntry::source()],
            targets: vec![WizardEntry::target()],
        }
    }
}

impl WizardLayout {
    /// Render as script text
    pub fn compile(&self) -> String {
        crate::compile::compile_wizard(self.tick_interval, &self.sources, &self.targets)
    }
}
