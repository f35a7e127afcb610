//! Common labels and resource ids
//!
//! Users keep short lists of labels and resource ids they type often. The
//! lists are plain data; the editors only read them to offer suggestions.

use serde::{Deserialize, Serialize};
use sfm_core::ResourceKind;
use std::fmt;
use std::str::FromStr;

/// Which list a common value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueCategory {
    Label,
    Item,
    Fluid,
    Energy,
    Gas,
}

impl ValueCategory {
    pub const ALL: [ValueCategory; 5] = [
        ValueCategory::Label,
        ValueCategory::Item,
        ValueCategory::Fluid,
        ValueCategory::Energy,
        ValueCategory::Gas,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueCategory::Label => "label",
            ValueCategory::Item => "item",
            ValueCategory::Fluid => "fluid",
            ValueCategory::Energy => "energy",
            ValueCategory::Gas => "gas",
        }
    }
}

impl From<ResourceKind> for ValueCategory {
    fn from(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Item => ValueCategory::Item,
            ResourceKind::Fluid => ValueCategory::Fluid,
            ResourceKind::Energy => ValueCategory::Energy,
            ResourceKind::Gas => ValueCategory::Gas,
        }
    }
}

impl fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "label" | "labels" => Ok(ValueCategory::Label),
            "items" => Ok(ValueCategory::Item),
            "fluids" => Ok(ValueCategory::Fluid),
            "gases" => Ok(ValueCategory::Gas),
            other => other
                .parse::<ResourceKind>()
                .map(ValueCategory::from)
                .map_err(|_| format!("unknown value category: {other}")),
        }
    }
}

/// Persisted lists of common values
///
/// JSON format:
/// ```json
/// {
///   "Labels": ["chest"],
///   "ItemIds": ["iron_ingot"],
///   "FluidIds": [],
///   "EnergyIds": [],
///   "GasIds": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CommonValues {
    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(default)]
    pub item_ids: Vec<String>,

    #[serde(default)]
    pub fluid_ids: Vec<String>,

    #[serde(default)]
    pub energy_ids: Vec<String>,

    #[serde(default)]
    pub gas_ids: Vec<String>,
}

impl CommonValues {
    pub fn list(&self, category: ValueCategory) -> &[String] {
        match category {
            ValueCategory::Label => &self.labels,
            ValueCategory::Item => &self.item_ids,
            ValueCategory::Fluid => &self.fluid_ids,
            ValueCategory::Energy => &self.energy_ids,
            ValueCategory::Gas => &self.gas_ids,
        }
    }

    fn list_mut(&mut self, category: ValueCategory) -> &mut Vec<String> {
        match category {
            ValueCategory::Label => &mut self.labels,
            ValueCategory::Item => &mut self.item_ids,
            ValueCategory::Fluid => &mut self.fluid_ids,
            ValueCategory::Energy => &mut self.energy_ids,
            ValueCategory::Gas => &mut self.gas_ids,
        }
    }

    /// Resource ids offered for a resource kind
    pub fn ids_for(&self, kind: ResourceKind) -> &[String] {
        self.list(kind.into())
    }

    /// Add a trimmed value; blank and duplicate values are ignored.
    ///
    /// Returns whether the list changed.
    pub fn add(&mut self, category: ValueCategory, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }

        let list = self.list_mut(category);
        if list.iter().any(|v| v == value) {
            return false;
        }
        list.push(value.to_string());
        true
    }

    /// Remove a value; returns whether it was present
    pub fn remove(&mut self, category: ValueCategory, value: &str) -> bool {
        let list = self.list_mut(category);
        let before = list.len();
        list.retain(|v| v != value.trim());
        before != list.len()
    }

    pub fn is_empty(&self) -> bool {
        ValueCategory::ALL.iter().all(|c| self.list(*c).is_empty())
    }
}
