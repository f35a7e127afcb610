//! Resource kinds and the resource-identifier resolver

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::WILDCARD;

/// Category of transferable quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    #[default]
    Item,
    Fluid,
    Energy,
    Gas,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Item,
        ResourceKind::Fluid,
        ResourceKind::Energy,
        ResourceKind::Gas,
    ];

    /// Wire prefix prepended to the resource id
    pub fn prefix(&self) -> &'static str {
        match self {
            ResourceKind::Item => "",
            ResourceKind::Fluid => "fluid::",
            ResourceKind::Energy => "fe::",
            ResourceKind::Gas => "gas::",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Item => "item",
            ResourceKind::Fluid => "fluid",
            ResourceKind::Energy => "energy",
            ResourceKind::Gas => "gas",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "item" => Ok(ResourceKind::Item),
            "fluid" => Ok(ResourceKind::Fluid),
            "energy" | "fe" => Ok(ResourceKind::Energy),
            "gas" => Ok(ResourceKind::Gas),
            other => Err(format!("unknown resource kind: {other}")),
        }
    }
}

/// Map a resource kind and a bare id to the fully prefixed wire token.
///
/// A blank item id resolves to the wildcard; a blank id of any other kind
/// resolves to the bare prefix (e.g. `fluid::`). Every front-end goes through
/// this function; dialects that omit the wildcard compare against
/// [`WILDCARD`] after resolving.
pub fn resolve(kind: ResourceKind, raw_id: &str) -> String {
    if raw_id.trim().is_empty() {
        return match kind {
            ResourceKind::Item => WILDCARD.to_string(),
            _ => kind.prefix().to_string(),
        };
    }
    format!("{}{}", kind.prefix(), raw_id)
}

/// Resolve a resource filter for the flat dialects.
///
/// Same table as [`resolve`], except a blank item id yields `None`: those
/// dialects leave the filter out instead of writing the wildcard.
pub fn resolve_filter(kind: ResourceKind, raw_id: &str) -> Option<String> {
    if kind == ResourceKind::Item && raw_id.trim().is_empty() {
        return None;
    }
    Some(resolve(kind, raw_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefix_table() {
        let cases = [
            (ResourceKind::Item, "", "*"),
            (ResourceKind::Item, "iron_ingot", "iron_ingot"),
            (ResourceKind::Fluid, "", "fluid::"),
            (ResourceKind::Fluid, "minecraft:water", "fluid::minecraft:water"),
            (ResourceKind::Energy, "", "fe::"),
            (ResourceKind::Energy, "forge:energy", "fe::forge:energy"),
            (ResourceKind::Gas, "", "gas::"),
            (ResourceKind::Gas, "mekanism:hydrogen", "gas::mekanism:hydrogen"),
        ];

        for (kind, raw, expected) in cases {
            assert_eq!(resolve(kind, raw), expected, "{kind} / {raw:?}");
        }
    }

    #[test]
    fn test_resolve_whitespace_is_blank() {
        assert_eq!(resolve(ResourceKind::Item, "   "), "*");
        assert_eq!(resolve(ResourceKind::Gas, "\t"), "gas::");
    }

    #[test]
    fn test_resolve_item_wildcard_passthrough() {
        assert_eq!(resolve(ResourceKind::Item, "*"), WILDCARD);
    }

    #[test]
    fn test_resolve_filter_omits_blank_item() {
        assert_eq!(resolve_filter(ResourceKind::Item, ""), None);
        assert_eq!(
            resolve_filter(ResourceKind::Item, "diamond"),
            Some("diamond".to_string())
        );
        assert_eq!(
            resolve_filter(ResourceKind::Fluid, " "),
            Some("fluid::".to_string())
        );
    }

    #[test]
    fn test_resource_kind_from_str() {
        assert_eq!("Fluid".parse::<ResourceKind>().unwrap(), ResourceKind::Fluid);
        assert_eq!("fe".parse::<ResourceKind>().unwrap(), ResourceKind::Energy);
        assert!("plasma".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_resource_kind_serde() {
        let json = serde_json::to_string(&ResourceKind::Energy).unwrap();
        assert_eq!(json, "\"energy\"");
        let kind: ResourceKind = serde_json::from_str("\"gas\"").unwrap();
        assert_eq!(kind, ResourceKind::Gas);
    }
}
