//! Endpoint side used by the graph and wizard dialects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Face qualifier of a graph node or wizard entry.
///
/// `Any` means no side restriction and never produces a side clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NodeSide {
    #[default]
    Any,
    Top,
    Bottom,
    North,
    South,
    East,
    West,
}

impl NodeSide {
    /// Lower-case side literal, or `None` for [`NodeSide::Any`]
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            NodeSide::Any => None,
            NodeSide::Top => Some("top"),
            NodeSide::Bottom => Some("bottom"),
            NodeSide::North => Some("north"),
            NodeSide::South => Some("south"),
            NodeSide::East => Some("east"),
            NodeSide::West => Some("west"),
        }
    }
}

impl fmt::Display for NodeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword().unwrap_or("any"))
    }
}

impl FromStr for NodeSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "any" => Ok(NodeSide::Any),
            "top" => Ok(NodeSide::Top),
            "bottom" => Ok(NodeSide::Bottom),
            "north" => Ok(NodeSide::North),
            "south" => Ok(NodeSide::South),
            "east" => Ok(NodeSide::East),
            "west" => Ok(NodeSide::West),
            other => Err(format!("unknown side: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_has_no_keyword() {
        assert_eq!(NodeSide::Any.keyword(), None);
        assert_eq!(NodeSide::default(), NodeSide::Any);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(NodeSide::Top.keyword(), Some("top"));
        assert_eq!(NodeSide::West.keyword(), Some("west"));
    }

    #[test]
    fn test_parse_roundtrip_display() {
        for side in ["any", "top", "bottom", "north", "south", "east", "west"] {
            let parsed: NodeSide = side.parse().unwrap();
            assert_eq!(parsed.to_string(), side);
        }
        assert!("left".parse::<NodeSide>().is_err());
    }
}
