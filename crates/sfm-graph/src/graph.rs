//! Graph model
//!
//! Each graph trigger owns a set of nodes (labelled endpoints) and a set of
//! directed connections between them. Connections refer to nodes by
//! [`NodeId`], never by reference, so removing a node only has to drop the
//! connections that mention its id.
//!
//! Invariants maintained by [`GraphTrigger`]:
//!
//! - no two connections share the same (source, target) pair
//! - every connection endpoint is a node of the same trigger
//! - connection order is insertion order

use serde::{Deserialize, Serialize};
use sfm_core::{NodeSide, ResourceKind};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Graph errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Duplicate node id: {0}")]
    DuplicateNode(NodeId),
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Default tick interval of a graph trigger
pub const DEFAULT_TICK_INTERVAL: u32 = 20;

/// Stable identifier of a node within its trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A labelled endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,

    pub label: String,

    #[serde(default)]
    pub side: NodeSide,

    #[serde(default)]
    pub kind: ResourceKind,

    /// Bare resource id; blank means "any resource of this kind"
    #[serde(default)]
    pub resource_id: String,

    /// Free-text quantity, emitted as-is when not blank
    #[serde(default)]
    pub quantity: String,
}

impl Node {
    fn new(id: NodeId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            side: NodeSide::Any,
            kind: ResourceKind::Item,
            resource_id: String::new(),
            quantity: String::new(),
        }
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = label.into();
        self
    }

    pub fn set_side(&mut self, side: NodeSide) -> &mut Self {
        self.side = side;
        self
    }

    pub fn set_resource(&mut self, kind: ResourceKind, id: impl Into<String>) -> &mut Self {
        self.kind = kind;
        self.resource_id = id.into();
        self
    }

    pub fn set_quantity(&mut self, quantity: impl Into<String>) -> &mut Self {
        self.quantity = quantity.into();
        self
    }
}

/// Directed edge from a source node to a target node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub source: NodeId,
    pub target: NodeId,
}

/// What makes a graph trigger fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GraphTriggerKind {
    #[default]
    Scheduled,
    RedstonePulse,
}

/// A trigger with its node graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GraphTriggerConfig", into = "GraphTriggerConfig")]
pub struct GraphTrigger {
    pub name: String,
    pub kind: GraphTriggerKind,
    pub tick_interval: u32,
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    next_id: u32,
}

impl GraphTrigger {
    /// Empty scheduled trigger
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: GraphTriggerKind::Scheduled,
            tick_interval: DEFAULT_TICK_INTERVAL,
            nodes: Vec::new(),
            connections: Vec::new(),
            next_id: 0,
        }
    }

    /// Trigger with nodes `a` and `b` joined by a→b
    pub fn starter(name: impl Into<String>) -> Self {
        let mut trigger = Self::new(name);
        let a = trigger.add_node("a");
        let b = trigger.add_node("b");
        trigger.connections.push(Connection { source: a, target: b });
        trigger
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// First node carrying `label`
    pub fn node_by_label(&self, label: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.label == label)
    }

    /// Add a node with default settings and return its id
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeId {
        let id = self.allocate_id();
        self.nodes.push(Node::new(id, label));
        id
    }

    /// Next id from the counter; once the counter is exhausted, the lowest
    /// id not held by any node
    fn allocate_id(&mut self) -> NodeId {
        if let Some(next) = self.next_id.checked_add(1) {
            let id = NodeId(self.next_id);
            self.next_id = next;
            return id;
        }

        (0..u32::MAX)
            .map(NodeId)
            .find(|id| self.node(*id).is_none())
            .unwrap_or(NodeId(u32::MAX))
    }

    /// Remove a node and every connection touching it
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<Node> {
        let index = self
            .nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or(GraphError::NodeNotFound(id))?;

        let before = self.connections.len();
        self.connections
            .retain(|c| c.source != id && c.target != id);
        debug!(
            "Removed node {} and {} connection(s)",
            id,
            before - self.connections.len()
        );

        Ok(self.nodes.remove(index))
    }

    pub fn has_connection(&self, source: NodeId, target: NodeId) -> bool {
        self.connections
            .iter()
            .any(|c| c.source == source && c.target == target)
    }

    /// Connect `source` to `target`.
    ///
    /// Returns `Ok(false)` without changing anything for a self-loop or an
    /// existing pair.
    pub fn connect(&mut self, source: NodeId, target: NodeId) -> GraphResult<bool> {
        for id in [source, target] {
            if self.node(id).is_none() {
                return Err(GraphError::NodeNotFound(id));
            }
        }

        if source == target || self.has_connection(source, target) {
            return Ok(false);
        }

        self.connections.push(Connection { source, target });
        Ok(true)
    }

    /// Remove the connection `source`→`target`, if present
    pub fn disconnect(&mut self, source: NodeId, target: NodeId) -> bool {
        let before = self.connections.len();
        self.connections
            .retain(|c| !(c.source == source && c.target == target));
        before != self.connections.len()
    }

    /// Swap the endpoints of `source`→`target` in place.
    ///
    /// Refused when the reversed pair already exists, since that would
    /// duplicate a connection.
    pub fn reverse(&mut self, source: NodeId, target: NodeId) -> bool {
        if self.has_connection(target, source) {
            return false;
        }

        match self
            .connections
            .iter_mut()
            .find(|c| c.source == source && c.target == target)
        {
            Some(connection) => {
                std::mem::swap(&mut connection.source, &mut connection.target);
                true
            }
            None => false,
        }
    }

    /// First single-letter label not used by any node, or `x`
    pub fn next_free_label(&self) -> String {
        ('a'..='z')
            .map(String::from)
            .find(|label| !self.nodes.iter().any(|n| &n.label == label))
            .unwrap_or_else(|| "x".to_string())
    }
}

fn default_tick_interval() -> u32 {
    DEFAULT_TICK_INTERVAL
}

/// Stored form of a graph trigger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphTriggerConfig {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub kind: GraphTriggerKind,

    #[serde(
        default = "default_tick_interval",
        deserialize_with = "sfm_core::positive_interval"
    )]
    pub tick_interval: u32,

    #[serde(default)]
    pub nodes: Vec<Node>,

    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl TryFrom<GraphTriggerConfig> for GraphTrigger {
    type Error = GraphError;

    fn try_from(config: GraphTriggerConfig) -> GraphResult<Self> {
        let mut trigger = GraphTrigger::new(config.name);
        trigger.kind = config.kind;
        trigger.tick_interval = config.tick_interval;

        for node in config.nodes {
            if trigger.node(node.id).is_some() {
                return Err(GraphError::DuplicateNode(node.id));
            }
            trigger.next_id = trigger.next_id.max(node.id.0.saturating_add(1));
            trigger.nodes.push(node);
        }

        for connection in config.connections {
            trigger.connect(connection.source, connection.target)?;
        }

        Ok(trigger)
    }
}

impl From<GraphTrigger> for GraphTriggerConfig {
    fn from(trigger: GraphTrigger) -> Self {
        Self {
            name: trigger.name,
            kind: trigger.kind,
            tick_interval: trigger.tick_interval,
            nodes: trigger.nodes,
            connections: trigger.connections,
        }
    }
}
