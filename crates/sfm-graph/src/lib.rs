//! SFM Graph Model
//!
//! An alternative, topology-based way to describe a program: each trigger
//! holds labelled nodes and directed connections, and the compiler turns
//! every connection group into `input`/`output` lines.
//!
//! # Key Types
//!
//! - [`GraphTrigger`] - Trigger owning its nodes and connections
//! - [`Node`] - Labelled endpoint with side and resource filter
//! - [`Connection`] - Directed source → target edge
//! - [`compile_graph`] - Render all triggers as script text

pub mod compile;
pub mod graph;

pub use compile::{compile_graph, compile_trigger, node_line, EMPTY_GRAPH_PLACEHOLDER};
pub use graph::{
    Connection, GraphError, GraphResult, GraphTrigger, GraphTriggerConfig, GraphTriggerKind,
    Node, NodeId, DEFAULT_TICK_INTERVAL,
};
