//! Graph compiler
//!
//! Turns graph triggers into lower-case SFM script. Connections are grouped
//! by source node in order of first appearance; each group becomes one
//! `input` line followed by one `output` line per target:
//!
//! ```text
//! every 20 ticks do
//!   input from a
//!   output to x
//!   output to z
//!   input from b
//!   output to y
//! end
//! ```

use indexmap::IndexMap;
use sfm_core::{resolve_filter, FLAT_INDENT};
use tracing::debug;

use crate::graph::{GraphTrigger, GraphTriggerKind, Node, NodeId};

/// Text produced when no trigger has a connection
pub const EMPTY_GRAPH_PLACEHOLDER: &str =
    "// connect two nodes in a trigger to generate code";

/// Compile every trigger with at least one connection.
///
/// Triggers without connections produce no block at all. If nothing is
/// produced, [`EMPTY_GRAPH_PLACEHOLDER`] is returned.
pub fn compile_graph(triggers: &[GraphTrigger]) -> String {
    let blocks: Vec<String> = triggers.iter().filter_map(compile_trigger).collect();

    if blocks.is_empty() {
        return EMPTY_GRAPH_PLACEHOLDER.to_string();
    }

    blocks.join("\n\n").trim_end().to_string()
}

/// Compile one trigger, or `None` if it has no connections
pub fn compile_trigger(trigger: &GraphTrigger) -> Option<String> {
    if trigger.connections().is_empty() {
        debug!("Skipping trigger '{}' without connections", trigger.name);
        return None;
    }

    let mut groups: IndexMap<NodeId, Vec<NodeId>> = IndexMap::new();
    for connection in trigger.connections() {
        groups
            .entry(connection.source)
            .or_default()
            .push(connection.target);
    }

    let mut lines = vec![header(trigger)];
    for (source, targets) in &groups {
        // Endpoints always exist; connections never outlive their nodes
        let Some(source) = trigger.node(*source) else {
            continue;
        };
        lines.push(format!("{FLAT_INDENT}{}", node_line("input", "from", source)));

        for target in targets.iter().filter_map(|id| trigger.node(*id)) {
            lines.push(format!("{FLAT_INDENT}{}", node_line("output", "to", target)));
        }
    }
    lines.push("end".to_string());

    Some(lines.join("\n"))
}

fn header(trigger: &GraphTrigger) -> String {
    match trigger.kind {
        GraphTriggerKind::Scheduled => format!("every {} ticks do", trigger.tick_interval),
        GraphTriggerKind::RedstonePulse => "every redstone pulse do".to_string(),
    }
}

/// Input or output line for a node, without indentation
pub fn node_line(keyword: &str, direction: &str, node: &Node) -> String {
    let mut line = keyword.to_string();

    let quantity = node.quantity.trim();
    if !quantity.is_empty() {
        line.push(' ');
        line.push_str(quantity);
    }

    if let Some(resource) = resolve_filter(node.kind, &node.resource_id) {
        line.push(' ');
        line.push_str(&resource);
    }

    line.push_str(&format!(" {direction} {}", node.label));

    if let Some(side) = node.side.keyword() {
        line.push_str(&format!(" {side} side"));
    }

    line
}
