//! Graph edit session

use sfm_graph::{compile_graph, GraphError, GraphTrigger, Node, NodeId};
use std::path::Path;
use tracing::info;

use crate::budget::{BudgetStatus, CodeBudget, GeneratedCode};
use crate::error::{EditorError, EditorResult};
use crate::export::export_script;

/// Edit session over a list of graph triggers
///
/// Node and connection operations act on the selected trigger. Every
/// mutation recompiles the graph before returning.
#[derive(Debug, Clone)]
pub struct GraphEditor {
    triggers: Vec<GraphTrigger>,
    selected: Option<usize>,
    generated: GeneratedCode,
}

impl GraphEditor {
    /// New session with one starter trigger
    pub fn new() -> Self {
        let mut editor = Self::from_triggers(Vec::new());
        editor.add_trigger();
        editor
    }

    /// Session over existing triggers; the first one is selected
    pub fn from_triggers(triggers: Vec<GraphTrigger>) -> Self {
        let selected = (!triggers.is_empty()).then_some(0);
        let mut editor = Self {
            triggers,
            selected,
            generated: GeneratedCode::new(CodeBudget::default()),
        };
        editor.recompute();
        editor
    }

    pub fn triggers(&self) -> &[GraphTrigger] {
        &self.triggers
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_trigger(&self) -> Option<&GraphTrigger> {
        self.selected.and_then(|i| self.triggers.get(i))
    }

    pub fn code(&self) -> &str {
        self.generated.code()
    }

    pub fn budget_status(&self) -> BudgetStatus {
        self.generated.status()
    }

    /// Append a starter trigger (`a`→`b`) and select it
    pub fn add_trigger(&mut self) -> usize {
        let name = format!("Trigger {}", self.triggers.len() + 1);
        info!("Adding graph trigger: {}", name);

        self.triggers.push(GraphTrigger::starter(name));
        let index = self.triggers.len() - 1;
        self.selected = Some(index);
        self.recompute();
        index
    }

    /// Remove a trigger; if it was selected, the first remaining one is
    /// selected instead
    pub fn remove_trigger(&mut self, index: usize) -> EditorResult<GraphTrigger> {
        if index >= self.triggers.len() {
            return Err(EditorError::TriggerNotFound(index));
        }

        let removed = self.triggers.remove(index);
        info!("Removed graph trigger: {}", removed.name);

        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        if self.selected.is_none() && !self.triggers.is_empty() {
            self.selected = Some(0);
        }

        self.recompute();
        Ok(removed)
    }

    pub fn select_trigger(&mut self, index: usize) -> EditorResult<()> {
        if index >= self.triggers.len() {
            return Err(EditorError::TriggerNotFound(index));
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Edit the name, kind or interval of a trigger
    pub fn update_trigger(
        &mut self,
        index: usize,
        update: impl FnOnce(&mut GraphTrigger),
    ) -> EditorResult<()> {
        let trigger = self
            .triggers
            .get_mut(index)
            .ok_or(EditorError::TriggerNotFound(index))?;
        update(trigger);
        trigger.tick_interval = trigger.tick_interval.max(1);
        self.recompute();
        Ok(())
    }

    /// Add a node labelled with the first unused letter
    pub fn add_node(&mut self) -> EditorResult<NodeId> {
        let trigger = self.selected_mut()?;
        let label = trigger.next_free_label();
        let id = trigger.add_node(label);
        self.recompute();
        Ok(id)
    }

    /// Remove a node and all of its connections
    pub fn remove_node(&mut self, id: NodeId) -> EditorResult<Node> {
        let removed = self.selected_mut()?.remove_node(id)?;
        self.recompute();
        Ok(removed)
    }

    pub fn update_node(&mut self, id: NodeId, update: impl FnOnce(&mut Node)) -> EditorResult<()> {
        let node = self
            .selected_mut()?
            .node_mut(id)
            .ok_or(GraphError::NodeNotFound(id))?;
        update(node);
        // node ids belong to the trigger
        node.id = id;
        self.recompute();
        Ok(())
    }

    /// Connect two nodes; self-loops and existing pairs are ignored
    pub fn connect(&mut self, source: NodeId, target: NodeId) -> EditorResult<bool> {
        let added = self.selected_mut()?.connect(source, target)?;
        if added {
            self.recompute();
        }
        Ok(added)
    }

    pub fn reverse_connection(&mut self, source: NodeId, target: NodeId) -> EditorResult<bool> {
        let reversed = self.selected_mut()?.reverse(source, target);
        if reversed {
            self.recompute();
        }
        Ok(reversed)
    }

    pub fn remove_connection(&mut self, source: NodeId, target: NodeId) -> EditorResult<bool> {
        let removed = self.selected_mut()?.disconnect(source, target);
        if removed {
            self.recompute();
        }
        Ok(removed)
    }

    pub fn export(&self, path: impl AsRef<Path>) -> EditorResult<()> {
        export_script(path, self.code())
    }

    fn selected_mut(&mut self) -> EditorResult<&mut GraphTrigger> {
        self.selected
            .and_then(|i| self.triggers.get_mut(i))
            .ok_or(EditorError::NoActiveTrigger)
    }

    fn recompute(&mut self) {
        let code = compile_graph(&self.triggers);
        self.generated.replace("graph", code);
    }
}

impl Default for GraphEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfm_graph::EMPTY_GRAPH_PLACEHOLDER;

    #[test]
    fn test_new_session() {
        let editor = GraphEditor::new();
        assert_eq!(editor.triggers().len(), 1);
        assert_eq!(editor.triggers()[0].name, "Trigger 1");
        assert_eq!(
            editor.code(),
            "every 20 ticks do\n  input from a\n  output to b\nend"
        );
    }

    #[test]
    fn test_remove_last_trigger_shows_placeholder() {
        let mut editor = GraphEditor::new();
        editor.remove_trigger(0).unwrap();
        assert_eq!(editor.selected_index(), None);
        assert_eq!(editor.code(), EMPTY_GRAPH_PLACEHOLDER);
        assert!(matches!(editor.add_node(), Err(EditorError::NoActiveTrigger)));
    }

    #[test]
    fn test_remove_trigger_keeps_selection_in_range() {
        let mut editor = GraphEditor::new();
        editor.add_trigger();
        editor.add_trigger();
        assert_eq!(editor.selected_index(), Some(2));

        editor.remove_trigger(0).unwrap();
        assert_eq!(editor.selected_index(), Some(1));
        assert_eq!(editor.selected_trigger().unwrap().name, "Trigger 3");

        editor.remove_trigger(1).unwrap();
        assert_eq!(editor.selected_index(), Some(0));
    }

    #[test]
    fn test_add_node_uses_next_free_letter() {
        let mut editor = GraphEditor::new();
        let id = editor.add_node().unwrap();
        let trigger = editor.selected_trigger().unwrap();
        assert_eq!(trigger.node(id).unwrap().label, "c");
    }

    #[test]
    fn test_update_node_keeps_id() {
        let mut editor = GraphEditor::new();
        let id = editor.selected_trigger().unwrap().nodes()[0].id;
        editor
            .update_node(id, |node| {
                node.set_label("chest");
                node.id = NodeId(99);
            })
            .unwrap();

        let trigger = editor.selected_trigger().unwrap();
        assert_eq!(trigger.node(id).unwrap().label, "chest");
        assert!(editor.code().contains("input from chest"));
    }
}
