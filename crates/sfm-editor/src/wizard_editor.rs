//! Wizard edit session

use sfm_wizard::{WizardEntry, WizardLayout};
use std::path::Path;

use crate::budget::{BudgetStatus, CodeBudget, GeneratedCode};
use crate::error::{EditorError, EditorResult};
use crate::export::export_script;

/// Edit session over a [`WizardLayout`]
///
/// The layout always keeps at least one source and one target.
#[derive(Debug, Clone)]
pub struct WizardEditor {
    layout: WizardLayout,
    generated: GeneratedCode,
}

impl WizardEditor {
    /// New session with source `a`, target `b` and the default interval
    pub fn new() -> Self {
        Self::from_layout(WizardLayout::default())
    }

    /// Session over an existing layout; empty lists get a default entry
    pub fn from_layout(mut layout: WizardLayout) -> Self {
        if layout.sources.is_empty() {
            layout.sources.push(WizardEntry::source());
        }
        if layout.targets.is_empty() {
            layout.targets.push(WizardEntry::target());
        }

        let mut editor = Self {
            layout,
            generated: GeneratedCode::new(CodeBudget::default()),
        };
        editor.recompute();
        editor
    }

    pub fn layout(&self) -> &WizardLayout {
        &self.layout
    }

    pub fn code(&self) -> &str {
        self.generated.code()
    }

    pub fn budget_status(&self) -> BudgetStatus {
        self.generated.status()
    }

    pub fn set_tick_interval(&mut self, interval: u32) {
        self.layout.tick_interval = interval.max(1);
        self.recompute();
    }

    pub fn add_source(&mut self) -> usize {
        self.layout.sources.push(WizardEntry::source());
        self.recompute();
        self.layout.sources.len() - 1
    }

    pub fn add_target(&mut self) -> usize {
        self.layout.targets.push(WizardEntry::target());
        self.recompute();
        self.layout.targets.len() - 1
    }

    /// Remove a source; returns false when it is the only one
    pub fn remove_source(&mut self, index: usize) -> EditorResult<bool> {
        let removed = remove_keeping_one(&mut self.layout.sources, index)?;
        if removed {
            self.recompute();
        }
        Ok(removed)
    }

    /// Remove a target; returns false when it is the only one
    pub fn remove_target(&mut self, index: usize) -> EditorResult<bool> {
        let removed = remove_keeping_one(&mut self.layout.targets, index)?;
        if removed {
            self.recompute();
        }
        Ok(removed)
    }

    pub fn update_source(
        &mut self,
        index: usize,
        update: impl FnOnce(&mut WizardEntry),
    ) -> EditorResult<()> {
        let entry = self
            .layout
            .sources
            .get_mut(index)
            .ok_or(EditorError::EntryNotFound(index))?;
        update(entry);
        self.recompute();
        Ok(())
    }

    pub fn update_target(
        &mut self,
        index: usize,
        update: impl FnOnce(&mut WizardEntry),
    ) -> EditorResult<()> {
        let entry = self
            .layout
            .targets
            .get_mut(index)
            .ok_or(EditorError::EntryNotFound(index))?;
        update(entry);
        self.recompute();
        Ok(())
    }

    pub fn export(&self, path: impl AsRef<Path>) -> EditorResult<()> {
        export_script(path, self.code())
    }

    fn recompute(&mut self) {
        let code = self.layout.compile();
        self.generated.replace("wizard", code);
    }
}

impl Default for WizardEditor {
    fn default() -> Self {
        Self::new()
    }
}

fn remove_keeping_one(entries: &mut Vec<WizardEntry>, index: usize) -> EditorResult<bool> {
    if index >= entries.len() {
        return Err(EditorError::EntryNotFound(index));
    }
    if entries.len() == 1 {
        return Ok(false);
    }
    entries.remove(index);
    Ok(true)
}
