//! Structured program edit session

use sfm_core::{parse_count, FieldResult, ResourceKind, WILDCARD};
use sfm_program::{
    serialize, ConditionBuilder, IfStatement, Program, Retention, Schedule, Side, Statement,
    Template, TimeUnit, Transfer, Trigger, TriggerKind,
};
use std::path::Path;
use tracing::info;

use crate::budget::{BudgetStatus, CodeBudget, GeneratedCode};
use crate::error::{EditorError, EditorResult};
use crate::export::export_script;

/// Settings for a new trigger, as entered by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerSettings {
    pub redstone_pulse: bool,
    pub interval: u32,
    pub unit: TimeUnit,
    pub global: bool,
    /// `0` means no offset
    pub offset: u32,
}

impl Default for TriggerSettings {
    fn default() -> Self {
        let schedule = Schedule::default();
        Self {
            redstone_pulse: false,
            interval: schedule.interval,
            unit: schedule.unit,
            global: schedule.global,
            offset: 0,
        }
    }
}

impl TriggerSettings {
    pub fn every(interval: u32, unit: TimeUnit) -> Self {
        Self {
            interval,
            unit,
            ..Self::default()
        }
    }

    pub fn redstone_pulse() -> Self {
        Self {
            redstone_pulse: true,
            ..Self::default()
        }
    }

    pub fn to_kind(&self) -> TriggerKind {
        if self.redstone_pulse {
            return TriggerKind::RedstonePulse;
        }

        TriggerKind::Scheduled(Schedule {
            interval: self.interval.max(1),
            unit: self.unit,
            global: self.global,
            offset: (self.offset > 0).then_some(self.offset),
        })
    }
}

/// Raw input/output form fields
///
/// Numeric fields are free text; they are validated when the form is turned
/// into a [`Transfer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferForm {
    pub label: String,
    pub quantity: String,
    pub retention: String,
    pub retention_each: bool,
    pub kind: ResourceKind,
    pub resource_id: String,
    pub except: String,
    pub each: bool,
    pub side: Option<Side>,
    pub slots: String,
}

impl TransferForm {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            quantity: String::new(),
            retention: String::new(),
            retention_each: false,
            kind: ResourceKind::Item,
            resource_id: String::new(),
            except: String::new(),
            each: false,
            side: None,
            slots: String::new(),
        }
    }

    pub fn to_transfer(&self) -> FieldResult<Transfer> {
        let quantity = parse_count("quantity", &self.quantity)?;
        let retain = parse_count("retention", &self.retention)?;

        let resource_id = match self.resource_id.trim() {
            "" => WILDCARD.to_string(),
            id => id.to_string(),
        };

        Ok(Transfer {
            quantity,
            retain: retain.map(|count| Retention {
                count,
                each: self.retention_each,
            }),
            kind: self.kind,
            resource_id,
            except: non_blank(&self.except),
            label: self.label.trim().to_string(),
            each: self.each,
            side: self.side,
            slots: non_blank(&self.slots),
        })
    }
}

fn non_blank(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Edit session over a structured [`Program`]
///
/// Every mutation regenerates the script text before returning.
#[derive(Debug, Clone)]
pub struct ProgramEditor {
    program: Program,
    selected: Option<usize>,
    generated: GeneratedCode,
}

impl ProgramEditor {
    /// New session with a single default trigger
    pub fn new() -> Self {
        let program = Program::default().with_trigger(Trigger::default());
        Self::from_program(program)
    }

    /// Session over an existing program; the first trigger is selected
    pub fn from_program(program: Program) -> Self {
        let selected = (!program.triggers.is_empty()).then_some(0);
        let mut editor = Self {
            program,
            selected,
            generated: GeneratedCode::new(CodeBudget::default()),
        };
        editor.recompute();
        editor
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn code(&self) -> &str {
        self.generated.code()
    }

    pub fn budget_status(&self) -> BudgetStatus {
        self.generated.status()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_trigger(&self) -> Option<&Trigger> {
        self.selected.and_then(|i| self.program.triggers.get(i))
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.program.name = name.into();
        self.recompute();
    }

    /// Append a trigger and select it
    pub fn add_trigger(&mut self, settings: TriggerSettings) -> usize {
        let trigger = Trigger {
            kind: settings.to_kind(),
            statements: Vec::new(),
        };
        info!("Adding trigger: {}", trigger.header());

        self.program.triggers.push(trigger);
        let index = self.program.triggers.len() - 1;
        self.selected = Some(index);
        self.recompute();
        index
    }

    /// Replace the schedule of the selected trigger, keeping its statements
    pub fn update_selected_trigger(&mut self, settings: TriggerSettings) -> EditorResult<()> {
        self.selected_mut()?.kind = settings.to_kind();
        self.recompute();
        Ok(())
    }

    /// Remove the selected trigger; the first remaining one becomes selected
    pub fn remove_selected_trigger(&mut self) -> EditorResult<Trigger> {
        let index = self.selected.ok_or(EditorError::NoActiveTrigger)?;
        if index >= self.program.triggers.len() {
            return Err(EditorError::TriggerNotFound(index));
        }

        let removed = self.program.triggers.remove(index);
        info!("Removed trigger: {}", removed.header());

        self.selected = (!self.program.triggers.is_empty()).then_some(0);
        self.recompute();
        Ok(removed)
    }

    pub fn select_trigger(&mut self, index: usize) -> EditorResult<()> {
        if index >= self.program.triggers.len() {
            return Err(EditorError::TriggerNotFound(index));
        }
        self.selected = Some(index);
        Ok(())
    }

    pub fn add_input(&mut self, form: &TransferForm) -> EditorResult<()> {
        self.selected_mut()?;
        let transfer = form.to_transfer()?;
        self.push_statement(Statement::Input(transfer))
    }

    pub fn add_output(&mut self, form: &TransferForm) -> EditorResult<()> {
        self.selected_mut()?;
        let transfer = form.to_transfer()?;
        self.push_statement(Statement::Output(transfer))
    }

    /// Append an `if` with empty branches
    pub fn add_if(&mut self, condition: &ConditionBuilder) -> EditorResult<()> {
        self.selected_mut()?;
        let condition = condition.build()?;
        self.push_statement(Statement::If(IfStatement::new(condition)))
    }

    /// Append a `forget`; blank labels forget everything
    pub fn add_forget(&mut self, labels: &str) -> EditorResult<()> {
        let statement = match labels.trim() {
            "" => Statement::forget_all(),
            labels => Statement::forget(labels),
        };
        self.push_statement(statement)
    }

    /// Append a statement to the selected trigger
    pub fn push_statement(&mut self, statement: Statement) -> EditorResult<()> {
        self.selected_mut()?.statements.push(statement);
        self.recompute();
        Ok(())
    }

    pub fn remove_statement(&mut self, index: usize) -> EditorResult<Statement> {
        let statements = &mut self.selected_mut()?.statements;
        if index >= statements.len() {
            return Err(EditorError::StatementNotFound(index));
        }

        let removed = statements.remove(index);
        self.recompute();
        Ok(removed)
    }

    /// Swap a statement with its predecessor; returns false at the top
    pub fn move_statement_up(&mut self, index: usize) -> EditorResult<bool> {
        let statements = &mut self.selected_mut()?.statements;
        if index >= statements.len() {
            return Err(EditorError::StatementNotFound(index));
        }
        if index == 0 {
            return Ok(false);
        }

        statements.swap(index - 1, index);
        self.recompute();
        Ok(true)
    }

    /// Swap a statement with its successor; returns false at the bottom
    pub fn move_statement_down(&mut self, index: usize) -> EditorResult<bool> {
        let statements = &mut self.selected_mut()?.statements;
        if index >= statements.len() {
            return Err(EditorError::StatementNotFound(index));
        }
        if index + 1 == statements.len() {
            return Ok(false);
        }

        statements.swap(index, index + 1);
        self.recompute();
        Ok(true)
    }

    /// Replace the whole program with a template
    pub fn load_template(&mut self, template: Template) {
        info!("Loading template: {}", template.key());
        self.program = template.build();
        self.selected = (!self.program.triggers.is_empty()).then_some(0);
        self.recompute();
    }

    /// Drop every trigger, keeping the program name
    pub fn clear(&mut self) {
        self.program.triggers.clear();
        self.selected = None;
        self.recompute();
    }

    /// Write the current script text to `path`
    pub fn export(&self, path: impl AsRef<Path>) -> EditorResult<()> {
        export_script(path, self.code())
    }

    fn selected_mut(&mut self) -> EditorResult<&mut Trigger> {
        self.selected
            .and_then(|i| self.program.triggers.get_mut(i))
            .ok_or(EditorError::NoActiveTrigger)
    }

    fn recompute(&mut self) {
        let code = serialize(&self.program);
        self.generated.replace("program", code);
    }
}

impl Default for ProgramEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_default_trigger() {
        let editor = ProgramEditor::new();
        assert_eq!(editor.selected_index(), Some(0));
        assert_eq!(editor.code(), "name \"My Program\"\n\nevery 20 ticks do\nend");
    }

    #[test]
    fn test_trigger_settings_offset_zero_is_none() {
        let kind = TriggerSettings::every(5, TimeUnit::Seconds).to_kind();
        let TriggerKind::Scheduled(schedule) = kind else {
            panic!("expected a scheduled trigger");
        };
        assert_eq!(schedule.offset, None);
        assert_eq!(schedule.interval, 5);
    }

    #[test]
    fn test_trigger_settings_interval_is_at_least_one() {
        let kind = TriggerSettings::every(0, TimeUnit::Ticks).to_kind();
        assert_eq!(kind, TriggerKind::Scheduled(Schedule { interval: 1, ..Schedule::default() }));
    }

    #[test]
    fn test_transfer_form_defaults() {
        let transfer = TransferForm::new(" chest ").to_transfer().unwrap();
        assert_eq!(transfer.label, "chest");
        assert_eq!(transfer.resource_id, "*");
        assert_eq!(transfer.quantity, None);
        assert_eq!(transfer.slots, None);
        assert_eq!(transfer.except, None);
    }

    #[test]
    fn test_transfer_form_rejects_bad_quantity() {
        let mut form = TransferForm::new("a");
        form.quantity = "abc".to_string();
        assert!(form.to_transfer().is_err());

        form.quantity = String::new();
        form.retention = "-3".to_string();
        assert!(form.to_transfer().is_err());
    }

    #[test]
    fn test_transfer_form_retention() {
        let mut form = TransferForm::new("a");
        form.retention = "16".to_string();
        form.retention_each = true;
        let transfer = form.to_transfer().unwrap();
        assert_eq!(transfer.retain, Some(Retention { count: 16, each: true }));
    }

    #[test]
    fn test_add_forget() {
        let mut editor = ProgramEditor::new();
        editor.add_forget("  ").unwrap();
        editor.add_forget("a, b").unwrap();
        assert!(editor.code().contains("    forget\n"));
        assert!(editor.code().contains("    forget a, b\n"));
    }
}
