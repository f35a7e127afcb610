//! Edit sessions driven end to end

use sfm_core::ResourceKind;
use sfm_editor::{
    EditorError, GraphEditor, ProgramEditor, TransferForm, TriggerSettings, WizardEditor,
};
use sfm_program::{ConditionBuilder, Side, Statement, Template, TimeUnit};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_statement_without_trigger_fails() {
    let mut editor = ProgramEditor::new();
    editor.clear();

    let result = editor.add_input(&TransferForm::new("a"));
    assert!(matches!(result, Err(EditorError::NoActiveTrigger)));
    assert!(matches!(
        editor.add_forget(""),
        Err(EditorError::NoActiveTrigger)
    ));
    assert_eq!(editor.code(), "name \"My Program\"");
}

#[test]
fn test_invalid_quantity_leaves_model_unchanged() {
    let mut editor = ProgramEditor::new();
    let before = editor.program().clone();
    let code_before = editor.code().to_string();

    let mut form = TransferForm::new("chest");
    form.quantity = "lots".to_string();

    let err = editor.add_input(&form).unwrap_err();
    assert!(matches!(err, EditorError::InvalidNumericField(_)));
    assert!(err.to_string().contains("quantity"));
    assert_eq!(editor.program(), &before);
    assert_eq!(editor.code(), code_before);
}

#[test]
fn test_build_program_from_forms() {
    let mut editor = ProgramEditor::new();
    editor.set_name("Ore line");

    let mut input = TransferForm::new("chest");
    input.quantity = "64".to_string();
    input.resource_id = "iron_ore".to_string();
    input.side = Some(Side::Top);
    editor.add_input(&input).unwrap();

    let mut output = TransferForm::new("furnace");
    output.kind = ResourceKind::Fluid;
    output.resource_id = "minecraft:lava".to_string();
    output.each = true;
    editor.add_output(&output).unwrap();

    editor.add_if(&ConditionBuilder::default()).unwrap();

    assert_eq!(
        editor.code(),
        [
            "name \"Ore line\"",
            "",
            "every 20 ticks do",
            "    input 64 iron_ore from chest top side",
            "    output fluid::minecraft:lava to each furnace",
            "    if a has > 0 iron_ingot then",
            "    end",
            "end",
        ]
        .join("\n")
    );
}

#[test]
fn test_invalid_condition_quantity() {
    let mut editor = ProgramEditor::new();
    let condition = ConditionBuilder {
        quantity: String::new(),
        ..ConditionBuilder::default()
    };
    assert!(matches!(
        editor.add_if(&condition),
        Err(EditorError::InvalidNumericField(_))
    ));
    assert!(editor.program().triggers[0].statements.is_empty());
}

#[test]
fn test_move_statements() {
    let mut editor = ProgramEditor::new();
    editor.push_statement(Statement::input("a")).unwrap();
    editor.push_statement(Statement::output("b")).unwrap();
    editor.push_statement(Statement::forget_all()).unwrap();

    assert!(!editor.move_statement_up(0).unwrap());
    assert!(!editor.move_statement_down(2).unwrap());

    assert!(editor.move_statement_up(2).unwrap());
    assert!(editor.code().ends_with("    input from a\n    forget\n    output to b\nend"));

    assert!(editor.move_statement_down(0).unwrap());
    assert!(editor.code().ends_with("    forget\n    input from a\n    output to b\nend"));

    assert!(matches!(
        editor.move_statement_up(7),
        Err(EditorError::StatementNotFound(7))
    ));
}

#[test]
fn test_remove_statement() {
    let mut editor = ProgramEditor::new();
    editor.push_statement(Statement::input("a")).unwrap();

    let removed = editor.remove_statement(0).unwrap();
    assert_eq!(removed, Statement::input("a"));
    assert!(matches!(
        editor.remove_statement(0),
        Err(EditorError::StatementNotFound(0))
    ));
}

#[test]
fn test_triggers_are_selected_on_add() {
    let mut editor = ProgramEditor::new();
    let index = editor.add_trigger(TriggerSettings::redstone_pulse());
    assert_eq!(index, 1);
    assert_eq!(editor.selected_index(), Some(1));

    editor.push_statement(Statement::output("lamp")).unwrap();
    assert!(editor
        .code()
        .ends_with("every redstone pulse do\n    output to lamp\nend"));

    editor.remove_selected_trigger().unwrap();
    assert_eq!(editor.selected_index(), Some(0));

    editor.remove_selected_trigger().unwrap();
    assert_eq!(editor.selected_index(), None);
    assert!(matches!(
        editor.remove_selected_trigger(),
        Err(EditorError::NoActiveTrigger)
    ));
}

#[test]
fn test_update_selected_trigger_keeps_statements() {
    let mut editor = ProgramEditor::new();
    editor.push_statement(Statement::input("a")).unwrap();

    let mut settings = TriggerSettings::every(2, TimeUnit::Seconds);
    settings.global = true;
    settings.offset = 3;
    editor.update_selected_trigger(settings).unwrap();

    assert!(editor
        .code()
        .ends_with("every 2 global + 3 seconds do\n    input from a\nend"));
}

#[test]
fn test_load_template_replaces_program() {
    let mut editor = ProgramEditor::new();
    editor.push_statement(Statement::forget_all()).unwrap();

    editor.load_template(Template::SimpleMove);
    assert_eq!(
        editor.code(),
        "name \"简单物品移动\"\n\nevery 20 ticks do\n    input from a\n    output to b\nend"
    );
    assert_eq!(editor.selected_index(), Some(0));
    assert_eq!(editor.budget_status().count, editor.code().chars().count());
}

#[test]
fn test_export_writes_code_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("program.sfm");

    let mut editor = ProgramEditor::new();
    editor.load_template(Template::Sorting);
    editor.export(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), editor.code());
}

#[test]
fn test_export_to_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("out.sfm");

    let err = WizardEditor::new().export(&path).unwrap_err();
    assert!(matches!(err, EditorError::Io { .. }));
}

#[test]
fn test_graph_session_edits() {
    let mut editor = GraphEditor::new();
    let trigger = editor.selected_trigger().unwrap();
    let a = trigger.node_by_label("a").unwrap().id;
    let b = trigger.node_by_label("b").unwrap().id;

    let c = editor.add_node().unwrap();
    assert!(editor.connect(a, c).unwrap());
    assert!(!editor.connect(a, c).unwrap());
    assert!(!editor.connect(c, c).unwrap());

    editor
        .update_node(c, |node| {
            node.set_resource(ResourceKind::Energy, "forge:energy");
        })
        .unwrap();

    assert_eq!(
        editor.code(),
        "every 20 ticks do\n  input from a\n  output to b\n  output fe::forge:energy to c\nend"
    );

    assert!(editor.reverse_connection(a, b).unwrap());
    assert!(editor.code().starts_with("every 20 ticks do\n  input from b\n  output to a\n"));

    editor.remove_node(a).unwrap();
    assert!(editor.selected_trigger().unwrap().connections().is_empty());
    assert_eq!(editor.code(), sfm_graph::EMPTY_GRAPH_PLACEHOLDER);
}

#[test]
fn test_graph_update_trigger() {
    let mut editor = GraphEditor::new();
    editor
        .update_trigger(0, |trigger| {
            trigger.name = "Lamps".to_string();
            trigger.kind = sfm_graph::GraphTriggerKind::RedstonePulse;
        })
        .unwrap();

    assert!(editor.code().starts_with("every redstone pulse do\n"));
    assert!(matches!(
        editor.update_trigger(4, |_| {}),
        Err(EditorError::TriggerNotFound(4))
    ));
}

#[test]
fn test_graph_update_trigger_zero_interval() {
    let mut editor = GraphEditor::new();
    editor
        .update_trigger(0, |trigger| trigger.tick_interval = 0)
        .unwrap();

    assert_eq!(editor.triggers()[0].tick_interval, 1);
    assert!(editor.code().starts_with("every 1 ticks do\n"));
}

#[test]
fn test_graph_remove_connection() {
    let mut editor = GraphEditor::new();
    let trigger = editor.selected_trigger().unwrap();
    let a = trigger.nodes()[0].id;
    let b = trigger.nodes()[1].id;

    assert!(editor.remove_connection(a, b).unwrap());
    assert!(!editor.remove_connection(a, b).unwrap());
    assert_eq!(editor.code(), sfm_graph::EMPTY_GRAPH_PLACEHOLDER);
}

#[test]
fn test_wizard_session() {
    let mut editor = WizardEditor::new();
    editor.add_target();
    editor
        .update_target(1, |entry| {
            entry.label = "c".to_string();
            entry.quantity = "32".to_string();
        })
        .unwrap();
    editor
        .update_source(0, |entry| {
            entry.kind = ResourceKind::Item;
            entry.resource_id = "cobblestone".to_string();
        })
        .unwrap();

    assert_eq!(
        editor.code(),
        "EVERY 20 TICKS DO\n  INPUT cobblestone FROM a\n  OUTPUT TO b\n  OUTPUT 32 TO c\nEND\n"
    );
}
