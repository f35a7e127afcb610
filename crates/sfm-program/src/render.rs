//! Structured serializer
//!
//! Renders a [`Program`] as lower-case SFM script:
//!
//! ```text
//! name "<name>"
//!
//! every 20 ticks do
//!     input from a
//!     output to b
//! end
//! ```
//!
//! Rendering is a pure function of the model. Statements are rendered
//! recursively with the nesting depth passed down explicitly.

use sfm_core::{resolve, STRUCTURED_INDENT, WILDCARD};

use crate::program::{Program, Trigger, TriggerKind};
use crate::statement::{non_blank, IfStatement, Statement, Transfer};

/// Render a whole program.
///
/// Trigger blocks are separated by a blank line and trailing whitespace is
/// trimmed. A trigger with no statements still renders its header and `end`.
pub fn serialize(program: &Program) -> String {
    let mut out = String::new();

    if !program.name.trim().is_empty() {
        out.push_str(&format!("name \"{}\"\n\n", program.name));
    }

    for trigger in &program.triggers {
        out.push_str(&render_trigger(trigger));
        out.push_str("\n\n");
    }

    out.trim_end().to_string()
}

/// Render one trigger block, from header to closing `end`
pub fn render_trigger(trigger: &Trigger) -> String {
    let mut lines = vec![trigger_header(&trigger.kind)];
    for statement in &trigger.statements {
        render_statement(statement, 1, &mut lines);
    }
    lines.push("end".to_string());
    lines.join("\n")
}

/// Header line for a trigger kind
pub(crate) fn trigger_header(kind: &TriggerKind) -> String {
    match kind {
        TriggerKind::Scheduled(schedule) => {
            let mut parts = vec!["every".to_string()];

            if schedule.interval != 1 {
                parts.push(schedule.interval.to_string());
            }
            if schedule.global {
                parts.push("global".to_string());
            }
            if let Some(offset) = schedule.offset.filter(|o| *o > 0) {
                parts.push(format!("+ {offset}"));
            }

            parts.push(schedule.unit.keyword().to_string());
            parts.push("do".to_string());
            parts.join(" ")
        }
        TriggerKind::RedstonePulse => "every redstone pulse do".to_string(),
    }
}

/// Render a statement at `depth` into `lines`, one entry per output line
pub fn render_statement(statement: &Statement, depth: usize, lines: &mut Vec<String>) {
    let indent = STRUCTURED_INDENT.repeat(depth);

    match statement {
        Statement::Input(t) => lines.push(format!("{indent}{}", transfer_line("input", "from", t))),
        Statement::Output(t) => lines.push(format!("{indent}{}", transfer_line("output", "to", t))),
        Statement::If(s) => render_if(s, depth, lines),
        Statement::Forget(f) => match non_blank(&f.labels) {
            Some(labels) => lines.push(format!("{indent}forget {labels}")),
            None => lines.push(format!("{indent}forget")),
        },
    }
}

fn render_if(statement: &IfStatement, depth: usize, lines: &mut Vec<String>) {
    let indent = STRUCTURED_INDENT.repeat(depth);

    lines.push(format!("{indent}if {} then", statement.condition));
    for inner in &statement.then_branch {
        render_statement(inner, depth + 1, lines);
    }

    if !statement.else_branch.is_empty() {
        lines.push(format!("{indent}else"));
        for inner in &statement.else_branch {
            render_statement(inner, depth + 1, lines);
        }
    }

    lines.push(format!("{indent}end"));
}

/// Token line for an input or output, without indentation
fn transfer_line(keyword: &str, direction: &str, t: &Transfer) -> String {
    let mut parts = vec![keyword.to_string()];

    if let Some(quantity) = t.quantity {
        parts.push(quantity.to_string());
    }

    if let Some(retain) = &t.retain {
        if retain.each {
            parts.push(format!("retain {} each", retain.count));
        } else {
            parts.push(format!("retain {}", retain.count));
        }
    }

    let resource = resolve(t.kind, &t.resource_id);
    if resource != WILDCARD {
        parts.push(resource);
    }

    if let Some(except) = non_blank(&t.except) {
        parts.push(format!("except {except}"));
    }

    parts.push(direction.to_string());
    if t.each {
        parts.push("each".to_string());
    }
    parts.push(t.label.clone());

    if let Some(side) = t.side {
        parts.push(side.keyword().to_string());
        parts.push("side".to_string());
    }

    if let Some(slots) = non_blank(&t.slots) {
        parts.push(format!("slots {slots}"));
    }

    parts.join(" ")
}
