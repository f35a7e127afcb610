//! Wizard compiler
//!
//! Emits the upper-case dialect for one implicit scheduled trigger:
//!
//! ```text
//! EVERY 20 TICKS DO
//!   INPUT FROM a
//!   OUTPUT TO b
//! END
//! ```
//!
//! The resource filter comes before the quantity and the side clause reads
//! `SIDE <FACE>`. A blank item id writes no filter at all.

use sfm_core::{resolve_filter, FLAT_INDENT};

use crate::entry::WizardEntry;

/// Render the wizard trigger, sources first, then targets.
///
/// The result ends with a newline after `END`.
pub fn compile_wizard(
    tick_interval: u32,
    sources: &[WizardEntry],
    targets: &[WizardEntry],
) -> String {
    let mut out = format!("EVERY {tick_interval} TICKS DO\n");

    for source in sources {
        out.push_str(FLAT_INDENT);
        out.push_str(&entry_line("INPUT", "FROM", source));
        out.push('\n');
    }

    for target in targets {
        out.push_str(FLAT_INDENT);
        out.push_str(&entry_line("OUTPUT", "TO", target));
        out.push('\n');
    }

    out.push_str("END\n");
    out
}

/// Input or output line for one wizard row, without indentation
pub fn entry_line(keyword: &str, direction: &str, entry: &WizardEntry) -> String {
    let mut line = keyword.to_string();

    if let Some(resource) = resolve_filter(entry.kind, &entry.resource_id) {
        line.push(' ');
        line.push_str(&resource);
    }

    let quantity = entry.quantity.trim();
    if !quantity.is_empty() {
        line.push(' ');
        line.push_str(quantity);
    }

    line.push_str(&format!(" {direction} {}", entry.label));

    if let Some(side) = entry.side.keyword() {
        line.push_str(&format!(" SIDE {}", side.to_ascii_uppercase()));
    }

    line
}
