//! SFM Editor
//!
//! Edit sessions for the three front-ends. Each session owns its model and
//! the script text generated from it; every mutating operation regenerates
//! the text synchronously, so [`ProgramEditor::code`] and friends always
//! reflect the current model.
//!
//! # Example
//!
//! ```
//! use sfm_editor::{ProgramEditor, TransferForm};
//!
//! let mut editor = ProgramEditor::new();
//! editor.add_input(&TransferForm::new("a")).unwrap();
//! editor.add_output(&TransferForm::new("b")).unwrap();
//!
//! assert!(editor.code().ends_with("    input from a\n    output to b\nend"));
//! assert!(!editor.budget_status().warning);
//! ```

pub mod budget;
pub mod error;
pub mod export;
pub mod graph_editor;
pub mod program_editor;
pub mod wizard_editor;

pub use budget::{BudgetStatus, CodeBudget, MAX_CHARACTERS};
pub use error::{EditorError, EditorResult};
pub use export::export_script;
pub use graph_editor::GraphEditor;
pub use program_editor::{ProgramEditor, TransferForm, TriggerSettings};
pub use wizard_editor::WizardEditor;
