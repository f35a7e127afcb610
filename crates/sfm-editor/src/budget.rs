//! Advisory size budget for generated code

use tracing::{debug, warn};

/// Character budget of a program on the target device
pub const MAX_CHARACTERS: usize = 32300;

/// Size of generated code relative to the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetStatus {
    pub count: usize,
    pub max: usize,
    /// Above 90% of the budget
    pub warning: bool,
}

impl BudgetStatus {
    /// Display text, e.g. `1024 / 32300`
    pub fn text(&self) -> String {
        format!("{} / {}", self.count, self.max)
    }

    pub fn is_over(&self) -> bool {
        self.count > self.max
    }
}

/// Measures generated code against a character budget.
///
/// The budget never blocks generation or export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeBudget {
    max: usize,
}

impl CodeBudget {
    pub fn new(max: usize) -> Self {
        Self { max }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Count characters (Unicode scalar values) of `code`
    pub fn measure(&self, code: &str) -> BudgetStatus {
        let count = code.chars().count();
        BudgetStatus {
            count,
            max: self.max,
            warning: count * 10 > self.max * 9,
        }
    }
}

impl Default for CodeBudget {
    fn default() -> Self {
        Self::new(MAX_CHARACTERS)
    }
}

/// Generated text of an edit session and its last measurement
#[derive(Debug, Clone)]
pub(crate) struct GeneratedCode {
    budget: CodeBudget,
    code: String,
    status: BudgetStatus,
}

impl GeneratedCode {
    pub(crate) fn new(budget: CodeBudget) -> Self {
        Self {
            budget,
            code: String::new(),
            status: budget.measure(""),
        }
    }

    pub(crate) fn code(&self) -> &str {
        &self.code
    }

    pub(crate) fn status(&self) -> BudgetStatus {
        self.status
    }

    /// Replace the text and re-measure it. Crossing the warning threshold is
    /// logged once per crossing.
    pub(crate) fn replace(&mut self, source: &str, code: String) {
        let was_warning = self.status.warning;
        self.status = self.budget.measure(&code);
        self.code = code;

        debug!("Regenerated {} code ({})", source, self.status.text());
        if self.status.warning && !was_warning {
            warn!(
                "Generated {} code is close to the size budget ({})",
                source,
                self.status.text()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_code() {
        let status = CodeBudget::default().measure("");
        assert_eq!(status.count, 0);
        assert!(!status.warning);
        assert_eq!(status.text(), "0 / 32300");
    }

    #[test]
    fn test_warning_threshold() {
        let budget = CodeBudget::new(100);
        assert!(!budget.measure(&"x".repeat(90)).warning);
        assert!(budget.measure(&"x".repeat(91)).warning);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let status = CodeBudget::default().measure("简单物品移动");
        assert_eq!(status.count, 6);
    }

    #[test]
    fn test_over_budget_is_advisory() {
        let status = CodeBudget::new(4).measure("hello");
        assert!(status.is_over());
        assert!(status.warning);
    }

    #[test]
    fn test_generated_code_tracks_status() {
        let mut generated = GeneratedCode::new(CodeBudget::new(10));
        generated.replace("test", "short".to_string());
        assert_eq!(generated.code(), "short");
        assert!(!generated.status().warning);

        generated.replace("test", "much longer text".to_string());
        assert!(generated.status().warning);
        assert_eq!(generated.status().count, 16);
    }
}
