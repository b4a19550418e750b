use serde::{Deserialize, Serialize};

/// A single issue reported by the grammar service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarFinding {
    /// Rule category identifier (e.g. `GRAMMAR`, `TYPOS`)
    pub category_id: String,
    /// Human-readable explanation
    pub message: String,
    /// Suggested replacements, best first
    pub replacements: Vec<String>,
    /// Excerpt of the text surrounding the issue
    pub context: String,
}

/// Filtered, formatted grammar findings ready for a report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarSummary {
    /// Number of grammar/syntax findings
    pub count: usize,
    /// Formatted findings, one block per issue
    pub issues: String,
}
