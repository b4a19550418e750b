use std::fmt::Write;

use crate::types::{GrammarFinding, GrammarSummary};

/// Category LanguageTool assigns to spelling mistakes
pub const TYPOS_CATEGORY: &str = "TYPOS";

impl GrammarFinding {
    /// Whether this finding is a pure spelling issue
    pub fn is_spelling(&self) -> bool {
        self.category_id == TYPOS_CATEGORY
    }
}

/// Drop spelling findings and render the rest as numbered blocks
pub fn summarize(findings: &[GrammarFinding]) -> GrammarSummary {
    let mut issues = String::new();
    let mut count = 0;

    for finding in findings.iter().filter(|f| !f.is_spelling()) {
        count += 1;
        let _ = write!(
            issues,
            "Issue {count}:\n- Message: {}\n- Suggestion: {}\n- Context: {}\n",
            finding.message,
            finding.replacements.join(", "),
            finding.context,
        );
    }

    GrammarSummary { count, issues }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(category: &str, message: &str, replacements: &[&str], context: &str) -> GrammarFinding {
        GrammarFinding {
            category_id: category.to_owned(),
            message: message.to_owned(),
            replacements: replacements.iter().map(|r| (*r).to_owned()).collect(),
            context: context.to_owned(),
        }
    }

    #[test]
    fn no_findings_yields_empty_summary() {
        assert_eq!(summarize(&[]), GrammarSummary::default());
    }

    #[test]
    fn formats_each_finding_with_one_based_index() {
        let findings = [
            finding(
                "GRAMMAR",
                "Possible agreement error.",
                &["is", "was"],
                "He are going home.",
            ),
            finding("PUNCTUATION", "Missing comma.", &[","], "Well I think"),
        ];

        let summary = summarize(&findings);

        assert_eq!(summary.count, 2);
        assert_eq!(
            summary.issues,
            "Issue 1:\n\
             - Message: Possible agreement error.\n\
             - Suggestion: is, was\n\
             - Context: He are going home.\n\
             Issue 2:\n\
             - Message: Missing comma.\n\
             - Suggestion: ,\n\
             - Context: Well I think\n"
        );
    }

    #[test]
    fn spelling_findings_are_excluded_and_not_numbered() {
        let findings = [
            finding("TYPOS", "Possible spelling mistake.", &["hello"], "helo there"),
            finding("GRAMMAR", "Agreement error.", &["is"], "it are"),
            finding("TYPOS", "Possible spelling mistake.", &["world"], "wrld"),
        ];

        let summary = summarize(&findings);

        assert_eq!(summary.count, 1);
        assert!(summary.issues.starts_with("Issue 1:\n- Message: Agreement error.\n"));
        assert!(!summary.issues.contains("spelling"));
        assert!(!summary.issues.contains("Issue 2"));
    }

    #[test]
    fn only_spelling_findings_yield_empty_summary() {
        let findings = [
            finding("TYPOS", "Possible spelling mistake.", &[], "teh"),
            finding("TYPOS", "Possible spelling mistake.", &[], "adn"),
        ];

        assert_eq!(summarize(&findings), GrammarSummary::default());
    }

    #[test]
    fn finding_without_replacements_has_empty_suggestion() {
        let summary = summarize(&[finding("STYLE", "Wordy sentence.", &[], "in order to")]);
        assert!(summary.issues.contains("- Suggestion: \n"));
    }

    #[test]
    fn category_match_is_exact() {
        let typo_like = finding("typos", "Lowercase category.", &[], "x");
        assert!(!typo_like.is_spelling());
        assert_eq!(summarize(&[typo_like]).count, 1);
    }
}
