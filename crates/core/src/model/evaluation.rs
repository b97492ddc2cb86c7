use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::scenario::{Scenario, split_paragraphs};

/// Level assigned when the evaluator's reply carries no `LEVEL:` marker.
pub const FALLBACK_LEVEL: &str = "Mid Designer";

static LEVEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"LEVEL:\s*(.+)").expect("LEVEL pattern should compile"));

static SUMMARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"SUMMARY:\s*([\s\S]+)").expect("SUMMARY pattern should compile")
});

//
// ─── QUESTION RESULT ───────────────────────────────────────────────────────────
//

/// One answered scenario together with the feedback it received.
///
/// This is the element shape of the `questionsAndAnswers` batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub scenario: Scenario,
    pub answer: String,
    pub feedback: String,
}

//
// ─── SKILL LEVEL ───────────────────────────────────────────────────────────────
//

/// The four levels the evaluator chooses between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkillLevel {
    Junior,
    Mid,
    Senior,
    Lead,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Junior,
        SkillLevel::Mid,
        SkillLevel::Senior,
        SkillLevel::Lead,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Junior => "Junior Designer",
            SkillLevel::Mid => "Mid Designer",
            SkillLevel::Senior => "Senior Designer",
            SkillLevel::Lead => "Lead Designer",
        }
    }

    /// Matches free text on the level keyword. More senior keywords win.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        if label.contains("Lead") {
            Some(SkillLevel::Lead)
        } else if label.contains("Senior") {
            Some(SkillLevel::Senior)
        } else if label.contains("Mid") {
            Some(SkillLevel::Mid)
        } else if label.contains("Junior") {
            Some(SkillLevel::Junior)
        } else {
            None
        }
    }

    #[must_use]
    pub fn badge_color(level: Option<Self>) -> &'static str {
        match level {
            Some(SkillLevel::Lead) => "#28a745",
            Some(SkillLevel::Senior) => "#17a2b8",
            Some(SkillLevel::Mid) => "#ffc107",
            Some(SkillLevel::Junior) | None => "#dc3545",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── OVERALL EVALUATION ────────────────────────────────────────────────────────
//

/// Aggregate assessment across all answered scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallEvaluation {
    pub level: String,
    pub summary: String,
}

/// Result of parsing evaluator text, including which markers were absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEvaluation {
    pub evaluation: OverallEvaluation,
    pub missing_level: bool,
    pub missing_summary: bool,
}

impl ParsedEvaluation {
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.missing_level || self.missing_summary
    }
}

impl OverallEvaluation {
    #[must_use]
    pub fn new(level: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            summary: summary.into(),
        }
    }

    /// Extract `LEVEL:` and `SUMMARY:` sections from free text.
    ///
    /// Falls back to [`FALLBACK_LEVEL`] and the whole text when markers are missing.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::parse_detailed(text).evaluation
    }

    #[must_use]
    pub fn parse_detailed(text: &str) -> ParsedEvaluation {
        let level = LEVEL_RE
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string());
        let summary = SUMMARY_RE
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string());

        ParsedEvaluation {
            missing_level: level.is_none(),
            missing_summary: summary.is_none(),
            evaluation: Self {
                level: level.unwrap_or_else(|| FALLBACK_LEVEL.to_string()),
                summary: summary.unwrap_or_else(|| text.to_string()),
            },
        }
    }

    #[must_use]
    pub fn skill_level(&self) -> Option<SkillLevel> {
        SkillLevel::from_label(&self.level)
    }

    #[must_use]
    pub fn summary_paragraphs(&self) -> Vec<&str> {
        split_paragraphs(&self.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_and_summary() {
        let parsed = OverallEvaluation::parse("LEVEL: Senior Designer\n\nSUMMARY: Solid work.");
        assert_eq!(parsed, OverallEvaluation::new("Senior Designer", "Solid work."));
    }

    #[test]
    fn summary_spans_multiple_paragraphs() {
        let text = "Preamble\nLEVEL: Lead Designer\n\nSUMMARY:\nFirst.\n\nSecond.\n";
        let parsed = OverallEvaluation::parse(text);
        assert_eq!(parsed.level, "Lead Designer");
        assert_eq!(parsed.summary, "First.\n\nSecond.");
        assert_eq!(parsed.summary_paragraphs(), vec!["First.", "Second."]);
    }

    #[test]
    fn missing_level_falls_back() {
        let parsed = OverallEvaluation::parse_detailed("SUMMARY: Good instincts.");
        assert!(parsed.missing_level);
        assert!(!parsed.missing_summary);
        assert_eq!(parsed.evaluation.level, FALLBACK_LEVEL);
        assert_eq!(parsed.evaluation.summary, "Good instincts.");
    }

    #[test]
    fn missing_markers_use_raw_text() {
        let raw = "The candidate wrote very little.\n";
        let parsed = OverallEvaluation::parse_detailed(raw);
        assert!(parsed.is_degraded());
        assert_eq!(parsed.evaluation.level, "Mid Designer");
        assert_eq!(parsed.evaluation.summary, raw);
    }

    #[test]
    fn skill_level_matches_keywords() {
        assert_eq!(SkillLevel::from_label("Lead Designer"), Some(SkillLevel::Lead));
        assert_eq!(SkillLevel::from_label("Senior Designer"), Some(SkillLevel::Senior));
        assert_eq!(SkillLevel::from_label("Mid Designer"), Some(SkillLevel::Mid));
        assert_eq!(SkillLevel::from_label("Junior Designer"), Some(SkillLevel::Junior));
        assert_eq!(SkillLevel::from_label("Wizard"), None);
        assert_eq!(SkillLevel::badge_color(None), "#dc3545");
        assert_eq!(SkillLevel::badge_color(Some(SkillLevel::Senior)), "#17a2b8");
    }

    #[test]
    fn every_label_round_trips() {
        for level in SkillLevel::ALL {
            assert_eq!(SkillLevel::from_label(level.label()), Some(level));
        }
    }
}
