use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ids::ScenarioId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScenarioError {
    #[error("scenario id cannot be empty")]
    EmptyId,

    #[error("scenario title cannot be empty")]
    EmptyTitle,

    #[error("scenario text cannot be empty")]
    EmptyText,
}

//
// ─── CATEGORY / DIFFICULTY ─────────────────────────────────────────────────────
//

/// Thematic grouping of scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Business Pressure")]
    BusinessPressure,
    #[serde(rename = "Political/Organizational")]
    PoliticalOrganizational,
    #[serde(rename = "Ethical/Data Interpretation")]
    EthicalDataInterpretation,
}

impl Category {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::BusinessPressure => "Business Pressure",
            Category::PoliticalOrganizational => "Political/Organizational",
            Category::EthicalDataInterpretation => "Ethical/Data Interpretation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Seniority the scenario is pitched at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Mid,
    Senior,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Mid => "mid",
            Difficulty::Senior => "senior",
        }
    }
}

//
// ─── SCENARIO ──────────────────────────────────────────────────────────────────
//

/// An immutable workplace dilemma shown to the user.
///
/// Serializes to the wire shape `{id, title, category, difficulty, scenario}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    id: ScenarioId,
    title: String,
    category: Category,
    difficulty: Difficulty,
    #[serde(rename = "scenario")]
    text: String,
}

impl Scenario {
    /// Creates a validated scenario.
    ///
    /// # Errors
    ///
    /// Returns `ScenarioError` if the id, title or body text is blank.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: Category,
        difficulty: Difficulty,
        text: impl Into<String>,
    ) -> Result<Self, ScenarioError> {
        let id = id.into();
        let title = title.into();
        let text = text.into();
        if id.trim().is_empty() {
            return Err(ScenarioError::EmptyId);
        }
        if title.trim().is_empty() {
            return Err(ScenarioError::EmptyTitle);
        }
        if text.trim().is_empty() {
            return Err(ScenarioError::EmptyText);
        }

        Ok(Self {
            id: ScenarioId::new(id),
            title,
            category,
            difficulty,
            text,
        })
    }

    pub(crate) fn from_parts(
        id: ScenarioId,
        title: &str,
        category: Category,
        difficulty: Difficulty,
        text: &str,
    ) -> Self {
        Self {
            id,
            title: title.to_owned(),
            category,
            difficulty,
            text: text.to_owned(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &ScenarioId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Body text split on blank lines, each paragraph trimmed.
    #[must_use]
    pub fn paragraphs(&self) -> Vec<&str> {
        split_paragraphs(&self.text)
    }
}

/// Splits text on blank lines, dropping empty chunks.
#[must_use]
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}
