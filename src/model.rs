use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a recipe, used to route interactions back to a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub u32);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RecipeId {
    fn from(id: u32) -> Self {
        RecipeId(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Lowercase token, shown as badge text and used as its style class
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Exact, case-sensitive match on the token
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == token)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One instruction: either plain text or a titled group of nested steps.
///
/// Deserializes from a bare string or a `{ "text", "substeps" }` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Text(String),
    Group { text: String, substeps: Vec<Step> },
}

impl Step {
    pub fn text(&self) -> &str {
        match self {
            Step::Text(text) => text,
            Step::Group { text, .. } => text,
        }
    }
}

impl From<&str> for Step {
    fn from(text: &str) -> Self {
        Step::Text(text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    /// Preparation time in minutes
    pub time: u32,
    pub difficulty: Difficulty,
    pub description: String,
    pub category: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<Step>,
}
