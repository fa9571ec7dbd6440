use serde::{Deserialize, Serialize};

/// A card design: a named front/back markup pair with `{{field}}` placeholder
/// tokens, identified by an integer id. Read-only from the rendering
/// pipeline's perspective; rows are created and updated by administrative
/// seeding in the backend registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: i64,
    pub name: String,
    pub front_markup: String,
    pub back_markup: String,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Template {
    /// Returns the raw markup for the requested card side.
    pub fn markup_for(&self, side: CardSide) -> &str {
        match side {
            CardSide::Front => &self.front_markup,
            CardSide::Back => &self.back_markup,
        }
    }
}

/// Reduced catalog entry returned by the template listing endpoint and
/// consumed by the template picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSummary {
    pub id: i64,
    pub name: String,
    pub active: bool,
}

/// One of the two faces of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSide {
    Front,
    Back,
}

impl CardSide {
    /// Parses the path-parameter form (`"front"` / `"back"`).
    /// Anything else is a caller error and yields `None`.
    pub fn parse(value: &str) -> Option<CardSide> {
        match value {
            "front" => Some(CardSide::Front),
            "back" => Some(CardSide::Back),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardSide::Front => "front",
            CardSide::Back => "back",
        }
    }

    /// The side shown after a flip.
    pub fn flipped(&self) -> CardSide {
        match self {
            CardSide::Front => CardSide::Back,
            CardSide::Back => CardSide::Front,
        }
    }
}
