use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single question/answer pair. Cards only exist inside a deck and carry
/// no timestamps of their own; mutating a card bumps the owning deck's
/// `updated_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub front: String,
    pub back: String,
}

/// A deck and the cards it owns. Deleting a deck deletes its cards with it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cards: Vec<Card>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Deck {
    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }
}

/// Deck as listed at the top level: the card list is omitted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSummary {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Deck> for DeckSummary {
    fn from(deck: &Deck) -> Self {
        Self {
            id: deck.id.clone(),
            title: deck.title.clone(),
            description: deck.description.clone(),
            created_at: deck.created_at,
            updated_at: deck.updated_at,
        }
    }
}

/// Single-deck response: the full deck plus a derived card count.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckWithCardCount {
    #[serde(flatten)]
    pub deck: Deck,
    pub card_count: usize,
}

impl From<Deck> for DeckWithCardCount {
    fn from(deck: Deck) -> Self {
        let card_count = deck.cards.len();
        Self { deck, card_count }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateDeckRequest {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateDeckRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCardRequest {
    pub front: String,
    pub back: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCardRequest {
    pub front: Option<String>,
    pub back: Option<String>,
}
