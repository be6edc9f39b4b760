use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::deck::{Card, Deck, UpdateCardRequest};

/// Card in the legacy wire shape: `question`/`answer` field names and a
/// `deckId` back-reference. Older clients still speak this; the store only
/// ever holds the canonical [`Card`], and this adapter translates at the
/// route boundary. The timestamps are the owning deck's.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: String,
    pub deck_id: String,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Flashcard {
    pub fn from_card(deck: &Deck, card: &Card) -> Self {
        Self {
            id: card.id.clone(),
            deck_id: deck.id.clone(),
            question: card.front.clone(),
            answer: card.back.clone(),
            created_at: deck.created_at,
            updated_at: deck.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateFlashcardRequest {
    pub question: String,
    pub answer: String,
}

impl CreateFlashcardRequest {
    /// Legacy clients expect messages naming their own field names, so this
    /// is checked before translating to the canonical shape.
    pub fn validate(&self) -> Result<(), String> {
        if self.question.trim().is_empty() {
            return Err("Question is required".into());
        }
        if self.answer.trim().is_empty() {
            return Err("Answer is required".into());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateFlashcardRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl UpdateFlashcardRequest {
    pub fn validate(&self) -> Result<(), String> {
        if matches!(&self.question, Some(q) if q.trim().is_empty()) {
            return Err("Question cannot be empty".into());
        }
        if matches!(&self.answer, Some(a) if a.trim().is_empty()) {
            return Err("Answer cannot be empty".into());
        }
        Ok(())
    }

    pub fn into_card_patch(self) -> UpdateCardRequest {
        UpdateCardRequest {
            front: self.question,
            back: self.answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn from_card_borrows_deck_timestamps() {
        let now = Utc::now();
        let deck = Deck {
            id: "d1".into(),
            title: "Deck".into(),
            description: None,
            cards: vec![],
            created_at: now,
            updated_at: now,
        };
        let card = Card {
            id: "c1".into(),
            front: "What is hoisting?".into(),
            back: "Moving declarations to the top of scope".into(),
        };

        let fc = Flashcard::from_card(&deck, &card);
        assert_eq!(fc.deck_id, "d1");
        assert_eq!(fc.question, card.front);
        assert_eq!(fc.answer, card.back);
        assert_eq!(fc.created_at, now);
    }

    #[test]
    fn create_validate_names_the_missing_field() {
        let req = CreateFlashcardRequest {
            question: "  ".into(),
            answer: "ok".into(),
        };
        assert_eq!(req.validate().unwrap_err(), "Question is required");

        let req = CreateFlashcardRequest {
            question: "ok".into(),
            answer: String::new(),
        };
        assert_eq!(req.validate().unwrap_err(), "Answer is required");
    }

    #[test]
    fn update_validate_allows_absent_fields() {
        let req = UpdateFlashcardRequest {
            question: None,
            answer: None,
        };
        assert!(req.validate().is_ok());

        let req = UpdateFlashcardRequest {
            question: Some(String::new()),
            answer: None,
        };
        assert_eq!(req.validate().unwrap_err(), "Question cannot be empty");
    }
}
