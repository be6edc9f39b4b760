use std::fmt;

use rand::seq::SliceRandom;

use crate::models::deck::Card;

#[derive(Debug, PartialEq, Eq)]
pub enum SessionError {
    /// Starting a session on a deck with no cards.
    EmptyDeck,
    /// Answer recorded after the session finished. A correct caller never
    /// hits this; it is a bug on their side, not a retryable condition.
    SessionComplete,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::EmptyDeck => write!(f, "deck has no cards to study"),
            SessionError::SessionComplete => write!(f, "session is already complete"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Final tallies of a completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub total_cards: usize,
    pub correct_answers: u32,
    pub incorrect_answers: u32,
    /// Percentage of correct answers, rounded to the nearest integer.
    pub accuracy: u32,
}

/// One single-pass review run over a deck's cards.
///
/// The card sequence is a snapshot taken at start: edits to the deck after
/// that point do not affect a running session. Sessions are never persisted
/// and never shared between clients.
#[derive(Debug)]
pub struct StudySession {
    deck_id: String,
    cards: Vec<Card>,
    current_card_index: usize,
    correct_answers: u32,
    incorrect_answers: u32,
    completed: bool,
}

impl StudySession {
    /// Shuffles the given cards (Fisher-Yates via `SliceRandom`) and opens
    /// the session at the first card.
    pub fn start(deck_id: impl Into<String>, mut cards: Vec<Card>) -> Result<Self, SessionError> {
        if cards.is_empty() {
            return Err(SessionError::EmptyDeck);
        }
        cards.shuffle(&mut rand::thread_rng());

        Ok(Self {
            deck_id: deck_id.into(),
            cards,
            current_card_index: 0,
            correct_answers: 0,
            incorrect_answers: 0,
            completed: false,
        })
    }

    pub fn deck_id(&self) -> &str {
        &self.deck_id
    }

    /// The shuffled sequence, in review order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card under review, `None` once the session is complete.
    pub fn current_card(&self) -> Option<&Card> {
        if self.completed {
            return None;
        }
        self.cards.get(self.current_card_index)
    }

    pub fn current_card_index(&self) -> usize {
        self.current_card_index
    }

    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    pub fn incorrect_answers(&self) -> u32 {
        self.incorrect_answers
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Scores the current card and advances. The session becomes complete
    /// exactly when the cursor passes the last card.
    pub fn record_answer(&mut self, was_correct: bool) -> Result<(), SessionError> {
        if self.completed {
            return Err(SessionError::SessionComplete);
        }

        if was_correct {
            self.correct_answers += 1;
        } else {
            self.incorrect_answers += 1;
        }
        self.current_card_index += 1;

        if self.current_card_index == self.cards.len() {
            self.completed = true;
            tracing::debug!(
                deck_id = %self.deck_id,
                correct = self.correct_answers,
                incorrect = self.incorrect_answers,
                "Study session complete"
            );
        }

        Ok(())
    }

    /// Returns the session to its initial state, keeping the original
    /// shuffle order so a rerun walks the same sequence.
    pub fn restart(&mut self) {
        self.current_card_index = 0;
        self.correct_answers = 0;
        self.incorrect_answers = 0;
        self.completed = false;
    }

    /// Final tallies, available once the session is complete.
    pub fn summary(&self) -> Option<SessionSummary> {
        if !self.completed {
            return None;
        }
        let total = self.cards.len();
        let accuracy = (f64::from(self.correct_answers) / total as f64 * 100.0).round() as u32;
        Some(SessionSummary {
            total_cards: total,
            correct_answers: self.correct_answers,
            incorrect_answers: self.incorrect_answers,
            accuracy,
        })
    }
}
