pub mod cards;
pub mod decks;
pub mod flashcards;
pub mod health;
