pub mod deck;
pub mod flashcard;
