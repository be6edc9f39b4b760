use async_trait::async_trait;

use crate::error::AppError;
use crate::models::deck::{
    Card, Deck, DeckSummary, DeckWithCardCount, UpdateCardRequest, UpdateDeckRequest,
};

/// Authoritative store of decks and their cards. All mutation goes through
/// here so the cascade and `updated_at` invariants hold in one place, and so
/// a persistent backend can be swapped in without touching the handlers.
#[async_trait]
pub trait DeckRepository: Send + Sync {
    async fn list_decks(&self) -> Result<Vec<DeckSummary>, AppError>;
    async fn create_deck(
        &self,
        title: &str,
        description: Option<String>,
    ) -> Result<DeckSummary, AppError>;
    async fn get_deck(&self, deck_id: &str) -> Result<DeckWithCardCount, AppError>;
    async fn update_deck(
        &self,
        deck_id: &str,
        patch: UpdateDeckRequest,
    ) -> Result<DeckSummary, AppError>;
    /// Removes the deck and every card it owns in one step.
    async fn delete_deck(&self, deck_id: &str) -> Result<(), AppError>;

    async fn list_cards(&self, deck_id: &str) -> Result<Vec<Card>, AppError>;
    async fn add_card(&self, deck_id: &str, front: &str, back: &str) -> Result<Deck, AppError>;
    async fn update_card(
        &self,
        deck_id: &str,
        card_id: &str,
        patch: UpdateCardRequest,
    ) -> Result<(Deck, Card), AppError>;
    async fn remove_card(&self, deck_id: &str, card_id: &str) -> Result<Deck, AppError>;

    // Legacy routes address a card by its id alone, so these search every
    // deck for the owner.
    async fn update_card_by_id(
        &self,
        card_id: &str,
        patch: UpdateCardRequest,
    ) -> Result<(Deck, Card), AppError>;
    async fn remove_card_by_id(&self, card_id: &str) -> Result<Deck, AppError>;
}
