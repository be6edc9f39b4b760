use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::deck::{
    Card, Deck, DeckSummary, DeckWithCardCount, UpdateCardRequest, UpdateDeckRequest,
};
use crate::repository::DeckRepository;

/// In-memory [`DeckRepository`]: a `Vec<Deck>` behind an async RwLock.
/// Data lives for the process lifetime only. Every mutation runs to
/// completion while the write guard is held, with no await point inside, so
/// cascade deletes and timestamp bumps are atomic under the cooperative
/// runtime.
#[derive(Default)]
pub struct InMemoryRepository {
    decks: RwLock<Vec<Deck>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load prebuilt decks at startup. Not part of the trait; only the
    /// in-memory store has anything to seed.
    pub async fn seed(&self, decks: Vec<Deck>) {
        let mut store = self.decks.write().await;
        let card_total: usize = decks.iter().map(|d| d.cards.len()).sum();
        store.extend(decks);
        tracing::info!(decks = store.len(), cards = card_total, "Seeded demo data");
    }
}

fn deck_mut<'a>(decks: &'a mut [Deck], deck_id: &str) -> Result<&'a mut Deck, AppError> {
    decks
        .iter_mut()
        .find(|d| d.id == deck_id)
        .ok_or(AppError::NotFound)
}

#[async_trait]
impl DeckRepository for InMemoryRepository {
    async fn list_decks(&self) -> Result<Vec<DeckSummary>, AppError> {
        let decks = self.decks.read().await;
        tracing::debug!(count = decks.len(), "store: list decks");
        Ok(decks.iter().map(DeckSummary::from).collect())
    }

    async fn create_deck(
        &self,
        title: &str,
        description: Option<String>,
    ) -> Result<DeckSummary, AppError> {
        if title.trim().is_empty() {
            return Err(AppError::Validation("Title is required".into()));
        }

        let now = Utc::now();
        let deck = Deck {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description,
            cards: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        let summary = DeckSummary::from(&deck);

        let mut decks = self.decks.write().await;
        tracing::debug!(deck_id = %deck.id, "store: insert deck");
        decks.push(deck);

        Ok(summary)
    }

    async fn get_deck(&self, deck_id: &str) -> Result<DeckWithCardCount, AppError> {
        let decks = self.decks.read().await;
        let deck = decks
            .iter()
            .find(|d| d.id == deck_id)
            .ok_or(AppError::NotFound)?;
        tracing::debug!(deck_id, cards = deck.cards.len(), "store: deck found");
        Ok(DeckWithCardCount::from(deck.clone()))
    }

    async fn update_deck(
        &self,
        deck_id: &str,
        patch: UpdateDeckRequest,
    ) -> Result<DeckSummary, AppError> {
        if matches!(&patch.title, Some(t) if t.trim().is_empty()) {
            return Err(AppError::Validation("Title cannot be empty".into()));
        }

        let mut decks = self.decks.write().await;
        let deck = deck_mut(&mut decks, deck_id)?;

        if let Some(title) = patch.title {
            deck.title = title;
        }
        if let Some(description) = patch.description {
            deck.description = Some(description);
        }
        deck.updated_at = Utc::now();

        tracing::debug!(deck_id, "store: deck updated");
        Ok(DeckSummary::from(&*deck))
    }

    async fn delete_deck(&self, deck_id: &str) -> Result<(), AppError> {
        let mut decks = self.decks.write().await;
        let index = decks
            .iter()
            .position(|d| d.id == deck_id)
            .ok_or(AppError::NotFound)?;

        // Cards are owned by the deck, so one removal is the whole cascade.
        let removed = decks.remove(index);
        tracing::debug!(deck_id, cards = removed.cards.len(), "store: deck deleted");
        Ok(())
    }

    async fn list_cards(&self, deck_id: &str) -> Result<Vec<Card>, AppError> {
        let decks = self.decks.read().await;
        let deck = decks
            .iter()
            .find(|d| d.id == deck_id)
            .ok_or(AppError::NotFound)?;
        Ok(deck.cards.clone())
    }

    async fn add_card(&self, deck_id: &str, front: &str, back: &str) -> Result<Deck, AppError> {
        if front.trim().is_empty() {
            return Err(AppError::Validation("Front is required".into()));
        }
        if back.trim().is_empty() {
            return Err(AppError::Validation("Back is required".into()));
        }

        let mut decks = self.decks.write().await;
        let deck = deck_mut(&mut decks, deck_id)?;

        let card = Card {
            id: Uuid::new_v4().to_string(),
            front: front.to_string(),
            back: back.to_string(),
        };
        tracing::debug!(deck_id, card_id = %card.id, "store: card added");
        deck.cards.push(card);
        deck.updated_at = Utc::now();

        Ok(deck.clone())
    }

    async fn update_card(
        &self,
        deck_id: &str,
        card_id: &str,
        patch: UpdateCardRequest,
    ) -> Result<(Deck, Card), AppError> {
        if matches!(&patch.front, Some(f) if f.trim().is_empty()) {
            return Err(AppError::Validation("Front cannot be empty".into()));
        }
        if matches!(&patch.back, Some(b) if b.trim().is_empty()) {
            return Err(AppError::Validation("Back cannot be empty".into()));
        }

        let mut decks = self.decks.write().await;
        let deck = deck_mut(&mut decks, deck_id)?;
        let card = deck
            .cards
            .iter_mut()
            .find(|c| c.id == card_id)
            .ok_or(AppError::NotFound)?;

        if let Some(front) = patch.front {
            card.front = front;
        }
        if let Some(back) = patch.back {
            card.back = back;
        }
        let card = card.clone();
        deck.updated_at = Utc::now();

        tracing::debug!(deck_id, card_id, "store: card updated");
        Ok((deck.clone(), card))
    }

    async fn remove_card(&self, deck_id: &str, card_id: &str) -> Result<Deck, AppError> {
        let mut decks = self.decks.write().await;
        let deck = deck_mut(&mut decks, deck_id)?;
        let index = deck
            .cards
            .iter()
            .position(|c| c.id == card_id)
            .ok_or(AppError::NotFound)?;

        deck.cards.remove(index);
        deck.updated_at = Utc::now();

        tracing::debug!(deck_id, card_id, "store: card removed");
        Ok(deck.clone())
    }

    async fn update_card_by_id(
        &self,
        card_id: &str,
        patch: UpdateCardRequest,
    ) -> Result<(Deck, Card), AppError> {
        let deck_id = {
            let decks = self.decks.read().await;
            decks
                .iter()
                .find(|d| d.cards.iter().any(|c| c.id == card_id))
                .map(|d| d.id.clone())
                .ok_or(AppError::NotFound)?
        };
        self.update_card(&deck_id, card_id, patch).await
    }

    async fn remove_card_by_id(&self, card_id: &str) -> Result<Deck, AppError> {
        let deck_id = {
            let decks = self.decks.read().await;
            decks
                .iter()
                .find(|d| d.cards.iter().any(|c| c.id == card_id))
                .map(|d| d.id.clone())
                .ok_or(AppError::NotFound)?
        };
        self.remove_card(&deck_id, card_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo_with_deck() -> (InMemoryRepository, String) {
        let repo = InMemoryRepository::new();
        let deck = repo.create_deck("Math", None).await.unwrap();
        (repo, deck.id)
    }

    #[tokio::test]
    async fn new_deck_has_zero_cards() {
        let (repo, deck_id) = repo_with_deck().await;
        let deck = repo.get_deck(&deck_id).await.unwrap();
        assert_eq!(deck.card_count, 0);
        assert!(deck.deck.updated_at >= deck.deck.created_at);
    }

    #[tokio::test]
    async fn create_deck_rejects_blank_title() {
        let repo = InMemoryRepository::new();
        let err = repo.create_deck("   ", None).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("Title")));
    }

    #[tokio::test]
    async fn card_mutations_never_move_updated_at_backwards() {
        let (repo, deck_id) = repo_with_deck().await;
        let mut last = repo.get_deck(&deck_id).await.unwrap().deck.updated_at;

        let deck = repo.add_card(&deck_id, "2+2?", "4").await.unwrap();
        assert!(deck.updated_at >= last);
        last = deck.updated_at;
        let card_id = deck.cards[0].id.clone();

        let (deck, _) = repo
            .update_card(
                &deck_id,
                &card_id,
                UpdateCardRequest {
                    front: Some("3+3?".into()),
                    back: Some("6".into()),
                },
            )
            .await
            .unwrap();
        assert!(deck.updated_at >= last);
        last = deck.updated_at;

        let deck = repo.remove_card(&deck_id, &card_id).await.unwrap();
        assert!(deck.updated_at >= last);
        assert!(deck.cards.is_empty());
    }

    #[tokio::test]
    async fn delete_deck_cascades() {
        let (repo, deck_id) = repo_with_deck().await;
        repo.add_card(&deck_id, "front", "back").await.unwrap();

        repo.delete_deck(&deck_id).await.unwrap();

        assert!(matches!(
            repo.get_deck(&deck_id).await.unwrap_err(),
            AppError::NotFound
        ));
        assert!(matches!(
            repo.list_cards(&deck_id).await.unwrap_err(),
            AppError::NotFound
        ));
        assert!(matches!(
            repo.add_card(&deck_id, "a", "b").await.unwrap_err(),
            AppError::NotFound
        ));
    }

    #[tokio::test]
    async fn delete_unknown_deck_is_not_found() {
        let repo = InMemoryRepository::new();
        assert!(matches!(
            repo.delete_deck("xyz").await.unwrap_err(),
            AppError::NotFound
        ));
    }

    #[tokio::test]
    async fn update_deck_applies_only_provided_fields() {
        let (repo, deck_id) = repo_with_deck().await;
        let updated = repo
            .update_deck(
                &deck_id,
                UpdateDeckRequest {
                    title: None,
                    description: Some("numbers".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Math");
        assert_eq!(updated.description.as_deref(), Some("numbers"));

        let err = repo
            .update_deck(
                &deck_id,
                UpdateDeckRequest {
                    title: Some("".into()),
                    description: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn card_lookup_by_id_searches_all_decks() {
        let (repo, first_id) = repo_with_deck().await;
        repo.add_card(&first_id, "q1", "a1").await.unwrap();

        let second = repo.create_deck("Other", None).await.unwrap();
        let deck = repo.add_card(&second.id, "q2", "a2").await.unwrap();
        let card_id = deck.cards[0].id.clone();

        let (owner, card) = repo
            .update_card_by_id(
                &card_id,
                UpdateCardRequest {
                    front: Some("q2 revised".into()),
                    back: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(owner.id, second.id);
        assert_eq!(card.front, "q2 revised");
        assert_eq!(card.back, "a2");

        let owner = repo.remove_card_by_id(&card_id).await.unwrap();
        assert_eq!(owner.id, second.id);
        assert!(owner.cards.is_empty());

        assert!(matches!(
            repo.remove_card_by_id(&card_id).await.unwrap_err(),
            AppError::NotFound
        ));
    }
}
