//! Backward-compatible alias surface. Older clients speak the flat
//! `question`/`answer` flashcard shape and address cards by id alone; these
//! handlers translate to and from the canonical deck/card model so the store
//! stays single-shaped.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::error::AppError;
use crate::models::flashcard::{CreateFlashcardRequest, Flashcard, UpdateFlashcardRequest};
use crate::AppState;

/// GET /api/decks/:deck_id/flashcards — the deck's cards in the legacy shape.
pub async fn list_flashcards(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(
        handler = "list_flashcards",
        deck_id = %deck_id,
        "Handler: GET /api/decks/:deck_id/flashcards"
    );

    let deck = state.repo.get_deck(&deck_id).await?.deck;
    let flashcards: Vec<Flashcard> = deck
        .cards
        .iter()
        .map(|card| Flashcard::from_card(&deck, card))
        .collect();

    tracing::info!(
        handler = "list_flashcards",
        deck_id = %deck_id,
        count = flashcards.len(),
        status = 200,
        "Responding"
    );
    Ok(Json(flashcards))
}

/// POST /api/decks/:deck_id/flashcards — add a card, respond with it in the
/// legacy shape.
pub async fn create_flashcard(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
    Json(body): Json<CreateFlashcardRequest>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(
        handler = "create_flashcard",
        deck_id = %deck_id,
        "Handler: POST /api/decks/:deck_id/flashcards"
    );

    // Validated here so the error names the legacy field, not "front"/"back".
    body.validate().map_err(AppError::Validation)?;

    tracing::debug!(handler = "create_flashcard", "Dispatching to repo.add_card");
    let deck = state
        .repo
        .add_card(&deck_id, &body.question, &body.answer)
        .await?;
    let card = deck
        .cards
        .last()
        .ok_or_else(|| AppError::Internal("card missing after add".into()))?;

    tracing::info!(
        handler = "create_flashcard",
        deck_id = %deck_id,
        card_id = %card.id,
        status = 201,
        "Responding: flashcard created"
    );
    Ok((StatusCode::CREATED, Json(Flashcard::from_card(&deck, card))))
}

/// PUT /api/flashcards/:card_id — update a card located by id alone.
pub async fn update_flashcard(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
    Json(body): Json<UpdateFlashcardRequest>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(
        handler = "update_flashcard",
        card_id = %card_id,
        "Handler: PUT /api/flashcards/:card_id"
    );

    body.validate().map_err(AppError::Validation)?;

    tracing::debug!(handler = "update_flashcard", "Dispatching to repo.update_card_by_id");
    let (deck, card) = state
        .repo
        .update_card_by_id(&card_id, body.into_card_patch())
        .await?;

    tracing::info!(
        handler = "update_flashcard",
        card_id = %card_id,
        deck_id = %deck.id,
        status = 200,
        "Responding: flashcard updated"
    );
    Ok(Json(Flashcard::from_card(&deck, &card)))
}

/// DELETE /api/flashcards/:card_id — remove a card located by id alone.
pub async fn delete_flashcard(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(
        handler = "delete_flashcard",
        card_id = %card_id,
        "Handler: DELETE /api/flashcards/:card_id"
    );

    let deck = state.repo.remove_card_by_id(&card_id).await?;

    tracing::info!(
        handler = "delete_flashcard",
        card_id = %card_id,
        deck_id = %deck.id,
        status = 200,
        "Responding: flashcard deleted"
    );
    Ok(Json(json!({ "success": true })))
}
