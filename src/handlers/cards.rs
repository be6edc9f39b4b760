use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppError;
use crate::models::deck::CreateCardRequest;
use crate::AppState;

/// GET /api/decks/:deck_id/cards — all cards of a deck, insertion order.
pub async fn list_cards(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(
        handler = "list_cards",
        deck_id = %deck_id,
        "Handler: GET /api/decks/:deck_id/cards"
    );

    let cards = state.repo.list_cards(&deck_id).await?;

    tracing::info!(handler = "list_cards", deck_id = %deck_id, count = cards.len(), status = 200, "Responding");
    Ok(Json(cards))
}

/// POST /api/decks/:deck_id/cards — append a card, respond with the updated
/// deck embedding it.
pub async fn add_card(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
    Json(body): Json<CreateCardRequest>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(
        handler = "add_card",
        deck_id = %deck_id,
        "Handler: POST /api/decks/:deck_id/cards"
    );

    tracing::debug!(handler = "add_card", "Dispatching to repo.add_card");
    let deck = state.repo.add_card(&deck_id, &body.front, &body.back).await?;

    tracing::info!(
        handler = "add_card",
        deck_id = %deck_id,
        card_count = deck.cards.len(),
        status = 201,
        "Responding: card added"
    );
    Ok((StatusCode::CREATED, Json(deck)))
}

/// DELETE /api/decks/:deck_id/cards/:card_id — remove one card, respond with
/// the updated deck.
pub async fn remove_card(
    State(state): State<AppState>,
    Path((deck_id, card_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(
        handler = "remove_card",
        deck_id = %deck_id,
        card_id = %card_id,
        "Handler: DELETE /api/decks/:deck_id/cards/:card_id"
    );

    let deck = state.repo.remove_card(&deck_id, &card_id).await?;

    tracing::info!(handler = "remove_card", deck_id = %deck_id, status = 200, "Responding: card removed");
    Ok(Json(deck))
}
