use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::error::AppError;
use crate::models::deck::{CreateDeckRequest, UpdateDeckRequest};
use crate::AppState;

/// GET /api/decks — list all decks, insertion order, card lists omitted.
pub async fn list_decks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!(handler = "list_decks", "Handler: GET /api/decks");

    let decks = state.repo.list_decks().await?;

    tracing::info!(handler = "list_decks", count = decks.len(), status = 200, "Responding");
    Ok(Json(decks))
}

/// POST /api/decks — create a deck with an empty card list.
pub async fn create_deck(
    State(state): State<AppState>,
    Json(body): Json<CreateDeckRequest>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(handler = "create_deck", title = %body.title, "Handler: POST /api/decks");

    tracing::debug!(handler = "create_deck", "Dispatching to repo.create_deck");
    let deck = state.repo.create_deck(&body.title, body.description).await?;

    tracing::info!(
        handler = "create_deck",
        deck_id = %deck.id,
        status = 201,
        "Responding: deck created"
    );
    Ok((StatusCode::CREATED, Json(deck)))
}

/// GET /api/decks/:deck_id — one deck plus its derived card count.
pub async fn get_deck(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(handler = "get_deck", deck_id = %deck_id, "Handler: GET /api/decks/:deck_id");

    let deck = state.repo.get_deck(&deck_id).await?;

    tracing::info!(
        handler = "get_deck",
        deck_id = %deck_id,
        card_count = deck.card_count,
        status = 200,
        "Responding"
    );
    Ok(Json(deck))
}

/// PUT /api/decks/:deck_id — partial update of title/description.
pub async fn update_deck(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
    Json(body): Json<UpdateDeckRequest>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(handler = "update_deck", deck_id = %deck_id, "Handler: PUT /api/decks/:deck_id");

    tracing::debug!(handler = "update_deck", "Dispatching to repo.update_deck");
    let deck = state.repo.update_deck(&deck_id, body).await?;

    tracing::info!(handler = "update_deck", deck_id = %deck_id, status = 200, "Responding: deck updated");
    Ok(Json(deck))
}

/// DELETE /api/decks/:deck_id — remove the deck and every card it owns.
pub async fn delete_deck(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(
        handler = "delete_deck",
        deck_id = %deck_id,
        "Handler: DELETE /api/decks/:deck_id"
    );

    state.repo.delete_deck(&deck_id).await?;

    tracing::info!(handler = "delete_deck", deck_id = %deck_id, status = 200, "Responding: deck deleted");
    Ok(Json(json!({ "success": true })))
}
