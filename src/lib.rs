pub mod config;
pub mod error;
pub mod handlers;
pub mod memory_repo;
pub mod models;
pub mod repository;
pub mod seed;
pub mod session;

use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use repository::DeckRepository;
use serde_json::json;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn DeckRepository>,
}

fn deck_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/decks",
            get(handlers::decks::list_decks).post(handlers::decks::create_deck),
        )
        .route(
            "/api/decks/:deck_id",
            get(handlers::decks::get_deck)
                .put(handlers::decks::update_deck)
                .delete(handlers::decks::delete_deck),
        )
}

fn card_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/decks/:deck_id/cards",
            get(handlers::cards::list_cards).post(handlers::cards::add_card),
        )
        .route(
            "/api/decks/:deck_id/cards/:card_id",
            axum::routing::delete(handlers::cards::remove_card),
        )
}

/// Legacy question/answer surface kept for older clients.
fn flashcard_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/decks/:deck_id/flashcards",
            get(handlers::flashcards::list_flashcards).post(handlers::flashcards::create_flashcard),
        )
        .route(
            "/api/flashcards/:card_id",
            put(handlers::flashcards::update_flashcard)
                .delete(handlers::flashcards::delete_flashcard),
        )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/api/health", get(handlers::health::health_check))
}

async fn route_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found" })),
    )
}

/// Build the full application router (used by main and tests).
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(deck_routes())
        .merge(card_routes())
        .merge(flashcard_routes())
        .merge(health_routes())
        .fallback(route_not_found)
        .with_state(state)
}
