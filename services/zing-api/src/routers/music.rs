use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
};

use crate::server::AppState;

// Parameters are read from a plain map so that absent, empty or repeated
// keys never turn into a 400 here.
type Params = Query<HashMap<String, String>>;

/// GET /api/search?q= - Search the catalog by free text
pub async fn search_route(State(state): State<AppState>, Query(params): Params) -> Response {
    match state.music.search(params.get("q").map(String::as_str)).await {
        Ok(data) => Json(data).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /api/song?id= - Resolve the playable link for a song id
pub async fn song_route(State(state): State<AppState>, Query(params): Params) -> Response {
    match state.music.get_song(params.get("id").map(String::as_str)).await {
        Ok(data) => Json(data).into_response(),
        Err(e) => e.into_response(),
    }
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(search_route))
        .route("/song", get(song_route))
}
