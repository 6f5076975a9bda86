//! Dashboard handlers

use axum::{extract::State, response::Html, Json};

use crate::view::{self, DashboardView};
use crate::AppState;

/// Server-rendered dashboard page
pub async fn page(State(state): State<AppState>) -> Html<String> {
    let dashboard = view::dashboard(&state.session.snapshot());
    Html(view::html::render(&dashboard))
}

/// Dashboard view model as JSON
pub async fn view(State(state): State<AppState>) -> Json<DashboardView> {
    Json(view::dashboard(&state.session.snapshot()))
}
