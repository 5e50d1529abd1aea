use crate::errors::ApiResult;
use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::Local;
use display_prayer::{daily_events, Event};
use display_theme::ThemeView;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub events: Vec<Event>,
    pub images: Vec<ThemeView>,
}

/// `GET /api/data`: today's timetable and a theme for every background
/// image.
pub async fn load_data(State(state): State<Arc<AppState>>) -> ApiResult<Json<DataResponse>> {
    let today = Local::now().date_naive();
    let events = daily_events(&state.calculator, today, &state.iqama)?;

    let worker_state = state.clone();
    let themes = tokio::task::spawn_blocking(move || {
        worker_state
            .engine
            .compute_catalog(&worker_state.display_dir)
    })
    .await??;

    let images = themes
        .iter()
        .map(|theme| ThemeView::new(theme, state.overlay_alpha))
        .collect();

    Ok(Json(DataResponse { events, images }))
}
