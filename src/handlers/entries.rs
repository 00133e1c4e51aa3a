use axum::{extract::State, Json};
use chrono::Local;

use crate::dto::{EntryText, MessageResponse};
use crate::error::AppResult;
use crate::models::entry::{EntriesResponse, Entry};
use crate::AppState;

pub async fn get_entries(State(state): State<AppState>) -> AppResult<Json<EntriesResponse>> {
    let entries = state.store.list_entries().await?;
    Ok(Json(EntriesResponse::new(entries, None)))
}

pub async fn add_entry(
    State(state): State<AppState>,
    text: EntryText,
) -> AppResult<Json<EntriesResponse>> {
    let text = text.require("No entry provided")?;

    let entry = Entry::new(text, Local::now().date_naive());
    tracing::debug!(entry_id = %entry.id, date = %entry.date_label, "Adding diary entry");
    state.store.append_entry(entry).await?;

    let entries = state.store.list_entries().await?;
    Ok(Json(EntriesResponse::new(
        entries,
        Some("Entry added successfully!"),
    )))
}

pub async fn clear_entries(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    state.store.clear_entries().await?;
    tracing::info!("Diary entries cleared");
    Ok(Json(MessageResponse::new("Diary entries cleared!")))
}
