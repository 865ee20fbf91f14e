//! Tauri Commands for the Fridge Tab
//!
//! Exposes stock and add-item form operations to the frontend via Tauri IPC.

use tauri::State;

use crate::service::SessionSnapshot;
use crate::state::AppState;

/// Current session state
#[tauri::command]
pub async fn get_snapshot(state: State<'_, AppState>) -> Result<SessionSnapshot, String> {
    Ok(state.snapshot().await)
}

/// Stock a new item (blank names are ignored)
#[tauri::command]
pub async fn add_item(state: State<'_, AppState>, name: String) -> Result<SessionSnapshot, String> {
    Ok(state.apply(|s| s.add_item(&name).is_some()).await)
}

#[tauri::command]
pub async fn increment_item(state: State<'_, AppState>, id: String) -> Result<SessionSnapshot, String> {
    Ok(state
        .apply_to_item(&id, |s, id| s.increment(id).is_some())
        .await)
}

/// Take one unit; the last unit opens the move-to-shopping prompt
#[tauri::command]
pub async fn decrement_item(state: State<'_, AppState>, id: String) -> Result<SessionSnapshot, String> {
    Ok(state
        .apply_to_item(&id, |s, id| s.decrement(id).changed())
        .await)
}

/// Answer the move-to-shopping prompt
#[tauri::command]
pub async fn resolve_prompt(state: State<'_, AppState>, accept: bool) -> Result<SessionSnapshot, String> {
    Ok(state.apply(|s| s.resolve_prompt(accept).is_some()).await)
}

#[tauri::command]
pub async fn open_add_item_form(state: State<'_, AppState>) -> Result<SessionSnapshot, String> {
    Ok(state.apply(|s| s.open_add_form()).await)
}

/// Submit the sheet with the text typed so far
#[tauri::command]
pub async fn submit_add_item_form(state: State<'_, AppState>, text: String) -> Result<SessionSnapshot, String> {
    Ok(state
        .apply(|s| {
            s.set_add_form_text(&text);
            s.submit_add_form().is_some()
        })
        .await)
}

#[tauri::command]
pub async fn cancel_add_item_form(state: State<'_, AppState>) -> Result<SessionSnapshot, String> {
    Ok(state.apply(|s| s.cancel_add_form()).await)
}
