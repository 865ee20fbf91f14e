//! Tauri Commands for the Shopping Tab

use tauri::State;

use crate::domain::ShoppingEntry;
use crate::service::SessionSnapshot;
use crate::state::AppState;

#[tauri::command]
pub async fn list_shopping_entries(state: State<'_, AppState>) -> Result<Vec<ShoppingEntry>, String> {
    Ok(state.snapshot().await.shopping)
}

#[tauri::command]
pub async fn add_shopping_entry(state: State<'_, AppState>, name: String) -> Result<SessionSnapshot, String> {
    Ok(state.apply(|s| s.add_shopping_entry(&name)).await)
}

/// Remove by position; out-of-range indexes are ignored
#[tauri::command]
pub async fn remove_shopping_entry(state: State<'_, AppState>, index: usize) -> Result<SessionSnapshot, String> {
    Ok(state
        .apply(|s| s.remove_shopping_entry(index).is_some())
        .await)
}
