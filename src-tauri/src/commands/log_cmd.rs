//! Tauri Commands for Diagnostics

/// Newest lines from the rolling log, oldest first
#[tauri::command]
pub fn get_recent_logs() -> Vec<String> {
    rolling_logger::recent_lines()
}
