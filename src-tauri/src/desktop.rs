//! Desktop Shell
//!
//! Tauri builder wiring: plugins, logging, state restore and IPC handlers.

use std::path::PathBuf;
use tauri::{AppHandle, Emitter, Manager};

use crate::commands;
use crate::config::AppConfig;
use crate::state::AppState;

/// Event carrying the new `SessionSnapshot` after each change
pub const SESSION_CHANGED_EVENT: &str = "session-changed";

/// Get database path from app handle
fn get_db_path(app_handle: &AppHandle, config: &AppConfig) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let app_dir = app_handle.path().app_data_dir()?;
    std::fs::create_dir_all(&app_dir)?;
    Ok(config.db_path(&app_dir))
}

async fn open_state(app_handle: &AppHandle, config: &AppConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    if !config.persist {
        log::info!("Persistence disabled, starting empty");
        return Ok(AppState::in_memory());
    }

    let db_path = get_db_path(app_handle, config)?;
    match AppState::open(&db_path).await {
        Ok(state) => Ok(state),
        Err(e) => {
            // A broken database should not keep the app from starting
            log::error!("DB init failed, running without storage: {}", e);
            let _ = rolling_logger::error(&format!("DB init failed: {}", e));
            Ok(AppState::in_memory())
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();
            let config_dir = app_handle.path().app_config_dir()?;
            let config = AppConfig::load(&config_dir).unwrap_or_else(|e| {
                eprintln!("Ignoring unreadable config: {}", e);
                AppConfig::default()
            });

            // Initialize logging
            rolling_logger::init_logger(app_handle.path().app_log_dir()?, &config.log_app_name)?;

            let state = tauri::async_runtime::block_on(open_state(&app_handle, &config))?;

            let emitter = app_handle.clone();
            tauri::async_runtime::block_on(state.subscribe(move |snapshot| {
                if let Err(e) = emitter.emit(SESSION_CHANGED_EVENT, snapshot) {
                    log::warn!("Failed to emit {}: {}", SESSION_CHANGED_EVENT, e);
                }
            }));

            log::info!("App setup done (persistent: {})", state.is_persistent());
            app.manage(state);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Fridge tab
            commands::get_snapshot,
            commands::add_item,
            commands::increment_item,
            commands::decrement_item,
            commands::resolve_prompt,
            commands::open_add_item_form,
            commands::submit_add_item_form,
            commands::cancel_add_item_form,
            // Shopping tab
            commands::list_shopping_entries,
            commands::add_shopping_entry,
            commands::remove_shopping_entry,
            // Diagnostics
            commands::get_recent_logs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
