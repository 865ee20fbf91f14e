//! Backend Event Subscriptions

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use crate::models::SessionSnapshot;
use super::listen;

/// Must match the name the backend emits under
pub const SESSION_CHANGED_EVENT: &str = "session-changed";

/// Tauri wraps every event payload in an envelope
#[derive(Deserialize)]
struct EventEnvelope<T> {
    payload: T,
}

/// Call `on_change` with every snapshot the backend broadcasts
pub async fn listen_session_changed<F>(on_change: F)
where
    F: Fn(SessionSnapshot) + 'static,
{
    let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        match serde_wasm_bindgen::from_value::<EventEnvelope<SessionSnapshot>>(event) {
            Ok(envelope) => on_change(envelope.payload),
            Err(e) => web_sys::console::error_1(
                &format!("[{}] bad payload: {}", SESSION_CHANGED_EVENT, e).into(),
            ),
        }
    });

    listen(SESSION_CHANGED_EVENT, &handler).await;
    // The listener lives as long as the window
    handler.forget();
}
