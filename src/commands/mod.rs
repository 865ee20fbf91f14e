//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by tab.

mod events;
mod fridge;
mod shopping;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> JsValue;

    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"])]
    async fn listen(event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> JsValue;
}

// Re-export all public items
pub use events::*;
pub use fridge::*;
pub use shopping::*;
