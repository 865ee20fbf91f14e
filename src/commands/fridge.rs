//! Fridge Commands
//!
//! Frontend bindings for stock and add-item form commands.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::SessionSnapshot;
use super::invoke;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct AcceptArgs {
    accept: bool,
}

#[derive(Serialize)]
struct TextArgs<'a> {
    text: &'a str,
}

// ========================
// Commands
// ========================

async fn call(cmd: &str, args: JsValue) -> Result<SessionSnapshot, String> {
    let result = invoke(cmd, args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn get_snapshot() -> Result<SessionSnapshot, String> {
    call("get_snapshot", JsValue::NULL).await
}

pub async fn increment_item(id: String) -> Result<SessionSnapshot, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id: &id }).map_err(|e| e.to_string())?;
    call("increment_item", js_args).await
}

pub async fn decrement_item(id: String) -> Result<SessionSnapshot, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id: &id }).map_err(|e| e.to_string())?;
    call("decrement_item", js_args).await
}

pub async fn resolve_prompt(accept: bool) -> Result<SessionSnapshot, String> {
    let js_args = serde_wasm_bindgen::to_value(&AcceptArgs { accept }).map_err(|e| e.to_string())?;
    call("resolve_prompt", js_args).await
}

pub async fn open_add_item_form() -> Result<SessionSnapshot, String> {
    call("open_add_item_form", JsValue::NULL).await
}

pub async fn submit_add_item_form(text: String) -> Result<SessionSnapshot, String> {
    let js_args = serde_wasm_bindgen::to_value(&TextArgs { text: &text }).map_err(|e| e.to_string())?;
    call("submit_add_item_form", js_args).await
}

pub async fn cancel_add_item_form() -> Result<SessionSnapshot, String> {
    call("cancel_add_item_form", JsValue::NULL).await
}
