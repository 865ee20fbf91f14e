//! Shopping Commands

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::{SessionSnapshot, ShoppingEntry};
use super::invoke;

#[derive(Serialize)]
struct NameArgs<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct IndexArgs {
    index: usize,
}

pub async fn list_shopping_entries() -> Result<Vec<ShoppingEntry>, String> {
    let result = invoke("list_shopping_entries", JsValue::NULL).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn add_shopping_entry(name: String) -> Result<SessionSnapshot, String> {
    let js_args = serde_wasm_bindgen::to_value(&NameArgs { name: &name }).map_err(|e| e.to_string())?;
    let result = invoke("add_shopping_entry", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn remove_shopping_entry(index: usize) -> Result<SessionSnapshot, String> {
    let js_args = serde_wasm_bindgen::to_value(&IndexArgs { index }).map_err(|e| e.to_string())?;
    let result = invoke("remove_shopping_entry", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
