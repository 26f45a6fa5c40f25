use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SampleItem {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: Vec<SampleItem>,
}

const ITEMS: [(u32, &str, &str); 3] = [
    (1, "Item 1", "First item"),
    (2, "Item 2", "Second item"),
    (3, "Item 3", "Third item"),
];

pub fn sample_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello))
        .route("/items", get(items))
}

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from userdir!".into(),
    })
}

pub async fn items() -> Json<ItemsResponse> {
    let items = ITEMS
        .iter()
        .map(|&(id, name, description)| SampleItem {
            id,
            name,
            description,
        })
        .collect();
    Json(ItemsResponse { items })
}
