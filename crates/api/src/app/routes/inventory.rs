use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use stockroom_infra::ItemStore;
use stockroom_inventory::InventoryItem;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
}

pub async fn list_items(Extension(store): Extension<Arc<ItemStore>>) -> axum::response::Response {
    match store.find_all().await {
        Ok(items) => {
            let body: Vec<serde_json::Value> = items.iter().map(dto::item_to_json).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => errors::store_error(e),
    }
}

pub async fn get_item(
    Extension(store): Extension<Arc<ItemStore>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    match store.find_by_id(id).await {
        Ok(Some(item)) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        Ok(None) => errors::not_found(),
        Err(e) => errors::store_error(e),
    }
}

pub async fn create_item(
    Extension(store): Extension<Arc<ItemStore>>,
    Json(body): Json<dto::ItemRequest>,
) -> axum::response::Response {
    let item = match body.into_item() {
        Ok(item) => item,
        Err(violations) => return errors::validation_error(violations),
    };

    match store.save(item).await {
        Ok(saved) => (StatusCode::CREATED, Json(dto::item_to_json(&saved))).into_response(),
        Err(e) => errors::store_error(e),
    }
}

pub async fn update_item(
    Extension(store): Extension<Arc<ItemStore>>,
    Path(id): Path<i64>,
    Json(body): Json<dto::ItemRequest>,
) -> axum::response::Response {
    let incoming = match body.into_item() {
        Ok(item) => item,
        Err(violations) => return errors::validation_error(violations),
    };

    let existing = match store.find_by_id(id).await {
        Ok(Some(item)) => item,
        Ok(None) => return errors::not_found(),
        Err(e) => return errors::store_error(e),
    };

    // Only the four mutable fields come from the body; the id is preserved.
    let updated = InventoryItem {
        id: existing.id,
        name: incoming.name,
        category: incoming.category,
        quantity: incoming.quantity,
        threshold: incoming.threshold,
    };

    match store.save(updated).await {
        Ok(saved) => (StatusCode::OK, Json(dto::item_to_json(&saved))).into_response(),
        Err(e) => errors::store_error(e),
    }
}

pub async fn delete_item(
    Extension(store): Extension<Arc<ItemStore>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    match store.exists_by_id(id).await {
        Ok(true) => {}
        Ok(false) => return errors::not_found(),
        Err(e) => return errors::store_error(e),
    }

    match store.delete_by_id(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::store_error(e),
    }
}
