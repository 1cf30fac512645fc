use serde::Deserialize;

use stockroom_inventory::{FieldError, InventoryItem};

// -------------------------
// Request DTOs
// -------------------------

/// Body of POST /inventory and PUT /inventory/{id}.
///
/// Every field is optional so that an absent value is reported as a field
/// error instead of a body rejection. A client-sent `id` is ignored: ids
/// are assigned by the storage layer and never reassigned.
#[derive(Debug, Deserialize)]
pub struct ItemRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub threshold: Option<i64>,
}

impl ItemRequest {
    /// Run field validation, producing an unsaved item.
    pub fn into_item(self) -> Result<InventoryItem, Vec<FieldError>> {
        InventoryItem::validate(self.name, self.category, self.quantity, self.threshold)
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn item_to_json(item: &InventoryItem) -> serde_json::Value {
    serde_json::json!({
        "id": item.id,
        "name": item.name,
        "category": item.category,
        "quantity": item.quantity,
        "threshold": item.threshold,
    })
}
