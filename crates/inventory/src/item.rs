use core::fmt;

use serde::Serialize;

/// A single field-level validation failure.
///
/// Messages are caller-facing and stable; the HTTP layer serializes these
/// verbatim into validation error responses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// A tracked inventory record.
///
/// `id` is the storage-assigned surrogate key: `None` until the record has
/// been saved for the first time, immutable afterwards. `threshold` is the
/// restock alert level; it is stored but never compared against `quantity`
/// anywhere in the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    pub id: Option<i64>,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub threshold: i64,
}

impl InventoryItem {
    /// Build an unsaved item (no id) from already-validated fields.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i64,
        threshold: i64,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: category.into(),
            quantity,
            threshold,
        }
    }

    /// Validate raw field values, collecting every violation.
    ///
    /// All fields arrive as `Option` so that a missing value surfaces as a
    /// field error rather than a deserialization failure. Returns an unsaved
    /// item (no id) when every field is acceptable.
    pub fn validate(
        name: Option<String>,
        category: Option<String>,
        quantity: Option<i64>,
        threshold: Option<i64>,
    ) -> Result<Self, Vec<FieldError>> {
        let mut violations = Vec::new();

        let name = name.filter(|n| !n.trim().is_empty());
        if name.is_none() {
            violations.push(FieldError::new("name", "Item name is required"));
        }

        let category = category.filter(|c| !c.trim().is_empty());
        if category.is_none() {
            violations.push(FieldError::new("category", "Category is required"));
        }

        match quantity {
            None => violations.push(FieldError::new("quantity", "Quantity is required")),
            Some(q) if q < 0 => {
                violations.push(FieldError::new("quantity", "Quantity cannot be negative"))
            }
            Some(_) => {}
        }

        match threshold {
            None => violations.push(FieldError::new("threshold", "Threshold is required")),
            Some(t) if t < 0 => {
                violations.push(FieldError::new("threshold", "Threshold cannot be negative"))
            }
            Some(_) => {}
        }

        match (name, category, quantity, threshold) {
            (Some(name), Some(category), Some(quantity), Some(threshold))
                if violations.is_empty() =>
            {
                Ok(Self {
                    id: None,
                    name,
                    category,
                    quantity,
                    threshold,
                })
            }
            _ => Err(violations),
        }
    }
}

impl fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = self.id {
            write!(f, "#{id} ")?;
        }
        write!(
            f,
            "{} [{}] quantity={} threshold={}",
            self.name, self.category, self.quantity, self.threshold
        )
    }
}
