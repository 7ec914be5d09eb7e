use serde::{Deserialize, Serialize};

use shopcart_items::{Item, ItemUpdate};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub price: f64,
}

/// PATCH body. Both fields are required: an update replaces the whole item.
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub name: String,
    pub price: f64,
}

impl From<UpdateItemRequest> for ItemUpdate {
    fn from(req: UpdateItemRequest) -> Self {
        ItemUpdate {
            name: req.name,
            price: req.price,
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub item: Item,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn deleted() -> Self {
        Self { message: "Deleted" }
    }
}
