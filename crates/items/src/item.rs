use serde::{Deserialize, Serialize};

use shopcart_core::Entity;

/// A named, priced record in the cart.
///
/// `name` is the lookup key. Uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Replace both fields in place.
    pub fn apply(&mut self, update: ItemUpdate) {
        self.name = update.name;
        self.price = update.price;
    }
}

impl Entity for Item {
    type Id = str;

    fn id(&self) -> &str {
        &self.name
    }
}

/// Full replacement payload for an existing item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemUpdate {
    pub name: String,
    pub price: f64,
}
