//! Item storage abstractions.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use shopcart_core::{DomainError, DomainResult, Entity};

use crate::item::{Item, ItemUpdate};

/// Ordered item collection, looked up by name.
///
/// Name-keyed operations resolve to the first matching item in store order.
pub trait ItemStore: Send + Sync {
    /// All items, in store order.
    fn list(&self) -> Vec<Item>;

    /// Append a new item and return it. Duplicate names are accepted.
    fn create(&self, name: String, price: f64) -> Item;

    fn find(&self, name: &str) -> DomainResult<Item>;

    /// Replace the fields of the first item named `name`, keeping its position.
    fn update(&self, name: &str, update: ItemUpdate) -> DomainResult<Item>;

    /// Remove the first item named `name`.
    fn remove(&self, name: &str) -> DomainResult<()>;
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn list(&self) -> Vec<Item> {
        (**self).list()
    }

    fn create(&self, name: String, price: f64) -> Item {
        (**self).create(name, price)
    }

    fn find(&self, name: &str) -> DomainResult<Item> {
        (**self).find(name)
    }

    fn update(&self, name: &str, update: ItemUpdate) -> DomainResult<Item> {
        (**self).update(name, update)
    }

    fn remove(&self, name: &str) -> DomainResult<()> {
        (**self).remove(name)
    }
}

/// In-memory item store (linear scan, no durability).
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    inner: RwLock<Vec<Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave the Vec half-written, so a
    // poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Item>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Item>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn position(items: &[Item], name: &str) -> DomainResult<usize> {
    items
        .iter()
        .position(|item| item.is_identified_by(name))
        .ok_or_else(DomainError::not_found)
}

impl ItemStore for InMemoryItemStore {
    fn list(&self) -> Vec<Item> {
        self.read().clone()
    }

    fn create(&self, name: String, price: f64) -> Item {
        let item = Item::new(name, price);
        self.write().push(item.clone());
        tracing::debug!(name = %item.name, "item created");
        item
    }

    fn find(&self, name: &str) -> DomainResult<Item> {
        let items = self.read();
        let idx = position(&items, name)?;
        Ok(items[idx].clone())
    }

    fn update(&self, name: &str, update: ItemUpdate) -> DomainResult<Item> {
        let mut items = self.write();
        let idx = position(&items, name)?;
        let item = &mut items[idx];
        item.apply(update);
        tracing::debug!(from = name, to = %item.name, "item updated");
        Ok(item.clone())
    }

    fn remove(&self, name: &str) -> DomainResult<()> {
        let mut items = self.write();
        let idx = position(&items, name)?;
        items.remove(idx);
        tracing::debug!(name, "item removed");
        Ok(())
    }
}
