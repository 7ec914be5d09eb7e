//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Identifier the entity is looked up by.
    type Id: ?Sized + Eq + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// True if this entity is identified by `id`.
    fn is_identified_by(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}
