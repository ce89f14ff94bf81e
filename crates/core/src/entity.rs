//! Entity trait: objects that keep their identity while their values change.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Identifier that stays fixed across updates.
    fn id(&self) -> &Self::Id;
}
