//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two of them holding the same values are
/// equal. To "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct SeedFruit {
///     name: String,
///     quantity: i64,
/// }
///
/// impl ValueObject for SeedFruit {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
