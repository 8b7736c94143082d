//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity** - they are defined entirely by their
/// attribute values, are immutable, and are compared by value. A phone
/// kind or an address variant is a value object; `Contact` is an entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
