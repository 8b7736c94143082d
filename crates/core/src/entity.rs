//! Entity trait: identity + audit stamps, shared by domain types and DTOs.

use chrono::{DateTime, Utc};

/// Capability implemented by every domain entity and every DTO.
///
/// Object-safe so an arbitrary owner can be carried behind `Box<dyn Entity>`
/// by the linked-entity fallback slot.
pub trait Entity: core::fmt::Debug {
    /// Integer identifier.
    fn id(&self) -> i64;

    /// When the entity was created; immutable after construction.
    fn created_date(&self) -> DateTime<Utc>;

    /// When the entity was last mutated, if ever.
    fn modified_date(&self) -> Option<DateTime<Utc>>;

    /// Runtime type name as surfaced to callers (e.g. "Contact").
    fn type_name(&self) -> &'static str;

    /// Clone into an owned, boxed entity (object-safe `Clone`).
    fn clone_entity(&self) -> Box<dyn Entity>;
}
