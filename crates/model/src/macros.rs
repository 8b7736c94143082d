//! Boilerplate shared by the concrete entity and DTO types.

/// Implements the `Entity` capability, the stamp accessors, the validated
/// `set_id` mutator and `to_json` for a domain type carrying `id: i64` and
/// `stamps: Stamps` fields.
macro_rules! impl_entity {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Identifier accessor.
            pub fn id(&self) -> i64 {
                self.id
            }

            /// Set the identifier. Negative values are rejected before any
            /// state (including the modification stamp) changes.
            pub fn set_id(&mut self, id: i64) -> organizer_core::DomainResult<()> {
                if id < 0 {
                    return Err(organizer_core::DomainError::out_of_range("id", id));
                }
                self.id = id;
                self.stamps.touch();
                Ok(())
            }

            /// Creation instant; immutable after construction.
            pub fn created_date(&self) -> chrono::DateTime<chrono::Utc> {
                self.stamps.created()
            }

            /// Last-mutation instant, if any setter has run.
            pub fn modified_date(&self) -> Option<chrono::DateTime<chrono::Utc>> {
                self.stamps.modified()
            }

            /// Serialize to a camelCase JSON document.
            pub fn to_json(&self) -> serde_json::Result<String> {
                serde_json::to_string(self)
            }
        }

        impl organizer_core::Entity for $t {
            fn id(&self) -> i64 {
                self.id
            }

            fn created_date(&self) -> chrono::DateTime<chrono::Utc> {
                self.stamps.created()
            }

            fn modified_date(&self) -> Option<chrono::DateTime<chrono::Utc>> {
                self.stamps.modified()
            }

            fn type_name(&self) -> &'static str {
                $name
            }

            fn clone_entity(&self) -> Box<dyn organizer_core::Entity> {
                Box::new(self.clone())
            }
        }
    };
}

/// Implements the linked-entity resolver surface for an association-bearing
/// entity carrying a `linked: Option<LinkedEntity>` field.
macro_rules! impl_linked {
    ($t:ty) => {
        impl $t {
            /// The owner of this value, whatever its kind.
            pub fn linked_entity(&self) -> Option<&crate::linked::LinkedEntity> {
                self.linked.as_ref()
            }

            /// Replace the owner. The previous owner (of any kind) is
            /// dropped first; `None` clears the association entirely.
            /// Stamps the modification time.
            pub fn set_linked_entity(&mut self, owner: Option<crate::linked::LinkedEntity>) {
                self.linked = owner;
                self.stamps.touch();
                tracing::trace!(
                    owner = self.linked.as_ref().map_or("none", |l| l.type_name()),
                    "owner replaced"
                );
            }

            /// Identifier of the current owner; recomputed on every read.
            pub fn linked_entity_id(&self) -> Option<i64> {
                self.linked.as_ref().map(|l| l.id())
            }

            /// Runtime type name of the current owner; recomputed on every
            /// read.
            pub fn linked_entity_type(&self) -> Option<&'static str> {
                self.linked.as_ref().map(|l| l.type_name())
            }
        }
    };
}

/// Implements the `Entity` capability and `to_json` for a DTO with public
/// `id`/`created_date`/`modified_date` fields.
macro_rules! impl_dto_entity {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Serialize to a camelCase JSON document.
            pub fn to_json(&self) -> serde_json::Result<String> {
                serde_json::to_string(self)
            }
        }

        impl organizer_core::Entity for $t {
            fn id(&self) -> i64 {
                self.id
            }

            fn created_date(&self) -> chrono::DateTime<chrono::Utc> {
                self.created_date
            }

            fn modified_date(&self) -> Option<chrono::DateTime<chrono::Utc>> {
                self.modified_date
            }

            fn type_name(&self) -> &'static str {
                $name
            }

            fn clone_entity(&self) -> Box<dyn organizer_core::Entity> {
                Box::new(self.clone())
            }
        }
    };
}

/// Registers a type in the cast table: `CastTarget` plus the
/// `Projection` wrapper conversion.
macro_rules! impl_cast_target {
    ($t:ty, $kind:ident) => {
        impl crate::cast::CastTarget for $t {
            const KIND: crate::cast::CastKind = crate::cast::CastKind::$kind;

            fn from_projection(projection: crate::cast::Projection) -> Option<Self> {
                match projection {
                    crate::cast::Projection::$kind(value) => Some(value),
                    _ => None,
                }
            }
        }

        impl From<$t> for crate::cast::Projection {
            fn from(value: $t) -> Self {
                crate::cast::Projection::$kind(value)
            }
        }
    };
}

pub(crate) use impl_cast_target;
pub(crate) use impl_dto_entity;
pub(crate) use impl_entity;
pub(crate) use impl_linked;
