//! Postal address owned by a contact, user, organization or sub-account.
//!
//! Two addressing variants exist: domestic US (state + zip) and
//! international (province + postal code + country). The region-specific
//! fields are a value object so both the entity and its DTO share them.

use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use organizer_core::{system_clock, DomainError, DomainResult, SharedClock, Stamps, ValueObject};

use crate::cast::{unsupported, CastKind, Castable, Projection};
use crate::dto::AddressDto;
use crate::linked::LinkedEntity;
use crate::macros::{impl_entity, impl_linked};

/// Region-specific addressing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AddressVariant {
    Us {
        state: String,
        zip: String,
    },
    #[serde(rename_all = "camelCase")]
    International {
        province: String,
        postal_code: String,
        country: String,
    },
}

impl ValueObject for AddressVariant {}

impl Default for AddressVariant {
    fn default() -> Self {
        Self::Us {
            state: String::new(),
            zip: String::new(),
        }
    }
}

/// A postal address belonging to exactly one owner.
#[derive(Debug, Clone)]
pub struct Address {
    id: i64,
    street: String,
    street2: Option<String>,
    city: String,
    variant: AddressVariant,
    linked: Option<LinkedEntity>,
    stamps: Stamps,
}

impl Address {
    /// Fresh, empty US-variant address owned by nobody.
    pub fn new(clock: SharedClock) -> Self {
        Self {
            id: 0,
            street: String::new(),
            street2: None,
            city: String::new(),
            variant: AddressVariant::default(),
            linked: None,
            stamps: Stamps::new(clock),
        }
    }

    /// Full reconstruction with explicit audit stamps.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: i64,
        street: impl Into<String>,
        street2: Option<String>,
        city: impl Into<String>,
        variant: AddressVariant,
        linked: Option<LinkedEntity>,
        created: DateTime<Utc>,
        modified: Option<DateTime<Utc>>,
        clock: SharedClock,
    ) -> DomainResult<Self> {
        if id < 0 {
            return Err(DomainError::out_of_range("id", id));
        }
        Ok(Self {
            id,
            street: street.into(),
            street2,
            city: city.into(),
            variant,
            linked,
            stamps: Stamps::restore(clock, created, modified),
        })
    }

    /// Project a DTO (plus an optional owner) into a new domain address.
    pub fn from_dto(
        dto: &AddressDto,
        owner: Option<LinkedEntity>,
        clock: SharedClock,
    ) -> DomainResult<Self> {
        Self::restore(
            dto.id,
            dto.street.clone(),
            dto.street2.clone(),
            dto.city.clone(),
            dto.variant.clone(),
            owner,
            dto.created_date,
            dto.modified_date,
            clock,
        )
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn set_street(&mut self, value: impl Into<String>) {
        self.street = value.into();
        self.stamps.touch();
    }

    pub fn street2(&self) -> Option<&str> {
        self.street2.as_deref()
    }

    pub fn set_street2(&mut self, value: Option<String>) {
        self.street2 = value;
        self.stamps.touch();
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn set_city(&mut self, value: impl Into<String>) {
        self.city = value.into();
        self.stamps.touch();
    }

    pub fn variant(&self) -> &AddressVariant {
        &self.variant
    }

    pub fn set_variant(&mut self, variant: AddressVariant) {
        self.variant = variant;
        self.stamps.touch();
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::new(system_clock())
    }
}

impl_entity!(Address, "Address");
impl_linked!(Address);

impl Castable for Address {
    const KIND: CastKind = CastKind::Address;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::AddressDto => Ok(Projection::AddressDto(AddressDto {
                id: self.id,
                street: self.street.clone(),
                street2: self.street2.clone(),
                city: self.city.clone(),
                variant: self.variant.clone(),
                linked_entity_id: self.linked_entity_id(),
                linked_entity_type: self.linked_entity_type().map(str::to_owned),
                created_date: self.created_date(),
                modified_date: self.modified_date(),
            })),
            other => Err(unsupported(Self::KIND, other)),
        }
    }
}

/// Flat camelCase document: the variant's fields are inlined next to the
/// common ones, and the owner appears as derived scalars only.
impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("street", &self.street)?;
        map.serialize_entry("street2", &self.street2)?;
        map.serialize_entry("city", &self.city)?;
        match &self.variant {
            AddressVariant::Us { state, zip } => {
                map.serialize_entry("kind", "us")?;
                map.serialize_entry("state", state)?;
                map.serialize_entry("zip", zip)?;
            }
            AddressVariant::International {
                province,
                postal_code,
                country,
            } => {
                map.serialize_entry("kind", "international")?;
                map.serialize_entry("province", province)?;
                map.serialize_entry("postalCode", postal_code)?;
                map.serialize_entry("country", country)?;
            }
        }
        map.serialize_entry("linkedEntityId", &self.linked_entity_id())?;
        map.serialize_entry("linkedEntityType", &self.linked_entity_type())?;
        map.serialize_entry("createdDate", &self.created_date())?;
        map.serialize_entry("modifiedDate", &self.modified_date())?;
        map.end()
    }
}
