//! Email address owned by a contact, user, organization or sub-account.

use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use organizer_core::{system_clock, DomainError, DomainResult, SharedClock, Stamps, ValueObject};

use crate::cast::{unsupported, CastKind, Castable, Projection};
use crate::dto::EmailDto;
use crate::linked::LinkedEntity;
use crate::macros::{impl_entity, impl_linked};

/// Email classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmailKind {
    #[default]
    Personal,
    Work,
    Other,
}

impl ValueObject for EmailKind {}

/// An email address belonging to exactly one owner.
#[derive(Debug, Clone)]
pub struct Email {
    id: i64,
    email_address: String,
    kind: EmailKind,
    linked: Option<LinkedEntity>,
    stamps: Stamps,
}

impl Email {
    /// Fresh, empty email owned by nobody.
    pub fn new(clock: SharedClock) -> Self {
        Self {
            id: 0,
            email_address: String::new(),
            kind: EmailKind::default(),
            linked: None,
            stamps: Stamps::new(clock),
        }
    }

    /// Full reconstruction with explicit audit stamps (e.g. from storage).
    pub fn restore(
        id: i64,
        email_address: impl Into<String>,
        kind: EmailKind,
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
            email_address: email_address.into(),
            kind,
            linked,
            stamps: Stamps::restore(clock, created, modified),
        })
    }

    /// Project a DTO (plus an optional owner) into a new domain email.
    ///
    /// Assigning the owner here is reconstruction, not mutation: the
    /// modification stamp stays whatever the DTO carried.
    pub fn from_dto(
        dto: &EmailDto,
        owner: Option<LinkedEntity>,
        clock: SharedClock,
    ) -> DomainResult<Self> {
        Self::restore(
            dto.id,
            dto.email_address.clone(),
            dto.kind,
            owner,
            dto.created_date,
            dto.modified_date,
            clock,
        )
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    pub fn set_email_address(&mut self, value: impl Into<String>) {
        self.email_address = value.into();
        self.stamps.touch();
    }

    pub fn kind(&self) -> EmailKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: EmailKind) {
        self.kind = kind;
        self.stamps.touch();
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new(system_clock())
    }
}

impl_entity!(Email, "Email");
impl_linked!(Email);

impl Castable for Email {
    const KIND: CastKind = CastKind::Email;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::EmailDto => Ok(Projection::EmailDto(EmailDto {
                id: self.id,
                email_address: self.email_address.clone(),
                kind: self.kind,
                linked_entity_id: self.linked_entity_id(),
                linked_entity_type: self.linked_entity_type().map(str::to_owned),
                created_date: self.created_date(),
                modified_date: self.modified_date(),
            })),
            other => Err(unsupported(Self::KIND, other)),
        }
    }
}

/// The owner is serialized as its derived id/type scalars only, so the
/// back-reference object never appears and reference cycles cannot occur.
impl Serialize for Email {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Email", 7)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("emailAddress", &self.email_address)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("linkedEntityId", &self.linked_entity_id())?;
        state.serialize_field("linkedEntityType", &self.linked_entity_type())?;
        state.serialize_field("createdDate", &self.created_date())?;
        state.serialize_field("modifiedDate", &self.modified_date())?;
        state.end()
    }
}
