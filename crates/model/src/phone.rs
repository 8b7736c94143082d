//! Phone number owned by a contact, user, organization or sub-account.

use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use organizer_core::{system_clock, DomainError, DomainResult, SharedClock, Stamps, ValueObject};

use crate::cast::{unsupported, CastKind, Castable, Projection};
use crate::dto::PhoneNumberDto;
use crate::linked::LinkedEntity;
use crate::macros::{impl_entity, impl_linked};

/// Phone number classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PhoneKind {
    #[default]
    Home,
    Work,
    Mobile,
    Fax,
}

impl ValueObject for PhoneKind {}

/// A phone number belonging to exactly one owner.
#[derive(Debug, Clone)]
pub struct PhoneNumber {
    id: i64,
    number: String,
    kind: PhoneKind,
    linked: Option<LinkedEntity>,
    stamps: Stamps,
}

impl PhoneNumber {
    /// Fresh, empty phone number owned by nobody.
    pub fn new(clock: SharedClock) -> Self {
        Self {
            id: 0,
            number: String::new(),
            kind: PhoneKind::default(),
            linked: None,
            stamps: Stamps::new(clock),
        }
    }

    /// Full reconstruction with explicit audit stamps.
    pub fn restore(
        id: i64,
        number: impl Into<String>,
        kind: PhoneKind,
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
            number: number.into(),
            kind,
            linked,
            stamps: Stamps::restore(clock, created, modified),
        })
    }

    /// Project a DTO (plus an optional owner) into a new domain phone.
    pub fn from_dto(
        dto: &PhoneNumberDto,
        owner: Option<LinkedEntity>,
        clock: SharedClock,
    ) -> DomainResult<Self> {
        Self::restore(
            dto.id,
            dto.number.clone(),
            dto.kind,
            owner,
            dto.created_date,
            dto.modified_date,
            clock,
        )
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn set_number(&mut self, value: impl Into<String>) {
        self.number = value.into();
        self.stamps.touch();
    }

    pub fn kind(&self) -> PhoneKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: PhoneKind) {
        self.kind = kind;
        self.stamps.touch();
    }
}

impl Default for PhoneNumber {
    fn default() -> Self {
        Self::new(system_clock())
    }
}

impl_entity!(PhoneNumber, "PhoneNumber");
impl_linked!(PhoneNumber);

impl Castable for PhoneNumber {
    const KIND: CastKind = CastKind::PhoneNumber;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::PhoneNumberDto => Ok(Projection::PhoneNumberDto(PhoneNumberDto {
                id: self.id,
                number: self.number.clone(),
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

/// Owner serialized as derived scalars only; see `Email`.
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("PhoneNumber", 7)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("number", &self.number)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("linkedEntityId", &self.linked_entity_id())?;
        state.serialize_field("linkedEntityType", &self.linked_entity_type())?;
        state.serialize_field("createdDate", &self.created_date())?;
        state.serialize_field("modifiedDate", &self.modified_date())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::User;
    use chrono::{Duration, TimeZone};
    use organizer_core::ManualClock;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn clock() -> SharedClock {
        ManualClock::starting_at(instant())
    }

    #[test]
    fn cast_to_dto_copies_every_field() {
        let mut phone = PhoneNumber::new(clock());
        phone.set_id(4).unwrap();
        phone.set_number("+1 555 0100");
        phone.set_kind(PhoneKind::Mobile);

        let dto: PhoneNumberDto = phone.cast().unwrap();
        assert_eq!(dto.id, 4);
        assert_eq!(dto.number, "+1 555 0100");
        assert_eq!(dto.kind, PhoneKind::Mobile);
        assert_eq!(dto.created_date, phone.created_date());
        assert_eq!(dto.modified_date, phone.modified_date());
    }

    #[test]
    fn unsupported_target_names_source_and_target() {
        let phone = PhoneNumber::new(clock());
        let err = phone.cast::<crate::dto::EmailDto>().unwrap_err();
        assert_eq!(err.to_string(), "Cannot cast PhoneNumber to type EmailDto.");
    }

    #[test]
    fn owner_resolution_carries_into_the_dto() {
        let clock = clock();
        let mut phone = PhoneNumber::new(clock.clone());
        let mut user = User::new(clock.clone());
        user.set_id(9).unwrap();
        phone.set_linked_entity(Some(user.into()));

        let dto: PhoneNumberDto = phone.cast().unwrap();
        assert_eq!(dto.linked_entity_id, Some(9));
        assert_eq!(dto.linked_entity_type.as_deref(), Some("User"));
    }

    #[test]
    fn set_kind_stamps_modification_even_without_change() {
        let clock = ManualClock::starting_at(instant());
        let mut phone = PhoneNumber::new(clock.clone());

        clock.advance(Duration::seconds(1));
        phone.set_kind(PhoneKind::Home);
        assert_eq!(
            phone.modified_date(),
            Some(instant() + Duration::seconds(1))
        );
    }

    #[test]
    fn negative_id_is_rejected() {
        let mut phone = PhoneNumber::new(clock());
        assert!(phone.set_id(-3).is_err());
        assert_eq!(phone.modified_date(), None);
    }
}
