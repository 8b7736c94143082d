//! Group: a named collection of contacts.

use chrono::{DateTime, Utc};
use serde::Serialize;

use organizer_core::{system_clock, DomainError, DomainResult, SharedClock, Stamps};

use crate::cast::{cast_all, unsupported, CastKind, Castable, Projection};
use crate::contact::Contact;
use crate::dto::GroupDto;
use crate::macros::impl_entity;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    id: i64,
    name: String,
    members: Vec<Contact>,
    #[serde(flatten)]
    stamps: Stamps,
}

impl Group {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            id: 0,
            name: String::new(),
            members: Vec::new(),
            stamps: Stamps::new(clock),
        }
    }

    /// Full reconstruction with explicit audit stamps.
    pub fn restore(
        id: i64,
        name: impl Into<String>,
        members: Vec<Contact>,
        created: DateTime<Utc>,
        modified: Option<DateTime<Utc>>,
        clock: SharedClock,
    ) -> DomainResult<Self> {
        if id < 0 {
            return Err(DomainError::out_of_range("id", id));
        }
        Ok(Self {
            id,
            name: name.into(),
            members,
            stamps: Stamps::restore(clock, created, modified),
        })
    }

    /// Project a DTO into a new domain group.
    pub fn from_dto(dto: &GroupDto, clock: SharedClock) -> DomainResult<Self> {
        let members = dto
            .members
            .iter()
            .map(|child| Contact::from_dto(child, clock.clone()))
            .collect::<DomainResult<Vec<_>>>()?;
        Self::restore(
            dto.id,
            dto.name.clone(),
            members,
            dto.created_date,
            dto.modified_date,
            clock,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.stamps.touch();
    }

    pub fn members(&self) -> &[Contact] {
        &self.members
    }

    pub fn set_members(&mut self, members: Vec<Contact>) {
        self.members = members;
        self.stamps.touch();
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new(system_clock())
    }
}

impl_entity!(Group, "Group");

impl Castable for Group {
    const KIND: CastKind = CastKind::Group;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::GroupDto => Ok(Projection::GroupDto(GroupDto {
                id: self.id,
                name: self.name.clone(),
                members: cast_all(&self.members)?,
                created_date: self.created_date(),
                modified_date: self.modified_date(),
            })),
            other => Err(unsupported(Self::KIND, other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use organizer_core::ManualClock;

    fn clock() -> SharedClock {
        ManualClock::starting_at(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn cast_to_dto_maps_members_element_wise() {
        let clock = clock();
        let mut first = Contact::new(clock.clone());
        first.set_first_name(Some("Ada".to_owned()));
        let mut second = Contact::new(clock.clone());
        second.set_first_name(Some("Grace".to_owned()));

        let mut group = Group::new(clock.clone());
        group.set_name("Pioneers");
        group.set_members(vec![first, second]);

        let dto: GroupDto = group.cast().unwrap();
        assert_eq!(dto.members.len(), 2);
        assert_eq!(dto.members[0].first_name.as_deref(), Some("Ada"));
        assert_eq!(dto.members[1].first_name.as_deref(), Some("Grace"));
    }

    #[test]
    fn unsupported_target_names_source_and_target() {
        let group = Group::new(clock());
        let err = group.cast::<crate::account::Account>().unwrap_err();
        assert_eq!(err.to_string(), "Cannot cast Group to type Account.");
    }
}
