//! Organization: a company or institution that can own contact channels.

use chrono::{DateTime, Utc};
use serde::Serialize;

use organizer_core::{system_clock, DomainError, DomainResult, SharedClock, Stamps};

use crate::cast::{unsupported, CastKind, Castable, Projection};
use crate::dto::OrganizationDto;
use crate::macros::impl_entity;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    id: i64,
    name: String,
    #[serde(flatten)]
    stamps: Stamps,
}

impl Organization {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            id: 0,
            name: String::new(),
            stamps: Stamps::new(clock),
        }
    }

    /// Full reconstruction with explicit audit stamps.
    pub fn restore(
        id: i64,
        name: impl Into<String>,
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
            stamps: Stamps::restore(clock, created, modified),
        })
    }

    /// Project a DTO into a new domain organization.
    pub fn from_dto(dto: &OrganizationDto, clock: SharedClock) -> DomainResult<Self> {
        Self::restore(
            dto.id,
            dto.name.clone(),
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
}

impl Default for Organization {
    fn default() -> Self {
        Self::new(system_clock())
    }
}

impl_entity!(Organization, "Organization");

impl Castable for Organization {
    const KIND: CastKind = CastKind::Organization;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::OrganizationDto => Ok(Projection::OrganizationDto(OrganizationDto {
                id: self.id,
                name: self.name.clone(),
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
    fn cast_to_dto_copies_every_field() {
        let mut organization = Organization::new(clock());
        organization.set_id(3).unwrap();
        organization.set_name("Acme");

        let dto: OrganizationDto = organization.cast().unwrap();
        assert_eq!(dto.id, 3);
        assert_eq!(dto.name, "Acme");
    }

    #[test]
    fn set_name_stamps_modification() {
        let mut organization = Organization::new(clock());
        assert_eq!(organization.modified_date(), None);
        organization.set_name("Acme");
        assert!(organization.modified_date().is_some());
    }
}
