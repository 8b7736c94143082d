//! Database connection: a stored connection definition owned by at most
//! one account.

use chrono::{DateTime, Utc};
use serde::Serialize;

use organizer_core::{system_clock, DomainError, DomainResult, SharedClock, Stamps};

use crate::account::Account;
use crate::cast::{cast_owner, unsupported, CastKind, Castable, Projection};
use crate::dto::DatabaseConnectionDto;
use crate::macros::impl_entity;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConnection {
    id: i64,
    name: String,
    connection_string: String,
    account: Option<Account>,
    #[serde(flatten)]
    stamps: Stamps,
}

impl DatabaseConnection {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            id: 0,
            name: String::new(),
            connection_string: String::new(),
            account: None,
            stamps: Stamps::new(clock),
        }
    }

    /// Full reconstruction with explicit audit stamps.
    pub fn restore(
        id: i64,
        name: impl Into<String>,
        connection_string: impl Into<String>,
        account: Option<Account>,
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
            connection_string: connection_string.into(),
            account,
            stamps: Stamps::restore(clock, created, modified),
        })
    }

    /// Project a DTO into a new domain connection.
    pub fn from_dto(dto: &DatabaseConnectionDto, clock: SharedClock) -> DomainResult<Self> {
        let account = dto
            .account
            .as_ref()
            .map(|child| Account::from_dto(child, clock.clone()))
            .transpose()?;
        Self::restore(
            dto.id,
            dto.name.clone(),
            dto.connection_string.clone(),
            account,
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

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    pub fn set_connection_string(&mut self, value: impl Into<String>) {
        self.connection_string = value.into();
        self.stamps.touch();
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn set_account(&mut self, account: Option<Account>) {
        self.account = account;
        self.stamps.touch();
    }
}

impl Default for DatabaseConnection {
    fn default() -> Self {
        Self::new(system_clock())
    }
}

impl_entity!(DatabaseConnection, "DatabaseConnection");

impl Castable for DatabaseConnection {
    const KIND: CastKind = CastKind::DatabaseConnection;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::DatabaseConnectionDto => {
                Ok(Projection::DatabaseConnectionDto(DatabaseConnectionDto {
                    id: self.id,
                    name: self.name.clone(),
                    connection_string: self.connection_string.clone(),
                    // A missing owner stays missing; a present one is cast
                    // recursively.
                    account: cast_owner(self.account.as_ref())?,
                    created_date: self.created_date(),
                    modified_date: self.modified_date(),
                }))
            }
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
    fn null_owner_is_preserved_as_null() {
        let mut connection = DatabaseConnection::new(clock());
        connection.set_name("primary");

        let dto: DatabaseConnectionDto = connection.cast().unwrap();
        assert!(dto.account.is_none());
    }

    #[test]
    fn present_owner_is_cast_recursively() {
        let clock = clock();
        let mut account = Account::new(clock.clone());
        account.set_id(10).unwrap();
        account.set_name("Household");

        let mut connection = DatabaseConnection::new(clock.clone());
        connection.set_account(Some(account));

        let dto: DatabaseConnectionDto = connection.cast().unwrap();
        let account_dto = dto.account.expect("owner should survive the cast");
        assert_eq!(account_dto.id, 10);
        assert_eq!(account_dto.name, "Household");
    }

    #[test]
    fn unsupported_target_names_source_and_target() {
        let connection = DatabaseConnection::new(clock());
        let err = connection.cast::<Account>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot cast DatabaseConnection to type Account."
        );
    }
}
