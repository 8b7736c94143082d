//! User: an authenticated person operating the organizer.

use chrono::{DateTime, Utc};
use serde::Serialize;

use organizer_core::{system_clock, DomainError, DomainResult, SharedClock, Stamps};

use crate::cast::{unsupported, CastKind, Castable, Projection};
use crate::contact::{compose_full_name, Contact};
use crate::dto::UserDto;
use crate::macros::impl_entity;

/// A user account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<String>,
    first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    middle_name: Option<String>,
    last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_super_user: Option<bool>,
    #[serde(flatten)]
    stamps: Stamps,
}

impl User {
    /// Fresh, empty user.
    pub fn new(clock: SharedClock) -> Self {
        Self {
            id: 0,
            user_name: None,
            password: None,
            first_name: None,
            middle_name: None,
            last_name: None,
            is_super_user: None,
            stamps: Stamps::new(clock),
        }
    }

    /// Full reconstruction with explicit audit stamps.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: i64,
        user_name: Option<String>,
        password: Option<String>,
        first_name: Option<String>,
        middle_name: Option<String>,
        last_name: Option<String>,
        is_super_user: Option<bool>,
        created: DateTime<Utc>,
        modified: Option<DateTime<Utc>>,
        clock: SharedClock,
    ) -> DomainResult<Self> {
        if id < 0 {
            return Err(DomainError::out_of_range("id", id));
        }
        Ok(Self {
            id,
            user_name,
            password,
            first_name,
            middle_name,
            last_name,
            is_super_user,
            stamps: Stamps::restore(clock, created, modified),
        })
    }

    /// Project a DTO into a new domain user.
    pub fn from_dto(dto: &UserDto, clock: SharedClock) -> DomainResult<Self> {
        Self::restore(
            dto.id,
            dto.user_name.clone(),
            dto.password.clone(),
            dto.first_name.clone(),
            dto.middle_name.clone(),
            dto.last_name.clone(),
            dto.is_super_user,
            dto.created_date,
            dto.modified_date,
            clock,
        )
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn set_user_name(&mut self, value: Option<String>) {
        self.user_name = value;
        self.stamps.touch();
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn set_password(&mut self, value: Option<String>) {
        self.password = value;
        self.stamps.touch();
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn set_first_name(&mut self, value: Option<String>) {
        self.first_name = value;
        self.stamps.touch();
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    pub fn set_middle_name(&mut self, value: Option<String>) {
        self.middle_name = value;
        self.stamps.touch();
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn set_last_name(&mut self, value: Option<String>) {
        self.last_name = value;
        self.stamps.touch();
    }

    /// Full legal name composed from the stored parts; same strict policy
    /// as `Contact::full_name`.
    pub fn full_name(&self) -> DomainResult<String> {
        compose_full_name(
            self.first_name.as_deref(),
            self.middle_name.as_deref(),
            self.last_name.as_deref(),
        )
    }

    pub fn is_super_user(&self) -> Option<bool> {
        self.is_super_user
    }

    pub fn set_is_super_user(&mut self, value: Option<bool>) {
        self.is_super_user = value;
        self.stamps.touch();
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new(system_clock())
    }
}

impl_entity!(User, "User");

impl Castable for User {
    const KIND: CastKind = CastKind::User;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::UserDto => Ok(Projection::UserDto(UserDto {
                id: self.id,
                user_name: self.user_name.clone(),
                password: self.password.clone(),
                first_name: self.first_name.clone(),
                middle_name: self.middle_name.clone(),
                last_name: self.last_name.clone(),
                is_super_user: self.is_super_user,
                created_date: self.created_date(),
                modified_date: self.modified_date(),
            })),
            // Deliberately lossy: a contact lives in a different identity
            // domain, so the user's identifier and credentials do not
            // carry over. Only the name parts and audit stamps survive.
            CastKind::Contact => {
                let contact = Contact::restore(
                    0,
                    self.first_name.clone(),
                    self.middle_name.clone(),
                    self.last_name.clone(),
                    None,
                    None,
                    Vec::new(),
                    Vec::new(),
                    Vec::new(),
                    self.created_date(),
                    self.modified_date(),
                    self.stamps.clock(),
                )?;
                Ok(Projection::Contact(contact))
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

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn clock() -> SharedClock {
        ManualClock::starting_at(instant())
    }

    fn admin(clock: SharedClock) -> User {
        let mut user = User::new(clock);
        user.set_id(42).unwrap();
        user.set_user_name(Some("ada".to_owned()));
        user.set_first_name(Some("Ada".to_owned()));
        user.set_last_name(Some("Lovelace".to_owned()));
        user.set_is_super_user(Some(true));
        user
    }

    #[test]
    fn cast_to_dto_copies_every_field() {
        let user = admin(clock());
        let dto: UserDto = user.cast().unwrap();
        assert_eq!(dto.id, 42);
        assert_eq!(dto.user_name.as_deref(), Some("ada"));
        assert_eq!(dto.is_super_user, Some(true));
        assert_eq!(dto.created_date, user.created_date());
    }

    #[test]
    fn cast_to_contact_is_deliberately_lossy() {
        let user = admin(clock());
        let contact: Contact = user.cast().unwrap();

        // Identity does not carry over between the two domains.
        assert_eq!(contact.id(), 0);
        assert!(contact.emails().is_empty());
        assert!(contact.phone_numbers().is_empty());
        assert!(contact.addresses().is_empty());

        // Name parts and audit stamps do.
        assert_eq!(contact.first_name(), Some("Ada"));
        assert_eq!(contact.last_name(), Some("Lovelace"));
        assert_eq!(contact.created_date(), user.created_date());
        assert_eq!(contact.modified_date(), user.modified_date());
    }

    #[test]
    fn unsupported_target_names_source_and_target() {
        let user = admin(clock());
        let err = user.cast::<crate::group::Group>().unwrap_err();
        assert_eq!(err.to_string(), "Cannot cast User to type Group.");
    }

    #[test]
    fn full_name_requires_both_outer_parts() {
        let mut user = admin(clock());
        assert_eq!(user.full_name().unwrap(), "Ada Lovelace");

        user.set_last_name(None);
        assert!(matches!(
            user.full_name().unwrap_err(),
            DomainError::MissingPart("last_name")
        ));
    }

    #[test]
    fn json_skips_absent_optional_flags() {
        let clock = clock();
        let mut user = User::new(clock);
        user.set_first_name(Some("Ada".to_owned()));

        let json: serde_json::Value =
            serde_json::from_str(&user.to_json().unwrap()).unwrap();
        assert!(json.get("userName").is_none());
        assert!(json.get("isSuperUser").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["firstName"], "Ada");
        assert!(json["lastName"].is_null());
    }
}
