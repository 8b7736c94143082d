//! Data transfer objects: serialization-facing, behavior-free counterparts
//! of the domain entities.
//!
//! DTOs are created by the cast engine or by deserialization, never own
//! domain entities, and carry no owner-resolution logic - an owner appears
//! only as its derived id/type scalars. Each DTO still implements the
//! `Entity` capability and the cast contract so generic infrastructure can
//! handle DTOs and domain entities alike; a DTO's single cast target is
//! its domain counterpart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use organizer_core::{system_clock, DomainResult};

use crate::account::{Account, Feature, SubAccount};
use crate::address::{Address, AddressVariant};
use crate::cast::{unsupported, CastKind, Castable, Projection};
use crate::connection::DatabaseConnection;
use crate::contact::Contact;
use crate::email::{Email, EmailKind};
use crate::group::Group;
use crate::macros::impl_dto_entity;
use crate::organization::Organization;
use crate::phone::{PhoneKind, PhoneNumber};
use crate::user::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailDto {
    pub id: i64,
    pub email_address: String,
    pub kind: EmailKind,
    pub linked_entity_id: Option<i64>,
    pub linked_entity_type: Option<String>,
    pub created_date: DateTime<Utc>,
    pub modified_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumberDto {
    pub id: i64,
    pub number: String,
    pub kind: PhoneKind,
    pub linked_entity_id: Option<i64>,
    pub linked_entity_type: Option<String>,
    pub created_date: DateTime<Utc>,
    pub modified_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    pub id: i64,
    pub street: String,
    pub street2: Option<String>,
    pub city: String,
    #[serde(flatten)]
    pub variant: AddressVariant,
    pub linked_entity_id: Option<i64>,
    pub linked_entity_type: Option<String>,
    pub created_date: DateTime<Utc>,
    pub modified_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDto {
    pub id: i64,
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deceased_date: Option<DateTime<Utc>>,
    /// Absent lists deserialize as empty, never as null.
    #[serde(default)]
    pub emails: Vec<EmailDto>,
    #[serde(default)]
    pub phone_numbers: Vec<PhoneNumberDto>,
    #[serde(default)]
    pub addresses: Vec<AddressDto>,
    pub created_date: DateTime<Utc>,
    pub modified_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_super_user: Option<bool>,
    pub created_date: DateTime<Utc>,
    pub modified_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDto {
    pub id: i64,
    pub name: String,
    pub created_date: DateTime<Utc>,
    pub modified_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_date: DateTime<Utc>,
    pub modified_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubAccountDto {
    pub id: i64,
    pub name: String,
    pub account_id: Option<i64>,
    pub created_date: DateTime<Utc>,
    pub modified_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub features: Vec<FeatureDto>,
    pub created_date: DateTime<Utc>,
    pub modified_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub members: Vec<ContactDto>,
    pub created_date: DateTime<Utc>,
    pub modified_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConnectionDto {
    pub id: i64,
    pub name: String,
    pub connection_string: String,
    pub account: Option<AccountDto>,
    pub created_date: DateTime<Utc>,
    pub modified_date: Option<DateTime<Utc>>,
}

impl_dto_entity!(EmailDto, "EmailDto");
impl_dto_entity!(PhoneNumberDto, "PhoneNumberDto");
impl_dto_entity!(AddressDto, "AddressDto");
impl_dto_entity!(ContactDto, "ContactDto");
impl_dto_entity!(UserDto, "UserDto");
impl_dto_entity!(OrganizationDto, "OrganizationDto");
impl_dto_entity!(FeatureDto, "FeatureDto");
impl_dto_entity!(SubAccountDto, "SubAccountDto");
impl_dto_entity!(AccountDto, "AccountDto");
impl_dto_entity!(GroupDto, "GroupDto");
impl_dto_entity!(DatabaseConnectionDto, "DatabaseConnectionDto");

// DTO-side casts rebuild the domain counterpart under the production
// clock. Owner references are not reconstructible from the id/type
// scalars a DTO carries, so rebuilt leaves start unowned.

impl Castable for EmailDto {
    const KIND: CastKind = CastKind::EmailDto;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::Email => Ok(Projection::Email(Email::from_dto(
                self,
                None,
                system_clock(),
            )?)),
            other => Err(unsupported(Self::KIND, other)),
        }
    }
}

impl Castable for PhoneNumberDto {
    const KIND: CastKind = CastKind::PhoneNumberDto;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::PhoneNumber => Ok(Projection::PhoneNumber(PhoneNumber::from_dto(
                self,
                None,
                system_clock(),
            )?)),
            other => Err(unsupported(Self::KIND, other)),
        }
    }
}

impl Castable for AddressDto {
    const KIND: CastKind = CastKind::AddressDto;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::Address => Ok(Projection::Address(Address::from_dto(
                self,
                None,
                system_clock(),
            )?)),
            other => Err(unsupported(Self::KIND, other)),
        }
    }
}

impl Castable for ContactDto {
    const KIND: CastKind = CastKind::ContactDto;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::Contact => Ok(Projection::Contact(Contact::from_dto(
                self,
                system_clock(),
            )?)),
            other => Err(unsupported(Self::KIND, other)),
        }
    }
}

impl Castable for UserDto {
    const KIND: CastKind = CastKind::UserDto;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::User => Ok(Projection::User(User::from_dto(self, system_clock())?)),
            other => Err(unsupported(Self::KIND, other)),
        }
    }
}

impl Castable for OrganizationDto {
    const KIND: CastKind = CastKind::OrganizationDto;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::Organization => Ok(Projection::Organization(Organization::from_dto(
                self,
                system_clock(),
            )?)),
            other => Err(unsupported(Self::KIND, other)),
        }
    }
}

impl Castable for FeatureDto {
    const KIND: CastKind = CastKind::FeatureDto;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::Feature => Ok(Projection::Feature(Feature::from_dto(
                self,
                system_clock(),
            )?)),
            other => Err(unsupported(Self::KIND, other)),
        }
    }
}

impl Castable for SubAccountDto {
    const KIND: CastKind = CastKind::SubAccountDto;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::SubAccount => Ok(Projection::SubAccount(SubAccount::from_dto(
                self,
                system_clock(),
            )?)),
            other => Err(unsupported(Self::KIND, other)),
        }
    }
}

impl Castable for AccountDto {
    const KIND: CastKind = CastKind::AccountDto;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::Account => Ok(Projection::Account(Account::from_dto(
                self,
                system_clock(),
            )?)),
            other => Err(unsupported(Self::KIND, other)),
        }
    }
}

impl Castable for GroupDto {
    const KIND: CastKind = CastKind::GroupDto;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::Group => Ok(Projection::Group(Group::from_dto(self, system_clock())?)),
            other => Err(unsupported(Self::KIND, other)),
        }
    }
}

impl Castable for DatabaseConnectionDto {
    const KIND: CastKind = CastKind::DatabaseConnectionDto;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::DatabaseConnection => Ok(Projection::DatabaseConnection(
                DatabaseConnection::from_dto(self, system_clock())?,
            )),
            other => Err(unsupported(Self::KIND, other)),
        }
    }
}
