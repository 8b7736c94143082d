//! Type-directed cast engine.
//!
//! Every castable type occupies one slot of the closed `CastKind` table.
//! A source projects into its enumerated target set through an exhaustive
//! `match`; the wildcard arm is the unsupported-cast error carrying both
//! type names. Dispatch is compiler-checked - adding a kind without
//! wiring its projections fails to build, not at runtime.

use organizer_core::{DomainError, DomainResult};

use crate::account::{Account, Feature, SubAccount};
use crate::address::Address;
use crate::connection::DatabaseConnection;
use crate::contact::Contact;
use crate::dto::{
    AccountDto, AddressDto, ContactDto, DatabaseConnectionDto, EmailDto, FeatureDto, GroupDto,
    OrganizationDto, PhoneNumberDto, SubAccountDto, UserDto,
};
use crate::email::Email;
use crate::group::Group;
use crate::macros::impl_cast_target;
use crate::organization::Organization;
use crate::phone::PhoneNumber;
use crate::user::User;

/// Every type the cast engine can name, on either side of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastKind {
    Account,
    AccountDto,
    Address,
    AddressDto,
    Contact,
    ContactDto,
    DatabaseConnection,
    DatabaseConnectionDto,
    Email,
    EmailDto,
    Feature,
    FeatureDto,
    Group,
    GroupDto,
    Organization,
    OrganizationDto,
    PhoneNumber,
    PhoneNumberDto,
    SubAccount,
    SubAccountDto,
    User,
    UserDto,
}

impl CastKind {
    /// Runtime type name as surfaced in error messages.
    pub const fn type_name(self) -> &'static str {
        match self {
            CastKind::Account => "Account",
            CastKind::AccountDto => "AccountDto",
            CastKind::Address => "Address",
            CastKind::AddressDto => "AddressDto",
            CastKind::Contact => "Contact",
            CastKind::ContactDto => "ContactDto",
            CastKind::DatabaseConnection => "DatabaseConnection",
            CastKind::DatabaseConnectionDto => "DatabaseConnectionDto",
            CastKind::Email => "Email",
            CastKind::EmailDto => "EmailDto",
            CastKind::Feature => "Feature",
            CastKind::FeatureDto => "FeatureDto",
            CastKind::Group => "Group",
            CastKind::GroupDto => "GroupDto",
            CastKind::Organization => "Organization",
            CastKind::OrganizationDto => "OrganizationDto",
            CastKind::PhoneNumber => "PhoneNumber",
            CastKind::PhoneNumberDto => "PhoneNumberDto",
            CastKind::SubAccount => "SubAccount",
            CastKind::SubAccountDto => "SubAccountDto",
            CastKind::User => "User",
            CastKind::UserDto => "UserDto",
        }
    }
}

/// A value produced by the cast engine.
#[derive(Debug)]
pub enum Projection {
    Account(Account),
    AccountDto(AccountDto),
    Address(Address),
    AddressDto(AddressDto),
    Contact(Contact),
    ContactDto(ContactDto),
    DatabaseConnection(DatabaseConnection),
    DatabaseConnectionDto(DatabaseConnectionDto),
    Email(Email),
    EmailDto(EmailDto),
    Feature(Feature),
    FeatureDto(FeatureDto),
    Group(Group),
    GroupDto(GroupDto),
    Organization(Organization),
    OrganizationDto(OrganizationDto),
    PhoneNumber(PhoneNumber),
    PhoneNumberDto(PhoneNumberDto),
    SubAccount(SubAccount),
    SubAccountDto(SubAccountDto),
    User(User),
    UserDto(UserDto),
}

/// Conversion capability exposed by every entity and DTO.
pub trait Castable {
    /// The slot this type occupies in the cast table.
    const KIND: CastKind;

    /// Produce the projection for `target`, or fail with an
    /// unsupported-cast error naming both ends.
    fn project(&self, target: CastKind) -> DomainResult<Projection>;

    /// Type-directed entry point: `entity.cast::<EmailDto>()`.
    ///
    /// Each call allocates a fresh instance; the source is never mutated.
    fn cast<T: CastTarget>(&self) -> DomainResult<T>
    where
        Self: Sized,
    {
        tracing::trace!(
            source = Self::KIND.type_name(),
            target = T::KIND.type_name(),
            "cast"
        );
        let projection = self.project(T::KIND)?;
        T::from_projection(projection).ok_or_else(|| {
            DomainError::unsupported_cast(Self::KIND.type_name(), T::KIND.type_name())
        })
    }
}

/// Targets the generic `cast` entry point can return.
pub trait CastTarget: Sized {
    const KIND: CastKind;

    /// Unpack the projection variant matching `KIND`.
    fn from_projection(projection: Projection) -> Option<Self>;
}

/// Unsupported-cast error for a source/target pair.
pub(crate) fn unsupported(source: CastKind, target: CastKind) -> DomainError {
    DomainError::unsupported_cast(source.type_name(), target.type_name())
}

/// Cast every element of a collection, preserving length and order.
pub(crate) fn cast_all<S, T>(items: &[S]) -> DomainResult<Vec<T>>
where
    S: Castable,
    T: CastTarget,
{
    items.iter().map(|item| item.cast::<T>()).collect()
}

/// Cast an optional owner link, preserving `None` as `None`.
pub(crate) fn cast_owner<S, T>(owner: Option<&S>) -> DomainResult<Option<T>>
where
    S: Castable,
    T: CastTarget,
{
    owner.map(|o| o.cast::<T>()).transpose()
}

impl_cast_target!(Account, Account);
impl_cast_target!(AccountDto, AccountDto);
impl_cast_target!(Address, Address);
impl_cast_target!(AddressDto, AddressDto);
impl_cast_target!(Contact, Contact);
impl_cast_target!(ContactDto, ContactDto);
impl_cast_target!(DatabaseConnection, DatabaseConnection);
impl_cast_target!(DatabaseConnectionDto, DatabaseConnectionDto);
impl_cast_target!(Email, Email);
impl_cast_target!(EmailDto, EmailDto);
impl_cast_target!(Feature, Feature);
impl_cast_target!(FeatureDto, FeatureDto);
impl_cast_target!(Group, Group);
impl_cast_target!(GroupDto, GroupDto);
impl_cast_target!(Organization, Organization);
impl_cast_target!(OrganizationDto, OrganizationDto);
impl_cast_target!(PhoneNumber, PhoneNumber);
impl_cast_target!(PhoneNumberDto, PhoneNumberDto);
impl_cast_target!(SubAccount, SubAccount);
impl_cast_target!(SubAccountDto, SubAccountDto);
impl_cast_target!(User, User);
impl_cast_target!(UserDto, UserDto);
