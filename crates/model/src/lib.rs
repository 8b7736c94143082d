//! `organizer-model` — personal-organizer domain entities.
//!
//! Pure in-memory domain logic: validated entities with audit stamps, DTO
//! projection through the type-directed cast engine, and the linked-entity
//! owner resolver. No IO, no storage, no HTTP.

mod macros;

pub mod account;
pub mod address;
pub mod cast;
pub mod connection;
pub mod contact;
pub mod dto;
pub mod email;
pub mod group;
pub mod linked;
pub mod organization;
pub mod phone;
pub mod user;

pub use account::{Account, Feature, SubAccount};
pub use address::{Address, AddressVariant};
pub use cast::{CastKind, CastTarget, Castable, Projection};
pub use connection::DatabaseConnection;
pub use contact::Contact;
pub use dto::{
    AccountDto, AddressDto, ContactDto, DatabaseConnectionDto, EmailDto, FeatureDto, GroupDto,
    OrganizationDto, PhoneNumberDto, SubAccountDto, UserDto,
};
pub use email::{Email, EmailKind};
pub use group::Group;
pub use linked::LinkedEntity;
pub use organization::Organization;
pub use phone::{PhoneKind, PhoneNumber};
pub use user::User;
