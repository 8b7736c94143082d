//! Contact: a person in the organizer, with email, phone and address books.

use chrono::{DateTime, Utc};
use serde::Serialize;

use organizer_core::{system_clock, DomainError, DomainResult, SharedClock, Stamps};

use crate::address::Address;
use crate::cast::{cast_all, unsupported, CastKind, Castable, Projection};
use crate::dto::ContactDto;
use crate::email::Email;
use crate::linked::LinkedEntity;
use crate::macros::impl_entity;
use crate::phone::PhoneNumber;

/// Compose a full name from its parts.
///
/// Partial name data is invalid: first and last name must both be present
/// before anything is composed. A present middle name is interleaved.
pub(crate) fn compose_full_name(
    first: Option<&str>,
    middle: Option<&str>,
    last: Option<&str>,
) -> DomainResult<String> {
    let first = first.ok_or(DomainError::MissingPart("first_name"))?;
    let last = last.ok_or(DomainError::MissingPart("last_name"))?;
    Ok(match middle {
        Some(middle) => format!("{first} {middle} {last}"),
        None => format!("{first} {last}"),
    })
}

/// A person with contact channels.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    id: i64,
    first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    middle_name: Option<String>,
    last_name: Option<String>,
    birth_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deceased_date: Option<DateTime<Utc>>,
    emails: Vec<Email>,
    phone_numbers: Vec<PhoneNumber>,
    addresses: Vec<Address>,
    #[serde(flatten)]
    stamps: Stamps,
}

impl Contact {
    /// Fresh, empty contact.
    pub fn new(clock: SharedClock) -> Self {
        Self {
            id: 0,
            first_name: None,
            middle_name: None,
            last_name: None,
            birth_date: None,
            deceased_date: None,
            emails: Vec::new(),
            phone_numbers: Vec::new(),
            addresses: Vec::new(),
            stamps: Stamps::new(clock),
        }
    }

    /// Full reconstruction with explicit audit stamps.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: i64,
        first_name: Option<String>,
        middle_name: Option<String>,
        last_name: Option<String>,
        birth_date: Option<DateTime<Utc>>,
        deceased_date: Option<DateTime<Utc>>,
        emails: Vec<Email>,
        phone_numbers: Vec<PhoneNumber>,
        addresses: Vec<Address>,
        created: DateTime<Utc>,
        modified: Option<DateTime<Utc>>,
        clock: SharedClock,
    ) -> DomainResult<Self> {
        if id < 0 {
            return Err(DomainError::out_of_range("id", id));
        }
        Ok(Self {
            id,
            first_name,
            middle_name,
            last_name,
            birth_date,
            deceased_date,
            emails,
            phone_numbers,
            addresses,
            stamps: Stamps::restore(clock, created, modified),
        })
    }

    /// Project a DTO into a new domain contact.
    ///
    /// Every rebuilt child is owned by this contact: its linked entity is
    /// pointed at a snapshot taken before the children attach, which keeps
    /// the object graph finite.
    pub fn from_dto(dto: &ContactDto, clock: SharedClock) -> DomainResult<Self> {
        let mut contact = Self::restore(
            dto.id,
            dto.first_name.clone(),
            dto.middle_name.clone(),
            dto.last_name.clone(),
            dto.birth_date,
            dto.deceased_date,
            Vec::new(),
            Vec::new(),
            Vec::new(),
            dto.created_date,
            dto.modified_date,
            clock.clone(),
        )?;

        let owner = LinkedEntity::from(contact.clone());
        contact.emails = dto
            .emails
            .iter()
            .map(|child| Email::from_dto(child, Some(owner.clone()), clock.clone()))
            .collect::<DomainResult<Vec<_>>>()?;
        contact.phone_numbers = dto
            .phone_numbers
            .iter()
            .map(|child| PhoneNumber::from_dto(child, Some(owner.clone()), clock.clone()))
            .collect::<DomainResult<Vec<_>>>()?;
        contact.addresses = dto
            .addresses
            .iter()
            .map(|child| Address::from_dto(child, Some(owner.clone()), clock.clone()))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(contact)
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

    /// Full legal name composed from the stored parts.
    pub fn full_name(&self) -> DomainResult<String> {
        compose_full_name(
            self.first_name.as_deref(),
            self.middle_name.as_deref(),
            self.last_name.as_deref(),
        )
    }

    pub fn birth_date(&self) -> Option<DateTime<Utc>> {
        self.birth_date
    }

    pub fn set_birth_date(&mut self, value: Option<DateTime<Utc>>) {
        self.birth_date = value;
        self.stamps.touch();
    }

    pub fn deceased_date(&self) -> Option<DateTime<Utc>> {
        self.deceased_date
    }

    pub fn set_deceased_date(&mut self, value: Option<DateTime<Utc>>) {
        self.deceased_date = value;
        self.stamps.touch();
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn set_emails(&mut self, emails: Vec<Email>) {
        self.emails = emails;
        self.stamps.touch();
    }

    pub fn phone_numbers(&self) -> &[PhoneNumber] {
        &self.phone_numbers
    }

    pub fn set_phone_numbers(&mut self, phone_numbers: Vec<PhoneNumber>) {
        self.phone_numbers = phone_numbers;
        self.stamps.touch();
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn set_addresses(&mut self, addresses: Vec<Address>) {
        self.addresses = addresses;
        self.stamps.touch();
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self::new(system_clock())
    }
}

impl_entity!(Contact, "Contact");

impl Castable for Contact {
    const KIND: CastKind = CastKind::Contact;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::ContactDto => Ok(Projection::ContactDto(ContactDto {
                id: self.id,
                first_name: self.first_name.clone(),
                middle_name: self.middle_name.clone(),
                last_name: self.last_name.clone(),
                birth_date: self.birth_date,
                deceased_date: self.deceased_date,
                emails: cast_all(&self.emails)?,
                phone_numbers: cast_all(&self.phone_numbers)?,
                addresses: cast_all(&self.addresses)?,
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
    use crate::email::EmailKind;
    use chrono::TimeZone;
    use organizer_core::ManualClock;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn clock() -> SharedClock {
        ManualClock::starting_at(instant())
    }

    fn named_contact(clock: SharedClock) -> Contact {
        let mut contact = Contact::new(clock);
        contact.set_id(123).unwrap();
        contact.set_first_name(Some("Ada".to_owned()));
        contact.set_last_name(Some("Lovelace".to_owned()));
        contact
    }

    #[test]
    fn full_name_composes_first_and_last() {
        let contact = named_contact(clock());
        assert_eq!(contact.full_name().unwrap(), "Ada Lovelace");
    }

    #[test]
    fn full_name_interleaves_a_middle_name() {
        let mut contact = named_contact(clock());
        contact.set_middle_name(Some("King".to_owned()));
        assert_eq!(contact.full_name().unwrap(), "Ada King Lovelace");
    }

    #[test]
    fn partial_name_data_is_an_error_not_a_degraded_value() {
        let mut contact = named_contact(clock());
        contact.set_first_name(None);
        let err = contact.full_name().unwrap_err();
        assert!(matches!(err, DomainError::MissingPart("first_name")));
    }

    #[test]
    fn cast_to_dto_maps_children_element_wise() {
        let clock = clock();
        let mut contact = named_contact(clock.clone());

        let mut personal = Email::new(clock.clone());
        personal.set_email_address("ada@home.example");
        let mut work = Email::new(clock.clone());
        work.set_email_address("ada@work.example");
        work.set_kind(EmailKind::Work);
        contact.set_emails(vec![personal, work]);

        let dto: ContactDto = contact.cast().unwrap();
        assert_eq!(dto.emails.len(), 2);
        assert_eq!(dto.emails[0].email_address, "ada@home.example");
        assert_eq!(dto.emails[1].email_address, "ada@work.example");
        assert!(dto.phone_numbers.is_empty());
    }

    #[test]
    fn repeated_casts_are_independent() {
        let contact = named_contact(clock());
        let first: ContactDto = contact.cast().unwrap();
        let second: ContactDto = contact.cast().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn from_dto_points_children_back_at_the_contact() {
        let clock = clock();
        let mut contact = named_contact(clock.clone());
        let mut email = Email::new(clock.clone());
        email.set_email_address("ada@home.example");
        contact.set_emails(vec![email]);

        let dto: ContactDto = contact.cast().unwrap();
        let rebuilt = Contact::from_dto(&dto, clock).unwrap();

        assert_eq!(rebuilt.emails().len(), 1);
        let child = &rebuilt.emails()[0];
        assert_eq!(child.linked_entity_type(), Some("Contact"));
        assert_eq!(child.linked_entity_id(), Some(123));
    }

    #[test]
    fn unsupported_target_names_source_and_target() {
        let contact = named_contact(clock());
        let err = contact.cast::<crate::user::User>().unwrap_err();
        assert_eq!(err.to_string(), "Cannot cast Contact to type User.");
    }

    #[test]
    fn json_skips_absent_deceased_and_middle_name() {
        let contact = named_contact(clock());
        let json: serde_json::Value =
            serde_json::from_str(&contact.to_json().unwrap()).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert!(json.get("middleName").is_none());
        assert!(json.get("deceasedDate").is_none());
        // Non-optional nullables serialize as explicit null.
        assert!(json["birthDate"].is_null());
    }
}
