//! Polymorphic owner association for leaf values.
//!
//! An email, phone number or address belongs to exactly one owner. Four
//! owner kinds are recognized with dedicated variants; any other entity
//! rides in the open `Other` variant behind the `Entity` capability.
//! Exclusivity is structural: an enum holds exactly one variant, so two
//! "slots" can never be populated at once.

use organizer_core::Entity;

use crate::account::SubAccount;
use crate::contact::Contact;
use crate::organization::Organization;
use crate::user::User;

/// The single owner of an association-bearing value.
#[derive(Debug)]
pub enum LinkedEntity {
    User(Box<User>),
    Contact(Box<Contact>),
    Organization(Box<Organization>),
    SubAccount(Box<SubAccount>),
    /// Any owner outside the closed set, stored by capability.
    Other(Box<dyn Entity>),
}

impl LinkedEntity {
    /// Wrap an owner outside the closed set.
    pub fn other(entity: impl Entity + 'static) -> Self {
        Self::Other(Box::new(entity))
    }

    /// Identifier of the owner.
    ///
    /// Out-of-range identifiers (negative, `i64::MIN`) pass through
    /// untouched; range validation is the owning entity's own concern.
    pub fn id(&self) -> i64 {
        match self {
            LinkedEntity::User(user) => user.id(),
            LinkedEntity::Contact(contact) => contact.id(),
            LinkedEntity::Organization(organization) => organization.id(),
            LinkedEntity::SubAccount(sub_account) => sub_account.id(),
            LinkedEntity::Other(entity) => entity.id(),
        }
    }

    /// Runtime type name of the owner.
    pub fn type_name(&self) -> &'static str {
        match self {
            LinkedEntity::User(_) => "User",
            LinkedEntity::Contact(_) => "Contact",
            LinkedEntity::Organization(_) => "Organization",
            LinkedEntity::SubAccount(_) => "SubAccount",
            LinkedEntity::Other(entity) => entity.type_name(),
        }
    }
}

impl Clone for LinkedEntity {
    fn clone(&self) -> Self {
        match self {
            LinkedEntity::User(user) => LinkedEntity::User(user.clone()),
            LinkedEntity::Contact(contact) => LinkedEntity::Contact(contact.clone()),
            LinkedEntity::Organization(organization) => {
                LinkedEntity::Organization(organization.clone())
            }
            LinkedEntity::SubAccount(sub_account) => LinkedEntity::SubAccount(sub_account.clone()),
            LinkedEntity::Other(entity) => LinkedEntity::Other(entity.clone_entity()),
        }
    }
}

impl From<User> for LinkedEntity {
    fn from(owner: User) -> Self {
        Self::User(Box::new(owner))
    }
}

impl From<Contact> for LinkedEntity {
    fn from(owner: Contact) -> Self {
        Self::Contact(Box::new(owner))
    }
}

impl From<Organization> for LinkedEntity {
    fn from(owner: Organization) -> Self {
        Self::Organization(Box::new(owner))
    }
}

impl From<SubAccount> for LinkedEntity {
    fn from(owner: SubAccount) -> Self {
        Self::SubAccount(Box::new(owner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use organizer_core::{ManualClock, SharedClock};

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn clock() -> SharedClock {
        ManualClock::starting_at(instant())
    }

    /// Entity outside the closed owner set.
    #[derive(Debug, Clone)]
    struct Widget {
        id: i64,
        created: DateTime<Utc>,
    }

    impl Entity for Widget {
        fn id(&self) -> i64 {
            self.id
        }

        fn created_date(&self) -> DateTime<Utc> {
            self.created
        }

        fn modified_date(&self) -> Option<DateTime<Utc>> {
            None
        }

        fn type_name(&self) -> &'static str {
            "Widget"
        }

        fn clone_entity(&self) -> Box<dyn Entity> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn closed_set_kinds_resolve_id_and_type_name() {
        let mut contact = Contact::new(clock());
        contact.set_id(123).unwrap();
        let linked = LinkedEntity::from(contact);
        assert_eq!(linked.id(), 123);
        assert_eq!(linked.type_name(), "Contact");

        let mut organization = Organization::new(clock());
        organization.set_id(7).unwrap();
        let linked = LinkedEntity::from(organization);
        assert_eq!(linked.id(), 7);
        assert_eq!(linked.type_name(), "Organization");
    }

    #[test]
    fn fallback_kind_delegates_to_the_boxed_entity() {
        let linked = LinkedEntity::other(Widget {
            id: 42,
            created: instant(),
        });
        assert_eq!(linked.id(), 42);
        assert_eq!(linked.type_name(), "Widget");
    }

    #[test]
    fn out_of_range_owner_ids_pass_through_unvalidated() {
        let linked = LinkedEntity::other(Widget {
            id: i64::MIN,
            created: instant(),
        });
        assert_eq!(linked.id(), i64::MIN);
    }

    #[test]
    fn clone_preserves_the_fallback_owner() {
        let linked = LinkedEntity::other(Widget {
            id: 9,
            created: instant(),
        });
        let cloned = linked.clone();
        assert_eq!(cloned.id(), 9);
        assert_eq!(cloned.type_name(), "Widget");
    }
}
