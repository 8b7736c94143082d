//! Account aggregate: a subscription with its enabled features, plus the
//! sub-accounts hanging off it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use organizer_core::{system_clock, DomainError, DomainResult, SharedClock, Stamps};

use crate::cast::{cast_all, unsupported, CastKind, Castable, Projection};
use crate::dto::{AccountDto, FeatureDto, SubAccountDto};
use crate::macros::impl_entity;

/// A capability enabled on an account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    id: i64,
    name: String,
    description: Option<String>,
    #[serde(flatten)]
    stamps: Stamps,
}

impl Feature {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            id: 0,
            name: String::new(),
            description: None,
            stamps: Stamps::new(clock),
        }
    }

    /// Full reconstruction with explicit audit stamps.
    pub fn restore(
        id: i64,
        name: impl Into<String>,
        description: Option<String>,
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
            description,
            stamps: Stamps::restore(clock, created, modified),
        })
    }

    /// Project a DTO into a new domain feature.
    pub fn from_dto(dto: &FeatureDto, clock: SharedClock) -> DomainResult<Self> {
        Self::restore(
            dto.id,
            dto.name.clone(),
            dto.description.clone(),
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

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
        self.stamps.touch();
    }
}

impl Default for Feature {
    fn default() -> Self {
        Self::new(system_clock())
    }
}

impl_entity!(Feature, "Feature");

impl Castable for Feature {
    const KIND: CastKind = CastKind::Feature;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::FeatureDto => Ok(Projection::FeatureDto(FeatureDto {
                id: self.id,
                name: self.name.clone(),
                description: self.description.clone(),
                created_date: self.created_date(),
                modified_date: self.modified_date(),
            })),
            other => Err(unsupported(Self::KIND, other)),
        }
    }
}

/// A child account scoped under a parent account; one of the closed-set
/// owner kinds recognized by the linked-entity resolver.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubAccount {
    id: i64,
    name: String,
    account_id: Option<i64>,
    #[serde(flatten)]
    stamps: Stamps,
}

impl SubAccount {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            id: 0,
            name: String::new(),
            account_id: None,
            stamps: Stamps::new(clock),
        }
    }

    /// Full reconstruction with explicit audit stamps.
    pub fn restore(
        id: i64,
        name: impl Into<String>,
        account_id: Option<i64>,
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
            account_id,
            stamps: Stamps::restore(clock, created, modified),
        })
    }

    /// Project a DTO into a new domain sub-account.
    pub fn from_dto(dto: &SubAccountDto, clock: SharedClock) -> DomainResult<Self> {
        Self::restore(
            dto.id,
            dto.name.clone(),
            dto.account_id,
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

    pub fn account_id(&self) -> Option<i64> {
        self.account_id
    }

    pub fn set_account_id(&mut self, value: Option<i64>) {
        self.account_id = value;
        self.stamps.touch();
    }
}

impl Default for SubAccount {
    fn default() -> Self {
        Self::new(system_clock())
    }
}

impl_entity!(SubAccount, "SubAccount");

impl Castable for SubAccount {
    const KIND: CastKind = CastKind::SubAccount;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::SubAccountDto => Ok(Projection::SubAccountDto(SubAccountDto {
                id: self.id,
                name: self.name.clone(),
                account_id: self.account_id,
                created_date: self.created_date(),
                modified_date: self.modified_date(),
            })),
            other => Err(unsupported(Self::KIND, other)),
        }
    }
}

/// A subscription account with its enabled features.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    id: i64,
    name: String,
    features: Vec<Feature>,
    #[serde(flatten)]
    stamps: Stamps,
}

impl Account {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            id: 0,
            name: String::new(),
            features: Vec::new(),
            stamps: Stamps::new(clock),
        }
    }

    /// Full reconstruction with explicit audit stamps.
    pub fn restore(
        id: i64,
        name: impl Into<String>,
        features: Vec<Feature>,
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
            features,
            stamps: Stamps::restore(clock, created, modified),
        })
    }

    /// Project a DTO into a new domain account.
    pub fn from_dto(dto: &AccountDto, clock: SharedClock) -> DomainResult<Self> {
        let features = dto
            .features
            .iter()
            .map(|child| Feature::from_dto(child, clock.clone()))
            .collect::<DomainResult<Vec<_>>>()?;
        Self::restore(
            dto.id,
            dto.name.clone(),
            features,
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

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn set_features(&mut self, features: Vec<Feature>) {
        self.features = features;
        self.stamps.touch();
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new(system_clock())
    }
}

impl_entity!(Account, "Account");

impl Castable for Account {
    const KIND: CastKind = CastKind::Account;

    fn project(&self, target: CastKind) -> DomainResult<Projection> {
        match target {
            CastKind::AccountDto => Ok(Projection::AccountDto(AccountDto {
                id: self.id,
                name: self.name.clone(),
                features: cast_all(&self.features)?,
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
    use crate::organization::Organization;
    use chrono::TimeZone;
    use organizer_core::ManualClock;

    fn clock() -> SharedClock {
        ManualClock::starting_at(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    }

    fn billing_feature(clock: SharedClock) -> Feature {
        let mut feature = Feature::new(clock);
        feature.set_id(1).unwrap();
        feature.set_name("billing");
        feature
    }

    #[test]
    fn cast_to_dto_maps_features_element_wise() {
        let clock = clock();
        let mut account = Account::new(clock.clone());
        account.set_id(10).unwrap();
        account.set_name("Household");
        account.set_features(vec![billing_feature(clock.clone())]);

        let dto: AccountDto = account.cast().unwrap();
        assert_eq!(dto.id, 10);
        assert_eq!(dto.features.len(), 1);
        assert_eq!(dto.features[0].name, "billing");
    }

    #[test]
    fn cast_to_organization_is_not_in_the_table() {
        let account = Account::new(clock());
        let err = account.cast::<Organization>().unwrap_err();
        assert_eq!(err.to_string(), "Cannot cast Account to type Organization.");
    }

    #[test]
    fn cast_to_feature_is_not_in_the_table() {
        let account = Account::new(clock());
        let err = account.cast::<Feature>().unwrap_err();
        assert_eq!(err.to_string(), "Cannot cast Account to type Feature.");
    }

    #[test]
    fn empty_feature_list_casts_to_an_empty_list() {
        let account = Account::new(clock());
        let dto: AccountDto = account.cast().unwrap();
        assert!(dto.features.is_empty());
    }

    #[test]
    fn sub_account_tracks_its_parent_by_id() {
        let mut sub_account = SubAccount::new(clock());
        sub_account.set_account_id(Some(10));
        assert_eq!(sub_account.account_id(), Some(10));
        assert!(sub_account.modified_date().is_some());
    }
}
