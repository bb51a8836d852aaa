//! Serializable records: the on-disk shape of each entity.
//!
//! Records hold plain strings and numbers. Converting a record back into an
//! entity runs the same value-type validation as user input.

use crate::domain::{
    Age, Amount, Athlete, AthleteKey, Contract, Date8, Email, Name, Organization,
    OrganizationName, Phone, Sport,
};
use crate::error::StorageError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteRecord {
    pub name: String,
    pub sport: String,
    pub age: u32,
    pub phone: String,
    pub email: String,
}

impl From<&Athlete> for AthleteRecord {
    fn from(athlete: &Athlete) -> Self {
        Self {
            name: athlete.name().to_string(),
            sport: athlete.sport().to_string(),
            age: u32::from(athlete.age().value()),
            phone: athlete.phone().to_string(),
            email: athlete.email().to_string(),
        }
    }
}

impl TryFrom<AthleteRecord> for Athlete {
    type Error = StorageError;

    fn try_from(record: AthleteRecord) -> Result<Self, Self::Error> {
        Ok(Athlete::new(
            Name::parse(&record.name)?,
            Sport::parse(&record.sport)?,
            Age::parse(&record.age.to_string())?,
            Phone::parse(&record.phone)?,
            Email::parse(&record.email)?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRecord {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl From<&Organization> for OrganizationRecord {
    fn from(organization: &Organization) -> Self {
        Self {
            name: organization.name().to_string(),
            phone: organization.phone().to_string(),
            email: organization.email().to_string(),
        }
    }
}

impl TryFrom<OrganizationRecord> for Organization {
    type Error = StorageError;

    fn try_from(record: OrganizationRecord) -> Result<Self, Self::Error> {
        Ok(Organization::new(
            OrganizationName::parse(&record.name)?,
            Phone::parse(&record.phone)?,
            Email::parse(&record.email)?,
        ))
    }
}

/// Contracts persist their parties as lookup keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRecord {
    pub athlete: String,
    pub sport: String,
    pub organization: String,
    pub start_date: String,
    pub end_date: String,
    pub amount: u64,
}

impl From<&Contract> for ContractRecord {
    fn from(contract: &Contract) -> Self {
        Self {
            athlete: contract.athlete_name().to_string(),
            sport: contract.sport().to_string(),
            organization: contract.organization().to_string(),
            start_date: contract.start_date().to_string(),
            end_date: contract.end_date().to_string(),
            amount: contract.amount().value(),
        }
    }
}

impl TryFrom<ContractRecord> for Contract {
    type Error = StorageError;

    fn try_from(record: ContractRecord) -> Result<Self, Self::Error> {
        let key = AthleteKey::new(Name::parse(&record.athlete)?, Sport::parse(&record.sport)?);
        Contract::new(
            key,
            OrganizationName::parse(&record.organization)?,
            Date8::parse_field(&record.start_date, "start date")?,
            Date8::parse_field(&record.end_date, "end date")?,
            Amount::parse(&record.amount.to_string())?,
        )
        .map_err(|e| StorageError::IllegalValue(e.to_string()))
    }
}

/// `athletes.json` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AthleteDocument {
    pub athletes: Vec<AthleteRecord>,
}

/// `organizations.json` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganizationDocument {
    pub organizations: Vec<OrganizationRecord>,
}

/// `contracts.json` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractDocument {
    pub contracts: Vec<ContractRecord>,
}
