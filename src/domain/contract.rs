//! Contract entity.
//!
//! A contract does not own its parties. It stores their lookup keys, and the
//! model store resolves those keys against live athletes and organizations.

use super::athlete::AthleteKey;
use super::values::{Amount, Date8, Name, OrganizationName, Sport};
use crate::error::CommandError;
use std::fmt;

pub const MESSAGE_INVALID_RANGE: &str = "The start date must not be after the end date";

/// The six user-supplied fields that describe a contract.
///
/// Add and delete commands carry this before any lookup against the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractDetails {
    pub athlete_name: Name,
    pub sport: Sport,
    pub organization: OrganizationName,
    pub start_date: Date8,
    pub end_date: Date8,
    pub amount: Amount,
}

impl ContractDetails {
    pub fn athlete_key(&self) -> AthleteKey {
        AthleteKey::new(self.athlete_name.clone(), self.sport.clone())
    }

    pub fn is_valid_range(&self) -> bool {
        self.start_date.to_calendar_date() <= self.end_date.to_calendar_date()
    }
}

/// Agreement between one athlete and one organization.
///
/// Invariant: `start_date <= end_date` on the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contract {
    athlete: AthleteKey,
    organization: OrganizationName,
    start_date: Date8,
    end_date: Date8,
    amount: Amount,
}

impl Contract {
    pub fn new(
        athlete: AthleteKey,
        organization: OrganizationName,
        start_date: Date8,
        end_date: Date8,
        amount: Amount,
    ) -> Result<Self, CommandError> {
        if start_date.to_calendar_date() > end_date.to_calendar_date() {
            return Err(CommandError::InvalidRange(MESSAGE_INVALID_RANGE.to_string()));
        }
        Ok(Self {
            athlete,
            organization,
            start_date,
            end_date,
            amount,
        })
    }

    pub fn athlete(&self) -> &AthleteKey {
        &self.athlete
    }

    pub fn athlete_name(&self) -> &Name {
        &self.athlete.name
    }

    pub fn sport(&self) -> &Sport {
        &self.athlete.sport
    }

    pub fn organization(&self) -> &OrganizationName {
        &self.organization
    }

    pub fn start_date(&self) -> &Date8 {
        &self.start_date
    }

    pub fn end_date(&self) -> &Date8 {
        &self.end_date
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn references_athlete(&self, key: &AthleteKey) -> bool {
        self.athlete.matches(key)
    }

    pub fn references_organization(&self, name: &OrganizationName) -> bool {
        self.organization.matches(name)
    }

    /// Full-tuple match, amount included.
    pub fn matches_details(&self, details: &ContractDetails) -> bool {
        self.athlete.name.matches(&details.athlete_name)
            && self.athlete.sport.matches(&details.sport)
            && self.organization.matches(&details.organization)
            && self.start_date == details.start_date
            && self.end_date == details.end_date
            && self.amount == details.amount
    }

    /// Duplicate detection: every field of the tuple matches.
    pub fn is_same_contract(&self, other: &Contract) -> bool {
        self.athlete.matches(&other.athlete)
            && self.organization.matches(&other.organization)
            && self.start_date == other.start_date
            && self.end_date == other.end_date
            && self.amount == other.amount
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Sport: {}; Organization: {}; Start Date: {}; End Date: {}; Amount: {}",
            self.athlete.name,
            self.athlete.sport,
            self.organization,
            self.start_date,
            self.end_date,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> AthleteKey {
        AthleteKey::new(
            Name::parse("Lionel Messi").unwrap(),
            Sport::parse("Football").unwrap(),
        )
    }

    fn contract(start: &str, end: &str, amount: &str) -> Result<Contract, CommandError> {
        Contract::new(
            key(),
            OrganizationName::parse("Inter Miami").unwrap(),
            Date8::parse(start).unwrap(),
            Date8::parse(end).unwrap(),
            Amount::parse(amount).unwrap(),
        )
    }

    #[test]
    fn rejects_inverted_range() {
        let err = contract("01012025", "31122024", "1").unwrap_err();
        assert_eq!(
            err,
            CommandError::InvalidRange(MESSAGE_INVALID_RANGE.to_string())
        );
    }

    #[test]
    fn single_day_contract_is_valid() {
        assert!(contract("15062024", "15062024", "1").is_ok());
    }

    #[test]
    fn amount_is_part_of_identity() {
        let a = contract("01012024", "31122024", "5000000").unwrap();
        let b = contract("01012024", "31122024", "5000000").unwrap();
        let c = contract("01012024", "31122024", "6000000").unwrap();
        assert!(a.is_same_contract(&b));
        assert!(!a.is_same_contract(&c));
    }

    #[test]
    fn matches_details_ignores_case_of_keys() {
        let a = contract("01012024", "31122024", "5000000").unwrap();
        let details = ContractDetails {
            athlete_name: Name::parse("LIONEL MESSI").unwrap(),
            sport: Sport::parse("football").unwrap(),
            organization: OrganizationName::parse("inter miami").unwrap(),
            start_date: Date8::parse("01012024").unwrap(),
            end_date: Date8::parse("31122024").unwrap(),
            amount: Amount::parse("5000000").unwrap(),
        };
        assert!(a.matches_details(&details));
        assert!(details.is_valid_range());
    }

    #[test]
    fn display() {
        let a = contract("01012024", "31122024", "5000000").unwrap();
        assert_eq!(
            a.to_string(),
            "Lionel Messi; Sport: Football; Organization: Inter Miami; Start Date: 01012024; End Date: 31122024; Amount: 5000000"
        );
    }
}
