//! Model Store
//!
//! In-memory authoritative state: athletes, organizations and contracts, each
//! behind a filtered view. The store enforces identity uniqueness and the
//! athlete/contract reference rule; it never performs I/O itself.

pub mod filtered;

pub use filtered::{show_all, FilteredList, Predicate};

use crate::domain::{Athlete, AthleteKey, Contract, ContractDetails, Organization, OrganizationName};
use crate::error::CommandError;

/// Owned copy of the three collections, handed to persistence and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelSnapshot {
    pub athletes: Vec<Athlete>,
    pub organizations: Vec<Organization>,
    pub contracts: Vec<Contract>,
}

impl ModelSnapshot {
    pub fn is_empty(&self) -> bool {
        self.athletes.is_empty() && self.organizations.is_empty() && self.contracts.is_empty()
    }
}

/// The three entity collections plus their filtered views.
#[derive(Debug, Default)]
pub struct ModelStore {
    athletes: FilteredList<Athlete>,
    organizations: FilteredList<Organization>,
    contracts: FilteredList<Contract>,
}

impl ModelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from collections supplied at startup.
    ///
    /// Missing collections count as empty. If contracts exist while either
    /// athletes or organizations are empty, all three collections are reset to
    /// empty; no partial repair is attempted.
    pub fn from_collections(
        athletes: Option<Vec<Athlete>>,
        contracts: Option<Vec<Contract>>,
        organizations: Option<Vec<Organization>>,
    ) -> Self {
        let athletes = athletes.unwrap_or_default();
        let contracts = contracts.unwrap_or_default();
        let organizations = organizations.unwrap_or_default();

        if !contracts.is_empty() && (athletes.is_empty() || organizations.is_empty()) {
            return Self::new();
        }

        Self {
            athletes: FilteredList::from_items(athletes),
            organizations: FilteredList::from_items(organizations),
            contracts: FilteredList::from_items(contracts),
        }
    }

    pub fn snapshot(&self) -> ModelSnapshot {
        ModelSnapshot {
            athletes: self.athletes.items().to_vec(),
            organizations: self.organizations.items().to_vec(),
            contracts: self.contracts.items().to_vec(),
        }
    }

    /// Empty all three collections.
    pub fn clear(&mut self) {
        self.contracts.clear();
        self.athletes.clear();
        self.organizations.clear();
    }

    // Athletes

    pub fn athletes(&self) -> &[Athlete] {
        self.athletes.items()
    }

    pub fn has_athlete(&self, athlete: &Athlete) -> bool {
        self.athletes
            .find(|existing| existing.is_same_athlete(athlete))
            .is_some()
    }

    pub fn find_athlete(&self, key: &AthleteKey) -> Option<&Athlete> {
        self.athletes.find(|athlete| athlete.has_key(key))
    }

    pub fn add_athlete(&mut self, athlete: Athlete) -> Result<(), CommandError> {
        if self.has_athlete(&athlete) {
            return Err(CommandError::DuplicateEntity(format!(
                "Athlete already exists: {}",
                athlete.key()
            )));
        }
        self.athletes.push(athlete);
        Ok(())
    }

    /// Remove an athlete. Rejected while any contract still references it.
    pub fn delete_athlete(&mut self, key: &AthleteKey) -> Result<Athlete, CommandError> {
        if self.is_athlete_referenced(key) {
            return Err(CommandError::ReferentialConflict(format!(
                "Athlete {} is still referenced by a contract",
                key
            )));
        }
        let index = self
            .athletes
            .position(|athlete| athlete.has_key(key))
            .ok_or_else(|| CommandError::NotFound(format!("Athlete not found: {}", key)))?;
        self.athletes
            .remove(index)
            .ok_or_else(|| CommandError::NotFound(format!("Athlete not found: {}", key)))
    }

    pub fn is_athlete_referenced(&self, key: &AthleteKey) -> bool {
        self.contracts
            .find(|contract| contract.references_athlete(key))
            .is_some()
    }

    pub fn update_filtered_athletes(&mut self, predicate: Predicate<Athlete>) {
        self.athletes.set_predicate(predicate);
    }

    pub fn filtered_athletes(&self) -> impl Iterator<Item = &Athlete> {
        self.athletes.visible()
    }

    // Organizations

    pub fn organizations(&self) -> &[Organization] {
        self.organizations.items()
    }

    pub fn has_organization(&self, organization: &Organization) -> bool {
        self.organizations
            .find(|existing| existing.is_same_organization(organization))
            .is_some()
    }

    pub fn find_organization(&self, name: &OrganizationName) -> Option<&Organization> {
        self.organizations.find(|organization| organization.has_name(name))
    }

    pub fn add_organization(&mut self, organization: Organization) -> Result<(), CommandError> {
        if self.has_organization(&organization) {
            return Err(CommandError::DuplicateEntity(format!(
                "Organization already exists: {}",
                organization.name()
            )));
        }
        self.organizations.push(organization);
        Ok(())
    }

    /// Remove an organization. Contracts naming it are left in place.
    pub fn delete_organization(
        &mut self,
        name: &OrganizationName,
    ) -> Result<Organization, CommandError> {
        let index = self
            .organizations
            .position(|organization| organization.has_name(name))
            .ok_or_else(|| CommandError::NotFound(format!("Organization not found: {}", name)))?;
        self.organizations
            .remove(index)
            .ok_or_else(|| CommandError::NotFound(format!("Organization not found: {}", name)))
    }

    pub fn update_filtered_organizations(&mut self, predicate: Predicate<Organization>) {
        self.organizations.set_predicate(predicate);
    }

    pub fn filtered_organizations(&self) -> impl Iterator<Item = &Organization> {
        self.organizations.visible()
    }

    // Contracts

    pub fn contracts(&self) -> &[Contract] {
        self.contracts.items()
    }

    pub fn has_contract(&self, contract: &Contract) -> bool {
        self.contracts
            .find(|existing| existing.is_same_contract(contract))
            .is_some()
    }

    pub fn find_contract(&self, details: &ContractDetails) -> Option<&Contract> {
        self.contracts
            .find(|contract| contract.matches_details(details))
    }

    pub fn add_contract(&mut self, contract: Contract) -> Result<(), CommandError> {
        if self.has_contract(&contract) {
            return Err(CommandError::DuplicateEntity(format!(
                "Contract already exists: {}",
                contract
            )));
        }
        self.contracts.push(contract);
        Ok(())
    }

    pub fn delete_contract(&mut self, details: &ContractDetails) -> Result<Contract, CommandError> {
        let index = self
            .contracts
            .position(|contract| contract.matches_details(details))
            .ok_or_else(|| CommandError::NotFound("Contract not found".to_string()))?;
        self.contracts
            .remove(index)
            .ok_or_else(|| CommandError::NotFound("Contract not found".to_string()))
    }

    pub fn update_filtered_contracts(&mut self, predicate: Predicate<Contract>) {
        self.contracts.set_predicate(predicate);
    }

    pub fn filtered_contracts(&self) -> impl Iterator<Item = &Contract> {
        self.contracts.visible()
    }

    /// Resolve a contract's parties against the live collections.
    pub fn resolve_parties(&self, contract: &Contract) -> (Option<&Athlete>, Option<&Organization>) {
        (
            self.find_athlete(contract.athlete()),
            self.find_organization(contract.organization()),
        )
    }

    /// Clear then restore the show-all predicate on the athlete and organization views.
    pub fn reset_party_views(&mut self) {
        self.athletes.set_predicate(Box::new(|_: &Athlete| false));
        self.athletes.set_predicate(show_all());
        self.organizations.set_predicate(Box::new(|_: &Organization| false));
        self.organizations.set_predicate(show_all());
    }

    /// Show-all predicate on every view.
    pub fn show_everything(&mut self) {
        self.athletes.set_predicate(show_all());
        self.organizations.set_predicate(show_all());
        self.contracts.set_predicate(show_all());
    }
}
