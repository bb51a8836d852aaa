//! Command executor: one match arm per command variant.
//!
//! Each arm checks every precondition before it mutates, so a command either
//! applies fully and returns a [`CommandResult`] or leaves the model untouched
//! and returns a [`CommandError`].

use super::parser::help_text;
use super::Command;
use crate::domain::{Athlete, Contract, ContractDetails, Organization};
use crate::error::CommandError;
use crate::model::{show_all, ModelStore};

pub const MESSAGE_DUPLICATE_ATHLETE: &str = "This athlete already exists in the athlete list";
pub const MESSAGE_ATHLETE_NOT_FOUND: &str =
    "The athlete with the given name and sport does not exist";
pub const MESSAGE_ATHLETE_HAS_CONTRACTS: &str =
    "This athlete still has existing contracts, delete those contracts first";
pub const MESSAGE_DUPLICATE_ORGANIZATION: &str =
    "This organization already exists in the organization list";
pub const MESSAGE_ORGANIZATION_NOT_FOUND: &str =
    "The organization with the given name does not exist";
pub const MESSAGE_DUPLICATE_CONTRACT: &str = "This contract already exists in the contract list";
pub const MESSAGE_CONTRACT_NOT_FOUND: &str = "The contract with the given details does not exist";
pub const MESSAGE_CLEARED: &str = "All athletes, organizations and contracts have been cleared!";
pub const MESSAGE_LIST_ALL: &str = "Listed all athletes, organizations and contracts";
pub const MESSAGE_EXIT: &str = "Exiting as requested ...";

/// Feedback for a command that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }

    fn help(feedback: String) -> Self {
        Self {
            feedback,
            show_help: true,
            exit: false,
        }
    }

    fn exit() -> Self {
        Self {
            feedback: MESSAGE_EXIT.to_string(),
            show_help: false,
            exit: true,
        }
    }
}

impl Command {
    /// Apply this command to `store`.
    pub fn execute(&self, store: &mut ModelStore) -> Result<CommandResult, CommandError> {
        match self {
            Command::AddAthlete(athlete) => {
                if store.has_athlete(athlete) {
                    return Err(CommandError::DuplicateEntity(
                        MESSAGE_DUPLICATE_ATHLETE.to_string(),
                    ));
                }
                store.add_athlete(athlete.clone())?;
                Ok(CommandResult::new(format!("New athlete added: {}", athlete)))
            }
            Command::DeleteAthlete(key) => {
                if store.find_athlete(key).is_none() {
                    return Err(CommandError::NotFound(MESSAGE_ATHLETE_NOT_FOUND.to_string()));
                }
                if store.is_athlete_referenced(key) {
                    return Err(CommandError::ReferentialConflict(
                        MESSAGE_ATHLETE_HAS_CONTRACTS.to_string(),
                    ));
                }
                let removed = store.delete_athlete(key)?;
                Ok(CommandResult::new(format!("Deleted athlete: {}", removed)))
            }
            Command::AddOrganization(organization) => {
                if store.has_organization(organization) {
                    return Err(CommandError::DuplicateEntity(
                        MESSAGE_DUPLICATE_ORGANIZATION.to_string(),
                    ));
                }
                store.add_organization(organization.clone())?;
                Ok(CommandResult::new(format!(
                    "New organization added: {}",
                    organization
                )))
            }
            Command::DeleteOrganization(name) => {
                if store.find_organization(name).is_none() {
                    return Err(CommandError::NotFound(
                        MESSAGE_ORGANIZATION_NOT_FOUND.to_string(),
                    ));
                }
                // No contract guard: contracts naming this organization stay.
                let removed = store.delete_organization(name)?;
                Ok(CommandResult::new(format!("Deleted organization: {}", removed)))
            }
            Command::AddContract(details) => {
                let contract = resolve_contract(store, details)?;
                if store.has_contract(&contract) {
                    return Err(CommandError::DuplicateEntity(
                        MESSAGE_DUPLICATE_CONTRACT.to_string(),
                    ));
                }
                let feedback = format!("New contract added: {}", contract);
                store.add_contract(contract)?;
                Ok(CommandResult::new(feedback))
            }
            Command::DeleteContract(details) => {
                if store.find_contract(details).is_none() {
                    return Err(CommandError::NotFound(MESSAGE_CONTRACT_NOT_FOUND.to_string()));
                }
                let removed = store.delete_contract(details)?;
                store.reset_party_views();
                Ok(CommandResult::new(format!("Deleted contract: {}", removed)))
            }
            Command::FindAthlete(predicate) => {
                let predicate = predicate.clone();
                store.update_filtered_athletes(Box::new(move |a: &Athlete| predicate.matches_athlete(a)));
                let count = store.filtered_athletes().count();
                Ok(CommandResult::new(format!("{} athletes listed!", count)))
            }
            Command::FindOrganization(predicate) => {
                let predicate = predicate.clone();
                store.update_filtered_organizations(Box::new(move |o: &Organization| {
                    predicate.matches_organization(o)
                }));
                let count = store.filtered_organizations().count();
                Ok(CommandResult::new(format!("{} organizations listed!", count)))
            }
            Command::FindContract(predicate) => {
                let predicate = predicate.clone();
                store.update_filtered_contracts(Box::new(move |c: &Contract| predicate.matches_contract(c)));
                let count = store.filtered_contracts().count();
                Ok(CommandResult::new(format!("{} contracts listed!", count)))
            }
            Command::List => {
                store.show_everything();
                Ok(CommandResult::new(MESSAGE_LIST_ALL))
            }
            Command::Clear => {
                store.clear();
                store.update_filtered_contracts(show_all());
                store.reset_party_views();
                Ok(CommandResult::new(MESSAGE_CLEARED))
            }
            Command::Help => Ok(CommandResult::help(help_text())),
            Command::Exit => Ok(CommandResult::exit()),
        }
    }
}

/// Resolve both parties against the live model and build the contract from
/// the stored athlete and organization, not from the typed text.
fn resolve_contract(store: &ModelStore, details: &ContractDetails) -> Result<Contract, CommandError> {
    let athlete = store.find_athlete(&details.athlete_key()).ok_or_else(|| {
        CommandError::NotFound(format!(
            "The athlete {} playing {} does not exist",
            details.athlete_name, details.sport
        ))
    })?;
    let organization = store.find_organization(&details.organization).ok_or_else(|| {
        CommandError::NotFound(format!(
            "The organization {} does not exist",
            details.organization
        ))
    })?;
    Contract::new(
        athlete.key(),
        organization.name().clone(),
        details.start_date.clone(),
        details.end_date.clone(),
        details.amount,
    )
}
