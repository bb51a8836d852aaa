//! Commands
//!
//! A closed set of command variants produced by the parser and applied to the
//! [`ModelStore`](crate::model::ModelStore) by the executor. Every variant is a
//! pure function of the command and the current model.

pub mod executor;
pub mod parser;
pub mod predicates;

pub use executor::CommandResult;
pub use parser::{parse_command, CommandKind, CommandSpec, Prefix, COMMAND_TABLE};
pub use predicates::KeywordPredicate;

use crate::domain::{Athlete, AthleteKey, ContractDetails, Organization, OrganizationName};

/// A validated command, ready to run against the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddAthlete(Athlete),
    DeleteAthlete(AthleteKey),
    AddOrganization(Organization),
    DeleteOrganization(OrganizationName),
    AddContract(ContractDetails),
    DeleteContract(ContractDetails),
    FindAthlete(KeywordPredicate),
    FindOrganization(KeywordPredicate),
    FindContract(KeywordPredicate),
    List,
    Clear,
    Help,
    Exit,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::AddAthlete(_) => CommandKind::AddAthlete,
            Command::DeleteAthlete(_) => CommandKind::DeleteAthlete,
            Command::AddOrganization(_) => CommandKind::AddOrganization,
            Command::DeleteOrganization(_) => CommandKind::DeleteOrganization,
            Command::AddContract(_) => CommandKind::AddContract,
            Command::DeleteContract(_) => CommandKind::DeleteContract,
            Command::FindAthlete(_) => CommandKind::FindAthlete,
            Command::FindOrganization(_) => CommandKind::FindOrganization,
            Command::FindContract(_) => CommandKind::FindContract,
            Command::List => CommandKind::List,
            Command::Clear => CommandKind::Clear,
            Command::Help => CommandKind::Help,
            Command::Exit => CommandKind::Exit,
        }
    }

    /// True for variants that change the stored collections.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::AddAthlete(_)
                | Command::DeleteAthlete(_)
                | Command::AddOrganization(_)
                | Command::DeleteOrganization(_)
                | Command::AddContract(_)
                | Command::DeleteContract(_)
                | Command::Clear
        )
    }

    /// Primary command word, used in logs and summaries.
    pub fn word(&self) -> &'static str {
        let kind = self.kind();
        COMMAND_TABLE
            .iter()
            .find(|spec| spec.kind == kind)
            .map(|spec| spec.word())
            .unwrap_or("unknown")
    }
}
