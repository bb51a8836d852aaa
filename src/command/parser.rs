//! Command Parser
//!
//! Turns raw command text into a typed [`Command`]. Each command word maps to a
//! fixed [`CommandSpec`] row naming the prefixes it takes, in the order their
//! values are validated. Parsing never touches the model; athletes and
//! organizations named by a command are resolved when it executes.

use super::predicates::KeywordPredicate;
use super::Command;
use crate::domain::{
    Age, Amount, Athlete, AthleteKey, ContractDetails, Date8, Email, Name, Organization,
    OrganizationName, Phone, Sport,
};
use crate::error::ParseError;
use std::collections::BTreeMap;
use std::fmt;

/// Field marker inside a command's argument string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prefix {
    Name,
    Sport,
    Age,
    Phone,
    Email,
    Organization,
    StartDate,
    EndDate,
    Amount,
}

impl Prefix {
    pub fn as_str(self) -> &'static str {
        match self {
            Prefix::Name => "n/",
            Prefix::Sport => "s/",
            Prefix::Age => "a/",
            Prefix::Phone => "p/",
            Prefix::Email => "e/",
            Prefix::Organization => "o/",
            Prefix::StartDate => "sd/",
            Prefix::EndDate => "ed/",
            Prefix::Amount => "am/",
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tokenized arguments: the preamble plus every value seen for each prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentTable {
    preamble: String,
    values: BTreeMap<Prefix, Vec<String>>,
}

impl ArgumentTable {
    /// Split `args` on the given prefixes.
    ///
    /// A prefix is only recognised at the start of `args` or right after
    /// whitespace. Text before the first recognised prefix is the preamble.
    pub fn tokenize(args: &str, prefixes: &[Prefix]) -> Self {
        let padded = format!(" {}", args);
        let mut positions: Vec<(usize, Prefix)> = Vec::new();
        for &prefix in prefixes {
            let marker = format!(" {}", prefix.as_str());
            positions.extend(padded.match_indices(&marker).map(|(pos, _)| (pos, prefix)));
        }
        positions.sort_by_key(|(pos, _)| *pos);

        let preamble_end = positions.first().map_or(padded.len(), |(pos, _)| *pos);
        let mut table = Self {
            preamble: padded[..preamble_end].trim().to_string(),
            values: BTreeMap::new(),
        };

        for (i, &(pos, prefix)) in positions.iter().enumerate() {
            let value_start = pos + 1 + prefix.as_str().len();
            let value_end = positions.get(i + 1).map_or(padded.len(), |(next, _)| *next);
            table
                .values
                .entry(prefix)
                .or_default()
                .push(padded[value_start..value_end].trim().to_string());
        }
        table
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .get(&prefix)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Prefixes given more than once, in the order of `order`.
    pub fn duplicated(&self, order: &[Prefix]) -> Vec<Prefix> {
        order
            .iter()
            .copied()
            .filter(|prefix| self.all_values(*prefix).len() > 1)
            .collect()
    }

    fn required(&self, prefix: Prefix) -> &str {
        self.value(prefix).unwrap_or_default()
    }
}

/// Command variants known to the parse table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    AddAthlete,
    DeleteAthlete,
    AddOrganization,
    DeleteOrganization,
    AddContract,
    DeleteContract,
    FindAthlete,
    FindOrganization,
    FindContract,
    List,
    Clear,
    Help,
    Exit,
}

/// How a command consumes its argument string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentShape {
    /// Every listed prefix exactly once; empty preamble.
    Prefixed(&'static [Prefix]),
    /// Free keywords, at least one.
    Keywords,
    /// Nothing after the command word.
    Bare,
}

/// One row of the parse table.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub kind: CommandKind,
    pub words: &'static [&'static str],
    pub shape: ArgumentShape,
    pub usage: &'static str,
}

impl CommandSpec {
    pub fn word(&self) -> &'static str {
        self.words[0]
    }
}

const ATHLETE_FIELDS: &[Prefix] = &[
    Prefix::Name,
    Prefix::Sport,
    Prefix::Age,
    Prefix::Phone,
    Prefix::Email,
];
const ATHLETE_KEY_FIELDS: &[Prefix] = &[Prefix::Name, Prefix::Sport];
const ORGANIZATION_FIELDS: &[Prefix] = &[Prefix::Organization, Prefix::Phone, Prefix::Email];
const ORGANIZATION_KEY_FIELDS: &[Prefix] = &[Prefix::Organization];
const CONTRACT_FIELDS: &[Prefix] = &[
    Prefix::Name,
    Prefix::Sport,
    Prefix::Organization,
    Prefix::StartDate,
    Prefix::EndDate,
    Prefix::Amount,
];

pub const COMMAND_TABLE: &[CommandSpec] = &[
    CommandSpec {
        kind: CommandKind::AddAthlete,
        words: &["add-a", "add-athlete"],
        shape: ArgumentShape::Prefixed(ATHLETE_FIELDS),
        usage: "add-a: Adds an athlete to the athlete list.\n\
Parameters: n/NAME s/SPORT a/AGE p/PHONE e/EMAIL\n\
Example: add-a n/Lionel Messi s/Football a/36 p/91234567 e/messi@x.com",
    },
    CommandSpec {
        kind: CommandKind::DeleteAthlete,
        words: &["delete-a", "delete-athlete"],
        shape: ArgumentShape::Prefixed(ATHLETE_KEY_FIELDS),
        usage: "delete-a: Deletes the athlete identified by name and sport.\n\
Parameters: n/NAME s/SPORT\n\
Example: delete-a n/Lionel Messi s/Football",
    },
    CommandSpec {
        kind: CommandKind::AddOrganization,
        words: &["add-o", "add-organization"],
        shape: ArgumentShape::Prefixed(ORGANIZATION_FIELDS),
        usage: "add-o: Adds an organization to the organization list.\n\
Parameters: o/ORGANIZATION p/PHONE e/EMAIL\n\
Example: add-o o/Inter Miami p/98765432 e/ops@im.com",
    },
    CommandSpec {
        kind: CommandKind::DeleteOrganization,
        words: &["delete-o", "delete-organization"],
        shape: ArgumentShape::Prefixed(ORGANIZATION_KEY_FIELDS),
        usage: "delete-o: Deletes the organization with the given name.\n\
Parameters: o/ORGANIZATION\n\
Example: delete-o o/Inter Miami",
    },
    CommandSpec {
        kind: CommandKind::AddContract,
        words: &["add-c", "add-contract"],
        shape: ArgumentShape::Prefixed(CONTRACT_FIELDS),
        usage: "add-c: Adds a contract between an existing athlete and organization.\n\
Parameters: n/NAME s/SPORT o/ORGANIZATION sd/START_DATE ed/END_DATE am/AMOUNT\n\
Dates are DDMMYYYY.\n\
Example: add-c n/Lionel Messi s/Football o/Inter Miami sd/01012024 ed/31122024 am/5000000",
    },
    CommandSpec {
        kind: CommandKind::DeleteContract,
        words: &["delete-c", "delete-contract"],
        shape: ArgumentShape::Prefixed(CONTRACT_FIELDS),
        usage: "delete-c: Deletes the contract matching every given field.\n\
Parameters: n/NAME o/ORGANIZATION sd/START_DATE ed/END_DATE s/SPORT am/AMOUNT\n\
Example: delete-c n/Lionel Messi o/Inter Miami sd/01012024 ed/31122024 s/Football am/5000000",
    },
    CommandSpec {
        kind: CommandKind::FindAthlete,
        words: &["find-a", "find-athlete"],
        shape: ArgumentShape::Keywords,
        usage: "find-a: Lists athletes whose name contains any of the keywords (case-insensitive).\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find-a messi ronaldo",
    },
    CommandSpec {
        kind: CommandKind::FindOrganization,
        words: &["find-o", "find-organization"],
        shape: ArgumentShape::Keywords,
        usage: "find-o: Lists organizations whose name contains any of the keywords (case-insensitive).\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find-o miami",
    },
    CommandSpec {
        kind: CommandKind::FindContract,
        words: &["find-c", "find-contract"],
        shape: ArgumentShape::Keywords,
        usage: "find-c: Lists contracts whose athlete or organization name contains any of the keywords.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find-c messi",
    },
    CommandSpec {
        kind: CommandKind::List,
        words: &["list"],
        shape: ArgumentShape::Bare,
        usage: "list: Shows all athletes, organizations and contracts.",
    },
    CommandSpec {
        kind: CommandKind::Clear,
        words: &["clear"],
        shape: ArgumentShape::Bare,
        usage: "clear: Deletes every athlete, organization and contract.",
    },
    CommandSpec {
        kind: CommandKind::Help,
        words: &["help"],
        shape: ArgumentShape::Bare,
        usage: "help: Shows the usage of every command.",
    },
    CommandSpec {
        kind: CommandKind::Exit,
        words: &["exit"],
        shape: ArgumentShape::Bare,
        usage: "exit: Saves and exits the program.",
    },
];

/// Look up the parse-table row for a command word.
pub fn lookup(word: &str) -> Option<&'static CommandSpec> {
    COMMAND_TABLE.iter().find(|spec| spec.words.contains(&word))
}

/// Usage text for every command, one block per command.
pub fn help_text() -> String {
    COMMAND_TABLE
        .iter()
        .map(|spec| spec.usage)
        .collect::<Vec<_>>()
        .join("\n\n")
}

const HELP_HINT: &str = "Type help to see every command.";

/// Parse one line of user input.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    let (word, args) = match trimmed.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args),
        None => (trimmed, ""),
    };
    if word.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: HELP_HINT.to_string(),
        });
    }
    let spec = lookup(word).ok_or_else(|| ParseError::UnknownCommand(word.to_string()))?;
    parse_with_spec(spec, args)
}

/// Parse the argument string of an already identified command.
pub fn parse_with_spec(spec: &CommandSpec, args: &str) -> Result<Command, ParseError> {
    let invalid = || ParseError::InvalidFormat {
        usage: spec.usage.to_string(),
    };

    match spec.shape {
        ArgumentShape::Bare => {
            if !args.trim().is_empty() {
                return Err(invalid());
            }
            match spec.kind {
                CommandKind::List => Ok(Command::List),
                CommandKind::Clear => Ok(Command::Clear),
                CommandKind::Help => Ok(Command::Help),
                CommandKind::Exit => Ok(Command::Exit),
                _ => Err(invalid()),
            }
        }
        ArgumentShape::Keywords => {
            let predicate = KeywordPredicate::from_args(args).ok_or_else(invalid)?;
            match spec.kind {
                CommandKind::FindAthlete => Ok(Command::FindAthlete(predicate)),
                CommandKind::FindOrganization => Ok(Command::FindOrganization(predicate)),
                CommandKind::FindContract => Ok(Command::FindContract(predicate)),
                _ => Err(invalid()),
            }
        }
        ArgumentShape::Prefixed(prefixes) => {
            let table = ArgumentTable::tokenize(args, prefixes);
            if !table.preamble().is_empty() || !prefixes.iter().all(|p| table.is_present(*p)) {
                return Err(invalid());
            }
            let duplicated = table.duplicated(prefixes);
            if !duplicated.is_empty() {
                return Err(ParseError::DuplicatePrefix {
                    prefixes: duplicated.iter().map(|p| p.as_str().to_string()).collect(),
                });
            }
            build_prefixed(spec.kind, &table).ok_or_else(invalid)?
        }
    }
}

/// Validate values in field order; the first failure wins.
fn build_prefixed(kind: CommandKind, table: &ArgumentTable) -> Option<Result<Command, ParseError>> {
    let command = match kind {
        CommandKind::AddAthlete => parse_athlete(table).map(Command::AddAthlete),
        CommandKind::DeleteAthlete => parse_athlete_key(table).map(Command::DeleteAthlete),
        CommandKind::AddOrganization => parse_organization(table).map(Command::AddOrganization),
        CommandKind::DeleteOrganization => {
            OrganizationName::parse(table.required(Prefix::Organization))
                .map(Command::DeleteOrganization)
                .map_err(ParseError::from)
        }
        CommandKind::AddContract => parse_contract_details(table).map(Command::AddContract),
        CommandKind::DeleteContract => parse_contract_details(table).map(Command::DeleteContract),
        _ => return None,
    };
    Some(command)
}

fn parse_athlete(table: &ArgumentTable) -> Result<Athlete, ParseError> {
    let name = Name::parse(table.required(Prefix::Name))?;
    let sport = Sport::parse(table.required(Prefix::Sport))?;
    let age = Age::parse(table.required(Prefix::Age))?;
    let phone = Phone::parse(table.required(Prefix::Phone))?;
    let email = Email::parse(table.required(Prefix::Email))?;
    Ok(Athlete::new(name, sport, age, phone, email))
}

fn parse_athlete_key(table: &ArgumentTable) -> Result<AthleteKey, ParseError> {
    let name = Name::parse(table.required(Prefix::Name))?;
    let sport = Sport::parse(table.required(Prefix::Sport))?;
    Ok(AthleteKey::new(name, sport))
}

fn parse_organization(table: &ArgumentTable) -> Result<Organization, ParseError> {
    let name = OrganizationName::parse(table.required(Prefix::Organization))?;
    let phone = Phone::parse(table.required(Prefix::Phone))?;
    let email = Email::parse(table.required(Prefix::Email))?;
    Ok(Organization::new(name, phone, email))
}

fn parse_contract_details(table: &ArgumentTable) -> Result<ContractDetails, ParseError> {
    Ok(ContractDetails {
        athlete_name: Name::parse(table.required(Prefix::Name))?,
        sport: Sport::parse(table.required(Prefix::Sport))?,
        organization: OrganizationName::parse(table.required(Prefix::Organization))?,
        start_date: Date8::parse_field(table.required(Prefix::StartDate), "start date")?,
        end_date: Date8::parse_field(table.required(Prefix::EndDate), "end date")?,
        amount: Amount::parse(table.required(Prefix::Amount))?,
    })
}
