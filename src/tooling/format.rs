//! Format athletes, organizations and contracts as text tables or JSON.

use crate::domain::{Athlete, Contract, Organization};
use crate::error::{ApiError, StorageError};
use crate::model::ModelStore;
use crate::storage::records::{AthleteRecord, ContractRecord, OrganizationRecord};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;

use super::cli::ShowTarget;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

pub fn format_athletes_table<'a>(athletes: impl IntoIterator<Item = &'a Athlete>) -> String {
    let mut out = format!("{}\n\n", format_section_heading("Athletes"));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "Name", "Sport", "Age", "Phone", "Email"]);
    let mut count = 0;
    for (index, athlete) in athletes.into_iter().enumerate() {
        count += 1;
        table.add_row(vec![
            (index + 1).to_string(),
            athlete.name().to_string(),
            athlete.sport().to_string(),
            athlete.age().to_string(),
            athlete.phone().to_string(),
            athlete.email().to_string(),
        ]);
    }
    if count == 0 {
        out.push_str("No athletes to show.\n");
        return out;
    }
    out.push_str(&format!("{}\n", table));
    out
}

pub fn format_organizations_table<'a>(
    organizations: impl IntoIterator<Item = &'a Organization>,
) -> String {
    let mut out = format!("{}\n\n", format_section_heading("Organizations"));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "Name", "Phone", "Email"]);
    let mut count = 0;
    for (index, organization) in organizations.into_iter().enumerate() {
        count += 1;
        table.add_row(vec![
            (index + 1).to_string(),
            organization.name().to_string(),
            organization.phone().to_string(),
            organization.email().to_string(),
        ]);
    }
    if count == 0 {
        out.push_str("No organizations to show.\n");
        return out;
    }
    out.push_str(&format!("{}\n", table));
    out
}

/// Contract rows resolve their parties against `store`; a party that no
/// longer exists is marked `(removed)`.
pub fn format_contracts_table<'a>(
    store: &ModelStore,
    contracts: impl IntoIterator<Item = &'a Contract>,
) -> String {
    let mut out = format!("{}\n\n", format_section_heading("Contracts"));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec![
        "#",
        "Athlete",
        "Sport",
        "Organization",
        "Start Date",
        "End Date",
        "Amount",
    ]);
    let mut count = 0;
    for (index, contract) in contracts.into_iter().enumerate() {
        count += 1;
        let (athlete, organization) = store.resolve_parties(contract);
        table.add_row(vec![
            (index + 1).to_string(),
            party_label(contract.athlete_name().to_string(), athlete.is_some()),
            contract.sport().to_string(),
            party_label(contract.organization().to_string(), organization.is_some()),
            contract.start_date().to_string(),
            contract.end_date().to_string(),
            contract.amount().to_string(),
        ]);
    }
    if count == 0 {
        out.push_str("No contracts to show.\n");
        return out;
    }
    out.push_str(&format!("{}\n", table));
    out
}

fn party_label(name: String, resolved: bool) -> String {
    if resolved {
        name
    } else {
        format!("{} (removed)", name)
    }
}

/// Render the full collections selected by `target` as text.
pub fn format_model_text(store: &ModelStore, target: ShowTarget) -> String {
    match target {
        ShowTarget::Athletes => format_athletes_table(store.athletes()),
        ShowTarget::Organizations => format_organizations_table(store.organizations()),
        ShowTarget::Contracts => format_contracts_table(store, store.contracts()),
        ShowTarget::All => [
            format_athletes_table(store.athletes()),
            format_organizations_table(store.organizations()),
            format_contracts_table(store, store.contracts()),
        ]
        .join("\n"),
    }
}

/// Render the collections selected by `target` in their on-disk record shape.
pub fn format_model_json(store: &ModelStore, target: ShowTarget) -> Result<String, ApiError> {
    let athletes: Vec<AthleteRecord> = store.athletes().iter().map(AthleteRecord::from).collect();
    let organizations: Vec<OrganizationRecord> = store
        .organizations()
        .iter()
        .map(OrganizationRecord::from)
        .collect();
    let contracts: Vec<ContractRecord> =
        store.contracts().iter().map(ContractRecord::from).collect();

    let value = match target {
        ShowTarget::Athletes => json!({ "athletes": athletes }),
        ShowTarget::Organizations => json!({ "organizations": organizations }),
        ShowTarget::Contracts => json!({ "contracts": contracts }),
        ShowTarget::All => json!({
            "athletes": athletes,
            "organizations": organizations,
            "contracts": contracts,
        }),
    };
    serde_json::to_string_pretty(&value)
        .map_err(|e| ApiError::StorageError(StorageError::Serialization(e)))
}
