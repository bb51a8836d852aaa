//! End-to-end command scenarios through the CLI context.

use sportsdesk::command::executor::{MESSAGE_ATHLETE_HAS_CONTRACTS, MESSAGE_DUPLICATE_CONTRACT};
use sportsdesk::error::{ApiError, CommandError, ParseError};
use sportsdesk::storage::JsonModelStorage;
use sportsdesk::tooling::cli::CliContext;
use tempfile::TempDir;

const ADD_MESSI: &str = "add-a n/Lionel Messi s/Football a/36 p/91234567 e/messi@x.com";
const ADD_MIAMI: &str = "add-o o/Inter Miami p/98765432 e/ops@im.com";
const ADD_CONTRACT: &str =
    "add-c n/Lionel Messi s/Football o/Inter Miami sd/01012024 ed/31122024 am/5000000";
const DELETE_CONTRACT: &str =
    "delete-c n/Lionel Messi o/Inter Miami sd/01012024 ed/31122024 s/Football am/5000000";
const DELETE_MESSI: &str = "delete-a n/Lionel Messi s/Football";

fn context(temp: &TempDir) -> CliContext {
    CliContext::with_storage(Box::new(JsonModelStorage::new(temp.path())))
}

fn seeded(temp: &TempDir) -> CliContext {
    let mut ctx = context(temp);
    ctx.execute_line(ADD_MESSI).unwrap();
    ctx.execute_line(ADD_MIAMI).unwrap();
    ctx
}

#[test]
fn add_contract_between_existing_parties() {
    let temp = TempDir::new().unwrap();
    let mut ctx = seeded(&temp);

    let result = ctx.execute_line(ADD_CONTRACT).unwrap();
    assert!(result.feedback.starts_with("New contract added: Lionel Messi"));
    assert_eq!(ctx.store().contracts().len(), 1);
}

#[test]
fn repeated_contract_is_a_duplicate() {
    let temp = TempDir::new().unwrap();
    let mut ctx = seeded(&temp);
    ctx.execute_line(ADD_CONTRACT).unwrap();

    let err = ctx.execute_line(ADD_CONTRACT).unwrap_err();
    match err {
        ApiError::Command(CommandError::DuplicateEntity(message)) => {
            assert_eq!(message, MESSAGE_DUPLICATE_CONTRACT)
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(ctx.store().contracts().len(), 1);
}

#[test]
fn referenced_athlete_cannot_be_deleted_until_contract_goes() {
    let temp = TempDir::new().unwrap();
    let mut ctx = seeded(&temp);
    ctx.execute_line(ADD_CONTRACT).unwrap();

    let err = ctx.execute_line(DELETE_MESSI).unwrap_err();
    match err {
        ApiError::Command(CommandError::ReferentialConflict(message)) => {
            assert_eq!(message, MESSAGE_ATHLETE_HAS_CONTRACTS)
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(ctx.store().athletes().len(), 1);

    ctx.execute_line(DELETE_CONTRACT).unwrap();
    ctx.execute_line(DELETE_MESSI).unwrap();
    assert!(ctx.store().athletes().is_empty());
    assert!(ctx.store().contracts().is_empty());
}

#[test]
fn contract_with_unknown_party_names_it() {
    let temp = TempDir::new().unwrap();
    let mut ctx = context(&temp);
    ctx.execute_line(ADD_MIAMI).unwrap();

    let err = ctx.execute_line(ADD_CONTRACT).unwrap_err();
    assert!(matches!(err, ApiError::Command(CommandError::NotFound(_))));
    assert!(err.to_string().contains("Lionel Messi"));
    assert!(ctx.store().contracts().is_empty());
}

#[test]
fn organization_delete_leaves_contracts_in_place() {
    let temp = TempDir::new().unwrap();
    let mut ctx = seeded(&temp);
    ctx.execute_line(ADD_CONTRACT).unwrap();

    ctx.execute_line("delete-o o/inter miami").unwrap();
    assert!(ctx.store().organizations().is_empty());
    assert_eq!(ctx.store().contracts().len(), 1);
}

#[test]
fn format_errors_carry_usage() {
    let temp = TempDir::new().unwrap();
    let mut ctx = context(&temp);

    let err = ctx.execute_line("add-o o/Inter Miami").unwrap_err();
    match &err {
        ApiError::Parse(ParseError::InvalidFormat { usage }) => assert!(usage.contains("add-o")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.is_recoverable());
}

#[test]
fn find_then_list_restores_views() {
    let temp = TempDir::new().unwrap();
    let mut ctx = seeded(&temp);
    ctx.execute_line("add-a n/Cristiano Ronaldo s/Football a/39 p/93334444 e/cr7@x.com")
        .unwrap();

    ctx.execute_line("find-a ronaldo").unwrap();
    let visible: Vec<String> = ctx
        .store()
        .filtered_athletes()
        .map(|a| a.name().to_string())
        .collect();
    assert_eq!(visible, vec!["Cristiano Ronaldo".to_string()]);

    ctx.execute_line("list").unwrap();
    assert_eq!(ctx.store().filtered_athletes().count(), 2);
}

#[test]
fn saved_session_survives_restart() {
    let temp = TempDir::new().unwrap();
    let mut ctx = seeded(&temp);
    ctx.execute_line(ADD_CONTRACT).unwrap();
    ctx.save().unwrap();

    let reloaded = context(&temp);
    assert_eq!(reloaded.store().athletes().len(), 1);
    assert_eq!(reloaded.store().organizations().len(), 1);
    assert_eq!(reloaded.store().contracts().len(), 1);
    assert_eq!(reloaded.store().snapshot(), ctx.store().snapshot());
}

#[test]
fn clear_empties_everything() {
    let temp = TempDir::new().unwrap();
    let mut ctx = seeded(&temp);
    ctx.execute_line(ADD_CONTRACT).unwrap();

    ctx.execute_line("clear").unwrap();
    assert!(ctx.store().snapshot().is_empty());
}
