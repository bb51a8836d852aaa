//! Persistence and configuration through the public API.

use sportsdesk::config::{ConfigLoader, DEFAULT_CONFIG_FILE};
use sportsdesk::storage::json::{ATHLETES_FILE, CONTRACTS_FILE, ORGANIZATIONS_FILE};
use sportsdesk::storage::JsonModelStorage;
use sportsdesk::tooling::cli::{CliContext, Commands, ShowTarget};
use std::fs;
use tempfile::TempDir;

const ADD_MESSI: &str = "add-a n/Lionel Messi s/Football a/36 p/91234567 e/messi@x.com";
const ADD_MIAMI: &str = "add-o o/Inter Miami p/98765432 e/ops@im.com";
const ADD_CONTRACT: &str =
    "add-c n/Lionel Messi s/Football o/Inter Miami sd/01012024 ed/31122024 am/5000000";

fn context(temp: &TempDir) -> CliContext {
    CliContext::with_storage(Box::new(JsonModelStorage::new(temp.path())))
}

#[test]
fn save_writes_one_document_per_collection() {
    let temp = TempDir::new().unwrap();
    let mut ctx = context(&temp);
    for line in [ADD_MESSI, ADD_MIAMI, ADD_CONTRACT] {
        ctx.execute_line(line).unwrap();
    }
    ctx.save().unwrap();

    let athletes = fs::read_to_string(temp.path().join(ATHLETES_FILE)).unwrap();
    let organizations = fs::read_to_string(temp.path().join(ORGANIZATIONS_FILE)).unwrap();
    let contracts = fs::read_to_string(temp.path().join(CONTRACTS_FILE)).unwrap();

    let athletes: serde_json::Value = serde_json::from_str(&athletes).unwrap();
    let organizations: serde_json::Value = serde_json::from_str(&organizations).unwrap();
    let contracts: serde_json::Value = serde_json::from_str(&contracts).unwrap();
    assert_eq!(athletes["athletes"][0]["sport"], "Football");
    assert_eq!(organizations["organizations"][0]["name"], "Inter Miami");
    assert_eq!(contracts["contracts"][0]["start_date"], "01012024");
}

#[test]
fn corrupt_file_starts_empty() {
    let temp = TempDir::new().unwrap();
    let mut ctx = context(&temp);
    for line in [ADD_MESSI, ADD_MIAMI, ADD_CONTRACT] {
        ctx.execute_line(line).unwrap();
    }
    ctx.save().unwrap();
    fs::write(temp.path().join(ORGANIZATIONS_FILE), "{ not json").unwrap();

    let reloaded = context(&temp);
    assert!(reloaded.store().snapshot().is_empty());
}

#[test]
fn orphaned_contracts_reset_everything() {
    let temp = TempDir::new().unwrap();
    let mut ctx = context(&temp);
    for line in [ADD_MESSI, ADD_MIAMI, ADD_CONTRACT] {
        ctx.execute_line(line).unwrap();
    }
    ctx.execute_line("delete-o o/Inter Miami").unwrap();
    ctx.save().unwrap();

    let reloaded = context(&temp);
    assert!(reloaded.store().snapshot().is_empty());
}

#[test]
fn config_file_points_at_data_dir() {
    let workdir = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    fs::write(
        workdir.path().join(DEFAULT_CONFIG_FILE),
        format!("[storage]\ndata_dir = {:?}\n", data.path().to_string_lossy()),
    )
    .unwrap();

    let config = ConfigLoader::load_with_env_prefix(workdir.path(), "SPORTSDESK_IT_CONFIG").unwrap();
    assert_eq!(config.storage.resolve_data_dir(), data.path());

    let mut ctx = CliContext::new(&config);
    ctx.execute(&Commands::Run {
        input: vec![ADD_MIAMI.to_string()],
    })
    .unwrap();
    assert!(data.path().join(ORGANIZATIONS_FILE).exists());

    let mut reloaded = CliContext::new(&config);
    let shown = reloaded
        .execute(&Commands::Show {
            target: ShowTarget::Organizations,
            format: "json".to_string(),
        })
        .unwrap();
    assert!(shown.contains("Inter Miami"));
}
