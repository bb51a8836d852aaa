//! Property-based tests for model store invariants using proptest.

use proptest::prelude::*;
use sportsdesk::command::parse_command;
use sportsdesk::domain::{Amount, AthleteKey, Contract, Date8, Name, OrganizationName, Sport};
use sportsdesk::error::CommandError;
use sportsdesk::model::ModelStore;
use std::collections::HashSet;

const ADD_MIAMI: &str = "add-o o/Inter Miami p/98765432 e/ops@im.com";

/// A single capitalised word.
fn word() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,7}"
}

/// A one- or two-word athlete name.
fn athlete_name() -> impl Strategy<Value = String> {
    (word(), proptest::option::of(word())).prop_map(|(first, last)| match last {
        Some(last) => format!("{} {}", first, last),
        None => first,
    })
}

fn sport() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Football", "football", "Tennis", "Golf", "Basketball"])
        .prop_map(str::to_string)
}

/// A DDMMYYYY date that always names a real day.
fn date8() -> impl Strategy<Value = (u32, u32, i32)> {
    (1u32..=28, 1u32..=12, 2000i32..=2030)
}

fn render((day, month, year): (u32, u32, i32)) -> String {
    format!("{:02}{:02}{:04}", day, month, year)
}

fn add_athlete_line(name: &str, sport: &str) -> String {
    format!("add-a n/{} s/{} a/30 p/91234567 e/someone@x.com", name, sport)
}

fn run(store: &mut ModelStore, line: &str) -> Result<(), CommandError> {
    parse_command(line)
        .unwrap_or_else(|e| panic!("unparseable test input {line:?}: {e}"))
        .execute(store)
        .map(|_| ())
}

proptest! {
    #[test]
    fn athlete_identity_stays_unique(entries in prop::collection::vec((athlete_name(), sport()), 1..20)) {
        let mut store = ModelStore::new();
        let mut seen = HashSet::new();

        for (name, sport) in &entries {
            let before = store.snapshot();
            let outcome = run(&mut store, &add_athlete_line(name, sport));
            let fresh = seen.insert((name.to_lowercase(), sport.to_lowercase()));
            if fresh {
                prop_assert!(outcome.is_ok());
            } else {
                prop_assert!(matches!(outcome, Err(CommandError::DuplicateEntity(_))));
                prop_assert_eq!(store.snapshot(), before);
            }
        }

        prop_assert_eq!(store.athletes().len(), seen.len());
    }

    #[test]
    fn reversed_dates_never_insert(a in date8(), b in date8(), amount in 0u64..1_000_000) {
        let (start, end) = {
            let da = chrono::NaiveDate::from_ymd_opt(a.2, a.1, a.0).unwrap();
            let db = chrono::NaiveDate::from_ymd_opt(b.2, b.1, b.0).unwrap();
            prop_assume!(da != db);
            if da > db { (a, b) } else { (b, a) }
        };

        let mut store = ModelStore::new();
        run(&mut store, &add_athlete_line("Lionel Messi", "Football")).unwrap();
        run(&mut store, ADD_MIAMI).unwrap();

        let line = format!(
            "add-c n/Lionel Messi s/Football o/Inter Miami sd/{} ed/{} am/{}",
            render(start),
            render(end),
            amount
        );
        let outcome = run(&mut store, &line);
        prop_assert!(matches!(outcome, Err(CommandError::InvalidRange(_))));
        prop_assert!(store.contracts().is_empty());
    }

    #[test]
    fn parsing_is_deterministic(name in athlete_name(), sport in sport(), age in 1u8..=99) {
        let line = format!("add-a n/{} s/{} a/{} p/91234567 e/someone@x.com", name, sport, age);
        let first = parse_command(&line).unwrap();
        let second = parse_command(&line).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn contracts_without_parties_reset_on_load(
        count in 1usize..5,
        keep_athletes in any::<bool>(),
    ) {
        let contracts: Vec<Contract> = (0..count)
            .map(|i| {
                Contract::new(
                    AthleteKey::new(Name::parse("Lionel Messi").unwrap(), Sport::parse("Football").unwrap()),
                    OrganizationName::parse("Inter Miami").unwrap(),
                    Date8::parse("01012024").unwrap(),
                    Date8::parse("31122024").unwrap(),
                    Amount::parse(&i.to_string()).unwrap(),
                )
                .unwrap()
            })
            .collect();

        let mut seeded = ModelStore::new();
        run(&mut seeded, &add_athlete_line("Lionel Messi", "Football")).unwrap();
        run(&mut seeded, ADD_MIAMI).unwrap();
        let snapshot = seeded.snapshot();

        // One of the two party collections is always empty.
        let (athletes, organizations) = if keep_athletes {
            (Some(snapshot.athletes), Some(Vec::new()))
        } else {
            (None, Some(snapshot.organizations))
        };

        let store = ModelStore::from_collections(athletes, Some(contracts), organizations);
        prop_assert!(store.snapshot().is_empty());
    }

    #[test]
    fn amounts_distinguish_contracts(first in 0u64..1_000_000, second in 0u64..1_000_000) {
        prop_assume!(first != second);
        let mut store = ModelStore::new();
        run(&mut store, &add_athlete_line("Lionel Messi", "Football")).unwrap();
        run(&mut store, ADD_MIAMI).unwrap();

        for amount in [first, second] {
            let line = format!(
                "add-c n/Lionel Messi s/Football o/Inter Miami sd/01012024 ed/31122024 am/{}",
                amount
            );
            prop_assert!(run(&mut store, &line).is_ok());
        }
        prop_assert_eq!(store.contracts().len(), 2);
    }
}
