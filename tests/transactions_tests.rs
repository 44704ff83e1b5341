// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketledger::storage::MemoryBackend;
use pocketledger::store::{MissingIdPolicy, TransactionStore};
use pocketledger::{cli, commands::transactions};
use rust_decimal::Decimal;

fn run(store: &TransactionStore<MemoryBackend>, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["pocketledger", "tx"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("tx", tx_m)) => transactions::handle(store, tx_m),
        _ => panic!("no tx subcommand"),
    }
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["pocketledger", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    list_m.clone()
}

fn setup() -> TransactionStore<MemoryBackend> {
    let store = TransactionStore::new(MemoryBackend::new());
    for (i, (date, kind, cat, amt, desc)) in [
        ("2025-01-01", "income", "Salary", "2500", "January pay"),
        ("2025-01-03", "expense", "Food", "42.10", "Weekly groceries"),
        ("2025-01-09", "expense", "Transport", "15", "Train ticket"),
        ("2025-02-02", "expense", "Food", "9.90", "Pizza night"),
    ]
    .into_iter()
    .enumerate()
    {
        let id = format!("id{}", i + 1);
        run(
            &store,
            &[
                "add", "--id", &id, "--date", date, "--type", kind, "--category", cat,
                "--amount", amt, "--description", desc,
            ],
        )
        .unwrap();
    }
    store
}

#[test]
fn add_records_in_order() {
    let store = setup();
    let all = store.list().unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].id, "id1");
    assert_eq!(all[1].amount, Decimal::new(4210, 2));
    assert_eq!(all[3].description, "Pizza night");
}

#[test]
fn add_enforces_recommended_categories_unless_allowed() {
    let store = setup();
    let args = [
        "add", "--date", "2025-01-05", "--type", "expense", "--category", "Pets",
        "--amount", "30", "--description", "Vet",
    ];
    assert!(run(&store, &args).is_err());
    assert_eq!(store.list().unwrap().len(), 4);

    let mut allowed = args.to_vec();
    allowed.push("--allow-custom");
    run(&store, &allowed).unwrap();
    assert_eq!(store.list().unwrap()[4].category, "Pets");
}

#[test]
fn add_rejects_negative_amount() {
    let store = setup();
    let err = run(
        &store,
        &[
            "add", "--type", "expense", "--category", "Food", "--amount", "-5",
            "--description", "Refund",
        ],
    )
    .unwrap_err();
    assert!(err.to_string().contains("Amount must be positive"));
}

#[test]
fn list_limit_keeps_most_recent() {
    let store = setup();
    let rows = transactions::query_rows(&store, &list_matches(&["--limit", "2"])).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, "id3");
    assert_eq!(rows[1].id, "id4");
}

#[test]
fn list_filters_combine() {
    let store = setup();
    let rows = transactions::query_rows(
        &store,
        &list_matches(&["--type", "expense", "--category", "food"]),
    )
    .unwrap();
    assert_eq!(rows.len(), 2);

    let rows = transactions::query_rows(
        &store,
        &list_matches(&["--range", "monthly", "--on", "2025-01-20", "--match", "(?i)groceries|ticket"]),
    )
    .unwrap();
    let ids: Vec<&str> = rows.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["id2", "id3"]);
}

#[test]
fn list_rejects_bad_pattern() {
    let store = setup();
    assert!(transactions::query_rows(&store, &list_matches(&["--match", "("])).is_err());
}

#[test]
fn edit_merges_fields_and_keeps_position() {
    let store = setup();
    run(&store, &["edit", "id2", "--amount", "45.00", "--description", "Groceries + snacks"]).unwrap();
    let all = store.list().unwrap();
    assert_eq!(all[1].id, "id2");
    assert_eq!(all[1].amount, Decimal::new(45, 0));
    assert_eq!(all[1].description, "Groceries + snacks");
    assert_eq!(all[1].category, "Food");
}

#[test]
fn edit_checks_category_when_relabelled() {
    let store = setup();
    assert!(run(&store, &["edit", "id2", "--type", "income"]).is_err());
    run(&store, &["edit", "id2", "--type", "income", "--category", "Gift"]).unwrap();
    assert_eq!(store.get("id2").unwrap().unwrap().category, "Gift");
}

#[test]
fn edit_unknown_id_fails() {
    let store = setup();
    assert!(run(&store, &["edit", "nope", "--amount", "1"]).is_err());
}

#[test]
fn rm_removes_and_tolerates_unknown_ids() {
    let store = setup();
    run(&store, &["rm", "id1"]).unwrap();
    run(&store, &["rm", "id1"]).unwrap();
    assert_eq!(store.list().unwrap().len(), 3);
}

#[test]
fn rm_unknown_id_fails_when_strict() {
    let store = setup().with_missing_id_policy(MissingIdPolicy::Reject);
    assert!(run(&store, &["rm", "ghost"]).is_err());
    assert_eq!(store.list().unwrap().len(), 4);
}
