// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketledger::storage::MemoryBackend;
use pocketledger::store::TransactionStore;
use pocketledger::{cli, commands::importer};
use rust_decimal::Decimal;
use std::io::Write;
use tempfile::NamedTempFile;

fn import(store: &TransactionStore<MemoryBackend>, path: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from([
        "pocketledger",
        "import",
        "transactions",
        "--path",
        path,
    ]);
    match matches.subcommand() {
        Some(("import", import_m)) => importer::handle(store, import_m),
        _ => panic!("no import subcommand"),
    }
}

#[test]
fn import_appends_rows_with_fresh_ids() {
    let store = TransactionStore::new(MemoryBackend::new());
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "Date,Type,Category,Amount,Description\n\
         2025-02-03,expense,Food,5.00,\"Coffee, large\"\n\
         2025-02-04,income,Gift,20,\"Card from gran\""
    )
    .unwrap();
    file.flush().unwrap();

    let path = file.path().to_str().unwrap().to_string();
    import(&store, &format!("  {}  ", path)).unwrap();

    let all = store.list().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].description, "Coffee, large");
    assert_eq!(all[0].amount, Decimal::new(5, 0));
    assert_ne!(all[0].id, all[1].id);
    assert!(all.iter().all(|t| uuid::Uuid::parse_str(&t.id).is_ok()));
}

#[test]
fn import_stores_nothing_when_a_row_is_bad() {
    let store = TransactionStore::new(MemoryBackend::new());
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "Date,Type,Category,Amount,Description\n\
         2025-02-03,expense,Food,5.00,Coffee\n\
         2025-02-30,expense,Food,5.00,Impossible day"
    )
    .unwrap();
    file.flush().unwrap();

    let err = import(&store, file.path().to_str().unwrap()).unwrap_err();
    assert!(format!("{:#}", err).contains("line 3"));
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn import_missing_file_is_an_error() {
    let store = TransactionStore::new(MemoryBackend::new());
    assert!(import(&store, "/definitely/not/here.csv").is_err());
}
