// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use pocketledger::config::Config;
use pocketledger::storage::BlobBackend;
use pocketledger::store::TransactionStore;
use pocketledger::{cli, commands, logging, storage};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let config = Config::from_matches(&matches)?;
    logging::init(config.verbosity);

    let backend = storage::open(&config).context("Failed to open data store")?;
    let store = TransactionStore::new(backend)
        .with_key(config.storage_key.as_str())
        .with_missing_id_policy(config.missing_id);

    match matches.subcommand() {
        Some(("init", _)) => {
            let count = store.list()?.len();
            println!(
                "Ledger ready at {} ({} transactions)",
                store.backend().location(),
                count
            );
        }
        Some(("tx", sub)) => commands::transactions::handle(&store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("import", sub)) => commands::importer::handle(&store, sub)?,
        Some(("category", sub)) => commands::categories::handle(sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
