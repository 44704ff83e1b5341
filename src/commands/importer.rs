// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::export::read_csv;
use crate::storage::BlobBackend;
use crate::store::TransactionStore;
use crate::utils::arg;
use anyhow::{Context, Result};
use std::fs::File;

pub fn handle<B: BlobBackend>(store: &TransactionStore<B>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(store, sub),
        _ => Ok(()),
    }
}

fn import_transactions<B: BlobBackend>(
    store: &TransactionStore<B>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let path = arg(sub, "path")?;
    let file = File::open(path).with_context(|| format!("Open CSV {}", path))?;
    let batch = read_csv(file).with_context(|| format!("Read CSV {}", path))?;
    let created = store.create_many(batch)?;
    println!("Imported {} transactions from {}", created.len(), path);
    Ok(())
}
