// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::export::{export_file_name, write_csv, write_json};
use crate::storage::BlobBackend;
use crate::store::TransactionStore;
use crate::utils::{arg, opt_arg, today};
use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::BufWriter;

pub fn handle<B: BlobBackend>(store: &TransactionStore<B>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions<B: BlobBackend>(
    store: &TransactionStore<B>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let fmt = arg(sub, "format")?.to_lowercase();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }
    let out = match opt_arg(sub, "out") {
        Some(path) => path.to_string(),
        None => export_file_name(today()),
    };

    let transactions = store.list()?;
    let file = File::create(&out).with_context(|| format!("Create {}", out))?;
    let writer = BufWriter::new(file);
    let written = match fmt.as_str() {
        "csv" => write_csv(&transactions, writer),
        _ => write_json(&transactions, writer),
    };
    written.with_context(|| format!("Write {}", out))?;

    tracing::info!(count = transactions.len(), path = %out, format = %fmt, "exported transactions");
    println!("Exported {} transactions to {}", transactions.len(), out);
    Ok(())
}
