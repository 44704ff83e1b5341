// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::in_period;
use crate::commands::period_filter;
use crate::models::{Transaction, TransactionType};
use crate::storage::BlobBackend;
use crate::store::TransactionStore;
use crate::utils::{
    arg, fmt_money, maybe_print_json, opt_arg, parse_date, parse_decimal, pretty_table, today,
};
use anyhow::{Context, Result, anyhow};
use regex::Regex;

pub fn handle<B: BlobBackend>(store: &TransactionStore<B>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add<B: BlobBackend>(store: &TransactionStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let date = match opt_arg(sub, "date") {
        Some(d) => parse_date(d)?,
        None => today(),
    };
    let kind: TransactionType = arg(sub, "type")?.parse()?;
    let amount = parse_decimal(arg(sub, "amount")?)?;
    let mut t = Transaction::new(
        date,
        kind,
        arg(sub, "category")?,
        amount,
        arg(sub, "description")?,
    );
    if let Some(id) = opt_arg(sub, "id") {
        t = t.with_id(id);
    }
    if !sub.get_flag("allow-custom") {
        t.validate_entry()?;
    }

    let t = store.create(t)?;
    println!(
        "Recorded {} {} on {} in {} ({})",
        t.r#type,
        fmt_money(&t.amount),
        t.date,
        t.category,
        t.id
    );
    Ok(())
}

fn list<B: BlobBackend>(store: &TransactionStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                let sign = match t.r#type {
                    TransactionType::Income => "+",
                    TransactionType::Expense => "-",
                };
                vec![
                    t.date.to_string(),
                    t.r#type.to_string(),
                    t.category.clone(),
                    format!("{}{}", sign, fmt_money(&t.amount)),
                    t.description.clone(),
                    t.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "Category", "Amount", "Description", "Id"],
                rows,
            )
        );
    }
    Ok(())
}

/// Stored transactions in storage order after the list filters. `--limit`
/// keeps the most recently recorded entries.
pub fn query_rows<B: BlobBackend>(
    store: &TransactionStore<B>,
    sub: &clap::ArgMatches,
) -> Result<Vec<Transaction>> {
    let mut data = store.list()?;

    if let Some((range, anchor)) = period_filter(sub)? {
        data = in_period(&data, range, anchor);
    }
    if let Some(kind) = opt_arg(sub, "type") {
        let kind: TransactionType = kind.parse()?;
        data.retain(|t| t.r#type == kind);
    }
    if let Some(cat) = opt_arg(sub, "category") {
        data.retain(|t| t.category.eq_ignore_ascii_case(cat));
    }
    if let Some(pat) = opt_arg(sub, "match") {
        let re = Regex::new(pat).with_context(|| format!("Invalid pattern '{}'", pat))?;
        data.retain(|t| re.is_match(&t.description));
    }
    if let Some(limit) = sub.get_one::<usize>("limit") {
        let skip = data.len().saturating_sub(*limit);
        data.drain(..skip);
    }
    Ok(data)
}

fn edit<B: BlobBackend>(store: &TransactionStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let id = arg(sub, "id")?;
    let existing = store
        .get(id)?
        .ok_or_else(|| anyhow!("Transaction '{}' not found", id))?;

    let mut t = existing.clone();
    if let Some(d) = opt_arg(sub, "date") {
        t.date = parse_date(d)?;
    }
    if let Some(kind) = opt_arg(sub, "type") {
        t.r#type = kind.parse()?;
    }
    if let Some(cat) = opt_arg(sub, "category") {
        t.category = cat.to_string();
    }
    if let Some(amount) = opt_arg(sub, "amount") {
        t.amount = parse_decimal(amount)?;
    }
    if let Some(desc) = opt_arg(sub, "description") {
        t.description = desc.to_string();
    }

    // Only a changed type or category is held to the recommended set.
    let relabelled = t.r#type != existing.r#type || t.category != existing.category;
    if relabelled && !sub.get_flag("allow-custom") {
        t.validate_entry()?;
    }

    let t = store.update(id, t)?;
    println!("Updated transaction {}", t.id);
    Ok(())
}

fn remove<B: BlobBackend>(store: &TransactionStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let id = store.delete(arg(sub, "id")?)?;
    println!("Removed transaction {}", id);
    Ok(())
}
