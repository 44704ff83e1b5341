// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{Totals, by_category, by_period, grand_total, in_period, ranked, totals};
use crate::commands::period_filter;
use crate::models::{TimeRange, Transaction, TransactionType};
use crate::storage::BlobBackend;
use crate::store::TransactionStore;
use crate::utils::{arg, fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle<B: BlobBackend>(store: &TransactionStore<B>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("by-category", sub)) => spend_by_category(store, sub)?,
        Some(("periods", sub)) => periods(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn selected<B: BlobBackend>(
    store: &TransactionStore<B>,
    sub: &clap::ArgMatches,
) -> Result<Vec<Transaction>> {
    let data = store.list()?;
    Ok(match period_filter(sub)? {
        Some((range, anchor)) => in_period(&data, range, anchor),
        None => data,
    })
}

pub fn summary_data<B: BlobBackend>(
    store: &TransactionStore<B>,
    sub: &clap::ArgMatches,
) -> Result<Totals> {
    Ok(totals(&selected(store, sub)?)?)
}

fn summary<B: BlobBackend>(store: &TransactionStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let t = summary_data(store, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &t)? {
        let rows = vec![
            vec!["Income".to_string(), fmt_money(&t.income)],
            vec!["Expenses".to_string(), fmt_money(&t.expenses)],
            vec!["Balance".to_string(), fmt_money(&t.balance)],
        ];
        println!("{}", pretty_table(&["", "Amount"], rows));
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub amount: Decimal,
}

pub fn category_rows<B: BlobBackend>(
    store: &TransactionStore<B>,
    sub: &clap::ArgMatches,
) -> Result<Vec<CategoryRow>> {
    let kind: TransactionType = arg(sub, "type")?.parse()?;
    let data = selected(store, sub)?;
    Ok(ranked(by_category(&data, kind)?)
        .into_iter()
        .map(|(category, amount)| CategoryRow { category, amount })
        .collect())
}

fn spend_by_category<B: BlobBackend>(
    store: &TransactionStore<B>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let kind: TransactionType = arg(sub, "type")?.parse()?;
    let data = category_rows(store, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let grand = grand_total(data.iter().map(|r| r.amount), kind)?;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                let share = r
                    .amount
                    .checked_div(grand)
                    .and_then(|s| s.checked_mul(Decimal::ONE_HUNDRED))
                    .unwrap_or(Decimal::ZERO);
                vec![
                    r.category.clone(),
                    fmt_money(&r.amount),
                    format!("{:.1}%", share.round_dp(1)),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Amount", "Share"], rows));
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct PeriodRow {
    pub period: String,
    #[serde(flatten)]
    pub totals: Totals,
}

/// Newest period first, at most `--limit` of them.
pub fn period_rows<B: BlobBackend>(
    store: &TransactionStore<B>,
    sub: &clap::ArgMatches,
) -> Result<Vec<PeriodRow>> {
    let range: TimeRange = arg(sub, "range")?.parse()?;
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(12);
    let map = by_period(&store.list()?, range)?;
    Ok(map
        .into_iter()
        .rev()
        .take(limit)
        .map(|(start, totals)| PeriodRow {
            period: match range {
                TimeRange::Monthly => start.format("%Y-%m").to_string(),
                _ => start.to_string(),
            },
            totals,
        })
        .collect())
}

fn periods<B: BlobBackend>(store: &TransactionStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let data = period_rows(store, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.period.clone(),
                    fmt_money(&r.totals.income),
                    fmt_money(&r.totals.expenses),
                    fmt_money(&r.totals.balance),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Period", "Income", "Expenses", "Balance"], rows)
        );
    }
    Ok(())
}
