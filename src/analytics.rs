// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Summary statistics over an in-memory list of transactions. Nothing here
//! touches storage.
//!
//! Sums are checked: a total past `Decimal::MAX` is an [`AggregateError`],
//! never a panic.

use crate::error::AggregateError;
use crate::models::{TimeRange, Transaction, TransactionType};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

fn checked_sum(
    acc: Decimal,
    amount: Decimal,
    kind: TransactionType,
) -> Result<Decimal, AggregateError> {
    acc.checked_add(amount).ok_or(AggregateError::Overflow { kind })
}

impl Totals {
    fn add(&mut self, t: &Transaction) -> Result<(), AggregateError> {
        match t.r#type {
            TransactionType::Income => {
                self.income = checked_sum(self.income, t.amount, t.r#type)?
            }
            TransactionType::Expense => {
                self.expenses = checked_sum(self.expenses, t.amount, t.r#type)?
            }
        }
        self.balance = self
            .income
            .checked_sub(self.expenses)
            .ok_or(AggregateError::Overflow { kind: t.r#type })?;
        Ok(())
    }
}

pub fn totals(transactions: &[Transaction]) -> Result<Totals, AggregateError> {
    let mut out = Totals::default();
    for t in transactions {
        out.add(t)?;
    }
    Ok(out)
}

/// Sums per category for one type. Categories with no matching entries are absent.
pub fn by_category(
    transactions: &[Transaction],
    kind: TransactionType,
) -> Result<BTreeMap<String, Decimal>, AggregateError> {
    let mut agg: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in transactions.iter().filter(|t| t.r#type == kind) {
        let slot = agg.entry(t.category.clone()).or_insert(Decimal::ZERO);
        *slot = checked_sum(*slot, t.amount, kind)?;
    }
    Ok(agg)
}

/// Grand total of a category breakdown.
pub fn grand_total(
    amounts: impl IntoIterator<Item = Decimal>,
    kind: TransactionType,
) -> Result<Decimal, AggregateError> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| checked_sum(acc, amount, kind))
}

/// Largest first; ties broken by name.
pub fn ranked(map: BTreeMap<String, Decimal>) -> Vec<(String, Decimal)> {
    let mut items: Vec<_> = map.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    items
}

/// Entries falling in the same day, week or month as `anchor`.
pub fn in_period(transactions: &[Transaction], range: TimeRange, anchor: NaiveDate) -> Vec<Transaction> {
    let start = range.period_start(anchor);
    transactions
        .iter()
        .filter(|t| range.period_start(t.date) == start)
        .cloned()
        .collect()
}

/// Totals keyed by period start, oldest first.
pub fn by_period(
    transactions: &[Transaction],
    range: TimeRange,
) -> Result<BTreeMap<NaiveDate, Totals>, AggregateError> {
    let mut map: BTreeMap<NaiveDate, Totals> = BTreeMap::new();
    for t in transactions {
        map.entry(range.period_start(t.date)).or_default().add(t)?;
    }
    Ok(map)
}
