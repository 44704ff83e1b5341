// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::StoreError;
use crate::storage::BlobBackend;
use crate::store::TransactionStore;
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::HashSet;

pub fn handle<B: BlobBackend>(store: &TransactionStore<B>) -> Result<()> {
    let rows = find_issues(store)?;
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// One `[issue, detail]` row per problem. An unreadable blob is reported, not raised.
pub fn find_issues<B: BlobBackend>(store: &TransactionStore<B>) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();

    let transactions = match store.list() {
        Ok(t) => t,
        Err(e @ StoreError::Corrupt { .. }) => {
            rows.push(vec!["corrupt_store".into(), e.to_string()]);
            return Ok(rows);
        }
        Err(e) => return Err(e.into()),
    };

    // 1) Ids must be unique and non-empty
    let mut seen = HashSet::new();
    for t in &transactions {
        if t.id.trim().is_empty() {
            rows.push(vec!["missing_id".into(), format!("{} {}", t.date, t.description)]);
        } else if !seen.insert(t.id.as_str()) {
            rows.push(vec!["duplicate_id".into(), t.id.clone()]);
        }
    }

    // 2) Shape problems that only a hand-edited or foreign blob can contain
    for t in &transactions {
        if t.amount <= Decimal::ZERO {
            rows.push(vec!["non_positive_amount".into(), format!("{} {}", t.id, t.amount)]);
        }
        if t.description.trim().is_empty() {
            rows.push(vec!["empty_description".into(), t.id.clone()]);
        }
        if t.category.trim().is_empty() {
            rows.push(vec!["missing_category".into(), t.id.clone()]);
        } else if !t.r#type.is_recommended(&t.category) {
            rows.push(vec![
                "unrecommended_category".into(),
                format!("{} {}/{}", t.id, t.r#type, t.category),
            ]);
        }
    }

    Ok(rows)
}
