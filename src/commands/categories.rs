// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TransactionType;
use crate::utils::{opt_arg, pretty_table};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        let kinds = match opt_arg(sub, "type") {
            Some(k) => vec![k.parse::<TransactionType>()?],
            None => vec![TransactionType::Expense, TransactionType::Income],
        };
        let mut data = Vec::new();
        for kind in kinds {
            for cat in kind.recommended_categories() {
                data.push(vec![kind.to_string(), cat.to_string()]);
            }
        }
        println!("{}", pretty_table(&["Type", "Category"], data));
    }
    Ok(())
}
