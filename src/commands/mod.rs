// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod categories;
pub mod doctor;
pub mod exporter;
pub mod importer;
pub mod reports;
pub mod transactions;

use crate::models::TimeRange;
use crate::utils::{opt_arg, parse_date, today};
use anyhow::Result;
use chrono::NaiveDate;

/// Reads `--range` / `--on`. Without `--on` the period is the one containing today.
pub fn period_filter(sub: &clap::ArgMatches) -> Result<Option<(TimeRange, NaiveDate)>> {
    let Some(range) = opt_arg(sub, "range") else {
        return Ok(None);
    };
    let range: TimeRange = range.parse()?;
    let anchor = match opt_arg(sub, "on") {
        Some(on) => parse_date(on)?,
        None => today(),
    };
    Ok(Some((range, anchor)))
}
