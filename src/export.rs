// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! CSV and JSON export of the transaction collection, plus reading the CSV
//! export format back in.

use crate::error::ExportError;
use crate::models::{Transaction, TransactionType};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use rust_decimal::Decimal;
use std::io::{Read, Write};

pub const CSV_HEADER: [&str; 5] = ["Date", "Type", "Category", "Amount", "Description"];

pub fn export_file_name(date: NaiveDate) -> String {
    format!("finance-export-{}.csv", date)
}

/// Writes one header row then one row per transaction, in storage order.
/// Fields are quoted per RFC 4180 only when they need it.
pub fn write_csv<W: Write>(transactions: &[Transaction], out: W) -> Result<(), ExportError> {
    let mut wtr = WriterBuilder::new().from_writer(out);
    wtr.write_record(CSV_HEADER)?;
    for t in transactions {
        wtr.write_record([
            t.date.to_string(),
            t.r#type.to_string(),
            t.category.clone(),
            t.amount.to_string(),
            t.description.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn to_csv_string(transactions: &[Transaction]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(transactions, &mut buf)?;
    String::from_utf8(buf).map_err(|e| ExportError::row(None, e.to_string()))
}

/// Pretty JSON array using the persisted field names.
pub fn write_json<W: Write>(transactions: &[Transaction], mut out: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut out, transactions)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Parses the CSV export format. Returned transactions carry no id.
pub fn read_csv<R: Read>(input: R) -> Result<Vec<Transaction>, ExportError> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(input);

    let headers = rdr.headers()?.clone();
    let found: Vec<&str> = headers.iter().map(|h| h.trim()).collect();
    if found != CSV_HEADER {
        return Err(ExportError::row(
            Some(1),
            format!("expected header {}, found {}", CSV_HEADER.join(","), found.join(",")),
        ));
    }

    let mut out = Vec::new();
    for result in rdr.records() {
        let rec = result?;
        let line = rec.position().map(|p| p.line());
        let date_raw = field(&rec, 0, "date", line)?;
        let date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d").map_err(|_| {
            ExportError::row(line, format!("invalid date '{}', expected YYYY-MM-DD", date_raw))
        })?;
        let kind: TransactionType = field(&rec, 1, "type", line)?
            .parse()
            .map_err(|e: crate::error::ValidationError| ExportError::row(line, e.to_string()))?;
        let category = field(&rec, 2, "category", line)?;
        let amount_raw = field(&rec, 3, "amount", line)?;
        let amount = amount_raw
            .parse::<Decimal>()
            .map_err(|_| ExportError::row(line, format!("invalid amount '{}'", amount_raw)))?;
        let description = field(&rec, 4, "description", line)?;

        let t = Transaction::new(date, kind, category, amount, description);
        t.validate()
            .map_err(|e| ExportError::row(line, e.to_string()))?;
        out.push(t);
    }
    Ok(out)
}

fn field<'r>(
    rec: &'r StringRecord,
    i: usize,
    name: &str,
    line: Option<u64>,
) -> Result<&'r str, ExportError> {
    rec.get(i)
        .map(str::trim)
        .ok_or_else(|| ExportError::row(line, format!("{} missing", name)))
}
