// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for the ledger library.
//!
//! - [`ValidationError`]: an entry failed shape checks and was never persisted.
//!   Hand it back to whoever typed the entry.
//! - [`StoreError`]: the transaction store could not complete an operation.
//!   `Corrupt` means the persisted blob is unreadable and retrying won't help.
//! - [`BackendError`]: the key-value backend itself failed.
//! - [`ExportError`]: CSV/JSON export or import failed.
//! - [`AggregateError`]: a running total left the representable range.

use crate::models::TransactionType;
use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Category is required")]
    MissingCategory,

    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("Description is required")]
    EmptyDescription,

    #[error("Amount {0} cannot be stored without losing precision")]
    InexactAmount(Decimal),

    #[error("Unknown transaction type '{0}', expected income|expense")]
    UnknownType(String),

    #[error("Unknown time range '{0}', expected daily|weekly|monthly")]
    UnknownTimeRange(String),

    #[error("Category '{category}' is not one of the {kind} categories")]
    UnrecommendedCategory {
        kind: TransactionType,
        category: String,
    },
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Invalid storage key '{0}': must be non-empty and contain no path separators")]
    InvalidKey(String),
}

impl BackendError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BackendError::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// The blob under `key` exists but does not decode to a transaction list.
    #[error("Data unreadable: stored value under '{key}' is corrupt ({source})")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Transaction '{id}' not found")]
    NotFound { id: String },

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("Failed to encode transactions: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StoreError {
    /// Only backend failures are worth retrying; everything else needs the
    /// data or the input fixed first.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Backend(_))
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid row{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Row { line: Option<u64>, message: String },
}

impl ExportError {
    pub fn row(line: Option<u64>, message: impl Into<String>) -> Self {
        ExportError::Row {
            line,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AggregateError {
    #[error("Sum of {kind} amounts is too large to represent")]
    Overflow { kind: TransactionType },
}
