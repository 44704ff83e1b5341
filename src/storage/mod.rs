// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Persisted-blob backends.
//!
//! The transaction store keeps its whole collection as one serialized value
//! under one key. Anything that can get and set a string by key can back it.

mod file;
mod memory;
mod sqlite;

pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

use crate::config::{BackendKind, Config};
use crate::error::BackendError;
use std::fs;

pub trait BlobBackend {
    /// Returns `None` when nothing has been stored under `key` yet.
    fn get(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Replaces whatever is stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), BackendError>;

    /// Human-readable description of where data lives.
    fn location(&self) -> String;
}

impl<B: BlobBackend + ?Sized> BlobBackend for Box<B> {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BackendError> {
        (**self).set(key, value)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/// Keys become file names under [`FileBackend`], so each must be a single
/// non-empty path component.
pub fn check_key(key: &str) -> Result<(), BackendError> {
    if key.trim().is_empty() || key.contains(['/', '\\', '\0']) {
        return Err(BackendError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// Opens the backend selected by `config`, creating its data directory.
pub fn open(config: &Config) -> Result<Box<dyn BlobBackend>, BackendError> {
    fs::create_dir_all(&config.data_dir)
        .map_err(|e| BackendError::io(&config.data_dir, e))?;
    let backend: Box<dyn BlobBackend> = match config.backend {
        BackendKind::Sqlite => Box::new(SqliteBackend::open(
            config.data_dir.join("pocketledger.sqlite"),
        )?),
        BackendKind::File => Box::new(FileBackend::new(&config.data_dir)),
    };
    tracing::debug!(location = %backend.location(), "opened backend");
    Ok(backend)
}
