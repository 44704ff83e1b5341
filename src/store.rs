// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Durable CRUD over the transaction collection.
//!
//! The whole collection lives as one JSON array under a single key. Every
//! write loads the array, changes it in memory and stores it back in full.
//! There is no isolation between concurrent writers: two processes updating
//! at once will lose one of the writes.

use crate::error::StoreError;
use crate::models::Transaction;
use crate::storage::BlobBackend;
use uuid::Uuid;

pub const DEFAULT_STORAGE_KEY: &str = "finance-tracker-data";

/// What `update` and `delete` do when no entry has the given id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingIdPolicy {
    /// Persist the unchanged collection and report success.
    #[default]
    Ignore,
    /// Fail with [`StoreError::NotFound`] and write nothing.
    Reject,
}

pub struct TransactionStore<B: BlobBackend> {
    backend: B,
    key: String,
    missing_id: MissingIdPolicy,
}

impl<B: BlobBackend> TransactionStore<B> {
    pub fn new(backend: B) -> Self {
        TransactionStore {
            backend,
            key: DEFAULT_STORAGE_KEY.to_string(),
            missing_id: MissingIdPolicy::default(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_missing_id_policy(mut self, policy: MissingIdPolicy) -> Self {
        self.missing_id = policy;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn missing_id_policy(&self) -> MissingIdPolicy {
        self.missing_id
    }

    /// Loads the full collection. Nothing stored yet is an empty list.
    pub fn list(&self) -> Result<Vec<Transaction>, StoreError> {
        let raw = match self.backend.get(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                tracing::debug!(key = %self.key, "no stored transactions");
                return Ok(Vec::new());
            }
        };
        let transactions: Vec<Transaction> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                key: self.key.clone(),
                source,
            })?;
        tracing::debug!(key = %self.key, count = transactions.len(), "loaded transactions");
        Ok(transactions)
    }

    pub fn get(&self, id: &str) -> Result<Option<Transaction>, StoreError> {
        Ok(self.list()?.into_iter().find(|t| t.id == id))
    }

    /// Appends `t`, assigning a fresh id when it has none.
    pub fn create(&self, mut t: Transaction) -> Result<Transaction, StoreError> {
        t.validate()?;
        if t.id.trim().is_empty() {
            t.id = Uuid::new_v4().to_string();
        }
        let mut transactions = self.list()?;
        transactions.push(t.clone());
        self.save(&transactions)?;
        tracing::info!(id = %t.id, kind = t.r#type.as_str(), amount = %t.amount, "created transaction");
        Ok(t)
    }

    /// Replaces every entry with `id` in place, mirroring `delete`, which
    /// removes every match. `t` keeps `id` whatever its own id says.
    pub fn update(&self, id: &str, mut t: Transaction) -> Result<Transaction, StoreError> {
        t.validate()?;
        t.id = id.to_string();
        let mut transactions = self.list()?;
        let mut replaced = 0usize;
        for slot in transactions.iter_mut().filter(|existing| existing.id == id) {
            *slot = t.clone();
            replaced += 1;
        }
        if replaced == 0 {
            self.on_missing(id, "update")?;
        } else {
            tracing::info!(id, replaced, "updated transaction");
        }
        self.save(&transactions)?;
        Ok(t)
    }

    /// Removes the entry with `id` and hands the id back.
    pub fn delete(&self, id: &str) -> Result<String, StoreError> {
        let mut transactions = self.list()?;
        let before = transactions.len();
        transactions.retain(|t| t.id != id);
        if transactions.len() == before {
            self.on_missing(id, "delete")?;
        } else {
            tracing::info!(id, removed = before - transactions.len(), "deleted transaction");
        }
        self.save(&transactions)?;
        Ok(id.to_string())
    }

    /// Appends a batch in a single write. Nothing is stored if any entry is invalid.
    pub fn create_many(&self, batch: Vec<Transaction>) -> Result<Vec<Transaction>, StoreError> {
        let mut created = Vec::with_capacity(batch.len());
        for mut t in batch {
            t.validate()?;
            if t.id.trim().is_empty() {
                t.id = Uuid::new_v4().to_string();
            }
            created.push(t);
        }
        let mut transactions = self.list()?;
        transactions.extend(created.iter().cloned());
        self.save(&transactions)?;
        tracing::info!(count = created.len(), "created transactions");
        Ok(created)
    }

    fn on_missing(&self, id: &str, op: &str) -> Result<(), StoreError> {
        match self.missing_id {
            MissingIdPolicy::Ignore => {
                tracing::warn!(id, op, "no transaction with this id; collection left unchanged");
                Ok(())
            }
            MissingIdPolicy::Reject => Err(StoreError::NotFound { id: id.to_string() }),
        }
    }

    fn save(&self, transactions: &[Transaction]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(transactions).map_err(StoreError::Encode)?;
        self.backend.set(&self.key, &raw)?;
        Ok(())
    }
}
