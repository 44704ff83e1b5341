// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::storage::check_key;
use crate::store::{MissingIdPolicy, DEFAULT_STORAGE_KEY};
use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::str::FromStr;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.pocketledger", "PocketLedger", "pocketledger"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Sqlite,
    File,
}

impl FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(BackendKind::Sqlite),
            "file" | "json" => Ok(BackendKind::File),
            other => Err(anyhow!("Unknown backend '{}' (use sqlite|file)", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub backend: BackendKind,
    pub storage_key: String,
    pub missing_id: MissingIdPolicy,
    pub verbosity: u8,
}

pub fn default_data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().to_path_buf())
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Config {
            data_dir: data_dir.into(),
            backend: BackendKind::Sqlite,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            missing_id: MissingIdPolicy::Ignore,
            verbosity: 0,
        }
    }

    /// Reads the global flags; unset flags fall back to environment, then defaults.
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let data_dir = match m.get_one::<String>("data-dir") {
            Some(dir) => PathBuf::from(dir.trim()),
            None => default_data_dir()?,
        };
        let mut config = Config::new(data_dir);
        if let Some(b) = m.get_one::<String>("backend") {
            config.backend = b.parse()?;
        }
        if let Some(key) = m.get_one::<String>("key") {
            let key = key.trim();
            check_key(key)?;
            config.storage_key = key.to_string();
        }
        if m.get_flag("strict") {
            config.missing_id = MissingIdPolicy::Reject;
        }
        config.verbosity = m.get_count("verbose");
        Ok(config)
    }
}
