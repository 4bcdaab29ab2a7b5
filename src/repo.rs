// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Read-only repository metadata consumed by the renderer.
//!
//! A snapshot is the record returned by a successful hosting-provider lookup.
//! The renderer treats it as the authoritative identity spelling once a
//! lookup succeeded; absence of a snapshot is an expected degraded state, not
//! an error.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{self, Error};

/// Repository metadata record fetched ahead of a page render.
///
/// Field aliases accept the names used in hosting-provider API payloads so a
/// trimmed-down API response can be decoded directly.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RepoSnapshot {
    /// Account that owns the repository, possibly case-corrected.
    #[serde(alias = "login")]
    pub owner:      String,
    /// Repository name, possibly case-corrected.
    pub name:       String,
    /// Stargazer count reported by the provider.
    #[serde(default, alias = "stargazers_count")]
    pub stargazers: u64,
    /// Fork count reported by the provider.
    #[serde(default, alias = "forks_count")]
    pub forks:      u64,
    /// Primary language, absent when the provider reports none.
    #[serde(default, alias = "language")]
    pub lang:       Option<String>
}

/// Loads a repository snapshot from a JSON document on disk.
///
/// This is the CLI entry point; the web layer constructs snapshots directly
/// from its API client instead.
///
/// # Errors
///
/// Returns [`Error::Io`](Error::Io) when the file cannot be read and
/// [`Error::Snapshot`](Error::Snapshot) when the JSON cannot be decoded.
pub fn load_snapshot(path: &Path) -> Result<RepoSnapshot, Error> {
    debug!("reading repository snapshot from {}", path.display());
    let contents = fs::read_to_string(path).map_err(|source| error::io_error(path, source))?;
    serde_json::from_str(&contents).map_err(error::snapshot_error)
}
