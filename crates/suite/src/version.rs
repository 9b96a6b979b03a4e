// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declared version lookup from a JSON package manifest.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path} has no string \"version\" field")]
    Missing { path: PathBuf },
}

/// Read the top-level `"version"` string of a JSON file such as `package.json`.
pub fn read_version(path: &Path) -> Result<String, VersionError> {
    let content = std::fs::read_to_string(path).map_err(|source| VersionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|source| VersionError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    value
        .get("version")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| VersionError::Missing {
            path: path.to_path_buf(),
        })
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
