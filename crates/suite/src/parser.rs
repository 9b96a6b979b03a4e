// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Suite file parsing (TOML and JSON)

use crate::version::VersionError;
use probe_core::{Expectation, Lookup};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Suite file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// `.json` files are JSON; everything else is TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Format::Json,
            _ => Format::Toml,
        }
    }
}

/// Errors that can occur while loading a suite
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid format for {location}: {message}")]
    InvalidFormat { location: String, message: String },

    #[error("no executable configured (set `executable` in the suite, PROBE_EXECUTABLE, or --exe)")]
    MissingExecutable,

    #[error("version lookup failed: {0}")]
    Version(#[from] VersionError),
}

/// A suite file as written, before interpolation and path resolution
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteFile {
    /// Target executable, relative to the suite file unless absolute
    #[serde(default)]
    pub executable: Option<String>,
    /// Arguments prepended to every case
    #[serde(default)]
    pub prefix_args: Vec<String>,
    /// Default deadline in seconds
    #[serde(default)]
    pub timeout: Option<u64>,
    /// JSON file whose `"version"` populates `${version}`
    #[serde(default)]
    pub version_from: Option<String>,
    #[serde(default)]
    pub vars: HashMap<String, String>,
    #[serde(default, rename = "group", alias = "groups")]
    pub groups: Vec<GroupDef>,
}

/// A named group of cases sharing an optional working directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupDef {
    pub name: String,
    /// Harness working directory while this group runs
    #[serde(default)]
    pub cwd: Option<String>,
    #[serde(default, rename = "case", alias = "cases")]
    pub cases: Vec<CaseDef>,
}

/// One test case as written
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseDef {
    pub name: String,
    #[serde(default)]
    pub args: Option<Vec<String>>,
    /// Space-joined arguments, split on single spaces
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub equals: Option<String>,
    #[serde(default)]
    pub contains: Option<Lookup>,
    /// Non-zero exit is the expected outcome
    #[serde(default)]
    pub failing: bool,
    #[serde(default)]
    pub timeout: Option<u64>,
    /// Child working directory, relative to the suite file
    #[serde(default)]
    pub cwd: Option<String>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl CaseDef {
    /// The case's single matcher, before interpolation
    pub fn expectation(&self, location: &str) -> Result<Expectation, ParseError> {
        let expectation = match (&self.equals, &self.contains) {
            (Some(text), None) => Expectation::Equals(text.clone()),
            (None, Some(lookup)) if lookup.is_empty() => {
                return Err(invalid(location, "`contains` must not be empty"))
            }
            (None, Some(lookup)) => Expectation::Contains(lookup.clone()),
            (Some(_), Some(_)) => {
                return Err(invalid(location, "set only one of `equals` or `contains`"))
            }
            (None, None) => {
                return Err(invalid(location, "one of `equals` or `contains` is required"))
            }
        };
        Ok(expectation)
    }
}

/// Parse a suite, picking the format from the path's extension
pub fn parse_suite(content: &str, path: &Path) -> Result<SuiteFile, ParseError> {
    parse_suite_with_format(content, Format::from_path(path))
}

/// Parse and validate a suite's structure
pub fn parse_suite_with_format(content: &str, format: Format) -> Result<SuiteFile, ParseError> {
    let suite: SuiteFile = match format {
        Format::Toml => toml::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };

    if suite.timeout == Some(0) {
        return Err(invalid("suite", "timeout must be at least 1 second"));
    }

    let mut group_names = HashSet::new();
    for group in &suite.groups {
        if group.name.trim().is_empty() {
            return Err(invalid("group", "name must not be empty"));
        }
        if !group_names.insert(group.name.as_str()) {
            return Err(invalid(
                &format!("group '{}'", group.name),
                "duplicate group name",
            ));
        }

        let mut case_names = HashSet::new();
        for case in &group.cases {
            let location = format!("{}/{}", group.name, case.name);
            if case.name.trim().is_empty() {
                return Err(invalid(
                    &format!("group '{}'", group.name),
                    "case name must not be empty",
                ));
            }
            if !case_names.insert(case.name.as_str()) {
                return Err(invalid(&location, "duplicate case name"));
            }
            validate_case(case, &location)?;
        }
    }

    Ok(suite)
}

fn validate_case(case: &CaseDef, location: &str) -> Result<(), ParseError> {
    match (&case.args, &case.command) {
        (Some(_), Some(_)) => return Err(invalid(location, "set only one of `args` or `command`")),
        (None, None) => return Err(invalid(location, "one of `args` or `command` is required")),
        _ => {}
    }
    case.expectation(location)?;
    if case.timeout == Some(0) {
        return Err(invalid(location, "timeout must be at least 1 second"));
    }
    Ok(())
}

fn invalid(location: &str, message: &str) -> ParseError {
    ParseError::InvalidFormat {
        location: location.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
