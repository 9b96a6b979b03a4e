// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Expected output of an invocation.

use serde::{Deserialize, Serialize};

/// Substrings that must all appear in captured output.
///
/// Deserializes from either a single string or an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lookup {
    One(String),
    Many(Vec<String>),
}

impl Lookup {
    /// True for an empty string or an empty collection
    pub fn is_empty(&self) -> bool {
        match self {
            Lookup::One(s) => s.is_empty(),
            Lookup::Many(v) => v.is_empty(),
        }
    }

    /// Required substrings, in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let items: &[String] = match self {
            Lookup::One(s) => std::slice::from_ref(s),
            Lookup::Many(v) => v,
        };
        items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        match self {
            Lookup::One(_) => 1,
            Lookup::Many(v) => v.len(),
        }
    }

    /// First entry not contained in `haystack`
    pub fn first_missing<'a>(&'a self, haystack: &str) -> Option<&'a str> {
        self.iter().find(|needle| !haystack.contains(needle))
    }

    /// Apply `f` to every entry, keeping the shape
    pub fn map(&self, mut f: impl FnMut(&str) -> String) -> Lookup {
        match self {
            Lookup::One(s) => Lookup::One(f(s)),
            Lookup::Many(v) => Lookup::Many(v.iter().map(|s| f(s)).collect()),
        }
    }
}

impl From<&str> for Lookup {
    fn from(s: &str) -> Self {
        Lookup::One(s.to_string())
    }
}

impl From<String> for Lookup {
    fn from(s: String) -> Self {
        Lookup::One(s)
    }
}

impl From<Vec<String>> for Lookup {
    fn from(v: Vec<String>) -> Self {
        Lookup::Many(v)
    }
}

impl From<Vec<&str>> for Lookup {
    fn from(v: Vec<&str>) -> Self {
        Lookup::Many(v.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Lookup {
    fn from(v: &[&str]) -> Self {
        Lookup::Many(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Lookup {
    fn from(v: [&str; N]) -> Self {
        Lookup::Many(v.iter().map(|s| s.to_string()).collect())
    }
}

/// What the captured output must look like
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// Normalized output equals this string exactly
    Equals(String),
    /// Normalized output contains every entry
    Contains(Lookup),
}

impl Expectation {
    /// Short label for reports: `equals` or `contains`
    pub fn kind(&self) -> &'static str {
        match self {
            Expectation::Equals(_) => "equals",
            Expectation::Contains(_) => "contains",
        }
    }
}

#[cfg(test)]
#[path = "expect_tests.rs"]
mod tests;
