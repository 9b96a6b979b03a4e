// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Suite loading: interpolation, path resolution and deadline selection.

use crate::parser::{parse_suite, CaseDef, GroupDef, ParseError, SuiteFile};
use crate::suite::{Case, Group, Suite};
use crate::template::interpolate;
use crate::version::read_version;
use probe_core::{split_command, Deadline, Expectation, Invocation};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Overrides applied on top of the suite file
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Replaces the suite's `executable`
    pub executable: Option<PathBuf>,
    /// Replaces the suite's default `timeout`; per-case timeouts still win
    pub timeout: Option<Deadline>,
}

/// Read and parse a suite file without resolving it
pub fn read_suite(path: &Path) -> Result<SuiteFile, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_suite(&content, path)
}

/// Read, parse and resolve a suite file
pub fn load_suite(path: &Path, options: &LoadOptions) -> Result<Suite, ParseError> {
    let file = read_suite(path)?;
    let dir = suite_dir(path);
    let suite = resolve_suite(file, &dir, options)?;
    tracing::debug!(
        path = %path.display(),
        groups = suite.groups.len(),
        cases = suite.case_count(),
        "suite loaded"
    );
    Ok(suite)
}

/// Absolute directory containing the suite file
pub fn suite_dir(path: &Path) -> PathBuf {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::path::absolute(&dir).unwrap_or(dir)
}

/// Turn a parsed suite into runnable cases rooted at `dir`
pub fn resolve_suite(file: SuiteFile, dir: &Path, options: &LoadOptions) -> Result<Suite, ParseError> {
    let mut vars = file.vars.clone();
    vars.insert("suite_dir".to_string(), dir.display().to_string());
    if let Some(version_from) = &file.version_from {
        let manifest = resolve_path(dir, &interpolate(version_from, &vars));
        vars.insert("version".to_string(), read_version(&manifest)?);
    }

    let program = match (&options.executable, &file.executable) {
        (Some(exe), _) => exe.clone(),
        (None, Some(exe)) => resolve_program(dir, &interpolate(exe, &vars)),
        (None, None) => return Err(ParseError::MissingExecutable),
    };
    let default_deadline = options
        .timeout
        .or(file.timeout.map(Deadline::from_secs))
        .unwrap_or_default();
    let prefix: Vec<String> = file.prefix_args.iter().map(|a| interpolate(a, &vars)).collect();

    let ctx = Context {
        dir,
        vars: &vars,
        program: &program,
        prefix: &prefix,
        default_deadline,
    };
    let groups = file
        .groups
        .iter()
        .map(|group| ctx.group(group))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Suite {
        dir: dir.to_path_buf(),
        groups,
    })
}

struct Context<'a> {
    dir: &'a Path,
    vars: &'a HashMap<String, String>,
    program: &'a Path,
    prefix: &'a [String],
    default_deadline: Deadline,
}

impl Context<'_> {
    fn expand(&self, s: &str) -> String {
        interpolate(s, self.vars)
    }

    fn group(&self, def: &GroupDef) -> Result<Group, ParseError> {
        Ok(Group {
            name: def.name.clone(),
            cwd: def.cwd.as_ref().map(|c| resolve_path(self.dir, &self.expand(c))),
            cases: def
                .cases
                .iter()
                .map(|c| self.case(&def.name, c))
                .collect::<Result<Vec<_>, _>>()?,
        })
    }

    fn case(&self, group: &str, def: &CaseDef) -> Result<Case, ParseError> {
        let mut invocation = Invocation::new(self.program).args(self.prefix.iter().cloned());
        invocation = match (&def.args, &def.command) {
            (Some(args), _) => invocation.args(args.iter().map(|a| self.expand(a))),
            (None, Some(command)) => invocation.args(split_command(&self.expand(command))),
            (None, None) => invocation,
        };
        if let Some(cwd) = &def.cwd {
            invocation = invocation.cwd(resolve_path(self.dir, &self.expand(cwd)));
        }
        for (key, value) in &def.env {
            invocation = invocation.env(key.clone(), self.expand(value));
        }

        let expectation = match def.expectation(&format!("{}/{}", group, def.name))? {
            Expectation::Equals(text) => Expectation::Equals(self.expand(&text)),
            Expectation::Contains(lookup) => Expectation::Contains(lookup.map(|s| self.expand(s))),
        };

        Ok(Case {
            name: def.name.clone(),
            invocation,
            expectation,
            failing: def.failing,
            deadline: def
                .timeout
                .map(Deadline::from_secs)
                .unwrap_or(self.default_deadline),
        })
    }
}

fn resolve_path(dir: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        dir.join(path)
    }
}

/// Paths with a separator resolve against the suite directory; bare names
/// are left for `PATH` lookup.
pub fn resolve_program(dir: &Path, exe: &str) -> PathBuf {
    if exe.contains(std::path::MAIN_SEPARATOR) || exe.contains('/') {
        resolve_path(dir, exe)
    } else {
        PathBuf::from(exe)
    }
}

#[cfg(test)]
#[path = "load_tests.rs"]
mod tests;
