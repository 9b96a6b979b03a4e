// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Suite files: data-driven catalogs of test cases

mod load;
mod parser;
mod suite;
mod template;
mod version;

pub use load::{load_suite, read_suite, resolve_program, resolve_suite, suite_dir, LoadOptions};
pub use parser::{parse_suite, parse_suite_with_format, CaseDef, Format, GroupDef, ParseError, SuiteFile};
pub use suite::{Case, Group, Suite};
pub use template::interpolate;
pub use version::{read_version, VersionError};
