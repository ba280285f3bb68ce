// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Render options. Most arrive from command line flags; the struct is
/// serde-round-trippable so a driver can persist its configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Suppress leading indentation on field lines.
    pub no_indent: bool,
    /// Release each IR node right after it is emitted (destructive
    /// render); bounds peak memory on large schemas.
    pub consume_ir: bool,
    /// Verbosity level for logging.
    pub verbosity_level: LevelFilter,
    /// Stamp embedded in the generated-by header line. Pinnable so
    /// output comparisons stay byte-stable across releases.
    pub tool_version: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            no_indent: false,
            consume_ir: false,
            verbosity_level: LevelFilter::Info,
            tool_version: concat!("asn1-protogen-", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
