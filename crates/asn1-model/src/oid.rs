// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! OBJECT IDENTIFIER values attached to modules and imports

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Oid {
    pub arcs: Vec<OidArc>,
}

/// One arc of an OID: `name(number)`, bare `name`, or bare `number`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OidArc {
    pub name: Option<String>,
    pub number: Option<i64>,
}

impl OidArc {
    pub fn named(name: &str, number: i64) -> Self {
        OidArc {
            name: Some(name.to_string()),
            number: Some(number),
        }
    }

    pub fn numbered(number: i64) -> Self {
        OidArc {
            name: None,
            number: Some(number),
        }
    }
}
