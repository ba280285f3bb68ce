// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Enum IR

/// A proto3 `enum`. The name is stored as written in the ASN.1 source
/// and PascalCased at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtoEnum {
    pub name: String,
    pub comments: Vec<String>,
    pub defs: Vec<ProtoEnumDef>,
}

impl ProtoEnum {
    pub fn new(name: &str, comment: String) -> Self {
        ProtoEnum {
            name: name.to_string(),
            comments: vec![comment],
            defs: Vec::new(),
        }
    }

    pub fn add_def(&mut self, def: ProtoEnumDef) {
        self.defs.push(def);
    }
}

/// One enum member. `index` is the explicit value from the source when
/// present; auto-assigned members take the running counter at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtoEnumDef {
    pub name: String,
    pub index: Option<i32>,
}

impl ProtoEnumDef {
    pub fn new(name: &str, index: Option<i32>) -> Self {
        ProtoEnumDef {
            name: name.to_string(),
            index,
        }
    }
}
