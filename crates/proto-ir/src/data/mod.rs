// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Protobuf IR data structures
//!
//! A strict ownership tree: the module owns its imports, enums and
//! messages; messages own their fields and oneofs. Append operations
//! preserve insertion order, which is also render order.

use asn1_model::Oid;

pub mod enums;
pub mod message;
pub mod naming;

use enums::ProtoEnum;
use message::ProtoMessage;

/// An `import` line plus the source module's OID for the traceability
/// comment.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtoImport {
    pub path: String,
    pub oid: Option<Oid>,
}

/// One output `.proto` file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProtoModule {
    pub name: String,
    /// Path of the ASN.1 source this module was read from
    pub src_filename: String,
    pub oid: Option<Oid>,
    pub imports: Vec<ProtoImport>,
    pub enums: Vec<ProtoEnum>,
    pub messages: Vec<ProtoMessage>,
    /// Prelude comments, one line per entry
    pub comments: Vec<String>,
}

impl ProtoModule {
    pub fn new(name: &str, src_filename: &str, oid: Option<Oid>) -> Self {
        ProtoModule {
            name: name.to_string(),
            src_filename: src_filename.to_string(),
            oid,
            ..ProtoModule::default()
        }
    }

    pub fn add_import(&mut self, import: ProtoImport) {
        self.imports.push(import);
    }

    pub fn add_enum(&mut self, protoenum: ProtoEnum) {
        self.enums.push(protoenum);
    }

    pub fn add_message(&mut self, message: ProtoMessage) {
        self.messages.push(message);
    }

    pub fn add_comment(&mut self, comment: String) {
        self.comments.push(comment);
    }
}
