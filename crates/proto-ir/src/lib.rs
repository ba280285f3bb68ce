// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Protobuf intermediate representation and the ASN.1 → IR translator
//!
//! `data` holds the IR tree a renderer consumes; `translation` walks the
//! elaborated ASN.1 tree and builds it. IR insertion order equals AST
//! traversal order, so rendering is deterministic.

pub mod data;
pub mod translation;

pub use data::enums::{ProtoEnum, ProtoEnumDef};
pub use data::message::{
    FieldRules, ParamKind, ProtoField, ProtoMessage, ProtoOneof, ProtoParam, RuleBody, RuleScalar,
};
pub use data::naming::{
    is_proto_scalar, to_lower_snake_case, to_pascal_case, to_screaming_snake_case, PROTO_SCALARS,
};
pub use data::{ProtoImport, ProtoModule};
pub use translation::{Domain, Translator};
