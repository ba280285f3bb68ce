// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Expression nodes of the elaborated ASN.1 tree

use serde::{Deserialize, Serialize};

use crate::constraint::Constraint;
use crate::value::AsnValue;

/// What a definition *is*: a type, a value, a value set, or a reference
/// to a type defined elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetaType {
    Type,
    Value,
    ValueSet,
    TypeRef,
}

/// The concrete construct of an expression node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExprKind {
    Integer,
    Boolean,
    Ia5String,
    BmpString,
    Utf8String,
    TeletexString,
    ObjectIdentifier,
    BitString,
    Enumerated,
    Sequence,
    SequenceOf,
    Choice,
    Reference,
    ClassDef,
    /// A named value inside an ENUMERATED (or similar) body
    UniversalValue,
    /// Extension marker `...` in a member list
    Extensible,
}

/// A reference path, e.g. `Module.Type` or `enumValue`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AsnReference {
    pub components: Vec<String>,
}

impl AsnReference {
    pub fn new<S: Into<String>>(components: Vec<S>) -> Self {
        AsnReference {
            components: components.into_iter().map(Into::into).collect(),
        }
    }
}

/// One formal parameter of a parameterized definition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AsnParam {
    /// Governor type name; empty when the parameter is itself a type
    pub governor: String,
    pub argument: String,
}

/// Information-object-class table attached to an expression: rows of
/// cells, one cell per class field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IocTable {
    pub rows: Vec<IocRow>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IocRow {
    pub cells: Vec<IocCell>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IocCell {
    /// Class field identifier (the `&field` name)
    pub field: String,
    /// Identifier of the expression filling the cell
    pub value_ident: String,
    pub value: Option<AsnValue>,
    /// Set when the cell introduces a new referencable definition
    pub new_ref: bool,
}

/// One node of the elaborated expression tree.
///
/// `spec_index` and `unique_index` are assigned by the parser/fixer;
/// `unique_index` disambiguates same-named terminal types and is embedded
/// in synthesized type references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsnExpr {
    pub ident: Option<String>,
    pub meta: MetaType,
    pub kind: ExprKind,
    pub members: Vec<AsnExpr>,
    pub constraints: Option<Constraint>,
    pub value: Option<AsnValue>,
    pub reference: Option<AsnReference>,
    pub params: Vec<AsnParam>,
    /// Clones produced by substituting actual parameters; when non-empty
    /// the template itself is not emitted
    pub specializations: Vec<AsnExpr>,
    pub ioc_table: Option<IocTable>,
    pub lineno: u32,
    pub spec_index: i32,
    pub unique_index: usize,
}

impl Default for AsnExpr {
    fn default() -> Self {
        AsnExpr {
            ident: None,
            meta: MetaType::Type,
            kind: ExprKind::Integer,
            members: Vec::new(),
            constraints: None,
            value: None,
            reference: None,
            params: Vec::new(),
            specializations: Vec::new(),
            ioc_table: None,
            lineno: 0,
            spec_index: -1,
            unique_index: 0,
        }
    }
}

impl AsnExpr {
    /// A named node of the given meta/kind; everything else defaulted.
    pub fn named(ident: &str, meta: MetaType, kind: ExprKind) -> Self {
        AsnExpr {
            ident: Some(ident.to_string()),
            meta,
            kind,
            ..AsnExpr::default()
        }
    }
}
