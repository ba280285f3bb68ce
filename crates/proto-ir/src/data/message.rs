// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Message, field and oneof IR

use std::fmt;
use std::fmt::{Display, Formatter};

/// A proto3 `message`. `spec_index` and `unique_index` carry over the
/// parser's indices for specialization bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtoMessage {
    pub name: String,
    pub spec_index: i32,
    pub unique_index: usize,
    pub comments: Vec<String>,
    pub fields: Vec<ProtoField>,
    pub oneofs: Vec<ProtoOneof>,
    pub params: Vec<ProtoParam>,
}

impl ProtoMessage {
    pub fn new(name: &str, spec_index: i32, unique_index: usize, comment: String) -> Self {
        ProtoMessage {
            name: name.to_string(),
            spec_index,
            unique_index,
            comments: vec![comment],
            fields: Vec::new(),
            oneofs: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn add_field(&mut self, field: ProtoField) {
        self.fields.push(field);
    }

    pub fn add_oneof(&mut self, oneof: ProtoOneof) {
        self.oneofs.push(oneof);
    }

    pub fn add_param(&mut self, param: ProtoParam) {
        self.params.push(param);
    }

    pub fn add_comment(&mut self, comment: String) {
        self.comments.push(comment);
    }
}

/// A message field. `type_name` is either a scalar keyword (emitted
/// verbatim) or a message/enum reference (PascalCased at render time);
/// the name is snake_cased at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtoField {
    pub name: String,
    pub type_name: String,
    pub repeated: bool,
    pub rules: Option<FieldRules>,
    /// Trailing same-line comment
    pub comment: Option<String>,
}

impl ProtoField {
    pub fn new(name: &str, type_name: &str) -> Self {
        ProtoField {
            name: name.to_string(),
            type_name: type_name.to_string(),
            repeated: false,
            rules: None,
            comment: None,
        }
    }
}

/// A `oneof` block. Field ordinals continue the parent message's
/// numbering.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtoOneof {
    pub name: String,
    pub comments: Vec<String>,
    pub fields: Vec<ProtoField>,
}

impl ProtoOneof {
    pub fn new(name: &str, comment: String) -> Self {
        ProtoOneof {
            name: name.to_string(),
            comments: vec![comment],
            fields: Vec::new(),
        }
    }

    pub fn add_field(&mut self, field: ProtoField) {
        self.fields.push(field);
    }
}

/// Formal parameter of a parameterized definition. Protobuf has no
/// generics, so these surface as comments only.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtoParam {
    pub name: String,
    pub kind: ParamKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Type,
    Value,
    ValueSet,
}

/// Validation rule attached to a field, kept structured until render.
/// Serializes as the payload of `[(validate.v1.rules).<payload>]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRules {
    pub scalar: RuleScalar,
    pub body: RuleBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScalar {
    Int32,
    Str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RuleBody {
    /// `<scalar>.const = <value>`
    Const(String),
    /// `<scalar> = {<expr>}`
    Block(String),
    /// `<scalar> = {in: [<expr>]}`
    InSet(String),
}

impl FieldRules {
    pub fn int32_const(value: i32) -> Self {
        FieldRules {
            scalar: RuleScalar::Int32,
            body: RuleBody::Const(value.to_string()),
        }
    }

    pub fn string_const(value: &str) -> Self {
        FieldRules {
            scalar: RuleScalar::Str,
            body: RuleBody::Const(format!("\"{}\"", value)),
        }
    }

    pub fn int32_block(expr: String) -> Self {
        FieldRules {
            scalar: RuleScalar::Int32,
            body: RuleBody::Block(expr),
        }
    }

    pub fn string_block(expr: String) -> Self {
        FieldRules {
            scalar: RuleScalar::Str,
            body: RuleBody::Block(expr),
        }
    }

    pub fn int32_in_set(expr: String) -> Self {
        FieldRules {
            scalar: RuleScalar::Int32,
            body: RuleBody::InSet(expr),
        }
    }
}

impl Display for RuleScalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RuleScalar::Int32 => write!(f, "int32"),
            RuleScalar::Str => write!(f, "string"),
        }
    }
}

impl Display for FieldRules {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.body {
            RuleBody::Const(value) => write!(f, "{}.const = {}", self.scalar, value),
            RuleBody::Block(expr) => write!(f, "{} = {{{}}}", self.scalar, expr),
            RuleBody::InSet(expr) => write!(f, "{} = {{in: [{}]}}", self.scalar, expr),
        }
    }
}
