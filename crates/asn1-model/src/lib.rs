// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! ASN.1 abstract syntax tree — the input contract of the generator
//!
//! The lexer/parser/fixer front end is an external collaborator; it hands
//! over a fully elaborated tree matching these types (typically serialized
//! as JSON). Nothing in this crate parses ASN.1 source text.

pub mod constraint;
pub mod expr;
pub mod module;
pub mod oid;
pub mod value;

pub use constraint::{Constraint, ConstraintKind, Presence};
pub use expr::{AsnExpr, AsnParam, AsnReference, ExprKind, IocCell, IocRow, IocTable, MetaType};
pub use module::{Asn1Bundle, AsnImport, AsnModule};
pub use oid::{Oid, OidArc};
pub use value::AsnValue;
