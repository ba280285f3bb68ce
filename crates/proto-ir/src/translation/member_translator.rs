// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Field synthesis for SEQUENCE and CHOICE member lists

use asn1_model::{AsnExpr, ExprKind, MetaType};

use super::constraint_compiler::compile_constraint;
use super::Domain;
use crate::data::message::{FieldRules, ProtoField};

/// Translate the members of a constructed type into fields, in
/// declaration order. `repeated` marks every field (SEQUENCE OF parent);
/// enum values and extension markers produce no field.
pub(crate) fn translate_members(expr: &AsnExpr, repeated: bool) -> Vec<ProtoField> {
    let mut fields = Vec::new();
    for member in &expr.members {
        match member.kind {
            ExprKind::UniversalValue => continue,
            ExprKind::Extensible => {
                log::debug!(
                    "extension marker in {} has no field",
                    expr.ident.as_deref().unwrap_or("<anonymous>")
                );
                continue;
            }
            _ => {}
        }

        let mut field = ProtoField::new(member.ident.as_deref().unwrap_or_default(), "int32");
        field.repeated = repeated;

        match member.kind {
            ExprKind::BitString => field.type_name = "BitString".to_string(),
            ExprKind::ObjectIdentifier => field.type_name = "BasicOid".to_string(),
            ExprKind::Boolean => field.type_name = "bool".to_string(),
            ExprKind::Utf8String | ExprKind::TeletexString => {
                field.type_name = "string".to_string();
                if let Some(ct) = &member.constraints {
                    field.rules = Some(FieldRules::string_block(compile_constraint(
                        ct,
                        Domain::StringLen,
                    )));
                }
            }
            ExprKind::SequenceOf if member.meta == MetaType::Type => {
                field.repeated = true;
                // The inner element type gives the field its name.
                if let Some(inner) = member.members.first() {
                    if inner.kind == ExprKind::Reference && inner.meta == MetaType::TypeRef {
                        if let Some(reference) = &inner.reference {
                            if let [single] = reference.components.as_slice() {
                                field.type_name = single.clone();
                            }
                        }
                    }
                }
            }
            ExprKind::Reference if member.meta == MetaType::TypeRef => {
                if let Some(reference) = &member.reference {
                    match reference.components.as_slice() {
                        [single] => field.type_name = single.clone(),
                        [_, second] => field.type_name = second.clone(),
                        _ => {}
                    }
                }
            }
            _ => {}
        }

        fields.push(field);
    }
    fields
}
