// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! The central dispatcher: one top-level ASN.1 expression → IR emission
//!
//! Dispatch is a single match over (meta type, expression kind), first
//! match wins. Constructs Protobuf cannot express (CLASSDEF, non-integer
//! value sets) emit nothing; genuinely malformed input earns an error
//! comment in the output and is otherwise skipped.

use anyhow::{bail, Result};
use asn1_model::{Asn1Bundle, AsnExpr, AsnModule, AsnParam, AsnValue, ExprKind, MetaType};
use itertools::Itertools;

use super::constraint_compiler::compile_constraint;
use super::value_renderer::escape_quotes;
use super::{ioc_expander, member_translator, Domain};
use crate::data::enums::{ProtoEnum, ProtoEnumDef};
use crate::data::message::{FieldRules, ParamKind, ProtoField, ProtoMessage, ProtoOneof, ProtoParam};
use crate::data::ProtoModule;

pub fn translate_expr(
    bundle: &Asn1Bundle,
    module: &AsnModule,
    expr: &AsnExpr,
    out: &mut ProtoModule,
) -> Result<()> {
    // A parameterized template is never emitted itself; each
    // specialization clone is.
    if !expr.specializations.is_empty() {
        for specialization in &expr.specializations {
            translate_expr(bundle, module, specialization, out)?;
        }
        return Ok(());
    }

    let Some(ident) = expr.ident.as_deref() else {
        return Ok(());
    };

    if expr.kind == ExprKind::Enumerated {
        out.add_enum(translate_enumerated(module, expr, ident));
        return Ok(());
    }

    match (expr.meta, expr.kind) {
        (MetaType::Value, ExprKind::Integer) => {
            let Some(AsnValue::Integer(v)) = expr.value else {
                bail!("INTEGER value {} has no integer payload", ident);
            };
            let mut msg = message_for(module, expr, ident, "constant Integer");
            let mut field = ProtoField::new("value", "int32");
            field.rules = Some(FieldRules::int32_const(v as i32));
            msg.add_field(field);
            out.add_message(msg);
        }

        (MetaType::Value, ExprKind::Reference) => {
            translate_value_reference(module, expr, ident, out)
        }

        (MetaType::Value, kind) => {
            log::error!("{}: unhandled value of kind {:?}", ident, kind);
            bail!("unhandled value of kind {:?}", kind);
        }

        (MetaType::ValueSet, ExprKind::Integer) => {
            let mut msg = message_for(module, expr, ident, "range of Integer");
            let mut field = ProtoField::new("value", "int32");
            if let Some(ct) = &expr.constraints {
                field.rules = Some(FieldRules::int32_in_set(compile_constraint(
                    ct,
                    Domain::Int32,
                )));
            }
            msg.add_field(field);
            out.add_message(msg);
        }

        // No Protobuf analog for classes or non-integer value sets.
        (_, ExprKind::ClassDef) | (MetaType::ValueSet, _) => {}

        (MetaType::Type, ExprKind::Sequence | ExprKind::SequenceOf) => {
            let mut msg = message_for(module, expr, ident, "sequence");
            attach_params(&mut msg, expr);
            for field in
                member_translator::translate_members(expr, expr.kind == ExprKind::SequenceOf)
            {
                msg.add_field(field);
            }
            out.add_message(msg);
        }

        (MetaType::Type, ExprKind::Choice) => {
            let mut msg = message_for(module, expr, ident, "sequence");
            attach_params(&mut msg, expr);
            let mut oneof = ProtoOneof::new(
                ident,
                format!("choice from {}:{}", module.source_file_name, expr.lineno),
            );
            for field in member_translator::translate_members(expr, false) {
                oneof.add_field(field);
            }
            msg.add_oneof(oneof);
            out.add_message(msg);
        }

        (MetaType::Type, ExprKind::Integer) => {
            let mut msg = message_for(module, expr, ident, "range of Integer");
            attach_params(&mut msg, expr);
            let mut field = ProtoField::new("value", "int32");
            if let Some(ct) = &expr.constraints {
                field.rules = Some(FieldRules::int32_block(compile_constraint(
                    ct,
                    Domain::Int32,
                )));
            }
            msg.add_field(field);
            out.add_message(msg);
        }

        (MetaType::Type, ExprKind::Ia5String | ExprKind::BmpString) => {
            let mut msg = message_for(module, expr, ident, "range of Integer");
            attach_params(&mut msg, expr);
            let mut field = ProtoField::new("value", "string");
            if let Some(ct) = &expr.constraints {
                field.rules = Some(FieldRules::string_block(compile_constraint(
                    ct,
                    Domain::StringLen,
                )));
            }
            msg.add_field(field);
            out.add_message(msg);
        }

        (MetaType::Type, ExprKind::Boolean) => {
            let mut msg = message_for(module, expr, ident, "range of Integer");
            attach_params(&mut msg, expr);
            msg.add_field(ProtoField::new("value", "bool"));
            out.add_message(msg);
        }

        // Remaining basic types have no one-field message mapping.
        (MetaType::Type, _) => {}

        (MetaType::TypeRef, _) => {
            let mut msg = message_for(module, expr, ident, "reference");
            attach_params(&mut msg, expr);
            let mut field = ProtoField::new("value", "int32");
            if expr
                .reference
                .as_ref()
                .is_some_and(|r| !r.components.is_empty())
            {
                match bundle.resolve_terminal_type(module, expr) {
                    Some(terminal) => {
                        if let Some(terminal_ident) = terminal.ident.as_deref() {
                            field.type_name =
                                format!("{}{:03}", terminal_ident, terminal.unique_index);
                        }
                    }
                    None => log::warn!("{}: terminal type did not resolve", ident),
                }
            }
            msg.add_field(field);
            out.add_message(msg);
        }
    }

    Ok(())
}

fn translate_value_reference(
    module: &AsnModule,
    expr: &AsnExpr,
    ident: &str,
    out: &mut ProtoModule,
) {
    let reference_path = expr
        .reference
        .as_ref()
        .map(|r| r.components.iter().join("."))
        .unwrap_or_default();

    let reference_comment = (!reference_path.is_empty()).then_some(reference_path);

    match &expr.value {
        Some(AsnValue::Integer(v)) => {
            let mut msg = message_for(module, expr, ident, "reference");
            let mut field = ProtoField::new("value", "int32");
            field.comment = reference_comment;
            field.rules = Some(FieldRules::int32_const(*v as i32));
            msg.add_field(field);
            out.add_message(msg);
        }
        Some(AsnValue::Str(s)) => {
            let mut msg = message_for(module, expr, ident, "reference");
            let mut field = ProtoField::new("value", "string");
            field.comment = reference_comment;
            field.rules = Some(FieldRules::string_const(&escape_quotes(s)));
            msg.add_field(field);
            out.add_message(msg);
        }
        Some(AsnValue::Unparsed(_)) => {
            if let Some(table) = &expr.ioc_table {
                ioc_expander::expand_ioc_table(module, expr, table, out);
            }
        }
        other => {
            log::error!("{}: unhandled referenced value {:?}", ident, other);
            out.add_comment(format!("Error. Unhandled referenced value for {}", ident));
        }
    }
}

fn translate_enumerated(module: &AsnModule, expr: &AsnExpr, ident: &str) -> ProtoEnum {
    let mut protoenum = ProtoEnum::new(
        ident,
        format!("enumerated from {}:{}", module.source_file_name, expr.lineno),
    );
    for member in &expr.members {
        if member.kind != ExprKind::UniversalValue {
            continue;
        }
        let index = member
            .value
            .as_ref()
            .and_then(AsnValue::as_integer)
            .filter(|v| *v >= 0)
            .map(|v| v as i32);
        protoenum.add_def(ProtoEnumDef::new(
            member.ident.as_deref().unwrap_or_default(),
            index,
        ));
    }
    protoenum
}

fn message_for(module: &AsnModule, expr: &AsnExpr, ident: &str, what: &str) -> ProtoMessage {
    ProtoMessage::new(
        ident,
        expr.spec_index,
        expr.unique_index,
        format!("{} from {}:{}", what, module.source_file_name, expr.lineno),
    )
}

/// Protobuf has no generics: formal parameters surface as comment lines
/// and ProtoParam records only.
fn attach_params(msg: &mut ProtoMessage, expr: &AsnExpr) {
    for param in &expr.params {
        msg.add_param(ProtoParam {
            name: param.argument.clone(),
            kind: param_kind(param),
        });
        msg.add_comment(format!("Param {}:{}", param.governor, param.argument));
    }
}

fn param_kind(param: &AsnParam) -> ParamKind {
    if param.governor.is_empty() {
        ParamKind::Type
    } else if param
        .argument
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase())
    {
        ParamKind::Value
    } else {
        ParamKind::ValueSet
    }
}
