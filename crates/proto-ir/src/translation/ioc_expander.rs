// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Expands an information-object-class table into one message
//!
//! Each table cell that introduces a new referencable definition becomes
//! a field named `<classField>-<cellValue>`; integer-valued cells pin the
//! value with a const rule.

use asn1_model::{AsnExpr, AsnModule, AsnValue, IocTable};

use crate::data::message::{FieldRules, ProtoField, ProtoMessage};
use crate::data::ProtoModule;

pub(crate) fn expand_ioc_table(
    module: &AsnModule,
    expr: &AsnExpr,
    table: &IocTable,
    out: &mut ProtoModule,
) {
    let mut comment = String::from("concrete instance of class ");
    if let Some(reference) = &expr.reference {
        if let Some(class_name) = reference.components.first() {
            comment.push_str(class_name);
        }
    }
    comment.push_str(&format!(
        " from {}:{}",
        module.source_file_name, expr.lineno
    ));

    let mut msg = ProtoMessage::new(
        expr.ident.as_deref().unwrap_or_default(),
        expr.spec_index,
        expr.unique_index,
        comment,
    );

    for row in &table.rows {
        for cell in &row.cells {
            if !cell.new_ref {
                continue;
            }
            let name = format!("{}-{}", cell.field, cell.value_ident);
            let mut field = ProtoField::new(&name, "int32");
            match (&cell.value, cell.value_ident.as_str()) {
                (Some(AsnValue::Integer(v)), _) => {
                    field.rules = Some(FieldRules::int32_const(*v as i32));
                }
                (_, "INTEGER") => {}
                (_, "REAL") => field.type_name = "float".to_string(),
                (_, other) => field.type_name = other.to_string(),
            }
            msg.add_field(field);
        }
    }

    out.add_message(msg);
}
