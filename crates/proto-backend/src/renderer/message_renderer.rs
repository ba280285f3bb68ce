// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Renders message IR to proto3 `message` and `oneof` blocks

use std::io;

use proto_ir::{is_proto_scalar, to_lower_snake_case, to_pascal_case, ProtoField, ProtoMessage};

use crate::writer::ProtoWriter;

pub(crate) fn render_message(message: &ProtoMessage, w: &mut ProtoWriter) -> io::Result<()> {
    for line in &message.comments {
        w.write(&format!("// {}\n", line))?;
    }
    w.write(&format!("message {} {{\n", to_pascal_case(&message.name)))?;
    w.indent();

    // Ordinals are 1-based in insertion order and continue through oneofs.
    let mut ordinal = 1u32;
    render_fields(&message.fields, &mut ordinal, w)?;

    for oneof in &message.oneofs {
        for line in &oneof.comments {
            w.line(&format!("// {}", line))?;
        }
        w.line(&format!("oneof {} {{", to_lower_snake_case(&oneof.name)))?;
        w.indent();
        render_fields(&oneof.fields, &mut ordinal, w)?;
        w.dedent();
        w.line("}")?;
    }

    w.dedent();
    w.write("};\n\n")
}

fn render_fields(fields: &[ProtoField], ordinal: &mut u32, w: &mut ProtoWriter) -> io::Result<()> {
    for field in fields {
        let mut line = String::new();
        if field.repeated {
            line.push_str("repeated ");
        }
        let type_name = if is_proto_scalar(&field.type_name) {
            field.type_name.clone()
        } else {
            to_pascal_case(&field.type_name)
        };
        line.push_str(&format!(
            "{} {} = {}",
            type_name,
            to_lower_snake_case(&field.name),
            ordinal
        ));
        *ordinal += 1;
        if let Some(rules) = &field.rules {
            line.push_str(&format!(" [(validate.v1.rules).{}]", rules));
        }
        line.push(';');
        if let Some(comment) = &field.comment {
            line.push_str(&format!(" // {}", comment));
        }
        w.line(&line)?;
    }
    Ok(())
}
