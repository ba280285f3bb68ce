// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Renders a whole ProtoModule: header, package, imports, entities

use std::io;

use asn1_model::Oid;
use proto_ir::{to_lower_snake_case, ProtoModule};

use super::enum_renderer::render_enum;
use super::message_renderer::render_message;
use crate::writer::ProtoWriter;

/// Render a module, borrowing the IR. Rendering twice yields identical
/// bytes.
pub fn render_module(module: &ProtoModule, w: &mut ProtoWriter) -> io::Result<()> {
    render_header(module, w)?;
    for protoenum in &module.enums {
        render_enum(protoenum, w)?;
    }
    for message in &module.messages {
        render_message(message, w)?;
    }
    Ok(())
}

/// Destructive render: consumes the IR, dropping each node right after
/// emission to bound peak memory on large schemas.
pub fn render_module_consuming(module: ProtoModule, w: &mut ProtoWriter) -> io::Result<()> {
    render_header(&module, w)?;
    let ProtoModule {
        enums, messages, ..
    } = module;
    for protoenum in enums {
        render_enum(&protoenum, w)?;
    }
    for message in messages {
        render_message(&message, w)?;
    }
    Ok(())
}

fn render_header(module: &ProtoModule, w: &mut ProtoWriter) -> io::Result<()> {
    for line in &module.comments {
        w.write(&format!("// {}\n", line))?;
    }
    w.write(&format!(
        "////////////////////// {}.proto //////////////////////\n",
        module.name.to_ascii_lowercase()
    ))?;

    // Only the file name tail is traceable; the path prefix is the
    // invoking machine's business.
    let src_tail = match module.src_filename.rfind('/') {
        Some(pos) => module.src_filename[pos..].to_string(),
        None => format!("/{}", module.src_filename),
    };
    w.write(&format!(
        "// Protobuf generated from {} by {}\n",
        src_tail,
        w.options().tool_version
    ))?;

    w.write(&format!("// {}", module.name))?;
    if let Some(oid) = &module.oid {
        w.write(&render_oid(oid))?;
    }
    w.write("\n")?;

    w.write("\nsyntax = \"proto3\";\n\n")?;

    let package = package_name(&module.src_filename);
    w.write(&format!("package {}.v1;\n\n", package))?;

    for import in &module.imports {
        w.write(&format!(
            "import \"{}/v1/{}.proto\";",
            package,
            import.path.to_ascii_lowercase()
        ))?;
        if let Some(oid) = &import.oid {
            w.write(" //")?;
            w.write(&render_oid(oid))?;
        }
        w.write("\n")?;
    }
    w.write("import \"validate/v1/validate.proto\";\n\n")?;
    Ok(())
}

/// Package component derived from the source file name: snake_cased,
/// directories stripped, prefixed with `pkg` when it does not start with
/// a lowercase letter.
pub(crate) fn package_name(src_filename: &str) -> String {
    let snake = to_lower_snake_case(src_filename);
    let tail = match snake.rfind('/') {
        Some(pos) => &snake[pos + 1..],
        None => snake.as_str(),
    };
    if tail.chars().next().is_some_and(|c| c.is_ascii_lowercase()) {
        tail.to_string()
    } else {
        format!("pkg{}", tail)
    }
}

fn render_oid(oid: &Oid) -> String {
    let mut out = String::from(" {");
    for arc in &oid.arcs {
        out.push(' ');
        match (&arc.name, arc.number) {
            (Some(name), Some(number)) => {
                out.push_str(name);
                out.push_str(&format!("({})", number));
            }
            (Some(name), None) => out.push_str(name),
            (None, Some(number)) => out.push_str(&number.to_string()),
            (None, None) => {}
        }
    }
    out.push_str(" }");
    out
}
