// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Renders enum IR to proto3 `enum` blocks

use std::collections::HashSet;
use std::io;

use proto_ir::{to_pascal_case, to_screaming_snake_case, ProtoEnum};

use crate::writer::ProtoWriter;

/// Running counter for members without an explicit value. Explicit
/// indices do not advance the counter, so a later auto-assigned member
/// can collide with an earlier explicit value; the collision is kept and
/// warned about.
pub(crate) struct AutoIndexer {
    next: i32,
}

impl AutoIndexer {
    pub(crate) fn new() -> Self {
        AutoIndexer { next: 0 }
    }

    pub(crate) fn assign(&mut self) -> i32 {
        let value = self.next;
        self.next += 1;
        value
    }
}

pub(crate) fn render_enum(protoenum: &ProtoEnum, w: &mut ProtoWriter) -> io::Result<()> {
    for line in &protoenum.comments {
        w.write(&format!("// {}\n", line))?;
    }
    w.write(&format!("enum {} {{\n", to_pascal_case(&protoenum.name)))?;
    w.indent();

    let name_uc = to_screaming_snake_case(&protoenum.name);
    let mut used = HashSet::new();

    // proto3 requires a zero member; synthesize one when absent.
    if !protoenum.defs.iter().any(|def| def.index == Some(0)) {
        w.line(&format!("{}_UNDEFINED = 0; // auto generated", name_uc))?;
        used.insert(0);
    }

    let mut auto = AutoIndexer::new();
    for def in &protoenum.defs {
        let value = def.index.unwrap_or_else(|| auto.assign());
        if !used.insert(value) {
            log::warn!(
                "enum {}: duplicate value {} assigned to {}",
                protoenum.name,
                value,
                def.name
            );
        }
        w.line(&format!(
            "{}_{} = {};",
            name_uc,
            to_screaming_snake_case(&def.name),
            value
        ))?;
    }

    w.dedent();
    w.write("};\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::sink::OutputSink;
    use proto_ir::ProtoEnumDef;

    fn render(protoenum: &ProtoEnum) -> String {
        let options = Options::default();
        let mut sink = OutputSink::buffer();
        let mut writer = ProtoWriter::new(&mut sink, &options);
        render_enum(protoenum, &mut writer).unwrap();
        sink.into_string()
    }

    #[test]
    fn auto_counter_does_not_skip_explicit_indices() {
        let mut protoenum = ProtoEnum::new("MyEnum", "enumerated from sample.asn1:1".to_string());
        protoenum.add_def(ProtoEnumDef::new("first-value", Some(0)));
        protoenum.add_def(ProtoEnumDef::new("second-value", None));
        protoenum.add_def(ProtoEnumDef::new("third-value", Some(5)));

        assert_eq!(
            render(&protoenum),
            "// enumerated from sample.asn1:1\n\
             enum MyEnum {\n\
             \x20   MY_ENUM_FIRST_VALUE = 0;\n\
             \x20   MY_ENUM_SECOND_VALUE = 0;\n\
             \x20   MY_ENUM_THIRD_VALUE = 5;\n\
             };\n\n"
        );
    }

    #[test]
    fn missing_zero_member_is_synthesized() {
        let mut protoenum = ProtoEnum::new("Cause", "enumerated from sample.asn1:9".to_string());
        protoenum.add_def(ProtoEnumDef::new("misc", Some(1)));

        let output = render(&protoenum);
        assert!(output.contains("CAUSE_UNDEFINED = 0; // auto generated"));
        assert!(output.contains("CAUSE_MISC = 1;"));
    }

    #[test]
    fn every_enum_has_exactly_one_zero_with_distinct_indices() {
        let mut protoenum = ProtoEnum::new("Kind", "enumerated from sample.asn1:2".to_string());
        protoenum.add_def(ProtoEnumDef::new("a", Some(0)));
        protoenum.add_def(ProtoEnumDef::new("b", Some(1)));

        let output = render(&protoenum);
        assert_eq!(output.matches("= 0;").count(), 1);
        assert!(!output.contains("UNDEFINED"));
    }
}
