// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! End-to-end generation: elaborated tree in, proto3 text out.

use asn1_model::{
    Asn1Bundle, AsnExpr, AsnImport, AsnModule, AsnValue, Constraint, ExprKind, MetaType, Oid,
    OidArc,
};
use proto_backend::{render_module, render_module_consuming, Options, OutputSink, ProtoWriter};
use proto_ir::Translator;

fn univ(name: &str, value: Option<i64>, lineno: u32) -> AsnExpr {
    AsnExpr {
        value: value.map(AsnValue::Integer),
        lineno,
        ..AsnExpr::named(name, MetaType::Value, ExprKind::UniversalValue)
    }
}

fn sample_module() -> AsnModule {
    let my_enum = AsnExpr {
        members: vec![
            univ("first-value", Some(0), 1),
            univ("second-value", None, 1),
            univ("third-value", Some(5), 1),
        ],
        lineno: 1,
        ..AsnExpr::named("MyEnum", MetaType::Type, ExprKind::Enumerated)
    };

    let age = AsnExpr {
        constraints: Some(Constraint::range(
            AsnValue::Integer(0),
            AsnValue::Integer(150),
        )),
        lineno: 2,
        ..AsnExpr::named("Age", MetaType::Type, ExprKind::Integer)
    };

    let point = AsnExpr {
        members: vec![
            AsnExpr::named("x", MetaType::Type, ExprKind::Integer),
            AsnExpr {
                constraints: Some(Constraint::size(Constraint::range(
                    AsnValue::Integer(1),
                    AsnValue::Integer(10),
                ))),
                ..AsnExpr::named("label", MetaType::Type, ExprKind::Utf8String)
            },
        ],
        lineno: 3,
        ..AsnExpr::named("Point", MetaType::Type, ExprKind::Sequence)
    };

    let result = AsnExpr {
        members: vec![
            AsnExpr::named("ok", MetaType::Type, ExprKind::Integer),
            AsnExpr::named("err", MetaType::Type, ExprKind::Utf8String),
        ],
        lineno: 4,
        ..AsnExpr::named("Result", MetaType::Type, ExprKind::Choice)
    };

    let names = AsnExpr {
        members: vec![AsnExpr::named("name", MetaType::Type, ExprKind::Utf8String)],
        lineno: 5,
        ..AsnExpr::named("Names", MetaType::Type, ExprKind::SequenceOf)
    };

    let max_retries = AsnExpr {
        value: Some(AsnValue::Integer(7)),
        lineno: 6,
        ..AsnExpr::named("maxRetries", MetaType::Value, ExprKind::Integer)
    };

    AsnModule {
        name: "SampleModule".to_string(),
        source_file_name: "sample.asn1".to_string(),
        oid: Some(Oid {
            arcs: vec![OidArc::named("iso", 1), OidArc::named("org", 3)],
        }),
        imports: vec![AsnImport {
            module_name: "OtherModule".to_string(),
            oid: Some(Oid {
                arcs: vec![OidArc::named("iso", 1)],
            }),
        }],
        members: vec![my_enum, age, point, result, names, max_retries],
    }
}

fn generate(options: &Options) -> String {
    let bundle = Asn1Bundle::new(vec![sample_module()]);
    let translator = Translator::new(&bundle);
    let proto = translator.translate_module(&bundle.modules[0]);

    let mut sink = OutputSink::buffer();
    let mut writer = ProtoWriter::new(&mut sink, options);
    render_module(&proto, &mut writer).unwrap();
    sink.into_string()
}

const EXPECTED: &str = "\
////////////////////// samplemodule.proto //////////////////////
// Protobuf generated from /sample.asn1 by asn1-protogen-0.1.0
// SampleModule { iso(1) org(3) }

syntax = \"proto3\";

package sample_asn1.v1;

import \"sample_asn1/v1/othermodule.proto\"; // { iso(1) }
import \"validate/v1/validate.proto\";

// enumerated from sample.asn1:1
enum MyEnum {
    MY_ENUM_FIRST_VALUE = 0;
    MY_ENUM_SECOND_VALUE = 0;
    MY_ENUM_THIRD_VALUE = 5;
};

// range of Integer from sample.asn1:2
message Age {
    int32 value = 1 [(validate.v1.rules).int32 = {gte: 0, lte: 150}];
};

// sequence from sample.asn1:3
message Point {
    int32 x = 1;
    string label = 2 [(validate.v1.rules).string = {min_len: 1, max_len: 10}];
};

// sequence from sample.asn1:4
message Result {
    // choice from sample.asn1:4
    oneof result {
        int32 ok = 1;
        string err = 2;
    }
};

// sequence from sample.asn1:5
message Names {
    repeated string name = 1;
};

// constant Integer from sample.asn1:6
message MaxRetries {
    int32 value = 1 [(validate.v1.rules).int32.const = 7];
};

";

#[test]
fn generates_the_full_module_skeleton() {
    let options = Options {
        tool_version: "asn1-protogen-0.1.0".to_string(),
        ..Options::default()
    };
    assert_eq!(generate(&options), EXPECTED);
}

#[test]
fn rendering_twice_is_byte_identical() {
    let options = Options::default();
    assert_eq!(generate(&options), generate(&options));
}

#[test]
fn consuming_render_matches_borrowing_render() {
    let options = Options::default();
    let bundle = Asn1Bundle::new(vec![sample_module()]);
    let translator = Translator::new(&bundle);
    let proto = translator.translate_module(&bundle.modules[0]);

    let mut borrowed_sink = OutputSink::buffer();
    let mut writer = ProtoWriter::new(&mut borrowed_sink, &options);
    render_module(&proto, &mut writer).unwrap();

    let mut consumed_sink = OutputSink::buffer();
    let mut writer = ProtoWriter::new(&mut consumed_sink, &options);
    render_module_consuming(proto, &mut writer).unwrap();

    assert_eq!(borrowed_sink.into_string(), consumed_sink.into_string());
}

#[test]
fn no_indent_strips_field_indentation() {
    let options = Options {
        no_indent: true,
        ..Options::default()
    };
    let output = generate(&options);
    assert!(output.contains("\nint32 x = 1;\n"));
    assert!(!output.contains("    int32 x"));
}

#[test]
fn validate_import_is_always_last() {
    let output = generate(&Options::default());
    let imports: Vec<&str> = output
        .lines()
        .filter(|l| l.starts_with("import "))
        .collect();
    assert_eq!(imports.last().copied(), Some("import \"validate/v1/validate.proto\";"));
}

#[test]
fn bundle_round_trips_through_json() {
    let bundle = Asn1Bundle::new(vec![sample_module()]);
    let json = serde_json::to_string(&bundle).unwrap();
    let restored: Asn1Bundle = serde_json::from_str(&json).unwrap();
    assert_eq!(bundle, restored);

    let translator = Translator::new(&restored);
    let proto = translator.translate_module(&restored.modules[0]);
    assert_eq!(proto.messages.len(), 5);
    assert_eq!(proto.enums.len(), 1);
}
