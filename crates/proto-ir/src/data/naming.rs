// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Identifier casing for Protobuf output
//!
//! ASN.1 identifiers mix kebab-case, `&field` references and mid-word
//! capitals; Protobuf wants PascalCase type names, snake_case field names
//! and SCREAMING_SNAKE_CASE enum constants. All three transformers are
//! pure, walk the input byte-wise, and pass non-ASCII bytes through
//! unchanged.

/// Scalar type keywords that must be emitted verbatim, never re-cased.
pub const PROTO_SCALARS: &[&str] = &[
    "bool", "int32", "int64", "uint32", "uint64", "float", "double", "string", "bytes",
];

pub fn is_proto_scalar(name: &str) -> bool {
    PROTO_SCALARS.contains(&name)
}

/// `PDU-ID` → `PduId`, `my_field` → `MyField`.
///
/// Separators `-`, `&`, `_` are dropped and the following character is
/// uppercased; an uppercase run after an uppercase character is folded to
/// lowercase so all-caps words collapse.
pub fn to_pascal_case(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() * 2 + 1);
    let mut last_was_upper = false;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'-' || b == b'&' || b == b'_' {
            if i + 1 < bytes.len() {
                out.push(bytes[i + 1].to_ascii_uppercase());
            }
            i += 2;
            last_was_upper = true;
            continue;
        } else if i == 0 {
            out.push(b.to_ascii_uppercase());
            last_was_upper = true;
        } else if b.is_ascii_uppercase() && last_was_upper {
            out.push(b.to_ascii_lowercase());
        } else if b.is_ascii_uppercase() {
            out.push(b);
            last_was_upper = true;
        } else {
            out.push(b);
            last_was_upper = false;
        }
        i += 1;
    }
    ascii_rewritten(out)
}

/// `myField` → `my_field`, `URI-Path` → `uri_path`,
/// `&ObjectSetRef` → `object_set_ref`.
pub fn to_lower_snake_case(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() * 2 + 1);
    let mut last_changed = false;
    for (i, &b) in bytes.iter().enumerate() {
        if i == 0 && b == b'&' {
            last_changed = true;
        } else if i > 0 && b.is_ascii_uppercase() && !last_changed {
            out.push(b'_');
            out.push(b.to_ascii_lowercase());
            last_changed = true;
        } else if b.is_ascii_uppercase() {
            out.push(b.to_ascii_lowercase());
            last_changed = true;
        } else if b == b'-' || b == b'.' {
            out.push(b'_');
            last_changed = true;
        } else {
            out.push(b);
            last_changed = false;
        }
    }
    ascii_rewritten(out)
}

/// `myEnumVal` → `MY_ENUM_VAL`, `first-value` → `FIRST_VALUE`.
pub fn to_screaming_snake_case(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() * 2 + 1);
    for (i, &b) in bytes.iter().enumerate() {
        if i == 0 && b == b'&' {
            continue;
        } else if b == b'-' || b == b'.' {
            out.push(b'_');
        } else if b.is_ascii_lowercase() {
            out.push(b.to_ascii_uppercase());
        } else if i > 0 && b.is_ascii_uppercase() && bytes[i - 1].is_ascii_alphabetic() {
            out.push(b'_');
            out.push(b);
        } else {
            out.push(b);
        }
    }
    ascii_rewritten(out)
}

// Only ASCII bytes are rewritten, so the result is still valid UTF-8.
fn ascii_rewritten(out: Vec<u8>) -> String {
    String::from_utf8(out).expect("BUG: ASCII-only rewrite broke UTF-8")
}
