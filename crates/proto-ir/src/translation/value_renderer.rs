// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Short text forms of ASN.1 literal values, for embedding in rule
//! expressions and traceability comments

use asn1_model::AsnValue;
use itertools::Itertools;

use super::Domain;

/// Render a value. `MAX` only has a concrete rendering in the 32-bit
/// integer domain; elsewhere it (like `NOVALUE`) renders empty.
pub fn render_value(value: &AsnValue, domain: Domain) -> String {
    match value {
        AsnValue::NoValue => String::new(),
        AsnValue::Null => "NULL".to_string(),
        AsnValue::True => "TRUE".to_string(),
        AsnValue::False => "FALSE".to_string(),
        AsnValue::Integer(v) => v.to_string(),
        AsnValue::Real(v) => format!("{:.6}", v),
        AsnValue::Min => "0".to_string(),
        AsnValue::Max => match domain {
            Domain::Int32 => i32::MAX.to_string(),
            Domain::StringLen => String::new(),
        },
        AsnValue::Str(s) => format!("\"{}\"", escape_quotes(s)),
        AsnValue::BitVector { bits, size_in_bits } => render_bitvector(bits, *size_in_bits),
        AsnValue::Tuple(v) => format!("{{{}, {}}}", v >> 4, v & 0x0f),
        AsnValue::Quadruple(v) => format!(
            "{{{}, {}, {}, {}}}",
            (v >> 24) & 0xff,
            (v >> 16) & 0xff,
            (v >> 8) & 0xff,
            v & 0xff
        ),
        AsnValue::Referenced(reference) => reference.components.iter().join("."),
        AsnValue::ChoiceIdentifier { ident, value } => {
            format!("{}{}", ident, render_value(value, domain))
        }
        AsnValue::Unparsed(raw) => raw.clone(),
    }
}

/// Escape every `"` as `\"`; all other characters pass through.
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}

// Whole bytes render as hex 'AB'H, a ragged tail forces binary '101'B.
fn render_bitvector(bits: &[u8], size_in_bits: usize) -> String {
    let mut out = String::from("'");
    if size_in_bits % 8 != 0 {
        for i in 0..size_in_bits {
            let byte = bits[i >> 3];
            out.push(if (byte >> (7 - (i % 8))) & 1 == 1 {
                '1'
            } else {
                '0'
            });
        }
        out.push_str("'B");
    } else {
        const HEX: &[u8; 16] = b"0123456789ABCDEF";
        for &byte in &bits[..size_in_bits >> 3] {
            out.push(HEX[(byte >> 4) as usize] as char);
            out.push(HEX[(byte & 0x0f) as usize] as char);
        }
        out.push_str("'H");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use asn1_model::AsnReference;

    #[test]
    fn integers_and_booleans() {
        assert_eq!(render_value(&AsnValue::Integer(-3), Domain::Int32), "-3");
        assert_eq!(render_value(&AsnValue::True, Domain::Int32), "TRUE");
        assert_eq!(render_value(&AsnValue::False, Domain::Int32), "FALSE");
        assert_eq!(render_value(&AsnValue::Null, Domain::Int32), "NULL");
    }

    #[test]
    fn real_uses_six_fraction_digits() {
        assert_eq!(render_value(&AsnValue::Real(1.5), Domain::Int32), "1.500000");
    }

    #[test]
    fn min_max_depend_on_domain() {
        assert_eq!(render_value(&AsnValue::Min, Domain::Int32), "0");
        assert_eq!(render_value(&AsnValue::Min, Domain::StringLen), "0");
        assert_eq!(render_value(&AsnValue::Max, Domain::Int32), "2147483647");
        assert_eq!(render_value(&AsnValue::Max, Domain::StringLen), "");
    }

    #[test]
    fn strings_escape_every_quote() {
        assert_eq!(
            render_value(&AsnValue::Str("say \"hi\"".to_string()), Domain::Int32),
            "\"say \\\"hi\\\"\""
        );
        assert_eq!(
            render_value(&AsnValue::Str("plain".to_string()), Domain::Int32),
            "\"plain\""
        );
    }

    #[test]
    fn bitvector_whole_bytes_render_hex() {
        let value = AsnValue::BitVector {
            bits: vec![0xAB, 0x01],
            size_in_bits: 16,
        };
        assert_eq!(render_value(&value, Domain::Int32), "'AB01'H");
    }

    #[test]
    fn bitvector_ragged_tail_renders_binary() {
        let value = AsnValue::BitVector {
            bits: vec![0b1010_0000],
            size_in_bits: 3,
        };
        assert_eq!(render_value(&value, Domain::Int32), "'101'B");
    }

    #[test]
    fn tuple_and_quadruple_split_bytes() {
        assert_eq!(render_value(&AsnValue::Tuple(0x4F), Domain::Int32), "{4, 15}");
        assert_eq!(
            render_value(&AsnValue::Quadruple(0x01020304), Domain::Int32),
            "{1, 2, 3, 4}"
        );
    }

    #[test]
    fn referenced_joins_components() {
        let value = AsnValue::Referenced(AsnReference::new(vec!["Module", "value"]));
        assert_eq!(render_value(&value, Domain::Int32), "Module.value");
    }

    #[test]
    fn choice_identifier_concatenates() {
        let value = AsnValue::ChoiceIdentifier {
            ident: "ok".to_string(),
            value: Box::new(AsnValue::Integer(4)),
        };
        assert_eq!(render_value(&value, Domain::Int32), "ok4");
    }
}
