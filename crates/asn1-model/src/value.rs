// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! ASN.1 literal values as delivered by the parser

use serde::{Deserialize, Serialize};

use crate::expr::AsnReference;

/// A parsed ASN.1 value. Only the kinds the generator consumes are
/// modeled; the parser guarantees the payload matches the declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AsnValue {
    /// Placeholder produced by the parser for value-less slots
    NoValue,
    Null,
    True,
    False,
    Integer(i64),
    Real(f64),
    /// `MIN` in a range bound
    Min,
    /// `MAX` in a range bound
    Max,
    Str(String),
    /// Bit string literal; `size_in_bits` may be shorter than `bits` * 8
    BitVector {
        bits: Vec<u8>,
        size_in_bits: usize,
    },
    /// `{hi, lo}` character tuple packed into one integer
    Tuple(i64),
    /// `{a, b, c, d}` character quadruple packed into one integer
    Quadruple(i64),
    /// A reference to another value, by component path
    Referenced(AsnReference),
    /// CHOICE value: selected alternative plus its value
    ChoiceIdentifier {
        ident: String,
        value: Box<AsnValue>,
    },
    /// Raw source text the parser did not interpret
    Unparsed(String),
}

impl AsnValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AsnValue::Integer(v) => Some(*v),
            _ => None,
        }
    }
}
