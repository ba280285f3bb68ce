// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! ASN.1 subtype constraint trees
//!
//! A constraint is a recursive sum: elementary constraints (single value,
//! range), containers (SIZE, FROM, WITH COMPONENTS) and set algebra
//! (union, intersection, complement). The parser delivers an already
//! elaborated tree; the generator only folds it into rule expressions.

use serde::{Deserialize, Serialize};

use crate::value::AsnValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintKind {
    /// Single value, e.g. `(5)`
    Value,
    /// Contained subtype, e.g. `(INCLUDES Other)`
    ContainedSubtype,
    /// Value range; open bounds exclude the endpoint
    Range { left_open: bool, right_open: bool },
    /// Extension marker `...`
    Extension,
    /// `SIZE(inner)`
    Size,
    /// Permitted alphabet `FROM(inner)`
    From,
    /// `WITH COMPONENT inner`
    WithComponent,
    /// `WITH COMPONENTS { ... }`
    WithComponents,
    /// `CONSTRAINED BY { ... }` with unparsed payload
    ConstrainedBy,
    /// `CONTAINING Type`
    Containing,
    /// `PATTERN value`
    Pattern,
    Union,
    Intersection,
    /// `A EXCEPT B`
    Except,
    /// `ALL EXCEPT inner`
    AllExcept,
}

/// Presence qualifier on a WITH COMPONENTS entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Presence {
    #[default]
    None,
    Present,
    Absent,
    Optional,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraint {
    pub kind: ConstraintKind,
    /// Payload for Value/ContainedSubtype/ConstrainedBy/Pattern
    pub value: Option<AsnValue>,
    pub range_start: Option<AsnValue>,
    pub range_stop: Option<AsnValue>,
    /// Referenced type name for `CONTAINING`
    pub containing: Option<String>,
    /// Child constraints; also carries the appended subconstraint of an
    /// elementary constraint (e.g. `INTEGER (0..7) (2..5)`)
    pub elements: Vec<Constraint>,
    pub presence: Presence,
}

impl Default for Constraint {
    fn default() -> Self {
        Constraint {
            kind: ConstraintKind::Extension,
            value: None,
            range_start: None,
            range_stop: None,
            containing: None,
            elements: Vec::new(),
            presence: Presence::None,
        }
    }
}

impl Constraint {
    pub fn value(v: AsnValue) -> Self {
        Constraint {
            kind: ConstraintKind::Value,
            value: Some(v),
            ..Constraint::default()
        }
    }

    /// Closed range `(start..stop)`.
    pub fn range(start: AsnValue, stop: AsnValue) -> Self {
        Constraint::range_open(start, stop, false, false)
    }

    pub fn range_open(start: AsnValue, stop: AsnValue, left_open: bool, right_open: bool) -> Self {
        Constraint {
            kind: ConstraintKind::Range {
                left_open,
                right_open,
            },
            range_start: Some(start),
            range_stop: Some(stop),
            ..Constraint::default()
        }
    }

    pub fn size(inner: Constraint) -> Self {
        Constraint {
            kind: ConstraintKind::Size,
            elements: vec![inner],
            ..Constraint::default()
        }
    }

    pub fn set_of(kind: ConstraintKind, elements: Vec<Constraint>) -> Self {
        Constraint {
            kind,
            elements,
            ..Constraint::default()
        }
    }
}
