// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Folds an ASN.1 constraint tree into a rule expression string
//!
//! The result is the payload between the braces of a
//! `[(validate.v1.rules).<scalar> = { ... }]` option. Constructs with no
//! validate analog (FROM, WITH COMPONENTS, CONSTRAINED BY, PATTERN)
//! degrade to a textual approximation.

use asn1_model::{AsnValue, Constraint, ConstraintKind};
use itertools::Itertools;

use super::value_renderer::render_value;
use super::Domain;

/// Compile a constraint under the given value domain. String-length
/// ranges are always inclusive: strict bounds collapse to
/// `min_len`/`max_len`.
pub fn compile_constraint(ct: &Constraint, domain: Domain) -> String {
    let mut result = String::new();
    // An elementary constraint may carry an appended subconstraint,
    // joined by a single space.
    let mut with_subconstraint = false;

    match ct.kind {
        ConstraintKind::ContainedSubtype => {
            result.push_str(&optional_value(ct.value.as_ref(), domain));
            with_subconstraint = true;
        }
        ConstraintKind::Value => {
            let value = optional_value(ct.value.as_ref(), domain);
            match domain {
                Domain::StringLen => {
                    result.push_str("min_len: ");
                    result.push_str(&value);
                    result.push_str(", max_len: ");
                    result.push_str(&value);
                }
                Domain::Int32 => {
                    result.push_str(&value);
                    with_subconstraint = true;
                }
            }
        }
        ConstraintKind::Range {
            left_open,
            right_open,
        } => {
            let start = optional_value(ct.range_start.as_ref(), domain);
            let stop = optional_value(ct.range_stop.as_ref(), domain);
            result.push_str(match (domain, left_open) {
                (Domain::StringLen, _) => "min_len: ",
                (Domain::Int32, false) => "gte: ",
                (Domain::Int32, true) => "gt: ",
            });
            result.push_str(&start);
            // An unrenderable upper bound (MAX outside the int32 domain)
            // leaves a lower bound only.
            if !stop.is_empty() {
                result.push_str(", ");
                result.push_str(match (domain, right_open) {
                    (Domain::StringLen, _) => "max_len: ",
                    (Domain::Int32, false) => "lte: ",
                    (Domain::Int32, true) => "lt: ",
                });
                result.push_str(&stop);
            }
        }
        ConstraintKind::Extension => {}
        ConstraintKind::Size => {
            result.push_str(&compile_constraint(single_element(ct), domain));
        }
        ConstraintKind::From => {
            result.push_str("FROM ");
            result.push_str(&compile_constraint(single_element(ct), domain));
        }
        ConstraintKind::WithComponent => {
            result.push_str("WITH COMPONENT");
            with_subconstraint = true;
        }
        ConstraintKind::WithComponents => {
            result.push_str("WITH COMPONENTS { ");
            result.push_str(
                &ct.elements
                    .iter()
                    .map(|el| compile_constraint(el, domain))
                    .join(", "),
            );
            result.push_str(" }");
        }
        ConstraintKind::ConstrainedBy => {
            result.push_str("CONSTRAINED BY ");
            match &ct.value {
                Some(AsnValue::Unparsed(raw)) => result.push_str(raw),
                other => panic!("BUG: CONSTRAINED BY carries {:?} instead of unparsed text", other),
            }
        }
        ConstraintKind::Containing => {
            result.push_str("CONTAINING ");
            result.push_str(ct.containing.as_deref().unwrap_or_default());
        }
        ConstraintKind::Pattern => {
            result.push_str("PATTERN ");
            result.push_str(&optional_value(ct.value.as_ref(), domain));
        }
        ConstraintKind::Union => {
            result.push_str(&join_elements(ct, domain, ","));
        }
        ConstraintKind::Intersection => {
            result.push_str(&join_elements(ct, domain, " ^ "));
        }
        ConstraintKind::Except => {
            result.push_str(&join_elements(ct, domain, " EXCEPT "));
        }
        ConstraintKind::AllExcept => {
            result.push_str("ALL EXCEPT");
            with_subconstraint = true;
        }
    }

    if with_subconstraint && !ct.elements.is_empty() {
        result.push(' ');
        result.push_str(&compile_constraint(single_element(ct), domain));
    }

    result
}

fn optional_value(value: Option<&AsnValue>, domain: Domain) -> String {
    value.map(|v| render_value(v, domain)).unwrap_or_default()
}

fn join_elements(ct: &Constraint, domain: Domain, separator: &str) -> String {
    ct.elements
        .iter()
        .map(|el| compile_constraint(el, domain))
        .join(separator)
}

fn single_element(ct: &Constraint) -> &Constraint {
    assert_eq!(
        ct.elements.len(),
        1,
        "BUG: {:?} constraint must carry exactly one element",
        ct.kind
    );
    &ct.elements[0]
}
