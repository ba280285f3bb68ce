// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Modules, imports, and terminal-type resolution

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::expr::{AsnExpr, ExprKind, MetaType};
use crate::oid::Oid;

/// An IMPORTS entry: the module the symbols come from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AsnImport {
    pub module_name: String,
    pub oid: Option<Oid>,
}

/// One parsed ASN.1 module with its top-level definitions in source order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AsnModule {
    pub name: String,
    pub source_file_name: String,
    pub oid: Option<Oid>,
    pub imports: Vec<AsnImport>,
    pub members: Vec<AsnExpr>,
}

/// The full parse result handed over by the front end.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Asn1Bundle {
    pub modules: Vec<AsnModule>,
}

impl Asn1Bundle {
    pub fn new(modules: Vec<AsnModule>) -> Self {
        Asn1Bundle { modules }
    }

    /// Follow a chain of type references to the underlying defined type.
    ///
    /// Targets are looked up by the final reference component, first in the
    /// defining module, then across the whole bundle. Returns `None` when a
    /// link is missing or the chain is cyclic.
    pub fn resolve_terminal_type<'a>(
        &'a self,
        module: &'a AsnModule,
        expr: &'a AsnExpr,
    ) -> Option<&'a AsnExpr> {
        let mut scope = module;
        let mut current = expr;
        let mut visited: HashSet<&str> = HashSet::new();

        loop {
            let reference = current.reference.as_ref()?;
            let target_name = reference.components.last()?.as_str();
            if !visited.insert(target_name) {
                log::warn!("cyclic type reference through {}", target_name);
                return None;
            }

            let mut found = Self::find_in(scope, target_name);
            if found.is_none() {
                for m in &self.modules {
                    if let Some(expr) = Self::find_in(m, target_name) {
                        scope = m;
                        found = Some(expr);
                        break;
                    }
                }
            }
            let found = found?;

            if found.meta == MetaType::TypeRef || found.kind == ExprKind::Reference {
                current = found;
            } else {
                return Some(found);
            }
        }
    }

    fn find_in<'a>(module: &'a AsnModule, name: &str) -> Option<&'a AsnExpr> {
        module
            .members
            .iter()
            .find(|m| m.ident.as_deref() == Some(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::AsnReference;

    fn typeref(ident: &str, target: &str) -> AsnExpr {
        AsnExpr {
            reference: Some(AsnReference::new(vec![target])),
            ..AsnExpr::named(ident, MetaType::TypeRef, ExprKind::Reference)
        }
    }

    #[test]
    fn resolves_chain_to_terminal() {
        let module = AsnModule {
            name: "Test".to_string(),
            members: vec![
                typeref("A", "B"),
                typeref("B", "C"),
                AsnExpr {
                    unique_index: 7,
                    ..AsnExpr::named("C", MetaType::Type, ExprKind::Integer)
                },
            ],
            ..AsnModule::default()
        };
        let bundle = Asn1Bundle::new(vec![module]);
        let module = &bundle.modules[0];

        let terminal = bundle
            .resolve_terminal_type(module, &module.members[0])
            .unwrap();
        assert_eq!(terminal.ident.as_deref(), Some("C"));
        assert_eq!(terminal.unique_index, 7);
    }

    #[test]
    fn cyclic_reference_returns_none() {
        let module = AsnModule {
            name: "Test".to_string(),
            members: vec![typeref("A", "B"), typeref("B", "A")],
            ..AsnModule::default()
        };
        let bundle = Asn1Bundle::new(vec![module]);
        let module = &bundle.modules[0];

        assert!(bundle
            .resolve_terminal_type(module, &module.members[0])
            .is_none());
    }

    #[test]
    fn resolves_across_modules() {
        let first = AsnModule {
            name: "First".to_string(),
            members: vec![typeref("A", "Remote")],
            ..AsnModule::default()
        };
        let second = AsnModule {
            name: "Second".to_string(),
            members: vec![AsnExpr::named(
                "Remote",
                MetaType::Type,
                ExprKind::Boolean,
            )],
            ..AsnModule::default()
        };
        let bundle = Asn1Bundle::new(vec![first, second]);

        let terminal = bundle
            .resolve_terminal_type(&bundle.modules[0], &bundle.modules[0].members[0])
            .unwrap();
        assert_eq!(terminal.kind, ExprKind::Boolean);
    }
}
