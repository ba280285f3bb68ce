// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Translation from the elaborated ASN.1 tree to the Protobuf IR
//!
//! One file per concern:
//! - expression_translator: the central dispatcher over meta/kind
//! - member_translator: SEQUENCE/CHOICE member lists
//! - constraint_compiler: subtype constraints → rule expressions
//! - value_renderer: literal values → short text form
//! - ioc_expander: information-object tables → one message per table

pub mod constraint_compiler;
pub mod expression_translator;
mod ioc_expander;
mod member_translator;
pub mod value_renderer;

use asn1_model::{Asn1Bundle, AsnModule};

use crate::data::{ProtoImport, ProtoModule};

/// Value domain a constraint is compiled under: integer bounds or string
/// length bounds. A typed parameter instead of the flag bits the C
/// original threaded through its recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Int32,
    StringLen,
}

/// Translates modules of one parse bundle. The bundle is needed beyond
/// the module at hand to resolve type references across module borders.
pub struct Translator<'a> {
    bundle: &'a Asn1Bundle,
}

impl<'a> Translator<'a> {
    pub fn new(bundle: &'a Asn1Bundle) -> Self {
        Translator { bundle }
    }

    /// Translate one module into its Protobuf IR. Translation is
    /// best-effort: a failing top-level definition is logged and skipped,
    /// the rest of the module still translates.
    pub fn translate_module(&self, module: &AsnModule) -> ProtoModule {
        let mut out = ProtoModule::new(&module.name, &module.source_file_name, module.oid.clone());
        for import in &module.imports {
            out.add_import(ProtoImport {
                path: import.module_name.clone(),
                oid: import.oid.clone(),
            });
        }

        for member in &module.members {
            if let Err(err) =
                expression_translator::translate_expr(self.bundle, module, member, &mut out)
            {
                log::error!(
                    "{}: skipping {}: {:#}",
                    module.name,
                    member.ident.as_deref().unwrap_or("<anonymous>"),
                    err
                );
            }
        }
        out
    }
}
