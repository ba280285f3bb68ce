// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! asn1-protogen CLI
//!
//! Reads an elaborated ASN.1 tree (JSON, as handed over by the parser
//! front end) and emits one proto3 schema per module, concatenated to
//! standard output or a file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use proto_backend::renderer::{render_module, render_module_consuming};
use proto_backend::{Options, OutputSink, ProtoWriter};
use proto_ir::Translator;

#[derive(Parser)]
#[clap(
    name = env!("CARGO_BIN_NAME"),
    about = "Generate proto3 schemas with validate.v1 rules from an elaborated ASN.1 tree",
    rename_all = "kebab-case",
    version = env!("CARGO_PKG_VERSION"),
)]
struct Args {
    /// Path to the elaborated ASN.1 tree (JSON)
    input: PathBuf,

    /// Write output here instead of standard output
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,

    /// Suppress leading indentation on field lines
    #[clap(long)]
    no_indent: bool,

    /// Render into the in-memory buffer and write once at the end
    #[clap(long)]
    buffer: bool,

    /// Release IR nodes while rendering (lower peak memory)
    #[clap(long)]
    consume_ir: bool,

    /// Verbose logging
    #[clap(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let options = Options {
        no_indent: args.no_indent,
        consume_ir: args.consume_ir,
        verbosity_level: if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        ..Options::default()
    };
    env_logger::Builder::new()
        .filter_level(options.verbosity_level)
        .init();

    let data = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let bundle: asn1_model::Asn1Bundle =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", args.input.display()))?;

    let buffered = args.buffer || args.output.is_some();
    let mut sink = if buffered {
        OutputSink::buffer()
    } else {
        OutputSink::stdout()
    };

    let translator = Translator::new(&bundle);
    for module in &bundle.modules {
        log::debug!("translating module {}", module.name);
        let proto = translator.translate_module(module);
        let mut writer = ProtoWriter::new(&mut sink, &options);
        if options.consume_ir {
            render_module_consuming(proto, &mut writer)?;
        } else {
            render_module(&proto, &mut writer)?;
        }
    }

    if buffered {
        let output = sink.into_string();
        match &args.output {
            Some(path) => fs::write(path, output)
                .with_context(|| format!("writing {}", path.display()))?,
            None => print!("{}", output),
        }
    }

    Ok(())
}
