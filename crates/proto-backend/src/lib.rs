// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Proto3 text rendering of the Protobuf IR
//!
//! The renderer walks a `ProtoModule` and emits a well-formed `.proto`
//! file through an explicit output sink (standard output or an in-memory
//! buffer). Rendering is deterministic: given identical IR the byte
//! stream is identical, modulo the configured tool version stamp.

pub mod options;
pub mod renderer;
pub mod sink;
pub mod writer;

pub use options::Options;
pub use renderer::{render_module, render_module_consuming};
pub use sink::OutputSink;
pub use writer::ProtoWriter;
