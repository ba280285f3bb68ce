// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Renders the Protobuf IR to proto3 text
//!
//! One file per entity kind. Walk order equals IR insertion order, so
//! output is deterministic for identical input.

mod enum_renderer;
mod message_renderer;
mod module_renderer;

pub use module_renderer::{render_module, render_module_consuming};
