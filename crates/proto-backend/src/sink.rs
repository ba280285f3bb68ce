// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Output sinks for the renderer
//!
//! The sink is an explicit value handed through the render call chain;
//! there is no process-wide selector. Stdout write failures are fatal and
//! propagate to the driver.

use std::io;
use std::io::Write;

#[derive(Debug)]
pub enum OutputSink {
    Stdout,
    Buffer(String),
}

impl OutputSink {
    pub fn stdout() -> Self {
        OutputSink::Stdout
    }

    pub fn buffer() -> Self {
        OutputSink::Buffer(String::new())
    }

    pub fn write_str(&mut self, s: &str) -> io::Result<()> {
        match self {
            OutputSink::Stdout => io::stdout().write_all(s.as_bytes()),
            OutputSink::Buffer(buf) => {
                buf.push_str(s);
                Ok(())
            }
        }
    }

    /// Drain the accumulated output. Empty for the stdout sink, which has
    /// already written everything through.
    pub fn into_string(self) -> String {
        match self {
            OutputSink::Buffer(buf) => buf,
            OutputSink::Stdout => String::new(),
        }
    }
}
