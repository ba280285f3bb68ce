// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Writer wrapper for generating proto3 text with proper indentation

use std::io;

use crate::options::Options;
use crate::sink::OutputSink;

/// Wraps an output sink with the current indentation level and the
/// render options.
pub struct ProtoWriter<'a> {
    sink: &'a mut OutputSink,
    options: &'a Options,
    level: usize,
}

impl<'a> ProtoWriter<'a> {
    pub fn new(sink: &'a mut OutputSink, options: &'a Options) -> Self {
        ProtoWriter {
            sink,
            options,
            level: 0,
        }
    }

    pub fn options(&self) -> &Options {
        self.options
    }

    /// Emit a string as-is, without indentation or newline.
    pub fn write(&mut self, s: &str) -> io::Result<()> {
        self.sink.write_str(s)
    }

    /// Emit one line at the current indentation level, four spaces per
    /// level unless indentation is suppressed.
    pub fn line(&mut self, s: &str) -> io::Result<()> {
        if !self.options.no_indent {
            for _ in 0..self.level {
                self.sink.write_str("    ")?;
            }
        }
        self.sink.write_str(s)?;
        self.sink.write_str("\n")
    }

    pub fn indent(&mut self) {
        self.level += 1;
    }

    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_follow_indent_level() {
        let options = Options::default();
        let mut sink = OutputSink::buffer();
        let mut writer = ProtoWriter::new(&mut sink, &options);

        writer.line("a").unwrap();
        writer.indent();
        writer.line("b").unwrap();
        writer.indent();
        writer.line("c").unwrap();
        writer.dedent();
        writer.line("d").unwrap();

        assert_eq!(sink.into_string(), "a\n    b\n        c\n    d\n");
    }

    #[test]
    fn no_indent_suppresses_leading_spaces() {
        let options = Options {
            no_indent: true,
            ..Options::default()
        };
        let mut sink = OutputSink::buffer();
        let mut writer = ProtoWriter::new(&mut sink, &options);

        writer.indent();
        writer.line("x = 1;").unwrap();

        assert_eq!(sink.into_string(), "x = 1;\n");
    }
}
