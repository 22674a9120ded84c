//! Core emitter struct and shared output helpers.

use std::ops::BitOr;

use typeport_core::CommentGroup;

use super::{Config, UnknownTypes};

/// Context flags for [`Emitter::write_type`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Generic constraint position
    pub extends: bool,
    /// Wrap types that would be ambiguous inside a larger expression
    pub parenthesis: bool,
    /// Function result position
    pub function_return: bool,
}

impl WriteOptions {
    pub const NONE: Self = Self {
        extends: false,
        parenthesis: false,
        function_return: false,
    };
    pub const EXTENDS: Self = Self {
        extends: true,
        ..Self::NONE
    };
    pub const PARENTHESIS: Self = Self {
        parenthesis: true,
        ..Self::NONE
    };
    pub const FUNCTION_RETURN: Self = Self {
        function_return: true,
        ..Self::NONE
    };
}

impl BitOr for WriteOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            extends: self.extends || rhs.extends,
            parenthesis: self.parenthesis || rhs.parenthesis,
            function_return: self.function_return || rhs.function_return,
        }
    }
}

/// TypeScript emitter for one output buffer.
///
/// Reads configuration, records unresolved names into the run's
/// [`UnknownTypes`] and appends text to its own buffer.
pub struct Emitter<'a> {
    pub(super) config: &'a Config,
    pub(super) unknown: &'a mut UnknownTypes,
    /// Output buffer
    pub(super) output: String,
    /// Current type-expression nesting, checked against `config.max_depth`
    pub(super) nesting: usize,
}

impl<'a> Emitter<'a> {
    pub fn new(config: &'a Config, unknown: &'a mut UnknownTypes) -> Self {
        Self {
            config,
            unknown,
            output: String::new(),
            nesting: 0,
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn finish(self) -> String {
        self.output
    }

    pub(super) fn write_indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.output.push_str(&self.config.indent);
        }
    }

    pub(super) fn write_start_modifier(&mut self, depth: usize) {
        self.write_indent(depth);
        if let Some(modifier) = &self.config.start_modifier {
            self.output.push_str(modifier);
            self.output.push(' ');
        }
    }

    /// Writes `group` as a JSDoc block, each line indented to `depth`.
    pub(super) fn write_doc(&mut self, group: Option<&CommentGroup>, depth: usize) {
        let Some(group) = group else {
            return;
        };
        let lines = group.lines();
        if lines.is_empty() {
            return;
        }

        self.write_indent(depth);
        self.output.push_str("/**\n");
        for line in &lines {
            self.write_indent(depth);
            if line.is_empty() {
                self.output.push_str(" *\n");
            } else {
                // A `*/` inside the text would close the block early.
                self.output.push_str(" * ");
                self.output.push_str(&line.replace("*/", "*\\/"));
                self.output.push('\n');
            }
        }
        self.write_indent(depth);
        self.output.push_str(" */\n");
    }

    /// Ends a member line with its trailing comment, if any.
    pub(super) fn end_member_line(&mut self, comment: Option<&CommentGroup>) {
        let text = comment.map(comment_text).unwrap_or_default();
        if !text.is_empty() {
            self.output.push_str(" // ");
            self.output.push_str(&text);
        }
        self.output.push('\n');
    }
}

/// Comment text collapsed onto a single line.
pub(super) fn comment_text(group: &CommentGroup) -> String {
    group
        .lines()
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
