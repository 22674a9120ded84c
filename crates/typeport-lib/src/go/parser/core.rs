//! Parser state machine and low-level operations.

use std::collections::HashMap;

use rowan::{TextRange, TextSize};
use typeport_core::CommentGroup;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::go::lexer::{Token, token_text};
use crate::go::syntax_kind::{SyntaxKind, TokenSet};

/// Nesting limit for type expressions.
pub const MAX_DEPTH: u32 = 256;

/// Comments are buffered while skipping trivia and consumed as doc or line
/// comments by the grammar. Bumping a token drops whatever is left.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) comment_buffer: Vec<Token>,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    last_diagnostic_pos: Option<TextSize>,
    /// End of the last consumed token that covers text.
    prev_end: Option<TextSize>,
    line_starts: Vec<usize>,
    /// First span of each top-level name.
    declared: HashMap<String, TextRange>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            tokens,
            pos: 0,
            comment_buffer: Vec::with_capacity(4),
            diagnostics: Diagnostics::new(),
            depth: 0,
            last_diagnostic_pos: None,
            prev_end: None,
            line_starts,
            declared: HashMap::new(),
        }
    }

    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or(SyntaxKind::Eof, |t| t.kind)
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn current_text(&mut self) -> &'src str {
        self.skip_trivia_to_buffer();
        match self.tokens.get(self.pos) {
            Some(token) => token_text(self.source, token),
            None => "",
        }
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// LL(k) lookahead past trivia.
    pub(super) fn peek_nth(&mut self, n: usize) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.nth_from(self.pos, n).map_or(SyntaxKind::Eof, |(_, kind)| kind)
    }

    pub(super) fn next_is(&mut self, kind: SyntaxKind) -> bool {
        self.peek_nth(1) == kind
    }

    /// Index and kind of the `n`th significant token at or after `start`.
    pub(super) fn nth_from(&self, start: usize, n: usize) -> Option<(usize, SyntaxKind)> {
        self.tokens[start.min(self.tokens.len())..]
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.kind.is_trivia())
            .nth(n)
            .map(|(i, t)| (start + i, t.kind))
    }

    /// Index of the significant token after the `]` matching the `[` at
    /// `open`, if the brackets close.
    pub(super) fn after_matching_bracket(&self, open: usize) -> Option<usize> {
        let mut depth = 0u32;
        let mut idx = open;
        while let Some((i, kind)) = self.nth_from(idx, 0) {
            match kind {
                SyntaxKind::BracketOpen => depth += 1,
                SyntaxKind::BracketClose => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return Some(i + 1);
                    }
                }
                _ => {}
            }
            idx = i + 1;
        }
        None
    }

    /// Kind of the first significant token at or after raw index `idx`.
    pub(super) fn kind_at(&self, idx: usize) -> SyntaxKind {
        self.nth_from(idx, 0).map_or(SyntaxKind::Eof, |(_, kind)| kind)
    }

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            let token = self.tokens[self.pos];
            if token.kind.is_comment() {
                self.comment_buffer.push(token);
            }
            self.pos += 1;
        }
    }

    pub(super) fn bump(&mut self) {
        self.skip_trivia_to_buffer();
        let Some(token) = self.tokens.get(self.pos).copied() else {
            return;
        };
        self.comment_buffer.clear();
        if !token.is_implicit() {
            self.prev_end = Some(token.span.end());
        }
        self.pos += 1;
    }

    /// Consumes the current token and returns its text.
    pub(super) fn bump_text(&mut self) -> &'src str {
        let text = self.current_text();
        self.bump();
        text
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// On mismatch: emit diagnostic but don't consume.
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat_token(kind) {
            return true;
        }
        self.error_msg(DiagnosticKind::ExpectedToken, what);
        false
    }

    fn should_report(&mut self, pos: TextSize) -> bool {
        if self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        let range = self.current_span();
        if !self.should_report(range.start()) || self.report_garbage(range) {
            return;
        }
        self.diagnostics.report(kind, range).emit();
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let range = self.current_span();
        if !self.should_report(range.start()) || self.report_garbage(range) {
            return;
        }
        self.diagnostics.report(kind, range).message(message).emit();
    }

    /// Characters the lexer could not read are reported as such, whatever
    /// the grammar expected in their place.
    fn report_garbage(&mut self, range: TextRange) -> bool {
        if self.current() != SyntaxKind::Garbage {
            return false;
        }
        let text = self.current_text();
        self.diagnostics
            .report(DiagnosticKind::UnexpectedCharacters, range)
            .message(format!("`{text}`"))
            .emit();
        true
    }

    /// Records a top-level name, warning when an earlier declaration
    /// already used it.
    pub(super) fn declare(&mut self, name: &str, range: TextRange) {
        if name == "_" {
            return;
        }
        match self.declared.get(name) {
            Some(&first) => self
                .diagnostics
                .report(DiagnosticKind::DuplicateDeclaration, range)
                .message(name)
                .related_to("first declared here", first)
                .emit(),
            None => {
                self.declared.insert(name.to_string(), range);
            }
        }
    }

    pub(super) fn error_at(&mut self, kind: DiagnosticKind, range: TextRange, message: impl Into<String>) {
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).message(message).emit();
    }

    pub(super) fn error_and_bump(&mut self, kind: DiagnosticKind) {
        self.error(kind);
        self.bump();
    }

    pub(super) fn error_unclosed_delimiter(&mut self, kind: DiagnosticKind, open_range: TextRange) {
        let current = self.current_span();
        if !self.should_report(current.start()) {
            return;
        }
        let full_range = TextRange::new(open_range.start(), current.end());
        self.diagnostics
            .report(kind, full_range)
            .related_to("opened here", open_range)
            .emit();
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.depth >= MAX_DEPTH {
            self.error(DiagnosticKind::NestingTooDeep);
            return false;
        }
        self.depth += 1;
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Skips tokens up to and including the next `;` outside any brackets.
    pub(super) fn skip_statement(&mut self) {
        let mut depth = 0u32;
        while !self.eof() {
            match self.current() {
                SyntaxKind::ParenOpen | SyntaxKind::BracketOpen | SyntaxKind::BraceOpen => {
                    depth += 1
                }
                SyntaxKind::ParenClose | SyntaxKind::BracketClose | SyntaxKind::BraceClose => {
                    depth = depth.saturating_sub(1)
                }
                SyntaxKind::Semicolon if depth == 0 => {
                    self.bump();
                    return;
                }
                SyntaxKind::Eof => return,
                _ => {}
            }
            self.bump();
        }
    }

    /// Skips a `{ ... }` block, nested blocks included.
    pub(super) fn skip_block(&mut self) {
        let open = self.current_span();
        let mut depth = 0u32;
        loop {
            match self.current() {
                SyntaxKind::BraceOpen => depth += 1,
                SyntaxKind::BraceClose => {
                    depth -= 1;
                    if depth == 0 {
                        self.bump();
                        return;
                    }
                }
                SyntaxKind::Eof => {
                    self.error_unclosed_delimiter(DiagnosticKind::UnclosedBrace, open);
                    return;
                }
                _ => {}
            }
            self.bump();
        }
    }

    /// Source text between two offsets, trimmed.
    pub(super) fn slice(&self, range: TextRange) -> &'src str {
        let source: &'src str = self.source;
        source[std::ops::Range::<usize>::from(range)].trim()
    }

    fn line_of(&self, offset: TextSize) -> usize {
        let offset = usize::from(offset);
        self.line_starts.partition_point(|&start| start <= offset) - 1
    }

    /// Comment group ending on the line right before the current token and
    /// not trailing the previous token's line.
    pub(super) fn take_doc_comment(&mut self) -> Option<CommentGroup> {
        self.skip_trivia_to_buffer();
        let cur = self.current_span().start();
        let target = self.line_of(cur);
        let prev_line = self.prev_end.map(|end| self.line_of(end));

        let last = self.comment_buffer.len();
        let mut first = last;
        let mut next_start = target;
        for (i, comment) in self.comment_buffer.iter().enumerate().rev() {
            let start_line = self.line_of(comment.span.start());
            let end_line = self.line_of(comment.span.end());
            let adjacent = if i + 1 == last {
                end_line + 1 == target
            } else {
                end_line + 1 >= next_start
            };
            if !adjacent || prev_line == Some(start_line) {
                break;
            }
            first = i;
            next_start = start_line;
        }

        if first == self.comment_buffer.len() {
            return None;
        }
        let group = self.comment_group(first..self.comment_buffer.len());
        self.comment_buffer.clear();
        Some(group)
    }

    /// Comments on the same line as the previous token.
    pub(super) fn take_line_comment(&mut self) -> Option<CommentGroup> {
        self.skip_trivia_to_buffer();
        let line = self.line_of(self.prev_end?);
        let count = self
            .comment_buffer
            .iter()
            .take_while(|c| self.line_of(c.span.start()) == line)
            .count();
        if count == 0 {
            return None;
        }
        let group = self.comment_group(0..count);
        self.comment_buffer.drain(..count);
        Some(group)
    }

    fn comment_group(&self, range: std::ops::Range<usize>) -> CommentGroup {
        CommentGroup::new(
            self.comment_buffer[range]
                .iter()
                .map(|c| token_text(self.source, c).to_string())
                .collect(),
        )
    }

    pub(super) fn finish(self) -> Diagnostics {
        self.diagnostics
    }
}
