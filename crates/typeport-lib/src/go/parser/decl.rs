//! Top-level declarations: `type` specs and receiver-less `func`s.
//!
//! Everything else a Go file may contain (`package`, `import`, `var`,
//! `const`, methods) is skipped without producing output.

use typeport_core::{CommentGroup, Declaration, FuncDecl, TypeSpec};

use super::core::Parser;
use crate::diagnostics::DiagnosticKind;
use crate::go::syntax_kind::SyntaxKind;
use crate::go::syntax_kind::token_sets::DECL_RECOVERY;

impl Parser<'_> {
    pub(super) fn parse_file(&mut self) -> Vec<Declaration> {
        let mut decls = Vec::new();

        loop {
            let doc = self.take_doc_comment();
            match self.current() {
                SyntaxKind::Eof => break,
                SyntaxKind::Semicolon => self.bump(),
                SyntaxKind::KwPackage
                | SyntaxKind::KwImport
                | SyntaxKind::KwVar
                | SyntaxKind::KwConst => {
                    log::debug!("skipping `{}` declaration", self.current_text());
                    self.skip_statement();
                }
                SyntaxKind::KwType => self.parse_type_decl(doc, &mut decls),
                SyntaxKind::KwFunc => {
                    if let Some(decl) = self.parse_func_decl(doc) {
                        decls.push(Declaration::Func(decl));
                    }
                }
                _ => {
                    self.error_and_bump(DiagnosticKind::ExpectedDeclaration);
                    while !self.currently_is_one_of(DECL_RECOVERY) && !self.eof() {
                        self.bump();
                    }
                }
            }
        }

        decls
    }

    /// `type Name T`, `type Name = T` or a parenthesized group of either.
    fn parse_type_decl(&mut self, doc: Option<CommentGroup>, decls: &mut Vec<Declaration>) {
        self.bump();

        if !self.currently_is(SyntaxKind::ParenOpen) {
            if let Some(mut spec) = self.parse_type_spec() {
                spec.doc = doc;
                decls.push(Declaration::Type(spec));
            }
            self.end_declaration();
            return;
        }

        let open = self.current_span();
        self.bump();
        loop {
            match self.current() {
                SyntaxKind::ParenClose => {
                    self.bump();
                    break;
                }
                SyntaxKind::Eof => {
                    self.error_unclosed_delimiter(DiagnosticKind::UnclosedParen, open);
                    break;
                }
                SyntaxKind::Semicolon => {
                    self.bump();
                    continue;
                }
                _ => {}
            }

            let before = self.pos;
            let spec_doc = self.take_doc_comment();
            if let Some(mut spec) = self.parse_type_spec() {
                spec.doc = spec_doc;
                decls.push(Declaration::Type(spec));
            }
            if !matches!(self.current(), SyntaxKind::ParenClose | SyntaxKind::Eof) {
                self.end_declaration();
            }
            if self.pos == before {
                self.bump();
            }
        }
        self.end_declaration();
    }

    fn parse_type_spec(&mut self) -> Option<TypeSpec> {
        if !self.currently_is(SyntaxKind::Ident) {
            self.error(DiagnosticKind::ExpectedIdentifier);
            return None;
        }
        let name_span = self.current_span();
        let name = self.bump_text().to_string();
        self.declare(&name, name_span);

        let type_params =
            if self.currently_is(SyntaxKind::BracketOpen) && self.bracket_opens_type_params() {
                self.parse_type_params()
            } else {
                Vec::new()
            };

        let alias = self.eat_token(SyntaxKind::Equals);
        let ty = self.parse_type();

        let mut spec = TypeSpec::new(name, ty);
        spec.type_params = type_params;
        spec.alias = alias;
        spec.comment = self.take_line_comment();
        Some(spec)
    }

    /// `func Name[T any](params) results { body }`. Methods are skipped.
    fn parse_func_decl(&mut self, doc: Option<CommentGroup>) -> Option<FuncDecl> {
        self.bump();

        if self.currently_is(SyntaxKind::ParenOpen) {
            let start = self.current_span();
            self.skip_receiver_and_method();
            log::debug!(
                "skipping method declared at offset {}",
                u32::from(start.start())
            );
            return None;
        }

        if !self.currently_is(SyntaxKind::Ident) {
            self.error(DiagnosticKind::ExpectedIdentifier);
            self.skip_statement();
            return None;
        }
        let name_span = self.current_span();
        let name = self.bump_text().to_string();
        // Go allows any number of `init` functions.
        if name != "init" {
            self.declare(&name, name_span);
        }

        let type_params = if self.currently_is(SyntaxKind::BracketOpen) {
            self.parse_type_params()
        } else {
            Vec::new()
        };

        let signature = self.parse_signature();
        if self.currently_is(SyntaxKind::BraceOpen) {
            self.skip_block();
        }
        self.end_declaration();

        Some(FuncDecl {
            name,
            type_params,
            signature,
            doc,
        })
    }

    fn skip_receiver_and_method(&mut self) {
        let mut depth = 0u32;
        loop {
            match self.current() {
                SyntaxKind::ParenOpen => depth += 1,
                SyntaxKind::ParenClose => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.bump();
                        break;
                    }
                }
                SyntaxKind::Eof => return,
                _ => {}
            }
            self.bump();
        }

        while !matches!(
            self.current(),
            SyntaxKind::BraceOpen | SyntaxKind::Semicolon | SyntaxKind::Eof
        ) {
            self.bump();
        }
        if self.currently_is(SyntaxKind::BraceOpen) {
            self.skip_block();
        }
        self.end_declaration();
    }

    /// A declaration ends at `;`, which may be implicit, or at end of input.
    fn end_declaration(&mut self) {
        match self.current() {
            SyntaxKind::Semicolon => self.bump(),
            SyntaxKind::Eof => {}
            _ => {
                self.error_msg(DiagnosticKind::ExpectedToken, "`;` or newline");
                self.skip_statement();
            }
        }
    }
}
