//! Type expressions, signatures, struct and interface bodies.

use rowan::TextRange;
use typeport_core::{ChanDir, CommentGroup, Field, FuncType, TypeExpr};

use super::core::Parser;
use crate::diagnostics::DiagnosticKind;
use crate::go::syntax_kind::SyntaxKind;
use crate::go::syntax_kind::token_sets::{LIST_END, TYPE_FIRST};

/// One entry of a parameter or type parameter list before Go's grouping
/// rules decide what the identifiers mean.
enum ListItem {
    /// Lone identifier: a name if the list is named, a type otherwise
    Bare { name: String, range: TextRange },
    Named { name: String, field: Field },
    Type(Field),
}

impl Parser<'_> {
    pub(super) fn parse_type(&mut self) -> TypeExpr {
        if !self.enter_recursion() {
            return TypeExpr::Bad;
        }
        let ty = self.parse_type_inner();
        self.exit_recursion();
        ty
    }

    fn parse_type_inner(&mut self) -> TypeExpr {
        match self.current() {
            SyntaxKind::Ident => self.parse_type_name(),
            SyntaxKind::Star => {
                self.bump();
                TypeExpr::pointer(self.parse_type())
            }
            SyntaxKind::Ellipsis => {
                self.bump();
                TypeExpr::ellipsis(self.parse_type())
            }
            SyntaxKind::Tilde => {
                self.bump();
                TypeExpr::Unary {
                    op: "~".to_string(),
                    x: Box::new(self.parse_type()),
                }
            }
            SyntaxKind::BracketOpen => self.parse_array_type(),
            SyntaxKind::KwMap => self.parse_map_type(),
            SyntaxKind::KwChan | SyntaxKind::Arrow => self.parse_chan_type(),
            SyntaxKind::KwFunc => {
                self.bump();
                TypeExpr::Func(self.parse_signature())
            }
            SyntaxKind::KwStruct => self.parse_struct_type(),
            SyntaxKind::KwInterface => self.parse_interface_type(),
            SyntaxKind::ParenOpen => {
                let open = self.current_span();
                self.bump();
                let inner = self.parse_type();
                if !self.eat_token(SyntaxKind::ParenClose) {
                    self.error_unclosed_delimiter(DiagnosticKind::UnclosedParen, open);
                }
                TypeExpr::Paren {
                    inner: Box::new(inner),
                }
            }
            kind => {
                self.error(DiagnosticKind::ExpectedType);
                if !LIST_END.contains(kind)
                    && !matches!(kind, SyntaxKind::Semicolon | SyntaxKind::Comma)
                {
                    self.bump();
                }
                TypeExpr::Bad
            }
        }
    }

    /// `T`, `pkg.T`, optionally instantiated: `List[T]`, `pkg.Pair[K, V]`.
    fn parse_type_name(&mut self) -> TypeExpr {
        let name = self.bump_text().to_string();
        let base = if self.currently_is(SyntaxKind::Dot) {
            self.bump();
            if self.currently_is(SyntaxKind::Ident) {
                TypeExpr::selector(name, self.bump_text())
            } else {
                self.error(DiagnosticKind::ExpectedIdentifier);
                TypeExpr::Bad
            }
        } else {
            TypeExpr::ident(name)
        };

        if !self.currently_is(SyntaxKind::BracketOpen) {
            return base;
        }

        let open = self.current_span();
        self.bump();
        let mut args = Vec::new();
        loop {
            match self.current() {
                SyntaxKind::BracketClose => {
                    self.bump();
                    break;
                }
                SyntaxKind::Eof | SyntaxKind::Semicolon | SyntaxKind::BraceClose => {
                    self.error_unclosed_delimiter(DiagnosticKind::UnclosedBracket, open);
                    break;
                }
                _ => {}
            }
            let before = self.pos;
            args.push(self.parse_type());
            if !self.eat_token(SyntaxKind::Comma) && !self.currently_is(SyntaxKind::BracketClose) {
                self.error_msg(DiagnosticKind::ExpectedToken, "`,` or `]`");
                if self.pos == before {
                    self.bump();
                }
            }
        }

        TypeExpr::Index {
            base: Box::new(base),
            args,
        }
    }

    /// `[]T`, `[N]T`, `[...]T`. The length is kept as source text.
    fn parse_array_type(&mut self) -> TypeExpr {
        let open = self.current_span();
        self.bump();

        let len = match self.current() {
            SyntaxKind::BracketClose => None,
            SyntaxKind::Ellipsis => {
                self.bump();
                Some("...".to_string())
            }
            _ => {
                let start = self.current_span().start();
                let mut depth = 0u32;
                loop {
                    match self.current() {
                        SyntaxKind::BracketOpen | SyntaxKind::ParenOpen => depth += 1,
                        SyntaxKind::ParenClose => depth = depth.saturating_sub(1),
                        SyntaxKind::BracketClose if depth == 0 => break,
                        SyntaxKind::BracketClose => depth -= 1,
                        SyntaxKind::Eof | SyntaxKind::Semicolon | SyntaxKind::BraceClose => break,
                        _ => {}
                    }
                    self.bump();
                }
                let end = self.current_span().start();
                Some(self.slice(TextRange::new(start, end)).to_string())
            }
        };

        if !self.eat_token(SyntaxKind::BracketClose) {
            self.error_unclosed_delimiter(DiagnosticKind::UnclosedBracket, open);
        }

        TypeExpr::Array {
            len,
            elem: Box::new(self.parse_type()),
        }
    }

    fn parse_map_type(&mut self) -> TypeExpr {
        self.bump();
        let open = self.current_span();
        if !self.expect(SyntaxKind::BracketOpen, "`[`") {
            return TypeExpr::Bad;
        }
        let key = self.parse_type();
        if !self.eat_token(SyntaxKind::BracketClose) {
            self.error_unclosed_delimiter(DiagnosticKind::UnclosedBracket, open);
        }
        let value = self.parse_type();
        TypeExpr::map(key, value)
    }

    fn parse_chan_type(&mut self) -> TypeExpr {
        let dir = if self.eat_token(SyntaxKind::Arrow) {
            if !self.expect(SyntaxKind::KwChan, "`chan`") {
                return TypeExpr::Bad;
            }
            ChanDir::Recv
        } else {
            self.bump();
            if self.eat_token(SyntaxKind::Arrow) {
                ChanDir::Send
            } else {
                ChanDir::Both
            }
        };

        TypeExpr::Chan {
            dir,
            elem: Box::new(self.parse_type()),
        }
    }

    /// Parameters and results, after `func` and any name or type parameters.
    pub(super) fn parse_signature(&mut self) -> FuncType {
        let params = if self.currently_is(SyntaxKind::ParenOpen) {
            self.parse_field_list(SyntaxKind::ParenClose)
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`(`");
            Vec::new()
        };

        let results = match self.current() {
            SyntaxKind::ParenOpen => self.parse_field_list(SyntaxKind::ParenClose),
            kind if TYPE_FIRST.contains(kind) && kind != SyntaxKind::Ellipsis => {
                vec![Field::unnamed(self.parse_type())]
            }
            _ => Vec::new(),
        };

        FuncType::new(params, results)
    }

    /// `[T any, K comparable]` after a type or function name.
    pub(super) fn parse_type_params(&mut self) -> Vec<Field> {
        self.parse_field_list(SyntaxKind::BracketClose)
    }

    /// Constraint or interface element: a type, possibly a `|` union.
    pub(super) fn parse_constraint(&mut self) -> TypeExpr {
        let mut x = self.parse_type();
        while self.eat_token(SyntaxKind::Pipe) {
            let y = self.parse_type();
            x = TypeExpr::Binary {
                x: Box::new(x),
                op: "|".to_string(),
                y: Box::new(y),
            };
        }
        x
    }

    /// Parameter, result or type parameter list, opening delimiter included.
    ///
    /// `a, b int` groups into one field with two names. A list either names
    /// every entry or none of them.
    fn parse_field_list(&mut self, close: SyntaxKind) -> Vec<Field> {
        let open = self.current_span();
        self.bump();

        let constraints = close == SyntaxKind::BracketClose;
        let mut items = Vec::new();
        loop {
            match self.current() {
                kind if kind == close => {
                    self.bump();
                    break;
                }
                SyntaxKind::Eof | SyntaxKind::BraceOpen | SyntaxKind::BraceClose => {
                    let kind = if constraints {
                        DiagnosticKind::UnclosedBracket
                    } else {
                        DiagnosticKind::UnclosedParen
                    };
                    self.error_unclosed_delimiter(kind, open);
                    break;
                }
                _ => {}
            }

            let before = self.pos;
            items.push(self.parse_list_item(close, constraints));
            if self.eat_token(SyntaxKind::Comma) || self.currently_is(close) {
                continue;
            }
            if matches!(
                self.current(),
                SyntaxKind::Eof | SyntaxKind::BraceOpen | SyntaxKind::BraceClose
            ) {
                continue;
            }
            self.error_msg(DiagnosticKind::ExpectedToken, "`,`");
            if self.pos == before || self.currently_is(SyntaxKind::Semicolon) {
                self.bump();
            }
        }

        self.group_list_items(items)
    }

    fn parse_list_item(&mut self, close: SyntaxKind, constraints: bool) -> ListItem {
        let parse_ty = |p: &mut Self| {
            if constraints {
                p.parse_constraint()
            } else {
                p.parse_type()
            }
        };

        if !self.currently_is(SyntaxKind::Ident) {
            let ty = parse_ty(self);
            let comment = self.take_line_comment();
            return ListItem::Type(with_comment(Field::unnamed(ty), comment));
        }

        let next = self.peek_nth(1);
        let bare = next == SyntaxKind::Comma || next == close;
        let qualified = next == SyntaxKind::Dot;
        let instantiated = next == SyntaxKind::BracketOpen && !self.ident_starts_array_field();

        if bare {
            let range = self.current_span();
            let name = self.bump_text().to_string();
            return ListItem::Bare { name, range };
        }
        if qualified || instantiated {
            let ty = parse_ty(self);
            let comment = self.take_line_comment();
            return ListItem::Type(with_comment(Field::unnamed(ty), comment));
        }

        let name = self.bump_text().to_string();
        let ty = parse_ty(self);
        let comment = self.take_line_comment();
        ListItem::Named {
            name,
            field: with_comment(Field::unnamed(ty), comment),
        }
    }

    fn group_list_items(&mut self, items: Vec<ListItem>) -> Vec<Field> {
        let named = items.iter().any(|item| matches!(item, ListItem::Named { .. }));
        if !named {
            return items
                .into_iter()
                .map(|item| match item {
                    ListItem::Bare { name, .. } => Field::unnamed(TypeExpr::ident(name)),
                    ListItem::Named { field, .. } | ListItem::Type(field) => field,
                })
                .collect();
        }

        let mut fields = Vec::new();
        let mut pending: Vec<(String, TextRange)> = Vec::new();
        let mut mixed = false;
        for item in items {
            match item {
                ListItem::Bare { name, range } => pending.push((name, range)),
                ListItem::Named { name, mut field } => {
                    let mut names: Vec<String> = pending.drain(..).map(|(n, _)| n).collect();
                    names.push(name);
                    field.names = names;
                    fields.push(field);
                }
                ListItem::Type(field) => {
                    mixed = true;
                    fields.push(field);
                }
            }
        }

        if mixed {
            self.error(DiagnosticKind::MixedParameters);
        }
        for (name, range) in pending {
            self.error_at(DiagnosticKind::MissingParameterType, range, name.clone());
            fields.push(Field::named(name, TypeExpr::Bad));
        }
        fields
    }

    /// At an identifier followed by `[`: `true` when the brackets open an
    /// array type for a named entry (`buf [4]byte`) rather than a generic
    /// instantiation (`List[T]`).
    pub(super) fn ident_starts_array_field(&mut self) -> bool {
        self.skip_trivia_to_buffer();
        let Some((open, _)) = self.nth_from(self.pos, 1) else {
            return false;
        };
        match self.after_matching_bracket(open) {
            Some(after) => {
                let kind = self.kind_at(after);
                TYPE_FIRST.contains(kind) && kind != SyntaxKind::Ellipsis
            }
            None => false,
        }
    }

    /// `[` of a type declaration opens type parameters rather than an array
    /// length. The contents are read as an expression first: `[T any]`,
    /// `[K, V any]` and `[P *[]int]` split into a name and a constraint,
    /// while `[N]`, `[N * 2]`, `[N+1]`, `[P *C]` and `[len(x)]` do not.
    pub(super) fn bracket_opens_type_params(&mut self) -> bool {
        self.skip_trivia_to_buffer();
        if self.peek_nth(1) != SyntaxKind::Ident {
            return false;
        }

        let open = self.pos;
        let end = self
            .after_matching_bracket(open)
            .map_or(self.tokens.len(), |after| after - 1);
        let inner: Vec<SyntaxKind> = self.tokens[open + 1..end]
            .iter()
            .map(|t| t.kind)
            .filter(|kind| !kind.is_trivia())
            .collect();

        match inner.get(1) {
            None => false,
            Some(SyntaxKind::Comma) => true,
            Some(
                SyntaxKind::Ident
                | SyntaxKind::BracketOpen
                | SyntaxKind::Tilde
                | SyntaxKind::Arrow
                | SyntaxKind::KwInterface
                | SyntaxKind::KwFunc
                | SyntaxKind::KwMap
                | SyntaxKind::KwChan
                | SyntaxKind::KwStruct,
            ) => true,
            // `P *C`, `P (C)` and `P | C` stay expressions unless a comma or
            // a type-only construct forces the parameter reading.
            Some(SyntaxKind::Star | SyntaxKind::ParenOpen | SyntaxKind::Pipe) => {
                has_top_level_comma(&inner) || has_type_element(&inner[2..])
            }
            Some(_) => false,
        }
    }

    fn parse_struct_type(&mut self) -> TypeExpr {
        self.bump();
        let open = self.current_span();
        if !self.expect(SyntaxKind::BraceOpen, "`{`") {
            return TypeExpr::Struct { fields: Vec::new() };
        }

        let mut fields = Vec::new();
        loop {
            match self.current() {
                SyntaxKind::BraceClose => {
                    self.bump();
                    break;
                }
                SyntaxKind::Eof => {
                    self.error_unclosed_delimiter(DiagnosticKind::UnclosedBrace, open);
                    break;
                }
                SyntaxKind::Semicolon => {
                    self.bump();
                    continue;
                }
                _ => {}
            }

            let before = self.pos;
            fields.push(self.parse_struct_field());
            self.end_body_entry(before);
        }

        TypeExpr::Struct { fields }
    }

    fn parse_struct_field(&mut self) -> Field {
        let doc = self.take_doc_comment();

        let embedded = match self.current() {
            SyntaxKind::Ident => match self.peek_nth(1) {
                SyntaxKind::Dot
                | SyntaxKind::Semicolon
                | SyntaxKind::BraceClose
                | SyntaxKind::String
                | SyntaxKind::RawString => true,
                SyntaxKind::BracketOpen => !self.ident_starts_array_field(),
                _ => false,
            },
            _ => true,
        };

        let mut field = if embedded {
            Field::unnamed(self.parse_type())
        } else {
            let mut names = vec![self.bump_text().to_string()];
            while self.eat_token(SyntaxKind::Comma) {
                if self.currently_is(SyntaxKind::Ident) {
                    names.push(self.bump_text().to_string());
                } else {
                    self.error(DiagnosticKind::ExpectedIdentifier);
                    break;
                }
            }
            Field::new(names, self.parse_type())
        };

        if matches!(self.current(), SyntaxKind::String | SyntaxKind::RawString) {
            field.tag = Some(self.bump_text().to_string());
        }
        field.doc = doc;
        field.comment = self.take_line_comment();
        field
    }

    fn parse_interface_type(&mut self) -> TypeExpr {
        self.bump();
        let open = self.current_span();
        if !self.expect(SyntaxKind::BraceOpen, "`{`") {
            return TypeExpr::Interface {
                methods: Vec::new(),
            };
        }

        let mut methods = Vec::new();
        loop {
            match self.current() {
                SyntaxKind::BraceClose => {
                    self.bump();
                    break;
                }
                SyntaxKind::Eof => {
                    self.error_unclosed_delimiter(DiagnosticKind::UnclosedBrace, open);
                    break;
                }
                SyntaxKind::Semicolon => {
                    self.bump();
                    continue;
                }
                _ => {}
            }

            let before = self.pos;
            let doc = self.take_doc_comment();
            let mut field =
                if self.currently_is(SyntaxKind::Ident) && self.next_is(SyntaxKind::ParenOpen) {
                    let name = self.bump_text().to_string();
                    Field::named(name, TypeExpr::Func(self.parse_signature()))
                } else {
                    Field::unnamed(self.parse_constraint())
                };
            field.doc = doc;
            field.comment = self.take_line_comment();
            methods.push(field);
            self.end_body_entry(before);
        }

        TypeExpr::Interface { methods }
    }

    /// Entries of `struct { }` and `interface { }` end with `;` or the brace.
    fn end_body_entry(&mut self, before: usize) {
        match self.current() {
            SyntaxKind::Semicolon => self.bump(),
            SyntaxKind::BraceClose | SyntaxKind::Eof => {}
            _ => {
                self.error_msg(DiagnosticKind::ExpectedToken, "`;` or `}`");
                if self.pos == before {
                    self.bump();
                }
                while !matches!(
                    self.current(),
                    SyntaxKind::Semicolon | SyntaxKind::BraceClose | SyntaxKind::Eof
                ) {
                    self.bump();
                }
            }
        }
    }
}

fn with_comment(mut field: Field, comment: Option<CommentGroup>) -> Field {
    field.comment = comment;
    field
}

fn has_top_level_comma(kinds: &[SyntaxKind]) -> bool {
    let mut depth = 0u32;
    for &kind in kinds {
        match kind {
            SyntaxKind::ParenOpen | SyntaxKind::BracketOpen | SyntaxKind::BraceOpen => depth += 1,
            SyntaxKind::ParenClose | SyntaxKind::BracketClose | SyntaxKind::BraceClose => {
                depth = depth.saturating_sub(1)
            }
            SyntaxKind::Comma if depth == 0 => return true,
            _ => {}
        }
    }
    false
}

/// A token sequence containing something only a type can spell: a type
/// keyword, `~`, or `[` that is not an index (`[]T`, `[4]T`).
fn has_type_element(kinds: &[SyntaxKind]) -> bool {
    let mut prev = SyntaxKind::Eof;
    for &kind in kinds {
        let type_only = match kind {
            SyntaxKind::KwStruct
            | SyntaxKind::KwMap
            | SyntaxKind::KwChan
            | SyntaxKind::KwFunc
            | SyntaxKind::KwInterface
            | SyntaxKind::Tilde => true,
            SyntaxKind::BracketOpen => !matches!(
                prev,
                SyntaxKind::Ident | SyntaxKind::BracketClose | SyntaxKind::ParenClose
            ),
            _ => false,
        };
        if type_only {
            return true;
        }
        prev = kind;
    }
    false
}
