//! Lexer for Go source.
//!
//! Produces span-based tokens without storing text; text is sliced from
//! source only when needed.
//!
//! Post-processing on top of the Logos output:
//! - consecutive unrecognized characters coalesce into one `Garbage` token
//! - Go's automatic semicolons are inserted as zero-width `Semicolon` tokens

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

use super::syntax_kind::SyntaxKind;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }

    /// Inserted semicolons cover no text.
    pub fn is_implicit(&self) -> bool {
        self.kind == SyntaxKind::Semicolon && self.span.is_empty()
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes Go source into a vector of span-based tokens.
pub fn lex(source: &str) -> Vec<Token> {
    insert_semicolons(source, lex_raw(source))
}

fn lex_raw(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = SyntaxKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(
                        SyntaxKind::Garbage,
                        range_to_text_range(start..end),
                    ));
                }
                tokens.push(Token::new(kind, range_to_text_range(lexer.span())));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        SyntaxKind::Garbage,
                        range_to_text_range(start..source.len()),
                    ));
                }
                break;
            }
        }
    }

    tokens
}

/// Applies Go's semicolon rule: a newline (or a block comment spanning one)
/// ends the statement when the previous significant token could end one.
/// The same happens at end of input.
fn insert_semicolons(source: &str, raw: Vec<Token>) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(raw.len() + raw.len() / 4);
    let mut pending = false;

    for token in raw {
        match token.kind {
            SyntaxKind::Newline if pending => {
                tokens.push(Token::new(
                    SyntaxKind::Semicolon,
                    TextRange::empty(token.span.start()),
                ));
                pending = false;
            }
            // The comment stays ahead of the semicolon so it can trail the entry.
            SyntaxKind::BlockComment if pending && token_text(source, &token).contains('\n') => {
                tokens.push(token);
                tokens.push(Token::new(
                    SyntaxKind::Semicolon,
                    TextRange::empty(token.span.end()),
                ));
                pending = false;
                continue;
            }
            kind if kind.is_trivia() => {}
            kind => pending = kind.ends_statement(),
        }
        tokens.push(token);
    }

    if pending {
        let end = source.len();
        tokens.push(Token::new(
            SyntaxKind::Semicolon,
            range_to_text_range(end..end),
        ));
    }

    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
