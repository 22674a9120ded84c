//! Token kinds for the Go declaration lexer.
//!
//! Only the part of Go's lexical grammar that type declarations touch is
//! modelled precisely. Operators that never appear in type syntax collapse
//! into [`SyntaxKind::Operator`] so that function bodies and constant
//! expressions still lex cleanly and can be skipped.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token("...")]
    Ellipsis,

    #[token(".")]
    Dot,

    #[token("*")]
    Star,

    /// Underlying-type marker in constraints: `~int`
    #[token("~")]
    Tilde,

    /// Union separator in constraints: `int | string`
    #[token("|")]
    Pipe,

    #[token("=")]
    Equals,

    /// Channel direction: `<-chan T`, `chan<- T`
    #[token("<-")]
    Arrow,

    #[token(":")]
    Colon,

    /// Everything else Go can write between tokens we care about.
    #[token(":=")]
    #[token("==")]
    #[token("!=")]
    #[token("<=")]
    #[token(">=")]
    #[token("&&")]
    #[token("||")]
    #[token("++")]
    #[token("--")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("<<=")]
    #[token(">>=")]
    #[token("&^=")]
    #[token("<<")]
    #[token(">>")]
    #[token("&^")]
    #[token("%")]
    #[token("!")]
    #[token("<")]
    #[token(">")]
    #[token("+")]
    #[token("-")]
    #[token("/")]
    #[token("&")]
    #[token("^")]
    Operator,

    #[token("package")]
    KwPackage,

    #[token("import")]
    KwImport,

    #[token("type")]
    KwType,

    #[token("func")]
    KwFunc,

    #[token("struct")]
    KwStruct,

    #[token("interface")]
    KwInterface,

    #[token("map")]
    KwMap,

    #[token("chan")]
    KwChan,

    #[token("var")]
    KwVar,

    #[token("const")]
    KwConst,

    /// Statement keywords after which a newline ends the statement.
    #[token("return")]
    #[token("break")]
    #[token("continue")]
    #[token("fallthrough")]
    KwJump,

    /// Defined after the keywords so they take precedence.
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Ident,

    /// Integer, float and imaginary literals, loosely: digits followed by
    /// any alphanumerics, underscores and dots (`0x1F`, `1_000`, `2.5e3i`).
    #[regex(r"[0-9][0-9a-zA-Z_.]*")]
    Number,

    #[regex(r#""(?:[^"\\\n]|\\.)*""#)]
    String,

    #[regex(r"`[^`]*`")]
    RawString,

    #[regex(r"'(?:[^'\\\n]|\\.)*'")]
    Char,

    /// Horizontal whitespace (spaces, tabs, carriage returns)
    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[token("\n")]
    Newline,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*(?:[^*]|\*+[^*/])*\*+/")]
    BlockComment,

    /// Consecutive unrecognized characters coalesced into one token
    Garbage,

    /// Returned by the parser past the last token
    Eof,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | LineComment | BlockComment)
    }

    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(self, LineComment | BlockComment)
    }

    /// A newline after one of these kinds terminates the statement.
    #[inline]
    pub fn ends_statement(self) -> bool {
        matches!(
            self,
            Ident | Number | String | RawString | Char | KwJump | ParenClose | BracketClose | BraceClose
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(self, Number | String | RawString | Char)
    }
}

/// 64-bit token kind set for membership tests in the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// Tokens that can start a type.
    pub const TYPE_FIRST: TokenSet = TokenSet::new(&[
        Ident,
        Star,
        BracketOpen,
        ParenOpen,
        KwMap,
        KwChan,
        Arrow,
        KwFunc,
        KwStruct,
        KwInterface,
        Tilde,
        Ellipsis,
    ]);

    /// Where a top-level declaration can resume after an error.
    pub const DECL_RECOVERY: TokenSet = TokenSet::new(&[
        KwType, KwFunc, KwVar, KwConst, KwImport, KwPackage,
    ]);

    /// Closing delimiters of field and parameter lists.
    pub const LIST_END: TokenSet = TokenSet::new(&[ParenClose, BracketClose, BraceClose, Eof]);
}
