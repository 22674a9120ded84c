use super::lexer::{lex, token_text};

/// Format tokens without trivia (default for most tests)
fn snapshot(input: &str) -> String {
    format_tokens(input, false)
}

/// Format tokens with trivia included
fn snapshot_raw(input: &str) -> String {
    format_tokens(input, true)
}

fn format_tokens(input: &str, include_trivia: bool) -> String {
    let tokens = lex(input);
    let mut out = String::new();
    for token in tokens {
        if include_trivia || !token.kind.is_trivia() {
            out.push_str(&format!(
                "{:?} {:?}\n",
                token.kind,
                token_text(input, &token)
            ));
        }
    }
    out
}

#[test]
fn punctuation() {
    insta::assert_snapshot!(snapshot("( ) [ ] { } , ; ... . * ~ | = <- :"), @r#"
    ParenOpen "("
    ParenClose ")"
    BracketOpen "["
    BracketClose "]"
    BraceOpen "{"
    BraceClose "}"
    Comma ","
    Semicolon ";"
    Ellipsis "..."
    Dot "."
    Star "*"
    Tilde "~"
    Pipe "|"
    Equals "="
    Arrow "<-"
    Colon ":"
    "#);
}

#[test]
fn keywords_and_identifiers() {
    insta::assert_snapshot!(snapshot("type Foo struct { mapping map[string]chan int }"), @r#"
    KwType "type"
    Ident "Foo"
    KwStruct "struct"
    BraceOpen "{"
    Ident "mapping"
    KwMap "map"
    BracketOpen "["
    Ident "string"
    BracketClose "]"
    KwChan "chan"
    Ident "int"
    BraceClose "}"
    Semicolon ""
    "#);
}

#[test]
fn unicode_identifiers() {
    insta::assert_snapshot!(snapshot("Größe _x ä1"), @r#"
    Ident "Größe"
    Ident "_x"
    Ident "ä1"
    Semicolon ""
    "#);
}

#[test]
fn literals() {
    insta::assert_snapshot!(snapshot(r#"16 0x1F 2.5e3 "a\"b" `raw` 'c'"#), @r#"
    Number "16"
    Number "0x1F"
    Number "2.5e3"
    String "\"a\\\"b\""
    RawString "`raw`"
    Char "'c'"
    Semicolon ""
    "#);
}

#[test]
fn operators_collapse() {
    insta::assert_snapshot!(snapshot("a := b + c && !d"), @r#"
    Ident "a"
    Operator ":="
    Ident "b"
    Operator "+"
    Ident "c"
    Operator "&&"
    Operator "!"
    Ident "d"
    Semicolon ""
    "#);
}

#[test]
fn semicolon_after_newline() {
    insta::assert_snapshot!(snapshot("type A int\ntype B string\n"), @r#"
    KwType "type"
    Ident "A"
    Ident "int"
    Semicolon ""
    KwType "type"
    Ident "B"
    Ident "string"
    Semicolon ""
    "#);
}

#[test]
fn no_semicolon_after_open_brace() {
    insta::assert_snapshot!(snapshot("struct {\n}\n"), @r#"
    KwStruct "struct"
    BraceOpen "{"
    BraceClose "}"
    Semicolon ""
    "#);
}

#[test]
fn semicolon_precedes_line_comment_newline() {
    insta::assert_snapshot!(snapshot_raw("A int // count\n"), @r#"
    Ident "A"
    Whitespace " "
    Ident "int"
    Whitespace " "
    LineComment "// count"
    Semicolon ""
    Newline "\n"
    "#);
}

#[test]
fn multiline_block_comment_ends_statement() {
    insta::assert_snapshot!(snapshot("A /* one\ntwo */ B"), @r#"
    Ident "A"
    Semicolon ""
    Ident "B"
    Semicolon ""
    "#);
}

#[test]
fn multiline_block_comment_precedes_its_semicolon() {
    insta::assert_snapshot!(snapshot_raw("A /* one\ntwo */\nB"), @r#"
    Ident "A"
    Whitespace " "
    BlockComment "/* one\ntwo */"
    Semicolon ""
    Newline "\n"
    Ident "B"
    Semicolon ""
    "#);
}

#[test]
fn inline_block_comment_does_not() {
    insta::assert_snapshot!(snapshot("A /* one */ B"), @r#"
    Ident "A"
    Ident "B"
    Semicolon ""
    "#);
}

#[test]
fn garbage_is_coalesced() {
    insta::assert_snapshot!(snapshot("a @#$ b"), @r#"
    Ident "a"
    Garbage "@#$"
    Ident "b"
    Semicolon ""
    "#);
}

#[test]
fn inserted_semicolons_are_implicit() {
    let tokens = lex("a;\nb");
    let semis: Vec<bool> = tokens
        .iter()
        .filter(|t| t.kind == super::SyntaxKind::Semicolon)
        .map(|t| t.is_implicit())
        .collect();
    assert_eq!(semis, vec![false, true]);
}
